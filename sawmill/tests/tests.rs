#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use sawmill::io;
    use sawmill::io::output::SessionOutput;
    use sawmill::script::{self, SessionEvent, SessionScript};
    use timber_cut::dimensions::estimate_price;
    use timber_cut::entities::WoodType;
    use timber_cut::io::{CUT_LIST_HEADER, import, rows_to_csv};
    use timber_cut::util::SawmillConfig;

    /// Replays `events_json` with the saw switched on first
    fn run(events_json: &str) -> anyhow::Result<SessionOutput> {
        let mut events = vec![SessionEvent::ToggleSaw];
        events.extend(serde_json::from_str::<Vec<SessionEvent>>(events_json)?);
        let script = SessionScript {
            catalog: None,
            events,
        };
        script::replay(SawmillConfig::default(), &script)
    }

    #[test]
    fn demo_session() {
        let session: SessionScript = io::read_json(Path::new("../assets/demo_session.json")).unwrap();
        let output = script::replay(SawmillConfig::default(), &session).unwrap();

        assert_eq!(output.material, WoodType::Oak);
        assert_eq!(output.n_cuts, 1);
        assert_eq!(output.catalog.pieces.len(), 2);

        //the miss at 250ms has expired by the end of the script
        assert_eq!(output.notices.len(), 1);
        assert_eq!(output.notices[0].at_ms, 250);
        assert_eq!(output.notices[0].message, "Missed!");
        assert_eq!(output.active_notice, None);

        //negative width
        assert_eq!(output.rejected.len(), 1);
        assert_eq!(output.rejected[0].event_index, 10);

        let rows = &output.cut_list;
        assert_eq!(rows[0].kind, "Plank/Slab");
        assert!(approx_eq!(f64, rows[0].length_ft, 3.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, rows[0].width_in, 5.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, rows[0].thickness_in, 1.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, rows[0].board_feet, 2.06, epsilon = 1e-9));

        assert!(approx_eq!(f64, rows[1].length_ft, 3.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, rows[1].width_in, 11.25, epsilon = 1e-9));
        assert!(approx_eq!(f64, rows[1].thickness_in, 0.75, epsilon = 1e-9));
        assert!(approx_eq!(f64, rows[1].board_feet, 2.11, epsilon = 1e-9));

        let catalog = import(&output.catalog).unwrap();
        assert_eq!(output.price, estimate_price(&catalog, 1.8, 200.0));
    }

    #[test_case(r#"[{"type": "cut"}]"#, 2, 1, 0; "cut at the origin")]
    #[test_case(r#"[{"type": "cut"}, {"type": "reset"}]"#, 1, 1, 0; "reset after cut")]
    #[test_case(r#"[{"type": "delete", "index": 0}, {"type": "cut"}, {"type": "apply_size", "label": "2x4"}]"#, 0, 0, 1; "empty catalog")]
    #[test_case(r#"[{"type": "apply_size", "label": "3x3"}, {"type": "select", "index": 4}]"#, 1, 0, 2; "unknown size and index")]
    #[test_case(r#"[{"type": "saw_pose", "x": 1.5, "z": 0.0, "rotation": 1.5707963}, {"type": "cut"}]"#, 1, 0, 0; "cut beside the outline")]
    #[test_case(r#"[{"type": "cut"}, {"type": "saw_pose", "x": 0.0, "z": 1.4, "rotation": 0.0}, {"type": "cut"}, {"type": "cut"}]"#, 3, 2, 0; "third cut beside the hit half")]
    #[test_case(r#"[{"type": "toggle_saw"}, {"type": "cut"}]"#, 1, 0, 1; "inactive saw")]
    fn replay_counts(events: &str, n_pieces: usize, n_cuts: usize, n_rejected: usize) {
        let output = run(events).unwrap();
        assert_eq!(output.catalog.pieces.len(), n_pieces);
        assert_eq!(output.cut_list.len(), n_pieces);
        assert_eq!(output.n_cuts, n_cuts);
        assert_eq!(output.rejected.len(), n_rejected);
    }

    #[test_case(0, Some("Missed!"); "right away")]
    #[test_case(999, Some("Missed!"); "just before expiry")]
    #[test_case(1000, None; "at expiry")]
    fn notice_expiry(wait_ms: u64, expected: Option<&str>) {
        let events = format!(
            r#"[{{"type": "delete", "index": 0}}, {{"type": "cut"}}, {{"type": "wait", "ms": {wait_ms}}}]"#
        );
        let output = run(&events).unwrap();
        assert_eq!(output.active_notice.as_deref(), expected);
    }

    #[test]
    fn failed_cut_notice() {
        let output = run(
            r#"[{"type": "saw_pose", "x": 1.5, "z": 0.0, "rotation": 1.5707963}, {"type": "cut"}]"#,
        )
        .unwrap();
        assert_eq!(output.notices[0].message, "Cut failed!");
    }

    #[test]
    fn starting_catalog() {
        let script: SessionScript = serde_json::from_str(
            r#"{
                "catalog": {"pieces": [
                    {"points": [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]], "thickness": 1.0, "position": [5.0, 5.0], "kind": "log"}
                ]},
                "events": [{"type": "toggle_saw"}, {"type": "saw_pose", "x": 5.0, "z": 5.0, "rotation": 0.0}, {"type": "cut"}]
            }"#,
        )
        .unwrap();
        let output = script::replay(SawmillConfig::default(), &script).unwrap();
        assert_eq!(output.n_cuts, 1);
        assert!(output.cut_list.iter().all(|r| r.kind == "Plank/Slab"));
        assert!(
            output
                .catalog
                .pieces
                .iter()
                .all(|p| approx_eq!(f64, p.position.0, 5.0, epsilon = 1e-9))
        );
    }

    #[test]
    fn malformed_catalog_aborts() {
        let bad = r#"{"pieces": [{"points": [[0.0, 0.0], [1.0, 0.0]], "thickness": 1.0, "position": [0.0, 0.0], "kind": "plank"}]}"#;

        let script: SessionScript =
            serde_json::from_str(&format!(r#"{{"catalog": {bad}, "events": []}}"#)).unwrap();
        assert!(script::replay(SawmillConfig::default(), &script).is_err());

        assert!(run(&format!(r#"[{{"type": "cut"}}, {{"type": "load", "catalog": {bad}}}]"#)).is_err());
    }

    #[test]
    fn outputs_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(r#"[{"type": "set_material", "material": "pine"}, {"type": "cut"}]"#).unwrap();

        let csv_path = dir.path().join("cut_list.csv");
        io::write_csv(&rows_to_csv(&output.cut_list), &csv_path).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CUT_LIST_HEADER);
        assert_eq!(lines[1], "Piece #1,Plank/Slab,4.00,24.00,2.00,16.00");
        assert_eq!(lines.len(), 3);

        let json_path = dir.path().join("session.json");
        io::write_json(&output, &json_path).unwrap();
        let read: SessionOutput = io::read_json(&json_path).unwrap();
        assert_eq!(read.price, 160);
        assert_eq!(read.catalog, output.catalog);
        assert_eq!(read.config, SawmillConfig::default());
    }
}
