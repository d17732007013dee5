#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use test_case::test_case;

    use timber_cut::cut::{CutEngine, CutRequest};
    use timber_cut::dimensions::{
        DimAxis, Dimensions, apply_size_preset, board_feet, estimate_price, set_dimension, units,
    };
    use timber_cut::entities::{Catalog, Piece, PieceKind, StandardSize, WoodType};
    use timber_cut::geometry::primitives::{Point, Polygon};
    use timber_cut::io;
    use timber_cut::session::Configurator;
    use timber_cut::util::{CutConfig, SawmillConfig};

    fn default_catalog() -> Catalog {
        Catalog::with_piece(Configurator::default_piece(&SawmillConfig::default()).unwrap())
    }

    #[test]
    fn board_feet_of_a_standard_board() {
        assert_approx_eq!(f64, board_feet(8.0, 12.0, 1.0), 8.0);
        assert_approx_eq!(f64, board_feet(12.0, 6.0, 2.0), 12.0);
    }

    #[test]
    fn two_by_four_preset_keeps_length() {
        let mut catalog = default_catalog();
        let key = catalog.first_key().unwrap();
        let length_before = catalog.get(key).unwrap().bounds().depth();

        let size = StandardSize::by_label("2x4").unwrap();
        apply_size_preset(&mut catalog, key, &size).unwrap();

        let piece = catalog.get(key).unwrap();
        assert_approx_eq!(f64, piece.bounds().width(), 3.5 / 12.0);
        assert_approx_eq!(f64, piece.thickness(), 1.5 / 10.0);
        assert_approx_eq!(f64, piece.bounds().depth(), length_before);
        assert_eq!(piece.kind, PieceKind::Plank);
    }

    #[test]
    fn size_preset_turns_cut_piece_back_into_plank() {
        let mut catalog = default_catalog();
        let key = catalog.first_key().unwrap();
        let mut piece = catalog.get(key).unwrap().clone();
        piece.kind = PieceKind::Custom;
        catalog.reset(piece);
        let key = catalog.first_key().unwrap();

        apply_size_preset(&mut catalog, key, &StandardSize::by_label("1×12").unwrap()).unwrap();

        let piece = catalog.get(key).unwrap();
        assert_eq!(piece.kind, PieceKind::Plank);
        assert_approx_eq!(f64, units::width_to_inches(piece.bounds().width()), 11.25);
        assert_approx_eq!(f64, units::thickness_to_inches(piece.thickness()), 0.75);
    }

    #[test]
    fn unknown_size_label() {
        assert_eq!(StandardSize::by_label("3x7"), None);
    }

    #[test_case(DimAxis::Length, 6.5; "length in feet")]
    #[test_case(DimAxis::Length, 1.0; "short length")]
    #[test_case(DimAxis::Width, 9.0; "width in inches")]
    #[test_case(DimAxis::Width, 37.5; "wide")]
    #[test_case(DimAxis::Thickness, 3.0; "thickness in inches")]
    fn dimension_round_trip(axis: DimAxis, value: f64) {
        let mut configurator = Configurator::new(SawmillConfig::default()).unwrap();
        configurator.set_dimension(axis, value).unwrap();

        let dims = configurator.active_dimensions().unwrap();
        let read_back = match axis {
            DimAxis::Length => dims.length_ft,
            DimAxis::Width => dims.width_in,
            DimAxis::Thickness => dims.thickness_in,
        };
        assert_approx_eq!(f64, read_back, value, epsilon = 1e-9);
    }

    #[test]
    fn width_edit_scales_only_x() {
        let mut catalog = default_catalog();
        let key = catalog.first_key().unwrap();
        set_dimension(&mut catalog, key, DimAxis::Width, 1.0).unwrap();

        let piece = catalog.get(key).unwrap();
        assert_approx_eq!(f64, piece.bounds().width(), 1.0);
        assert_approx_eq!(f64, piece.bounds().depth(), 4.0);
        assert_approx_eq!(f64, piece.thickness(), 0.2);
    }

    #[test]
    fn dimensions_of_default_plank() {
        let catalog = default_catalog();
        let dims = Dimensions::of(catalog.selected().unwrap());
        assert_approx_eq!(f64, dims.length_ft, 8.0);
        assert_approx_eq!(f64, dims.width_in, 24.0);
        assert_approx_eq!(f64, dims.thickness_in, 2.0, epsilon = 1e-9);
        assert_approx_eq!(f64, dims.board_feet, 32.0, epsilon = 1e-9);
    }

    #[test]
    fn log_label_shows_diameter() {
        let profile = Polygon::rectangle(2.0, 4.0).unwrap();
        let log = Piece::try_new(profile, 1.0, Point(0.0, 0.0), PieceKind::Log).unwrap();
        assert_approx_eq!(f64, Dimensions::label_width_in(&log), 10.0);
    }

    #[test_case(WoodType::Walnut, 200)]
    #[test_case(WoodType::Pine, 80)]
    #[test_case(WoodType::Teak, 240)]
    fn price_of_default_plank(material: WoodType, expected: u64) {
        let catalog = default_catalog();
        assert_eq!(estimate_price(&catalog, material.price_multiplier(), 200.0), expected);
    }

    #[test]
    fn price_ignores_cross_section() {
        let mut catalog = default_catalog();
        let before = estimate_price(&catalog, 1.0, 200.0);

        //cutting doubles the piece count, and with it the volume proxy
        CutEngine::new(CutConfig::default())
            .cut(&mut catalog, &CutRequest::default(), "#000000")
            .unwrap();
        assert_eq!(estimate_price(&catalog, 1.0, 200.0), 2 * before);
    }

    #[test]
    fn cut_list_of_default_plank() {
        let catalog = default_catalog();
        let csv = io::cut_list_csv(&catalog);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID,Type,Length (ft),Width (in),Thickness (in),Board Feet",
                "Piece #1,Plank/Slab,8.00,24.00,2.00,32.00",
            ]
        );
    }

    #[test]
    fn cut_list_after_cut() {
        let mut catalog = default_catalog();
        let key = catalog.first_key().unwrap();
        let size = StandardSize::by_label("2x4").unwrap();
        apply_size_preset(&mut catalog, key, &size).unwrap();
        CutEngine::new(CutConfig::default())
            .cut(&mut catalog, &CutRequest::default(), "#000000")
            .unwrap();

        let rows = io::cut_list(&catalog);
        assert_eq!(rows.len(), 2);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.label, format!("Piece #{}", i + 1));
            assert_eq!(row.kind, "Plank/Slab");
            assert_approx_eq!(f64, row.length_ft, 4.0);
            assert_approx_eq!(f64, row.width_in, 3.5);
            assert_approx_eq!(f64, row.thickness_in, 1.5);
            assert_approx_eq!(f64, row.board_feet, 1.75);
        }
    }
}
