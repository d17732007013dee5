#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};
    use test_case::test_case;

    use timber_cut::geometry::geo_enums::Winding;
    use timber_cut::geometry::geo_traits::{CollidesWith, Shape};
    use timber_cut::geometry::primitives::{Line, Point, Polygon};
    use timber_cut::geometry::slice_polygon;

    fn outline(name: &str) -> Vec<Point> {
        match name {
            "square" => vec![
                Point(-1.0, -1.0),
                Point(1.0, -1.0),
                Point(1.0, 1.0),
                Point(-1.0, 1.0),
            ],
            "triangle" => vec![Point(0.0, 0.0), Point(4.0, 0.0), Point(0.0, 3.0)],
            "hexagon" => (0..6)
                .map(|i| {
                    let a = i as f64 * std::f64::consts::PI / 3.0;
                    Point(a.cos(), a.sin())
                })
                .collect(),
            _ => unreachable!("unknown outline {name}"),
        }
    }

    fn line(name: &str) -> Line {
        match name {
            "horizontal" => Line::through(Point(0.0, 0.3), Point(1.0, 0.0), 10.0),
            "vertical" => Line::through(Point(0.2, 0.0), Point(0.0, 1.0), 10.0),
            "oblique" => Line::through(Point(0.1, 0.0), Point(1.0, 2.0), 10.0),
            _ => unreachable!("unknown line {name}"),
        }
    }

    #[test_case("square", "horizontal")]
    #[test_case("square", "vertical")]
    #[test_case("square", "oblique")]
    #[test_case("triangle", "horizontal")]
    #[test_case("triangle", "vertical")]
    #[test_case("triangle", "oblique")]
    #[test_case("hexagon", "horizontal")]
    #[test_case("hexagon", "vertical")]
    #[test_case("hexagon", "oblique")]
    fn slice_conserves_boundary_and_area(outline_name: &str, line_name: &str) {
        let points = outline(outline_name);
        let line = line(line_name);

        let (left, right) = slice_polygon(&points, line.start, line.end).unwrap();

        //every original vertex ends up in exactly one half, the two seam points in both
        assert_eq!(left.len() + right.len(), points.len() + 4);
        for p in &points {
            assert!(left.contains(p) ^ right.contains(p), "{p:?} not partitioned");
        }
        let shared = left.iter().filter(|p| right.contains(p)).count();
        assert_eq!(shared, 2);

        let original = Polygon::try_new(points).unwrap();
        let (left, right) = original.slice(&line).unwrap();
        assert!(approx_eq!(
            f64,
            original.area(),
            left.area() + right.area(),
            epsilon = 1e-9
        ));
        assert_eq!(left.winding(), Winding::CounterClockwise);
        assert_eq!(right.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn clockwise_input_is_normalized() {
        let mut points = outline("square");
        points.reverse();
        let polygon = Polygon::try_new(points).unwrap();
        assert_eq!(polygon.winding(), Winding::CounterClockwise);
        assert_approx_eq!(f64, polygon.area(), 4.0);
    }

    #[test_case(vec![Point(0.0, 0.0), Point(1.0, 0.0)]; "too few points")]
    #[test_case(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)]; "collinear")]
    #[test_case(vec![Point(0.0, 0.0), Point(f64::NAN, 0.0), Point(0.0, 1.0)]; "not finite")]
    fn invalid_polygons_are_rejected(points: Vec<Point>) {
        assert!(Polygon::try_new(points).is_err());
    }

    #[test]
    fn slice_along_an_edge_fails() {
        let polygon = Polygon::try_new(outline("square")).unwrap();
        let along_bottom = Line::through(Point(0.0, -1.0), Point(1.0, 0.0), 10.0);
        assert!(polygon.slice(&along_bottom).is_none());
    }

    #[test]
    fn recentered_polygon_has_centroid_at_origin() {
        let polygon = Polygon::try_new(outline("triangle")).unwrap().recentered();
        let c = polygon.centroid();
        assert_approx_eq!(f64, c.0, 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, c.1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn point_in_polygon() {
        let triangle = Polygon::try_new(outline("triangle")).unwrap();
        assert!(triangle.collides_with(&Point(1.0, 1.0)));
        assert!(!triangle.collides_with(&Point(3.0, 2.0)));
        assert!(!triangle.collides_with(&Point(-1.0, 1.0)));
    }

    #[test]
    fn bbox_matches_extents() {
        let hexagon = Polygon::try_new(outline("hexagon")).unwrap();
        let bbox = hexagon.bbox();
        assert_approx_eq!(f64, bbox.width(), 2.0);
        assert_approx_eq!(f64, bbox.depth(), 3.0_f64.sqrt(), epsilon = 1e-12);
    }
}
