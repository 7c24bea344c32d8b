use super::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn trapezoid() -> Polygon {
    Polygon::from_coords(&[(150.0, 150.0), (350.0, 150.0), (325.0, 300.0), (175.0, 300.0)])
        .unwrap()
}

#[test]
fn trapezoid_interior_and_exterior() {
    let t = trapezoid();
    assert!(t.contains(vector![250.0, 200.0]));
    assert!(!t.contains(vector![10.0, 10.0]));
    // Below the bottom edge and beyond the slanted sides.
    assert!(!t.contains(vector![250.0, 310.0]));
    assert!(!t.contains(vector![160.0, 290.0]));
    assert!(!t.contains(vector![340.0, 290.0]));
}

#[test]
fn horizontal_top_edge_counts_inside() {
    // Only the right edge crosses the ray from (250,150); the top edge is skipped.
    let t = trapezoid();
    assert!(t.contains(vector![250.0, 150.0]));
    assert!(t.contains(vector![150.0, 150.0]));
}

#[test]
fn fewer_than_three_vertices() {
    assert!(Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).is_none());
    let line = [vector![0.0, 0.0], vector![10.0, 10.0]];
    assert!(!point_in_polygon(vector![5.0, 5.0], &line));
    assert!(!point_in_polygon(vector![5.0, 5.0], &[]));
}

#[test]
fn non_finite_vertices_rejected() {
    assert!(Polygon::from_coords(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 0.0)]).is_none());
}

#[test]
fn concave_polygon_notch() {
    // U shape opening upward; the notch is outside.
    let u = Polygon::from_coords(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 30.0),
        (20.0, 30.0),
        (20.0, 0.0),
        (30.0, 0.0),
        (30.0, 40.0),
        (0.0, 40.0),
    ])
    .unwrap();
    assert!(!u.contains(vector![15.0, 10.0]));
    assert!(u.contains(vector![5.0, 10.0]));
    assert!(u.contains(vector![15.0, 35.0]));
}

#[test]
fn near_segment_uses_infinite_line() {
    let top = Segment::from_coords(150.0, 150.0, 350.0, 150.0);
    assert!(point_near_segment(vector![250.0, 150.0], &top, 5.0));
    assert!(point_near_segment(vector![250.0, 154.9], &top, 5.0));
    assert!(!point_near_segment(vector![250.0, 155.0], &top, 5.0));
    // Far beyond the right endpoint but collinear.
    assert!(point_near_segment(vector![1000.0, 150.0], &top, 5.0));
}

#[test]
fn slanted_line_distance() {
    let left = Segment::from_coords(150.0, 150.0, 200.0, 300.0);
    // (250,200): |150*250 - 50*200 + 200*150 - 300*150| / sqrt(150²+50²)
    let expected = 12500.0 / (25000.0f64).sqrt();
    assert!((left.line_distance(vector![250.0, 200.0]) - expected).abs() < 1e-9);
}

#[test]
fn degenerate_segment_is_never_near() {
    let dot = Segment::from_coords(10.0, 10.0, 10.0, 10.0);
    assert!(dot.is_degenerate());
    assert!(!point_near_segment(vector![10.0, 10.0], &dot, 5.0));
    assert!(!point_near_segment(vector![11.0, 10.0], &dot, 5.0));
}

#[test]
fn polygon_edges_wrap() {
    let t = trapezoid();
    let last = t.edge(3).unwrap();
    assert_eq!(last.a, vector![175.0, 300.0]);
    assert_eq!(last.b, vector![150.0, 150.0]);
    assert!(t.edge(4).is_none());
}

#[test]
fn points_codec() {
    let t = parse_points("150,150 350,150 325,300 175,300").unwrap();
    assert_eq!(t, trapezoid());
    assert_eq!(format_points(&t), "150,150 350,150 325,300 175,300");

    let spaced = parse_points("  0,0\n10.5,0   5,-7.25 ").unwrap();
    assert_eq!(spaced.vertices()[2], vector![5.0, -7.25]);
    assert_eq!(format_points(&spaced), "0,0 10.5,0 5,-7.25");
}

#[test]
fn points_codec_errors() {
    assert_eq!(
        parse_points("1,1 2;2 3,3"),
        Err(PointsError::MalformedPair {
            index: 1,
            token: "2;2".into()
        })
    );
    assert!(matches!(
        parse_points("1,1,1 2,2 3,3"),
        Err(PointsError::MalformedPair { index: 0, .. })
    ));
    assert!(matches!(
        parse_points("1,1 2,abc 3,3"),
        Err(PointsError::BadNumber { index: 1, .. })
    ));
    assert!(matches!(
        parse_points("1,1 inf,2 3,3"),
        Err(PointsError::BadNumber { index: 1, .. })
    ));
    assert_eq!(
        parse_points("1,1 2,2"),
        Err(PointsError::TooFewVertices { count: 2 })
    );
    assert_eq!(parse_points(""), Err(PointsError::TooFewVertices { count: 0 }));
}

#[test]
fn radial_draws_are_replayable() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 12 },
        ..RadialCfg::default()
    };
    let a = draw_polygon_radial(cfg, ReplayToken::new(7, 3)).unwrap();
    let b = draw_polygon_radial(cfg, ReplayToken::new(7, 3)).unwrap();
    let c = draw_polygon_radial(cfg, ReplayToken::new(7, 4)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!((3..=12).contains(&a.len()));
}

proptest! {
    #[test]
    fn two_vertex_input_is_never_inside(
        ax in -1e3f64..1e3, ay in -1e3f64..1e3,
        bx in -1e3f64..1e3, by in -1e3f64..1e3,
        px in -1e3f64..1e3, py in -1e3f64..1e3,
    ) {
        let pair = [vector![ax, ay], vector![bx, by]];
        prop_assert!(!point_in_polygon(vector![px, py], &pair));
        prop_assert!(!point_in_polygon(vector![px, py], &pair[..1]));
    }

    #[test]
    fn radial_polygons_contain_their_center(seed in any::<u64>(), index in 0u64..64) {
        let cfg = RadialCfg::default();
        let poly = draw_polygon_radial(cfg, ReplayToken::new(seed, index)).unwrap();
        // Min radius is 75 with default jitter; nudge off any vertex ray.
        prop_assert!(poly.contains(cfg.center + Vector2::new(0.25, 0.125)));
    }

    #[test]
    fn containment_is_idempotent(x in -50.0f64..550.0, y in -50.0f64..550.0) {
        let t = trapezoid();
        let p = vector![x, y];
        prop_assert_eq!(t.contains(p), t.contains(p));
    }

    #[test]
    fn far_points_are_outside(x in 400.0f64..1e6, y in -1e6f64..1e6) {
        prop_assert!(!trapezoid().contains(vector![x, y]));
    }

    #[test]
    fn collinear_points_are_near(t in -100.0f64..100.0) {
        let seg = Segment::from_coords(150.0, 150.0, 200.0, 300.0);
        let p = seg.a + (seg.b - seg.a) * t;
        prop_assert!(point_near_segment(p, &seg, 5.0));
    }
}
