use super::*;
use kurbo::Point;

fn segment(y: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, y));
    p.curve_to((5.0, y), (5.0, y), (10.0, y));
    p.line_to((10.0, 20.0));
    p.close_path();
    p
}

#[test]
fn scalar_and_color_midpoints() {
    assert_eq!(f64::lerp(&2.0, &4.0, 0.5), Some(3.0));

    let c = Rgba::lerp(&Rgba::new(0.0, 0.0, 0.0, 0.0), &Rgba::new(1.0, 0.5, 0.0, 1.0), 0.5)
        .unwrap();
    assert_eq!(c, Rgba::new(0.5, 0.25, 0.0, 0.5));
}

#[test]
fn path_morph_moves_every_point() {
    let mid = BezPath::lerp(&segment(0.0), &segment(10.0), 0.5).unwrap();
    match mid.elements()[0] {
        PathEl::MoveTo(p) => assert_eq!(p, Point::new(0.0, 5.0)),
        ref el => panic!("unexpected {el:?}"),
    }
    match mid.elements()[1] {
        PathEl::CurveTo(a, b, c) => {
            assert_eq!(a.y, 5.0);
            assert_eq!(b.y, 5.0);
            assert_eq!(c, Point::new(10.0, 5.0));
        }
        ref el => panic!("unexpected {el:?}"),
    }
    assert_eq!(mid.elements()[3], PathEl::ClosePath);
}

#[test]
fn path_morph_requires_matching_structure() {
    let mut origin = BezPath::new();
    origin.move_to((0.0, 0.0));
    assert!(BezPath::lerp(&origin, &segment(3.0), 0.5).is_none());

    let mut lines = BezPath::new();
    lines.move_to((0.0, 0.0));
    lines.line_to((1.0, 1.0));
    lines.line_to((1.0, 1.0));
    lines.close_path();
    assert!(BezPath::lerp(&lines, &segment(3.0), 0.5).is_none());
}

#[test]
fn affine_endpoints_are_exact() {
    let a = Affine::IDENTITY;
    let b = Affine::translate((8.0, -4.0));
    assert_eq!(Affine::lerp(&a, &b, 0.0), Some(a));
    assert_eq!(Affine::lerp(&a, &b, 1.0), Some(b));
}
