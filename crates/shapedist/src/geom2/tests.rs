use super::*;
use crate::error::Error;
use nalgebra::vector;

fn square() -> Ring {
    Ring::from_xy(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0), (0.0, 0.0)]).unwrap()
}

#[test]
fn orientation_left_right_colinear() {
    let s = Seg2::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert_eq!(s.orientation(vector![2.0, 1.0]), Orientation::Left);
    assert_eq!(s.orientation(vector![2.0, -1.0]), Orientation::Right);
    assert_eq!(s.orientation(vector![3.0, 0.0]), Orientation::Colinear);
    // Cross product 0.0004 rounds to zero.
    assert_eq!(s.orientation(vector![2.0, 0.0004]), Orientation::Colinear);
    assert_eq!(s.orientation(vector![2.0, 0.002]), Orientation::Left);
}

#[test]
fn angle_between_segments() {
    let a = Seg2::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let b = Seg2::new(vector![1.0, 0.0], vector![1.0, 3.0]);
    let c = Seg2::new(vector![1.0, 0.0], vector![2.0, 0.0]);
    assert!((a.angle_to(&b).unwrap() - 90.0).abs() < 1e-12);
    assert!(a.angle_to(&c).unwrap().abs() < 1e-12);
    let back = Seg2::new(vector![1.0, 0.0], vector![0.0, 0.0]);
    assert!((a.angle_to(&back).unwrap() - 180.0).abs() < 1e-12);
}

#[test]
fn angle_to_zero_length_is_degenerate() {
    let a = Seg2::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let z = Seg2::new(vector![1.0, 0.0], vector![1.0, 0.0]);
    assert!(matches!(a.angle_to(&z), Err(Error::DegenerateGeometry(_))));
}

#[test]
fn squared_distance_is_not_rooted() {
    assert_eq!(distance_sq(vector![0.0, 0.0], vector![3.0, 4.0]), 25.0);
}

#[test]
fn point_to_segment_distance() {
    let s = Seg2::new(vector![0.0, 0.0], vector![4.0, 0.0]);
    assert_eq!(s.distance_to_point(vector![2.0, 3.0]), 3.0);
    assert_eq!(s.distance_to_point(vector![7.0, 4.0]), 5.0);
    assert_eq!(s.distance_to_point(vector![-3.0, 0.0]), 3.0);
}

#[test]
fn ring_measures() {
    let sq = square();
    assert_eq!(sq.vertex_count(), 4);
    assert_eq!(sq.perimeter(), 20.0);
    assert_eq!(sq.area(), 25.0);
    assert!(sq.is_ccw());
    assert_eq!(sq.centroid(), vector![2.5, 2.5]);
    assert_eq!(sq.max_edge_length(), 5.0);

    let notch = Ring::from_xy(&[
        (0.0, 0.0),
        (5.0, 0.0),
        (5.0, 5.0),
        (4.0, 5.0),
        (4.0, 6.0),
        (2.0, 6.0),
        (2.0, 5.0),
        (0.0, 5.0),
    ])
    .unwrap();
    assert_eq!(notch.perimeter(), 22.0);
    assert_eq!(notch.area(), 27.0);
}

#[test]
fn ring_closes_open_input() {
    let r = Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
    assert_eq!(r.vertices().len(), 4);
    assert_eq!(r.vertices()[0], r.vertices()[3]);
}

#[test]
fn ring_rejects_degenerate_input() {
    assert!(matches!(
        Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]),
        Err(Error::DegenerateGeometry(_))
    ));
    assert!(matches!(
        Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
        Err(Error::DegenerateGeometry(_))
    ));
    assert!(matches!(
        Ring::from_xy(&[(0.0, 0.0), (f64::NAN, 0.0), (0.0, 1.0)]),
        Err(Error::DegenerateGeometry(_))
    ));
    assert!(matches!(Ring::new(vec![]), Err(Error::DegenerateGeometry(_))));
}

#[test]
fn ring_transforms() {
    let sq = square();
    let rev = sq.reversed();
    assert!(!rev.is_ccw());
    assert_eq!(rev.area(), sq.area());

    let rot = sq.rotated_start(1);
    assert_eq!(rot.vertices()[0], vector![5.0, 0.0]);
    assert_eq!(rot.vertices()[4], vector![5.0, 0.0]);
    assert_eq!(rot.perimeter(), 20.0);

    let big = sq.scaled(10.0).unwrap();
    assert_eq!(big.perimeter(), 200.0);
    assert!(sq.scaled(0.0).is_err());

    let moved = sq.translated(1.0, 2.0);
    assert_eq!(moved.centroid(), vector![3.5, 4.5]);

    let more = sq.with_midpoint(0);
    assert_eq!(more.vertex_count(), 5);
    assert_eq!(more.vertices()[1], vector![2.5, 0.0]);
    assert_eq!(more.perimeter(), 20.0);
}
