use crate::geom2::Ring;

/// `perimeter(test) / perimeter(reference)`.
pub fn perimeter_ratio(test: &Ring, reference: &Ring) -> f64 {
    test.perimeter() / reference.perimeter()
}

/// Euclidean distance between the area centroids.
pub fn centroid_distance(test: &Ring, reference: &Ring) -> f64 {
    (test.centroid() - reference.centroid()).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_ratio_and_centroid_shift() {
        let sq = Ring::from_xy(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]).unwrap();
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
        assert_eq!(perimeter_ratio(&notch, &sq), 22.0 / 20.0);
        assert_eq!(perimeter_ratio(&sq, &sq), 1.0);
        assert_eq!(centroid_distance(&sq, &sq.translated(3.0, 4.0)), 5.0);
    }
}
