use super::Point3;

/// The reference point closest to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Index of the winning point in the candidate slice.
    pub index: usize,
    /// The winning point.
    pub point: Point3,
    /// Squared Euclidean distance from the query point.
    pub distance_squared: f64,
}

/// Returns the candidate closest to `from` by squared Euclidean distance.
///
/// Ties go to the first candidate in slice order. Candidates at a non-finite
/// distance never win, so the result is `None` when `candidates` is empty or
/// every distance is NaN or infinite.
#[must_use]
pub fn nearest_point(from: &Point3, candidates: &[Point3]) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;
    let mut best_dist = f64::INFINITY;

    for (index, candidate) in candidates.iter().enumerate() {
        let d = nalgebra::distance_squared(from, candidate);
        if d < best_dist {
            best_dist = d;
            best = Some(Nearest {
                index,
                point: *candidate,
                distance_squared: d,
            });
        }
    }

    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn picks_closest_candidate() {
        let refs = [Point3::new(5.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let hit = nearest_point(&Point3::origin(), &refs).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.point, Point3::new(1.0, 0.0, 0.0));
        assert!((hit.distance_squared - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn ties_resolve_to_first() {
        let refs = [
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
        ];
        let hit = nearest_point(&Point3::origin(), &refs).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn duplicates_resolve_to_first() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let hit = nearest_point(&Point3::origin(), &[p, p, p]).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn uses_all_three_axes() {
        let refs = [Point3::new(1.0, 1.0, 1.0), Point3::new(0.0, 0.0, 1.5)];
        // 3.0 vs 2.25
        let hit = nearest_point(&Point3::origin(), &refs).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn empty_candidates() {
        assert!(nearest_point(&Point3::origin(), &[]).is_none());
    }

    #[test]
    fn nan_candidates_never_win() {
        let refs = [
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];
        let hit = nearest_point(&Point3::origin(), &refs).unwrap();
        assert_eq!(hit.index, 1);

        assert!(nearest_point(&Point3::origin(), &refs[..1]).is_none());
    }

    #[test]
    fn exact_hit_is_zero_distance() {
        let refs = [Point3::new(2.0, -1.0, 4.0), Point3::new(0.5, 0.5, 0.5)];
        let hit = nearest_point(&Point3::new(2.0, -1.0, 4.0), &refs).unwrap();
        assert_eq!(hit.index, 0);
        assert!(hit.distance_squared.abs() < TOLERANCE);
    }
}
