//! Euclidean distances and leg feasibility.

use crate::models::{Point, PointSet};

/// Distance queries over a [`PointSet`], addressed by point id.
///
/// Distances are computed from coordinates on demand; nothing is cached, so
/// an oracle costs nothing to create and works for any number of points.
///
/// # Examples
///
/// ```
/// use range_tour::models::{Point, PointSet};
/// use range_tour::distance::DistanceOracle;
///
/// let set = PointSet::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(3.0, 4.0), Point::new(6.0, 8.0)],
/// ).unwrap();
/// let oracle = DistanceOracle::new(&set);
/// assert!((oracle.distance(0, 1) - 5.0).abs() < 1e-10);
///
/// // 5 out + 5 back fits in 10, 10 out + 10 back does not
/// assert_eq!(oracle.feasible_leg_distance(0, 1, 10.0, 10.0), Some(5.0));
/// assert_eq!(oracle.feasible_leg_distance(0, 2, 10.0, 10.0), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DistanceOracle<'a> {
    points: &'a PointSet,
}

impl<'a> DistanceOracle<'a> {
    /// Creates an oracle over the given point set.
    pub fn new(points: &'a PointSet) -> Self {
        Self { points }
    }

    /// The point set this oracle measures.
    pub fn point_set(&self) -> &'a PointSet {
        self.points
    }

    /// Location of point `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn point(&self, id: usize) -> Point {
        self.points.points()[id]
    }

    /// Euclidean distance from point `a` to point `b`.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        let pts = self.points.points();
        pts[a].distance_to(&pts[b])
    }

    /// Distance from `from` to `to`, if the move leaves enough charge to get
    /// back to the depot afterwards.
    ///
    /// A leg is feasible when `distance(from, to) + distance(to, depot)` does
    /// not exceed `remaining_charge`. The check is evaluated as
    /// `remaining_charge - leg - home >= 0`, which is the same arithmetic a
    /// replay performs when it drains the charge leg by leg, so a leg judged
    /// feasible here can never come out a rounding error short on replay.
    ///
    /// `capacity` does not enter the check; the bound that matters is the
    /// charge left right now.
    pub fn feasible_leg_distance(
        &self,
        from: usize,
        to: usize,
        remaining_charge: f64,
        _capacity: f64,
    ) -> Option<f64> {
        let leg = self.distance(from, to);
        let home = self.distance(to, PointSet::DEPOT);
        if remaining_charge - leg - home >= 0.0 {
            Some(leg)
        } else {
            None
        }
    }

    /// Length of the trip depot → `id` → depot.
    pub fn round_trip(&self, id: usize) -> f64 {
        self.distance(PointSet::DEPOT, id) + self.distance(id, PointSet::DEPOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_set() -> PointSet {
        PointSet::new(
            Point::new(0.0, 0.0),
            vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(-1.0, 0.0)],
        )
        .expect("valid")
    }

    #[test]
    fn test_distance() {
        let set = line_set();
        let oracle = DistanceOracle::new(&set);
        assert!((oracle.distance(0, 1) - 1.0).abs() < 1e-10);
        assert!((oracle.distance(2, 3) - 3.0).abs() < 1e-10);
        assert_eq!(oracle.distance(1, 1), 0.0);
        assert_eq!(oracle.distance(1, 3), oracle.distance(3, 1));
    }

    #[test]
    fn test_feasible_includes_return_home() {
        let set = line_set();
        let oracle = DistanceOracle::new(&set);
        // 1 -> 2 costs 1, 2 -> depot costs 2: needs 3
        assert_eq!(oracle.feasible_leg_distance(1, 2, 3.0, 10.0), Some(1.0));
        assert_eq!(oracle.feasible_leg_distance(1, 2, 2.9, 10.0), None);
    }

    #[test]
    fn test_feasible_boundary_is_inclusive() {
        let set = line_set();
        let oracle = DistanceOracle::new(&set);
        // exactly the round trip
        assert_eq!(oracle.feasible_leg_distance(0, 2, 4.0, 4.0), Some(2.0));
        assert_eq!(
            oracle.feasible_leg_distance(0, 2, 4.0 - 1e-12, 4.0),
            None
        );
    }

    #[test]
    fn test_feasible_with_nan_charge() {
        let set = line_set();
        let oracle = DistanceOracle::new(&set);
        assert_eq!(oracle.feasible_leg_distance(0, 1, f64::NAN, 3.0), None);
    }

    #[test]
    fn test_round_trip() {
        let set = line_set();
        let oracle = DistanceOracle::new(&set);
        assert!((oracle.round_trip(2) - 4.0).abs() < 1e-10);
        assert!((oracle.round_trip(3) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_lookup() {
        let set = line_set();
        let oracle = DistanceOracle::new(&set);
        assert_eq!(oracle.point(3), Point::new(-1.0, 0.0));
        assert_eq!(oracle.point_set().size(), 3);
    }
}
