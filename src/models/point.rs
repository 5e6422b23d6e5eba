//! Point and point set types.

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use range_tour::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The depot plus every point to visit.
///
/// The depot always has id 0; the remaining points get ids `1..=N` in the
/// order they were supplied. A point set cannot be modified once built.
///
/// # Examples
///
/// ```
/// use range_tour::models::{Point, PointSet};
///
/// let set = PointSet::new(
///     Point::new(0.5, 0.5),
///     vec![Point::new(0.1, 0.2), Point::new(0.9, 0.4)],
/// ).unwrap();
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.depot_id(), 0);
/// assert_eq!(set.get(2).unwrap(), Point::new(0.9, 0.4));
/// assert!(set.get(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointSetData", into = "PointSetData")]
pub struct PointSet {
    // depot first, then points 1..=N
    points: Vec<Point>,
}

impl PointSet {
    /// Id of the depot in every point set.
    pub const DEPOT: usize = 0;

    /// Builds a point set from a depot and the points to visit.
    ///
    /// Fails with [`RoutingError::NonFiniteCoordinate`] if any coordinate
    /// is NaN or infinite.
    pub fn new(depot: Point, points: Vec<Point>) -> RoutingResult<Self> {
        let mut all = Vec::with_capacity(points.len() + 1);
        all.push(depot);
        all.extend(points);
        if let Some(id) = all.iter().position(|p| !p.is_finite()) {
            return Err(RoutingError::NonFiniteCoordinate { id });
        }
        Ok(Self { points: all })
    }

    /// Number of points to visit, excluding the depot.
    pub fn size(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns `true` if there is nothing to visit besides the depot.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Looks up a point by id.
    pub fn get(&self, id: usize) -> RoutingResult<Point> {
        self.points
            .get(id)
            .copied()
            .ok_or(RoutingError::OutOfRange {
                id,
                size: self.size(),
            })
    }

    /// Id of the depot (always 0).
    pub fn depot_id(&self) -> usize {
        Self::DEPOT
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.points[Self::DEPOT]
    }

    /// Ids of the points to visit (`1..=N`).
    pub fn ids(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.size()
    }

    /// All locations indexed by id, depot first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` if `id` names a point in this set.
    pub fn contains(&self, id: usize) -> bool {
        id < self.points.len()
    }
}

#[derive(Serialize, Deserialize)]
struct PointSetData {
    depot: Point,
    points: Vec<Point>,
}

impl TryFrom<PointSetData> for PointSet {
    type Error = RoutingError;

    fn try_from(data: PointSetData) -> Result<Self, Self::Error> {
        PointSet::new(data.depot, data.points)
    }
}

impl From<PointSet> for PointSetData {
    fn from(mut set: PointSet) -> Self {
        let depot = set.points.remove(PointSet::DEPOT);
        Self {
            depot,
            points: set.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> PointSet {
        PointSet::new(
            Point::new(0.0, 0.0),
            vec![Point::new(3.0, 4.0), Point::new(0.0, 8.0)],
        )
        .expect("finite coordinates")
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
    }

    #[test]
    fn test_point_set_size_and_ids() {
        let set = sample_set();
        assert_eq!(set.size(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(set.points().len(), 3);
    }

    #[test]
    fn test_point_set_get() {
        let set = sample_set();
        assert_eq!(set.get(0).expect("depot"), Point::new(0.0, 0.0));
        assert_eq!(set.get(1).expect("point 1"), Point::new(3.0, 4.0));
        assert_eq!(set.depot(), Point::new(0.0, 0.0));
        assert_eq!(set.depot_id(), 0);
    }

    #[test]
    fn test_point_set_out_of_range() {
        let set = sample_set();
        assert_eq!(
            set.get(3),
            Err(RoutingError::OutOfRange { id: 3, size: 2 })
        );
        assert!(!set.contains(3));
        assert!(set.contains(2));
    }

    #[test]
    fn test_point_set_empty() {
        let set = PointSet::new(Point::new(0.5, 0.5), Vec::new()).expect("valid");
        assert_eq!(set.size(), 0);
        assert!(set.is_empty());
        assert_eq!(set.ids().count(), 0);
    }

    #[test]
    fn test_point_set_rejects_non_finite() {
        let err = PointSet::new(
            Point::new(0.0, 0.0),
            vec![Point::new(1.0, 1.0), Point::new(f64::NAN, 0.0)],
        );
        assert_eq!(err, Err(RoutingError::NonFiniteCoordinate { id: 2 }));

        let err = PointSet::new(Point::new(f64::INFINITY, 0.0), Vec::new());
        assert_eq!(err, Err(RoutingError::NonFiniteCoordinate { id: 0 }));
    }

    #[test]
    fn test_point_set_serde() {
        let set = sample_set();
        let json = serde_json::to_string(&set).expect("serialize");
        assert!(json.contains("\"depot\""));
        let back: PointSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, set);
    }

    #[test]
    fn test_point_set_serde_rejects_missing_depot() {
        let json = r#"{"points":[{"x":1.0,"y":2.0}]}"#;
        assert!(serde_json::from_str::<PointSet>(json).is_err());
    }
}
