//! Tour validator that replays a tour and certifies it.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceOracle;
use crate::error::{RoutingError, RoutingResult};
use crate::models::{PointSet, Tour};

/// Metrics of a validated tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourReport {
    /// Sum of all leg lengths.
    pub total_length: f64,
    /// Depot visits strictly inside the tour.
    pub recharge_count: usize,
    /// Number of legs travelled.
    pub leg_count: usize,
    /// Longest distance travelled between two consecutive depot visits.
    pub longest_stint: f64,
}

/// Checks tours against a point set and a range budget.
///
/// Validation is a pure replay: it does not care which algorithm produced
/// the tour, only that the tour starts and ends at the depot, visits every
/// point exactly once, and never runs the charge below zero. Charge is reset
/// to `capacity` at every depot occurrence.
///
/// # Examples
///
/// ```
/// use range_tour::models::{Point, PointSet, Tour};
/// use range_tour::evaluation::RouteValidator;
///
/// let points = PointSet::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(3.0, 4.0), Point::new(-3.0, 4.0)],
/// ).unwrap();
/// let validator = RouteValidator::new(&points, 10.0);
///
/// let length = validator.validate(&Tour::from_ids(vec![0, 1, 0, 2, 0])).unwrap();
/// assert!((length - 20.0).abs() < 1e-10);
///
/// // 5 + 6 + 5 = 16 exceeds the budget of 10
/// assert!(validator.validate(&Tour::from_ids(vec![0, 1, 2, 0])).is_err());
/// ```
pub struct RouteValidator<'a> {
    points: &'a PointSet,
    capacity: f64,
}

impl<'a> RouteValidator<'a> {
    /// Creates a validator for tours over `points` with the given capacity.
    pub fn new(points: &'a PointSet, capacity: f64) -> Self {
        Self { points, capacity }
    }

    /// Validates `tour` and returns its total length.
    pub fn validate(&self, tour: &Tour) -> RoutingResult<f64> {
        self.report(tour).map(|r| r.total_length)
    }

    /// Validates `tour` and returns its metrics.
    ///
    /// Checks run in order: capacity, endpoints, visitation, repeats, and
    /// finally the charge replay. The first failure is returned.
    pub fn report(&self, tour: &Tour) -> RoutingResult<TourReport> {
        if !(self.capacity.is_finite() && self.capacity > 0.0) {
            return Err(RoutingError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        let ids = tour.ids();
        self.check_endpoints(ids)?;
        self.check_visitation(ids)?;
        let (total_length, longest_stint) = self.replay(ids)?;

        Ok(TourReport {
            total_length,
            recharge_count: tour.recharge_count(),
            leg_count: ids.len() - 1,
            longest_stint,
        })
    }

    fn check_endpoints(&self, ids: &[usize]) -> RoutingResult<()> {
        match ids {
            [first, .., last] if *first == PointSet::DEPOT && *last == PointSet::DEPOT => Ok(()),
            _ => Err(RoutingError::MalformedEndpoints),
        }
    }

    fn check_visitation(&self, ids: &[usize]) -> RoutingResult<()> {
        let mut counts = vec![0usize; self.points.size() + 1];
        let mut unknown = Vec::new();
        for &id in ids {
            match counts.get_mut(id) {
                Some(count) => *count += 1,
                None => unknown.push(id),
            }
        }

        let missing: Vec<usize> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 0)
            .map(|(id, _)| id)
            .collect();
        if !missing.is_empty() || !unknown.is_empty() {
            unknown.sort_unstable();
            unknown.dedup();
            return Err(RoutingError::IncompleteVisitation { missing, unknown });
        }

        if let Some(id) = counts
            .iter()
            .enumerate()
            .skip(1)
            .find(|&(_, &c)| c > 1)
            .map(|(id, _)| id)
        {
            return Err(RoutingError::RepeatedVisit { id });
        }
        Ok(())
    }

    /// Drains the charge leg by leg; returns (total length, longest stint).
    fn replay(&self, ids: &[usize]) -> RoutingResult<(f64, f64)> {
        let oracle = DistanceOracle::new(self.points);
        let mut charge = self.capacity;
        let mut total = 0.0;
        let mut stint = 0.0;
        let mut longest: f64 = 0.0;

        for (position, leg) in ids.windows(2).enumerate() {
            let (from, to) = (leg[0], leg[1]);
            let d = oracle.distance(from, to);
            total += d;
            stint += d;
            charge -= d;
            if charge < 0.0 {
                return Err(RoutingError::ConstraintViolation {
                    position: position + 1,
                    id: to,
                    deficit: -charge,
                });
            }
            if to == PointSet::DEPOT {
                longest = longest.max(stint);
                stint = 0.0;
                charge = self.capacity;
            }
        }

        Ok((total, longest))
    }
}

/// Validates `tour` over `points` with the given capacity, returning its
/// total length.
///
/// Shorthand for [`RouteValidator::new`] followed by
/// [`RouteValidator::validate`].
pub fn validate(points: &PointSet, tour: &Tour, capacity: f64) -> RoutingResult<f64> {
    RouteValidator::new(points, capacity).validate(tour)
}
