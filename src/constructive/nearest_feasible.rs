//! Nearest-feasible-neighbor tour construction with recharge stops.
//!
//! Builds a single closed tour greedily: from the current position, always
//! move to the nearest unvisited point that still leaves enough charge to
//! get back to the depot afterwards. When no such point exists, return to
//! the depot, recharge, and try again from there.
//!
//! The look-ahead (leg plus return-to-depot must fit in the remaining
//! charge) is what keeps the greedy search from stranding itself far from
//! the depot.
//!
//! # Complexity
//!
//! O(n²) with [`SearchStrategy::LinearScan`]. With
//! [`SearchStrategy::SpatialIndex`] each step only inspects candidates up to
//! the nearest feasible one, which is typically a handful.

use std::time::Instant;

use super::{RouteConfig, SearchStrategy};
use crate::distance::{CandidateIndex, DistanceOracle};
use crate::error::{RoutingError, RoutingResult};
use crate::models::{PointSet, Tour};
use crate::observer::{BuildObserver, NoopObserver};

/// Greedy constructor of range-limited depot tours.
///
/// # Examples
///
/// ```
/// use range_tour::models::{Point, PointSet};
/// use range_tour::constructive::{RouteBuilder, RouteConfig};
///
/// let points = PointSet::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(1.5, 0.0), Point::new(-1.5, 0.0)],
/// ).unwrap();
///
/// // 4.0 covers one round trip (3.0) but not both points in one go
/// let builder = RouteBuilder::new(&points, RouteConfig::new(4.0)).unwrap();
/// let tour = builder.build().unwrap();
/// assert_eq!(tour.ids(), &[0, 1, 0, 2, 0]);
/// assert_eq!(tour.recharge_count(), 1);
/// ```
pub struct RouteBuilder<'a> {
    points: &'a PointSet,
    config: RouteConfig,
}

impl<'a> RouteBuilder<'a> {
    /// Creates a builder over `points`.
    ///
    /// Fails with [`RoutingError::InvalidCapacity`] if the capacity is not
    /// finite and positive.
    pub fn new(points: &'a PointSet, config: RouteConfig) -> RoutingResult<Self> {
        config.validate()?;
        Ok(Self { points, config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Builds the tour.
    pub fn build(&self) -> RoutingResult<Tour> {
        self.build_with_observer(&mut NoopObserver)
    }

    /// Builds the tour, reporting progress to `observer`.
    ///
    /// Fails with [`RoutingError::UnreachablePoint`] before any move is made
    /// if some point cannot be visited even on a full charge, and with
    /// [`RoutingError::EmptyPointSet`] if the point set is empty and the
    /// configuration requires points.
    pub fn build_with_observer(&self, observer: &mut dyn BuildObserver) -> RoutingResult<Tour> {
        let started = Instant::now();
        let n = self.points.size();
        let capacity = self.config.capacity();

        if n == 0 && self.config.require_points() {
            return Err(RoutingError::EmptyPointSet);
        }

        let oracle = DistanceOracle::new(self.points);
        self.check_reachable(&oracle)?;
        observer.on_start(n, capacity);

        let depot = PointSet::DEPOT;
        let mut candidates = Candidates::new(self.points, self.config.strategy());
        let mut ids = Vec::with_capacity(n + 2);
        ids.push(depot);
        let mut position = depot;
        let mut charge = capacity;
        let mut recharges = 0;

        // Every point passed the full-charge check from the depot, so a
        // recharge always unlocks at least one candidate.
        while !candidates.is_empty() {
            match candidates.nearest_feasible(&oracle, position, charge, capacity) {
                Some((next, leg)) => {
                    candidates.mark_visited(self.points, next);
                    ids.push(next);
                    charge -= leg;
                    position = next;
                    observer.on_visit(next, leg, charge);
                }
                None => {
                    // skipped candidates stay in the pool for the next pass
                    ids.push(depot);
                    charge = capacity;
                    position = depot;
                    recharges += 1;
                    observer.on_recharge(recharges, candidates.len());
                }
            }
        }

        ids.push(depot);
        let tour = Tour::from_ids(ids);
        observer.on_finish(&tour, started.elapsed());
        Ok(tour)
    }

    fn check_reachable(&self, oracle: &DistanceOracle<'_>) -> RoutingResult<()> {
        let capacity = self.config.capacity();
        for id in self.points.ids() {
            // same check the search applies at the depot on a full charge
            if oracle
                .feasible_leg_distance(PointSet::DEPOT, id, capacity, capacity)
                .is_none()
            {
                return Err(RoutingError::UnreachablePoint {
                    id,
                    round_trip: oracle.round_trip(id),
                    capacity,
                });
            }
        }
        Ok(())
    }
}

/// Constructs a tour over `points` with the given configuration.
///
/// Shorthand for [`RouteBuilder::new`] followed by [`RouteBuilder::build`].
pub fn nearest_feasible_tour(points: &PointSet, config: &RouteConfig) -> RoutingResult<Tour> {
    RouteBuilder::new(points, config.clone())?.build()
}

/// The builder's pool of unvisited points.
enum Candidates {
    /// Arena scan: `visited[id]` marks points already on the tour.
    Scan { visited: Vec<bool>, remaining: usize },
    Index(CandidateIndex),
}

impl Candidates {
    fn new(points: &PointSet, strategy: SearchStrategy) -> Self {
        match strategy {
            SearchStrategy::LinearScan => {
                let mut visited = vec![false; points.size() + 1];
                visited[PointSet::DEPOT] = true;
                Candidates::Scan {
                    visited,
                    remaining: points.size(),
                }
            }
            SearchStrategy::SpatialIndex => Candidates::Index(CandidateIndex::new(points)),
        }
    }

    fn len(&self) -> usize {
        match self {
            Candidates::Scan { remaining, .. } => *remaining,
            Candidates::Index(index) => index.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nearest feasible candidate; ties go to the lowest id.
    fn nearest_feasible(
        &self,
        oracle: &DistanceOracle<'_>,
        from: usize,
        charge: f64,
        capacity: f64,
    ) -> Option<(usize, f64)> {
        match self {
            Candidates::Scan { visited, .. } => {
                let mut best: Option<(usize, f64)> = None;
                // ascending ids: strict `<` keeps the lowest id on ties
                for (id, _) in visited.iter().enumerate().filter(|&(_, &v)| !v) {
                    if let Some(leg) = oracle.feasible_leg_distance(from, id, charge, capacity) {
                        if best.map_or(true, |(_, best_leg)| leg < best_leg) {
                            best = Some((id, leg));
                        }
                    }
                }
                best
            }
            Candidates::Index(index) => index.nearest_feasible(oracle, from, charge, capacity),
        }
    }

    fn mark_visited(&mut self, points: &PointSet, id: usize) {
        match self {
            Candidates::Scan { visited, remaining } => {
                if !visited[id] {
                    visited[id] = true;
                    *remaining -= 1;
                }
            }
            Candidates::Index(index) => {
                index.remove(points, id);
            }
        }
    }
}
