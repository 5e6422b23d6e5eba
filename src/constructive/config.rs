//! Route construction parameters.

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// How the builder looks for the nearest feasible unvisited point.
///
/// Both strategies apply the same selection rule and produce identical
/// tours; they differ only in cost per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Scan every point, skipping visited ones via a bitmap. O(n) per step.
    LinearScan,
    /// Query an R-tree of unvisited points in order of distance.
    #[default]
    SpatialIndex,
}

/// Parameters for [`RouteBuilder`](super::RouteBuilder).
///
/// Defaults: capacity 3.0, [`SearchStrategy::SpatialIndex`], and an empty
/// point set yields the trivial tour.
///
/// # Examples
///
/// ```
/// use range_tour::constructive::{RouteConfig, SearchStrategy};
///
/// let config = RouteConfig::new(2.5)
///     .with_strategy(SearchStrategy::LinearScan)
///     .with_require_points(true);
/// assert_eq!(config.capacity(), 2.5);
/// assert_eq!(config.strategy(), SearchStrategy::LinearScan);
/// assert!(config.require_points());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    capacity: f64,
    strategy: SearchStrategy,
    require_points: bool,
}

impl RouteConfig {
    /// Range budget used when none is given.
    pub const DEFAULT_CAPACITY: f64 = 3.0;

    /// Creates a configuration with the given capacity.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Sets the maximum distance travelled between depot visits.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the candidate search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Makes an empty point set an error instead of yielding `[0, 0]`.
    pub fn with_require_points(mut self, require: bool) -> Self {
        self.require_points = require;
        self
    }

    /// Maximum distance between depot visits.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Candidate search strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Whether an empty point set is rejected.
    pub fn require_points(&self) -> bool {
        self.require_points
    }

    /// Checks that the capacity is finite and positive.
    pub fn validate(&self) -> RoutingResult<()> {
        if self.capacity.is_finite() && self.capacity > 0.0 {
            Ok(())
        } else {
            Err(RoutingError::InvalidCapacity {
                capacity: self.capacity,
            })
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            strategy: SearchStrategy::default(),
            require_points: false,
        }
    }
}
