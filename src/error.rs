//! Crate error type.

use thiserror::Error;

/// Errors produced while building or validating a tour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Identifier lookup outside `[0, size]`.
    #[error("point id {id} out of range (point set holds ids 0..={size})")]
    OutOfRange { id: usize, size: usize },

    /// A coordinate was NaN or infinite.
    #[error("point {id} has a non-finite coordinate")]
    NonFiniteCoordinate { id: usize },

    /// Capacity must be finite and strictly positive.
    #[error("invalid capacity {capacity}: must be finite and positive")]
    InvalidCapacity { capacity: f64 },

    /// A non-trivial tour was required but there is nothing to visit.
    #[error("point set has no points besides the depot")]
    EmptyPointSet,

    /// The depot round trip to this point alone exceeds capacity.
    #[error("point {id} is unreachable: round trip {round_trip} exceeds capacity {capacity}")]
    UnreachablePoint {
        id: usize,
        round_trip: f64,
        capacity: f64,
    },

    /// The tour does not start and end at the depot.
    #[error("tour must start and end at the depot")]
    MalformedEndpoints,

    /// The set of visited ids differs from `{0..=N}`.
    #[error("tour visits the wrong set of points (missing {missing:?}, unknown {unknown:?})")]
    IncompleteVisitation {
        missing: Vec<usize>,
        unknown: Vec<usize>,
    },

    /// A non-depot point appears more than once.
    #[error("point {id} is visited more than once")]
    RepeatedVisit { id: usize },

    /// Replaying the tour drains the charge below zero.
    #[error("charge runs out {deficit} short on arrival at point {id} (tour position {position})")]
    ConstraintViolation {
        position: usize,
        id: usize,
        deficit: f64,
    },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
