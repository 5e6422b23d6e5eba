//! Distance queries and the spatial candidate index.
//!
//! Provides an on-demand Euclidean [`DistanceOracle`] with the look-ahead
//! feasibility check, and a [`CandidateIndex`] (R-tree) used to find the
//! nearest feasible unvisited point without scanning every candidate.

mod index;
mod oracle;

pub use index::CandidateIndex;
pub use oracle::DistanceOracle;
