//! Domain model types for range-limited depot tours.
//!
//! Provides the point set the tour is built over (depot plus points to
//! visit) and the tour itself as an ordered sequence of point ids.

mod point;
mod tour;

pub use point::{Point, PointSet};
pub use tour::Tour;
