//! # range-tour
//!
//! Closed tours over a point set that start and end at a depot, where the
//! distance travelled between depot visits may never exceed a fixed range
//! budget. Tours are built with a fast greedy heuristic and can be certified
//! by an independent validator.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Tour)
//! - [`distance`] — Distance oracle with leg feasibility, spatial candidate index
//! - [`constructive`] — Nearest-feasible-neighbor tour builder, batch routing
//! - [`evaluation`] — Tour validation and metrics
//! - [`observer`] — Construction progress and timing callbacks
//! - [`generate`] — Seeded random point sets
//! - [`error`] — Error type shared by all modules
//!
//! ## Example
//!
//! ```
//! use range_tour::constructive::{RouteBuilder, RouteConfig};
//! use range_tour::evaluation::RouteValidator;
//! use range_tour::generate::unit_square;
//!
//! let points = unit_square(200, 42).unwrap();
//! let config = RouteConfig::new(3.0);
//! let tour = RouteBuilder::new(&points, config).unwrap().build().unwrap();
//!
//! let length = RouteValidator::new(&points, 3.0).validate(&tour).unwrap();
//! assert!(length > 0.0);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod models;
pub mod observer;

pub use error::{RoutingError, RoutingResult};
