//! Constructive heuristics for range-limited depot tours.
//!
//! - [`RouteBuilder`] — greedy nearest-feasible-neighbor with recharge stops, O(n²)
//!   worst case, much less with the spatial index
//! - [`route_batch`] — many independent point sets routed in parallel

mod batch;
mod config;
mod nearest_feasible;

pub use batch::route_batch;
pub use config::{RouteConfig, SearchStrategy};
pub use nearest_feasible::{nearest_feasible_tour, RouteBuilder};
