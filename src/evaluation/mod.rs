//! Tour validation and metrics.
//!
//! Replays a tour independently of how it was built, checking endpoints,
//! visitation and the charge budget, and reports the total length.

mod validator;

pub use validator::{validate, RouteValidator, TourReport};
