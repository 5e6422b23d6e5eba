//! Routing many independent point sets at once.

use rayon::prelude::*;

use super::{RouteBuilder, RouteConfig};
use crate::error::RoutingResult;
use crate::models::{PointSet, Tour};

/// Builds one tour per point set, in parallel.
///
/// Each construction is independent and shares nothing with the others.
/// Results come back in input order; a failure on one set does not affect
/// the rest.
///
/// # Examples
///
/// ```
/// use range_tour::constructive::{route_batch, RouteConfig};
/// use range_tour::generate::unit_square;
///
/// let sets: Vec<_> = (0..4).map(|seed| unit_square(50, seed).unwrap()).collect();
/// let tours = route_batch(&sets, &RouteConfig::default());
/// assert_eq!(tours.len(), 4);
/// assert!(tours.iter().all(|t| t.is_ok()));
/// ```
pub fn route_batch(point_sets: &[PointSet], config: &RouteConfig) -> Vec<RoutingResult<Tour>> {
    point_sets
        .par_iter()
        .map(|points| RouteBuilder::new(points, config.clone()).and_then(|b| b.build()))
        .collect()
}
