//! Random point sets for experiments and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RoutingResult;
use crate::models::{Point, PointSet};

/// Depot location of the unit-square scenario.
pub const UNIT_SQUARE_DEPOT: (f64, f64) = (0.5, 0.5);

/// Samples `n` points uniformly in `[0, 1)²` around the given depot.
pub fn uniform_points<R: Rng>(
    n: usize,
    depot: Point,
    rng: &mut R,
) -> RoutingResult<PointSet> {
    let points = (0..n)
        .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect();
    PointSet::new(depot, points)
}

/// `n` uniform points in the unit square with the depot at its centre,
/// reproducible from `seed`.
///
/// # Examples
///
/// ```
/// use range_tour::generate::unit_square;
///
/// let a = unit_square(100, 1).unwrap();
/// let b = unit_square(100, 1).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.size(), 100);
/// ```
pub fn unit_square(n: usize, seed: u64) -> RoutingResult<PointSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    uniform_points(n, UNIT_SQUARE_DEPOT.into(), &mut rng)
}
