//! Tour type.

use serde::{Deserialize, Serialize};

use super::PointSet;

/// An ordered sequence of point ids, depot first and last.
///
/// Every interior occurrence of the depot is a recharge stop. Tours are
/// produced by [`RouteBuilder`](crate::constructive::RouteBuilder) and are
/// read-only afterwards; any tour (including a hand-written one) can be
/// checked with [`RouteValidator`](crate::evaluation::RouteValidator).
///
/// # Examples
///
/// ```
/// use range_tour::models::Tour;
///
/// let tour = Tour::from_ids(vec![0, 1, 2, 0, 3, 0]);
/// assert_eq!(tour.len(), 6);
/// assert_eq!(tour.recharge_count(), 1);
/// assert_eq!(tour.legs().count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    ids: Vec<usize>,
}

impl Tour {
    /// Wraps an id sequence as a tour without checking it.
    pub fn from_ids(ids: Vec<usize>) -> Self {
        Self { ids }
    }

    /// The tour that visits nothing: `[depot, depot]`.
    pub fn trivial() -> Self {
        Self::from_ids(vec![PointSet::DEPOT, PointSet::DEPOT])
    }

    /// The ids in visiting order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Number of entries, depot occurrences included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the tour has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of depot occurrences strictly between the first and last entry.
    pub fn recharge_count(&self) -> usize {
        match self.ids.len() {
            0..=2 => 0,
            n => self.ids[1..n - 1]
                .iter()
                .filter(|&&id| id == PointSet::DEPOT)
                .count(),
        }
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ids.windows(2).map(|w| (w[0], w[1]))
    }

    /// Non-depot ids in visiting order.
    pub fn visits(&self) -> impl Iterator<Item = usize> + '_ {
        self.ids.iter().copied().filter(|&id| id != PointSet::DEPOT)
    }

    /// Consumes the tour, returning the id sequence.
    pub fn into_ids(self) -> Vec<usize> {
        self.ids
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.into_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_tour() {
        let t = Tour::trivial();
        assert_eq!(t.ids(), &[0, 0]);
        assert_eq!(t.recharge_count(), 0);
        assert_eq!(t.legs().collect::<Vec<_>>(), vec![(0, 0)]);
        assert_eq!(t.visits().count(), 0);
    }

    #[test]
    fn test_recharge_count_ignores_endpoints() {
        assert_eq!(Tour::from_ids(vec![0, 1, 2, 0]).recharge_count(), 0);
        assert_eq!(Tour::from_ids(vec![0, 1, 0, 2, 0, 3, 0]).recharge_count(), 2);
        assert_eq!(Tour::from_ids(vec![]).recharge_count(), 0);
        assert_eq!(Tour::from_ids(vec![0]).recharge_count(), 0);
    }

    #[test]
    fn test_legs_and_visits() {
        let t = Tour::from_ids(vec![0, 3, 1, 0, 2, 0]);
        assert_eq!(
            t.legs().collect::<Vec<_>>(),
            vec![(0, 3), (3, 1), (1, 0), (0, 2), (2, 0)]
        );
        assert_eq!(t.visits().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_into_ids() {
        let t = Tour::from_ids(vec![0, 1, 0]);
        let ids: Vec<usize> = t.clone().into();
        assert_eq!(ids, vec![0, 1, 0]);
        assert_eq!(t.into_ids(), vec![0, 1, 0]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let t = Tour::from_ids(vec![0, 2, 1, 0]);
        assert_eq!(serde_json::to_string(&t).expect("serialize"), "[0,2,1,0]");
    }
}
