//! R-tree over the points still to be visited.
//!
//! Answers "nearest feasible neighbour" queries by walking candidates in
//! increasing distance from the current position and stopping as soon as no
//! closer feasible candidate can follow. Visited points are removed from the
//! tree so later queries never see them.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use super::DistanceOracle;
use crate::models::PointSet;

// Absorbs rounding differences between the tree's traversal order and the
// oracle's distances so ties are always collected in full.
const ORDER_SLACK: f64 = 1e-9;

/// Entry stored in the R-tree: a 2-D `[x, y]` point with its id.
#[derive(Debug, Clone, PartialEq)]
struct CandidateEntry {
    point: [f64; 2],
    id: usize,
}

impl RTreeObject for CandidateEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CandidateEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index of unvisited point ids.
pub struct CandidateIndex {
    tree: RTree<CandidateEntry>,
}

impl CandidateIndex {
    /// Bulk-loads every non-depot point of `points`.
    pub fn new(points: &PointSet) -> Self {
        let all = points.points();
        let entries = points
            .ids()
            .map(|id| CandidateEntry {
                point: [all[id].x(), all[id].y()],
                id,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of candidates left.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if every candidate has been removed.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Removes point `id` (located at its coordinates in `points`).
    ///
    /// Returns `false` if it was not in the index.
    pub fn remove(&mut self, points: &PointSet, id: usize) -> bool {
        let Some(p) = points.points().get(id) else {
            return false;
        };
        let entry = CandidateEntry {
            point: [p.x(), p.y()],
            id,
        };
        self.tree.remove(&entry).is_some()
    }

    /// Finds the closest candidate reachable from `from` with
    /// `remaining_charge` left, returning its id and the leg length.
    ///
    /// Ties on distance go to the lowest id. Returns `None` if no candidate
    /// is feasible.
    pub fn nearest_feasible(
        &self,
        oracle: &DistanceOracle<'_>,
        from: usize,
        remaining_charge: f64,
        capacity: f64,
    ) -> Option<(usize, f64)> {
        let origin = oracle.point(from);
        let mut best: Option<(usize, f64)> = None;

        for entry in self.tree.nearest_neighbor_iter(&[origin.x(), origin.y()]) {
            let d = oracle.distance(from, entry.id);
            // any feasible leg is no longer than the charge itself
            if d > remaining_charge + ORDER_SLACK * remaining_charge.max(1.0) {
                break;
            }
            if let Some((_, best_d)) = best {
                if d > best_d + ORDER_SLACK * best_d.max(1.0) {
                    break;
                }
            }
            let Some(leg) =
                oracle.feasible_leg_distance(from, entry.id, remaining_charge, capacity)
            else {
                continue;
            };
            let better = match best {
                Some((best_id, best_d)) => leg < best_d || (leg == best_d && entry.id < best_id),
                None => true,
            };
            if better {
                best = Some((entry.id, leg));
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn sample_set() -> PointSet {
        PointSet::new(
            Point::new(0.0, 0.0),
            vec![
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(-1.0, 0.0),
                Point::new(0.0, 5.0),
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_new_loads_all_but_depot() {
        let set = sample_set();
        let index = CandidateIndex::new(&set);
        assert_eq!(index.len(), 4);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_nearest_tie_goes_to_lowest_id() {
        let set = sample_set();
        let oracle = DistanceOracle::new(&set);
        let index = CandidateIndex::new(&set);
        // points 1 and 3 are both at distance 1 from the depot
        assert_eq!(index.nearest_feasible(&oracle, 0, 20.0, 20.0), Some((1, 1.0)));
    }

    #[test]
    fn test_nearest_skips_infeasible() {
        let set = sample_set();
        let oracle = DistanceOracle::new(&set);
        let mut index = CandidateIndex::new(&set);
        assert!(index.remove(&set, 4));
        // from point 4 at (0,5), points 1 and 3 both cost sqrt(26) + 1 ~ 6.1
        assert_eq!(index.nearest_feasible(&oracle, 4, 6.0, 20.0), None);
        let (id, leg) = index
            .nearest_feasible(&oracle, 4, 6.5, 20.0)
            .expect("feasible");
        assert_eq!(id, 1);
        assert!((leg - 26f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_remove() {
        let set = sample_set();
        let oracle = DistanceOracle::new(&set);
        let mut index = CandidateIndex::new(&set);
        assert!(index.remove(&set, 1));
        assert!(!index.remove(&set, 1));
        assert!(!index.remove(&set, 99));
        assert_eq!(index.len(), 3);
        assert_eq!(index.nearest_feasible(&oracle, 0, 20.0, 20.0), Some((3, 1.0)));
    }

    #[test]
    fn test_empty_index() {
        let set = PointSet::new(Point::new(0.0, 0.0), Vec::new()).expect("valid");
        let oracle = DistanceOracle::new(&set);
        let index = CandidateIndex::new(&set);
        assert!(index.is_empty());
        assert_eq!(index.nearest_feasible(&oracle, 0, 3.0, 3.0), None);
    }
}
