//! Survivor selection.
//!
//! Reduces the combined parent + offspring pool back to at most
//! `population_size` solutions according to a [`SurvivorPolicy`].

use std::cmp::Ordering;

use super::config::SurvivorPolicy;
use super::multi_objective::{crowding_distance, non_dominated_sort};
use crate::topology::{Objectives, Solution};

/// Indices of the solutions no other solution in `objectives` dominates,
/// in input order.
///
/// # Complexity
/// O(n²)
pub fn first_front(objectives: &[Objectives]) -> Vec<usize> {
    (0..objectives.len())
        .filter(|&i| !objectives.iter().any(|other| other.dominates(&objectives[i])))
        .collect()
}

/// Selects survivors from `pool`.
///
/// Survivors are returned ordered by `(edge_count, travel_cost)` ascending;
/// equal objectives keep their pool order. The result never exceeds
/// `capacity`.
///
/// With [`SurvivorPolicy::FirstFront`] the result may be smaller than
/// `capacity`: dominated solutions are discarded even when that leaves
/// empty slots.
///
/// # Example
///
/// ```
/// use u_netopt::nsga::{select_survivors, SurvivorPolicy};
/// use u_netopt::topology::{Objectives, Solution, Topology};
///
/// let pool: Vec<Solution> = [(3, 9.0), (4, 9.5), (5, 6.0)]
///     .into_iter()
///     .map(|(edge_count, travel_cost)| Solution {
///         topology: Topology::new(),
///         objectives: Objectives { edge_count, travel_cost },
///     })
///     .collect();
///
/// let survivors = select_survivors(pool, 10, SurvivorPolicy::FirstFront);
/// assert_eq!(survivors.len(), 2); // (4, 9.5) is dominated by (3, 9.0)
/// ```
pub fn select_survivors(
    pool: Vec<Solution>,
    capacity: usize,
    policy: SurvivorPolicy,
) -> Vec<Solution> {
    let objectives: Vec<Objectives> = pool.iter().map(|s| s.objectives).collect();

    let mut chosen = match policy {
        SurvivorPolicy::FirstFront => first_front(&objectives),
        SurvivorPolicy::RankedFronts => ranked_fronts(&objectives, capacity),
    };

    chosen.sort_by(|&a, &b| compare_objectives(&objectives[a], &objectives[b]).then(a.cmp(&b)));
    chosen.truncate(capacity);

    let mut slots: Vec<Option<Solution>> = pool.into_iter().map(Some).collect();
    chosen.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Lexicographic `(edge_count, travel_cost)` order.
pub fn compare_objectives(a: &Objectives, b: &Objectives) -> Ordering {
    a.edge_count
        .cmp(&b.edge_count)
        .then_with(|| a.travel_cost.total_cmp(&b.travel_cost))
}

/// Whole fronts while they fit, then the most isolated members of the
/// overflowing front.
fn ranked_fronts(objectives: &[Objectives], capacity: usize) -> Vec<usize> {
    let sorted = non_dominated_sort(objectives);
    let mut chosen = Vec::with_capacity(capacity);

    for front in &sorted.fronts {
        let remaining = capacity - chosen.len();
        if front.len() <= remaining {
            chosen.extend_from_slice(front);
        } else {
            let front_objectives: Vec<Objectives> = front.iter().map(|&i| objectives[i]).collect();
            let distances = crowding_distance(&front_objectives);
            let mut order: Vec<usize> = (0..front.len()).collect();
            // Stable: equal distances keep front order
            order.sort_by(|&a, &b| distances[b].total_cmp(&distances[a]));
            chosen.extend(order[..remaining].iter().map(|&k| front[k]));
        }
        if chosen.len() == capacity {
            break;
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use proptest::prelude::*;

    fn solution(id: usize, edge_count: usize, travel_cost: f64) -> Solution {
        Solution {
            topology: Topology::from_edge_ids([id]),
            objectives: Objectives {
                edge_count,
                travel_cost,
            },
        }
    }

    fn ids(solutions: &[Solution]) -> Vec<usize> {
        solutions.iter().map(|s| s.topology.edge_ids()[0]).collect()
    }

    // ---- First front ----

    #[test]
    fn test_first_front_drops_dominated() {
        let pool = vec![
            solution(0, 5, 10.0),
            solution(1, 6, 12.0), // dominated by 0
            solution(2, 3, 20.0),
            solution(3, 9, 4.0),
            solution(4, 9, 5.0), // dominated by 3
        ];
        let survivors = select_survivors(pool, 10, SurvivorPolicy::FirstFront);
        assert_eq!(ids(&survivors), vec![2, 0, 3]);
    }

    #[test]
    fn test_first_front_under_fills() {
        // One solution dominates all others; only it survives.
        let pool = vec![
            solution(0, 4, 8.0),
            solution(1, 2, 3.0),
            solution(2, 5, 9.0),
            solution(3, 3, 3.5),
        ];
        let survivors = select_survivors(pool, 3, SurvivorPolicy::FirstFront);
        assert_eq!(ids(&survivors), vec![1]);
    }

    #[test]
    fn test_first_front_truncates_to_capacity() {
        let pool: Vec<Solution> = (0..6)
            .map(|i| solution(i, i + 1, 10.0 - i as f64))
            .collect();
        let survivors = select_survivors(pool, 4, SurvivorPolicy::FirstFront);
        assert_eq!(ids(&survivors), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_identical_objectives_all_survive_in_pool_order() {
        let pool = vec![
            solution(7, 3, 3.0),
            solution(2, 3, 3.0),
            solution(5, 3, 3.0),
        ];
        let survivors = select_survivors(pool, 5, SurvivorPolicy::FirstFront);
        assert_eq!(ids(&survivors), vec![7, 2, 5]);
    }

    #[test]
    fn test_sorted_by_edges_then_cost() {
        let objs = [
            Objectives {
                edge_count: 2,
                travel_cost: 9.0,
            },
            Objectives {
                edge_count: 2,
                travel_cost: 8.0,
            },
            Objectives {
                edge_count: 1,
                travel_cost: 99.0,
            },
        ];
        let mut order = vec![0, 1, 2];
        order.sort_by(|&a, &b| compare_objectives(&objs[a], &objs[b]));
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_pool() {
        assert!(select_survivors(Vec::new(), 4, SurvivorPolicy::FirstFront).is_empty());
        assert!(select_survivors(Vec::new(), 4, SurvivorPolicy::RankedFronts).is_empty());
    }

    // ---- Ranked fronts ----

    #[test]
    fn test_ranked_fronts_backfills() {
        let pool = vec![
            solution(0, 4, 8.0),
            solution(1, 2, 3.0),
            solution(2, 5, 9.0),
            solution(3, 3, 3.5),
        ];
        let survivors = select_survivors(pool, 3, SurvivorPolicy::RankedFronts);
        // Fronts: {1}, {3}, {0}, {2}
        assert_eq!(ids(&survivors), vec![1, 3, 0]);
    }

    #[test]
    fn test_ranked_fronts_cuts_by_crowding() {
        // One front of five; capacity 3 keeps both extremes plus the most
        // isolated interior point.
        let pool = vec![
            solution(0, 1, 10.0),
            solution(1, 2, 9.0),
            solution(2, 3, 8.5),
            solution(3, 8, 2.0),
            solution(4, 10, 0.5),
        ];
        let survivors = select_survivors(pool, 3, SurvivorPolicy::RankedFronts);
        assert_eq!(ids(&survivors), vec![0, 3, 4]);
    }

    // ---- Properties ----

    fn pool_strategy() -> impl Strategy<Value = Vec<Solution>> {
        proptest::collection::vec((1usize..30, 0.0f64..100.0), 0..40).prop_map(|objs| {
            objs.into_iter()
                .enumerate()
                .map(|(i, (e, c))| solution(i, e, c))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_dominance_irreflexive_and_asymmetric(
            a in (0usize..20, 0.0f64..50.0),
            b in (0usize..20, 0.0f64..50.0),
        ) {
            let a = Objectives { edge_count: a.0, travel_cost: a.1 };
            let b = Objectives { edge_count: b.0, travel_cost: b.1 };
            prop_assert!(!a.dominates(&a));
            prop_assert!(!(a.dominates(&b) && b.dominates(&a)));
        }

        #[test]
        fn prop_first_front_is_mutually_non_dominated(
            pool in pool_strategy(),
            capacity in 1usize..20,
        ) {
            let survivors = select_survivors(pool, capacity, SurvivorPolicy::FirstFront);
            prop_assert!(survivors.len() <= capacity);
            for a in &survivors {
                for b in &survivors {
                    prop_assert!(!a.objectives.dominates(&b.objectives));
                }
            }
        }

        #[test]
        fn prop_first_front_members_undominated_in_pool(
            pool in pool_strategy(),
            capacity in 1usize..20,
        ) {
            let all: Vec<Objectives> = pool.iter().map(|s| s.objectives).collect();
            let survivors = select_survivors(pool, capacity, SurvivorPolicy::FirstFront);
            for s in &survivors {
                prop_assert!(!all.iter().any(|o| o.dominates(&s.objectives)));
            }
        }

        #[test]
        fn prop_ranked_fronts_fills_to_capacity(pool in pool_strategy(), capacity in 1usize..20) {
            let n = pool.len();
            let survivors = select_survivors(pool, capacity, SurvivorPolicy::RankedFronts);
            prop_assert_eq!(survivors.len(), n.min(capacity));
        }

        #[test]
        fn prop_survivors_sorted(pool in pool_strategy(), capacity in 1usize..20) {
            for policy in [SurvivorPolicy::FirstFront, SurvivorPolicy::RankedFronts] {
                let survivors = select_survivors(pool.clone(), capacity, policy);
                for w in survivors.windows(2) {
                    let order = compare_objectives(&w[0].objectives, &w[1].objectives);
                    prop_assert!(order != Ordering::Greater);
                }
            }
        }
    }
}
