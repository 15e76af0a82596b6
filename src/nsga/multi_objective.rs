//! Pareto ranking utilities over [`Objectives`].
//!
//! # Algorithms
//!
//! - [`non_dominated_sort`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: Crowding distance assignment for diversity preservation
//!
//! Both objectives are **minimized**.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use crate::topology::Objectives;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, Default)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of solutions, determine dominance
/// 2. Solutions dominated by no other belong to front 0 (rank 0)
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// # Complexity
///
/// O(n²) for n solutions
///
/// # Example
///
/// ```
/// use u_netopt::nsga::multi_objective::non_dominated_sort;
/// use u_netopt::topology::Objectives;
///
/// let objectives = [
///     Objectives { edge_count: 1, travel_cost: 5.0 }, // A
///     Objectives { edge_count: 3, travel_cost: 3.0 }, // B
///     Objectives { edge_count: 5, travel_cost: 1.0 }, // C
///     Objectives { edge_count: 4, travel_cost: 4.0 }, // D, dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort(objectives: &[Objectives]) -> NondominatedSortResult {
    let n = objectives.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if objectives[i].dominates(&objectives[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if objectives[j].dominates(&objectives[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    // Build subsequent fronts
    let mut fronts = vec![front_0];
    loop {
        let mut next_front = Vec::new();
        if let Some(current) = fronts.last() {
            for &i in current {
                for &j in &dominated_by[i] {
                    domination_count[j] -= 1;
                    if domination_count[j] == 0 {
                        ranks[j] = fronts.len();
                        next_front.push(j);
                    }
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}

/// Crowding distance assignment for diversity preservation.
///
/// Measures how isolated each solution is in objective space; boundary
/// solutions (min/max of either objective) receive `f64::INFINITY`.
///
/// # Complexity
///
/// O(n log n)
///
/// # Example
///
/// ```
/// use u_netopt::nsga::multi_objective::crowding_distance;
/// use u_netopt::topology::Objectives;
///
/// let objectives = [
///     Objectives { edge_count: 1, travel_cost: 5.0 },
///     Objectives { edge_count: 3, travel_cost: 3.0 },
///     Objectives { edge_count: 5, travel_cost: 1.0 },
/// ];
///
/// let distances = crowding_distance(&objectives);
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!(distances[1].is_finite());
/// ```
pub fn crowding_distance(objectives: &[Objectives]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let columns: [Vec<f64>; 2] = [
        objectives.iter().map(|o| o.edge_count as f64).collect(),
        objectives.iter().map(|o| o.travel_cost).collect(),
    ];
    let mut distances = vec![0.0f64; n];

    for values in &columns {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = values[indices[n - 1]] - values[indices[0]];
        if range > 0.0 {
            for i in 1..(n - 1) {
                let gap = values[indices[i + 1]] - values[indices[i - 1]];
                distances[indices[i]] += gap / range;
            }
        }
    }

    distances
}
