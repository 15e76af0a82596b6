//! Edge-subset genetic operators.
//!
//! Topologies are sets of candidate edge ids, so the operators are set
//! operations driven by independent Bernoulli draws:
//!
//! - [`sample_topology`]: keep each candidate edge with probability `p`
//! - [`crossover`]: union of both parents, thinned with probability `p`
//! - [`mutate`]: with probability `m`, drop one uniformly random edge
//!
//! None of them preserve strong connectivity; the caller repairs afterwards.
//! Random draws happen in ascending edge-id order so a seeded generator
//! reproduces the same offspring.
//!
//! # Panics
//!
//! All operators panic if a probability lies outside `[0, 1]`
//! (see [`NsgaConfig::validate`](super::NsgaConfig::validate)).

use rand::Rng;

use crate::topology::{CandidateEdgeSet, EdgeId, Topology};

/// Samples a random topology from the candidate set.
pub fn sample_topology<R: Rng>(
    candidates: &CandidateEdgeSet,
    keep_probability: f64,
    rng: &mut R,
) -> Topology {
    let ids = (0..candidates.len())
        .filter(|_| rng.random_bool(keep_probability))
        .collect();
    Topology::from_sorted_ids(ids)
}

/// Union crossover.
///
/// Every edge present in either parent survives into the child
/// independently with probability `keep_probability`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_netopt::nsga::operators::crossover;
/// use u_netopt::topology::Topology;
///
/// let a = Topology::from_edge_ids([0, 2, 4]);
/// let b = Topology::from_edge_ids([1, 2, 3]);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let child = crossover(&a, &b, 1.0, &mut rng);
/// assert_eq!(child.edge_ids(), &[0, 1, 2, 3, 4]);
/// ```
pub fn crossover<R: Rng>(
    parent1: &Topology,
    parent2: &Topology,
    keep_probability: f64,
    rng: &mut R,
) -> Topology {
    let ids = sorted_union(parent1.edge_ids(), parent2.edge_ids())
        .into_iter()
        .filter(|_| rng.random_bool(keep_probability))
        .collect();
    Topology::from_sorted_ids(ids)
}

/// Removal mutation.
///
/// Draws once with probability `mutation_probability`; on success, and only
/// if the topology has more than one edge, removes a uniformly random edge
/// and returns its id.
pub fn mutate<R: Rng>(
    topology: &mut Topology,
    mutation_probability: f64,
    rng: &mut R,
) -> Option<EdgeId> {
    if rng.random_bool(mutation_probability) && topology.len() > 1 {
        let position = rng.random_range(0..topology.len());
        Some(topology.remove_at(position))
    } else {
        None
    }
}

/// Merges two strictly increasing id lists into one, without duplicates.
fn sorted_union(a: &[EdgeId], b: &[EdgeId]) -> Vec<EdgeId> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
