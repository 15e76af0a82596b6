//! Connectivity repair.
//!
//! Patches an arbitrary edge subset into a strongly connected digraph by
//! adding, for every ordered pair of strongly connected components, the
//! cheapest candidate edge leading from one to the other.
//!
//! # Algorithm
//!
//! 1. Partition the nodes into SCCs of the subset's graph
//! 2. One scan of the candidate set keeps the cheapest edge per ordered
//!    component pair (ties go to the lower edge id)
//! 3. Every ordered pair must have a bridge; all of them are added at once
//!
//! Since each ordered component pair gains a direct edge, one pass always
//! leaves a single component.
//!
//! # Complexity
//! O(V + E + |candidates| + k²) for k components

use log::trace;

use super::candidates::{CandidateEdgeSet, EdgeId};
use super::individual::Topology;
use crate::error::{Result, TopologyError};
use crate::graph::{Digraph, NodeId};

/// Makes `topology` strongly connected using edges from `candidates`.
///
/// Returns the number of edges added (0 if it was already strongly
/// connected).
///
/// # Errors
/// [`TopologyError::RepairInfeasible`] if some ordered component pair has no
/// candidate edge between them. The topology is left untouched in that case.
///
/// # Example
///
/// ```
/// use u_netopt::topology::{repair, CandidateEdgeSet, Topology};
///
/// let candidates = CandidateEdgeSet::complete(3, |from, to| (1 + from + to) as f64).unwrap();
/// let mut topology = Topology::new();
/// let added = repair(&mut topology, &candidates).unwrap();
/// assert_eq!(added, 6); // three singleton components, 3·2 ordered pairs
/// ```
pub fn repair(topology: &mut Topology, candidates: &CandidateEdgeSet) -> Result<usize> {
    let node_count = candidates.node_count();
    let graph = Digraph::from_edges(node_count, topology.edges(candidates))?;
    let components = graph.strongly_connected_components();
    let k = components.len();
    if k <= 1 {
        return Ok(0);
    }

    let mut owner = vec![0usize; node_count];
    for (c, component) in components.iter().enumerate() {
        for &node in component {
            owner[node] = c;
        }
    }

    // cheapest[from_c * k + to_c]
    let mut cheapest: Vec<Option<EdgeId>> = vec![None; k * k];
    for (id, edge) in candidates.edges().iter().enumerate() {
        let (from_c, to_c) = (owner[edge.from], owner[edge.to]);
        if from_c == to_c {
            continue;
        }
        let slot = &mut cheapest[from_c * k + to_c];
        match *slot {
            Some(best) if candidates.edge(best).weight <= edge.weight => {}
            _ => *slot = Some(id),
        }
    }

    let mut bridges = Vec::with_capacity(k * (k - 1));
    for from_c in 0..k {
        for to_c in 0..k {
            if from_c == to_c {
                continue;
            }
            let bridge = cheapest[from_c * k + to_c].ok_or_else(|| TopologyError::RepairInfeasible {
                from_component: representative(&components[from_c]),
                to_component: representative(&components[to_c]),
            })?;
            bridges.push(bridge);
        }
    }

    let added = bridges.into_iter().filter(|&id| topology.insert(id)).count();
    trace!("repair: {k} components, {added} bridging edges added");
    Ok(added)
}

/// Smallest node id of a component.
fn representative(component: &[NodeId]) -> NodeId {
    component.iter().copied().min().unwrap_or_default()
}
