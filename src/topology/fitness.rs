//! Objective evaluation for strongly connected topologies.

use super::candidates::CandidateEdgeSet;
use super::individual::{Objectives, Solution, Topology};
use crate::error::{Result, TopologyError};
use crate::graph::Digraph;

/// Computes both objectives of a topology.
///
/// - `edge_count`: number of edges in the subset
/// - `travel_cost`: Σ over every ordered node pair `(s, t)`, `s == t`
///   included, of the shortest directed distance `s → t`
///
/// The topology must already be strongly connected; run
/// [`repair`](super::repair) first.
///
/// # Errors
/// [`TopologyError::DisconnectedGraph`] naming the first unreachable pair
/// (sources scanned in node order).
///
/// # Example
///
/// ```
/// use u_netopt::topology::{evaluate, repair, CandidateEdgeSet, Topology};
///
/// let candidates = CandidateEdgeSet::complete(2, |from, _| 1.0 + from as f64).unwrap();
/// let mut topology = Topology::new();
/// repair(&mut topology, &candidates).unwrap();
///
/// let objectives = evaluate(&topology, &candidates).unwrap();
/// assert_eq!(objectives.edge_count, 2);
/// assert_eq!(objectives.travel_cost, 3.0); // 0 + 1 + 2 + 0
/// ```
pub fn evaluate(topology: &Topology, candidates: &CandidateEdgeSet) -> Result<Objectives> {
    let graph = Digraph::from_edges(candidates.node_count(), topology.edges(candidates))?;
    Ok(Objectives {
        edge_count: topology.len(),
        travel_cost: total_travel_cost(&graph)?,
    })
}

/// Sum of all-pairs shortest distances, one Dijkstra run per source.
///
/// # Errors
/// [`TopologyError::DisconnectedGraph`] if any pair is unreachable, or the
/// shortest-path errors of [`Digraph::shortest_paths`].
pub fn total_travel_cost(graph: &Digraph) -> Result<f64> {
    let mut total = 0.0;
    for source in 0..graph.node_count() {
        let distances = graph.shortest_paths(source)?;
        for (target, &distance) in distances.iter().enumerate() {
            if !distance.is_finite() {
                return Err(TopologyError::DisconnectedGraph {
                    from: source,
                    to: target,
                });
            }
            total += distance;
        }
    }
    Ok(total)
}

impl Solution {
    /// Evaluates `topology` and pairs it with its objectives.
    pub fn evaluate(topology: Topology, candidates: &CandidateEdgeSet) -> Result<Self> {
        let objectives = evaluate(&topology, candidates)?;
        Ok(Self {
            topology,
            objectives,
        })
    }
}
