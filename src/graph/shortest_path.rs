//! Single-source shortest paths over non-negative weights (Dijkstra).
//!
//! The frontier is a binary heap keyed by `(distance, node id)` with lazy
//! deletion: an improved node is pushed again and stale entries are skipped
//! when popped. Ties in distance go to the smaller node id.
//!
//! # Complexity
//! O((V + E) log V)
//!
//! # Reference
//! Dijkstra (1959), "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::{Digraph, Edge, NodeId};
use crate::error::{Result, TopologyError};

/// Shortest directed distance from `source` to every node.
///
/// Unreachable nodes get `f64::INFINITY`; `source` itself gets `0.0`.
///
/// # Errors
/// - [`TopologyError::InvalidWeight`] if any edge weight is negative or NaN
/// - [`TopologyError::NodeOutOfRange`] if `source` or an edge endpoint is
///   not below `node_count`
///
/// # Example
///
/// ```
/// use u_netopt::graph::{shortest_paths, Edge};
///
/// let edges = [Edge::new(0, 1, 4.0), Edge::new(0, 2, 1.0), Edge::new(2, 1, 2.0)];
/// let dist = shortest_paths(&edges, 0, 4).unwrap();
/// assert_eq!(&dist[..3], &[0.0, 3.0, 1.0]);
/// assert!(dist[3].is_infinite());
/// ```
pub fn shortest_paths<'a, I>(edges: I, source: NodeId, node_count: usize) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = &'a Edge>,
{
    Digraph::from_edges(node_count, edges)?.shortest_paths(source)
}

impl Digraph {
    /// Shortest distances from `source`. See [`shortest_paths`].
    pub fn shortest_paths(&self, source: NodeId) -> Result<Vec<f64>> {
        self.check_node(source)?;
        self.check_weights()?;

        let mut distances = vec![f64::INFINITY; self.node_count()];
        let mut settled = vec![false; self.node_count()];
        let mut frontier = BinaryHeap::new();

        distances[source] = 0.0;
        frontier.push(Frontier {
            distance: 0.0,
            node: source,
        });

        while let Some(Frontier { distance, node }) = frontier.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;

            for &(next, weight) in self.successors(node) {
                let candidate = distance + weight;
                if candidate < distances[next] {
                    distances[next] = candidate;
                    frontier.push(Frontier {
                        distance: candidate,
                        node: next,
                    });
                }
            }
        }

        Ok(distances)
    }

    fn check_weights(&self) -> Result<()> {
        for from in 0..self.node_count() {
            for &(to, weight) in self.successors(from) {
                // `!(w >= 0)` also catches NaN
                if !(weight >= 0.0) {
                    return Err(TopologyError::InvalidWeight { from, to, weight });
                }
            }
        }
        Ok(())
    }
}

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first, then the smallest node id.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}
