//! The fixed universe of edges a search may draw from.

use std::collections::HashSet;

use crate::error::{Result, TopologyError};
use crate::graph::{Edge, NodeId};

/// Index of an edge inside a [`CandidateEdgeSet`].
pub type EdgeId = usize;

/// Immutable set of weighted directed edges over `node_count` nodes.
///
/// Holds at most one edge per ordered `(from, to)` pair, every weight
/// strictly positive and finite. There is no mutating API: once built, the
/// set stays fixed for the life of every search that borrows it.
///
/// # Examples
///
/// ```
/// use u_netopt::topology::CandidateEdgeSet;
///
/// // Every ordered pair of 4 nodes, weight 1 + 0.1·from + to
/// let candidates =
///     CandidateEdgeSet::complete(4, |from, to| 1.0 + 0.1 * from as f64 + to as f64).unwrap();
/// assert_eq!(candidates.len(), 12);
/// assert_eq!(candidates.edge(0).to, 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CandidateEdgeSet {
    node_count: usize,
    edges: Vec<Edge>,
}

impl CandidateEdgeSet {
    /// Validates and wraps an edge list. Edge order is preserved and defines
    /// each edge's [`EdgeId`].
    ///
    /// # Errors
    /// - [`TopologyError::NodeOutOfRange`] for an endpoint `>= node_count`
    /// - [`TopologyError::InvalidWeight`] for a weight that is not positive
    ///   and finite
    /// - [`TopologyError::DuplicateEdge`] for a repeated ordered pair
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self> {
        let mut pairs = HashSet::with_capacity(edges.len());

        for edge in &edges {
            for node in [edge.from, edge.to] {
                if node >= node_count {
                    return Err(TopologyError::NodeOutOfRange { node, node_count });
                }
            }
            if !(edge.weight > 0.0 && edge.weight.is_finite()) {
                return Err(TopologyError::InvalidWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
            if !pairs.insert((edge.from, edge.to)) {
                return Err(TopologyError::DuplicateEdge {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }

        Ok(Self { node_count, edges })
    }

    /// One edge for every ordered pair of distinct nodes, in row-major
    /// `(from, to)` order, weighted by `weight(from, to)`.
    pub fn complete<F>(node_count: usize, weight: F) -> Result<Self>
    where
        F: Fn(NodeId, NodeId) -> f64,
    {
        let edges = (0..node_count)
            .flat_map(|from| {
                (0..node_count)
                    .filter(move |&to| to != from)
                    .map(move |to| (from, to))
            })
            .map(|(from, to)| Edge::new(from, to, weight(from, to)))
            .collect();
        Self::new(node_count, edges)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of candidate edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no candidate edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All candidate edges, indexed by [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge with the given id.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// The edge with the given id, if any.
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }
}
