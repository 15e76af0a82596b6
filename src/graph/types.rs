//! Weighted directed edges and the adjacency structure the graph algorithms
//! run on.

use crate::error::{Result, TopologyError};

/// Node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// A directed edge with a travel weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Source node.
    pub from: NodeId,
    /// Destination node.
    pub to: NodeId,
    /// Travel weight. Candidate sets require it to be positive and finite.
    pub weight: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Weighted adjacency list over a fixed node range.
///
/// Built once per graph and reused by every traversal, so that evaluating
/// `n` shortest-path sources does not rebuild adjacency `n` times.
///
/// # Examples
///
/// ```
/// use u_netopt::graph::{Digraph, Edge};
///
/// let edges = [Edge::new(0, 1, 2.0), Edge::new(1, 0, 3.0)];
/// let graph = Digraph::from_edges(2, &edges).unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.successors(0), &[(1, 2.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Digraph {
    node_count: usize,
    edge_count: usize,
    successors: Vec<Vec<(NodeId, f64)>>,
}

impl Digraph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edge_count: 0,
            successors: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from an edge sequence.
    ///
    /// # Errors
    /// [`TopologyError::NodeOutOfRange`] if an endpoint is not below
    /// `node_count`.
    pub fn from_edges<'a, I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = Self::new(node_count);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Appends one directed edge.
    pub fn add_edge(&mut self, edge: &Edge) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;
        self.successors[edge.from].push((edge.to, edge.weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing `(target, weight)` pairs of `node`, in insertion order.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    pub fn successors(&self, node: NodeId) -> &[(NodeId, f64)] {
        &self.successors[node]
    }

    /// Unweighted forward adjacency.
    pub(crate) fn forward_adjacency(&self) -> Vec<Vec<NodeId>> {
        self.successors
            .iter()
            .map(|out| out.iter().map(|&(to, _)| to).collect())
            .collect()
    }

    /// Unweighted adjacency of the transposed graph.
    pub(crate) fn reverse_adjacency(&self) -> Vec<Vec<NodeId>> {
        let mut reverse = vec![Vec::new(); self.node_count];
        for (from, out) in self.successors.iter().enumerate() {
            for &(to, _) in out {
                reverse[to].push(from);
            }
        }
        reverse
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(TopologyError::NodeOutOfRange {
                node,
                node_count: self.node_count,
            })
        }
    }
}
