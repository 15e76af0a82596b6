//! Error taxonomy shared by the graph engine, repair, evaluation and the
//! evolutionary loop.
//!
//! Every variant is a precondition violation. Nothing in this crate patches
//! around one: the error is returned to the caller as soon as it is detected.

use crate::graph::NodeId;

/// Errors raised by topology search operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopologyError {
    /// An edge weight is negative, NaN, or (for candidate sets) not strictly
    /// positive and finite.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    /// The candidate set has no edge bridging two components.
    ///
    /// Components are identified by their smallest node id.
    #[error("no candidate edge bridges component {from_component} to component {to_component}")]
    RepairInfeasible {
        from_component: NodeId,
        to_component: NodeId,
    },

    /// Objective evaluation found an unreachable ordered node pair.
    #[error("graph is not strongly connected: node {to} unreachable from node {from}")]
    DisconnectedGraph { from: NodeId, to: NodeId },

    /// Search parameters are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A node id lies outside `[0, node_count)`.
    #[error("node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    /// A candidate set lists the same ordered pair twice.
    #[error("duplicate candidate edge {from} -> {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TopologyError>;
