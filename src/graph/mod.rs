//! Graph analysis engine.
//!
//! Domain-agnostic directed-graph algorithms used by repair and evaluation:
//!
//! - [`strongly_connected_components`]: Kosaraju's two-pass SCC partition
//! - [`shortest_paths`]: Dijkstra single-source distances over non-negative
//!   weights
//!
//! Both free functions take any iterator of [`Edge`] references. Callers that
//! run many queries against the same edge set should build a [`Digraph`]
//! once and use its methods.

mod scc;
mod shortest_path;
mod types;

pub use scc::{is_strongly_connected, strongly_connected_components};
pub use shortest_path::shortest_paths;
pub use types::{Digraph, Edge, NodeId};
