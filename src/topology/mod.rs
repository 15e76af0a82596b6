//! Network topologies over a fixed candidate edge set.
//!
//! # Key Types
//!
//! - [`CandidateEdgeSet`]: the immutable edge universe a search draws from
//! - [`Topology`]: an edge subset (the evolutionary genome)
//! - [`Objectives`]: edge count and all-pairs travel cost, both minimized
//! - [`Solution`]: a topology paired with its objectives
//!
//! # Operations
//!
//! - [`repair`]: restores strong connectivity by bridging components
//! - [`evaluate`]: computes [`Objectives`] for a strongly connected topology

mod candidates;
mod fitness;
mod individual;
mod repair;

pub use candidates::{CandidateEdgeSet, EdgeId};
pub use fitness::{evaluate, total_travel_cost};
pub use individual::{Objectives, Solution, Topology};
pub use repair::repair;
