//! Pareto search for strongly connected directed network topologies.
//!
//! Given a fixed set of weighted candidate edges, finds edge subsets that
//! trade off topology size (edge count) against aggregate node-to-node
//! travel cost, while keeping every node reachable from every other.
//!
//! - **Graph analysis** ([`graph`]): strongly connected components
//!   (Kosaraju, iterative) and single-source shortest paths (Dijkstra).
//! - **Topologies** ([`topology`]): the immutable candidate edge set, edge
//!   subsets, connectivity repair, and objective evaluation.
//! - **Evolution** ([`nsga`]): a seeded multi-objective evolutionary loop
//!   that samples, recombines, mutates, repairs, and selects topologies.
//!
//! # Example
//!
//! ```
//! use u_netopt::nsga::{NsgaConfig, NsgaRunner};
//! use u_netopt::topology::CandidateEdgeSet;
//!
//! let candidates =
//!     CandidateEdgeSet::complete(6, |from, to| 1.0 + 0.1 * from as f64 + to as f64)?;
//! let config = NsgaConfig::default()
//!     .with_population_size(10)
//!     .with_generations(20)
//!     .with_seed(7);
//!
//! let result = NsgaRunner::run(&candidates, &config)?;
//! for solution in &result.front {
//!     assert!(solution.objectives.travel_cost.is_finite());
//! }
//! # Ok::<(), u_netopt::TopologyError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate offspring with rayon
//! - `serde`: `Serialize`/`Deserialize` for edges, topologies, results and
//!   configuration

mod error;
pub mod graph;
pub mod nsga;
pub mod topology;

pub use error::{Result, TopologyError};
