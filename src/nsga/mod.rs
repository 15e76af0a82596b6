//! Population evolution loop.
//!
//! A multi-objective evolutionary search over [`Topology`](crate::topology::Topology)
//! edge subsets, minimizing edge count and all-pairs travel cost at once.
//! Every offspring is repaired to strong connectivity before evaluation.
//!
//! # Key Types
//!
//! - [`NsgaConfig`]: Population size, generations, operator probabilities, seed
//! - [`SurvivorPolicy`]: First-front-only (default) or ranked fronts with crowding
//! - [`NsgaRunner`]: Executes the evolutionary loop
//! - [`NsgaResult`]: Final front with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Sampling, union crossover, removal mutation
//! - [`multi_objective`]: Non-dominated sorting and crowding distance
//!
//! # Selection Note
//!
//! The default [`SurvivorPolicy::FirstFront`] keeps only rank-0 individuals
//! and lets the population shrink below `P` rather than backfilling from
//! lower fronts. The returned front is therefore an approximation, not a
//! complete Pareto set.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
pub mod multi_objective;
pub mod operators;
mod runner;
mod selection;

pub use config::{NsgaConfig, SurvivorPolicy};
pub use runner::{GenerationStats, NsgaResult, NsgaRunner};
pub use selection::{compare_objectives, first_front, select_survivors};
