//! Evolutionary loop execution.
//!
//! [`NsgaRunner`] orchestrates the complete search:
//! initialize → (reproduce → combine → select) × G → report front.
//!
//! # Algorithm
//!
//! 1. Sample `P` topologies, repair, evaluate
//! 2. For each generation:
//!    a. Build `P` offspring: two uniform parents (with replacement),
//!       union crossover, repair, removal mutation, repair
//!    b. Evaluate offspring
//!    c. Combine parents and offspring (`2P`)
//!    d. Select survivors per [`SurvivorPolicy`](super::SurvivorPolicy)
//! 3. Return the final population
//!
//! All random draws come from one seeded generator in offspring-slot order.
//! Repair and evaluation are deterministic, so a fixed seed reproduces the
//! same front regardless of parallel evaluation.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::NsgaConfig;
use super::operators::{crossover, mutate, sample_topology};
use super::selection::select_survivors;
use crate::error::Result;
use crate::topology::{repair, CandidateEdgeSet, Solution, Topology};

/// Result of a search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaResult {
    /// Final population, ordered by `(edge_count, travel_cost)` when at
    /// least one generation ran.
    pub front: Vec<Solution>,

    /// Number of generations executed.
    pub generations: usize,

    /// Seed the generator was started from.
    pub seed: u64,

    /// One entry for the initial population, then one per generation.
    pub history: Vec<GenerationStats>,
}

/// Population summary after initialization or a selection step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 0 for the initial population.
    pub generation: usize,
    /// Number of individuals.
    pub population_size: usize,
    /// Fewest edges of any individual.
    pub min_edge_count: usize,
    /// Lowest travel cost of any individual.
    pub min_travel_cost: f64,
}

impl GenerationStats {
    fn of(generation: usize, population: &[Solution]) -> Self {
        Self {
            generation,
            population_size: population.len(),
            min_edge_count: population
                .iter()
                .map(|s| s.objectives.edge_count)
                .min()
                .unwrap_or(0),
            min_travel_cost: population
                .iter()
                .map(|s| s.objectives.travel_cost)
                .fold(f64::INFINITY, f64::min),
        }
    }
}

/// Executes the topology search.
///
/// # Usage
///
/// ```
/// use u_netopt::nsga::{NsgaConfig, NsgaRunner};
/// use u_netopt::topology::CandidateEdgeSet;
///
/// let candidates =
///     CandidateEdgeSet::complete(5, |from, to| 1.0 + 0.1 * from as f64 + to as f64).unwrap();
/// let config = NsgaConfig::default()
///     .with_population_size(8)
///     .with_generations(5)
///     .with_seed(42);
///
/// let result = NsgaRunner::run(&candidates, &config).unwrap();
/// assert!(!result.front.is_empty());
/// assert!(result.front.len() <= 8);
/// ```
pub struct NsgaRunner;

impl NsgaRunner {
    /// Runs the search over `candidates`.
    ///
    /// # Errors
    /// - [`InvalidParameters`](crate::TopologyError::InvalidParameters) from
    ///   [`NsgaConfig::validate`]
    /// - [`RepairInfeasible`](crate::TopologyError::RepairInfeasible) if the
    ///   candidate set cannot bridge some pair of components
    /// - any evaluation error; the run stops at the first failing individual
    pub fn run(candidates: &CandidateEdgeSet, config: &NsgaConfig) -> Result<NsgaResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        info!(
            "topology search: {} nodes, {} candidate edges, P={}, G={}, seed={}",
            candidates.node_count(),
            candidates.len(),
            config.population_size,
            config.generations,
            seed
        );

        // 1. Initialize
        let mut initial = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let mut topology = sample_topology(candidates, config.keep_probability, &mut rng);
            repair(&mut topology, candidates)?;
            initial.push(topology);
        }
        let mut population = evaluate_batch(initial, candidates, config.parallel)?;

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(GenerationStats::of(0, &population));

        // 2. Evolutionary loop
        for generation in 1..=config.generations {
            let offspring = reproduce(&population, candidates, config, &mut rng)?;
            population.extend(evaluate_batch(offspring, candidates, config.parallel)?);
            population =
                select_survivors(population, config.population_size, config.survivor_policy);

            let stats = GenerationStats::of(generation, &population);
            debug!(
                "generation {}: {} survivors, min edges {}, min travel cost {:.2}",
                generation, stats.population_size, stats.min_edge_count, stats.min_travel_cost
            );
            history.push(stats);
        }

        info!(
            "topology search finished: {} solutions after {} generations",
            population.len(),
            config.generations
        );

        Ok(NsgaResult {
            front: population,
            generations: config.generations,
            seed,
            history,
        })
    }
}

/// Builds `P` repaired, unevaluated offspring.
fn reproduce<R: Rng>(
    population: &[Solution],
    candidates: &CandidateEdgeSet,
    config: &NsgaConfig,
    rng: &mut R,
) -> Result<Vec<Topology>> {
    let mut offspring = Vec::with_capacity(config.population_size);
    for _ in 0..config.population_size {
        let parent1 = &population[rng.random_range(0..population.len())];
        let parent2 = &population[rng.random_range(0..population.len())];

        let mut child = crossover(
            &parent1.topology,
            &parent2.topology,
            config.keep_probability,
            rng,
        );
        repair(&mut child, candidates)?;
        mutate(&mut child, config.mutation_probability, rng);
        repair(&mut child, candidates)?;

        offspring.push(child);
    }
    Ok(offspring)
}

/// Evaluate a batch of repaired topologies.
#[cfg(feature = "parallel")]
fn evaluate_batch(
    topologies: Vec<Topology>,
    candidates: &CandidateEdgeSet,
    parallel: bool,
) -> Result<Vec<Solution>> {
    if parallel {
        topologies
            .into_par_iter()
            .map(|t| Solution::evaluate(t, candidates))
            .collect()
    } else {
        topologies
            .into_iter()
            .map(|t| Solution::evaluate(t, candidates))
            .collect()
    }
}

/// Evaluate a batch of repaired topologies.
#[cfg(not(feature = "parallel"))]
fn evaluate_batch(
    topologies: Vec<Topology>,
    candidates: &CandidateEdgeSet,
    _parallel: bool,
) -> Result<Vec<Solution>> {
    topologies
        .into_iter()
        .map(|t| Solution::evaluate(t, candidates))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
