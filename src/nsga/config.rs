//! Search configuration.
//!
//! [`NsgaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, TopologyError};

/// How survivors are chosen from the combined parent + offspring pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurvivorPolicy {
    /// Keep only individuals no one in the pool dominates, best
    /// `(edge_count, travel_cost)` first, at most `population_size` of them.
    ///
    /// The population shrinks whenever fewer than `population_size`
    /// individuals are non-dominated; lower fronts are never used to
    /// backfill.
    #[default]
    FirstFront,

    /// Fill from successive non-dominated fronts; the front that overflows is
    /// cut by descending crowding distance. Always keeps `population_size`
    /// survivors, but they are no longer guaranteed to be mutually
    /// non-dominated.
    ///
    /// Reference: Deb et al. (2002), NSGA-II
    RankedFronts,
}

/// Configuration for the topology search.
///
/// # Defaults
///
/// ```
/// use u_netopt::nsga::NsgaConfig;
///
/// let config = NsgaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 1000);
/// assert_eq!(config.keep_probability, 0.5);
/// assert_eq!(config.mutation_probability, 0.2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_netopt::nsga::{NsgaConfig, SurvivorPolicy};
///
/// let config = NsgaConfig::default()
///     .with_population_size(40)
///     .with_generations(200)
///     .with_mutation_probability(0.3)
///     .with_survivor_policy(SurvivorPolicy::RankedFronts)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// Target population size `P`. The number of offspring per generation
    /// is always `P`; survivors may be fewer.
    pub population_size: usize,

    /// Number of generations `G`. Zero returns the initial population.
    pub generations: usize,

    /// Probability `p` of retaining each edge, both when sampling the
    /// initial population and when thinning a crossover union.
    pub keep_probability: f64,

    /// Probability `m` of removing one random edge from an offspring.
    pub mutation_probability: f64,

    /// Survivor selection rule.
    pub survivor_policy: SurvivorPolicy,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled. Evaluation draws
    /// no randomness, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, which is logged at `info` level.
    pub seed: Option<u64>,
}

impl Default for NsgaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 1000,
            keep_probability: 0.5,
            mutation_probability: 0.2,
            survivor_policy: SurvivorPolicy::FirstFront,
            parallel: true,
            seed: None,
        }
    }
}

impl NsgaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the edge keep probability.
    pub fn with_keep_probability(mut self, p: f64) -> Self {
        self.keep_probability = p;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, m: f64) -> Self {
        self.mutation_probability = m;
        self
    }

    /// Sets the survivor policy.
    pub fn with_survivor_policy(mut self, policy: SurvivorPolicy) -> Self {
        self.survivor_policy = policy;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Probabilities are not clamped by the builders; out-of-range values
    /// are reported here instead.
    ///
    /// # Errors
    /// [`TopologyError::InvalidParameters`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TopologyError::InvalidParameters(
                "population_size must be at least 1".into(),
            ));
        }
        check_probability("keep_probability", self.keep_probability)?;
        check_probability("mutation_probability", self.mutation_probability)?;
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TopologyError::InvalidParameters(format!(
            "{name} must lie in [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NsgaConfig::default();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 1000);
        assert!((config.keep_probability - 0.5).abs() < 1e-10);
        assert!((config.mutation_probability - 0.2).abs() < 1e-10);
        assert_eq!(config.survivor_policy, SurvivorPolicy::FirstFront);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = NsgaConfig::default()
            .with_population_size(50)
            .with_generations(10)
            .with_keep_probability(0.3)
            .with_mutation_probability(0.9)
            .with_survivor_policy(SurvivorPolicy::RankedFronts)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 10);
        assert!((config.keep_probability - 0.3).abs() < 1e-10);
        assert!((config.mutation_probability - 0.9).abs() < 1e-10);
        assert_eq!(config.survivor_policy, SurvivorPolicy::RankedFronts);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(NsgaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations_is_allowed() {
        assert!(NsgaConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let err = NsgaConfig::default()
            .with_population_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TopologyError::InvalidParameters(_)));
    }

    #[test]
    fn test_validate_probability_bounds() {
        for p in [-0.1, 1.1, f64::NAN] {
            assert!(NsgaConfig::default().with_keep_probability(p).validate().is_err());
            assert!(NsgaConfig::default()
                .with_mutation_probability(p)
                .validate()
                .is_err());
        }
        for p in [0.0, 1.0] {
            assert!(NsgaConfig::default().with_keep_probability(p).validate().is_ok());
            assert!(NsgaConfig::default()
                .with_mutation_probability(p)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_validate_message_names_field() {
        let err = NsgaConfig::default()
            .with_mutation_probability(2.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("mutation_probability"));
    }
}
