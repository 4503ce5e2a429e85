//! Training run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hyperparameters for a single training run.
///
/// Defaults: α = 0.1, γ = 0.9, ε = 0.1, 1000 episodes, unseeded RNG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Learning rate α: step size for each value update.
    pub learning_rate: f64,
    /// Discount factor γ: weight applied to estimated future reward.
    pub discount_factor: f64,
    /// Exploration probability ε for the ε-greedy policy.
    pub epsilon: f64,
    /// Number of training episodes.
    pub episodes: usize,
    /// RNG seed; `None` seeds from the system RNG.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 0.1,
            episodes: 1000,
            seed: None,
        }
    }
}

impl TrainConfig {
    /// Create a configuration with the default hyperparameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor γ.
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the exploration probability ε.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the number of training episodes.
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the RNG seed for a deterministic run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that all hyperparameters are in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 || self.learning_rate > 1.0
        {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "learning_rate must be in (0.0, 1.0], got {}",
                    self.learning_rate
                ),
            });
        }
        if !self.discount_factor.is_finite()
            || self.discount_factor < 0.0
            || self.discount_factor > 1.0
        {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "discount_factor must be in [0.0, 1.0], got {}",
                    self.discount_factor
                ),
            });
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 || self.epsilon > 1.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon must be in [0.0, 1.0], got {}", self.epsilon),
            });
        }
        if self.episodes == 0 {
            return Err(Error::InvalidConfiguration {
                message: "episodes must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrainConfig::default();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.discount_factor, 0.9);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.episodes, 1000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = TrainConfig::new()
            .with_learning_rate(0.5)
            .with_discount_factor(0.99)
            .with_epsilon(0.2)
            .with_episodes(50)
            .with_seed(7);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.discount_factor, 0.99);
        assert_eq!(config.epsilon, 0.2);
        assert_eq!(config.episodes, 50);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(TrainConfig::new().with_learning_rate(0.0).validate().is_err());
        assert!(TrainConfig::new().with_learning_rate(1.5).validate().is_err());
        assert!(
            TrainConfig::new()
                .with_learning_rate(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            TrainConfig::new()
                .with_discount_factor(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            TrainConfig::new()
                .with_discount_factor(1.1)
                .validate()
                .is_err()
        );
        assert!(TrainConfig::new().with_epsilon(-0.1).validate().is_err());
        assert!(TrainConfig::new().with_epsilon(1.1).validate().is_err());
        assert!(TrainConfig::new().with_episodes(0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        assert!(TrainConfig::new().with_learning_rate(1.0).validate().is_ok());
        assert!(
            TrainConfig::new()
                .with_discount_factor(0.0)
                .validate()
                .is_ok()
        );
        assert!(TrainConfig::new().with_epsilon(0.0).validate().is_ok());
        assert!(TrainConfig::new().with_epsilon(1.0).validate().is_ok());
        assert!(TrainConfig::new().with_episodes(1).validate().is_ok());
    }
}
