//! Expedition configuration.
//!
//! The binary takes no arguments; it runs [`ExpeditionConfig::default`].
//! Library callers and tests build their own configuration, usually with a
//! fixed seed for reproducible draws.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::actor::Explorer;
use crate::artifact::{Artifact, Rarity};
use crate::environment::EnvironmentState;
use crate::error::{ExpeditionResult, ValidationError};
use crate::logger::Logger;
use crate::pool::ArtifactPool;

/// Everything needed to set up one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionConfig {
    /// Initial pool contents.
    pub artifacts: Vec<Artifact>,
    /// Explorer names, in turn order.
    pub explorers: Vec<String>,
    /// RNG seed. `None` seeds from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ExpeditionConfig {
    fn default() -> Self {
        Self {
            artifacts: vec![
                Artifact::new("a1", "Lighthouse figurine", Rarity::Common),
                Artifact::new("a2", "Storm rune", Rarity::Rare),
                Artifact::new("a3", "Kraken's eye", Rarity::Epic),
                Artifact::new("a4", "Lens shard", Rarity::Common),
            ],
            explorers: vec!["Alice".to_string(), "Boris".to_string(), "Katya".to_string()],
            seed: None,
        }
    }
}

impl ExpeditionConfig {
    /// Returns a copy with a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    ///
    /// This is called by [`ExpeditionConfig::build`].
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a blank artifact id or name, or a
    /// blank explorer name. Duplicate ids are reported by the pool.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for artifact in &self.artifacts {
            if artifact.id.is_blank() {
                return Err(ValidationError::EmptyArtifactId);
            }
            if artifact.name.trim().is_empty() {
                return Err(ValidationError::EmptyArtifactName {
                    id: artifact.id.clone(),
                });
            }
        }
        if self.explorers.iter().any(|name| name.trim().is_empty()) {
            return Err(ValidationError::EmptyActorName);
        }
        Ok(())
    }

    /// Builds a ready-to-run environment with every explorer registered.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is invalid.
    pub fn build(&self, log: Logger) -> ExpeditionResult<EnvironmentState> {
        self.validate()?;
        let pool = ArtifactPool::new(self.artifacts.clone())?;

        let mut env = match self.seed {
            Some(seed) => EnvironmentState::new(pool, ChaCha8Rng::seed_from_u64(seed), log),
            None => EnvironmentState::with_os_rng(pool, log),
        };
        for name in &self.explorers {
            env.register(Explorer::new(name.clone()))?;
        }
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::environment::RunState;

    #[test]
    fn default_config_is_valid() {
        ExpeditionConfig::default().validate().unwrap();
    }

    #[test]
    fn default_config_has_lighthouse_set() {
        let config = ExpeditionConfig::default();
        assert_eq!(config.artifacts.len(), 4);
        assert_eq!(
            config.artifacts.iter().filter(|a| a.rarity.is_top_tier()).count(),
            1
        );
        assert_eq!(config.explorers, vec!["Alice", "Boris", "Katya"]);
        assert!(config.seed.is_none());
    }

    #[test]
    fn config_rejects_blank_fields() {
        let mut c = ExpeditionConfig::default();
        c.explorers.push(" ".to_string());
        assert_eq!(c.validate(), Err(ValidationError::EmptyActorName));

        let mut c = ExpeditionConfig::default();
        c.artifacts.push(Artifact::new("", "Nameless", Rarity::Common));
        assert_eq!(c.validate(), Err(ValidationError::EmptyArtifactId));

        let mut c = ExpeditionConfig::default();
        c.artifacts.push(Artifact::new("a9", "", Rarity::Rare));
        assert!(matches!(
            c.validate(),
            Err(ValidationError::EmptyArtifactName { .. })
        ));
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let mut c = ExpeditionConfig::default();
        c.artifacts.push(Artifact::new("a1", "Copy", Rarity::Common));
        let err = c.build(Logger::in_memory()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn build_registers_explorers_in_order() {
        let env = ExpeditionConfig::default()
            .with_seed(1)
            .build(Logger::in_memory())
            .unwrap();
        assert_eq!(env.roster_names(), vec!["Alice", "Boris", "Katya"]);
        assert_eq!(env.pool().len(), 4);
        assert_eq!(env.state(), RunState::Ready);
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = ExpeditionConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: ExpeditionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
