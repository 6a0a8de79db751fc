use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Runtime settings of the arena service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Accessory that raises the critical chance
    pub critical_accessory_id: u32,

    /// Accessory that re-flips a lost turn-order tie
    pub speed_accessory_id: u32,

    /// Fixed seed for reproducible runs; entropy when absent
    pub rng_seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            critical_accessory_id: 3,
            speed_accessory_id: 4,
            rng_seed: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_json_str(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Failed to parse service config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_json_str(&body)
    }

    /// Builder-style seed setter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.critical_accessory_id, 3);
        assert_eq!(config.speed_accessory_id, 4);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ServiceConfig::from_json_str(r#"{"rng_seed": 42}"#).unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.critical_accessory_id, 3);

        assert!(ServiceConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = ServiceConfig::default().with_seed(7);
        let mut first = config.rng();
        let mut second = config.rng();
        for _ in 0..5 {
            assert_eq!(first.gen_range(0..1000u32), second.gen_range(0..1000u32));
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ServiceConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
