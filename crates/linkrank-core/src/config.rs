//! Configuration management

use crate::error::{check_damping, check_samples, check_threshold, LinkRankError, Result};
use crate::iterative::IterativeEstimator;
use crate::sampling::SamplingEstimator;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking parameters
///
/// Every field is optional in the YAML file and falls back to the
/// reference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link (reference 0.85)
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of pages drawn by the sampling estimator (reference 10000)
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Convergence threshold of the iterative estimator (reference 0.001)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Seed for reproducible sampling
    #[serde(default)]
    pub seed: Option<u64>,

    /// Decimal places used when printing ranks
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_damping() -> f64 {
    crate::DAMPING
}

fn default_samples() -> usize {
    crate::SAMPLES
}

fn default_threshold() -> f64 {
    crate::CONVERGENCE_THRESHOLD
}

fn default_precision() -> usize {
    4
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            seed: None,
            precision: default_precision(),
        }
    }
}

impl RankConfig {
    /// Load config from `$LINKRANK_CONFIG` or the default path
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var("LINKRANK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `LINKRANK_DAMPING`, `LINKRANK_SAMPLES` and `LINKRANK_SEED`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(damping) = env_value("LINKRANK_DAMPING")? {
            self.damping = damping;
        }
        if let Some(samples) = env_value("LINKRANK_SAMPLES")? {
            self.samples = samples;
        }
        if let Some(seed) = env_value("LINKRANK_SEED")? {
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Check every parameter before any ranking starts
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        check_samples(self.samples)?;
        check_threshold(self.threshold)?;
        Ok(())
    }

    /// Sampling estimator configured from this config
    pub fn sampling_estimator(&self) -> SamplingEstimator {
        SamplingEstimator {
            damping: self.damping,
            samples: self.samples,
            seed: self.seed,
        }
    }

    /// Iterative estimator configured from this config
    pub fn iterative_estimator(&self) -> IterativeEstimator {
        IterativeEstimator {
            damping: self.damping,
            threshold: self.threshold,
        }
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| LinkRankError::Config(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(None),
    }
}
