//! Analyzer configuration
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults (the reference scoring coefficients)
//! 2. JSON config file
//! 3. Environment variables:
//!    - `SHORELINE_RNG_SEED`: seed for the disaster-scene draw
//!    - `SHORELINE_KEYWORD_LIMIT`: keywords kept per report (default: 5)
//!    - `SHORELINE_MAX_IMAGE_BYTES`: largest accepted image payload (default: 20 MiB)

use std::path::Path;

use ::tracing::debug;
use serde::{Deserialize, Serialize};
use shoreline_core::text::DEFAULT_KEYWORD_LIMIT;
use shoreline_core::{ImageHeuristicConfig, ScoringConfig};

use crate::error::{Error, Result};

pub const ENV_RNG_SEED: &str = "SHORELINE_RNG_SEED";
pub const ENV_KEYWORD_LIMIT: &str = "SHORELINE_KEYWORD_LIMIT";
pub const ENV_MAX_IMAGE_BYTES: &str = "SHORELINE_MAX_IMAGE_BYTES";

/// Default image payload limit (20 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Configuration for the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Credibility scoring coefficients
    pub scoring: ScoringConfig,
    /// Image heuristic coefficients
    pub image: ImageHeuristicConfig,
    /// Keywords kept from the noun-phrase list
    pub keyword_limit: usize,
    /// Fixed seed for the disaster-scene draw (entropy-seeded if absent)
    pub rng_seed: Option<u64>,
    /// Largest image payload accepted, in bytes
    pub max_image_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            image: ImageHeuristicConfig::default(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            rng_seed: None,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl AnalyzerConfig {
    /// Load from an optional JSON file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                debug!("Loading analyzer config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file. Missing fields take their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::Config(format!("invalid config file {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production). Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(ENV_RNG_SEED) {
            self.rng_seed = Some(parse_env(ENV_RNG_SEED, &raw)?);
        }
        if let Some(raw) = get(ENV_KEYWORD_LIMIT) {
            self.keyword_limit = parse_env(ENV_KEYWORD_LIMIT, &raw)?;
        }
        if let Some(raw) = get(ENV_MAX_IMAGE_BYTES) {
            self.max_image_bytes = parse_env(ENV_MAX_IMAGE_BYTES, &raw)?;
        }

        Ok(self)
    }

    /// Reject configurations the heuristics cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_image_bytes == 0 {
            return Err(Error::Config("max_image_bytes must be positive".to_string()));
        }
        if !(self.image.disaster_low < self.image.disaster_high) {
            return Err(Error::Config(format!(
                "image.disaster_low ({}) must be below image.disaster_high ({})",
                self.image.disaster_low, self.image.disaster_high
            )));
        }
        if self.image.megapixel <= 0.0 || self.image.quality_full_pixels <= 0.0 {
            return Err(Error::Config(
                "image pixel scales must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{}={:?}: {}", key, raw, e)))
}
