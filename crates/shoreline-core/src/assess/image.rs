//! Size-based image authenticity heuristic
//!
//! Not a trained detector. Authenticity is a proxy on pixel count, and the
//! disaster-scene confidence is drawn from an injected [`RandomSource`]
//! standing in for a scene classifier that does not exist yet.

use serde::{Deserialize, Serialize};

use crate::types::{ImageAssessment, ImageProperties, ImageQuality};

/// Placeholder findings attached to any image below the authenticity threshold
pub const LOW_AUTHENTICITY_FINDINGS: [&str; 2] = ["Low resolution", "Compression artifacts"];

/// Source of uniform random draws.
///
/// Implementations must be shareable across concurrent requests; use
/// interior mutability for stateful generators.
pub trait RandomSource: Send + Sync {
    /// Draw a value in `[low, high)`. Random sources never return `high`;
    /// [`FixedSource`] is the one exception.
    fn uniform(&self, low: f64, high: f64) -> f64;
}

/// Always returns the same value, clamped into the closed range
/// `[low, high]`: a value at or above `high` yields `high` itself.
/// A reversed range yields `low`.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        self.0.min(high).max(low)
    }
}

/// Heuristic coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageHeuristicConfig {
    /// Pixel count treated as one unit of resolution
    pub megapixel: f64,
    /// Authenticity gained per unit of resolution
    pub authenticity_per_megapixel: f64,
    /// Authenticity of a zero-pixel image
    pub authenticity_base: f64,
    pub authenticity_cap: f64,
    pub authenticity_threshold: f64,
    pub disaster_low: f64,
    pub disaster_high: f64,
    pub disaster_threshold: f64,
    /// Pixel count at which quality saturates at 1.0
    pub quality_full_pixels: f64,
}

impl Default for ImageHeuristicConfig {
    fn default() -> Self {
        Self {
            megapixel: 1_000_000.0,
            authenticity_per_megapixel: 0.5,
            authenticity_base: 0.4,
            authenticity_cap: 0.9,
            authenticity_threshold: 0.5,
            disaster_low: 0.6,
            disaster_high: 0.9,
            disaster_threshold: 0.7,
            quality_full_pixels: 2_000_000.0,
        }
    }
}

/// Image authenticity heuristic
#[derive(Debug, Clone, Default)]
pub struct ImageHeuristic {
    config: ImageHeuristicConfig,
}

impl ImageHeuristic {
    pub fn new(config: ImageHeuristicConfig) -> Self {
        Self { config }
    }

    /// Assess decoded image metadata. Exactly one draw is taken from `rng`.
    pub fn assess(&self, properties: ImageProperties, rng: &dyn RandomSource) -> ImageAssessment {
        let cfg = &self.config;
        let total_pixels = properties.total_pixels() as f64;

        let authenticity_score = self.authenticity_score(total_pixels);
        let disaster_confidence = rng.uniform(cfg.disaster_low, cfg.disaster_high);

        let is_authentic = authenticity_score > cfg.authenticity_threshold;
        let contains_disaster_scene = disaster_confidence > cfg.disaster_threshold;

        let quality_score = (total_pixels / cfg.quality_full_pixels).min(1.0);
        let suspicious_elements = if is_authentic {
            Vec::new()
        } else {
            LOW_AUTHENTICITY_FINDINGS
                .iter()
                .map(|s| s.to_string())
                .collect()
        };

        ImageAssessment {
            is_authentic,
            authenticity_score,
            contains_disaster_scene,
            disaster_confidence,
            image_properties: properties,
            analysis: ImageQuality {
                quality_score,
                suspicious_elements,
            },
        }
    }

    fn authenticity_score(&self, total_pixels: f64) -> f64 {
        let cfg = &self.config;
        (total_pixels / cfg.megapixel * cfg.authenticity_per_megapixel + cfg.authenticity_base)
            .min(cfg.authenticity_cap)
    }
}
