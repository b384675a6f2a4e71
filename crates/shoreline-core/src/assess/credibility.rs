//! Credibility scoring for hazard reports
//!
//! Linear weighting over four signals:
//! - Fake-indicator gate (lexicon hit raises the base fake score)
//! - Severity prior (drives the risk score)
//! - Hazard type prior (discounts the fake score)
//! - Location presence (risk bonus)
//!
//! ```text
//! risk = min(severity + (0.2 if located), 1.0)
//! fake = min(base - hazard * 0.2, 0.8)        base = 0.3 | 0.1
//! is_fake     = fake > 0.4
//! is_verified = !is_fake && risk > 0.3
//! ```
//!
//! The fake score is signed; it is never floored at zero.

use serde::{Deserialize, Serialize};

use super::lexicon::FakeIndicators;
use super::priors::{PriorTable, HAZARD_CREDIBILITY, SEVERITY_WEIGHTS};
use crate::types::{CredibilityAssessment, FakeDetection, ReportInput};

/// Reasons attached to a detection when the lexicon gate fires
pub const INDICATOR_REASONS: [&str; 2] = ["Text analysis", "Keyword detection"];

/// Scoring coefficients. The defaults are the reference coefficients;
/// changing any of them changes verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base fake score when an indicator is present
    pub indicator_fake_base: f64,
    /// Base fake score when no indicator is present
    pub clean_fake_base: f64,
    /// Multiplier applied to the hazard prior before subtracting it
    pub hazard_discount: f64,
    /// Upper bound on the fake score
    pub fake_cap: f64,
    /// Fake score above which a report is flagged fake
    pub fake_threshold: f64,
    /// Risk bonus for a report with coordinates
    pub location_bonus: f64,
    /// Upper bound on the risk score
    pub risk_cap: f64,
    /// Risk score above which a non-fake report is verified
    pub verify_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            indicator_fake_base: 0.3,
            clean_fake_base: 0.1,
            hazard_discount: 0.2,
            fake_cap: 0.8,
            fake_threshold: 0.4,
            location_bonus: 0.2,
            risk_cap: 1.0,
            verify_threshold: 0.3,
        }
    }
}

/// Intermediate factors, kept for auditing a verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub has_fake_indicators: bool,
    pub base_fake_score: f64,
    pub severity_factor: f64,
    pub hazard_factor: f64,
    pub severity_known: bool,
    pub hazard_known: bool,
    pub risk_score: f64,
    pub fake_probability: f64,
}

/// Deterministic credibility scorer
#[derive(Debug, Clone)]
pub struct CredibilityScorer {
    config: ScoringConfig,
    severity: PriorTable,
    hazard: PriorTable,
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl CredibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            severity: SEVERITY_WEIGHTS,
            hazard: HAZARD_CREDIBILITY,
        }
    }

    /// Score a report given the indicators found in its text.
    pub fn score_report(
        &self,
        report: &ReportInput,
        indicators: &FakeIndicators,
    ) -> CredibilityAssessment {
        self.score(
            indicators.is_present(),
            &report.severity,
            &report.hazard_type,
            report.has_location(),
        )
    }

    /// Score raw signals. Never fails; unknown labels use the table defaults.
    pub fn score(
        &self,
        has_fake_indicators: bool,
        severity: &str,
        hazard_type: &str,
        has_location: bool,
    ) -> CredibilityAssessment {
        self.verdict(&self.breakdown(has_fake_indicators, severity, hazard_type, has_location))
    }

    /// Decide fake and verified flags from already computed factors.
    pub fn verdict(&self, breakdown: &ScoreBreakdown) -> CredibilityAssessment {
        let is_fake = breakdown.fake_probability > self.config.fake_threshold;
        let is_verified = !is_fake && breakdown.risk_score > self.config.verify_threshold;

        let reasons = if breakdown.has_fake_indicators {
            INDICATOR_REASONS.iter().map(|r| r.to_string()).collect()
        } else {
            Vec::new()
        };

        CredibilityAssessment {
            fake_detection: FakeDetection {
                is_fake,
                confidence: breakdown.fake_probability,
                reasons,
            },
            risk_score: breakdown.risk_score,
            is_verified,
        }
    }

    /// Compute the intermediate factors without deciding a verdict.
    pub fn breakdown(
        &self,
        has_fake_indicators: bool,
        severity: &str,
        hazard_type: &str,
        has_location: bool,
    ) -> ScoreBreakdown {
        let base_fake_score = if has_fake_indicators {
            self.config.indicator_fake_base
        } else {
            self.config.clean_fake_base
        };
        let severity_factor = self.severity.weight(severity);
        let hazard_factor = self.hazard.weight(hazard_type);

        let risk_score = self.risk_score(severity_factor, has_location);
        let fake_probability = (base_fake_score - hazard_factor * self.config.hazard_discount)
            .min(self.config.fake_cap);

        ScoreBreakdown {
            has_fake_indicators,
            base_fake_score,
            severity_factor,
            hazard_factor,
            severity_known: self.severity.is_known(severity),
            hazard_known: self.hazard.is_known(hazard_type),
            risk_score,
            fake_probability,
        }
    }

    fn risk_score(&self, severity_factor: f64, has_location: bool) -> f64 {
        let bonus = if has_location {
            self.config.location_bonus
        } else {
            0.0
        };
        (severity_factor + bonus).min(self.config.risk_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::super::lexicon::detect_fake_indicators;
    use super::*;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    const SEVERITIES: [&str; 6] = ["low", "medium", "high", "critical", "extreme", ""];
    const HAZARDS: [&str; 7] = [
        "flood",
        "cyclone",
        "tsunami",
        "storm_surge",
        "other",
        "earthquake",
        "",
    ];

    fn all_inputs() -> Vec<(bool, &'static str, &'static str, bool)> {
        let mut inputs = Vec::new();
        for &fake in &[false, true] {
            for &severity in &SEVERITIES {
                for &hazard in &HAZARDS {
                    for &located in &[false, true] {
                        inputs.push((fake, severity, hazard, located));
                    }
                }
            }
        }
        inputs
    }

    #[test]
    fn verified_flood_report() {
        let scorer = CredibilityScorer::default();
        let report = ReportInput::new("Major flood damage reported", "flood", "high")
            .with_location(13.08, 80.27);
        let indicators = detect_fake_indicators(&report.text);

        let b = scorer.breakdown(false, "high", "flood", true);
        assert_eq!(b.severity_factor, 0.6);
        assert_eq!(b.hazard_factor, 0.9);
        assert_eq!(b.base_fake_score, 0.1);

        let result = scorer.score_report(&report, &indicators);
        assert!((result.risk_score - 0.8).abs() < EPS);
        assert!((result.fake_detection.confidence - (-0.08)).abs() < EPS);
        assert!(!result.fake_detection.is_fake);
        assert!(result.fake_detection.reasons.is_empty());
        assert!(result.is_verified);
    }

    #[test]
    fn hoax_report_low_severity() {
        let scorer = CredibilityScorer::default();
        let report = ReportInput::new("this is fake news, hoax alert", "other", "low");
        let indicators = detect_fake_indicators(&report.text);
        assert!(indicators.is_present());

        let result = scorer.score_report(&report, &indicators);
        assert!((result.risk_score - 0.1).abs() < EPS);
        assert!((result.fake_detection.confidence - 0.18).abs() < EPS);
        assert!(!result.fake_detection.is_fake);
        assert!(!result.is_verified);
        assert_eq!(
            result.fake_detection.reasons,
            vec!["Text analysis".to_string(), "Keyword detection".to_string()]
        );
    }

    #[test]
    fn default_severity_factor() {
        let scorer = CredibilityScorer::default();
        for severity in ["extreme", "", "HIGH", "Critical"] {
            let b = scorer.breakdown(false, severity, "flood", false);
            assert_eq!(b.severity_factor, 0.3);
            assert!(!b.severity_known);
        }
    }

    #[test]
    fn default_hazard_factor() {
        let scorer = CredibilityScorer::default();
        for hazard in ["earthquake", "", "Flood", "landslide"] {
            let b = scorer.breakdown(false, "high", hazard, false);
            assert_eq!(b.hazard_factor, 0.6);
            assert!(!b.hazard_known);
        }
    }

    #[test]
    fn scores_stay_bounded() {
        let scorer = CredibilityScorer::default();
        for (fake, severity, hazard, located) in all_inputs() {
            let r = scorer.score(fake, severity, hazard, located);
            assert!(
                (0.0..=1.0).contains(&r.risk_score),
                "risk {} out of range",
                r.risk_score
            );
            assert!(r.fake_detection.confidence <= 0.8);
        }
    }

    #[test]
    fn verified_implies_not_fake_and_risky() {
        let scorer = CredibilityScorer::default();
        for (fake, severity, hazard, located) in all_inputs() {
            let r = scorer.score(fake, severity, hazard, located);
            if r.is_verified {
                assert!(!r.fake_detection.is_fake);
                assert!(r.risk_score > 0.3);
            }
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let scorer = CredibilityScorer::default();
        for (fake, severity, hazard, located) in all_inputs() {
            let a = scorer.score(fake, severity, hazard, located);
            let b = scorer.score(fake, severity, hazard, located);
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }

    #[test]
    fn reference_coefficients_never_flag_fake() {
        // Max fake score is 0.3 - 0.6 * 0.2 = 0.18, under the 0.4 threshold.
        let scorer = CredibilityScorer::default();
        for (fake, severity, hazard, located) in all_inputs() {
            assert!(!scorer.score(fake, severity, hazard, located).fake_detection.is_fake);
        }
    }

    #[test]
    fn medium_without_location_is_not_verified() {
        let scorer = CredibilityScorer::default();
        let r = scorer.score(false, "medium", "flood", false);
        assert_eq!(r.risk_score, 0.3);
        assert!(!r.is_verified);
    }

    #[test]
    fn low_with_location_crosses_threshold() {
        // 0.1 + 0.2 evaluates just above 0.3 in binary floating point.
        let scorer = CredibilityScorer::default();
        let r = scorer.score(false, "low", "flood", true);
        assert!(r.risk_score > 0.3);
        assert!(r.is_verified);
    }

    #[test]
    fn critical_with_location_caps_risk() {
        let scorer = CredibilityScorer::default();
        let r = scorer.score(false, "critical", "cyclone", true);
        assert_eq!(r.risk_score, 1.0);
    }

    #[test]
    fn custom_threshold_can_flag_fake() {
        let config = ScoringConfig {
            fake_threshold: 0.1,
            ..Default::default()
        };
        let scorer = CredibilityScorer::new(config);
        let r = scorer.score(true, "high", "other", true);
        assert!(r.fake_detection.is_fake);
        assert!(!r.is_verified);
    }

    #[test]
    fn fake_score_is_capped() {
        let config = ScoringConfig {
            indicator_fake_base: 2.0,
            ..Default::default()
        };
        let scorer = CredibilityScorer::new(config);

        let b = scorer.breakdown(true, "high", "other", true);
        assert_eq!(b.fake_probability, 0.8);

        let r = scorer.score(true, "high", "other", true);
        assert_eq!(r.fake_detection.confidence, 0.8);
        assert!(r.fake_detection.is_fake);
        assert!(!r.is_verified);

        // Below the cap the raw value passes through.
        let clean = scorer.score(false, "high", "other", true);
        assert!((clean.fake_detection.confidence + 0.02).abs() < EPS);
    }

    #[test]
    fn verdict_matches_score() {
        let scorer = CredibilityScorer::default();
        for (fake, severity, hazard, located) in all_inputs() {
            let b = scorer.breakdown(fake, severity, hazard, located);
            assert_eq!(b.has_fake_indicators, fake);
            assert_eq!(scorer.verdict(&b), scorer.score(fake, severity, hazard, located));
        }
    }

    #[test]
    fn config_partial_json_uses_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"fake_threshold": 0.15}"#).unwrap();
        assert_eq!(config.fake_threshold, 0.15);
        assert_eq!(config.verify_threshold, 0.3);
        assert_eq!(config.fake_cap, 0.8);
    }
}
