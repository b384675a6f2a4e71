//! Report Credibility & Image Assessment
//!
//! Rule-based triage signals for hazard reports:
//!
//! - **Lexicon**: credibility-undermining terms in the report text
//! - **Priors**: fixed severity and hazard-type weights with safe defaults
//! - **Credibility**: fake probability, risk score and verification verdict
//! - **Image**: size-based authenticity proxy and a stubbed scene signal
//!
//! # Example
//!
//! ```rust
//! use shoreline_core::assess::{detect_fake_indicators, CredibilityScorer};
//! use shoreline_core::ReportInput;
//!
//! let report = ReportInput::new("Major flood damage reported", "flood", "high")
//!     .with_location(13.08, 80.27);
//! let indicators = detect_fake_indicators(&report.text);
//! let assessment = CredibilityScorer::default().score_report(&report, &indicators);
//! assert!(assessment.is_verified);
//! ```

pub mod credibility;
pub mod image;
mod lexicon;
pub mod priors;

pub use credibility::{CredibilityScorer, ScoreBreakdown, ScoringConfig, INDICATOR_REASONS};
pub use image::{
    FixedSource, ImageHeuristic, ImageHeuristicConfig, RandomSource, LOW_AUTHENTICITY_FINDINGS,
};
pub use lexicon::{detect_fake_indicators, FakeIndicators, FAKE_INDICATORS};
pub use priors::{PriorTable, HAZARD_CREDIBILITY, SEVERITY_WEIGHTS};
