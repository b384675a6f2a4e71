//! Shoreline Core Engine
//!
//! This crate provides the decision kernel for hazard-report triage,
//! designed to run identically in browser (WASM) and server (native)
//! environments. Everything here is pure and synchronous; NLP, image
//! decoding and randomness are injected by the caller.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD)
//! - `simd` - SIMD-accelerated lexicon search via memchr
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use shoreline_core::assess::{detect_fake_indicators, CredibilityScorer};
//! use shoreline_core::text::{LexiconAnalyzer, TextFeatureExtractor};
//! use shoreline_core::{AnalysisResult, ReportInput};
//!
//! let report = ReportInput::new("this is fake news, hoax alert", "other", "low");
//!
//! let sentiment = TextFeatureExtractor::default()
//!     .extract(&LexiconAnalyzer::new(), &report.text)
//!     .unwrap();
//! let indicators = detect_fake_indicators(&report.text);
//! let credibility = CredibilityScorer::default().score_report(&report, &indicators);
//!
//! let result = AnalysisResult::new(sentiment, credibility);
//! assert!(!result.is_verified);
//! assert_eq!(result.fake_detection.reasons.len(), 2);
//! ```

pub mod assess;
pub mod error;
pub mod feed;
pub mod text;
mod types;

// Re-export main types at crate root
pub use assess::{
    detect_fake_indicators, CredibilityScorer, FakeIndicators, FixedSource, ImageHeuristic,
    ImageHeuristicConfig, RandomSource, ScoringConfig,
};
pub use error::{AnalysisError, ImageDecodeError};
pub use feed::{
    FeedPost, FeedStatus, FeedSummary, SocialFeed, SocialFeedRequest, SocialFeedResult,
    UnconfiguredFeed,
};
pub use text::{LexiconAnalyzer, PolarityAnalyzer, PolarityReading, TextFeatureExtractor};
pub use types::{
    AnalysisResult, CredibilityAssessment, FakeDetection, ImageAssessment, ImageProperties,
    ImageQuality, ReportInput, SentimentLabel, SentimentResult,
};
