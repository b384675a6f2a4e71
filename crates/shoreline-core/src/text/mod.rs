//! Text feature extraction
//!
//! Sentiment and keywords come from a [`PolarityAnalyzer`], the NLP
//! capability behind the pipeline. [`LexiconAnalyzer`] is the built-in
//! implementation; anything else (a model server, a bindings crate) plugs in
//! through the same trait.

mod analyzer;

pub use analyzer::LexiconAnalyzer;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::types::{SentimentLabel, SentimentResult};

/// Raw output of a polarity capability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityReading {
    /// Signed polarity, expected in `[-1, 1]`
    pub polarity: f64,
    /// Noun-phrase-like spans in document order
    pub noun_phrases: Vec<String>,
}

/// NLP capability: classify the polarity of a string and pull out noun phrases
pub trait PolarityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<PolarityReading, AnalysisError>;
}

/// Keyword count kept from the noun-phrase list
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

/// Turns a polarity reading into a [`SentimentResult`]
#[derive(Debug, Clone)]
pub struct TextFeatureExtractor {
    keyword_limit: usize,
}

impl Default for TextFeatureExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD_LIMIT)
    }
}

impl TextFeatureExtractor {
    pub fn new(keyword_limit: usize) -> Self {
        Self { keyword_limit }
    }

    /// Extract sentiment and keywords.
    ///
    /// Blank text is neutral with no keywords and never reaches the analyzer.
    /// Keywords are lower-cased and truncated, not deduplicated.
    pub fn extract(
        &self,
        analyzer: &dyn PolarityAnalyzer,
        text: &str,
    ) -> Result<SentimentResult, AnalysisError> {
        if text.trim().is_empty() {
            return Ok(SentimentResult::neutral());
        }

        let reading = analyzer.analyze(text)?;
        if !reading.polarity.is_finite() {
            return Err(AnalysisError::Nlp(format!(
                "polarity is not a finite number: {}",
                reading.polarity
            )));
        }

        let polarity = reading.polarity.clamp(-1.0, 1.0);
        let keywords = reading
            .noun_phrases
            .iter()
            .take(self.keyword_limit)
            .map(|phrase| phrase.to_lowercase())
            .collect();

        Ok(SentimentResult {
            polarity,
            label: SentimentLabel::from_polarity(polarity),
            confidence: polarity.abs(),
            keywords,
        })
    }
}
