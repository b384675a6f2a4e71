//! Report and image analysis orchestration.
//!
//! The service is built once at startup and holds no mutable state of its
//! own; every call is independent and may run concurrently with any other.
//! NLP, image decoding, randomness and the social feed are injected.

use std::sync::Arc;

use shoreline::config::AnalyzerConfig;
use shoreline::tracing::prefix;
use shoreline_core::assess::detect_fake_indicators;
use shoreline_core::{
    AnalysisError, AnalysisResult, CredibilityScorer, ImageAssessment, ImageDecodeError,
    ImageHeuristic, LexiconAnalyzer, PolarityAnalyzer, RandomSource, ReportInput, SocialFeed,
    SocialFeedRequest, SocialFeedResult, TextFeatureExtractor, UnconfiguredFeed,
};
use tracing::{debug, info, warn};

use crate::engine::{create_decoder, ImageDecoder, SeededRandom};

/// Stateless analysis service.
pub struct ReportAnalysisService {
    analyzer: Arc<dyn PolarityAnalyzer>,
    decoder: Arc<dyn ImageDecoder>,
    rng: Arc<dyn RandomSource>,
    feed: Arc<dyn SocialFeed>,
    extractor: TextFeatureExtractor,
    scorer: CredibilityScorer,
    heuristic: ImageHeuristic,
}

impl ReportAnalysisService {
    /// Build a service with the default capabilities: the built-in lexicon
    /// analyzer, the raster decoder, a (possibly seeded) RNG and no feed.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            analyzer: Arc::new(LexiconAnalyzer::new()),
            decoder: create_decoder(config.max_image_bytes),
            rng: Arc::new(SeededRandom::new(config.rng_seed)),
            feed: Arc::new(UnconfiguredFeed),
            extractor: TextFeatureExtractor::new(config.keyword_limit),
            scorer: CredibilityScorer::new(config.scoring.clone()),
            heuristic: ImageHeuristic::new(config.image.clone()),
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_decoder(mut self, decoder: Arc<dyn ImageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_feed(mut self, feed: Arc<dyn SocialFeed>) -> Self {
        self.feed = feed;
        self
    }

    /// Text features → fake indicators → credibility score.
    ///
    /// All or nothing: any failure aborts the whole analysis.
    pub fn analyze_report(&self, input: &ReportInput) -> Result<AnalysisResult, AnalysisError> {
        debug!(
            "{} Analyzing report: hazard={} severity={} located={}",
            prefix::REPORT,
            input.hazard_type,
            input.severity,
            input.has_location()
        );

        let sentiment = self.extractor.extract(self.analyzer.as_ref(), &input.text)?;
        let indicators = detect_fake_indicators(&input.text);

        let breakdown = self.scorer.breakdown(
            indicators.is_present(),
            &input.severity,
            &input.hazard_type,
            input.has_location(),
        );
        if !breakdown.severity_known {
            warn!(
                "Unknown severity {:?}, using default weight {}",
                input.severity, breakdown.severity_factor
            );
        }
        if !breakdown.hazard_known {
            warn!(
                "Unknown hazard type {:?}, using default weight {}",
                input.hazard_type, breakdown.hazard_factor
            );
        }

        let credibility = self.scorer.verdict(&breakdown);

        info!(
            "{} Report scored: sentiment={} risk={:.2} fake={:.2} indicators={:?} verified={}",
            prefix::REPORT,
            sentiment.label,
            credibility.risk_score,
            credibility.fake_detection.confidence,
            indicators.triggered,
            credibility.is_verified
        );

        Ok(AnalysisResult::new(sentiment, credibility))
    }

    /// Decode → authenticity heuristic.
    pub fn analyze_image(&self, bytes: &[u8]) -> Result<ImageAssessment, ImageDecodeError> {
        let properties = self.decoder.decode(bytes)?;
        let assessment = self.heuristic.assess(properties, self.rng.as_ref());

        info!(
            "{} Image assessed: {}x{} authentic={} disaster={:.2}",
            prefix::IMAGE,
            assessment.image_properties.width,
            assessment.image_properties.height,
            assessment.is_authentic,
            assessment.disaster_confidence
        );

        Ok(assessment)
    }

    /// Posts from the configured social feed.
    pub fn social_feed(
        &self,
        request: &SocialFeedRequest,
    ) -> Result<SocialFeedResult, AnalysisError> {
        let result = self.feed.fetch(request)?;
        debug!(
            "Social feed returned {} posts (status {:?}) for {} keywords",
            result.posts.len(),
            result.status,
            request.keywords.len()
        );
        Ok(result)
    }
}
