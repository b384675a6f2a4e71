//! Request-scoped value objects
//!
//! Field names on the wire follow the camelCase contract used by reporting
//! clients (`hazardType`, `fakeDetection`, `riskScore`, ...).

use serde::{Deserialize, Serialize};

/// A user-submitted hazard report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub text: String,
    /// Hazard category label (`flood`, `cyclone`, `tsunami`, `storm_surge`, `other`)
    pub hazard_type: String,
    /// Severity label (`low`, `medium`, `high`, `critical`)
    pub severity: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ReportInput {
    pub fn new(
        text: impl Into<String>,
        hazard_type: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            hazard_type: hazard_type.into(),
            severity: severity.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Build a report from a title and description, joined by a single space.
    pub fn from_title_description(
        title: &str,
        description: &str,
        hazard_type: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self::new(format!("{} {}", title, description), hazard_type, severity)
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Coordinates count only as a pair.
    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Three-way sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Threshold a polarity in `[-1, 1]`: above 0.1 is positive, below -0.1
    /// is negative, anything between is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            Self::Positive
        } else if polarity < -0.1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Text features derived from the polarity capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub label: SentimentLabel,
    /// Absolute polarity (0.0 - 1.0)
    pub confidence: f64,
    /// Lower-cased noun phrases in extraction order, duplicates kept
    pub keywords: Vec<String>,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// Fake-report verdict
///
/// `confidence` is the signed fake probability. It is capped at 0.8 but not
/// floored, so credible hazard types routinely produce negative values
/// (flood with no indicators yields -0.08). Consumers that need a
/// probability must clamp it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeDetection {
    pub is_fake: bool,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

impl FakeDetection {
    /// Verification score stored alongside a report downstream.
    pub fn verification_score(&self) -> f64 {
        if self.is_fake {
            0.2
        } else {
            0.8
        }
    }
}

/// Terminal output of the credibility scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityAssessment {
    pub fake_detection: FakeDetection,
    /// Risk score (0.0 - 1.0)
    pub risk_score: f64,
    pub is_verified: bool,
}

/// Decoded image metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProperties {
    pub width: u32,
    pub height: u32,
    /// Container format (`PNG`, `JPEG`, ...), if the decoder knew it
    pub format: Option<String>,
    /// Pixel mode (`RGB`, `RGBA`, `L`, ...)
    pub mode: String,
}

impl ImageProperties {
    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Quality block nested under `analysis` in the image response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageQuality {
    /// Quality score (0.0 - 1.0)
    pub quality_score: f64,
    /// Fixed placeholder list; not derived from inspecting pixels
    pub suspicious_elements: Vec<String>,
}

/// Output of the image authenticity heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAssessment {
    pub is_authentic: bool,
    pub authenticity_score: f64,
    pub contains_disaster_scene: bool,
    pub disaster_confidence: f64,
    pub image_properties: ImageProperties,
    pub analysis: ImageQuality,
}

/// Full response for a report analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub fake_detection: FakeDetection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<ImageAssessment>,
    pub risk_score: f64,
    pub is_verified: bool,
}

impl AnalysisResult {
    pub fn new(sentiment: SentimentResult, credibility: CredibilityAssessment) -> Self {
        Self {
            sentiment: sentiment.label,
            confidence: sentiment.confidence,
            keywords: sentiment.keywords,
            fake_detection: credibility.fake_detection,
            image_analysis: None,
            risk_score: credibility.risk_score,
            is_verified: credibility.is_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_thresholds() {
        assert_eq!(SentimentLabel::from_polarity(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.5), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn location_requires_both_coordinates() {
        let mut report = ReportInput::new("x", "flood", "high");
        assert!(!report.has_location());

        report.latitude = Some(13.08);
        assert!(!report.has_location());

        report.longitude = Some(80.27);
        assert!(report.has_location());
    }

    #[test]
    fn zero_coordinates_count_as_location() {
        let report = ReportInput::new("x", "flood", "high").with_location(0.0, 0.0);
        assert!(report.has_location());
    }

    #[test]
    fn title_and_description_joined() {
        let report =
            ReportInput::from_title_description("Flooding", "near the harbour", "flood", "high");
        assert_eq!(report.text, "Flooding near the harbour");
    }

    #[test]
    fn report_input_camel_case() {
        let report: ReportInput = serde_json::from_str(
            r#"{"text":"t","hazardType":"storm_surge","severity":"critical","latitude":1.5}"#,
        )
        .unwrap();
        assert_eq!(report.hazard_type, "storm_surge");
        assert_eq!(report.latitude, Some(1.5));
        assert_eq!(report.longitude, None);
    }

    #[test]
    fn analysis_result_omits_missing_image() {
        let result = AnalysisResult::new(
            SentimentResult::neutral(),
            CredibilityAssessment {
                fake_detection: FakeDetection {
                    is_fake: false,
                    confidence: -0.08,
                    reasons: vec![],
                },
                risk_score: 0.8,
                is_verified: true,
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("imageAnalysis").is_none());
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["fakeDetection"]["isFake"], false);
        assert_eq!(json["isVerified"], true);
    }

    #[test]
    fn verification_score_follows_verdict() {
        let mut detection = FakeDetection {
            is_fake: true,
            confidence: 0.5,
            reasons: vec![],
        };
        assert_eq!(detection.verification_score(), 0.2);
        detection.is_fake = false;
        assert_eq!(detection.verification_score(), 0.8);
    }
}
