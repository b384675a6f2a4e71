//! Social media feed interface
//!
//! No feed is integrated yet. [`UnconfiguredFeed`] answers every request
//! with an explicit `not_implemented` status and no posts, so nothing
//! downstream mistakes placeholder content for real signal.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::types::SentimentLabel;

/// Request for posts matching keywords around a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialFeedRequest {
    pub keywords: Vec<String>,
    /// Free-form location object as sent by the client
    #[serde(default)]
    pub location: serde_json::Value,
}

/// Whether the feed produced real results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStatus {
    Ok,
    NotImplemented,
}

/// A single post pulled from a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub source: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Aggregate counts over a set of posts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedSummary {
    pub total_posts: usize,
    pub negative_sentiment: usize,
    pub positive_sentiment: usize,
    pub neutral_sentiment: usize,
    pub average_confidence: f64,
}

impl FeedSummary {
    pub fn from_posts(posts: &[FeedPost]) -> Self {
        if posts.is_empty() {
            return Self::default();
        }

        let count = |label: SentimentLabel| posts.iter().filter(|p| p.sentiment == label).count();
        let total_confidence: f64 = posts.iter().map(|p| p.confidence).sum();

        Self {
            total_posts: posts.len(),
            negative_sentiment: count(SentimentLabel::Negative),
            positive_sentiment: count(SentimentLabel::Positive),
            neutral_sentiment: count(SentimentLabel::Neutral),
            average_confidence: total_confidence / posts.len() as f64,
        }
    }
}

/// Feed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialFeedResult {
    pub status: FeedStatus,
    pub posts: Vec<FeedPost>,
    pub summary: FeedSummary,
}

impl SocialFeedResult {
    pub fn not_implemented() -> Self {
        Self {
            status: FeedStatus::NotImplemented,
            posts: Vec::new(),
            summary: FeedSummary::default(),
        }
    }

    pub fn from_posts(posts: Vec<FeedPost>) -> Self {
        Self {
            status: FeedStatus::Ok,
            summary: FeedSummary::from_posts(&posts),
            posts,
        }
    }
}

/// A source of social media posts
pub trait SocialFeed: Send + Sync {
    fn fetch(&self, request: &SocialFeedRequest) -> Result<SocialFeedResult, AnalysisError>;
}

/// Placeholder feed used until a real integration exists
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredFeed;

impl SocialFeed for UnconfiguredFeed {
    fn fetch(&self, _request: &SocialFeedRequest) -> Result<SocialFeedResult, AnalysisError> {
        Ok(SocialFeedResult::not_implemented())
    }
}
