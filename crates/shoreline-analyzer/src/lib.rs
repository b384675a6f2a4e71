//! Shoreline Analyzer Library
//!
//! Credibility scoring and image triage for citizen hazard reports, wired
//! to concrete NLP, image decoding and randomness capabilities.

pub mod engine;
pub mod handlers;
pub mod service;

pub use engine::{create_decoder, ImageDecoder, RasterDecoder, SeededRandom};
pub use handlers::{HttpRequest, HttpResponse, Router};
pub use service::ReportAnalysisService;
