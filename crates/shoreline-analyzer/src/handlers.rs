//! Transport-agnostic request routing.
//!
//! A request is a method, a path and a raw body; a response is a status code
//! and a JSON body. Any transport (HTTP server, CLI, test harness) can sit in
//! front of [`Router::handle`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shoreline::Error;
use shoreline_core::{AnalysisError, ReportInput, SocialFeedRequest};
use tracing::{debug, error};

use crate::service::ReportAnalysisService;

/// An inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body,
        }
    }
}

/// A JSON response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Parse the body back into JSON.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    healthy: bool,
}

/// Report body accepted by `POST /analyze`: either a composed `text` or a
/// `title` + `description` pair, as reporting clients send both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    hazard_type: String,
    severity: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl AnalyzeRequest {
    fn into_report(self) -> Result<ReportInput, AnalysisError> {
        let mut report = match (self.text, self.title, self.description) {
            (Some(text), _, _) => ReportInput::new(text, self.hazard_type, self.severity),
            (None, Some(title), Some(description)) => ReportInput::from_title_description(
                &title,
                &description,
                self.hazard_type,
                self.severity,
            ),
            _ => {
                return Err(AnalysisError::InvalidInput(
                    "report needs `text` or both `title` and `description`".to_string(),
                ))
            }
        };
        report.latitude = self.latitude;
        report.longitude = self.longitude;
        Ok(report)
    }
}

/// Dispatches requests to the analysis service.
#[derive(Clone)]
pub struct Router {
    service: Arc<ReportAnalysisService>,
}

impl Router {
    pub fn new(service: Arc<ReportAnalysisService>) -> Self {
        Self { service }
    }

    pub fn handle(&self, req: &HttpRequest) -> HttpResponse {
        debug!("{} {} ({} bytes)", req.method, req.path, req.body.len());

        let outcome = match (req.method.as_str(), req.path.as_str()) {
            ("GET", "/") => to_json(&MessageResponse {
                message: "Shoreline analyzer is running".to_string(),
            }),
            ("GET", "/health") => to_json(&HealthResponse { healthy: true }),
            ("POST", "/analyze") => self.handle_analyze(&req.body),
            ("POST", "/analyze-image") => self.handle_analyze_image(&req.body),
            ("POST", "/social-media") => self.handle_social_feed(&req.body),
            _ => {
                let body = ErrorResponse {
                    error: format!("unknown endpoint: {} {}", req.method, req.path),
                };
                return HttpResponse {
                    status_code: 404,
                    body: serde_json::to_vec(&body).unwrap_or_default(),
                };
            }
        };

        match outcome {
            Ok(body) => HttpResponse {
                status_code: 200,
                body,
            },
            Err(err) => error_response(&err),
        }
    }

    fn handle_analyze(&self, body: &[u8]) -> Result<Vec<u8>, Error> {
        let request: AnalyzeRequest = parse_body(body)?;
        let report = request.into_report()?;
        let result = self.service.analyze_report(&report)?;
        to_json(&result)
    }

    fn handle_analyze_image(&self, body: &[u8]) -> Result<Vec<u8>, Error> {
        let assessment = self.service.analyze_image(body)?;
        to_json(&assessment)
    }

    fn handle_social_feed(&self, body: &[u8]) -> Result<Vec<u8>, Error> {
        let request: SocialFeedRequest = parse_body(body)?;
        let result = self.service.social_feed(&request)?;
        to_json(&result)
    }
}

/// Malformed bodies are reported as invalid input of the report pipeline.
fn parse_body<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body)
        .map_err(|e| Error::Analysis(AnalysisError::InvalidInput(e.to_string())))
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(|e| Error::Internal(format!("encode response: {}", e)))
}

fn error_response(err: &Error) -> HttpResponse {
    let status_code = if err.is_client_error() { 400 } else { 500 };
    error!("Request failed ({}): {}", status_code, err);

    let body = ErrorResponse {
        error: err.to_string(),
    };
    HttpResponse {
        status_code,
        body: serde_json::to_vec(&body).unwrap_or_default(),
    }
}
