//! # Shoreline Shared Rust Library
//!
//! This crate provides shared infrastructure for all Shoreline Rust components:
//! - **config**: Analyzer configuration from defaults, JSON file and environment
//! - **error**: Common error types with context
//! - **tracing**: Logging utilities with Shoreline segment prefixes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoreline::config::AnalyzerConfig;
//! use shoreline::error::Error;
//!
//! shoreline::tracing::init();
//! let config = AnalyzerConfig::load(None)?;
//! ```

pub mod config;
pub mod error;
pub mod tracing;

// Re-export commonly used items at crate root
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
