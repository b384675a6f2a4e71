//! Logging utilities with Shoreline segment prefixes.
//!
//! Provides consistent logging setup across Shoreline Rust components.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with Shoreline defaults.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format on stderr, keeping stdout free for results
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Segment prefixes for logging.
pub mod prefix {
    /// Startup
    pub const OPEN: &str = "≋";
    /// Shutdown
    pub const CLOSE: &str = "⌁";
    /// Report pipeline
    pub const REPORT: &str = "⚑";
    /// Image pipeline
    pub const IMAGE: &str = "▣";
}
