//! Bookharvest: a catalog-site harvesting service
//!
//! This crate implements an HTTP service that enumerates books on a catalog
//! listing page, fetches each book's detail page and a bounded number of its
//! chapters concurrently, and returns the aggregated result as JSON.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod server;

use thiserror::Error;

/// Main error type for bookharvest operations
///
/// Everything below the listing fetch degrades to empty data inside the
/// pipeline; only these errors surface to a caller.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Listing fetch failed: {0}")]
    Listing(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single outbound page fetch
///
/// Carries the URL and the cause. One attempt per call, no retries.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL the failed fetch was addressed to
    pub fn url(&self) -> &str {
        match self {
            FetchError::Http { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Network { url, .. } => url,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for bookharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Orchestrator;
pub use model::{BookResult, BookStub, ChapterRef, ChapterResult, CrawlResponse};
