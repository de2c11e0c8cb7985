//! Configuration module for bookharvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section has working defaults, so a missing or partial file
//! still yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use bookharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Book gate capacity: {}", config.crawler.concurrent_books);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, SelectorConfig, ServerConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;

pub use validation::validate;
