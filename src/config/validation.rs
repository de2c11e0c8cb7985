use crate::config::types::{Config, CrawlerConfig, SelectorConfig, ServerConfig, SiteConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_crawler_config(&config.crawler)?;
    validate_site_config(&config.site)?;
    validate_selector_config(&config.selectors)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .listen_addr
        .parse::<std::net::SocketAddr>()
        .map_err(|e| {
            ConfigError::Validation(format!(
                "listen_addr '{}' is not a valid socket address: {}",
                config.listen_addr, e
            ))
        })?;

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.concurrent_books < 1 || config.concurrent_books > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrent_books must be between 1 and 100, got {}",
            config.concurrent_books
        )));
    }

    if config.concurrent_chapters < 1 || config.concurrent_chapters > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrent_chapters must be between 1 and 100, got {}",
            config.concurrent_chapters
        )));
    }

    if config.default_num_chapters < 1 {
        return Err(ConfigError::Validation(format!(
            "default_num_chapters must be >= 1, got {}",
            config.default_num_chapters
        )));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be between 1 and 300, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    Url::parse(&config.base_url)
        .map_err(|e| ConfigError::Validation(format!("Invalid base_url: {}", e)))?;

    if !config.listing_path.contains("{page}") {
        return Err(ConfigError::Validation(format!(
            "listing_path must contain a {{page}} placeholder, got '{}'",
            config.listing_path
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every configured selector compiles
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    let entries = [
        ("listing_entry", &config.listing_entry),
        ("title_link", &config.title_link),
        ("author", &config.author),
        ("thumbnail", &config.thumbnail),
        ("intro", &config.intro),
        ("breadcrumb", &config.breadcrumb),
        ("chapter_link", &config.chapter_link),
        ("chapter_content", &config.chapter_content),
    ];

    for (name, selector) in entries {
        Selector::parse(selector).map_err(|e| {
            ConfigError::Validation(format!("Invalid selector {} = '{}': {}", name, selector, e))
        })?;
    }

    Ok(())
}
