use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// Compiled form of the configured selector contract
///
/// Compiled once at startup and shared by every extraction; the extractors
/// depend only on this map, never on raw selector strings.
#[derive(Debug, Clone)]
pub struct SelectorMap {
    pub listing_entry: Selector,
    pub title_link: Selector,
    pub author: Selector,
    pub thumbnail: Selector,
    pub intro: Selector,
    pub breadcrumb: Selector,
    pub chapter_link: Selector,
    pub chapter_content: Selector,
}

impl SelectorMap {
    /// Compiles the configured selectors
    ///
    /// # Returns
    ///
    /// * `Ok(SelectorMap)` - All selectors compiled
    /// * `Err(ConfigError)` - A selector failed to parse
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            listing_entry: compile_one("listing_entry", &config.listing_entry)?,
            title_link: compile_one("title_link", &config.title_link)?,
            author: compile_one("author", &config.author)?,
            thumbnail: compile_one("thumbnail", &config.thumbnail)?,
            intro: compile_one("intro", &config.intro)?,
            breadcrumb: compile_one("breadcrumb", &config.breadcrumb)?,
            chapter_link: compile_one("chapter_link", &config.chapter_link)?,
            chapter_content: compile_one("chapter_content", &config.chapter_content)?,
        })
    }
}

fn compile_one(name: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| {
        ConfigError::Validation(format!("Invalid selector {} = '{}': {}", name, selector, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_compile() {
        let config = SelectorConfig::default();
        assert!(SelectorMap::compile(&config).is_ok());
    }

    #[test]
    fn test_bad_selector_names_the_field() {
        let config = SelectorConfig {
            breadcrumb: "ol..[".to_string(),
            ..SelectorConfig::default()
        };
        let err = SelectorMap::compile(&config).unwrap_err();
        assert!(err.to_string().contains("breadcrumb"));
    }
}
