use serde::Deserialize;

/// Main configuration structure for bookharvest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub crawler: CrawlerConfig,
    pub site: SiteConfig,
    pub selectors: SelectorConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API server binds to
    #[serde(rename = "listen-addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Book gate capacity: maximum concurrent detail-page fetches
    #[serde(rename = "concurrent-books")]
    pub concurrent_books: usize,

    /// Chapter gate capacity: maximum concurrent chapter fetches across the
    /// whole crawl, shared by all books
    #[serde(rename = "concurrent-chapters")]
    pub concurrent_chapters: usize,

    /// Chapters fetched per book when the request does not say otherwise
    #[serde(rename = "default-num-chapters")]
    pub default_num_chapters: usize,

    /// Per-request timeout for outbound fetches (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            concurrent_books: 10,
            concurrent_chapters: 20,
            default_num_chapters: 20,
            request_timeout_secs: 30,
        }
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL relative links on the site resolve against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Listing page path with a `{page}` placeholder
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// User-Agent header sent on every outbound request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Label prefix stripped from the author text of listing entries
    #[serde(rename = "author-prefix")]
    pub author_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.po18cu.com".to_string(),
            listing_path: "/sort/0/{page}.html".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            author_prefix: "作者：".to_string(),
        }
    }
}

/// CSS selector contract for the target site's markup
///
/// These are the only site-specific parsing rules; swapping them retargets
/// the extractors without touching the pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Repeated block wrapping one listing entry
    #[serde(rename = "listing-entry")]
    pub listing_entry: String,

    /// Title anchor inside a listing entry (text = title, href = detail link)
    #[serde(rename = "title-link")]
    pub title_link: String,

    /// Author element inside a listing entry
    pub author: String,

    /// Cover thumbnail on the detail page
    pub thumbnail: String,

    /// Intro/description block on the detail page
    pub intro: String,

    /// Breadcrumb entries on the detail page (the second one is the genre)
    pub breadcrumb: String,

    /// Chapter index anchors on the detail page, in document order
    #[serde(rename = "chapter-link")]
    pub chapter_link: String,

    /// Content container on a chapter page
    #[serde(rename = "chapter-content")]
    pub chapter_content: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            listing_entry: "div.p10".to_string(),
            title_link: "div.bookinfo h4.bookname a".to_string(),
            author: "div.bookinfo div.author".to_string(),
            thumbnail: "img.thumbnail".to_string(),
            intro: "p.bookintro".to_string(),
            breadcrumb: "ol.breadcrumb li".to_string(),
            chapter_link: "#list-chapterAll dd a".to_string(),
            chapter_content: "div.readcontent".to_string(),
        }
    }
}
