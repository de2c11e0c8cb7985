//! The two-tier bounded-concurrency fetch pipeline
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with typed failures
//! - Per-chapter and per-book workers
//! - The orchestrator owning the two concurrency gates
//!
//! Failure below the orchestrator's own listing fetch never propagates
//! upward as an error; it degrades the affected chapter or book to empty
//! data and leaves siblings untouched.

mod book;
mod chapter;
mod fetcher;
mod orchestrator;

pub use book::fetch_book_detail;
pub use chapter::fetch_chapter;
pub use fetcher::{build_http_client, fetch_page};
pub use orchestrator::Orchestrator;

use url::Url;

/// Resolves a page-relative href against its page's URL
///
/// Returns `None` for hrefs that resolve to nothing fetchable
/// (non-HTTP schemes, malformed links).
pub fn resolve_ref(page_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://example.com/book/1.html").unwrap()
    }

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(
            resolve_ref(&page(), "https://other.com/c.html"),
            Some("https://other.com/c.html".to_string())
        );
    }

    #[test]
    fn test_resolve_root_relative() {
        assert_eq!(
            resolve_ref(&page(), "/c/2.html"),
            Some("https://example.com/c/2.html".to_string())
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        assert_eq!(
            resolve_ref(&page(), "2.html"),
            Some("https://example.com/book/2.html".to_string())
        );
    }

    #[test]
    fn test_rejects_empty_and_non_http() {
        assert_eq!(resolve_ref(&page(), ""), None);
        assert_eq!(resolve_ref(&page(), "javascript:void(0)"), None);
    }
}
