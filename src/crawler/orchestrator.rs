//! Crawl orchestrator - top-level fan-out and aggregation
//!
//! The orchestrator owns the shared HTTP client, the compiled selector
//! contract, and the two concurrency gates. A crawl fetches the listing
//! page (the only failure that surfaces to the caller), fans out across the
//! book stubs through the book gate, and reassembles results in listing
//! order.

use crate::config::{Config, SiteConfig};
use crate::crawler::{build_http_client, fetch_book_detail, fetch_page, resolve_ref};
use crate::extract::{extract_listing, SelectorMap};
use crate::model::{BookDetail, BookResult, CrawlResponse};
use crate::HarvestError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use url::Url;

/// Top-level crawl coordinator
///
/// Cheap to share behind an `Arc`; one instance serves all requests.
pub struct Orchestrator {
    client: Arc<Client>,
    selectors: Arc<SelectorMap>,

    /// Bounds concurrent in-flight book workers
    book_gate: Arc<Semaphore>,

    /// Bounds concurrent in-flight chapter fetches across the whole crawl,
    /// shared by all book workers
    chapter_gate: Arc<Semaphore>,

    site: SiteConfig,
    base_url: Url,
    default_num_chapters: usize,
}

impl Orchestrator {
    /// Creates an orchestrator from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Orchestrator)` - Ready to serve crawls
    /// * `Err(HarvestError)` - Selector compilation or client build failed
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let selectors = Arc::new(SelectorMap::compile(&config.selectors)?);
        let client = Arc::new(build_http_client(
            &config.site.user_agent,
            Duration::from_secs(config.crawler.request_timeout_secs),
        )?);
        let base_url = Url::parse(&config.site.base_url)?;

        Ok(Self {
            client,
            selectors,
            book_gate: Arc::new(Semaphore::new(config.crawler.concurrent_books)),
            chapter_gate: Arc::new(Semaphore::new(config.crawler.concurrent_chapters)),
            site: config.site.clone(),
            base_url,
            default_num_chapters: config.crawler.default_num_chapters,
        })
    }

    /// Chapters fetched per book when the request does not specify a count
    pub fn default_num_chapters(&self) -> usize {
        self.default_num_chapters
    }

    /// Builds the listing page URL for a catalog page number
    pub fn listing_url(&self, page: u32) -> Result<Url, HarvestError> {
        let path = self.site.listing_path.replace("{page}", &page.to_string());
        Ok(self.base_url.join(&path)?)
    }

    /// Runs a complete crawl of one listing page
    ///
    /// Fetches the listing, dispatches every stub through the book gate, and
    /// aggregates the results in listing order. Only a listing fetch/parse
    /// failure is an error; everything below degrades to empty data in place.
    ///
    /// # Arguments
    ///
    /// * `page` - Catalog page number
    /// * `num_chapters` - Maximum chapters fetched per book
    pub async fn crawl(&self, page: u32, num_chapters: usize) -> Result<CrawlResponse, HarvestError> {
        let listing_url = self.listing_url(page)?;
        tracing::info!("Fetching listing page: {}", listing_url);

        let body = fetch_page(&self.client, listing_url.as_str()).await?;
        let stubs = extract_listing(&body, &self.selectors, &self.site.author_prefix);
        tracing::info!("Listing page {} yielded {} books", page, stubs.len());

        let mut handles = Vec::with_capacity(stubs.len());
        for stub in &stubs {
            let detail_url = stub
                .detail_ref
                .as_deref()
                .and_then(|href| resolve_ref(&listing_url, href));

            let client = Arc::clone(&self.client);
            let selectors = Arc::clone(&self.selectors);
            let book_gate = Arc::clone(&self.book_gate);
            let chapter_gate = Arc::clone(&self.chapter_gate);

            handles.push(tokio::spawn(async move {
                // The gate slot is held for the book's whole fan-out,
                // including its nested chapter awaits
                let _permit = match book_gate.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return BookDetail::default(),
                };
                fetch_book_detail(client, selectors, chapter_gate, detail_url, num_chapters).await
            }));
        }

        // Reassemble in dispatch order: results correlate to their stub's
        // listing position, never to completion order
        let mut results = Vec::with_capacity(stubs.len());
        for (stub, handle) in stubs.into_iter().zip(handles) {
            let detail = match handle.await {
                Ok(detail) => detail,
                Err(e) => {
                    tracing::error!("Book worker for '{}' panicked: {}", stub.title, e);
                    BookDetail::default()
                }
            };
            results.push(BookResult::assemble(stub, detail));
        }

        let response = CrawlResponse { results };
        tracing::info!(
            "Crawl finished: {} books, {} chapters",
            response.results.len(),
            response.total_chapters()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_substitutes_page() {
        let orchestrator = Orchestrator::new(&Config::default()).unwrap();
        let url = orchestrator.listing_url(3).unwrap();
        assert_eq!(url.as_str(), "https://www.po18cu.com/sort/0/3.html");
    }

    #[test]
    fn test_default_num_chapters_from_config() {
        let mut config = Config::default();
        config.crawler.default_num_chapters = 7;
        let orchestrator = Orchestrator::new(&config).unwrap();
        assert_eq!(orchestrator.default_num_chapters(), 7);
    }
}
