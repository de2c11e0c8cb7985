use crate::crawler::fetch_page;
use crate::extract::{normalize_element, SelectorMap};
use crate::model::{ChapterRef, ChapterResult};
use reqwest::Client;
use scraper::Html;

/// Fetches one chapter page and extracts its normalized text
///
/// Fully isolated: any failure is logged and degrades to an empty `content`
/// with the title already known from the chapter index. Sibling chapters and
/// the parent book are never affected.
pub async fn fetch_chapter(
    client: &Client,
    selectors: &SelectorMap,
    chapter: ChapterRef,
) -> ChapterResult {
    let Some(url) = chapter.chapter_ref.as_deref() else {
        tracing::warn!("Chapter '{}' has no link, skipping fetch", chapter.title);
        return ChapterResult::empty(chapter.title);
    };

    let body = match fetch_page(client, url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to fetch chapter: {}", e);
            return ChapterResult::empty(chapter.title);
        }
    };

    // Html is not Send; parse and extract before any further await
    let content = {
        let document = Html::parse_document(&body);
        document
            .select(&selectors.chapter_content)
            .next()
            .map(|el| normalize_element(el, false))
            .unwrap_or_default()
    };

    ChapterResult {
        title: chapter.title,
        content,
    }
}
