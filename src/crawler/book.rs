use crate::crawler::{fetch_chapter, fetch_page, resolve_ref};
use crate::extract::{extract_detail, SelectorMap};
use crate::model::{BookDetail, ChapterRef, ChapterResult};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

/// Fetches one book's detail page and fans out across its first
/// `num_chapters` chapter refs through the chapter gate
///
/// The returned chapter sequence matches the chapter index's document order:
/// each worker writes into the slot of its dispatch position, so completion
/// timing never reorders results.
///
/// A detail-page failure degrades the whole book to empty defaults (logged)
/// without touching sibling books; an individual chapter failure degrades
/// only that chapter.
pub async fn fetch_book_detail(
    client: Arc<Client>,
    selectors: Arc<SelectorMap>,
    chapter_gate: Arc<Semaphore>,
    detail_url: Option<String>,
    num_chapters: usize,
) -> BookDetail {
    let Some(url) = detail_url else {
        tracing::warn!("Book has no detail link, returning empty result");
        return BookDetail::default();
    };

    let body = match fetch_page(&client, &url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to fetch book detail: {}", e);
            return BookDetail::default();
        }
    };

    let page = extract_detail(&body, &selectors);

    // Relative chapter links resolve against the detail page they came from
    let page_url = Url::parse(&url).ok();
    let refs: Vec<ChapterRef> = page
        .chapter_refs
        .into_iter()
        .take(num_chapters)
        .map(|mut chapter| {
            chapter.chapter_ref = match (&page_url, chapter.chapter_ref) {
                (Some(base), Some(href)) => resolve_ref(base, &href),
                (None, href) => href,
                (_, None) => None,
            };
            chapter
        })
        .collect();

    let titles: Vec<String> = refs.iter().map(|c| c.title.clone()).collect();

    let mut handles = Vec::with_capacity(refs.len());
    for chapter in refs {
        let client = Arc::clone(&client);
        let selectors = Arc::clone(&selectors);
        let gate = Arc::clone(&chapter_gate);

        handles.push(tokio::spawn(async move {
            // The gate slot is held for the whole fetch+extract of this chapter
            let _permit = match gate.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return ChapterResult::empty(chapter.title),
            };
            fetch_chapter(&client, &selectors, chapter).await
        }));
    }

    // Await handles in dispatch order so the output sequence matches the index
    let mut chapters = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(result) => chapters.push(result),
            Err(e) => {
                tracing::error!("Chapter worker for '{}' panicked: {}", titles[index], e);
                chapters.push(ChapterResult::empty(titles[index].clone()));
            }
        }
    }

    BookDetail {
        cover_image: page.cover_image,
        description: page.description,
        genres: page.genres,
        chapters,
    }
}
