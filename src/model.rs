//! Data model for the harvesting pipeline
//!
//! Types flow upward through the pipeline: the listing extractor produces
//! [`BookStub`]s, the detail extractor produces [`ChapterRef`]s, and the
//! workers assemble [`ChapterResult`]s and [`BookResult`]s. Only the types
//! that appear in the HTTP response are serializable.

use serde::Serialize;

/// Minimal listing-derived reference to a book before its detail page is
/// fetched
///
/// Entries with a missing title link still produce a stub (with an empty
/// title and no detail link) rather than being skipped.
#[derive(Debug, Clone)]
pub struct BookStub {
    pub title: String,

    /// Link to the book's detail page, absent when the listing entry had none
    pub detail_ref: Option<String>,

    pub author: String,
}

/// A title+link pair identifying one chapter to fetch
///
/// Ordering of chapter refs is the detail page's document order and is
/// preserved through the fan-out.
#[derive(Debug, Clone)]
pub struct ChapterRef {
    pub title: String,

    /// Link to the chapter page, absent when the index anchor had no href
    pub chapter_ref: Option<String>,
}

/// One fetched chapter
///
/// `content` is the empty string when the fetch or extraction failed; the
/// title is the one already known from the chapter index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterResult {
    pub title: String,
    pub content: String,
}

impl ChapterResult {
    /// The degraded result for a chapter whose fetch failed
    pub fn empty(title: String) -> Self {
        Self {
            title,
            content: String::new(),
        }
    }
}

/// The detail-page fragment of a book result, before the stub's own fields
/// are merged in
///
/// `Default` is the all-empty fragment a failed detail fetch degrades to.
#[derive(Debug, Clone, Default)]
pub struct BookDetail {
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub chapters: Vec<ChapterResult>,
}

/// One fully assembled book in the crawl response
#[derive(Debug, Clone, Serialize)]
pub struct BookResult {
    pub title: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub genres: Vec<String>,
    pub description: Option<String>,
    pub chapters: Vec<ChapterResult>,
}

impl BookResult {
    /// Merges a listing stub with the detail fragment its worker produced
    pub fn assemble(stub: BookStub, detail: BookDetail) -> Self {
        Self {
            title: stub.title,
            author: stub.author,
            cover_image: detail.cover_image,
            genres: detail.genres,
            description: detail.description,
            chapters: detail.chapters,
        }
    }
}

/// The aggregate returned to the HTTP caller
///
/// `results` is ordered by the listing page's document order regardless of
/// fetch completion order.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlResponse {
    pub results: Vec<BookResult>,
}

impl CrawlResponse {
    /// Total chapters across all books, for summary reporting
    pub fn total_chapters(&self) -> usize {
        self.results.iter().map(|b| b.chapters.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_book_serializes_null_fields() {
        let result = BookResult::assemble(
            BookStub {
                title: "Lost Book".to_string(),
                detail_ref: None,
                author: "Unknown".to_string(),
            },
            BookDetail::default(),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["title"], "Lost Book");
        assert_eq!(json["cover_image"], serde_json::Value::Null);
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["genres"], serde_json::json!([]));
        assert_eq!(json["chapters"], serde_json::json!([]));
    }

    #[test]
    fn test_total_chapters() {
        let book = |n: usize| BookResult {
            title: String::new(),
            author: String::new(),
            cover_image: None,
            genres: vec![],
            description: None,
            chapters: (0..n)
                .map(|i| ChapterResult::empty(format!("ch{}", i)))
                .collect(),
        };

        let response = CrawlResponse {
            results: vec![book(2), book(0), book(3)],
        };
        assert_eq!(response.total_chapters(), 5);
    }
}
