use crate::extract::{normalize_element, SelectorMap};
use crate::model::ChapterRef;
use scraper::Html;

/// Structured fields extracted from a book's detail page
#[derive(Debug, Clone, Default)]
pub struct DetailPage {
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,

    /// The full chapter index in document order; truncation to the requested
    /// count is the caller's job
    pub chapter_refs: Vec<ChapterRef>,
}

/// Extracts a book's metadata and chapter index from its detail page
///
/// - cover: the first thumbnail's `src`
/// - description: the intro block's text, embedded images stripped
/// - genre: the second breadcrumb entry only (the site exposes more levels,
///   but a single genre is captured intentionally)
/// - chapter refs: the index anchors in document order
///
/// Absent elements yield `None`/empty values, never an error.
pub fn extract_detail(html: &str, selectors: &SelectorMap) -> DetailPage {
    let document = Html::parse_document(html);

    let cover_image = document
        .select(&selectors.thumbnail)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::to_string);

    let description = document
        .select(&selectors.intro)
        .next()
        .map(|el| normalize_element(el, true));

    let genres = document
        .select(&selectors.breadcrumb)
        .nth(1)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .into_iter()
        .collect();

    let chapter_refs = document
        .select(&selectors.chapter_link)
        .map(|el| ChapterRef {
            title: el.text().collect::<String>().trim().to_string(),
            chapter_ref: el.value().attr("href").map(str::to_string),
        })
        .collect();

    DetailPage {
        cover_image,
        description,
        genres,
        chapter_refs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;

    fn selectors() -> SelectorMap {
        SelectorMap::compile(&SelectorConfig::default()).unwrap()
    }

    const DETAIL_PAGE: &str = r#"<html><body>
        <ol class="breadcrumb">
            <li>Home</li>
            <li>Romance</li>
            <li>Book Title</li>
        </ol>
        <img class="thumbnail" src="/covers/1.jpg">
        <img class="thumbnail" src="/covers/ignored.jpg">
        <p class="bookintro">An intro<img src="/ad.png"> with an embedded image.</p>
        <div id="list-chapterAll">
            <dd><a href="/c/1.html">Chapter One</a></dd>
            <dd><a href="/c/2.html">Chapter Two</a></dd>
            <dd><a>Chapter Without Link</a></dd>
        </div>
    </body></html>"#;

    #[test]
    fn test_cover_is_first_thumbnail() {
        let page = extract_detail(DETAIL_PAGE, &selectors());
        assert_eq!(page.cover_image.as_deref(), Some("/covers/1.jpg"));
    }

    #[test]
    fn test_description_strips_embedded_images() {
        let page = extract_detail(DETAIL_PAGE, &selectors());
        assert_eq!(
            page.description.as_deref(),
            Some("An intro with an embedded image.")
        );
    }

    #[test]
    fn test_single_genre_from_second_breadcrumb() {
        let page = extract_detail(DETAIL_PAGE, &selectors());
        assert_eq!(page.genres, vec!["Romance".to_string()]);
    }

    #[test]
    fn test_chapter_refs_in_document_order() {
        let page = extract_detail(DETAIL_PAGE, &selectors());
        assert_eq!(page.chapter_refs.len(), 3);
        assert_eq!(page.chapter_refs[0].title, "Chapter One");
        assert_eq!(page.chapter_refs[1].title, "Chapter Two");
        assert_eq!(
            page.chapter_refs[1].chapter_ref.as_deref(),
            Some("/c/2.html")
        );
        // An anchor without href still occupies its index position
        assert_eq!(page.chapter_refs[2].chapter_ref, None);
    }

    #[test]
    fn test_bare_page_degrades_to_empty() {
        let page = extract_detail("<html><body></body></html>", &selectors());
        assert_eq!(page.cover_image, None);
        assert_eq!(page.description, None);
        assert!(page.genres.is_empty());
        assert!(page.chapter_refs.is_empty());
    }

    #[test]
    fn test_single_breadcrumb_yields_no_genre() {
        let html = r#"<ol class="breadcrumb"><li>Home</li></ol>"#;
        let page = extract_detail(html, &selectors());
        assert!(page.genres.is_empty());
    }
}
