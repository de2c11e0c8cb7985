use crate::extract::SelectorMap;
use crate::model::BookStub;
use scraper::Html;

/// Extracts book stubs from a catalog listing page
///
/// Produces one stub per listing-entry block, in document order. Entries
/// with a missing title link still yield a stub (empty title, no detail
/// link) so that no listing position is silently dropped.
///
/// # Arguments
///
/// * `html` - The listing page markup
/// * `selectors` - The compiled selector contract
/// * `author_prefix` - Fixed label prefix stripped from the author text
pub fn extract_listing(html: &str, selectors: &SelectorMap, author_prefix: &str) -> Vec<BookStub> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.listing_entry)
        .map(|entry| {
            let title_link = entry.select(&selectors.title_link).next();

            let title = title_link
                .map(|el| el.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            let detail_ref = title_link
                .and_then(|el| el.value().attr("href"))
                .map(str::to_string);

            let author = entry
                .select(&selectors.author)
                .next()
                .map(|el| {
                    el.text()
                        .collect::<String>()
                        .replacen(author_prefix, "", 1)
                        .trim()
                        .to_string()
                })
                .unwrap_or_default();

            BookStub {
                title,
                detail_ref,
                author,
            }
        })
        .collect()
}
