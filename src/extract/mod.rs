//! HTML extraction for the target catalog site
//!
//! This module contains everything that looks at markup:
//! - Compiling the configured selector contract
//! - Extracting book stubs from the listing page
//! - Extracting metadata and the chapter index from a detail page
//! - Normalizing HTML fragments to plain text
//!
//! Extraction never fails: markup shape is untrusted, so absent elements
//! degrade to `None`/empty values instead of raising errors.

mod detail;
mod listing;
mod normalize;
mod selectors;

pub use detail::{extract_detail, DetailPage};
pub use listing::extract_listing;
pub use normalize::{normalize_element, normalize_fragment};
pub use selectors::SelectorMap;
