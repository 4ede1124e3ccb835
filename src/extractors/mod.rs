//! Field extractors.
//!
//! Each extractor scans the located content regions (or the whole document,
//! for metadata-backed fields) with an ordered fallback chain and returns a
//! best-effort value. A miss is an empty value, never an error.

use scraper::ElementRef;

use crate::normalize::normalize;

mod description;
mod image;
mod ingredients;
mod instructions;
mod keywords;
mod servings;
mod timing;
mod title;
mod video;

pub use self::description::extract_description;
pub use self::image::extract_image;
pub use self::ingredients::extract_ingredients;
pub use self::instructions::extract_instructions;
pub use self::keywords::extract_keywords;
pub use self::servings::extract_yield;
pub use self::timing::{extract_times, minutes_to_iso};
pub use self::title::extract_title;
pub use self::video::extract_video;

/// Normalized text of an element (own plus descendants).
pub(crate) fn element_text(element: ElementRef) -> String {
    normalize(&element.text().collect::<Vec<_>>().join(" "))
}

/// Content attribute of the first matching meta tag, normalized.
pub(crate) fn meta_content(document: &scraper::Html, selector: &scraper::Selector) -> Option<String> {
    document
        .select(selector)
        .find_map(|el| el.value().attr("content"))
        .map(normalize)
        .filter(|content| !content.is_empty())
}

/// Drops repeated entries, keeping the first occurrence of each.
pub(crate) fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
