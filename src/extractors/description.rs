use scraper::{Html, Selector};

use super::{element_text, meta_content};
use crate::regions::ContentRegion;

/// Paragraph fallback bounds: long enough to be a real introduction, short
/// enough not to be the whole article.
const PARAGRAPH_MIN: usize = 80;
const PARAGRAPH_MAX: usize = 500;
const TRUNCATE_AT: usize = 200;

/// Extracts the recipe description: meta description, then the social preview
/// description, then the first substantial paragraph in a content region.
/// All sources are normalized like every other extracted field.
pub fn extract_description(document: &Html, regions: &[ContentRegion]) -> String {
    let meta = Selector::parse("meta[name='description']").unwrap();
    if let Some(description) = meta_content(document, &meta) {
        return description;
    }

    let og = Selector::parse("meta[property='og:description']").unwrap();
    if let Some(description) = meta_content(document, &og) {
        return description;
    }

    first_substantial_paragraph(regions).unwrap_or_default()
}

fn first_substantial_paragraph(regions: &[ContentRegion]) -> Option<String> {
    let paragraph = Selector::parse("p").unwrap();
    for region in regions {
        for p in region.element().select(&paragraph) {
            let text = element_text(p);
            let length = text.chars().count();
            if (PARAGRAPH_MIN..PARAGRAPH_MAX).contains(&length) {
                if length > TRUNCATE_AT {
                    let truncated: String = text.chars().take(TRUNCATE_AT).collect();
                    return Some(format!("{truncated}..."));
                }
                return Some(text);
            }
        }
    }
    None
}
