use super::dedup_preserving_order;
use crate::vocab::{EQUIPMENT_TAGS, FIXED_KEYWORDS};

/// Builds the comma-joined keyword string from the URL path and title:
/// path tokens, conditional equipment/technique tags, then the fixed site
/// tags. Deduplicated, order preserved.
pub fn extract_keywords(path: &str, title: &str, path_prefix: &str) -> String {
    let mut keywords: Vec<String> = Vec::new();

    if let Some(rest) = path.strip_prefix(path_prefix) {
        for token in rest.trim_matches('/').split(['-', '_', '/']) {
            if token.chars().count() > 2 {
                keywords.push(token.to_lowercase());
            }
        }
    }

    let haystack = format!("{} {}", title.to_lowercase(), path.to_lowercase());
    for (patterns, tag) in EQUIPMENT_TAGS {
        if patterns.iter().any(|pattern| haystack.contains(pattern)) {
            keywords.push((*tag).to_string());
        }
    }

    keywords.extend(FIXED_KEYWORDS.iter().map(|tag| (*tag).to_string()));

    dedup_preserving_order(keywords).join(", ")
}
