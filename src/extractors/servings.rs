use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::regions::ContentRegion;

/// Yield phrases, in priority order. The whole matched substring is returned
/// verbatim so the unit phrase survives ("4 small pizzas", not "4").
static YIELD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+\s*(?:small\s+)?pizzas?\b",
        r"(?i)\d+\s*portions?\b",
        r"(?i)\d+\s*(?:persons?|people)\b",
        r"(?i)\d+\s*pieces?\b",
        r"(?i)\bfor\s+\d+\s+people\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Scans region text for a yield phrase; empty string when nothing matches.
pub fn extract_yield(regions: &[ContentRegion]) -> String {
    for region in regions {
        let text = region.text();
        for pattern in YIELD_PATTERNS.iter() {
            if let Some(found) = pattern.find(&text) {
                debug!("found yield in region '{}': {}", region.id(), found.as_str());
                return found.as_str().to_string();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::locate_content_regions;
    use scraper::Html;

    fn regions_for(body: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div id="content">{body}</div></body></html>"#
        ))
    }

    #[test]
    fn keeps_the_unit_phrase_verbatim() {
        let document = regions_for("<p>This dough makes 4 small pizzas in one batch.</p>");
        let regions = locate_content_regions(&document);
        assert_eq!(extract_yield(&regions), "4 small pizzas");
    }

    #[test]
    fn matches_portions_and_people() {
        let document = regions_for("<p>Enough stew for 6 people around the fire.</p>");
        let regions = locate_content_regions(&document);
        assert_eq!(extract_yield(&regions), "6 people");

        let document = regions_for("<p>Serves 2 portions.</p>");
        let regions = locate_content_regions(&document);
        assert_eq!(extract_yield(&regions), "2 portions");
    }

    #[test]
    fn empty_when_no_pattern_matches() {
        let document = regions_for("<p>Bake until golden.</p>");
        let regions = locate_content_regions(&document);
        assert_eq!(extract_yield(&regions), "");
    }
}
