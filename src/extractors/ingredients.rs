use log::debug;
use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

use super::{dedup_preserving_order, element_text};
use crate::normalize::normalize;
use crate::regions::ContentRegion;
use crate::vocab::INGREDIENT_GROUP_LABELS;

/// Fragment length bounds (exclusive). Shorter is punctuation, longer is prose.
const MIN_LEN: usize = 3;
const MAX_LEN: usize = 200;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

// All-caps fragments are sub-headings ("SAUCE"), not ingredients.
static ALL_CAPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z\s:]+$").unwrap());

/// Extracts the ingredient list.
///
/// Regions are scanned in order; the first region whose "Ingredients" section
/// yields at least one ingredient wins, and later regions are never merged
/// in. The result is deduplicated, first occurrence kept.
pub fn extract_ingredients(regions: &[ContentRegion]) -> Vec<String> {
    for region in regions {
        let found = scan_region(region);
        if !found.is_empty() {
            debug!(
                "found {} ingredients in region '{}'",
                found.len(),
                region.id()
            );
            return dedup_preserving_order(found);
        }
    }
    Vec::new()
}

/// Per-region state machine: nothing is collected until a heading opens the
/// ingredient section; collection ends at the next heading that does not
/// belong to it (a new section, rather than a group label like "Dough").
fn scan_region(region: &ContentRegion) -> Vec<String> {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6, strong, b, p, li").unwrap();

    let mut in_section = false;
    let mut ingredients = Vec::new();

    for element in region.element().select(&selector) {
        let tag = element.value().name();
        let text = element_text(element);

        if !in_section {
            if tag != "p" && tag != "li" && text.to_lowercase().starts_with("ingredient") {
                in_section = true;
                debug!("found ingredient section at <{tag}> in region '{}'", region.id());
            }
            continue;
        }

        if matches!(tag, "h1" | "h2" | "h3" | "h4") && !belongs_to_section(&text) {
            break;
        }

        match tag {
            // Paragraphs hold ingredients separated by line breaks.
            "p" => {
                for part in BR_RE.split(&element.inner_html()) {
                    let fragment = normalize(part);
                    if keep_fragment(&fragment) {
                        ingredients.push(fragment);
                    }
                }
            }
            "li" => {
                if length_ok(&text) {
                    ingredients.push(text);
                }
            }
            _ => {}
        }
    }
    ingredients
}

/// Headings that continue the ingredient section instead of ending it.
fn belongs_to_section(heading: &str) -> bool {
    let lowered = heading.to_lowercase();
    lowered.contains("ingredient")
        || INGREDIENT_GROUP_LABELS
            .iter()
            .any(|label| lowered.starts_with(label))
}

fn keep_fragment(fragment: &str) -> bool {
    length_ok(fragment) && !ALL_CAPS_RE.is_match(fragment) && !starts_with_group_label(fragment)
}

fn length_ok(fragment: &str) -> bool {
    let length = fragment.chars().count();
    length > MIN_LEN && length < MAX_LEN
}

fn starts_with_group_label(fragment: &str) -> bool {
    let lowered = fragment.to_lowercase();
    INGREDIENT_GROUP_LABELS
        .iter()
        .any(|label| lowered.starts_with(label))
}
