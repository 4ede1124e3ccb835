use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use crate::normalize::normalize;
use crate::vocab::{BOILERPLATE_ID_MARKERS, NAV_FINGERPRINT_PAIRS};

/// Tags that can carry genuine content. Only explicitly identified containers
/// qualify as regions; an id on a heading or anchor does not make one.
const CONTAINER_TAGS: &[&str] = &["div", "section", "article", "main", "aside"];

/// How much leading text the navigation fingerprint check looks at.
const FINGERPRINT_WINDOW: usize = 200;

/// A portion of the page judged to contain genuine recipe content.
#[derive(Debug, Clone, Copy)]
pub struct ContentRegion<'a> {
    element: ElementRef<'a>,
}

impl<'a> ContentRegion<'a> {
    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }

    /// Normalized text of the whole region (own plus descendants).
    pub fn text(&self) -> String {
        normalize(&self.element.text().collect::<Vec<_>>().join(" "))
    }

    /// The region's container id, for diagnostics.
    pub fn id(&self) -> &'a str {
        self.element.value().attr("id").unwrap_or("")
    }
}

/// Locates the page's content regions, in document order.
///
/// A region is a container element with a non-empty id whose id does not match
/// the boilerplate denylist and whose leading text does not read like a
/// cross-category store menu. A qualifying container nested inside another
/// region is not a second region; its text already belongs to the outer one.
/// An empty result is valid and tells every downstream extractor that the
/// page holds no usable content.
pub fn locate_content_regions(document: &Html) -> Vec<ContentRegion<'_>> {
    let selector = Selector::parse("[id]").unwrap();

    let candidates: Vec<ContentRegion<'_>> = document
        .select(&selector)
        .filter(|el| CONTAINER_TAGS.contains(&el.value().name()))
        .filter(|el| {
            let id = el.value().attr("id").unwrap_or("");
            !id.is_empty() && !is_boilerplate_id(id)
        })
        .map(|element| ContentRegion { element })
        .filter(|region| !has_navigation_fingerprint(region))
        .collect();

    // Keep only the outermost of any nested pair, so no text is scanned twice.
    let kept: HashSet<_> = candidates.iter().map(|r| r.element.id()).collect();
    let regions: Vec<ContentRegion<'_>> = candidates
        .into_iter()
        .filter(|region| {
            !region
                .element
                .ancestors()
                .any(|ancestor| kept.contains(&ancestor.id()))
        })
        .collect();

    debug!(
        "located {} content regions: {:?}",
        regions.len(),
        regions.iter().map(|r| r.id()).collect::<Vec<_>>()
    );
    regions
}

fn is_boilerplate_id(id: &str) -> bool {
    let id = id.to_lowercase();
    BOILERPLATE_ID_MARKERS
        .iter()
        .any(|marker| id.contains(marker))
}

fn has_navigation_fingerprint(region: &ContentRegion) -> bool {
    let leading: String = region
        .text()
        .chars()
        .take(FINGERPRINT_WINDOW)
        .collect::<String>()
        .to_lowercase();
    NAV_FINGERPRINT_PAIRS
        .iter()
        .any(|(a, b)| leading.contains(a) && leading.contains(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_identified_containers_in_document_order() {
        let document = Html::parse_document(
            r#"<html><body>
                <div id="intro">Welcome</div>
                <section id="recipe-body">Ingredients here</section>
            </body></html>"#,
        );
        let regions = locate_content_regions(&document);
        let ids: Vec<_> = regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["intro", "recipe-body"]);
    }

    #[test]
    fn excludes_boilerplate_identifiers() {
        let document = Html::parse_document(
            r#"<html><body>
                <div id="main-navigation">Home</div>
                <div id="cookieBanner">We use cookies</div>
                <div id="LoginModal">Sign in</div>
                <div id="site-footer">Contact</div>
                <div id="content">The recipe</div>
            </body></html>"#,
        );
        let regions = locate_content_regions(&document);
        let ids: Vec<_> = regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["content"]);
    }

    #[test]
    fn unidentified_containers_are_not_regions() {
        let document = Html::parse_document(
            r#"<html><body><div>No id</div><div id="">Empty id</div><h2 id="heading">Title</h2></body></html>"#,
        );
        assert!(locate_content_regions(&document).is_empty());
    }

    #[test]
    fn nested_containers_collapse_to_the_outermost() {
        let document = Html::parse_document(
            r#"<html><body>
                <div id="content">
                    <div id="recipe-body"><p>The recipe</p></div>
                </div>
                <div id="popup-overlay">
                    <div id="story">Standalone inside a boilerplate wrapper</div>
                </div>
            </body></html>"#,
        );
        let regions = locate_content_regions(&document);
        let ids: Vec<_> = regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["content", "story"]);
    }

    #[test]
    fn excludes_containers_with_store_menu_fingerprints() {
        let document = Html::parse_document(
            r#"<html><body>
                <div id="sidebar">Shop Jackets Shop Pants Shop Accessories</div>
                <div id="story">Our favourite campfire stew for cold evenings</div>
            </body></html>"#,
        );
        let regions = locate_content_regions(&document);
        let ids: Vec<_> = regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["story"]);
    }

    #[test]
    fn fingerprint_check_only_reads_leading_text() {
        let filler = "stew ".repeat(60);
        let html = format!(
            r#"<html><body><div id="story">{filler} jackets and pants appear far below</div></body></html>"#
        );
        let document = Html::parse_document(&html);
        assert_eq!(locate_content_regions(&document).len(), 1);
    }
}
