use log::debug;
use scraper::{Html, Selector};

use super::element_text;
use crate::vocab::{NON_CONTENT_TITLES, TITLE_SEPARATORS};

/// Everything a title strategy may look at.
struct TitleContext<'a> {
    document: &'a Html,
    path: &'a str,
    path_prefix: &'a str,
}

type Strategy = for<'a, 'b> fn(&'a TitleContext<'b>) -> Option<String>;

/// Ordered fallback chain; the first strategy to produce a usable title wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("document title", from_document_title),
    ("social preview", from_social_preview),
    ("url path", from_path),
];

/// Extracts the recipe name. Returns an empty string only when no strategy
/// produces at least three characters.
pub fn extract_title(document: &Html, path: &str, path_prefix: &str) -> String {
    let context = TitleContext {
        document,
        path,
        path_prefix,
    };
    for (source, strategy) in STRATEGIES {
        if let Some(title) = strategy(&context).filter(|t| t.chars().count() >= 3) {
            debug!("found title from {source}: {title}");
            return title;
        }
    }
    String::new()
}

/// Canonical `<title>`, with the site-name suffix and any "Recipe:" prefix
/// stripped. Rejected when it is an overlay title (login, cookie consent) or
/// too short to be a dish name.
fn from_document_title(context: &TitleContext) -> Option<String> {
    let selector = Selector::parse("title").unwrap();
    let raw = context.document.select(&selector).next()?;
    let title = strip_site_suffix(&element_text(raw));
    let title = strip_recipe_prefix(&title);

    let lowered = title.to_lowercase();
    if title.chars().count() < 5 || NON_CONTENT_TITLES.contains(&lowered.as_str()) {
        return None;
    }
    Some(title)
}

fn from_social_preview(context: &TitleContext) -> Option<String> {
    let selector = Selector::parse("meta[property='og:title']").unwrap();
    let content = super::meta_content(context.document, &selector)?;
    let title = strip_site_suffix(&content);
    (title.chars().count() > 5).then_some(title)
}

/// Last resort: turn the path segment after the recipe prefix back into words.
fn from_path(context: &TitleContext) -> Option<String> {
    let rest = context.path.strip_prefix(context.path_prefix)?;
    let segment = rest.trim_matches('/').split('/').next()?;
    if segment.is_empty() {
        return None;
    }
    let title = segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    Some(title)
}

/// Cuts the title at the first site-name separator.
fn strip_site_suffix(title: &str) -> String {
    let cut = TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()
        .unwrap_or(title.len());
    title[..cut].trim().to_string()
}

fn strip_recipe_prefix(title: &str) -> String {
    let lowered = title.to_lowercase();
    for prefix in ["recipe:", "recipe -"] {
        if lowered.starts_with(prefix) {
            return title[prefix.len()..].trim().to_string();
        }
    }
    title.to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
