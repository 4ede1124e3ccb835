use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::vocab::{MEDIA_PATH_PREFIX, PIM_HOST_MARKER, SITE_ORIGIN};

// Match: --bgimage: Url(/media/65242/desktop-header.jpg?width=1200)
static BGIMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"--bgimage:\s*[Uu]rl\(\s*['"]?([^'")]+)"#).unwrap());

static BACKGROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"background-image:\s*url\(\s*['"]?([^'")]+)"#).unwrap());

/// Extracts at most one image URL for the recipe.
///
/// The site renders its hero image as a `--bgimage` custom property on the
/// page banner, so style declarations are tried before the social preview and
/// before plain `<img>` elements. Only `/media/` assets count; the PIM host
/// serves product shots, never recipe photography.
pub fn extract_image(document: &Html) -> Vec<String> {
    let chain: &[fn(&Html) -> Option<String>] = &[
        from_bgimage_property,
        from_background_style,
        from_social_preview,
        from_inline_images,
    ];
    chain
        .iter()
        .find_map(|strategy| strategy(document))
        .map(|url| vec![url])
        .unwrap_or_default()
}

fn from_bgimage_property(document: &Html) -> Option<String> {
    styled_elements(document).into_iter().find_map(|style| {
        let raw = BGIMAGE_RE.captures(style)?.get(1)?.as_str();
        let url = accept_media_url(raw)?;
        debug!("found image from --bgimage: {url}");
        Some(url)
    })
}

fn from_background_style(document: &Html) -> Option<String> {
    styled_elements(document)
        .into_iter()
        .find_map(|style| accept_media_url(BACKGROUND_RE.captures(style)?.get(1)?.as_str()))
}

fn from_social_preview(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta[property='og:image']").unwrap();
    let content = document
        .select(&selector)
        .find_map(|el| el.value().attr("content"))?;
    // The social preview is trusted on path, but never the PIM host.
    let url = resolve(content)?;
    (!is_pim_host(&url)).then(|| url.to_string())
}

fn from_inline_images(document: &Html) -> Option<String> {
    let selector = Selector::parse("img[src]").unwrap();
    document
        .select(&selector)
        .find_map(|img| accept_media_url(img.value().attr("src")?))
}

fn styled_elements(document: &Html) -> Vec<&str> {
    let selector = Selector::parse("[style]").unwrap();
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("style"))
        .collect()
}

/// Strips query/quoting, resolves against the site origin, and accepts the
/// URL only when it points at a media asset outside the PIM host.
fn accept_media_url(raw: &str) -> Option<String> {
    let url = resolve(raw)?;
    if is_pim_host(&url) || !url.path().starts_with(MEDIA_PATH_PREFIX) {
        return None;
    }
    Some(url.to_string())
}

fn resolve(raw: &str) -> Option<Url> {
    let trimmed = raw.trim().trim_matches(['\'', '"']);
    let without_query = trimmed.split('?').next().unwrap_or(trimmed);
    if without_query.starts_with("http://") || without_query.starts_with("https://") {
        Url::parse(without_query).ok()
    } else {
        Url::parse(SITE_ORIGIN).ok()?.join(without_query).ok()
    }
}

fn is_pim_host(url: &Url) -> bool {
    url.host_str()
        .map(|host| host.contains(PIM_HOST_MARKER))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_bgimage_custom_property() {
        let document = Html::parse_document(
            r#"<html><body>
                <div style="--bgimage: Url(/media/65242/desktop-header.jpg?width=1200&height=600)"></div>
            </body></html>"#,
        );
        assert_eq!(
            extract_image(&document),
            vec!["https://www.exampleoutdoors.com/media/65242/desktop-header.jpg"]
        );
    }

    #[test]
    fn falls_back_to_background_image_declaration() {
        let document = Html::parse_document(
            r#"<html><body>
                <div style="background-image: url('/media/123/stew.jpg')"></div>
            </body></html>"#,
        );
        assert_eq!(
            extract_image(&document),
            vec!["https://www.exampleoutdoors.com/media/123/stew.jpg"]
        );
    }

    #[test]
    fn rejects_pim_hosted_assets() {
        let document = Html::parse_document(
            r#"<html><head>
                <meta property="og:image" content="https://pim.exampleoutdoors.com/media/product.jpg">
            </head><body>
                <div style="--bgimage: url(https://pim.exampleoutdoors.com/media/1/banner.jpg)"></div>
            </body></html>"#,
        );
        assert!(extract_image(&document).is_empty());
    }

    #[test]
    fn rejects_styles_outside_the_media_path() {
        let document = Html::parse_document(
            r#"<html><body><div style="--bgimage: url(/static/theme/banner.jpg)"></div></body></html>"#,
        );
        assert!(extract_image(&document).is_empty());
    }

    #[test]
    fn social_preview_resolves_relative_paths() {
        let document = Html::parse_document(
            r#"<html><head><meta property="og:image" content="/media/9/hero.jpg"></head><body></body></html>"#,
        );
        assert_eq!(
            extract_image(&document),
            vec!["https://www.exampleoutdoors.com/media/9/hero.jpg"]
        );
    }

    #[test]
    fn inline_image_is_the_last_resort() {
        let document = Html::parse_document(
            r#"<html><body>
                <img src="https://cdn.other.com/logo.png">
                <img src="/media/7/plated.jpg">
            </body></html>"#,
        );
        assert_eq!(
            extract_image(&document),
            vec!["https://www.exampleoutdoors.com/media/7/plated.jpg"]
        );
    }
}
