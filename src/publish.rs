use log::debug;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Attribute tagging blocks this engine injected.
pub const BLOCK_MARKER: &str = "data-recipe-schema";

static LD_JSON_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // the type attribute value may be quoted or bare
    Regex::new(
        r#"(?is)<script[^>]*type\s*=\s*["']?application/ld\+json["']?[^>]*>(.*?)</script>\s*"#,
    )
    .unwrap()
});

static HEAD_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</head>").unwrap());
static BODY_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</body>").unwrap());

/// Writes the serialized record into the page, idempotently: any existing
/// structured-data block of the Recipe kind is removed first (including
/// records nested in `@graph` arrays), then exactly one new block is inserted
/// in the head. Malformed existing blocks are left alone.
pub fn publish(html: &str, record_json: &str) -> String {
    let stripped = LD_JSON_BLOCK_RE.replace_all(html, |caps: &regex::Captures| {
        if is_recipe_block(&caps[1]) {
            debug!("removing previously published recipe block");
            String::new()
        } else {
            caps[0].to_string()
        }
    });

    let block = format!(
        "<script type=\"application/ld+json\" {BLOCK_MARKER}=\"generated\">{record_json}</script>"
    );

    if let Some(found) = HEAD_CLOSE_RE.find(&stripped) {
        let mut page = stripped.to_string();
        page.insert_str(found.start(), &block);
        page
    } else if let Some(found) = BODY_CLOSE_RE.find(&stripped) {
        let mut page = stripped.to_string();
        page.insert_str(found.start(), &block);
        page
    } else {
        let mut page = stripped.to_string();
        page.push_str(&block);
        page
    }
}

/// Whether an existing JSON-LD payload describes a Recipe. Malformed JSON is
/// non-matching, never an error.
fn is_recipe_block(payload: &str) -> bool {
    match serde_json::from_str::<Value>(payload.trim()) {
        Ok(value) => contains_recipe(&value),
        Err(_) => false,
    }
}

fn contains_recipe(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            let typed = match map.get("@type") {
                Some(Value::String(kind)) => kind == "Recipe",
                Some(Value::Array(kinds)) => {
                    kinds.iter().any(|kind| kind.as_str() == Some("Recipe"))
                }
                _ => false,
            };
            typed
                || map
                    .get("@graph")
                    .and_then(Value::as_array)
                    .map(|graph| graph.iter().any(contains_recipe))
                    .unwrap_or(false)
        }
        Value::Array(items) => items.iter().any(contains_recipe),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>Stew</title></head><body><p>hi</p></body></html>";

    fn recipe_json(name: &str) -> String {
        format!(r#"{{"@context":"https://schema.org","@type":"Recipe","name":"{name}"}}"#)
    }

    fn count_recipe_blocks(html: &str) -> usize {
        LD_JSON_BLOCK_RE
            .captures_iter(html)
            .filter(|caps| is_recipe_block(&caps[1]))
            .count()
    }

    #[test]
    fn inserts_one_tagged_block_in_the_head() {
        let published = publish(PAGE, &recipe_json("Campfire Stew"));
        assert_eq!(count_recipe_blocks(&published), 1);
        let block_at = published.find(BLOCK_MARKER).unwrap();
        assert!(block_at < published.find("</head>").unwrap());
    }

    #[test]
    fn publishing_twice_leaves_one_block_with_the_second_content() {
        let once = publish(PAGE, &recipe_json("First"));
        let twice = publish(&once, &recipe_json("Second"));
        assert_eq!(count_recipe_blocks(&twice), 1);
        assert!(twice.contains("Second"));
        assert!(!twice.contains("First"));
    }

    #[test]
    fn removes_blocks_with_an_unquoted_type_attribute() {
        let page = r#"<html><head><script type=application/ld+json>{"@type":"Recipe","name":"Old"}</script></head><body></body></html>"#;
        let published = publish(page, &recipe_json("New"));
        assert!(!published.contains("Old"));
        assert_eq!(count_recipe_blocks(&published), 1);
    }

    #[test]
    fn removes_recipes_nested_in_graph_arrays() {
        let page = r#"<html><head><script type="application/ld+json">{"@graph":[{"@type":"WebSite"},{"@type":"Recipe","name":"Old"}]}</script></head><body></body></html>"#;
        let published = publish(page, &recipe_json("New"));
        assert!(!published.contains("Old"));
        assert!(published.contains("New"));
    }

    #[test]
    fn non_recipe_and_malformed_blocks_are_kept() {
        let page = r#"<html><head>
            <script type="application/ld+json">{"@type":"WebSite","name":"Site"}</script>
            <script type="application/ld+json">{not json at all</script>
        </head><body></body></html>"#;
        let published = publish(page, &recipe_json("New"));
        assert!(published.contains(r#""@type":"WebSite""#));
        assert!(published.contains("{not json at all"));
        assert_eq!(count_recipe_blocks(&published), 1);
    }

    #[test]
    fn appends_when_the_page_has_no_head_or_body() {
        let published = publish("<p>fragment</p>", &recipe_json("Stew"));
        assert!(published.starts_with("<p>fragment</p>"));
        assert_eq!(count_recipe_blocks(&published), 1);
    }
}
