use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleans a raw text fragment lifted out of markup: decodes entities (named
/// and numeric) until stable, strips residual tags, collapses whitespace runs
/// and trims.
///
/// Idempotent: re-normalizing already-clean text never changes it. Decoding
/// runs before stripping so that escaped markup ends up removed, not kept as
/// literal tags.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    // fragments often arrive escaped more than once; decode until stable
    let mut decoded = decode_html_entities(raw).into_owned();
    loop {
        let again = decode_html_entities(&decoded);
        if again == decoded {
            break;
        }
        decoded = again.into_owned();
    }
    let stripped = TAG_RE.replace_all(&decoded, " ");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}
