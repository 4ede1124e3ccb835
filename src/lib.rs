//! Heuristic recipe structured-data engine for one site's template family.
//!
//! Given a page's HTML source and its URL path, the engine locates the
//! recipe's semantic regions inside noisy markup, extracts each field through
//! an ordered fallback chain, assembles a schema.org Recipe record, and
//! rewrites the page with exactly one JSON-LD block. Pages outside the recipe
//! section, and pages where no viable recipe is found, are left untouched.

pub mod assemble;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod normalize;
pub mod publish;
pub mod regions;
pub mod vocab;

use chrono::NaiveDate;
use log::{debug, error};
use scraper::Html;

pub use crate::config::EngineConfig;
pub use crate::error::EngineError;
pub use crate::model::{InstructionStep, RecipeRecord, TimeBudget, VideoObject};

use crate::assemble::Extraction;

/// Runs one extraction pass and, when the assembled record passes the
/// validation gate, returns the page rewritten with the injected JSON-LD
/// block. `Ok(None)` means the page was left untouched: the path is outside
/// the recipe section, or the record was not viable.
pub fn annotate_page(
    html: &str,
    path: &str,
    config: &EngineConfig,
) -> Result<Option<String>, EngineError> {
    annotate_page_on(html, path, config, chrono::Local::now().date_naive())
}

/// Same pass with an explicit publication date, so callers and tests get
/// deterministic output.
pub fn annotate_page_on(
    html: &str,
    path: &str,
    config: &EngineConfig,
    date: NaiveDate,
) -> Result<Option<String>, EngineError> {
    if !path.starts_with(&config.path_prefix) {
        debug!("path {path} is outside {}, skipping", config.path_prefix);
        return Ok(None);
    }
    debug!("running on recipe page: {path}");

    let document = Html::parse_document(html);
    let regions = regions::locate_content_regions(&document);

    let title = extractors::extract_title(&document, path, &config.path_prefix);
    let extraction = Extraction {
        description: extractors::extract_description(&document, &regions),
        image: extractors::extract_image(&document),
        recipe_yield: extractors::extract_yield(&regions),
        times: extractors::extract_times(&regions),
        keywords: extractors::extract_keywords(path, &title, &config.path_prefix),
        ingredients: extractors::extract_ingredients(&regions),
        instructions: extractors::extract_instructions(&regions),
        video: extractors::extract_video(&document),
        title,
    };

    let record = assemble::assemble(extraction, config, date);
    if !assemble::is_publishable(&record) {
        debug!("record for {path} failed validation, nothing published");
        return Ok(None);
    }

    let record_json = serde_json::to_string_pretty(&record)?;
    if config.debug {
        debug!("assembled record: {record_json}");
    }
    Ok(Some(publish::publish(html, &record_json)))
}

/// Convenience wrapper with the error policy of a page-load pass: any failure
/// is logged and swallowed, and the page stays as it was.
pub fn try_annotate_page(html: &str, path: &str, config: &EngineConfig) -> Option<String> {
    match annotate_page(html, path, config) {
        Ok(result) => result,
        Err(err) => {
            error!("annotation pass abandoned: {err}");
            None
        }
    }
}
