use log::debug;
use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

use super::element_text;
use crate::model::InstructionStep;
use crate::regions::ContentRegion;
use crate::vocab::{
    COOKIE_LOGIN_WORDS, FAQ_WORDS, INSTRUCTION_OPENERS, INSTRUCTION_SECTION_LABELS,
    STORE_CATEGORY_WORDS,
};

/// Emission stops after this many steps; anything longer is runaway capture.
const MAX_STEPS: usize = 15;

/// Dedup window: two fragments sharing their first 50 characters are the same
/// step rendered twice under different containers.
const DEDUP_PREFIX_CHARS: usize = 50;

const MIN_PARAGRAPH_BODY: usize = 15;
const MIN_LIST_BODY: usize = 20;

// "1. Heat the pan", "2) Add the beef", "3: Stir"
static NUMBERED_STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[.):\s]\s*(.+)$").unwrap());

// A leading quantity+unit means the line leaked over from an ingredient list.
static INGREDIENT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s*(?:g|kg|ml|dl|l|tsp|tbsp|cups?|oz|lbs?)\b").unwrap()
});

/// Extracts the ordered instruction steps. The first region that yields at
/// least one step wins; later regions are not scanned.
pub fn extract_instructions(regions: &[ContentRegion]) -> Vec<InstructionStep> {
    for region in regions {
        let steps = scan_region(region);
        if !steps.is_empty() {
            debug!("found {} instructions in region '{}'", steps.len(), region.id());
            return steps;
        }
    }
    Vec::new()
}

/// Per-region state machine.
///
/// Capture opens at a heading matching an opener stem ("Preparation",
/// "Method", ...). While capturing, h4/strong sub-headings matching the known
/// section labels rename the current section without stopping capture; any
/// other h2/h3 ends the region. Numbered paragraphs and long list items become
/// steps after noise rejection and prefix dedup.
fn scan_region(region: &ContentRegion) -> Vec<InstructionStep> {
    let selector = Selector::parse("h2, h3, h4, p, li, strong").unwrap();

    let mut capturing = false;
    let mut section = String::new();
    let mut steps: Vec<InstructionStep> = Vec::new();
    let mut seen_prefixes: Vec<String> = Vec::new();

    for element in region.element().select(&selector) {
        let tag = element.value().name();
        let text = element_text(element);

        if !capturing {
            if matches!(tag, "h2" | "h3" | "h4") && opens_capture(&text) {
                capturing = true;
                section = String::new();
                debug!("instruction capture opened at: {text}");
            }
            continue;
        }

        if steps.len() >= MAX_STEPS {
            break;
        }

        match tag {
            "h4" | "strong" => {
                if is_section_label(&text) {
                    section = text;
                }
            }
            "h2" | "h3" => break,
            "p" => {
                if let Some(caps) = NUMBERED_STEP_RE.captures(&text) {
                    let body = caps[2].trim().to_string();
                    if body.chars().count() > MIN_PARAGRAPH_BODY {
                        emit(&mut steps, &mut seen_prefixes, &section, &caps[1], body);
                    }
                }
            }
            "li" => {
                if text.chars().count() > MIN_LIST_BODY {
                    let number = (steps.len() + 1).to_string();
                    emit(&mut steps, &mut seen_prefixes, &section, &number, text);
                }
            }
            _ => {}
        }
    }
    steps
}

fn emit(
    steps: &mut Vec<InstructionStep>,
    seen_prefixes: &mut Vec<String>,
    section: &str,
    number: &str,
    body: String,
) {
    if is_noise(&body) {
        debug!("rejected noisy instruction candidate: {body}");
        return;
    }
    let prefix: String = body
        .to_lowercase()
        .chars()
        .take(DEDUP_PREFIX_CHARS)
        .collect();
    if seen_prefixes.contains(&prefix) {
        debug!("rejected duplicate instruction candidate: {body}");
        return;
    }
    seen_prefixes.push(prefix);

    let name = if section.is_empty() {
        format!("Step {number}")
    } else {
        format!("{section} - Step {number}")
    };
    steps.push(InstructionStep::new(name, body));
}

fn opens_capture(heading: &str) -> bool {
    let lowered = heading.to_lowercase();
    INSTRUCTION_OPENERS
        .iter()
        .any(|stem| lowered.starts_with(stem))
        || INSTRUCTION_SECTION_LABELS.contains(&lowered.as_str())
}

fn is_section_label(heading: &str) -> bool {
    INSTRUCTION_SECTION_LABELS.contains(&heading.to_lowercase().as_str())
}

fn is_noise(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    STORE_CATEGORY_WORDS
        .iter()
        .chain(COOKIE_LOGIN_WORDS)
        .chain(FAQ_WORDS)
        .any(|word| lowered.contains(word))
        || INGREDIENT_LINE_RE.is_match(candidate)
}
