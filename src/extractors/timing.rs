use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::model::TimeBudget;
use crate::regions::ContentRegion;

// "rise 1-2 hours", "let the dough rise for 45 min"
static RISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bris\w*\s+(?:for\s+)?(\d+)\s*(?:[-\u{2013}]\s*(\d+))?\s*(hours?|hrs?|min\w*)")
        .unwrap()
});

// Bare range before "min" needs a qualifying context word to count as a cook
// time ("25-30 min depending on the embers", "20-25 min in the oven").
static RANGE_WITH_CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*[-\u{2013}]\s*(\d+)\s*min\w*\s+(?:depending|in\s+the\s+oven|over\b)")
        .unwrap()
});

static BAKE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bbak\w*\s+(?:for\s+)?(\d+)\s*(?:[-\u{2013}]\s*(\d+))?\s*(hours?|hrs?|min\w*)")
        .unwrap()
});

static BOIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bboil\w*\s+(?:for\s+)?(\d+)\s*(?:[-\u{2013}]\s*(\d+))?\s*(hours?|hrs?|min\w*)")
        .unwrap()
});

/// Extracts the recipe's time budget from region text.
///
/// Rise/proof time accumulates into `prep` across regions (a dough can rise
/// twice). Cook time is set once by the first matching pattern and never
/// overwritten by later regions.
pub fn extract_times(regions: &[ContentRegion]) -> TimeBudget {
    let mut budget = TimeBudget::default();

    for region in regions {
        let text = region.text();

        if let Some(caps) = RISE_RE.captures(&text) {
            budget.prep += range_upper_minutes(&caps);
        }

        if budget.cook == 0 {
            if let Some(caps) = RANGE_WITH_CONTEXT_RE.captures(&text) {
                // Unit is always minutes here; take the upper bound.
                budget.cook = caps[2].parse().unwrap_or(0);
            } else if let Some(caps) = BAKE_RE.captures(&text).or_else(|| BOIL_RE.captures(&text)) {
                budget.cook = range_upper_minutes(&caps);
            }
        }
    }

    debug!("extracted times: prep {}m, cook {}m", budget.prep, budget.cook);
    budget
}

/// Upper bound of the matched number or range, converted to minutes.
fn range_upper_minutes(caps: &Captures) -> u32 {
    let value: u32 = caps
        .get(2)
        .or_else(|| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let unit = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    if unit.to_lowercase().starts_with('h') {
        value * 60
    } else {
        value
    }
}

/// Minutes to an ISO-8601 duration string; zero means the field is absent.
pub fn minutes_to_iso(minutes: u32) -> Option<String> {
    if minutes == 0 {
        return None;
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    Some(match (hours, mins) {
        (0, m) => format!("PT{m}M"),
        (h, 0) => format!("PT{h}H"),
        (h, m) => format!("PT{h}H{m}M"),
    })
}
