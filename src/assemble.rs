use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::extractors::minutes_to_iso;
use crate::model::{InstructionStep, Organization, RecipeRecord, TimeBudget, VideoObject};

/// Everything the extractors produced for one pass, prior to assembly.
#[derive(Debug, Default, Clone)]
pub struct Extraction {
    pub title: String,
    pub description: String,
    pub image: Vec<String>,
    pub recipe_yield: String,
    pub times: TimeBudget,
    pub keywords: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<InstructionStep>,
    pub video: Option<VideoObject>,
}

/// Pure combination of extractor outputs into one record. Presence rules live
/// in the model's serialization attributes; the only derivations here are the
/// total duration and the video annotation.
pub fn assemble(extraction: Extraction, config: &EngineConfig, date: NaiveDate) -> RecipeRecord {
    let mut record = RecipeRecord::new(extraction.title, Organization::new(config.author.clone()));

    record.description = extraction.description;
    record.date_published = date.format("%Y-%m-%d").to_string();
    record.recipe_category = config.category.clone();
    record.recipe_cuisine = config.cuisine.clone();
    record.image = extraction.image;
    record.recipe_yield = extraction.recipe_yield;
    record.keywords = extraction.keywords;
    record.recipe_ingredient = extraction.ingredients;
    record.recipe_instructions = extraction.instructions;

    record.prep_time = minutes_to_iso(extraction.times.prep);
    record.cook_time = minutes_to_iso(extraction.times.cook);
    record.total_time = minutes_to_iso(extraction.times.total());

    record.video = extraction.video.map(|mut video| {
        video.name = record.name.clone();
        video.description = record.description.clone();
        video
    });

    record
}

/// The sole go/no-go decision before publication: a record needs a plausible
/// name and at least one ingredient. Everything else is best-effort.
pub fn is_publishable(record: &RecipeRecord) -> bool {
    record.name.chars().count() >= 3 && !record.recipe_ingredient.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction() -> Extraction {
        Extraction {
            title: "Campfire Stew".to_string(),
            ingredients: vec!["500g beef".to_string()],
            ..Extraction::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn derives_total_time_from_both_components() {
        let mut fields = extraction();
        fields.times = TimeBudget { prep: 120, cook: 30 };
        let record = assemble(fields, &EngineConfig::default(), date());
        assert_eq!(record.prep_time.as_deref(), Some("PT2H"));
        assert_eq!(record.cook_time.as_deref(), Some("PT30M"));
        assert_eq!(record.total_time.as_deref(), Some("PT2H30M"));
    }

    #[test]
    fn zero_durations_stay_absent() {
        let record = assemble(extraction(), &EngineConfig::default(), date());
        assert_eq!(record.prep_time, None);
        assert_eq!(record.cook_time, None);
        assert_eq!(record.total_time, None);
    }

    #[test]
    fn total_present_when_only_one_component_is() {
        let mut fields = extraction();
        fields.times = TimeBudget { prep: 0, cook: 45 };
        let record = assemble(fields, &EngineConfig::default(), date());
        assert_eq!(record.total_time.as_deref(), Some("PT45M"));
    }

    #[test]
    fn video_is_annotated_with_name_and_description() {
        let mut fields = extraction();
        fields.description = "A hearty stew.".to_string();
        fields.video = Some(VideoObject::new("https://www.youtube.com/embed/abc"));
        let record = assemble(fields, &EngineConfig::default(), date());
        let video = record.video.unwrap();
        assert_eq!(video.name, "Campfire Stew");
        assert_eq!(video.description, "A hearty stew.");
    }

    #[test]
    fn fixed_identity_and_date_are_applied() {
        let record = assemble(extraction(), &EngineConfig::default(), date());
        assert_eq!(record.author.name, "Example Outdoors");
        assert_eq!(record.date_published, "2026-08-26");
        assert_eq!(record.recipe_category, "Main course");
        assert_eq!(record.recipe_cuisine, "Outdoor");
    }

    #[test]
    fn gate_rejects_short_names_regardless_of_ingredients() {
        let mut fields = extraction();
        fields.title = "AB".to_string();
        let record = assemble(fields, &EngineConfig::default(), date());
        assert!(!is_publishable(&record));
    }

    #[test]
    fn gate_rejects_missing_ingredients() {
        let mut fields = extraction();
        fields.ingredients.clear();
        let record = assemble(fields, &EngineConfig::default(), date());
        assert!(!is_publishable(&record));
    }

    #[test]
    fn gate_accepts_name_and_one_ingredient() {
        let record = assemble(extraction(), &EngineConfig::default(), date());
        assert!(is_publishable(&record));
    }
}
