use serde::Serialize;

/// Fixed organization identity used for the `author` field.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Organization {
            kind: "Organization",
            name: name.into(),
        }
    }
}

/// One instruction step. `name` is the human label ("Step 3", optionally
/// prefixed by a detected sub-section); `text` is the cleaned body. Document
/// order within a content region is preserved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InstructionStep {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub text: String,
}

impl InstructionStep {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        InstructionStep {
            kind: "HowToStep",
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Prep and cook time in minutes, each independently optional (0 = absent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBudget {
    pub prep: u32,
    pub cook: u32,
}

impl TimeBudget {
    pub fn total(&self) -> u32 {
        self.prep + self.cook
    }
}

/// Embedded video reference. Name and description are filled in by the
/// assembler from the record they accompany.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VideoObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "embedUrl")]
    pub embed_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl VideoObject {
    pub fn new(embed_url: impl Into<String>) -> Self {
        VideoObject {
            kind: "VideoObject",
            embed_url: embed_url.into(),
            name: String::new(),
            description: String::new(),
        }
    }
}

/// The assembled schema.org Recipe record. Serializes straight to the JSON-LD
/// block; empty optional fields are omitted rather than serialized as empty.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRecord {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub author: Organization,
    #[serde(rename = "datePublished")]
    pub date_published: String,
    #[serde(rename = "recipeCategory")]
    pub recipe_category: String,
    #[serde(rename = "recipeCuisine")]
    pub recipe_cuisine: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,
    #[serde(rename = "recipeYield", skip_serializing_if = "String::is_empty")]
    pub recipe_yield: String,
    #[serde(rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(rename = "cookTime", skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(rename = "totalTime", skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
    #[serde(rename = "recipeIngredient", skip_serializing_if = "Vec::is_empty")]
    pub recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions", skip_serializing_if = "Vec::is_empty")]
    pub recipe_instructions: Vec<InstructionStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoObject>,
}

impl RecipeRecord {
    /// Starts an otherwise-empty record with the fixed type identifiers set.
    pub fn new(name: impl Into<String>, author: Organization) -> Self {
        RecipeRecord {
            context: "https://schema.org",
            kind: "Recipe",
            name: name.into(),
            description: String::new(),
            author,
            date_published: String::new(),
            recipe_category: String::new(),
            recipe_cuisine: String::new(),
            image: Vec::new(),
            recipe_yield: String::new(),
            prep_time: None,
            cook_time: None,
            total_time: None,
            keywords: String::new(),
            recipe_ingredient: Vec::new(),
            recipe_instructions: Vec::new(),
            video: None,
        }
    }
}
