use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Engine configuration.
///
/// Every field has a default tuned to the target site, so the engine runs with
/// no configuration at all; overrides come from an optional
/// `recipe-annotator.toml` file or `RECIPE_ANNOTATOR__*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// URL path prefix that activates the engine. Anything else is a no-op.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// Organization name published as the record's author.
    #[serde(default = "default_author")]
    pub author: String,
    /// Fixed `recipeCuisine` value.
    #[serde(default = "default_cuisine")]
    pub cuisine: String,
    /// Fixed `recipeCategory` value.
    #[serde(default = "default_category")]
    pub category: String,
    /// Dump the assembled record at debug level before publishing.
    #[serde(default)]
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            path_prefix: default_path_prefix(),
            author: default_author(),
            cuisine: default_cuisine(),
            category: default_category(),
            debug: false,
        }
    }
}

// Default value functions
fn default_path_prefix() -> String {
    "/recipes/".to_string()
}

fn default_author() -> String {
    "Example Outdoors".to_string()
}

fn default_cuisine() -> String {
    "Outdoor".to_string()
}

fn default_category() -> String {
    "Main course".to_string()
}

impl EngineConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ANNOTATOR__ prefix
    /// 2. recipe-annotator.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ANNOTATOR__PATH_PREFIX
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-annotator").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_ANNOTATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
