use thiserror::Error;

/// Errors that can abort an annotation pass.
///
/// Extraction misses are not errors: a field the extractors cannot find is an
/// empty value and the pass carries on. Only configuration and serialization
/// failures surface here, and a failed pass performs no write.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to serialize the assembled record into its JSON-LD block
    #[error("Failed to serialize recipe record: {0}")]
    Serialize(#[from] serde_json::Error),
}
