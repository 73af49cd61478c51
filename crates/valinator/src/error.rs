// File: src/error.rs
// Purpose: Errors raised while reading rule definition documents

/// A rule definition document could not be turned into definitions.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid JSON rule definitions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML rule definitions: {0}")]
    Toml(#[from] toml::de::Error),
}
