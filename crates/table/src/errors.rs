use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read directory: {0}")]
    ReadError(String),

    #[error("JSON parsing error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Unsupported directory format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Category '{category}' not found in content directory (available: {available:?})")]
    CategoryNotFound {
        category: String,
        available: Vec<String>,
    },
}
