// crates/recipe-loader-core/src/error.rs
use thiserror::Error;

/// Errors produced while reading, decoding or persisting recipes.
///
/// Nothing in this crate recovers from these; they are surfaced to the
/// caller as-is so a failed run leaves the store untouched.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The source file does not exist.
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, or a top level that is neither an object nor an array.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A recognized field carries a value of the wrong type.
    #[error("Invalid record {key}: {source}")]
    InvalidRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Connection, constraint or commit failure reported by the database.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
