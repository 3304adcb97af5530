//! Error types for extraction

use thiserror::Error;

/// Errors that can occur while extracting structured data
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The model completion contained no brace-delimited span
    #[error("no JSON object found in model response")]
    NoJsonFound {
        /// Full completion text, kept for diagnostic display
        raw: String,
    },

    /// A brace-delimited span was found but did not parse as JSON
    #[error("failed to parse JSON from model response: {details}")]
    MalformedJson {
        /// Full completion text
        raw: String,
        /// The substring the parse was attempted on
        span: String,
        /// Parser error message
        details: String,
    },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
