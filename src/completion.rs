//! Structured-JSON extraction from model completions

use regex::Regex;

use crate::error::{ExtractError, Result};

// Widest brace-delimited span, first `{` to last `}`. Must stay greedy:
// a lazy match truncates nested objects at the first inner `}`.
static JSON_SPAN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Extract the embedded JSON object from a free-text model completion
///
/// The completion is expected, by prompt instruction, to contain exactly
/// one JSON object, possibly surrounded by prose. The widest
/// brace-delimited span is located and parsed. Whether the parsed value
/// is actually an object is left to the caller.
///
/// Fails with [`ExtractError::NoJsonFound`] when the text contains no
/// `{...}` span at all, and with [`ExtractError::MalformedJson`] when
/// the span does not parse; both carry the raw text for diagnostics.
pub fn extract_json(text: &str) -> Result<serde_json::Value> {
    let span = JSON_SPAN_REGEX
        .find(text)
        .ok_or_else(|| ExtractError::NoJsonFound {
            raw: text.to_string(),
        })?;

    serde_json::from_str(span.as_str()).map_err(|e| ExtractError::MalformedJson {
        raw: text.to_string(),
        span: span.as_str().to_string(),
        details: e.to_string(),
    })
}
