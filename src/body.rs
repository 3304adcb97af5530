//! Body selection and decoding for payload trees
//!
//! Two selection policies exist because callers want different things:
//! the viewer path prefers renderable HTML whenever any exists
//! ([`extract_body`]), while the prompt path wants plain prose and only
//! falls back to HTML when the tree has no plain-text leaf at all
//! ([`extract_plain_body`]).

use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

use crate::types::{BodyContent, EmailPayload};

/// Select and decode the best body with HTML priority
///
/// Walks the payload tree depth-first in part order, without stopping
/// early. An HTML leaf always replaces whatever was captured before it;
/// a plain-text leaf only fills an empty slot. Returns an empty result
/// when no leaf matches.
#[must_use]
pub fn extract_body(payload: &EmailPayload) -> BodyContent {
    let mut found: Option<BodyContent> = None;
    visit_html_priority(payload, &mut found);
    found.unwrap_or_default()
}

fn visit_html_priority(part: &EmailPayload, found: &mut Option<BodyContent>) {
    if let Some(parts) = &part.parts {
        for child in parts {
            visit_html_priority(child, found);
        }
    } else if part.is_mime("text/html")
        && let Some(text) = part.inline_data().and_then(decode_base64url)
    {
        *found = Some(BodyContent {
            text,
            is_html: true,
        });
    } else if part.is_mime("text/plain")
        && found.is_none()
        && let Some(text) = part.inline_data().and_then(decode_base64url)
    {
        *found = Some(BodyContent {
            text,
            is_html: false,
        });
    }
}

/// Select and decode the best body with plain-text priority
///
/// Two passes: the first collects only `text/plain` leaves (first match
/// wins), the second runs only when the first found nothing and collects
/// only `text/html` leaves.
#[must_use]
pub fn extract_plain_body(payload: &EmailPayload) -> BodyContent {
    if let Some(text) = find_leaf(payload, "text/plain") {
        return BodyContent {
            text,
            is_html: false,
        };
    }
    if let Some(text) = find_leaf(payload, "text/html") {
        return BodyContent {
            text,
            is_html: true,
        };
    }
    BodyContent::default()
}

fn find_leaf(part: &EmailPayload, mime: &str) -> Option<String> {
    if let Some(parts) = &part.parts {
        parts.iter().find_map(|child| find_leaf(child, mime))
    } else if part.is_mime(mime) {
        part.inline_data().and_then(decode_base64url)
    } else {
        None
    }
}

/// Decode a base64url string into UTF-8 text
///
/// The provider encodes part data with the URL-safe alphabet (`-`/`_`)
/// and normally omits padding, but padded input occurs in practice, so
/// both forms are accepted. Invalid UTF-8 sequences are replaced rather
/// than rejected.
#[must_use]
pub fn decode_base64url(data: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(data)
        .or_else(|_| URL_SAFE.decode(data))
        .ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Truncate body text for list display, appending `...` when cut
#[must_use]
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
