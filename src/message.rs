//! Message summarization
//!
//! Turns a full provider message into the flat row the viewer and the
//! terminal renderer display: picked headers, a normalized date, and the
//! decoded body.

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::body::extract_body;
use crate::types::{EmailSummary, Header, Message};

static ANGLE_ADDR_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Look up a header value by name, case-insensitively
#[must_use]
pub fn header_value<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

/// Parse an RFC 2822 `Date:` header value
///
/// Falls back to the current time when the value is absent or invalid,
/// so a summary row always carries a date.
#[must_use]
pub fn parse_date(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc2822(value).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

/// Strip angle-bracketed addresses from a `From:` value for display
///
/// `"Jane Doe <jane@example.com>"` becomes `"Jane Doe"`; a bare address
/// in angle brackets becomes an empty string.
#[must_use]
pub fn display_name(from: &str) -> String {
    ANGLE_ADDR_REGEX.replace_all(from, "").trim().to_string()
}

/// Assemble a viewer row from a full provider message
///
/// Header lookups that find nothing yield empty strings rather than
/// errors; the body is selected with the HTML-priority policy so the
/// viewer can render rich content when any exists.
#[must_use]
pub fn summarize(message: &Message) -> EmailSummary {
    let headers = message
        .payload
        .as_ref()
        .map_or(&[] as &[Header], |p| p.headers.as_slice());

    let from = header_value(headers, "From").unwrap_or_default().to_string();
    let subject = header_value(headers, "Subject")
        .unwrap_or_default()
        .to_string();
    let date = parse_date(header_value(headers, "Date").unwrap_or_default());

    let body = message
        .payload
        .as_ref()
        .map(extract_body)
        .unwrap_or_default();

    debug!("Summarized message {} from {}", message.id, from);

    EmailSummary {
        id: message.id.clone(),
        from,
        subject,
        date,
        snippet: message.snippet.clone(),
        body: body.text,
        is_html: body.is_html,
    }
}
