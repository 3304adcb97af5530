//! Best-effort HTML hygiene for viewer-bound bodies
//!
//! Display cleanup, not a security boundary: the viewer renders bodies
//! from the operator's own mailbox.

use regex::Regex;

static SCRIPT_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());

static EVENT_HANDLER_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"(?i)\s*on\w+\s*=\s*["'][^"']*["']"#).unwrap()
});

static JS_PROTOCOL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());

// Tags removed wholesale; their inner content is kept.
static DANGEROUS_TAG_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:object|embed|applet|form|input|button)\b[^>]*>").unwrap()
});

/// Strip scripting vectors from an HTML body before display
///
/// Removes `<script>` blocks with their content, inline `on*=` event
/// handlers, `javascript:` protocol references, and interactive tags
/// (`object`, `embed`, `applet`, `form`, `input`, `button`) while
/// preserving the text inside them.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let html = SCRIPT_REGEX.replace_all(html, "");
    let html = EVENT_HANDLER_REGEX.replace_all(&html, "");
    let html = JS_PROTOCOL_REGEX.replace_all(&html, "");
    DANGEROUS_TAG_REGEX.replace_all(&html, "").into_owned()
}
