//! Core types for Gmail-style messages and extraction results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A node in a message payload tree, as delivered by the mail provider
///
/// A node is either a leaf with inline `body` data or a container with
/// child `parts`; providers nest `multipart/*` containers a few levels
/// deep but no fixed depth can be assumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailPayload {
    /// MIME type, e.g. `text/plain` or `multipart/alternative`
    pub mime_type: Option<String>,

    /// Headers attached to this part (populated on the root payload)
    pub headers: Vec<Header>,

    /// Inline content, absent when content lives in child parts
    pub body: Option<PayloadBody>,

    /// Child parts, present for multipart containers
    pub parts: Option<Vec<EmailPayload>>,
}

impl EmailPayload {
    /// Inline base64url data of this part, if any
    #[must_use]
    pub fn inline_data(&self) -> Option<&str> {
        self.body.as_ref()?.data.as_deref()
    }

    /// Check the part's MIME type against an exact value
    #[must_use]
    pub fn is_mime(&self, mime: &str) -> bool {
        self.mime_type.as_deref() == Some(mime)
    }
}

/// Inline body content of a payload node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayloadBody {
    /// Size in bytes as reported by the provider
    pub size: Option<u32>,

    /// base64url-encoded content
    pub data: Option<String>,
}

/// Message header (name-value pair)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Full message envelope from the provider
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    /// Provider message ID
    pub id: String,

    /// Thread the message belongs to
    pub thread_id: Option<String>,

    /// Provider-generated preview snippet
    pub snippet: String,

    /// Milliseconds since epoch, as a string on the wire
    pub internal_date: Option<String>,

    /// Payload tree
    pub payload: Option<EmailPayload>,
}

/// Decoded body selected from a payload tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyContent {
    /// Decoded UTF-8 text, empty when no decodable leaf was found
    pub text: String,

    /// True when the chosen text came from a `text/html` leaf
    pub is_html: bool,
}

impl BodyContent {
    /// Check if any body text was captured
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Viewer row assembled from a full message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSummary {
    pub id: String,
    pub from: String,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub snippet: String,
    pub body: String,
    pub is_html: bool,
}

/// OAuth token set as returned by the provider's token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    /// Expiry as milliseconds since epoch
    pub expiry_date: Option<i64>,
}

impl Token {
    /// Build a token carrying only an access token
    #[must_use]
    pub const fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            refresh_token: None,
            token_type: None,
            scope: None,
            expiry_date: None,
        }
    }
}
