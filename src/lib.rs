// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Gmail Payload Extraction
//!
//! Shared extraction routines for a mail-to-accounting pipeline: decode
//! the best human-readable body out of a Gmail-style MIME payload tree,
//! and pull the embedded JSON object out of a free-text model completion.
//!
//! # Features
//!
//! - Strongly-typed payload tree matching the provider's `camelCase` wire shape
//! - Two body-selection policies: HTML-priority and plain-text-priority
//! - base64url decoding of inline part data
//! - Greedy brace-span JSON extraction from model responses
//! - Message summarization (headers, dates, previews) for viewer rows
//! - HTML sanitization for viewer-bound bodies
//! - Injectable OAuth token store
//!
//! # Example
//!
//! ```rust
//! use gmail_extract::{EmailPayload, extract_body, extract_json};
//!
//! let payload: EmailPayload = serde_json::from_str(
//!     r#"{"mimeType": "text/plain", "body": {"data": "aGVsbG8"}}"#,
//! ).unwrap();
//!
//! let body = extract_body(&payload);
//! assert_eq!(body.text, "hello");
//! assert!(!body.is_html);
//!
//! let value = extract_json(r#"The record: {"total": 42} as requested."#).unwrap();
//! assert_eq!(value["total"], 42);
//! ```

mod body;
mod completion;
mod error;
mod message;
mod prompt;
mod sanitize;
mod token;
mod types;

pub use body::{decode_base64url, extract_body, extract_plain_body, preview};
pub use completion::extract_json;
pub use error::{ExtractError, Result};
pub use message::{display_name, header_value, parse_date, summarize};
pub use prompt::{purchase_prompt, schema_prompt};
pub use sanitize::sanitize_html;
pub use token::{MemoryTokenStore, TokenStore};
pub use types::*;
