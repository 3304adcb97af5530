//! Prompt assembly for the generative-AI collaborator
//!
//! The strict output-only instructions are what make the greedy JSON
//! extraction in [`crate::extract_json`] workable: the model is told to
//! emit a single object and nothing else, and the extractor recovers
//! from the prose it sometimes adds anyway.

const PURCHASE_INSTRUCTION: &str = "Output ONLY a valid JSON object for a new QuickBooks \
     Purchase, suitable for direct POST to the QuickBooks API. Do not include explanation, \
     comments, or any extra text.";

const SCHEMA_INSTRUCTION: &str = "You are an expert in QuickBooks Online API integration. \
     Given the following JSON data, extract and output the JSON schema that represents the \
     structure, required fields, and data types for this entity.\n\n\
     - The schema should include all top-level and nested fields, their types (string, \
     number, array, object, boolean), and indicate which fields are required for a valid \
     QuickBooks API request.\n\
     - Output only the JSON schema, no explanation or extra text.";

/// Build the purchase-generation prompt from an operator-supplied base
///
/// The base text usually embeds an email body; the appended instruction
/// constrains the completion to a single JSON object.
#[must_use]
pub fn purchase_prompt(base: &str) -> String {
    format!("{base}\n\n{PURCHASE_INSTRUCTION}")
}

/// Build the schema-from-sample prompt for an entity record
#[must_use]
pub fn schema_prompt(entity_sample: &str) -> String {
    format!("{SCHEMA_INSTRUCTION}\n\n### Example Data:\n{entity_sample}")
}
