//! # JSON Syntax Check
//!
//! RFC 7159 well-formedness only. The payload is scanned, never
//! interpreted: no values are built, no keys are looked up.
//!
//! The scan deserializes into [`IgnoredAny`], which walks the full
//! grammar (balanced structure, literals, string escapes, number format)
//! and then requires that only whitespace follows the document.

use attrkit_core::{AttrPath, Diagnostics};
use serde::de::IgnoredAny;

/// Category label for payloads that are not well-formed JSON.
pub const INVALID_JSON_SUMMARY: &str = "Invalid JSON String Value";

/// Returns true if `value` is exactly one well-formed JSON document,
/// optionally surrounded by whitespace.
pub fn is_valid_json(value: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(value).is_ok()
}

/// Check a concrete payload and report a user-facing diagnostic at `path`
/// if it is not valid JSON.
pub(crate) fn check_json_string(value: &str, path: &AttrPath) -> Diagnostics {
    let mut diags = Diagnostics::new();
    if !is_valid_json(value) {
        tracing::debug!(path = %path, "string value is not valid JSON");
        diags.add_attribute_error(
            path,
            INVALID_JSON_SUMMARY,
            format!(
                "A string value was provided that is not valid JSON string format (RFC 7159).\n\n\
                 Given Value: {value}\n"
            ),
        );
    }
    diags
}
