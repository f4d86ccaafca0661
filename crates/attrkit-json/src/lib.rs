//! # attrkit-json — JSON String Attribute Types
//!
//! Custom attribute types for string attributes that carry a JSON
//! document.
//!
//! - [`ExactType`] / [`Exact`] — the string must be valid JSON (RFC 7159)
//!   and values compare byte-for-byte. Whitespace and key order are
//!   significant: ` {"a":1}` and `{"a":1}` are different values.
//!
//! ## Usage
//!
//! ```
//! use attrkit_core::{AttrPath, AttrType, WireValue};
//! use attrkit_json::{Exact, ExactType, INVALID_JSON_SUMMARY};
//!
//! let ty = ExactType::new();
//! let path = AttrPath::root("policy");
//!
//! let ok = WireValue::string(r#"{"a":1}"#);
//! assert!(ty.validate(&ok, &path).is_empty());
//! assert_eq!(ty.exact_from_wire(&ok).unwrap(), Exact::new(r#"{"a":1}"#));
//!
//! let bad = WireValue::string("{a:1}");
//! let diags = ty.validate(&bad, &path);
//! assert_eq!(diags.iter().next().unwrap().summary, INVALID_JSON_SUMMARY);
//! ```
//!
//! ## Crate Policy
//!
//! - The payload is never interpreted. Only syntactic validity is checked.
//! - Conversion never validates; validation never converts.

mod exact_type;
mod exact_value;
mod syntax;

pub use exact_type::{ExactType, VALIDATION_ERROR_SUMMARY};
pub use exact_value::Exact;
pub use syntax::{is_valid_json, INVALID_JSON_SUMMARY};
