//! # Exact JSON Type
//!
//! [`ExactType`] is an attribute type for strings that must hold valid
//! JSON (RFC 7159). Values are compared byte-for-byte like any other
//! string: `{"a":1}` and ` { "a" : 1 } ` are different values even though
//! they decode to the same document.
//!
//! ## Two Error Taxonomies
//!
//! Validation keeps provider-internal inconsistencies and user mistakes
//! apart:
//!
//! - [`VALIDATION_ERROR_SUMMARY`] — the wire value is not a string, or its
//!   data cannot be extracted. Always a wiring bug; the low-level error
//!   text is included verbatim.
//! - [`INVALID_JSON_SUMMARY`](crate::INVALID_JSON_SUMMARY) — the user supplied a string that is not
//!   JSON. The offending value is quoted.
//!
//! Conversion never validates. The host runs validation and conversion
//! as separate pipeline steps.

use std::any::Any;
use std::fmt;

use attrkit_core::{
    AttrError, AttrPath, AttrType, AttrValue, Diagnostics, StringTypable, StringType,
    StringValue, WireType, WireValue,
};

use crate::exact_value::Exact;
use crate::syntax::check_json_string;

/// Category label for provider-internal validation failures.
pub const VALIDATION_ERROR_SUMMARY: &str = "JSON Exact Type Validation Error";

/// Attribute type for a string holding valid JSON, compared byte-for-byte.
///
/// Stateless. Any two `ExactType`s are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExactType {
    string_type: StringType,
}

impl ExactType {
    pub const fn new() -> Self {
        Self {
            string_type: StringType::new(),
        }
    }

    /// Decode a wire value into an [`Exact`] without validating it.
    ///
    /// The payload is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the string primitive's decoding error unchanged. Returns
    /// `AttrError::UnexpectedValueKind` if the primitive hands back
    /// something other than a [`StringValue`], and
    /// `AttrError::StringConversion` if wrapping reports errors.
    pub fn exact_from_wire(&self, value: &WireValue) -> Result<Exact, AttrError> {
        let decoded = self.string_type.value_from_wire(value)?;

        let Some(string_value) = decoded.downcast_ref::<StringValue>() else {
            return Err(AttrError::UnexpectedValueKind {
                found: decoded.attr_type().name(),
            });
        };

        self.value_from_string(string_value.clone()).map_err(|diags| {
            tracing::debug!(%diags, "string value could not be wrapped");
            AttrError::StringConversion(diags)
        })
    }
}

impl fmt::Display for ExactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attrkit_json.ExactType")
    }
}

impl AttrType for ExactType {
    fn wire_type(&self) -> WireType {
        self.string_type.wire_type()
    }

    fn equal(&self, other: &dyn AttrType) -> bool {
        other
            .downcast_ref::<ExactType>()
            .is_some_and(|o| self.string_type.equal(&o.string_type))
    }

    fn value_type(&self) -> Box<dyn AttrValue> {
        Box::new(Exact::default())
    }

    fn validate(&self, value: &WireValue, path: &AttrPath) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let Some(ty) = value.wire_type() else {
            tracing::trace!(%path, "untyped wire value, nothing to validate");
            return diags;
        };

        if *ty != WireType::String {
            let err = format!("expected String value, received {ty} with value: {value}");
            diags.add_attribute_error(path, VALIDATION_ERROR_SUMMARY, internal_error_detail(&err));
            tracing::debug!(%path, wire_type = %ty, "wire value is not a string");
            return diags;
        }

        if !value.is_known() || value.is_null() {
            tracing::trace!(%path, "unknown or null value, skipping JSON check");
            return diags;
        }

        match value.as_str() {
            Ok(s) => diags.append(check_json_string(s, path)),
            Err(err) => {
                diags.add_attribute_error(
                    path,
                    VALIDATION_ERROR_SUMMARY,
                    internal_error_detail(&err.to_string()),
                );
                tracing::debug!(%path, error = %err, "string data could not be extracted");
            }
        }

        diags
    }

    fn value_from_wire(&self, value: &WireValue) -> Result<Box<dyn AttrValue>, AttrError> {
        Ok(Box::new(self.exact_from_wire(value)?))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl StringTypable for ExactType {
    type Value = Exact;

    fn value_from_string(&self, value: StringValue) -> Result<Exact, Diagnostics> {
        Ok(Exact::from(value))
    }
}

fn internal_error_detail(err: &str) -> String {
    format!(
        "An unexpected error was encountered trying to validate an attribute value. \
         This is always an error in the provider. \
         Please report the following to the provider developer:\n\n{err}"
    )
}
