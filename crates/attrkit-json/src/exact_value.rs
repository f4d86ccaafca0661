//! # Exact JSON Value
//!
//! [`Exact`] is the value kind produced by [`ExactType`]. It wraps a
//! [`StringValue`] and inherits its byte-for-byte equality.
//!
//! Construction does not validate. A concrete payload is valid JSON only
//! because the host ran [`ExactType`] validation (or
//! [`Exact::validate_attribute`]) before using it.

use std::any::Any;
use std::fmt;

use attrkit_core::{
    AttrPath, AttrType, AttrValue, Diagnostics, StringValuable, StringValue, WireValue,
};
use serde::{Deserialize, Serialize};

use crate::exact_type::ExactType;
use crate::syntax::check_json_string;

/// A string attribute value holding JSON, compared byte-for-byte.
///
/// The default value is null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exact {
    value: StringValue,
}

impl Exact {
    /// A known value. The payload is not checked.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: StringValue::new(value),
        }
    }

    pub fn null() -> Self {
        Self {
            value: StringValue::null(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            value: StringValue::unknown(),
        }
    }

    /// `None` becomes null.
    pub fn from_option(value: Option<impl Into<String>>) -> Self {
        Self {
            value: StringValue::from_option(value),
        }
    }

    /// The JSON payload, if known and non-null.
    pub fn value_str(&self) -> Option<&str> {
        self.value.value_str()
    }

    /// The JSON payload, or the empty string for null and unknown values.
    pub fn value_string(&self) -> String {
        self.value.value_string()
    }

    /// Check the held payload, reporting an "Invalid JSON String Value"
    /// diagnostic at `path` if it is not valid JSON.
    ///
    /// Null and unknown values produce no diagnostics.
    pub fn validate_attribute(&self, path: &AttrPath) -> Diagnostics {
        match self.value.value_str() {
            Some(s) => check_json_string(s, path),
            None => Diagnostics::new(),
        }
    }
}

impl From<StringValue> for Exact {
    fn from(value: StringValue) -> Self {
        Self { value }
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl AttrValue for Exact {
    fn attr_type(&self) -> Box<dyn AttrType> {
        Box::new(ExactType::new())
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }

    fn to_wire(&self) -> WireValue {
        self.value.to_wire()
    }

    fn equal(&self, other: &dyn AttrValue) -> bool {
        other.downcast_ref::<Exact>().is_some_and(|o| self == o)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl StringValuable for Exact {
    fn to_string_value(&self) -> StringValue {
        self.value.clone()
    }
}
