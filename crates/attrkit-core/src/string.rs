//! # Generic String Primitive
//!
//! [`StringType`] and [`StringValue`] are the base capability that custom
//! string-based attribute types wrap and delegate to. Custom types
//! implement [`StringTypable`] to reuse the wire decoding here and only
//! add their own identity and validation.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attr::{AttrType, AttrValue, StringTypable, StringValuable};
use crate::diag::Diagnostics;
use crate::error::AttrError;
use crate::wire::{WireType, WireValue};

/// Payload state shared by all values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueState<T> {
    #[default]
    Null,
    Unknown,
    Known(T),
}

/// The generic string attribute type. Carries no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringType;

impl StringType {
    pub const fn new() -> Self {
        Self
    }

    /// Decode a wire value into a [`StringValue`].
    ///
    /// An untyped wire value decodes to null.
    ///
    /// # Errors
    ///
    /// Returns `AttrError::WireTypeMismatch` if the wire type is not
    /// `String`, and `AttrError::Wire` if the string data cannot be
    /// extracted.
    pub fn string_from_wire(&self, value: &WireValue) -> Result<StringValue, AttrError> {
        let Some(ty) = value.wire_type() else {
            return Ok(StringValue::null());
        };
        if *ty != WireType::String {
            tracing::debug!(wire_type = %ty, "wire value is not a string");
            return Err(AttrError::WireTypeMismatch {
                expected: WireType::String,
                found: ty.clone(),
            });
        }
        if !value.is_known() {
            return Ok(StringValue::unknown());
        }
        if value.is_null() {
            return Ok(StringValue::null());
        }
        Ok(StringValue::new(value.as_str()?))
    }
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attrkit_core.StringType")
    }
}

impl AttrType for StringType {
    fn wire_type(&self) -> WireType {
        WireType::String
    }

    fn equal(&self, other: &dyn AttrType) -> bool {
        other.downcast_ref::<StringType>().is_some_and(|o| self == o)
    }

    fn value_type(&self) -> Box<dyn AttrValue> {
        Box::new(StringValue::default())
    }

    fn value_from_wire(&self, value: &WireValue) -> Result<Box<dyn AttrValue>, AttrError> {
        Ok(Box::new(self.string_from_wire(value)?))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl StringTypable for StringType {
    type Value = StringValue;

    fn value_from_string(&self, value: StringValue) -> Result<StringValue, Diagnostics> {
        Ok(value)
    }
}

/// A generic string value: a concrete string, null, or unknown.
///
/// Equality is byte-for-byte on the payload and also distinguishes the
/// null and unknown states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringValue {
    state: ValueState<String>,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            state: ValueState::Known(value.into()),
        }
    }

    pub fn null() -> Self {
        Self {
            state: ValueState::Null,
        }
    }

    pub fn unknown() -> Self {
        Self {
            state: ValueState::Unknown,
        }
    }

    /// `None` becomes null.
    pub fn from_option(value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => Self::new(v),
            None => Self::null(),
        }
    }

    pub fn state(&self) -> &ValueState<String> {
        &self.state
    }

    /// The payload, if known and non-null.
    pub fn value_str(&self) -> Option<&str> {
        match &self.state {
            ValueState::Known(s) => Some(s),
            _ => None,
        }
    }

    /// The payload, or the empty string for null and unknown values.
    pub fn value_string(&self) -> String {
        self.value_str().unwrap_or_default().to_string()
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ValueState::Null => f.write_str("<null>"),
            ValueState::Unknown => f.write_str("<unknown>"),
            ValueState::Known(s) => write!(f, "{s:?}"),
        }
    }
}

impl AttrValue for StringValue {
    fn attr_type(&self) -> Box<dyn AttrType> {
        Box::new(StringType)
    }

    fn is_null(&self) -> bool {
        matches!(self.state, ValueState::Null)
    }

    fn is_unknown(&self) -> bool {
        matches!(self.state, ValueState::Unknown)
    }

    fn to_wire(&self) -> WireValue {
        match &self.state {
            ValueState::Null => WireValue::null(WireType::String),
            ValueState::Unknown => WireValue::unknown(WireType::String),
            ValueState::Known(s) => WireValue::string(s.clone()),
        }
    }

    fn equal(&self, other: &dyn AttrValue) -> bool {
        other.downcast_ref::<StringValue>().is_some_and(|o| self == o)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl StringValuable for StringValue {
    fn to_string_value(&self) -> StringValue {
        self.clone()
    }
}
