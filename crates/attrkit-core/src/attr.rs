//! # Attribute Type and Value Traits
//!
//! The contract a custom attribute type satisfies to plug into the host
//! framework's type system.
//!
//! - [`AttrType`] — a stateless type descriptor. Identifies the type,
//!   validates wire values, and decodes them into typed values.
//! - [`AttrValue`] — one concrete occurrence of an attribute, produced by
//!   its type.
//! - [`StringTypable`] / [`StringValuable`] — the extension seam for types
//!   built on the generic [`StringType`](crate::StringType) primitive.
//!
//! Both base traits are object-safe: the host keeps `Box<dyn AttrType>`
//! per declared attribute and narrows decoded values with
//! [`downcast_ref`](trait.AttrValue.html#method.downcast_ref).
//!
//! ## Invariant
//!
//! All implementations are `Send + Sync` and pure. The host may validate
//! and decode independent values concurrently without coordination.

use std::any::Any;
use std::fmt;

use crate::diag::Diagnostics;
use crate::error::AttrError;
use crate::path::AttrPath;
use crate::string::StringValue;
use crate::wire::{WireType, WireValue};

/// A type descriptor.
pub trait AttrType: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Human-readable type name for diagnostics.
    fn name(&self) -> String {
        self.to_string()
    }

    /// Wire type this attribute type is encoded as.
    fn wire_type(&self) -> WireType;

    /// Returns true if `other` is the same kind of type with equal
    /// parameters. Never fails for unrelated types.
    fn equal(&self, other: &dyn AttrType) -> bool;

    /// Zero value of the value kind this type produces.
    ///
    /// Serves only as a witness for dynamically-typed host code; static
    /// code uses [`StringTypable::Value`] instead.
    fn value_type(&self) -> Box<dyn AttrValue>;

    /// Validate a wire value before it is decoded.
    ///
    /// Returns every problem found, attributed to `path`. The default
    /// accepts everything.
    fn validate(&self, value: &WireValue, path: &AttrPath) -> Diagnostics {
        let _ = (value, path);
        Diagnostics::new()
    }

    /// Decode a wire value into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an [`AttrError`] when the wire value cannot be decoded at
    /// all. No partial value is produced.
    fn value_from_wire(&self, value: &WireValue) -> Result<Box<dyn AttrValue>, AttrError>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn AttrType {
    /// Narrow to a concrete type descriptor.
    pub fn downcast_ref<T: AttrType>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// A typed attribute value.
pub trait AttrValue: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The type descriptor that produces values of this kind.
    fn attr_type(&self) -> Box<dyn AttrType>;

    fn is_null(&self) -> bool;

    fn is_unknown(&self) -> bool;

    /// Encode back into a wire value.
    fn to_wire(&self) -> WireValue;

    /// Returns true if `other` is the same value kind holding an equal
    /// payload. Values of different kinds are never equal.
    fn equal(&self, other: &dyn AttrValue) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl dyn AttrValue {
    /// Narrow to a concrete value kind.
    pub fn downcast_ref<T: AttrValue>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// An attribute type built on the generic string primitive.
pub trait StringTypable: AttrType {
    /// The value kind this type produces.
    type Value: StringValuable;

    /// Wrap a generic string value into this type's value kind.
    ///
    /// # Errors
    ///
    /// `Err` carries at least one error diagnostic.
    fn value_from_string(&self, value: StringValue) -> Result<Self::Value, Diagnostics>;
}

/// An attribute value built on the generic string primitive.
pub trait StringValuable: AttrValue {
    /// The underlying generic string value.
    fn to_string_value(&self) -> StringValue;
}
