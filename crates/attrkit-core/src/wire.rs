//! # Wire Values
//!
//! The host framework's untyped value representation: a type tag, a
//! known/unknown flag, a null flag, and raw data when known and non-null.
//!
//! Attribute types consume wire values when validating and decoding, and
//! typed values produce them when encoding back.
//!
//! ## Structural Consistency
//!
//! [`WireValue::new`] does not check that the data matches the declared
//! type. Hosts hand over whatever they decoded, and consumers must treat
//! extraction as fallible ([`WireValue::as_str`]). Use
//! [`WireValue::try_new`] when building values that must be consistent.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WireError;

static JSON_NULL: Value = Value::Null;

/// Declared type of a wire value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireType {
    String,
    Number,
    Bool,
    List(Box<WireType>),
    Set(Box<WireType>),
    Map(Box<WireType>),
    Object(BTreeMap<String, WireType>),
}

impl WireType {
    pub fn list_of(element: WireType) -> Self {
        Self::List(Box::new(element))
    }

    pub fn set_of(element: WireType) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn map_of(element: WireType) -> Self {
        Self::Map(Box::new(element))
    }

    pub fn object<I, K>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, WireType)>,
        K: Into<String>,
    {
        Self::Object(attributes.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Number => f.write_str("Number"),
            Self::Bool => f.write_str("Bool"),
            Self::List(e) => write!(f, "List[{e}]"),
            Self::Set(e) => write!(f, "Set[{e}]"),
            Self::Map(e) => write!(f, "Map[{e}]"),
            Self::Object(attrs) => {
                f.write_str("Object[")?;
                for (i, (name, ty)) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name:?}:{ty}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Raw payload of a known, non-null wire value.
#[derive(Debug, Clone, PartialEq)]
pub enum WireData {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    List(Vec<WireValue>),
    Set(Vec<WireValue>),
    Map(BTreeMap<String, WireValue>),
    Object(BTreeMap<String, WireValue>),
}

impl WireData {
    /// Short name of the data shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }

    fn matches(&self, ty: &WireType) -> bool {
        match (self, ty) {
            (Self::String(_), WireType::String)
            | (Self::Number(_), WireType::Number)
            | (Self::Bool(_), WireType::Bool) => true,
            (Self::List(vs), WireType::List(e)) | (Self::Set(vs), WireType::Set(e)) => {
                elements_match(vs.iter(), e)
            }
            (Self::Map(vs), WireType::Map(e)) => elements_match(vs.values(), e),
            (Self::Object(vs), WireType::Object(attrs)) => {
                vs.len() == attrs.len()
                    && attrs.iter().all(|(name, attr_ty)| {
                        vs.get(name).is_some_and(|v| {
                            v.ty.as_ref() == Some(attr_ty) && v.is_consistent()
                        })
                    })
            }
            _ => false,
        }
    }
}

fn elements_match<'a>(mut values: impl Iterator<Item = &'a WireValue>, elem: &WireType) -> bool {
    values.all(|v| v.ty.as_ref() == Some(elem) && v.is_consistent())
}

/// Known/unknown/null state of a wire value.
#[derive(Debug, Clone, PartialEq)]
pub enum WireState {
    /// Not yet determined (e.g. computed during apply).
    Unknown,
    /// Explicitly absent.
    Null,
    Known(WireData),
}

/// A host-framework value: optional type tag plus state.
///
/// A value with no type tag carries no type information at all; attribute
/// types treat it as "nothing to validate yet".
#[derive(Debug, Clone, PartialEq)]
pub struct WireValue {
    ty: Option<WireType>,
    state: WireState,
}

impl WireValue {
    /// A known, non-null value. Does not check `data` against `ty`.
    pub fn new(ty: WireType, data: WireData) -> Self {
        Self {
            ty: Some(ty),
            state: WireState::Known(data),
        }
    }

    /// A known, non-null value whose data must match `ty` all the way down.
    ///
    /// # Errors
    ///
    /// Returns `WireError::DataMismatch` if the data shape or any nested
    /// element type disagrees with `ty`.
    pub fn try_new(ty: WireType, data: WireData) -> Result<Self, WireError> {
        if !data.matches(&ty) {
            return Err(WireError::DataMismatch {
                expected: ty.to_string(),
                found: data.kind().to_string(),
            });
        }
        Ok(Self::new(ty, data))
    }

    pub fn null(ty: WireType) -> Self {
        Self {
            ty: Some(ty),
            state: WireState::Null,
        }
    }

    pub fn unknown(ty: WireType) -> Self {
        Self {
            ty: Some(ty),
            state: WireState::Unknown,
        }
    }

    /// A value with no type information.
    pub fn untyped() -> Self {
        Self {
            ty: None,
            state: WireState::Null,
        }
    }

    /// Shorthand for a known `String` value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(WireType::String, WireData::String(value.into()))
    }

    pub fn wire_type(&self) -> Option<&WireType> {
        self.ty.as_ref()
    }

    pub fn state(&self) -> &WireState {
        &self.state
    }

    pub fn is_known(&self) -> bool {
        !matches!(self.state, WireState::Unknown)
    }

    pub fn is_null(&self) -> bool {
        matches!(self.state, WireState::Null)
    }

    /// Returns true if this value and every nested value are known.
    pub fn is_fully_known(&self) -> bool {
        match &self.state {
            WireState::Unknown => false,
            WireState::Null => true,
            WireState::Known(data) => match data {
                WireData::List(vs) | WireData::Set(vs) => vs.iter().all(Self::is_fully_known),
                WireData::Map(vs) | WireData::Object(vs) => {
                    vs.values().all(Self::is_fully_known)
                }
                _ => true,
            },
        }
    }

    /// Borrow the string payload.
    ///
    /// # Errors
    ///
    /// Fails for unknown and null values, and for known values whose data
    /// is not a string.
    pub fn as_str(&self) -> Result<&str, WireError> {
        match &self.state {
            WireState::Unknown => Err(WireError::Unknown),
            WireState::Null => Err(WireError::Null),
            WireState::Known(WireData::String(s)) => Ok(s),
            WireState::Known(other) => Err(WireError::DataMismatch {
                expected: "string".to_string(),
                found: other.kind().to_string(),
            }),
        }
    }

    /// Decode a JSON-encoded state value for a declared wire type.
    ///
    /// JSON `null` becomes a null value at any level, and object
    /// attributes missing from the JSON are null. Unknown values cannot be
    /// expressed in JSON.
    ///
    /// # Errors
    ///
    /// Returns `WireError::JsonMismatch` when the JSON kind does not fit
    /// the declared type, including object keys the type does not declare.
    pub fn from_json(ty: &WireType, json: &Value) -> Result<Self, WireError> {
        let mismatch = || WireError::JsonMismatch {
            expected: ty.clone(),
            found: json_kind(json).to_string(),
        };

        if json.is_null() {
            return Ok(Self::null(ty.clone()));
        }

        let data = match (ty, json) {
            (WireType::String, Value::String(s)) => WireData::String(s.clone()),
            (WireType::Number, Value::Number(n)) => WireData::Number(n.clone()),
            (WireType::Bool, Value::Bool(b)) => WireData::Bool(*b),
            (WireType::List(e), Value::Array(items)) => WireData::List(
                items
                    .iter()
                    .map(|item| Self::from_json(e, item))
                    .collect::<Result<_, _>>()?,
            ),
            (WireType::Set(e), Value::Array(items)) => WireData::Set(
                items
                    .iter()
                    .map(|item| Self::from_json(e, item))
                    .collect::<Result<_, _>>()?,
            ),
            (WireType::Map(e), Value::Object(entries)) => WireData::Map(
                entries
                    .iter()
                    .map(|(k, v)| Self::from_json(e, v).map(|wv| (k.clone(), wv)))
                    .collect::<Result<_, _>>()?,
            ),
            (WireType::Object(attrs), Value::Object(entries)) => {
                if entries.keys().any(|k| !attrs.contains_key(k)) {
                    return Err(mismatch());
                }
                WireData::Object(
                    attrs
                        .iter()
                        .map(|(name, attr_ty)| {
                            let v = entries.get(name).unwrap_or(&JSON_NULL);
                            Self::from_json(attr_ty, v).map(|wv| (name.clone(), wv))
                        })
                        .collect::<Result<_, _>>()?,
                )
            }
            _ => return Err(mismatch()),
        };

        Ok(Self::new(ty.clone(), data))
    }

    fn is_consistent(&self) -> bool {
        match (&self.ty, &self.state) {
            (Some(ty), WireState::Known(data)) => data.matches(ty),
            _ => true,
        }
    }
}

fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ty) = &self.ty else {
            return f.write_str("<untyped>");
        };
        write!(f, "{ty}<")?;
        match &self.state {
            WireState::Unknown => f.write_str("unknown")?,
            WireState::Null => f.write_str("null")?,
            WireState::Known(data) => fmt_data(data, f)?,
        }
        f.write_str(">")
    }
}

fn fmt_data(data: &WireData, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match data {
        WireData::String(s) => write!(f, "{s:?}"),
        WireData::Number(n) => write!(f, "{n}"),
        WireData::Bool(b) => write!(f, "{b}"),
        WireData::List(vs) | WireData::Set(vs) => {
            for (i, v) in vs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            Ok(())
        }
        WireData::Map(vs) | WireData::Object(vs) => {
            for (i, (k, v)) in vs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{k:?}:{v}")?;
            }
            Ok(())
        }
    }
}
