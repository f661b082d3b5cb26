//! Response values and their normalization.
//!
//! A [`ResponseValue`] is whatever the host application stored for a
//! response body. Usually that is plain text, but workspace data that went
//! through a JSON round-trip may carry the body as a buffer-like record:
//!
//! ```json
//! { "type": "Buffer", "data": [104, 105] }
//! ```
//!
//! where every element of `data` is one UTF-16 code unit. [`normalize`]
//! turns any of these shapes into a string that can be displayed.
//!
//! # Example
//!
//! ```
//! use response_raw_viewer::value::{normalize, ResponseValue};
//!
//! assert_eq!(normalize(&ResponseValue::from("test")), Some("test".to_string()));
//! assert_eq!(normalize(&ResponseValue::Buffer(vec![104, 105])), Some("hi".to_string()));
//! assert_eq!(normalize(&ResponseValue::Absent), None);
//! ```

use crate::config::NormalizeMode;
use crate::errors::ViewerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

/// Discriminant used by stored buffer-like records.
pub const BUFFER_TAG: &str = "Buffer";

/// A stored response body, as handed to the viewer by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseValue {
    /// Nothing has been set.
    #[default]
    Absent,
    /// Regular response text.
    PlainText(String),
    /// Buffer-like record; each element is a UTF-16 code unit.
    Buffer(Vec<u16>),
    /// Any other shape. Only produced by `From<Value>`, so it never holds
    /// `null`, a string or a well-formed buffer record.
    Unsupported(UnsupportedShape),
}

/// Raw value of an unrecognised response shape, kept so callers can inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedShape(Value);

impl UnsupportedShape {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }
}

impl ResponseValue {
    /// Parses a stored JSON representation.
    pub fn from_json_str(s: &str) -> Result<Self, ViewerError> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from(value))
    }

    /// Short name of the variant, used in log lines and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseValue::Absent => "absent",
            ResponseValue::PlainText(_) => "text",
            ResponseValue::Buffer(_) => "buffer",
            ResponseValue::Unsupported(shape) => match shape.raw() {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ResponseValue::Absent)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ResponseValue::Unsupported(_))
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::PlainText(s.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::PlainText(s)
    }
}

impl From<Vec<u16>> for ResponseValue {
    fn from(units: Vec<u16>) -> Self {
        ResponseValue::Buffer(units)
    }
}

impl From<&[u16]> for ResponseValue {
    fn from(units: &[u16]) -> Self {
        ResponseValue::Buffer(units.to_vec())
    }
}

impl<T: Into<ResponseValue>> From<Option<T>> for ResponseValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ResponseValue::Absent)
    }
}

impl From<Value> for ResponseValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ResponseValue::Absent,
            Value::String(s) => ResponseValue::PlainText(s),
            Value::Object(map) => {
                if map.get("type").and_then(Value::as_str) == Some(BUFFER_TAG) {
                    if let Some(units) = map.get("data").and_then(buffer_units) {
                        return ResponseValue::Buffer(units);
                    }
                }
                ResponseValue::Unsupported(UnsupportedShape(Value::Object(map)))
            }
            other => ResponseValue::Unsupported(UnsupportedShape(other)),
        }
    }
}

/// Reads the `data` array of a buffer record. Returns `None` when it is not
/// an array of numbers.
fn buffer_units(data: &Value) -> Option<Vec<u16>> {
    data.as_array()?
        .iter()
        .map(|n| n.as_f64().map(to_code_unit))
        .collect()
}

/// Reduces a number to a UTF-16 code unit: truncate toward zero, then wrap
/// modulo 2^16. Non-finite numbers map to 0.
fn to_code_unit(n: f64) -> u16 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(65536.0) as u16
}

impl Serialize for ResponseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseValue::Absent => serializer.serialize_none(),
            ResponseValue::PlainText(s) => serializer.serialize_str(s),
            ResponseValue::Buffer(units) => json!({ "type": BUFFER_TAG, "data": units }).serialize(serializer),
            ResponseValue::Unsupported(shape) => shape.raw().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ResponseValue::from)
    }
}

/// Converts a stored response value into a displayable string.
///
/// `Absent` stays `None` so "nothing set" remains distinguishable from empty
/// content. Unsupported shapes become an empty string; this function never
/// fails.
pub fn normalize(value: &ResponseValue) -> Option<String> {
    match value {
        ResponseValue::Absent => None,
        ResponseValue::PlainText(s) => Some(s.clone()),
        ResponseValue::Buffer(units) => Some(String::from_utf16_lossy(units)),
        ResponseValue::Unsupported(_) => {
            log::trace!("coercing unsupported {} value to empty text", value.kind());
            Some(String::new())
        }
    }
}

/// Like [`normalize`], but rejects unsupported shapes in [`NormalizeMode::Strict`].
pub fn try_normalize(value: &ResponseValue, mode: NormalizeMode) -> Result<Option<String>, ViewerError> {
    match (value, mode) {
        (ResponseValue::Unsupported(_), NormalizeMode::Strict) => Err(ViewerError::UnsupportedValue { kind: value.kind() }),
        _ => Ok(normalize(value)),
    }
}
