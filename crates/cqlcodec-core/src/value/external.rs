use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// ExternalValue
///
/// Client-facing scalar as exchanged over JSON. Serializes as the bare JSON
/// value. Numbers that fit `i64` are integers; every other number is a float.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExternalValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ExternalValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short shape name used in error messages.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
        }
    }
}

impl Display for ExternalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::String(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for ExternalValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ExternalValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ExternalValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for ExternalValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ExternalValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl TryFrom<serde_json::Value> for ExternalValue {
    type Error = CodecError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(v) => Ok(Self::Boolean(v)),
            Value::Number(n) => match n.as_i64() {
                Some(v) => Ok(Self::Integer(v)),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| CodecError::unsupported(format!("JSON number {n}"))),
            },
            Value::String(v) => Ok(Self::String(v)),
            Value::Array(_) => Err(CodecError::unsupported("JSON array")),
            Value::Object(_) => Err(CodecError::unsupported("JSON object")),
        }
    }
}

// Non-finite floats have no JSON form and become null.
impl From<ExternalValue> for serde_json::Value {
    fn from(value: ExternalValue) -> Self {
        match value {
            ExternalValue::Null => Self::Null,
            ExternalValue::Boolean(v) => Self::Bool(v),
            ExternalValue::Integer(v) => Self::from(v),
            ExternalValue::Float(v) => Self::from(v),
            ExternalValue::String(v) => Self::String(v),
        }
    }
}
