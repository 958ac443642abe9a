use crate::error::{CaseError, Result};
use serde_json::Value;
use std::fmt;

/// What a non-string input turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Undefined => write!(f, "undefined"),
            ValueKind::Null => write!(f, "null"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::Object => write!(f, "object"),
        }
    }
}

/// A value handed to a converter by a host that is not statically typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Other(ValueKind),
}

impl Input {
    /// An absent value (`undefined` on the host side)
    pub fn missing() -> Self {
        Input::Other(ValueKind::Undefined)
    }

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Input::Text(s.clone()),
            Value::Null => Input::Other(ValueKind::Null),
            Value::Bool(_) => Input::Other(ValueKind::Boolean),
            Value::Number(_) => Input::Other(ValueKind::Number),
            Value::Array(_) => Input::Other(ValueKind::Array),
            Value::Object(_) => Input::Other(ValueKind::Object),
        }
    }

    pub fn as_text(&self) -> Result<&str> {
        match self {
            Input::Text(s) => Ok(s),
            Input::Other(kind) => Err(CaseError::InvalidInput { received: *kind }),
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<Option<&str>> for Input {
    fn from(s: Option<&str>) -> Self {
        s.map_or_else(Input::missing, Input::from)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(s) => write!(f, "{}", s),
            Input::Other(kind) => write!(f, "<{}>", kind),
        }
    }
}
