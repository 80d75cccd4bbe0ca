//! Normalization of arbitrary error values into a stable `{name, message, stack}` shape.
//!
//! A log call may carry anything that describes a failure: a Rust error, an
//! `anyhow::Error`, or a dynamic JSON value coming from an untyped boundary.
//! [`ErrorValue::classify`] resolves the input into the closed [`ErrorShape`]
//! union and [`normalize_error`] maps each arm to a [`NormalizedError`]
//! without ever panicking.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Write as _};

/// Name used when a Rust error carries no concrete type information.
pub const GENERIC_ERROR_NAME: &str = "Error";

const MAX_SOURCE_DEPTH: usize = 32;
const CAUSE_PREFIX: &str = "\n    caused by: ";

/// An error value attached to a log call.
#[derive(Debug, Clone)]
pub enum ErrorValue<'a> {
    /// A Rust error together with the short name of its type.
    Standard {
        /// Short type name (`"Error"` for `std::io::Error`).
        name: &'static str,
        /// The error itself.
        error: &'a (dyn StdError + 'a),
    },
    /// A dynamic value of unknown shape.
    Value(Cow<'a, Value>),
}

impl<'a> ErrorValue<'a> {
    /// Wrap a concrete Rust error, capturing its type name.
    pub fn error<E: StdError>(error: &'a E) -> Self {
        Self::Standard {
            name: short_type_name::<E>(),
            error,
        }
    }

    /// Wrap a type-erased Rust error.
    pub fn dyn_error(error: &'a (dyn StdError + 'a)) -> Self {
        Self::Standard {
            name: GENERIC_ERROR_NAME,
            error,
        }
    }

    /// Wrap an `anyhow::Error`.
    pub fn anyhow(error: &'a anyhow::Error) -> Self {
        let inner: &(dyn StdError + Send + Sync + 'static) = error.as_ref();
        Self::Standard {
            name: GENERIC_ERROR_NAME,
            error: inner,
        }
    }

    /// Wrap an owned dynamic value.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(Cow::Owned(value.into()))
    }

    /// Borrow a dynamic value.
    pub const fn json(value: &'a Value) -> Self {
        Self::Value(Cow::Borrowed(value))
    }

    /// Resolve the value into one of the recognized shapes.
    #[must_use]
    pub fn classify(&self) -> ErrorShape<'_> {
        match self {
            Self::Standard { name, error } => ErrorShape::Standard {
                name: *name,
                error: *error,
            },
            Self::Value(value) => classify_value(value),
        }
    }
}

impl From<Value> for ErrorValue<'_> {
    fn from(value: Value) -> Self {
        Self::Value(Cow::Owned(value))
    }
}

impl<'a> From<&'a Value> for ErrorValue<'a> {
    fn from(value: &'a Value) -> Self {
        Self::json(value)
    }
}

impl From<&str> for ErrorValue<'_> {
    fn from(value: &str) -> Self {
        Self::value(value)
    }
}

impl From<String> for ErrorValue<'_> {
    fn from(value: String) -> Self {
        Self::value(value)
    }
}

impl<'a> From<&'a anyhow::Error> for ErrorValue<'a> {
    fn from(error: &'a anyhow::Error) -> Self {
        Self::anyhow(error)
    }
}

/// Closed set of shapes an [`ErrorValue`] can take.
#[derive(Debug, Clone, Copy)]
pub enum ErrorShape<'a> {
    /// Nothing worth reporting (`null`, `false`, `0`, `""`).
    Absent,
    /// A Rust error.
    Standard {
        /// Short type name.
        name: &'a str,
        /// The error itself.
        error: &'a (dyn StdError + 'a),
    },
    /// A dynamic object exposing string-typed `name`, `message` or `stack`.
    ErrorLike {
        /// String-typed `name`, if present.
        name: Option<&'a str>,
        /// String-typed `message`, if present.
        message: Option<&'a str>,
        /// String-typed `stack`, if present.
        stack: Option<&'a str>,
    },
    /// Any other truthy value.
    Other(&'a Value),
}

/// Stable structured form of an error value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedError {
    /// Error type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Header line followed by the cause chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl NormalizedError {
    /// Fallback shape carrying only a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            name: None,
            message: Some(message.into()),
            stack: None,
        }
    }

    /// Convert into a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(name) = self.name {
            map.insert("name".to_string(), Value::String(name));
        }
        if let Some(message) = self.message {
            map.insert("message".to_string(), Value::String(message));
        }
        if let Some(stack) = self.stack {
            map.insert("stack".to_string(), Value::String(stack));
        }
        Value::Object(map)
    }
}

/// Normalize an optional error value. Never panics.
#[must_use]
pub fn normalize_error(value: Option<&ErrorValue<'_>>) -> Option<NormalizedError> {
    match value?.classify() {
        ErrorShape::Absent => None,
        ErrorShape::Standard { name, error } => Some(normalize_standard(name, error)),
        ErrorShape::ErrorLike {
            name,
            message,
            stack,
        } => Some(NormalizedError {
            name: name.map(str::to_owned),
            message: message.map(str::to_owned),
            stack: stack.map(str::to_owned),
        }),
        ErrorShape::Other(value) => Some(NormalizedError::from_message(stringify_value(value))),
    }
}

fn classify_value(value: &Value) -> ErrorShape<'_> {
    if is_falsy(value) {
        return ErrorShape::Absent;
    }
    if let Value::Object(map) = value {
        let name = map.get("name").and_then(Value::as_str);
        let message = map.get("message").and_then(Value::as_str);
        let stack = map.get("stack").and_then(Value::as_str);
        if name.is_some() || message.is_some() || stack.is_some() {
            return ErrorShape::ErrorLike {
                name,
                message,
                stack,
            };
        }
    }
    ErrorShape::Other(value)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn normalize_standard(name: &str, error: &(dyn StdError + '_)) -> NormalizedError {
    let Some(message) = render(error) else {
        return NormalizedError::from_message(name);
    };

    let mut stack = format!("{name}: {message}");
    let mut source = error.source();
    let mut depth = 0;
    while let Some(cause) = source {
        if depth == MAX_SOURCE_DEPTH {
            break;
        }
        if let Some(text) = render(cause) {
            stack.push_str(CAUSE_PREFIX);
            stack.push_str(&text);
        }
        source = cause.source();
        depth += 1;
    }

    NormalizedError {
        name: Some(name.to_owned()),
        message: Some(message),
        stack: Some(stack),
    }
}

/// `Display` without the panic `ToString` raises on a formatter error.
fn render(value: &dyn fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{value}").ok()?;
    Some(out)
}

fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
