//! Log record assembly.

use crate::error_value::{ErrorValue, normalize_error};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied metadata, merged flat into the record in insertion order.
pub type LogFields = Map<String, Value>;

/// Record key: ISO-8601 timestamp.
pub const FIELD_TS: &str = "ts";
/// Record key: logger namespace.
pub const FIELD_NS: &str = "ns";
/// Record key: message.
pub const FIELD_MSG: &str = "msg";
/// Record key: normalized error.
pub const FIELD_ERROR: &str = "error";

/// Whether metadata may replace `ts`, `ns` and `msg`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaseFieldPolicy {
    /// Last write wins: metadata keys replace base fields.
    #[default]
    Overridable,
    /// Base fields win: colliding metadata keys are dropped.
    Locked,
}

impl BaseFieldPolicy {
    fn keeps_metadata_key(self, key: &str) -> bool {
        match self {
            Self::Overridable => true,
            Self::Locked => !is_base_field(key),
        }
    }
}

fn is_base_field(key: &str) -> bool {
    matches!(key, FIELD_TS | FIELD_NS | FIELD_MSG)
}

/// A flat structured log record handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Look up a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `ts` field, when it is a string.
    #[must_use]
    pub fn ts(&self) -> Option<&str> {
        self.get(FIELD_TS).and_then(Value::as_str)
    }

    /// The `ns` field, when it is a string.
    #[must_use]
    pub fn ns(&self) -> Option<&str> {
        self.get(FIELD_NS).and_then(Value::as_str)
    }

    /// The `msg` field, when it is a string.
    #[must_use]
    pub fn msg(&self) -> Option<&str> {
        self.get(FIELD_MSG).and_then(Value::as_str)
    }

    /// The `error` field.
    #[must_use]
    pub fn error(&self) -> Option<&Value> {
        self.get(FIELD_ERROR)
    }

    /// All fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<LogRecord> for Value {
    fn from(record: LogRecord) -> Self {
        record.into_value()
    }
}

/// Everything needed to build one record.
#[derive(Debug, Clone)]
pub struct RecordInput<'a> {
    /// Time of the call.
    pub timestamp: DateTime<Utc>,
    /// Logger namespace.
    pub namespace: &'a str,
    /// Message text.
    pub message: &'a str,
    /// Optional metadata.
    pub metadata: Option<LogFields>,
    /// Optional error value.
    pub error: Option<ErrorValue<'a>>,
    /// Collision policy for base fields.
    pub policy: BaseFieldPolicy,
}

/// Build a record: `ts`/`ns`, then `msg`, then metadata, then `error`.
#[must_use]
pub fn assemble_record(input: RecordInput<'_>) -> LogRecord {
    let mut fields = Map::new();
    fields.insert(
        FIELD_TS.to_string(),
        Value::String(format_timestamp(input.timestamp)),
    );
    fields.insert(
        FIELD_NS.to_string(),
        Value::String(input.namespace.to_owned()),
    );
    fields.insert(
        FIELD_MSG.to_string(),
        Value::String(input.message.to_owned()),
    );

    let error = normalize_error(input.error.as_ref());
    if let Some(metadata) = input.metadata {
        for (key, value) in metadata {
            // A normalized error replaces metadata `error` and must stay last.
            if error.is_some() && key == FIELD_ERROR {
                continue;
            }
            if input.policy.keeps_metadata_key(&key) {
                fields.insert(key, value);
            }
        }
    }

    if let Some(error) = error {
        fields.insert(FIELD_ERROR.to_string(), error.into_value());
    }

    LogRecord(fields)
}

/// RFC 3339 UTC with millisecond precision (`2026-01-21T14:30:45.123Z`).
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
