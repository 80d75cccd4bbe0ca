//! In-memory adapter implementations for port contracts.
//!
//! These implementations are intended for:
//! - Unit/integration tests
//! - Deterministic contract tests for the ports layer
//! - Capturing console output without touching the process streams

use chrono::{DateTime, TimeZone, Utc};
use scoped_log_ports::{ClientStore, Clock, LogRecord, LogSink, LogTransport, Severity, StoreError};
use serde_json::{Map, Value};
use std::sync::{Mutex, PoisonError};

/// Client store whose every operation fails.
#[derive(Debug, Clone)]
pub struct FailingClientStore {
    error: StoreError,
}

impl FailingClientStore {
    /// Fail every call with `error`.
    pub const fn new(error: StoreError) -> Self {
        Self { error }
    }
}

impl Default for FailingClientStore {
    fn default() -> Self {
        Self::new(StoreError::Unavailable {
            reason: "client storage disabled".into(),
        })
    }
}

impl ClientStore for FailingClientStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(self.error.clone())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(self.error.clone())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}

/// Transport that keeps every record it receives.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    records: Mutex<Vec<(Severity, LogRecord)>>,
}

impl RecordingTransport {
    /// Everything emitted so far, in order.
    pub fn emitted(&self) -> Vec<(Severity, LogRecord)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain everything emitted so far.
    pub fn take(&self) -> Vec<(Severity, LogRecord)> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Records emitted on one channel.
    pub fn on_channel(&self, channel: Severity) -> Vec<LogRecord> {
        self.emitted()
            .into_iter()
            .filter(|(emitted, _)| *emitted == channel)
            .map(|(_, record)| record)
            .collect()
    }

    /// Number of records emitted so far.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogTransport for RecordingTransport {
    fn emit(&self, channel: Severity, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((channel, record));
    }
}

/// Line sink that keeps every line it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Drain the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// `2026-01-21T14:30:45.123Z`.
    pub fn reference() -> Self {
        let base = Utc
            .with_ymd_and_hms(2026, 1, 21, 14, 30, 45)
            .single()
            .expect("valid reference time");
        Self(base + chrono::Duration::milliseconds(123))
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::reference()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Copy of a record's fields without `ts`, for comparing calls made at
/// different instants.
pub fn without_timestamp(record: &LogRecord) -> Map<String, Value> {
    let mut fields = record.fields().clone();
    fields.remove("ts");
    fields
}
