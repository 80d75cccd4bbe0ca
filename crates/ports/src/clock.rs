//! Wall clock boundary contract.

use chrono::{DateTime, Utc};

/// Source of record timestamps.
pub trait Clock: Send + Sync {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}
