//! # scoped-log-domain
//!
//! The logging core: everything that decides *what* a record looks like.
//!
//! - **Severity** - the ordered level registry (`debug` < `info` < `warn` < `error`)
//! - **Error values** - normalization of arbitrary error inputs into `{name, message, stack}`
//! - **Records** - flat `{ts, ns, msg, ...metadata, error?}` assembly
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure logic with no I/O; the timestamp is an input

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use scoped_log_shared::shared_crate_version;

pub mod error_value;
pub mod record;
pub mod severity;

pub use error_value::{
    ErrorShape, ErrorValue, GENERIC_ERROR_NAME, NormalizedError, normalize_error,
};
pub use record::{
    BaseFieldPolicy, FIELD_ERROR, FIELD_MSG, FIELD_NS, FIELD_TS, LogFields, LogRecord, RecordInput,
    assemble_record, format_timestamp,
};
pub use severity::{Severity, SeverityParseError};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
