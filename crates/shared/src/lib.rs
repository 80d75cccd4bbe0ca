//! # scoped-log-shared
//!
//! Shared error handling for the scoped-log workspace.
//!
//! This crate provides the error envelope used by every other crate when an
//! operation outside the logging hot path (parsing, client store access,
//! override management) needs to report a failure.
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Serde-compatible** - All public types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;

pub use errors::{ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};

/// Shared result type used across the workspace.
pub type Result<T, E = ErrorEnvelope> = std::result::Result<T, E>;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
