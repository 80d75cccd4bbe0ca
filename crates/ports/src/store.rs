//! Client-local persisted key/value store boundary contract.
//!
//! Mirrors the small surface of a browser-local store: string keys mapped to
//! string values, persisted outside the process, editable by the user at any
//! time.

use scoped_log_shared::{ErrorCode, ErrorEnvelope};
use std::io;

/// Failures reported by a [`ClientStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store cannot be reached at all.
    #[error("client store unavailable: {reason}")]
    Unavailable {
        /// Why the store is unavailable.
        reason: Box<str>,
    },
    /// The store refused access.
    #[error("client store access denied: {reason}")]
    AccessDenied {
        /// Backend-specific detail.
        reason: Box<str>,
    },
    /// Reading or writing the backing medium failed.
    #[error("client store i/o failed: {reason}")]
    Io {
        /// Backend-specific detail.
        reason: Box<str>,
    },
    /// The persisted contents could not be decoded or encoded.
    #[error("client store contents are malformed: {reason}")]
    Malformed {
        /// Decoder detail.
        reason: Box<str>,
    },
}

impl StoreError {
    /// Classify an I/O failure.
    #[must_use]
    pub fn from_io(error: &io::Error) -> Self {
        let reason = error.to_string().into_boxed_str();
        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDenied { reason },
            io::ErrorKind::InvalidData => Self::Malformed { reason },
            _ => Self::Io { reason },
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unavailable { .. } => ErrorCode::new("store", "unavailable"),
            Self::AccessDenied { .. } => ErrorCode::new("store", "access_denied"),
            Self::Io { .. } => ErrorCode::new("store", "io"),
            Self::Malformed { .. } => ErrorCode::new("store", "malformed"),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        Self::from_io(&error)
    }
}

impl From<StoreError> for ErrorEnvelope {
    fn from(error: StoreError) -> Self {
        Self::unexpected(error.error_code(), error.to_string())
    }
}

/// Persisted client-side key/value store.
pub trait ClientStore: Send + Sync {
    /// Read `key`. `Ok(None)` when the key is not set.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}
