//! # scoped-log
//!
//! Namespaced, severity-filtered structured logging.
//!
//! ```no_run
//! use scoped_log::{create_logger, fields};
//!
//! let logger = create_logger("Stream");
//! logger.info("Thread ID set", Some(fields([("threadId", "abc123")])), None);
//! ```
//!
//! This crate wires `config` and `adapters` into the public API and
//! re-exports what callers need to supply metadata, errors and collaborators.

pub mod logger;

pub use logger::{
    Logger, LoggerFactory, create_logger, default_factory, fields, install_default_factory,
};

pub use scoped_log_adapters::{
    ConsoleTransport, JsonFileClientStore, LogSink, MemoryClientStore, StderrLogSink,
    StdoutLogSink, SystemClock, TracingTransport,
};
pub use scoped_log_config::{
    BuildTimeEnv, ExecutionContext, LevelResolver, MapEnv, ProcessEnv, clear_client_override,
    read_client_override, set_client_override,
};
pub use scoped_log_domain::{BaseFieldPolicy, ErrorValue, LogFields, LogRecord, Severity};
pub use scoped_log_ports::{
    ClientStore, Clock, EnvReader, FixedThreshold, LogTransport, NoopTransport, StoreError,
    ThresholdProvider,
};
pub use scoped_log_shared::{ErrorEnvelope, Result};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
