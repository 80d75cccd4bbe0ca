//! # scoped-log-adapters
//!
//! Adapter implementations for ports (console and tracing transports, client
//! stores, the system clock).
//! This crate depends on `ports` and `shared`.

pub mod client_store;
pub mod clock;
pub mod console;
pub mod log_sink;
pub mod tracing_transport;

pub use client_store::{JsonFileClientStore, MemoryClientStore};
pub use clock::SystemClock;
pub use console::ConsoleTransport;
pub use log_sink::{LogSink, StderrLogSink, StdoutLogSink};
pub use tracing_transport::{TRACING_TARGET, TracingTransport};

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
