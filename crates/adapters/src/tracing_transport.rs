//! Transport forwarding records into `tracing`.

use scoped_log_ports::{LogRecord, LogTransport, Severity};

/// Target used for every forwarded event.
pub const TRACING_TARGET: &str = "scoped_log";

/// Transport re-emitting records as `tracing` events on the matching level.
///
/// The message becomes the event message, the namespace a `ns` field and the
/// full record a `record` field holding its JSON encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTransport;

impl LogTransport for TracingTransport {
    fn emit(&self, channel: Severity, record: LogRecord) {
        let ns = record.ns().unwrap_or_default();
        let msg = record.msg().unwrap_or_default();
        let payload = serde_json::to_string(&record).unwrap_or_default();
        match channel {
            Severity::Debug => {
                tracing::debug!(target: TRACING_TARGET, ns, record = %payload, "{msg}");
            },
            Severity::Info => {
                tracing::info!(target: TRACING_TARGET, ns, record = %payload, "{msg}");
            },
            Severity::Warn => {
                tracing::warn!(target: TRACING_TARGET, ns, record = %payload, "{msg}");
            },
            Severity::Error => {
                tracing::error!(target: TRACING_TARGET, ns, record = %payload, "{msg}");
            },
        }
    }
}
