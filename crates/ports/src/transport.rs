//! Output transport boundary contract.

use scoped_log_domain::{LogRecord, Severity};

/// Boundary contract for the component that writes records somewhere.
///
/// A transport has one channel per severity; the logger picks the channel
/// matching the call. Implementations must not panic and have no way to
/// report failure back to the caller.
pub trait LogTransport: Send + Sync {
    /// Write one record on the given channel.
    fn emit(&self, channel: Severity, record: LogRecord);
}

/// Transport that discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTransport;

impl LogTransport for NoopTransport {
    fn emit(&self, _channel: Severity, _record: LogRecord) {}
}
