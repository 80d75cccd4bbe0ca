//! Console transport emitting one JSON line per record.

use crate::log_sink::{LogSink, StderrLogSink, StdoutLogSink};
use scoped_log_ports::{LogRecord, LogTransport, Severity};
use std::sync::Arc;

const SERIALIZE_FAILED_LINE: &str =
    "{\"ns\":\"scoped-log\",\"msg\":\"log record serialization failed\"}\n";

/// Transport writing records to the process console.
///
/// `debug` and `info` go to the out sink, `warn` and `error` to the err sink,
/// matching how terminals and log collectors split the two streams.
#[derive(Clone)]
pub struct ConsoleTransport {
    out: Arc<dyn LogSink>,
    err: Arc<dyn LogSink>,
}

impl ConsoleTransport {
    /// Transport over explicit sinks.
    #[must_use]
    pub fn new(out: Arc<dyn LogSink>, err: Arc<dyn LogSink>) -> Self {
        Self { out, err }
    }

    /// Transport over the process stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Arc::new(StdoutLogSink), Arc::new(StderrLogSink))
    }

    fn sink_for(&self, channel: Severity) -> &dyn LogSink {
        match channel {
            Severity::Debug | Severity::Info => self.out.as_ref(),
            Severity::Warn | Severity::Error => self.err.as_ref(),
        }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::stdio()
    }
}

impl LogTransport for ConsoleTransport {
    fn emit(&self, channel: Severity, record: LogRecord) {
        self.sink_for(channel).write_line(&encode_line(&record));
    }
}

fn encode_line(record: &LogRecord) -> String {
    serde_json::to_string(record).map_or_else(
        |_| SERIALIZE_FAILED_LINE.to_string(),
        |mut encoded| {
            encoded.push('\n');
            encoded
        },
    )
}
