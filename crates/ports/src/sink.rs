//! Line sink boundary contract.

/// A sink that receives pre-formatted log lines.
pub trait LogSink: Send + Sync {
    /// Write a line to the sink. Failures stay inside the sink.
    fn write_line(&self, line: &str);
}
