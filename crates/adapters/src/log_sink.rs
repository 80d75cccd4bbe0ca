//! Process stream sinks used by the console transport.

use std::io::{self, Write};

pub use scoped_log_ports::LogSink;

/// Log sink that writes to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str) {
        // Nowhere left to report a failing stderr.
        let _ = write_line_to(&mut io::stderr().lock(), line);
    }
}

/// Log sink that writes to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogSink;

impl LogSink for StdoutLogSink {
    fn write_line(&self, line: &str) {
        if let Err(error) = write_line_to(&mut io::stdout().lock(), line) {
            eprintln!("log sink write failed: {error}");
        }
    }
}

fn write_line_to(writer: &mut impl Write, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.flush()
}
