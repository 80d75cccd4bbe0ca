//! Namespaced loggers and the factory that creates them.

use scoped_log_adapters::{ConsoleTransport, SystemClock};
use scoped_log_config::{ExecutionContext, LevelResolver};
use scoped_log_domain::{BaseFieldPolicy, ErrorValue, LogFields, RecordInput, assemble_record};
use scoped_log_ports::{Clock, LogTransport, Severity, ThresholdProvider};
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A logger bound to one namespace.
///
/// Cloning is cheap: the namespace and every collaborator are shared.
#[derive(Clone)]
pub struct Logger {
    namespace: Arc<str>,
    threshold: Arc<dyn ThresholdProvider>,
    transport: Arc<dyn LogTransport>,
    clock: Arc<dyn Clock>,
    policy: BaseFieldPolicy,
}

impl Logger {
    /// The namespace stamped on every record as `ns`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether a call at `severity` would emit right now.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.is_at_least(self.threshold.threshold())
    }

    /// Log at `severity`.
    ///
    /// Returns before reading the clock when the current threshold filters
    /// the call out.
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        metadata: Option<LogFields>,
        error: Option<ErrorValue<'_>>,
    ) {
        if !self.enabled(severity) {
            return;
        }
        let record = assemble_record(RecordInput {
            timestamp: self.clock.now(),
            namespace: &self.namespace,
            message,
            metadata,
            error,
            policy: self.policy,
        });
        self.transport.emit(severity, record);
    }

    /// Log at `debug`.
    pub fn debug(&self, message: &str, metadata: Option<LogFields>, error: Option<ErrorValue<'_>>) {
        self.log(Severity::Debug, message, metadata, error);
    }

    /// Log at `info`.
    pub fn info(&self, message: &str, metadata: Option<LogFields>, error: Option<ErrorValue<'_>>) {
        self.log(Severity::Info, message, metadata, error);
    }

    /// Log at `warn`.
    pub fn warn(&self, message: &str, metadata: Option<LogFields>, error: Option<ErrorValue<'_>>) {
        self.log(Severity::Warn, message, metadata, error);
    }

    /// Log at `error`.
    pub fn error(&self, message: &str, metadata: Option<LogFields>, error: Option<ErrorValue<'_>>) {
        self.log(Severity::Error, message, metadata, error);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Creates loggers sharing one threshold provider, transport and clock.
#[derive(Clone)]
pub struct LoggerFactory {
    threshold: Arc<dyn ThresholdProvider>,
    transport: Arc<dyn LogTransport>,
    clock: Arc<dyn Clock>,
    policy: BaseFieldPolicy,
}

impl LoggerFactory {
    /// Factory over explicit collaborators, reading the system clock.
    #[must_use]
    pub fn new(threshold: Arc<dyn ThresholdProvider>, transport: Arc<dyn LogTransport>) -> Self {
        Self {
            threshold,
            transport,
            clock: Arc::new(SystemClock),
            policy: BaseFieldPolicy::default(),
        }
    }

    /// Factory resolving thresholds the standard way for `context`.
    #[must_use]
    pub fn from_context(context: &ExecutionContext, transport: Arc<dyn LogTransport>) -> Self {
        Self::new(Arc::new(LevelResolver::for_context(context)), transport)
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the base field collision policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: BaseFieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create a logger for `namespace`.
    #[must_use]
    pub fn create_logger(&self, namespace: impl Into<Arc<str>>) -> Logger {
        Logger {
            namespace: namespace.into(),
            threshold: Arc::clone(&self.threshold),
            transport: Arc::clone(&self.transport),
            clock: Arc::clone(&self.clock),
            policy: self.policy,
        }
    }
}

impl Default for LoggerFactory {
    /// Server context writing JSON lines to the console.
    fn default() -> Self {
        Self::from_context(&ExecutionContext::server(), Arc::new(ConsoleTransport::stdio()))
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoggerFactory")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

static DEFAULT_FACTORY: OnceLock<LoggerFactory> = OnceLock::new();

/// Install the process default factory.
///
/// Only the first install wins; a later call, or a call after
/// [`create_logger`] already initialized the default, hands `factory` back.
pub fn install_default_factory(factory: LoggerFactory) -> Result<(), LoggerFactory> {
    DEFAULT_FACTORY.set(factory)
}

/// The process default factory, initialized to [`LoggerFactory::default`]
/// when nothing was installed.
pub fn default_factory() -> &'static LoggerFactory {
    DEFAULT_FACTORY.get_or_init(LoggerFactory::default)
}

/// Create a logger for `namespace` from the process default factory.
#[must_use]
pub fn create_logger(namespace: &str) -> Logger {
    default_factory().create_logger(namespace)
}

/// Build metadata from key/value pairs.
pub fn fields<I, K, V>(pairs: I) -> LogFields
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
