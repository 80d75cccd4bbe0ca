//! Threshold resolution by precedence.
//!
//! A [`LevelResolver`] walks its [`LevelSource`] tiers in order on every call
//! and returns the first valid severity, falling back to `info`. Nothing is
//! cached, so a user flipping the client override is observed by the next log
//! call. Faults never escape: invalid values and unreadable stores both count
//! as "not configured here".

use crate::env::{
    BuildTimeEnv, CLIENT_LOG_LEVEL_KEY, ENV_LOG_LEVEL, ENV_PUBLIC_LOG_LEVEL, ProcessEnv,
};
use scoped_log_ports::{ClientStore, EnvReader, LevelSource, Severity, ThresholdProvider};
use std::fmt;
use std::sync::Arc;

/// Threshold tier backed by one environment variable.
#[derive(Clone)]
pub struct EnvLevelSource {
    env: Arc<dyn EnvReader>,
    var: &'static str,
}

impl EnvLevelSource {
    /// Read `var` from `env`.
    #[must_use]
    pub fn new(env: Arc<dyn EnvReader>, var: &'static str) -> Self {
        Self { env, var }
    }

    /// The variable this tier reads.
    #[must_use]
    pub const fn var(&self) -> &'static str {
        self.var
    }
}

impl LevelSource for EnvLevelSource {
    fn read_level(&self) -> Option<Severity> {
        let raw = self.env.var(self.var)?;
        match Severity::parse(&raw) {
            Ok(severity) => Some(severity),
            Err(error) => {
                tracing::debug!(
                    var = self.var,
                    value = error.input(),
                    "ignoring unsupported log level"
                );
                None
            },
        }
    }
}

/// Threshold tier backed by a key in the client-local store.
#[derive(Clone)]
pub struct ClientStoreLevelSource {
    store: Arc<dyn ClientStore>,
    key: Box<str>,
}

impl ClientStoreLevelSource {
    /// Read the standard `LOG_LEVEL` key.
    #[must_use]
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self::with_key(store, CLIENT_LOG_LEVEL_KEY)
    }

    /// Read a custom key.
    #[must_use]
    pub fn with_key(store: Arc<dyn ClientStore>, key: impl Into<Box<str>>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl LevelSource for ClientStoreLevelSource {
    fn read_level(&self) -> Option<Severity> {
        let raw = match self.store.get_item(&self.key) {
            Ok(value) => value?,
            Err(error) => {
                tracing::debug!(key = %self.key, %error, "client log level override unavailable");
                return None;
            },
        };
        match Severity::parse(&raw) {
            Ok(severity) => Some(severity),
            Err(error) => {
                tracing::debug!(
                    key = %self.key,
                    value = error.input(),
                    "ignoring unsupported client log level"
                );
                None
            },
        }
    }
}

/// Where the logger runs, and therefore which sources apply.
#[derive(Clone)]
pub enum ExecutionContext {
    /// No client-local store; the server env decides.
    Server {
        /// Environment providing `LOG_LEVEL`.
        env: Arc<dyn EnvReader>,
    },
    /// A client with a persisted local store.
    Client {
        /// Store holding the user override.
        store: Arc<dyn ClientStore>,
        /// Environment providing `NEXT_PUBLIC_LOG_LEVEL`.
        env: Arc<dyn EnvReader>,
    },
}

impl ExecutionContext {
    /// Server context reading the live process environment.
    #[must_use]
    pub fn server() -> Self {
        Self::Server {
            env: Arc::new(ProcessEnv),
        }
    }

    /// Client context over `store`, with the build-time public env.
    #[must_use]
    pub fn client(store: Arc<dyn ClientStore>) -> Self {
        Self::Client {
            store,
            env: Arc::new(BuildTimeEnv),
        }
    }

    /// Returns true for the client context.
    #[must_use]
    pub const fn is_client(&self) -> bool {
        matches!(self, Self::Client { .. })
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server { .. } => formatter.write_str("ExecutionContext::Server"),
            Self::Client { .. } => formatter.write_str("ExecutionContext::Client"),
        }
    }
}

/// Precedence-ordered threshold resolver.
#[derive(Clone)]
pub struct LevelResolver {
    sources: Vec<Arc<dyn LevelSource>>,
    default: Severity,
}

impl LevelResolver {
    /// Resolver with no sources that always yields `default`.
    #[must_use]
    pub const fn new(default: Severity) -> Self {
        Self {
            sources: Vec::new(),
            default,
        }
    }

    /// Append a lower-precedence tier.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn LevelSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Standard tiers for a context.
    ///
    /// Client: store `LOG_LEVEL`, then `NEXT_PUBLIC_LOG_LEVEL`. Server: `LOG_LEVEL`.
    /// Both fall back to `info`.
    #[must_use]
    pub fn for_context(context: &ExecutionContext) -> Self {
        let resolver = Self::new(Severity::DEFAULT_THRESHOLD);
        match context {
            ExecutionContext::Server { env } => resolver.with_source(Arc::new(
                EnvLevelSource::new(Arc::clone(env), ENV_LOG_LEVEL),
            )),
            ExecutionContext::Client { store, env } => resolver
                .with_source(Arc::new(ClientStoreLevelSource::new(Arc::clone(store))))
                .with_source(Arc::new(EnvLevelSource::new(
                    Arc::clone(env),
                    ENV_PUBLIC_LOG_LEVEL,
                ))),
        }
    }

    /// Number of configured tiers.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Resolve the current threshold.
    #[must_use]
    pub fn resolve(&self) -> Severity {
        self.sources
            .iter()
            .find_map(|source| source.read_level())
            .unwrap_or(self.default)
    }
}

impl ThresholdProvider for LevelResolver {
    fn threshold(&self) -> Severity {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use scoped_log_adapters::MemoryClientStore;
    use scoped_log_ports::FixedThreshold;
    use scoped_log_testkit::FailingClientStore;

    fn env(pairs: &[(&str, &str)]) -> Arc<dyn EnvReader> {
        Arc::new(pairs.iter().copied().collect::<MapEnv>())
    }

    fn store_with(key: &str, value: &str) -> Arc<MemoryClientStore> {
        Arc::new([(key, value)].into_iter().collect())
    }

    #[test]
    fn env_source_parses_case_insensitively() {
        let source = EnvLevelSource::new(env(&[(ENV_LOG_LEVEL, "WARN")]), ENV_LOG_LEVEL);
        assert_eq!(source.read_level(), Some(Severity::Warn));
        assert_eq!(source.var(), ENV_LOG_LEVEL);
    }

    #[test]
    fn env_source_ignores_invalid_values() {
        let source = EnvLevelSource::new(env(&[(ENV_LOG_LEVEL, "verbose")]), ENV_LOG_LEVEL);
        assert_eq!(source.read_level(), None);
    }

    #[test]
    fn padded_env_values_fall_back_to_info() {
        let context = ExecutionContext::Server {
            env: env(&[(ENV_LOG_LEVEL, "  error\n")]),
        };
        assert_eq!(LevelResolver::for_context(&context).resolve(), Severity::Info);
    }

    #[test]
    fn padded_override_falls_through_to_public_env() {
        let store = store_with(CLIENT_LOG_LEVEL_KEY, " debug");
        let context = ExecutionContext::Client {
            store,
            env: env(&[(ENV_PUBLIC_LOG_LEVEL, "warn")]),
        };
        assert_eq!(LevelResolver::for_context(&context).resolve(), Severity::Warn);
    }

    #[test]
    fn store_source_reads_override() {
        let store = store_with(CLIENT_LOG_LEVEL_KEY, "Debug");
        let source = ClientStoreLevelSource::new(store);
        assert_eq!(source.read_level(), Some(Severity::Debug));
    }

    #[test]
    fn store_source_swallows_store_failures() {
        let source = ClientStoreLevelSource::new(Arc::new(FailingClientStore::default()));
        assert_eq!(source.read_level(), None);
    }

    #[test]
    fn store_source_honors_custom_key() {
        let store = store_with("app.logLevel", "error");
        let source = ClientStoreLevelSource::with_key(store, "app.logLevel");
        assert_eq!(source.read_level(), Some(Severity::Error));
    }

    #[test]
    fn server_context_reads_log_level() {
        let context = ExecutionContext::Server {
            env: env(&[(ENV_LOG_LEVEL, "error"), (ENV_PUBLIC_LOG_LEVEL, "debug")]),
        };
        let resolver = LevelResolver::for_context(&context);
        assert_eq!(resolver.source_count(), 1);
        assert_eq!(resolver.resolve(), Severity::Error);
    }

    #[test]
    fn earlier_tiers_win() {
        let resolver = LevelResolver::new(Severity::Info)
            .with_source(Arc::new(EnvLevelSource::new(env(&[]), ENV_LOG_LEVEL)))
            .with_source(Arc::new(FixedThreshold(Severity::Warn)))
            .with_source(Arc::new(FixedThreshold(Severity::Debug)));
        assert_eq!(resolver.source_count(), 3);
        assert_eq!(resolver.resolve(), Severity::Warn);
    }

    #[test]
    fn empty_resolver_uses_default() {
        assert_eq!(LevelResolver::new(Severity::Warn).threshold(), Severity::Warn);
    }

    #[test]
    fn context_debug_names_the_variant() {
        let context = ExecutionContext::client(Arc::new(MemoryClientStore::default()));
        assert!(context.is_client());
        assert_eq!(format!("{context:?}"), "ExecutionContext::Client");
        assert!(!ExecutionContext::server().is_client());
    }
}
