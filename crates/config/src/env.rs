//! Environment variable names and env readers.
//!
//! Three readers cover the places a threshold can come from:
//! - `ProcessEnv`: the live process environment (server context)
//! - `BuildTimeEnv`: values captured when this crate was compiled (client context)
//! - `MapEnv`: an explicit map (tests and fixtures)

use scoped_log_ports::EnvReader;
use std::collections::BTreeMap;

/// Env var: server-context threshold.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Env var: public client-context threshold, baked in at build time.
pub const ENV_PUBLIC_LOG_LEVEL: &str = "NEXT_PUBLIC_LOG_LEVEL";
/// Client store key holding the user override.
pub const CLIENT_LOG_LEVEL_KEY: &str = "LOG_LEVEL";

const BUILD_PUBLIC_LOG_LEVEL: Option<&str> = option_env!("NEXT_PUBLIC_LOG_LEVEL");

/// Reads the live process environment on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Public variables captured at compile time.
///
/// Only `NEXT_PUBLIC_LOG_LEVEL` is captured; every other name reads as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildTimeEnv;

impl BuildTimeEnv {
    /// The captured `NEXT_PUBLIC_LOG_LEVEL`, if it was set during the build.
    #[must_use]
    pub const fn public_log_level() -> Option<&'static str> {
        BUILD_PUBLIC_LOG_LEVEL
    }
}

impl EnvReader for BuildTimeEnv {
    fn var(&self, name: &str) -> Option<String> {
        if name == ENV_PUBLIC_LOG_LEVEL {
            BUILD_PUBLIC_LOG_LEVEL.map(str::to_owned)
        } else {
            None
        }
    }
}

/// Env reader backed by an explicit key/value map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    /// Build from a key/value map (useful for tests and fixtures).
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Add or replace one variable.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvReader for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
