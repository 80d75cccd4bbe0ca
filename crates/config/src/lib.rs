//! # scoped-log-config
//!
//! Threshold configuration: env readers, precedence tiers, the execution
//! context that selects them, and client override management.
//! This crate depends on `ports` and `shared` only.

/// Environment variable names and readers.
pub mod env;
/// Client override helpers.
pub mod overrides;
/// Precedence-ordered threshold resolution.
pub mod resolver;

pub use env::{
    BuildTimeEnv, CLIENT_LOG_LEVEL_KEY, ENV_LOG_LEVEL, ENV_PUBLIC_LOG_LEVEL, MapEnv, ProcessEnv,
};
pub use overrides::{clear_client_override, read_client_override, set_client_override};
pub use resolver::{ClientStoreLevelSource, EnvLevelSource, ExecutionContext, LevelResolver};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_deps() -> Vec<String> {
        let cargo_toml = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let mut deps = Vec::new();
        let mut in_deps = false;

        for raw_line in cargo_toml.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                in_deps = line == "[dependencies]";
                continue;
            }
            if in_deps && line.starts_with("scoped-log-") {
                let key = line.split('=').next().unwrap_or("").trim();
                let name = key.split('.').next().unwrap_or("").trim();
                deps.push(name.to_string());
            }
        }

        deps
    }

    #[test]
    fn config_does_not_depend_on_adapters_or_facade() {
        let forbidden = ["scoped-log-adapters", "scoped-log"];
        for dep in workspace_deps() {
            assert!(
                !forbidden.contains(&dep.as_str()),
                "forbidden dependency found: {dep}"
            );
        }
    }

    #[test]
    fn config_crate_compiles() {
        assert!(!config_crate_version().is_empty());
    }
}
