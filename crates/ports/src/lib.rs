//! # scoped-log-ports
//!
//! Port traits for the scoped-log hexagonal architecture.
//!
//! This crate defines the interfaces between the logging core and the outside
//! world: where records go, where the threshold comes from, and what the
//! client-local store and environment look like. It depends only on `domain`
//! and `shared`.

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod clock;
pub mod env;
pub mod sink;
pub mod store;
pub mod threshold;
pub mod transport;

pub use clock::*;
pub use env::*;
pub use sink::*;
pub use store::*;
pub use threshold::*;
pub use transport::*;

// Re-export selected domain types used in port signatures, so adapter crates
// can implement ports without directly depending on `scoped-log-domain`.
pub use scoped_log_domain::{LogFields, LogRecord, Severity};

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_log_domain::domain_crate_version;
    use scoped_log_shared::shared_crate_version;

    fn workspace_deps() -> Vec<String> {
        let cargo_toml = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let mut deps = Vec::new();
        let mut in_deps = false;
        let mut in_dev_deps = false;

        for raw_line in cargo_toml.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                in_deps = line == "[dependencies]";
                in_dev_deps = line == "[dev-dependencies]";
                continue;
            }
            if !(in_deps || in_dev_deps) {
                continue;
            }
            if line.starts_with("scoped-log-") {
                let key = line.split('=').next().unwrap_or("").trim();
                let name = key.split('.').next().unwrap_or("").trim();
                deps.push(name.to_string());
            }
        }

        deps
    }

    #[test]
    fn ports_depends_only_on_domain_and_shared() {
        let deps = workspace_deps();
        let allowed = ["scoped-log-domain", "scoped-log-shared"];

        for dep in &deps {
            assert!(
                allowed.contains(&dep.as_str()),
                "unexpected dependency found: {dep}"
            );
        }

        for expected in allowed {
            assert!(
                deps.iter().any(|dep| dep == expected),
                "missing dependency: {expected}"
            );
        }
    }

    #[test]
    fn ports_crate_compiles() {
        let version = ports_crate_version();
        assert!(!version.is_empty());
        assert!(!domain_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }

    #[test]
    fn fixed_threshold_defaults_to_info() {
        let fixed = FixedThreshold::default();
        assert_eq!(fixed.threshold(), Severity::Info);
        assert_eq!(fixed.read_level(), Some(Severity::Info));
    }

    #[test]
    fn noop_transport_accepts_records() -> Result<(), serde_json::Error> {
        let transport: &dyn LogTransport = &NoopTransport;
        let record: LogRecord = serde_json::from_str(r#"{"ts":"t","ns":"n","msg":"m"}"#)?;
        transport.emit(Severity::Error, record);
        Ok(())
    }
}
