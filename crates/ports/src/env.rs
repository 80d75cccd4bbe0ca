//! Environment access boundary contract.

/// Read-only view of environment variables.
pub trait EnvReader: Send + Sync {
    /// Value of `name`, or `None` when unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}
