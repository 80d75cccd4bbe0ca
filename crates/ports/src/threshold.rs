//! Threshold boundary contracts.

use scoped_log_domain::Severity;

/// Supplies the minimum severity for the current call.
///
/// Called once per log call; implementations must re-read their sources
/// every time rather than caching.
pub trait ThresholdProvider: Send + Sync {
    /// Current threshold.
    fn threshold(&self) -> Severity;
}

/// One precedence tier of threshold configuration.
pub trait LevelSource: Send + Sync {
    /// Returns the configured severity, or `None` when nothing valid is set.
    fn read_level(&self) -> Option<Severity>;
}

/// Threshold that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedThreshold(pub Severity);

impl Default for FixedThreshold {
    fn default() -> Self {
        Self(Severity::DEFAULT_THRESHOLD)
    }
}

impl ThresholdProvider for FixedThreshold {
    fn threshold(&self) -> Severity {
        self.0
    }
}

impl LevelSource for FixedThreshold {
    fn read_level(&self) -> Option<Severity> {
        Some(self.0)
    }
}
