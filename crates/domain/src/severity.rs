//! Severity registry: the closed, ordered set of log levels.

use scoped_log_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered by increasing importance.
///
/// The derived `Ord` follows declaration order, which matches [`Severity::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Verbose diagnostics.
    Debug,
    /// Routine operational events.
    Info,
    /// Something unexpected that the caller recovered from.
    Warn,
    /// A failed operation.
    Error,
}

impl Severity {
    /// All severities in rank order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Threshold used when nothing valid is configured.
    pub const DEFAULT_THRESHOLD: Self = Self::Info;

    /// Numeric rank (`debug` = 0 ... `error` = 3).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns true when `value` is exactly one of the canonical names.
    #[must_use]
    pub fn is_severity(value: &str) -> bool {
        Self::ALL.iter().any(|severity| severity.as_str() == value)
    }

    /// Returns true when a call at `self` passes a `threshold`.
    #[must_use]
    pub const fn is_at_least(self, threshold: Self) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Parse a severity name, ignoring ASCII case.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, SeverityParseError> {
        let raw = input.as_ref();
        let normalized = raw.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == normalized)
            .ok_or_else(|| SeverityParseError {
                input: raw.to_owned().into_boxed_str(),
            })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

/// Input did not name a known severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityParseError {
    input: Box<str>,
}

impl SeverityParseError {
    /// The rejected input, as supplied.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for SeverityParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unsupported severity `{}` (expected debug, info, warn or error)",
            self.input
        )
    }
}

impl std::error::Error for SeverityParseError {}

impl From<SeverityParseError> for ErrorEnvelope {
    fn from(error: SeverityParseError) -> Self {
        let message = error.to_string();
        Self::expected(ErrorCode::new("domain", "invalid_severity"), message)
            .with_metadata("value", error.input.into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ranks_increase_with_severity() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|severity| severity.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn parse_is_case_insensitive() -> Result<(), SeverityParseError> {
        assert_eq!(Severity::parse("DEBUG")?, Severity::Debug);
        assert_eq!(Severity::parse("Warn")?, Severity::Warn);
        assert_eq!("info".parse::<Severity>()?, Severity::Info);
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let error = Severity::parse("verbose").err();
        assert_eq!(error.as_ref().map(SeverityParseError::input), Some("verbose"));
        assert!(Severity::parse("").is_err());
        assert!(Severity::parse("warning").is_err());
        assert!(Severity::parse(" error\n").is_err());
        assert!(Severity::parse("info ").is_err());
    }

    #[test]
    fn membership_uses_canonical_names() {
        assert!(Severity::is_severity("info"));
        assert!(!Severity::is_severity("INFO"));
        assert!(!Severity::is_severity("trace"));
    }

    #[test]
    fn parse_error_maps_to_envelope() {
        let envelope = ErrorEnvelope::from(SeverityParseError {
            input: "loud".into(),
        });
        assert_eq!(envelope.code, ErrorCode::new("domain", "invalid_severity"));
        assert_eq!(
            envelope.metadata.get("value").map(String::as_str),
            Some("loud")
        );
    }

    #[test]
    fn serde_uses_lowercase_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Severity::Warn)?, "\"warn\"");
        let parsed: Severity = serde_json::from_str("\"debug\"")?;
        assert_eq!(parsed, Severity::Debug);
        Ok(())
    }

    fn any_severity() -> impl Strategy<Value = Severity> {
        prop::sample::select(Severity::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn ordering_matches_rank(left in any_severity(), right in any_severity()) {
            prop_assert_eq!(left.cmp(&right), left.rank().cmp(&right.rank()));
            prop_assert_eq!(left.is_at_least(right), left >= right);
        }

        #[test]
        fn display_round_trips_through_parse(severity in any_severity()) {
            let parsed = Severity::parse(severity.to_string().to_uppercase())
                .map_err(|_| TestCaseError::fail("parse failed"))?;
            prop_assert_eq!(parsed, severity);
        }
    }
}
