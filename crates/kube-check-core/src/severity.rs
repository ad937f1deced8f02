//! Severity scale and check results.
//!
//! Severities are ordered `Ok < Warning < Critical < Unknown`, so the
//! aggregate severity of a set of findings is simply their maximum.

use std::fmt;

/// Health level of a check, in increasing order of badness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Everything checked is healthy.
    #[default]
    Ok,
    /// Something needs attention but is not broken.
    Warning,
    /// Something is broken.
    Critical,
    /// The check itself could not run.
    ///
    /// Evaluators never produce this; it is reserved for failures talking
    /// to the control plane.
    Unknown,
}

impl Severity {
    /// Return the worse of two severities.
    #[must_use]
    pub fn worse(self, other: Self) -> Self {
        self.max(other)
    }

    /// Process exit code a monitoring system expects for this severity.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Upper-case label, as used in plugin output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem detected by an evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// How bad this problem is.
    pub severity: Severity,
    /// One human-readable output line.
    pub message: String,
}

impl Finding {
    /// Create a warning-level finding.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create a critical-level finding.
    #[must_use]
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }
}

/// Outcome of one evaluation: an aggregate severity plus one message per
/// finding, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckResult {
    severity: Severity,
    messages: Vec<String>,
}

impl CheckResult {
    /// A healthy result with no messages.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// Build a result with an explicit severity and message list.
    #[must_use]
    pub fn new(severity: Severity, messages: Vec<String>) -> Self {
        Self { severity, messages }
    }

    /// Fold findings into a result.
    ///
    /// The severity is the worst severity among the findings, or
    /// [`Severity::Ok`] when there are none.
    #[must_use]
    pub fn from_findings(findings: impl IntoIterator<Item = Finding>) -> Self {
        findings
            .into_iter()
            .fold(Self::ok(), |mut result, finding| {
                result.severity = result.severity.worse(finding.severity);
                result.messages.push(finding.message);
                result
            })
    }

    /// Aggregate severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Finding messages in detection order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether nothing was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
        assert!(Severity::Critical < Severity::Unknown);
        assert_eq!(Severity::default(), Severity::Ok);
    }

    #[test]
    fn worse_is_commutative_max() {
        let all = [
            Severity::Ok,
            Severity::Warning,
            Severity::Critical,
            Severity::Unknown,
        ];
        for a in all {
            for b in all {
                assert_eq!(a.worse(b), b.worse(a));
                assert_eq!(a.worse(b), a.max(b));
            }
            assert_eq!(a.worse(Severity::Ok), a);
        }
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
        assert_eq!(Severity::Unknown.exit_code(), 3);
    }

    #[test]
    fn severity_displays_upper_case() {
        assert_eq!(Severity::Ok.to_string(), "OK");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn from_findings_takes_maximum_regardless_of_order() {
        let result = CheckResult::from_findings([
            Finding::critical("broken"),
            Finding::warning("flaky"),
        ]);
        assert_eq!(result.severity(), Severity::Critical);
        assert_eq!(result.messages(), ["broken", "flaky"]);
    }

    #[test]
    fn from_no_findings_is_ok() {
        let result = CheckResult::from_findings(Vec::new());
        assert!(result.is_ok());
        assert!(result.messages().is_empty());
        assert_eq!(result, CheckResult::ok());
    }
}
