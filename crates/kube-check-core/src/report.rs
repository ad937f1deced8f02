//! Monitoring plugin output.
//!
//! A [`Report`] is the text to print on stdout plus the severity that picks
//! the process exit code. Building one has no side effects; the binary does
//! the printing and exiting.

use std::fmt;

use crate::severity::{CheckResult, Severity};

/// Plugin output for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    severity: Severity,
    text: String,
}

impl Report {
    /// Map an evaluation result to plugin output.
    ///
    /// A healthy result prints `OK`; anything else prints the finding
    /// messages, one per line.
    #[must_use]
    pub fn from_result(result: &CheckResult) -> Self {
        let text = if result.is_ok() {
            Severity::Ok.as_str().to_string()
        } else {
            result.messages().join("\n")
        };

        Self {
            severity: result.severity(),
            text,
        }
    }

    /// Output for a check that could not reach the control plane.
    ///
    /// The text is labelled `CRITICAL` while the exit code is the `UNKNOWN`
    /// one. Existing monitoring configurations key off either, so both are
    /// kept as they have always been.
    #[must_use]
    pub fn connectivity_failure(detail: impl fmt::Display) -> Self {
        Self {
            severity: Severity::Unknown,
            text: format!("{}: {detail}", Severity::Critical),
        }
    }

    /// Severity that determines the exit code.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Text to print on stdout.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
