//! Import warning system
//!
//! Non-fatal findings accumulated while converting a collection: skipped
//! leaves, advisory fallbacks. Fatal conditions live in
//! [`crate::error::ImportError`] instead.

use serde::{Deserialize, Serialize};

/// Warning severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// Informational - an item was skipped by policy
    Info,
    /// Warning - something was converted with a fallback
    Warning,
}

impl std::fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A non-fatal import finding, located by the item's flattened name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportWarning {
    /// Flattened name of the item (e.g. "Auth/V2/Login")
    pub path: String,
    /// Human-readable description of the finding
    pub message: String,
    /// Severity level
    pub severity: WarningSeverity,
}

impl ImportWarning {
    /// Create an info-level warning.
    pub fn info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: WarningSeverity::Info,
        }
    }

    /// Create a warning-level warning.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: WarningSeverity::Warning,
        }
    }
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.message)
    }
}

/// Aggregate counts over a warning list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WarningStats {
    /// Count of informational findings
    pub info_count: usize,
    /// Count of warning-level findings
    pub warning_count: usize,
}

impl WarningStats {
    /// Calculate stats from a list of warnings.
    #[must_use]
    pub fn from_warnings(warnings: &[ImportWarning]) -> Self {
        let mut stats = Self::default();
        for w in warnings {
            match w.severity {
                WarningSeverity::Info => stats.info_count += 1,
                WarningSeverity::Warning => stats.warning_count += 1,
            }
        }
        stats
    }

    /// Total count of all findings.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info_count + self.warning_count
    }
}
