//! Gap report types - canonical gaps, occurrences, and report rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::article::{Category, Severity};

/// A canonical documentation-gap category.
///
/// Every raw gap phrase maps to exactly one of these via the ordered
/// keyword rules in [`crate::gaps::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalGap {
    /// Missing role or permission guidance
    RoleAccess,
    /// Missing error handling or failure scenarios
    ErrorHandling,
    /// Missing limitations or constraints
    Limitations,
    /// Missing end-to-end usage examples
    Examples,
    /// Catch-all for anything the keyword rules do not place
    GeneralClarity,
}

impl CanonicalGap {
    /// Section-level label used in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RoleAccess => "Missing Role & Access Requirements",
            Self::ErrorHandling => "Missing Error Handling & Failure Scenarios",
            Self::Limitations => "Missing Limitations & Constraints",
            Self::Examples => "Missing End-to-End Usage Examples",
            Self::GeneralClarity => "General Documentation Clarity Gaps",
        }
    }

    /// Suggested title for a remediation article.
    pub fn suggested_title(&self) -> String {
        let topic = self.label().trim_start_matches("Missing ");
        format!("Guide: {}", topic)
    }
}

impl fmt::Display for CanonicalGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (article, raw gap) pair after canonicalization.
///
/// Ephemeral: computed during aggregation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapOccurrence {
    /// Category of the contributing article
    pub category: Category,

    /// Severity of the contributing article
    pub severity: Severity,
}

/// Report-level priority for a canonical gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the aggregated gap report.
///
/// The report is a disposable artifact, fully regenerated on every
/// aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReportRow {
    /// Sequential id ("GAP-001", "GAP-002", ...)
    pub gap_id: String,

    /// Dominant category among contributing articles
    pub category: Category,

    /// Canonical gap description
    pub description: String,

    /// Derived priority tier
    pub priority: Priority,

    /// Suggested remediation article title
    pub suggested_title: String,

    /// Impact rationale (never empty, length-bounded)
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_title_strips_missing_prefix() {
        assert_eq!(
            CanonicalGap::RoleAccess.suggested_title(),
            "Guide: Role & Access Requirements"
        );
        assert_eq!(
            CanonicalGap::Examples.suggested_title(),
            "Guide: End-to-End Usage Examples"
        );
        // Catch-all has no "Missing " prefix to strip
        assert_eq!(
            CanonicalGap::GeneralClarity.suggested_title(),
            "Guide: General Documentation Clarity Gaps"
        );
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }
}
