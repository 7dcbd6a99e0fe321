//! Canonicalization of raw gap phrases.
//!
//! Raw phrases arrive in two registers (probe-derived wording and
//! structural-check wording); both funnel into the same small set of
//! canonical labels through ordered keyword-containment rules.

use crate::types::report::CanonicalGap;

/// Ordered canonicalization rules. First rule with any matching
/// keyword wins; the ordering is part of the contract.
const CANONICAL_RULES: &[(&[&str], CanonicalGap)] = &[
    (&["access", "permission", "role"], CanonicalGap::RoleAccess),
    (&["error", "fail", "troubleshoot"], CanonicalGap::ErrorHandling),
    (
        &["limit", "constraint", "restriction", "boundary"],
        CanonicalGap::Limitations,
    ),
    (
        &["example", "workflow", "use case"],
        CanonicalGap::Examples,
    ),
];

impl CanonicalGap {
    /// Map a raw gap phrase to its canonical label.
    ///
    /// Total and deterministic: every input maps to some label, the
    /// catch-all included, so this layer has no failure mode.
    pub fn canonicalize(raw: &str) -> CanonicalGap {
        let g = raw.trim().to_lowercase();

        for (keywords, label) in CANONICAL_RULES {
            if keywords.iter().any(|k| g.contains(k)) {
                return *label;
            }
        }

        CanonicalGap::GeneralClarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_mapping() {
        assert_eq!(
            CanonicalGap::canonicalize("missing permission explanation"),
            CanonicalGap::RoleAccess
        );
        assert_eq!(
            CanonicalGap::canonicalize("no error troubleshooting"),
            CanonicalGap::ErrorHandling
        );
        assert_eq!(
            CanonicalGap::canonicalize("explain limitations"),
            CanonicalGap::Limitations
        );
        assert_eq!(
            CanonicalGap::canonicalize("lacks a full workflow"),
            CanonicalGap::Examples
        );
    }

    #[test]
    fn test_rule_order_is_pinned() {
        // Both rule 1 and rule 2 keywords present: rule 1 wins
        assert_eq!(
            CanonicalGap::canonicalize("access errors are not covered"),
            CanonicalGap::RoleAccess
        );
        // Both rule 2 and rule 3 keywords present: rule 2 wins
        assert_eq!(
            CanonicalGap::canonicalize("failure limits are unclear"),
            CanonicalGap::ErrorHandling
        );
        // Both rule 3 and rule 4 keywords present: rule 3 wins
        assert_eq!(
            CanonicalGap::canonicalize("no examples of constraints"),
            CanonicalGap::Limitations
        );
    }

    #[test]
    fn test_catch_all() {
        assert_eq!(
            CanonicalGap::canonicalize("explain prerequisites"),
            CanonicalGap::GeneralClarity
        );
        assert_eq!(CanonicalGap::canonicalize(""), CanonicalGap::GeneralClarity);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(
            CanonicalGap::canonicalize("  MISSING Permission Explanation  "),
            CanonicalGap::RoleAccess
        );
    }

    #[test]
    fn test_deterministic_over_repeated_calls() {
        let inputs = [
            "missing permission explanation",
            "no error troubleshooting",
            "something else entirely",
        ];
        for input in inputs {
            let first = CanonicalGap::canonicalize(input);
            for _ in 0..10 {
                assert_eq!(CanonicalGap::canonicalize(input), first);
            }
        }
    }
}
