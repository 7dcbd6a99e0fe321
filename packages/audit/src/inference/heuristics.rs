//! Deterministic keyword heuristics for category, content type,
//! topics, and structural gap checks.
//!
//! Rule order is significant everywhere in this module: the first
//! matching rule wins, and tests pin the ordering.

use crate::types::article::{Category, ContentType};

/// Controlled topic vocabulary offered to the classifier.
pub const TOPIC_VOCABULARY: &[&str] = &[
    "onboarding",
    "roles and permissions",
    "collaboration",
    "projects",
    "integrations",
    "api",
    "troubleshooting",
    "billing",
    "security",
];

/// Fine-grained keywords emitted verbatim as topics when present.
pub const TOPIC_KEYWORDS: &[&str] = &[
    "manager",
    "collaborator",
    "client",
    "project",
    "organization",
    "permission",
    "role",
    "api",
    "token",
    "integration",
    "jira",
    "webhook",
    "review",
    "task",
];

/// Topic used when nothing else is detected, so the field is never empty.
pub const DEFAULT_TOPIC: &str = "onboarding";

/// QA probes used for gap detection.
pub const GAP_PROBES: &[&str] = &[
    "Does this article explain prerequisites?",
    "Does this article explain common errors?",
    "Does this article explain limitations?",
];

/// Structural checks used when the QA service is unreachable.
///
/// Each entry: if none of the keywords appear in the text, the canned
/// phrase is emitted as a raw gap.
const STRUCTURAL_CHECKS: &[(&[&str], &str)] = &[
    (
        &["require", "permission", "role", "access"],
        "prerequisites or access requirements are not clearly defined",
    ),
    (
        &["limit", "only", "cannot", "restriction"],
        "limitations or constraints are not documented",
    ),
    (
        &["error", "fail", "issue", "problem"],
        "error handling or failure scenarios are not covered",
    ),
    (
        &["example", "use case", "scenario"],
        "lacks practical usage examples",
    ),
];

/// Infer the article category from title and body.
pub fn infer_category(title: &str, body: &str) -> Category {
    let t = format!("{} {}", title, body).to_lowercase();

    if t.contains("api") {
        return Category::Api;
    }
    if t.contains("integration") {
        return Category::Integrations;
    }
    if ["role", "manager", "collaborator", "client"]
        .iter()
        .any(|k| t.contains(k))
    {
        return Category::RolesPermissions;
    }
    if t.contains("project") || t.contains("phase") {
        return Category::ProjectsPhases;
    }
    if t.contains("error") || t.contains("issue") {
        return Category::Troubleshooting;
    }
    if t.contains("account") || t.contains("billing") {
        return Category::AccountManagement;
    }

    Category::General
}

/// Infer the content type from the body.
pub fn infer_content_type(body: &str) -> ContentType {
    let t = body.to_lowercase();

    if t.contains("step") || t.contains("follow these") || t.contains("how to") {
        return ContentType::HowTo;
    }
    if t.contains("frequently asked") || t.contains("faq") {
        return ContentType::Faq;
    }
    if t.contains("error") || t.contains("issue") {
        return ContentType::Troubleshooting;
    }
    if t.contains("reference") {
        return ContentType::Reference;
    }

    ContentType::Guide
}

/// Scan for fine-grained topic keywords, preserving list order.
pub fn scan_topic_keywords(text: &str) -> Vec<String> {
    let t = text.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .filter(|k| t.contains(**k))
        .map(|k| k.to_string())
        .collect()
}

/// Derive a raw gap phrase from a probe's wording.
pub fn gap_phrase_for_probe(probe: &str) -> String {
    probe
        .trim_start_matches("Does this article")
        .trim_end_matches('?')
        .trim()
        .to_lowercase()
}

/// Deterministic structural gap review of the article text.
pub fn structural_gaps(text: &str, max_gaps: usize) -> Vec<String> {
    let t = text.to_lowercase();

    STRUCTURAL_CHECKS
        .iter()
        .filter(|(keywords, _)| !keywords.iter().any(|k| t.contains(k)))
        .map(|(_, phrase)| phrase.to_string())
        .take(max_gaps)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rule_order() {
        // "api" outranks every later rule even when both match
        assert_eq!(
            infer_category("API tokens for integrations", "roles too"),
            Category::Api
        );
        assert_eq!(
            infer_category("Jira integration", "assign roles"),
            Category::Integrations
        );
        assert_eq!(
            infer_category("Inviting a collaborator", ""),
            Category::RolesPermissions
        );
        assert_eq!(
            infer_category("Phases overview", ""),
            Category::ProjectsPhases
        );
        assert_eq!(
            infer_category("Known issues", ""),
            Category::Troubleshooting
        );
        assert_eq!(
            infer_category("Billing cycle", ""),
            Category::AccountManagement
        );
        assert_eq!(infer_category("Welcome", "hello"), Category::General);
    }

    #[test]
    fn test_content_type_rule_order() {
        assert_eq!(infer_content_type("follow these steps"), ContentType::HowTo);
        assert_eq!(
            infer_content_type("frequently asked questions"),
            ContentType::Faq
        );
        assert_eq!(
            infer_content_type("if you see an error"),
            ContentType::Troubleshooting
        );
        assert_eq!(infer_content_type("api reference"), ContentType::Reference);
        assert_eq!(infer_content_type("an overview"), ContentType::Guide);
    }

    #[test]
    fn test_scan_topic_keywords_preserves_order() {
        let text = "A webhook notifies the manager when an api token rotates.";
        assert_eq!(
            scan_topic_keywords(text),
            vec!["manager", "api", "token", "webhook"]
        );
    }

    #[test]
    fn test_gap_phrase_for_probe() {
        assert_eq!(
            gap_phrase_for_probe("Does this article explain prerequisites?"),
            "explain prerequisites"
        );
        assert_eq!(
            gap_phrase_for_probe("Does this article explain common errors?"),
            "explain common errors"
        );
    }

    #[test]
    fn test_structural_gaps_on_empty_text() {
        let gaps = structural_gaps("", 3);
        assert_eq!(gaps.len(), 3); // capped, four checks all fail
        assert!(gaps[0].contains("access requirements"));
    }

    #[test]
    fn test_structural_gaps_satisfied_checks_skipped() {
        let text = "Requires the admin role. Only ten projects are allowed. \
                    Common errors are listed below. For example, link a task.";
        assert!(structural_gaps(text, 3).is_empty());
    }
}
