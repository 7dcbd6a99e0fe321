//! Rationale text for gap report rows.
//!
//! A deterministic baseline sentence exists for every canonical gap
//! and is the correctness backstop: never empty, always within the
//! length bounds, no network. The text generator, when configured, may
//! replace it with a more specific phrasing, but only after validation.

use tracing::{debug, warn};

use crate::inference::ServiceOutcome;
use crate::traits::ai::TextGenerator;
use crate::types::article::Category;
use crate::types::report::CanonicalGap;

/// Minimum accepted rationale length in characters.
pub const MIN_RATIONALE_LEN: usize = 15;

/// Maximum accepted rationale length in characters.
pub const MAX_RATIONALE_LEN: usize = 160;

/// Deterministic baseline rationale for a canonical gap.
///
/// Total over every variant; the catch-all interpolates the corpus
/// counts.
pub fn baseline(gap: CanonicalGap, occurrence_count: usize, total_articles: usize) -> String {
    match gap {
        CanonicalGap::RoleAccess => {
            "Users cannot clearly see role boundaries and permissions, causing confusion \
             for non-admin users and dependency on account owners."
                .to_string()
        }
        CanonicalGap::ErrorHandling => {
            "Without documented failure scenarios and recovery steps, users cannot \
             self-diagnose issues, raising support load."
                .to_string()
        }
        CanonicalGap::Limitations => {
            "Missing constraints and usage boundaries lead to incorrect assumptions, \
             misconfiguration, and unexpected behavior."
                .to_string()
        }
        CanonicalGap::Examples => {
            "Without end-to-end examples, users struggle to turn features into real \
             workflows, slowing onboarding and adoption."
                .to_string()
        }
        CanonicalGap::GeneralClarity => format!(
            "This gap appears in {} of {} articles, indicating a systemic documentation \
             weakness impacting user self-service.",
            occurrence_count, total_articles
        ),
    }
}

/// Compose the rationale for a report row.
///
/// Attempts one generator rewrite and falls back to the baseline on
/// any service error or validation failure.
pub async fn compose<G: TextGenerator>(
    generator: &G,
    category: Category,
    gap: CanonicalGap,
    occurrence_count: usize,
    total_articles: usize,
) -> ServiceOutcome<String> {
    let fallback = baseline(gap, occurrence_count, total_articles);

    let prompt = format!(
        "Rewrite this rationale in one short sentence.\n\n\
         Category: {}\n\
         Gap: {}\n\n\
         Focus only on user impact.\n\
         No explanations.\n\
         No filler.",
        category,
        gap.label()
    );

    match generator.generate(&prompt).await {
        Ok(text) => {
            let cleaned = text.trim().to_string();
            if (MIN_RATIONALE_LEN..=MAX_RATIONALE_LEN).contains(&cleaned.len()) {
                ServiceOutcome::Live(cleaned)
            } else {
                warn!(
                    gap = %gap,
                    len = cleaned.len(),
                    "generated rationale outside length bounds, using baseline"
                );
                ServiceOutcome::Degraded(fallback)
            }
        }
        Err(e) => {
            debug!(gap = %gap, error = %e, "rationale generation unavailable");
            ServiceOutcome::Degraded(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;
    use crate::traits::ai::NullGenerator;

    const ALL_GAPS: &[CanonicalGap] = &[
        CanonicalGap::RoleAccess,
        CanonicalGap::ErrorHandling,
        CanonicalGap::Limitations,
        CanonicalGap::Examples,
        CanonicalGap::GeneralClarity,
    ];

    #[test]
    fn test_baseline_is_total_and_bounded() {
        for gap in ALL_GAPS {
            let text = baseline(*gap, 3, 5);
            assert!(!text.is_empty());
            assert!(text.len() >= MIN_RATIONALE_LEN, "{gap}: too short");
            assert!(text.len() <= MAX_RATIONALE_LEN, "{gap}: too long ({})", text.len());
        }
    }

    #[test]
    fn test_catch_all_interpolates_counts() {
        let text = baseline(CanonicalGap::GeneralClarity, 4, 9);
        assert!(text.contains("4 of 9 articles"));
    }

    #[tokio::test]
    async fn test_compose_accepts_valid_generation() {
        let generator = MockGenerator::new().with_response("Users get stuck without role docs.");

        let outcome = compose(&generator, Category::RolesPermissions, CanonicalGap::RoleAccess, 3, 5)
            .await;

        assert!(!outcome.is_degraded());
        assert_eq!(outcome.value(), "Users get stuck without role docs.");
    }

    #[tokio::test]
    async fn test_compose_rejects_too_short() {
        let generator = MockGenerator::new().with_response("Too short.");

        let outcome =
            compose(&generator, Category::Api, CanonicalGap::Limitations, 2, 5).await;

        assert!(outcome.is_degraded());
        assert_eq!(
            outcome.value(),
            &baseline(CanonicalGap::Limitations, 2, 5)
        );
    }

    #[tokio::test]
    async fn test_compose_rejects_too_long() {
        let generator = MockGenerator::new().with_response("x".repeat(200));

        let outcome =
            compose(&generator, Category::Api, CanonicalGap::Examples, 2, 5).await;

        assert!(outcome.is_degraded());
    }

    #[tokio::test]
    async fn test_compose_rejects_whitespace_only() {
        let generator = MockGenerator::new().with_response("   \n  ");

        let outcome =
            compose(&generator, Category::Api, CanonicalGap::ErrorHandling, 2, 5).await;

        assert!(outcome.is_degraded());
        assert!(!outcome.value().is_empty());
    }

    #[tokio::test]
    async fn test_compose_falls_back_without_generator() {
        let outcome =
            compose(&NullGenerator, Category::General, CanonicalGap::GeneralClarity, 2, 4).await;

        assert!(outcome.is_degraded());
        assert!(outcome.value().len() <= MAX_RATIONALE_LEN);
        assert!(!outcome.value().is_empty());
    }
}
