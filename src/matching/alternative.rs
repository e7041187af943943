// src/matching/alternative.rs - Tier 2: alternative-name lookup

use crate::matching::{MatchContext, TierEvaluator, TierMatch};
use crate::models::matching::MatchTier;

const MIN_ALTERNATIVE_CONFIDENCE: f64 = 75.0;

/// Same scan as the exact tier, but against the alternative-name index. The
/// matched definition's primary name becomes the result, so downstream
/// consumers always see the canonical entity.
pub struct AlternativeTier;

impl TierEvaluator for AlternativeTier {
    fn tier(&self) -> MatchTier {
        MatchTier::Alternative
    }

    fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<TierMatch> {
        ctx.labels
            .iter()
            .filter(|label| label.confidence >= MIN_ALTERNATIVE_CONFIDENCE)
            .find_map(|label| {
                ctx.registry
                    .lookup_alternative(&label.name)
                    .map(|def| TierMatch {
                        raw_name: def.primary_name.clone(),
                        confidence: label.confidence,
                        similarity_score: None,
                    })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::{Label, LandmarkDefinition};
    use crate::registry::LandmarkRegistry;

    fn registry() -> LandmarkRegistry {
        LandmarkRegistry::from_definitions(vec![LandmarkDefinition::new(
            "Eiffel Tower",
            &["Tour Eiffel", "The Eiffel Tower"],
            &["paris", "tower"],
        )])
        .unwrap()
    }

    #[test]
    fn test_alternative_resolves_to_primary_name() {
        let registry = registry();
        let labels = vec![Label::new("Tour Eiffel", 80.0)];
        let ctx = MatchContext {
            registry: &registry,
            labels: &labels,
        };
        let m = AlternativeTier.evaluate(&ctx).unwrap();
        assert_eq!(m.raw_name, "Eiffel Tower");
        assert_eq!(m.confidence, 80.0);
    }

    #[test]
    fn test_threshold_matches_exact_tier() {
        let registry = registry();
        let labels = vec![Label::new("Tour Eiffel", 70.0)];
        let ctx = MatchContext {
            registry: &registry,
            labels: &labels,
        };
        assert!(AlternativeTier.evaluate(&ctx).is_none());
    }
}
