// src/matching/exact.rs - Tier 1: exact primary-name lookup

use crate::matching::{MatchContext, TierEvaluator, TierMatch};
use crate::models::matching::MatchTier;

const MIN_EXACT_CONFIDENCE: f64 = 75.0;

/// Scans labels in input order and returns the first confident label whose
/// normalized name is a registry primary name.
pub struct ExactTier;

impl TierEvaluator for ExactTier {
    fn tier(&self) -> MatchTier {
        MatchTier::Exact
    }

    fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<TierMatch> {
        ctx.labels
            .iter()
            .filter(|label| label.confidence >= MIN_EXACT_CONFIDENCE)
            .find_map(|label| {
                ctx.registry.lookup_exact(&label.name).map(|def| TierMatch {
                    raw_name: def.primary_name.clone(),
                    confidence: label.confidence,
                    similarity_score: None,
                })
            })
    }
}
