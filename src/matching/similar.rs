// src/matching/similar.rs - Tier 3: similarity scoring across the registry

use crate::matching::similarity::similarity;
use crate::matching::{MatchContext, TierEvaluator, TierMatch};
use crate::models::matching::MatchTier;

const MIN_LABEL_CONFIDENCE: f64 = 70.0;
const MIN_SIMILARITY: f64 = 0.7;

/// Scores every (label, definition) pair: the pair's similarity is the best of
/// the label against the primary name and against each alternative name, and
/// pairs below 0.7 are out. The winner is the pair whose similarity weighted
/// by label confidence is highest; ties keep the earliest label, then the
/// earliest definition.
pub struct SimilarityTier;

impl TierEvaluator for SimilarityTier {
    fn tier(&self) -> MatchTier {
        MatchTier::Similarity
    }

    fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<TierMatch> {
        let mut best: Option<(f64, TierMatch)> = None;

        for label in ctx
            .labels
            .iter()
            .filter(|label| label.confidence >= MIN_LABEL_CONFIDENCE)
        {
            for def in ctx.registry.definitions() {
                let mut score = similarity(&label.name, &def.primary_name);
                for alt in &def.alternative_names {
                    score = score.max(similarity(&label.name, alt));
                }
                if score < MIN_SIMILARITY {
                    continue;
                }

                let combined = score * (label.confidence / 100.0);
                let is_better = best
                    .as_ref()
                    .map_or(true, |(best_combined, _)| combined > *best_combined);
                if is_better {
                    best = Some((
                        combined,
                        TierMatch {
                            raw_name: def.primary_name.clone(),
                            confidence: label.confidence,
                            similarity_score: Some(score),
                        },
                    ));
                }
            }
        }

        best.map(|(_, m)| m)
    }
}
