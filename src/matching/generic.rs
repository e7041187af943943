// src/matching/generic.rs - Tier 5: unrecognized-landmark fallback

use crate::matching::keywords::{is_generic_label, is_landmark_related};
use crate::matching::{MatchContext, TierEvaluator, TierMatch};
use crate::models::core::Label;
use crate::models::matching::MatchTier;

const MIN_GENERIC_CONFIDENCE: f64 = 85.0;
/// One landmark-ish label could be noise; two is treated as a real sighting.
const MIN_LANDMARK_LABELS: usize = 2;

/// When the classifier is confident it saw a landmark but nothing in the
/// registry claimed it, the best non-generic landmark label itself becomes the
/// (unrecognized) entity.
pub struct GenericTier;

impl TierEvaluator for GenericTier {
    fn tier(&self) -> MatchTier {
        MatchTier::Generic
    }

    fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<TierMatch> {
        let related: Vec<&Label> = ctx
            .labels
            .iter()
            .filter(|label| {
                label.confidence >= MIN_GENERIC_CONFIDENCE && is_landmark_related(&label.name)
            })
            .collect();
        if related.len() < MIN_LANDMARK_LABELS {
            return None;
        }

        let mut candidate: Option<&Label> = None;
        for label in related
            .into_iter()
            .filter(|label| !is_generic_label(&label.name))
        {
            if candidate.map_or(true, |best| label.confidence > best.confidence) {
                candidate = Some(label);
            }
        }

        candidate.map(|label| TierMatch {
            raw_name: label.name.clone(),
            confidence: label.confidence,
            similarity_score: None,
        })
    }
}
