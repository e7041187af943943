// src/matching/keyword.rs - Tier 4: keyword/context scoring

use crate::matching::keywords::{is_generic_label, is_landmark_related};
use crate::matching::normalize::normalize;
use crate::matching::similarity::similarity;
use crate::matching::{MatchContext, TierEvaluator, TierMatch};
use crate::models::core::Label;
use crate::models::matching::MatchTier;

/// A landmark-related label this confident opens the tier.
const MIN_CONTEXT_CONFIDENCE: f64 = 85.0;
/// Candidate labels come from the wider pool above this confidence.
const MIN_CANDIDATE_CONFIDENCE: f64 = 75.0;
const MIN_KEYWORD_SCORE: f64 = 0.3;

/// Fires only when the label set carries strong landmark context: some label
/// with confidence >= 85 must be landmark-related. The highest-confidence
/// non-generic label (from all labels >= 75) is then scored against every
/// definition by the better of name similarity and keyword overlap.
pub struct KeywordTier;

impl TierEvaluator for KeywordTier {
    fn tier(&self) -> MatchTier {
        MatchTier::Keyword
    }

    fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<TierMatch> {
        let has_context = ctx.labels.iter().any(|label| {
            label.confidence >= MIN_CONTEXT_CONFIDENCE && is_landmark_related(&label.name)
        });
        if !has_context {
            return None;
        }

        let mut candidate: Option<&Label> = None;
        for label in ctx.labels.iter().filter(|label| {
            label.confidence >= MIN_CANDIDATE_CONFIDENCE && !is_generic_label(&label.name)
        }) {
            // Strictly greater keeps the first occurrence on equal confidence.
            if candidate.map_or(true, |best| label.confidence > best.confidence) {
                candidate = Some(label);
            }
        }
        let candidate = candidate?;
        let normalized_label = normalize(&candidate.name);

        let mut best: Option<(f64, &str)> = None;
        for def in ctx.registry.definitions() {
            let name_score = similarity(&candidate.name, &def.primary_name);
            let keyword_score = keyword_overlap(&normalized_label, &def.keywords);
            let score = name_score.max(keyword_score);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, def.primary_name.as_str()));
            }
        }

        let (score, primary_name) = best?;
        if score < MIN_KEYWORD_SCORE {
            return None;
        }
        Some(TierMatch {
            raw_name: primary_name.to_string(),
            confidence: candidate.confidence,
            similarity_score: Some(score),
        })
    }
}

/// Fraction of a definition's keywords whose normalized terms appear as
/// substrings of the normalized label name.
fn keyword_overlap(normalized_label: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() || normalized_label.is_empty() {
        return 0.0;
    }
    let hits = keywords
        .iter()
        .filter(|keyword| {
            let term = normalize(keyword);
            !term.is_empty() && normalized_label.contains(&term)
        })
        .count();
    hits as f64 / keywords.len() as f64
}
