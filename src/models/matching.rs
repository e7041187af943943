// src/models/matching.rs - Match tiers and the pipeline's single output record

use serde::Serialize;
use std::fmt;

use crate::matching::normalize::normalize;

/// The cascade stage that produced a result, in decreasing order of
/// confidence in correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchTier {
    Exact,
    Alternative,
    Similarity,
    Keyword,
    Generic,
    None,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Alternative => "alternative",
            MatchTier::Similarity => "similarity",
            MatchTier::Keyword => "keyword",
            MatchTier::Generic => "generic",
            MatchTier::None => "none",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The one decision the pipeline returns per label set.
///
/// Invariants: `matched == (match_tier != MatchTier::None)`; `canonical_id` is
/// the normalized form of `raw_name` when matched and empty otherwise;
/// `similarity_score` is present only for the `Similarity` and `Keyword` tiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub canonical_id: String,
    pub raw_name: Option<String>,
    pub match_tier: MatchTier,
    pub confidence: f64,
    pub similarity_score: Option<f64>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            canonical_id: String::new(),
            raw_name: None,
            match_tier: MatchTier::None,
            confidence: 0.0,
            similarity_score: None,
        }
    }

    pub fn matched(
        match_tier: MatchTier,
        raw_name: String,
        confidence: f64,
        similarity_score: Option<f64>,
    ) -> Self {
        Self {
            matched: true,
            canonical_id: normalize(&raw_name),
            raw_name: Some(raw_name),
            match_tier,
            confidence,
            similarity_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_shape() {
        let result = MatchResult::no_match();
        assert!(!result.matched);
        assert_eq!(result.canonical_id, "");
        assert_eq!(result.raw_name, None);
        assert_eq!(result.match_tier, MatchTier::None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.similarity_score, None);
    }

    #[test]
    fn test_matched_result_derives_canonical_id() {
        let result = MatchResult::matched(MatchTier::Exact, "Eiffel Tower".to_string(), 96.0, None);
        assert!(result.matched);
        assert_eq!(result.canonical_id, "eiffeltower");
        assert_eq!(result.raw_name.as_deref(), Some("Eiffel Tower"));
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(MatchTier::Exact.as_str(), "exact");
        assert_eq!(MatchTier::None.to_string(), "none");
    }
}
