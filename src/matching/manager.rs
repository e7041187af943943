// src/matching/manager.rs - Ordered tier cascade over one label set

use log::{debug, info};
use std::sync::Arc;

use crate::matching::alternative::AlternativeTier;
use crate::matching::exact::ExactTier;
use crate::matching::generic::GenericTier;
use crate::matching::keyword::KeywordTier;
use crate::matching::similar::SimilarityTier;
use crate::matching::{MatchContext, TierEvaluator};
use crate::models::core::LabelSet;
use crate::models::matching::MatchResult;
use crate::registry::LandmarkRegistry;

/// The matching state machine: an ordered list of tier evaluators run against
/// an injected registry. The first tier that produces a candidate terminates
/// the cascade; an exhausted cascade is the no-match result, never an error.
///
/// The pipeline holds no mutable state, so one instance serves any number of
/// concurrent invocations.
pub struct MatchPipeline {
    registry: Arc<LandmarkRegistry>,
    evaluators: Vec<Box<dyn TierEvaluator>>,
}

impl MatchPipeline {
    /// Builds the standard five-tier cascade, in decreasing order of
    /// confidence in correctness.
    pub fn new(registry: Arc<LandmarkRegistry>) -> Self {
        let evaluators: Vec<Box<dyn TierEvaluator>> = vec![
            Box::new(ExactTier),
            Box::new(AlternativeTier),
            Box::new(SimilarityTier),
            Box::new(KeywordTier),
            Box::new(GenericTier),
        ];
        Self {
            registry,
            evaluators,
        }
    }

    pub fn registry(&self) -> &LandmarkRegistry {
        &self.registry
    }

    /// Resolves one label set to exactly one `MatchResult`.
    pub fn match_labels(&self, labels: &LabelSet) -> MatchResult {
        if labels.is_empty() {
            debug!("Empty label set; nothing to match");
            return MatchResult::no_match();
        }

        let ctx = MatchContext {
            registry: &self.registry,
            labels: labels.labels(),
        };

        for evaluator in &self.evaluators {
            match evaluator.evaluate(&ctx) {
                Some(candidate) => {
                    info!(
                        "🎯 {} tier matched '{}' (confidence {:.1})",
                        evaluator.tier(),
                        candidate.raw_name,
                        candidate.confidence
                    );
                    return MatchResult::matched(
                        evaluator.tier(),
                        candidate.raw_name,
                        candidate.confidence,
                        candidate.similarity_score,
                    );
                }
                None => debug!("{} tier produced no match", evaluator.tier()),
            }
        }

        debug!("No tier matched {} labels", labels.len());
        MatchResult::no_match()
    }
}
