// src/matching/mod.rs - Tier evaluators and the shared match contract

pub mod alternative;
pub mod exact;
pub mod generic;
pub mod keyword;
pub mod keywords;
pub mod manager;
pub mod normalize;
pub mod similar;
pub mod similarity;

use crate::models::core::Label;
use crate::models::matching::MatchTier;
use crate::registry::LandmarkRegistry;

/// Read-only view a tier evaluator works against: the registry and the label
/// sequence in its original input order.
pub struct MatchContext<'a> {
    pub registry: &'a LandmarkRegistry,
    pub labels: &'a [Label],
}

/// A tier's winning candidate before the pipeline shapes it into the final
/// `MatchResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct TierMatch {
    pub raw_name: String,
    pub confidence: f64,
    pub similarity_score: Option<f64>,
}

/// One stage of the matching cascade. Evaluators are pure: same context in,
/// same candidate out, and a `None` falls through to the next tier.
pub trait TierEvaluator: Send + Sync {
    fn tier(&self) -> MatchTier;
    fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<TierMatch>;
}
