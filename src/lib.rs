// src/lib.rs
//! Entity resolution for landmark recognition.
//!
//! Turns an ordered set of weighted classifier labels into a single match
//! decision against an immutable landmark registry, via a five-tier cascade:
//! exact name, alternative name, string similarity, keyword context, and a
//! generic landmark fallback. The core is pure and synchronous; registry
//! construction is the only fallible step.

pub mod matching;
pub mod models;
pub mod registry;

pub use matching::manager::MatchPipeline;
pub use matching::normalize::normalize;
pub use matching::similarity::similarity;
pub use models::core::{Label, LabelSet, LandmarkDefinition};
pub use models::matching::{MatchResult, MatchTier};
pub use registry::config::RegistryConfig;
pub use registry::LandmarkRegistry;
