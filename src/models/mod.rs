// src/models/mod.rs

pub mod core;
pub mod matching;

pub use self::core::{Label, LabelSet, LandmarkDefinition};
pub use self::matching::{MatchResult, MatchTier};
