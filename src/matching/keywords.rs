// src/matching/keywords.rs - Landmark-category vocabulary and generic labels

use crate::matching::normalize::normalize;

/// Category terms that mark a classifier label as landmark-like. Matched by
/// substring containment against the normalized label, so "Historical Site"
/// hits "historical". Configuration constant, not derived from the registry.
pub const LANDMARK_VOCABULARY: [&str; 26] = [
    "landmark",
    "monument",
    "tower",
    "statue",
    "temple",
    "palace",
    "castle",
    "cathedral",
    "basilica",
    "mosque",
    "shrine",
    "pagoda",
    "pyramid",
    "ruins",
    "historical",
    "heritage",
    "architecture",
    "attraction",
    "structure",
    "building",
    "fortress",
    "citadel",
    "memorial",
    "obelisk",
    "amphitheater",
    "aqueduct",
];

/// Category-only labels that never identify a specific landmark on their own.
/// Compared by normalized equality.
pub const GENERIC_LABELS: [&str; 5] = [
    "landmark",
    "monument",
    "architecture",
    "building",
    "structure",
];

/// True when the label's text denotes a landmark-like concept.
pub fn is_landmark_related(label: &str) -> bool {
    let normalized = normalize(label);
    if normalized.is_empty() {
        return false;
    }
    LANDMARK_VOCABULARY
        .iter()
        .any(|term| normalized.contains(term))
}

/// True when the label is one of the generic category terms and therefore
/// useless as a match candidate.
pub fn is_generic_label(label: &str) -> bool {
    let normalized = normalize(label);
    GENERIC_LABELS.iter().any(|term| normalized == *term)
}
