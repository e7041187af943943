// src/matching/similarity.rs - Bounded string-similarity scoring

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::normalize::normalize;

/// Score returned when one normalized name fully contains the other, unless
/// the length ratio is higher.
const CONTAINMENT_FLOOR: f64 = 0.7;
/// Token-overlap scores start here and grow with the overlap fraction.
const OVERLAP_BASE: f64 = 0.5;
const OVERLAP_WEIGHT: f64 = 0.4;
/// Token overlap can never reach the containment band.
const OVERLAP_CAP: f64 = 0.9;
/// Tokens shorter than this are discarded before overlap matching.
pub const MIN_TOKEN_LENGTH: usize = 3;

static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Computes a `[0.0, 1.0]` similarity between two free-text names.
///
/// Signals, in order: normalized equality (1.0), one-sided containment
/// (`max(0.7, shorter/longer)`), token overlap (`min(0.9, 0.5 + overlap * 0.4)`),
/// otherwise 0.0.
///
/// Token matching is driven by the first argument's tokens, so the function is
/// not commutative; callers that need the historic scores must keep the
/// argument order label-first, registry-name-second.
pub fn similarity(a: &str, b: &str) -> f64 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if norm_a == norm_b {
        return 1.0;
    }
    // An empty string is a substring of everything; it never counts as a
    // containment hit.
    if norm_a.is_empty() || norm_b.is_empty() {
        return 0.0;
    }

    if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
        let len_a = norm_a.chars().count() as f64;
        let len_b = norm_b.chars().count() as f64;
        let ratio = len_a.min(len_b) / len_a.max(len_b);
        return ratio.max(CONTAINMENT_FLOOR);
    }

    let tokens_a = tokenize(&norm_a);
    let tokens_b = tokenize(&norm_b);
    if tokens_a.len() > 1 || tokens_b.len() > 1 {
        let match_count = tokens_a
            .iter()
            .filter(|t1| {
                tokens_b
                    .iter()
                    .any(|t2| *t1 == t2 || t1.contains(t2.as_str()) || t2.contains(t1.as_str()))
            })
            .count();
        let overlap = match_count as f64 / tokens_a.len().max(tokens_b.len()) as f64;
        if overlap > 0.0 {
            return (OVERLAP_BASE + overlap * OVERLAP_WEIGHT).min(OVERLAP_CAP);
        }
    }

    0.0
}

/// Splits a normalized name on non-word-character runs, dropping short tokens
/// and duplicates (first occurrence kept).
pub fn tokenize(normalized: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in TOKEN_SPLIT.split(normalized) {
        if token.len() >= MIN_TOKEN_LENGTH && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}
