// src/matching/normalize.rs - Canonical identifier normalization

/// Canonicalizes a free-text name into a stable identifier: lower-cases,
/// trims, and removes all whitespace runs. Total over all strings and
/// idempotent; the canonical id of a matched landmark is exactly this form of
/// its primary name.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect()
}
