// src/models/core.rs - Input labels and registry definition records

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A single weighted label produced by the external image classifier.
///
/// Labels carry no identity beyond their fields; confidence is on the
/// classifier's 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub confidence: f64,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// The ordered label sequence for one classification request.
///
/// Order is preserved for first-occurrence tie-breaking when confidences are
/// equal. Construction rejects confidences outside `[0, 100]`; everything else
/// (unknown names, empty names, empty sets) is accepted and simply fails to
/// match downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    pub fn new(labels: Vec<Label>) -> Result<Self> {
        for label in &labels {
            if !(0.0..=100.0).contains(&label.confidence) {
                bail!(
                    "label '{}' has confidence {} outside the [0, 100] contract",
                    label.name,
                    label.confidence
                );
            }
        }
        Ok(Self { labels })
    }

    pub fn empty() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A registry entry describing one recognizable named landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkDefinition {
    pub primary_name: String,
    #[serde(default)]
    pub alternative_names: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl LandmarkDefinition {
    pub fn new(
        primary_name: impl Into<String>,
        alternative_names: &[&str],
        keywords: &[&str],
    ) -> Self {
        Self {
            primary_name: primary_name.into(),
            alternative_names: alternative_names.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_set_accepts_valid_confidences() {
        let set = LabelSet::new(vec![
            Label::new("Eiffel Tower", 96.0),
            Label::new("Tower", 0.0),
            Label::new("Paris", 100.0),
        ])
        .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.labels()[0].name, "Eiffel Tower");
    }

    #[test]
    fn test_label_set_rejects_out_of_range_confidence() {
        assert!(LabelSet::new(vec![Label::new("Dog", 120.0)]).is_err());
        assert!(LabelSet::new(vec![Label::new("Dog", -1.0)]).is_err());
    }

    #[test]
    fn test_label_set_rejects_nan_confidence() {
        assert!(LabelSet::new(vec![Label::new("Dog", f64::NAN)]).is_err());
    }

    #[test]
    fn test_empty_label_set_is_valid() {
        let set = LabelSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
