// src/registry/mod.rs - Immutable landmark catalog with precomputed indices

pub mod catalog;
pub mod config;

use anyhow::{bail, Context, Result};
use log::warn;
use std::collections::HashMap;
use std::path::Path;

use crate::matching::normalize::normalize;
use crate::models::core::LandmarkDefinition;

/// The process-wide landmark catalog. Built once from an ordered definition
/// list, validated, indexed, and never mutated afterwards; concurrent reads
/// need no locking.
#[derive(Debug, Clone)]
pub struct LandmarkRegistry {
    definitions: Vec<LandmarkDefinition>,
    primary_index: HashMap<String, usize>,
    alternative_index: HashMap<String, usize>,
}

impl LandmarkRegistry {
    /// Builds the registry, failing on malformed definitions: an empty
    /// normalized primary name or a duplicate normalized primary name makes
    /// matching nondeterministic and is rejected outright. Colliding
    /// alternative names are tolerated; the first definition in catalog order
    /// keeps the index slot.
    pub fn from_definitions(definitions: Vec<LandmarkDefinition>) -> Result<Self> {
        let mut primary_index = HashMap::with_capacity(definitions.len());
        let mut alternative_index: HashMap<String, usize> = HashMap::new();

        for (idx, definition) in definitions.iter().enumerate() {
            let primary_key = normalize(&definition.primary_name);
            if primary_key.is_empty() {
                bail!(
                    "landmark definition at position {} has an empty primary name",
                    idx
                );
            }
            if primary_index.insert(primary_key.clone(), idx).is_some() {
                bail!(
                    "duplicate primary name '{}' (normalized '{}')",
                    definition.primary_name,
                    primary_key
                );
            }
        }

        for (idx, definition) in definitions.iter().enumerate() {
            for alt in &definition.alternative_names {
                let alt_key = normalize(alt);
                if alt_key.is_empty() {
                    continue;
                }
                if primary_index.contains_key(&alt_key) {
                    warn!(
                        "alternative name '{}' of '{}' collides with a primary name; primary wins",
                        alt, definition.primary_name
                    );
                    continue;
                }
                if let Some(existing) = alternative_index.get(&alt_key) {
                    if *existing != idx {
                        warn!(
                            "alternative name '{}' claimed by both '{}' and '{}'; first wins",
                            alt, definitions[*existing].primary_name, definition.primary_name
                        );
                    }
                    continue;
                }
                alternative_index.insert(alt_key, idx);
            }
        }

        Ok(Self {
            definitions,
            primary_index,
            alternative_index,
        })
    }

    /// Parses a JSON array of landmark definitions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definitions: Vec<LandmarkDefinition> =
            serde_json::from_str(json).context("Failed to parse landmark registry JSON")?;
        Self::from_definitions(definitions)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read landmark registry file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid landmark registry file {}", path.display()))
    }

    /// O(1) lookup by normalized primary name.
    pub fn lookup_exact(&self, label: &str) -> Option<&LandmarkDefinition> {
        self.primary_index
            .get(&normalize(label))
            .map(|idx| &self.definitions[*idx])
    }

    /// O(1) lookup by normalized alternative name.
    pub fn lookup_alternative(&self, label: &str) -> Option<&LandmarkDefinition> {
        self.alternative_index
            .get(&normalize(label))
            .map(|idx| &self.definitions[*idx])
    }

    /// Definitions in their original catalog order.
    pub fn definitions(&self) -> &[LandmarkDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definitions() -> Vec<LandmarkDefinition> {
        vec![
            LandmarkDefinition::new(
                "Eiffel Tower",
                &["Tour Eiffel", "The Eiffel Tower"],
                &["paris", "france", "iron", "tower"],
            ),
            LandmarkDefinition::new(
                "Statue of Liberty",
                &["Lady Liberty"],
                &["new york", "liberty", "statue", "torch"],
            ),
        ]
    }

    #[test]
    fn test_lookup_exact_normalizes_probe() {
        let registry = LandmarkRegistry::from_definitions(sample_definitions()).unwrap();
        let def = registry.lookup_exact("  eiffel   TOWER ").unwrap();
        assert_eq!(def.primary_name, "Eiffel Tower");
        assert!(registry.lookup_exact("Tour Eiffel").is_none());
        assert!(registry.lookup_exact("Dog").is_none());
    }

    #[test]
    fn test_lookup_alternative() {
        let registry = LandmarkRegistry::from_definitions(sample_definitions()).unwrap();
        let def = registry.lookup_alternative("tour eiffel").unwrap();
        assert_eq!(def.primary_name, "Eiffel Tower");
        let def = registry.lookup_alternative("LADY  LIBERTY").unwrap();
        assert_eq!(def.primary_name, "Statue of Liberty");
        assert!(registry.lookup_alternative("Eiffel Tower").is_none());
    }

    #[test]
    fn test_duplicate_primary_name_is_rejected() {
        let mut defs = sample_definitions();
        defs.push(LandmarkDefinition::new("EIFFEL  TOWER", &[], &[]));
        assert!(LandmarkRegistry::from_definitions(defs).is_err());
    }

    #[test]
    fn test_empty_primary_name_is_rejected() {
        let defs = vec![LandmarkDefinition::new("   ", &[], &[])];
        assert!(LandmarkRegistry::from_definitions(defs).is_err());
    }

    #[test]
    fn test_alternative_collision_first_definition_wins() {
        let mut defs = sample_definitions();
        defs.push(LandmarkDefinition::new(
            "Eiffel Tower Replica",
            &["Tour Eiffel"],
            &[],
        ));
        let registry = LandmarkRegistry::from_definitions(defs).unwrap();
        let def = registry.lookup_alternative("Tour Eiffel").unwrap();
        assert_eq!(def.primary_name, "Eiffel Tower");
    }

    #[test]
    fn test_alternative_colliding_with_primary_is_skipped() {
        let mut defs = sample_definitions();
        defs.push(LandmarkDefinition::new(
            "Liberty Island Museum",
            &["Statue of Liberty"],
            &[],
        ));
        let registry = LandmarkRegistry::from_definitions(defs).unwrap();
        assert!(registry.lookup_alternative("Statue of Liberty").is_none());
        assert_eq!(
            registry.lookup_exact("Statue of Liberty").unwrap().primary_name,
            "Statue of Liberty"
        );
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"primary_name": "Big Ben", "alternative_names": ["Elizabeth Tower"], "keywords": ["london", "clock"]},
            {"primary_name": "Colosseum"}
        ]"#;
        let registry = LandmarkRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup_alternative("elizabeth tower").unwrap().primary_name,
            "Big Ben"
        );
        assert!(registry.lookup_exact("Colosseum").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(LandmarkRegistry::from_json_str("not json").is_err());
        assert!(LandmarkRegistry::from_json_str(r#"[{"primary_name": ""}]"#).is_err());
    }
}
