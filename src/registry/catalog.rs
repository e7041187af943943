// src/registry/catalog.rs - Builtin landmark catalog

use once_cell::sync::Lazy;

use crate::models::core::LandmarkDefinition;
use crate::registry::LandmarkRegistry;

static BUILTIN: Lazy<LandmarkRegistry> = Lazy::new(|| {
    LandmarkRegistry::from_definitions(builtin_definitions())
        .expect("builtin landmark catalog is valid")
});

/// The shipped registry, built once per process.
pub fn builtin() -> &'static LandmarkRegistry {
    &BUILTIN
}

/// Default landmark definitions used when no external registry file is
/// configured. Keyword lists stay at four or more terms so a single keyword
/// hit alone cannot clear the keyword-tier acceptance threshold.
pub fn builtin_definitions() -> Vec<LandmarkDefinition> {
    vec![
        LandmarkDefinition::new(
            "Eiffel Tower",
            &["Tour Eiffel", "The Eiffel Tower", "Eiffel"],
            &["paris", "france", "iron", "tower", "lattice"],
        ),
        LandmarkDefinition::new(
            "Statue of Liberty",
            &["Lady Liberty", "Liberty Enlightening the World"],
            &["newyork", "liberty", "statue", "torch", "island"],
        ),
        LandmarkDefinition::new(
            "Taj Mahal",
            &["The Taj"],
            &["agra", "india", "mausoleum", "marble", "mughal"],
        ),
        LandmarkDefinition::new(
            "Colosseum",
            &["Flavian Amphitheatre", "Coliseum"],
            &["rome", "italy", "amphitheater", "gladiator", "arena"],
        ),
        LandmarkDefinition::new(
            "Big Ben",
            &["Elizabeth Tower", "Great Bell of Westminster"],
            &["london", "clock", "westminster", "parliament", "bell"],
        ),
        LandmarkDefinition::new(
            "Great Wall of China",
            &["The Great Wall"],
            &["china", "wall", "fortification", "beijing", "dynasty"],
        ),
        LandmarkDefinition::new(
            "Machu Picchu",
            &["Lost City of the Incas"],
            &["peru", "inca", "citadel", "andes", "mountain"],
        ),
        LandmarkDefinition::new(
            "Christ the Redeemer",
            &["Cristo Redentor"],
            &["rio", "brazil", "statue", "corcovado", "christ"],
        ),
        LandmarkDefinition::new(
            "Sydney Opera House",
            &["Opera House Sydney"],
            &["sydney", "australia", "opera", "harbour", "sails"],
        ),
        LandmarkDefinition::new(
            "Notre-Dame de Paris",
            &["Notre Dame Cathedral", "Notre Dame"],
            &["paris", "cathedral", "gothic", "gargoyle", "seine"],
        ),
        LandmarkDefinition::new(
            "Golden Gate Bridge",
            &["The Golden Gate"],
            &["sanfrancisco", "bridge", "suspension", "bay", "california"],
        ),
        LandmarkDefinition::new(
            "Burj Khalifa",
            &["Burj Dubai"],
            &["dubai", "skyscraper", "tallest", "emirates", "spire"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_builds() {
        let registry = builtin();
        assert!(!registry.is_empty());
        assert_eq!(
            registry.lookup_exact("Eiffel Tower").unwrap().primary_name,
            "Eiffel Tower"
        );
        assert_eq!(
            registry.lookup_alternative("Tour Eiffel").unwrap().primary_name,
            "Eiffel Tower"
        );
    }

    #[test]
    fn test_builtin_keyword_lists_are_deep_enough() {
        // A lone keyword hit must stay below the keyword-tier threshold of 0.3.
        for def in builtin_definitions() {
            assert!(
                def.keywords.len() >= 4,
                "'{}' has a keyword list shallow enough for single-hit matches",
                def.primary_name
            );
        }
    }
}
