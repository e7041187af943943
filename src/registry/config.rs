// src/registry/config.rs - Environment-driven registry source selection

use anyhow::Result;
use log::{debug, info};
use std::env;
use std::path::PathBuf;

use crate::registry::{catalog, LandmarkRegistry};

/// Where the registry comes from: an operator-supplied JSON file named by
/// `LANDMARK_REGISTRY_PATH`, or the builtin catalog when unset.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    pub path: Option<PathBuf>,
}

impl RegistryConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let path = env::var("LANDMARK_REGISTRY_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        debug!("Registry config: path={:?}", path);

        Self { path }
    }

    /// Check if a custom registry file is configured
    pub fn is_custom(&self) -> bool {
        self.path.is_some()
    }

    /// Log the current configuration
    pub fn log_config(&self) {
        match &self.path {
            Some(path) => info!("🗂️ Landmark registry source: {}", path.display()),
            None => info!("🗂️ Landmark registry source: builtin catalog"),
        }
    }

    /// Load the configured registry, falling back to the builtin catalog.
    pub fn load(&self) -> Result<LandmarkRegistry> {
        match &self.path {
            Some(path) => LandmarkRegistry::from_json_file(path),
            None => Ok(catalog::builtin().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test covering both env states; parallel tests must not race on
    // the same variable.
    #[test]
    fn test_config_from_env() {
        env::remove_var("LANDMARK_REGISTRY_PATH");

        let config = RegistryConfig::from_env();
        assert!(!config.is_custom());
        let registry = config.load().unwrap();
        assert!(registry.lookup_exact("Eiffel Tower").is_some());

        env::set_var("LANDMARK_REGISTRY_PATH", "/tmp/landmarks.json");

        let config = RegistryConfig::from_env();
        assert!(config.is_custom());
        assert_eq!(config.path, Some(PathBuf::from("/tmp/landmarks.json")));

        // Cleanup
        env::remove_var("LANDMARK_REGISTRY_PATH");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = RegistryConfig {
            path: Some(PathBuf::from("/nonexistent/landmarks.json")),
        };
        assert!(config.load().is_err());
    }
}
