//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Abriplan configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the pricing template workbook
    pub template: Option<PathBuf>,

    /// Root directory for generated documents
    pub results_root: Option<PathBuf>,

    /// Root directory for component sidecars
    pub components_root: Option<PathBuf>,

    /// Path of the consolidated result store
    pub store: Option<PathBuf>,
}

/// Name of the project-local config file, looked up in the working
/// directory.
const PROJECT_CONFIG: &str = "abriplan.yaml";

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (accessor fallbacks below)

        // 2. Global user config (~/.config/abriplan/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Project config (./abriplan.yaml)
        let project_path = PathBuf::from(PROJECT_CONFIG);
        if project_path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&project_path) {
                if let Ok(project) = serde_yml::from_str::<Config>(&contents) {
                    config.merge(project);
                }
            }
        }

        // 4. Environment variables
        if let Ok(template) = std::env::var("ABRIPLAN_TEMPLATE") {
            config.template = Some(PathBuf::from(template));
        }
        if let Ok(results) = std::env::var("ABRIPLAN_RESULTS") {
            config.results_root = Some(PathBuf::from(results));
        }
        if let Ok(components) = std::env::var("ABRIPLAN_COMPONENTS") {
            config.components_root = Some(PathBuf::from(components));
        }
        if let Ok(store) = std::env::var("ABRIPLAN_STORE") {
            config.store = Some(PathBuf::from(store));
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "abriplan")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.template.is_some() {
            self.template = other.template;
        }
        if other.results_root.is_some() {
            self.results_root = other.results_root;
        }
        if other.components_root.is_some() {
            self.components_root = other.components_root;
        }
        if other.store.is_some() {
            self.store = other.store;
        }
    }

    /// Template path, defaulting to the untouched base workbook
    pub fn template(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or_else(|| PathBuf::from("base/nepastoucher.xlsx"))
    }

    /// Results root, defaulting to `results/`
    pub fn results_root(&self) -> PathBuf {
        self.results_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("results"))
    }

    /// Components root, defaulting to `components/`
    pub fn components_root(&self) -> PathBuf {
        self.components_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("components"))
    }

    /// Consolidated store path, defaulting to `results_all.json`
    pub fn store(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(|| PathBuf::from("results_all.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.template(), PathBuf::from("base/nepastoucher.xlsx"));
        assert_eq!(config.results_root(), PathBuf::from("results"));
        assert_eq!(config.components_root(), PathBuf::from("components"));
        assert_eq!(config.store(), PathBuf::from("results_all.json"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config::default();
        base.template = Some(PathBuf::from("a.xlsx"));
        base.merge(Config {
            template: Some(PathBuf::from("b.xlsx")),
            ..Default::default()
        });
        assert_eq!(base.template(), PathBuf::from("b.xlsx"));
    }

    #[test]
    fn test_merge_keeps_existing_when_other_empty() {
        let mut base = Config {
            results_root: Some(PathBuf::from("out")),
            ..Default::default()
        };
        base.merge(Config::default());
        assert_eq!(base.results_root(), PathBuf::from("out"));
    }

    #[test]
    fn test_yaml_parse() {
        let config: Config =
            serde_yml::from_str("template: t.xlsx\nresults_root: r\n").unwrap();
        assert_eq!(config.template(), PathBuf::from("t.xlsx"));
        assert_eq!(config.results_root(), PathBuf::from("r"));
        assert_eq!(config.store(), PathBuf::from("results_all.json"));
    }
}
