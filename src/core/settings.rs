//! Resolved run settings
//!
//! The layered [`Config`](crate::core::Config) merged with the CLI's global
//! flags. Commands take a `Settings` and never look at config files or the
//! environment themselves.

use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::Config;

/// Effective paths and verbosity for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub template: PathBuf,
    pub results_root: PathBuf,
    pub components_root: PathBuf,
    pub store: PathBuf,
    pub quiet: bool,
    pub verbose: bool,
}

impl Settings {
    /// Resolve: built-in defaults < config layers < CLI flags.
    pub fn resolve(global: &GlobalOpts) -> Self {
        let config = Config::load();
        Settings {
            template: global.template.clone().unwrap_or_else(|| config.template()),
            results_root: global
                .results_root
                .clone()
                .unwrap_or_else(|| config.results_root()),
            components_root: global
                .components_root
                .clone()
                .unwrap_or_else(|| config.components_root()),
            store: global.store.clone().unwrap_or_else(|| config.store()),
            quiet: global.quiet,
            verbose: global.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let global = GlobalOpts {
            template: Some(PathBuf::from("override.xlsx")),
            results_root: None,
            components_root: None,
            store: None,
            quiet: false,
            verbose: false,
        };
        let settings = Settings::resolve(&global);
        assert_eq!(settings.template, PathBuf::from("override.xlsx"));
    }
}
