//! Core infrastructure: layered configuration and resolved run settings

pub mod config;
pub mod settings;

pub use config::Config;
pub use settings::Settings;
