//! Command implementations, one module per subcommand

pub mod completions;
pub mod export;
pub mod families;
pub mod generate;
pub mod harvest;
pub mod plan;
