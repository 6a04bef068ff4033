//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, export::ExportArgs, families::FamiliesArgs,
    generate::GenerateArgs, harvest::HarvestArgs, plan::PlanArgs,
};

#[derive(Parser)]
#[command(name = "abriplan")]
#[command(author, version, about = "Shelter catalog configuration generator")]
#[command(
    long_about = "Generates priced configuration workbooks for every sellable variant of a modular shelter catalog, and harvests the computed prices back out into a consolidated dataset."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Pricing template workbook (default: from config)
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,

    /// Root directory for generated documents
    #[arg(long, global = true)]
    pub results_root: Option<PathBuf>,

    /// Root directory for component sidecars
    #[arg(long, global = true)]
    pub components_root: Option<PathBuf>,

    /// Consolidated result store file
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate configuration documents for family programs
    Generate(GenerateArgs),

    /// List the catalog rules table
    Families(FamiliesArgs),

    /// Dry-run enumeration of a family's variants
    Plan(PlanArgs),

    /// Extract prices and components from generated documents
    Harvest(HarvestArgs),

    /// Export the consolidated store as CSV
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
