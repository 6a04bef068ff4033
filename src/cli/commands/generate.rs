//! `abriplan generate` command - produce configuration documents

use console::style;
use miette::{miette, IntoDiagnostic, Result};

use crate::catalog::{find, FamilyRules, CATALOG};
use crate::cli::GlobalOpts;
use crate::core::Settings;
use crate::workbook::run::run_family;
use crate::workbook::WorkbookError;

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Family program code or directory name (repeatable)
    #[arg(long, short = 'F', value_name = "CODE")]
    pub family: Vec<String>,

    /// Generate every family program
    #[arg(long, conflicts_with = "family")]
    pub all: bool,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let settings = Settings::resolve(global);

    let selected: Vec<&'static FamilyRules> = if args.all {
        CATALOG.iter().collect()
    } else if args.family.is_empty() {
        return Err(miette!(
            "nothing selected: pass --family <code> (repeatable) or --all"
        ));
    } else {
        args.family
            .iter()
            .map(|name| find(name))
            .collect::<Result<_, _>>()
            .into_diagnostic()?
    };

    // Missing template is fatal for the whole run; per-variant failures are
    // reported and skipped inside run_family.
    if !settings.template.is_file() {
        return Err(WorkbookError::TemplateMissing(settings.template.clone())).into_diagnostic();
    }

    let mut total_written = 0usize;
    let mut total_failed = 0usize;

    for rules in selected {
        if !settings.quiet {
            println!(
                "{} {} ({} variants)",
                style("Generating").bold(),
                style(rules.code).cyan(),
                rules.variant_count()
            );
        }

        let verbose = settings.verbose && !settings.quiet;
        let report = run_family(&settings.template, &settings.results_root, rules, |doc| {
            if verbose {
                println!("  {} {}", style("✓").green(), doc.file_name);
            }
        })
        .into_diagnostic()?;

        for failure in &report.failures {
            eprintln!(
                "{} {} ({}): {}",
                style("!").yellow(),
                failure.file_name,
                failure.variant,
                failure.error
            );
        }

        if !settings.quiet {
            println!(
                "{} {}: {} written, {} failed -> {}",
                style("✓").green(),
                rules.code,
                report.written.len(),
                report.failures.len(),
                report.dir.display()
            );
        }

        total_written += report.written.len();
        total_failed += report.failures.len();
    }

    if !settings.quiet {
        println!(
            "\n{} {} documents written, {} failed",
            style("Done:").bold(),
            total_written,
            total_failed
        );
    }

    Ok(())
}
