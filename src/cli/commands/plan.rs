//! `abriplan plan` command - dry-run enumeration of a family's variants
//!
//! Prints what `generate` would produce without touching any file: one line
//! per variant with its file name and both decompositions. Useful for
//! sanity-checking a rules change before burning a generation run.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::catalog::{decompose_depth, decompose_width, find, naming};
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Family program code or directory name
    #[arg(long, short = 'F', value_name = "CODE")]
    pub family: String,

    /// Stop after N variants
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: PlanArgs, global: &GlobalOpts) -> Result<()> {
    let rules = find(&args.family).into_diagnostic()?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let mut shown = 0usize;
    for variant in rules.variants().take(limit) {
        let name = naming::file_name(&variant);
        if global.quiet {
            println!("{name}");
        } else {
            let widths = decompose_width(variant.width).into_diagnostic()?;
            let depths = decompose_depth(variant.depth).into_diagnostic()?;
            println!(
                "{name}  width {} -> {:?}  depth {} -> {:?}",
                variant.width, widths, variant.depth, depths
            );
        }
        shown += 1;
    }

    if !global.quiet {
        println!(
            "\n{} {} of {} variants",
            style("Planned").bold(),
            shown,
            rules.variant_count()
        );
    }
    Ok(())
}
