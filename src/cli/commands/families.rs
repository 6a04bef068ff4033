//! `abriplan families` command - show the catalog rules table

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::catalog::CATALOG;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct FamiliesArgs {
    /// Only print program codes, one per line
    #[arg(long)]
    pub codes: bool,
}

pub fn run(args: FamiliesArgs, _global: &GlobalOpts) -> Result<()> {
    if args.codes {
        for rules in CATALOG.iter() {
            println!("{}", rules.code);
        }
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record([
        "Code",
        "Directory",
        "Closure",
        "Widths (m)",
        "Depths (m)",
        "Material",
        "Trims",
        "Variants",
    ]);

    for rules in CATALOG.iter() {
        builder.push_record([
            rules.code.to_string(),
            rules.dir.to_string(),
            rules.closure.to_string(),
            domain(rules.widths),
            domain(rules.depths),
            rules.wall_material.label().to_string(),
            rules
                .trims
                .iter()
                .map(|t| t.code())
                .collect::<Vec<_>>()
                .join("/"),
            rules.variant_count().to_string(),
        ]);
    }

    println!("{}", builder.build().with(Style::markdown()));
    Ok(())
}

/// Compact domain rendering: `2-14 (13)` for long lists, the values
/// themselves for short ones.
fn domain(values: &[f64]) -> String {
    if values.len() > 4 {
        format!(
            "{}-{} ({})",
            values.first().unwrap(),
            values.last().unwrap(),
            values.len()
        )
    } else {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_rendering() {
        assert_eq!(domain(&[2.0, 2.5]), "2, 2.5");
        assert_eq!(domain(&[4.0, 5.0, 6.0, 7.0, 8.0]), "4-8 (5)");
    }
}
