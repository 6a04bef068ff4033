//! `abriplan export` command - consolidated CSV price list

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::Settings;
use crate::harvest::ResultStore;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let settings = Settings::resolve(global);
    let store = ResultStore::load(&settings.store).into_diagnostic()?;

    match &args.out {
        Some(path) => {
            let writer = csv::Writer::from_path(path).into_diagnostic()?;
            write_records(writer, &store)?;
            if !settings.quiet {
                println!(
                    "{} {} records -> {}",
                    style("✓").green(),
                    store.len(),
                    path.display()
                );
            }
        }
        None => {
            let writer = csv::Writer::from_writer(std::io::stdout());
            write_records(writer, &store)?;
        }
    }

    Ok(())
}

fn write_records<W: std::io::Write>(mut writer: csv::Writer<W>, store: &ResultStore) -> Result<()> {
    writer
        .write_record(["file", "family", "price_gross", "price_net", "extracted_at"])
        .into_diagnostic()?;

    for record in store.records() {
        writer
            .write_record([
                record.file.as_str(),
                record.family.as_str(),
                &render_price(record.price_gross),
                &render_price(record.price_net),
                record.extracted_at.as_str(),
            ])
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

fn render_price(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_price() {
        assert_eq!(render_price(Some(2450.5)), "2450.5");
        assert_eq!(render_price(None), "");
    }
}
