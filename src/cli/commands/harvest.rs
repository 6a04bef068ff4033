//! `abriplan harvest` command - extract prices and components
//!
//! Walks the results tree and pulls the computed price cells and the
//! bill-of-materials block out of every document, updating the consolidated
//! store and the per-document component sidecars. Documents whose store
//! record already carries valid prices are skipped unless `--force`.

use chrono::Local;
use console::style;
use miette::{IntoDiagnostic, Result};
use walkdir::WalkDir;

use crate::cli::GlobalOpts;
use crate::core::Settings;
use crate::harvest::components::write_sidecar;
use crate::harvest::{infer_family, read_document, ResultStore, StoreRecord};

#[derive(clap::Args, Debug)]
pub struct HarvestArgs {
    /// Re-extract documents that already have valid prices
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: HarvestArgs, global: &GlobalOpts) -> Result<()> {
    let settings = Settings::resolve(global);
    let mut store = ResultStore::load(&settings.store).into_diagnostic()?;

    let mut extracted = 0usize;
    let mut skipped = 0usize;
    let mut without_prices = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(&settings.results_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map_or(false, |x| x == "xlsx"))
    {
        let path = entry.path();
        let path_str = path.to_string_lossy().to_string();
        let file_name = entry.file_name().to_string_lossy().to_string();

        if !args.force {
            if let Some(record) = store.get(&path_str) {
                if record.has_valid_prices() {
                    skipped += 1;
                    continue;
                }
            }
        }

        let doc = match read_document(path) {
            Ok(doc) => doc,
            Err(error) => {
                failed += 1;
                eprintln!("{} {file_name}: {error}", style("!").yellow());
                continue;
            }
        };

        let family = infer_family(&path_str);
        if let Err(error) = write_sidecar(
            &settings.components_root,
            family,
            &file_name,
            &path_str,
            &doc.components,
        ) {
            eprintln!("{} {file_name}: {error}", style("!").yellow());
        }

        if !doc.has_valid_prices() {
            without_prices += 1;
            if settings.verbose {
                println!("  {} {file_name}: no computed prices yet", style("-").dim());
            }
        } else if settings.verbose {
            println!(
                "  {} {file_name}: {} / {}",
                style("✓").green(),
                doc.price_gross.unwrap_or_default(),
                doc.price_net.unwrap_or_default()
            );
        }

        store.upsert(StoreRecord {
            file: file_name,
            path: path_str,
            family: family.to_string(),
            price_gross: doc.price_gross,
            price_net: doc.price_net,
            extracted_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        extracted += 1;
    }

    store.save().into_diagnostic()?;

    if !settings.quiet {
        println!(
            "{} {} extracted ({} without prices), {} skipped, {} failed -> {}",
            style("✓").green(),
            extracted,
            without_prices,
            skipped,
            failed,
            settings.store.display()
        );
    }

    Ok(())
}
