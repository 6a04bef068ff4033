//! Per-family generation run
//!
//! Fresh-run lifecycle: the family directory is created, stale documents
//! from a prior run are removed, every variant is generated, and a summary
//! sidecar is written. A variant that fails is recorded and skipped; the run
//! carries on. Only an unreadable template aborts the whole run, since
//! nothing can be generated without it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{naming, FamilyRules};
use crate::workbook::summary::{template_fingerprint, FamilySummary};
use crate::workbook::writer::{write_configuration, WorkbookError, WrittenDocument};

/// One failed variant: its would-be file name and the underlying cause.
#[derive(Debug)]
pub struct VariantFailure {
    pub file_name: String,
    pub variant: String,
    pub error: WorkbookError,
}

/// Outcome of one family run.
#[derive(Debug)]
pub struct FamilyRunReport {
    pub dir: PathBuf,
    pub written: Vec<WrittenDocument>,
    pub failures: Vec<VariantFailure>,
}

/// Generate every variant of one family program under `results_root`.
///
/// `on_written` is called after each successful document, for progress
/// reporting.
pub fn run_family(
    template: &Path,
    results_root: &Path,
    rules: &'static FamilyRules,
    mut on_written: impl FnMut(&WrittenDocument),
) -> Result<FamilyRunReport, WorkbookError> {
    if !template.is_file() {
        return Err(WorkbookError::TemplateMissing(template.to_path_buf()));
    }

    let family_dir = results_root.join(rules.dir);
    fs::create_dir_all(&family_dir).map_err(|source| WorkbookError::Io {
        path: family_dir.clone(),
        source,
    })?;
    remove_stale_documents(&family_dir)?;

    let mut written = Vec::new();
    let mut failures = Vec::new();

    for variant in rules.variants() {
        match write_configuration(template, &family_dir, &variant) {
            Ok(doc) => {
                on_written(&doc);
                written.push(doc);
            }
            Err(error) => failures.push(VariantFailure {
                file_name: naming::file_name(&variant),
                variant: variant.to_string(),
                error,
            }),
        }
    }

    let fingerprint = template_fingerprint(template).unwrap_or_default();
    let summary = FamilySummary::new(rules, fingerprint, &written, failures.len());
    if let Err(source) = summary.write(&family_dir) {
        failures.push(VariantFailure {
            file_name: crate::workbook::summary::SUMMARY_FILE.to_string(),
            variant: format!("{} summary", rules.code),
            error: WorkbookError::Io {
                path: family_dir.join(crate::workbook::summary::SUMMARY_FILE),
                source,
            },
        });
    }

    Ok(FamilyRunReport {
        dir: family_dir,
        written,
        failures,
    })
}

/// Delete `.xlsx` leftovers from a previous run; documents are never updated
/// in place.
fn remove_stale_documents(family_dir: &Path) -> Result<(), WorkbookError> {
    for entry in fs::read_dir(family_dir).map_err(|source| WorkbookError::Io {
        path: family_dir.to_path_buf(),
        source,
    })? {
        let entry = entry.map_err(|source| WorkbookError::Io {
            path: family_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().map_or(false, |e| e == "xlsx") {
            fs::remove_file(&path).map_err(|source| WorkbookError::Io { path, source })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use crate::workbook::fields::SHEET_CONFIGURE;

    fn make_template(dir: &Path) -> PathBuf {
        let mut book = umya_spreadsheet::new_file();
        book.get_sheet_by_name_mut("Sheet1")
            .unwrap()
            .set_name(SHEET_CONFIGURE);
        let sheet = book.get_sheet_by_name_mut(SHEET_CONFIGURE).unwrap();
        sheet.get_cell_mut("B26").set_value("reserved-one");
        sheet.get_cell_mut("B27").set_value("reserved-two");
        let path = dir.join("template.xlsx");
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
        path
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let rules = find("CAR").unwrap();
        let err = run_family(
            &tmp.path().join("nope.xlsx"),
            tmp.path(),
            rules,
            |_| {},
        )
        .unwrap_err();
        assert!(matches!(err, WorkbookError::TemplateMissing(_)));
    }

    #[test]
    fn test_run_generates_every_variant_and_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let template = make_template(tmp.path());
        let results = tmp.path().join("results");
        let rules = find("MET-F-COMPACT").unwrap();

        let report = run_family(&template, &results, rules, |_| {}).unwrap();
        assert!(report.failures.is_empty(), "{:?}", report.failures);
        assert_eq!(report.written.len(), rules.variant_count());
        assert!(report.dir.join("resume.json").is_file());

        let count = std::fs::read_dir(&report.dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |x| x == "xlsx"))
            .count();
        assert_eq!(count, rules.variant_count());
    }

    #[test]
    fn test_rerun_sweeps_stale_documents() {
        let tmp = tempfile::tempdir().unwrap();
        let template = make_template(tmp.path());
        let results = tmp.path().join("results");
        let rules = find("MET-F-COMPACT").unwrap();

        let family_dir = results.join(rules.dir);
        fs::create_dir_all(&family_dir).unwrap();
        fs::write(family_dir.join("STALE-99M-N-250-G.xlsx"), b"junk").unwrap();

        let report = run_family(&template, &results, rules, |_| {}).unwrap();
        assert!(!family_dir.join("STALE-99M-N-250-G.xlsx").exists());
        assert_eq!(report.written.len(), rules.variant_count());
    }
}
