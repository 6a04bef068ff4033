//! Per-family summary sidecar
//!
//! Every generation run drops a `resume.json` next to the documents it
//! wrote: timestamp, parameter domains, template fingerprint, counts, and a
//! sample of the first files. Informational only; nothing reads it back.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::catalog::FamilyRules;
use crate::workbook::writer::WrittenDocument;

/// Name of the sidecar file inside each family directory.
pub const SUMMARY_FILE: &str = "resume.json";

/// How many file records the sidecar samples.
const SAMPLE_SIZE: usize = 10;

#[derive(Debug, Serialize)]
pub struct FamilySummary {
    pub date: String,
    pub family: String,
    pub code: String,
    pub total_files: usize,
    pub failed: usize,
    pub widths: Vec<f64>,
    pub depths: Vec<f64>,
    pub trims: Vec<String>,
    pub finishes: Vec<String>,
    pub sub_variants: Vec<String>,
    pub template_sha256: String,
    pub files: Vec<FileRecord>,
}

#[derive(Debug, Serialize)]
pub struct FileRecord {
    pub file: String,
    pub width_segments: Vec<f64>,
    pub depth_segments: Vec<f64>,
}

impl FamilySummary {
    pub fn new(
        rules: &FamilyRules,
        template_sha256: String,
        written: &[WrittenDocument],
        failed: usize,
    ) -> Self {
        FamilySummary {
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            family: rules.dir.to_string(),
            code: rules.code.to_string(),
            total_files: written.len(),
            failed,
            widths: rules.widths.to_vec(),
            depths: rules.depths.to_vec(),
            trims: rules.trims.iter().map(|t| t.label().to_string()).collect(),
            finishes: rules
                .finishes
                .iter()
                .map(|f| f.label().to_string())
                .collect(),
            sub_variants: rules.sub_variants.iter().map(|s| s.to_string()).collect(),
            template_sha256,
            files: written
                .iter()
                .take(SAMPLE_SIZE)
                .map(|doc| FileRecord {
                    file: doc.file_name.clone(),
                    width_segments: doc.width_segments.clone(),
                    depth_segments: doc.depth_segments.clone(),
                })
                .collect(),
        }
    }

    /// Write the sidecar into the family directory.
    pub fn write(&self, family_dir: &Path) -> std::io::Result<()> {
        let path = family_dir.join(SUMMARY_FILE);
        let mut file = File::create(path)?;
        let json = serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string());
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")
    }
}

/// SHA-256 fingerprint of the template file, hex-encoded.
pub fn template_fingerprint(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use std::path::PathBuf;

    #[test]
    fn test_summary_samples_first_ten() {
        let rules = find("DOM").unwrap();
        let written: Vec<WrittenDocument> = (0..25)
            .map(|i| WrittenDocument {
                path: PathBuf::from(format!("doc-{i}.xlsx")),
                file_name: format!("doc-{i}.xlsx"),
                width_segments: vec![2.03],
                depth_segments: vec![2.53],
            })
            .collect();

        let summary = FamilySummary::new(rules, "abc123".into(), &written, 2);
        assert_eq!(summary.total_files, 25);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.files.len(), 10);
        assert_eq!(summary.code, "DOM");
        assert_eq!(summary.family, "domino_ouvert");
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("t.bin");
        std::fs::write(&path, b"fixed contents").unwrap();
        let a = template_fingerprint(&path).unwrap();
        let b = template_fingerprint(&path).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }
}
