//! Consolidated result store
//!
//! One flat JSON file collecting the extracted prices of every generated
//! document, keyed by document path. Updates are read-modify-write against
//! an explicit store object: load, upsert, save. Saves go through a
//! temporary file and an atomic rename so a crash never leaves a truncated
//! store behind. Records that already carry valid prices are left alone
//! unless the caller forces re-extraction.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::catalog::CATALOG;
use crate::harvest::reader::HarvestError;

/// One extracted document in the consolidated store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    pub file: String,
    pub path: String,
    pub family: String,
    pub price_gross: Option<f64>,
    pub price_net: Option<f64>,
    pub extracted_at: String,
}

impl StoreRecord {
    /// Both headline prices present; such a record is not re-extracted on
    /// later runs unless forced.
    pub fn has_valid_prices(&self) -> bool {
        self.price_gross.is_some() && self.price_net.is_some()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    date: String,
    total: usize,
    results: Vec<StoreRecord>,
}

/// Path-keyed store of extraction results.
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    records: BTreeMap<String, StoreRecord>,
}

impl ResultStore {
    /// Load the store, or start empty when the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self, HarvestError> {
        let records = if path.is_file() {
            let contents = fs::read_to_string(path).map_err(|source| HarvestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let file: StoreFile =
                serde_json::from_str(&contents).map_err(|e| HarvestError::Store {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            file.results
                .into_iter()
                .map(|r| (r.path.clone(), r))
                .collect()
        } else {
            BTreeMap::new()
        };

        Ok(ResultStore {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, document_path: &str) -> Option<&StoreRecord> {
        self.records.get(document_path)
    }

    /// Insert or replace the record for a document.
    pub fn upsert(&mut self, record: StoreRecord) {
        self.records.insert(record.path.clone(), record);
    }

    /// Records sorted by document path.
    pub fn records(&self) -> impl Iterator<Item = &StoreRecord> {
        self.records.values()
    }

    /// Persist the store: temp file in the same directory, then rename.
    pub fn save(&self) -> Result<(), HarvestError> {
        let file = StoreFile {
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total: self.records.len(),
            results: self.records.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| HarvestError::Store {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).map_err(|source| HarvestError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| HarvestError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Infer the family program from a document path by matching the reserved
/// directory vocabulary, longest token first (`domino_ouvert_compact` must
/// win over `domino_ouvert`). Unknown paths land in `autre`.
pub fn infer_family(path: &str) -> &'static str {
    let mut dirs: Vec<&'static str> = CATALOG.iter().map(|r| r.dir).collect();
    dirs.sort_by_key(|d| std::cmp::Reverse(d.len()));
    dirs.into_iter()
        .find(|dir| path.contains(dir))
        .unwrap_or("autre")
}
