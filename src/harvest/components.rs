//! Per-document component sidecars
//!
//! The bill-of-materials block of each document is written to its own JSON
//! sidecar under the components root, one subdirectory per family. A sidecar
//! holding real rows is never overwritten by an empty re-read: the engine
//! may not have recalculated the document since, and the old rows are better
//! than none.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::harvest::reader::HarvestError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentSidecar {
    pub source_file: String,
    pub source_path: String,
    pub extracted_at: String,
    pub components: Vec<Vec<Value>>,
}

/// Write (or preserve) the component sidecar for one document.
///
/// Returns the sidecar path, whether or not it was rewritten.
pub fn write_sidecar(
    components_root: &Path,
    family: &str,
    document_file: &str,
    document_path: &str,
    components: &[Vec<Value>],
) -> Result<PathBuf, HarvestError> {
    let dir = components_root.join(family);
    fs::create_dir_all(&dir).map_err(|source| HarvestError::Io {
        path: dir.clone(),
        source,
    })?;

    let stem = document_file.trim_end_matches(".xlsx");
    let path = dir.join(format!("{stem}.json"));

    let has_rows = components
        .iter()
        .any(|row| row.iter().any(|cell| !cell.is_null()));
    if !has_rows && path.is_file() {
        return Ok(path);
    }

    let sidecar = ComponentSidecar {
        source_file: document_file.to_string(),
        source_path: document_path.to_string(),
        extracted_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        components: components.to_vec(),
    };
    let json = serde_json::to_string_pretty(&sidecar).map_err(|e| HarvestError::Store {
        path: path.clone(),
        message: e.to_string(),
    })?;
    fs::write(&path, json.as_bytes()).map_err(|source| HarvestError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
