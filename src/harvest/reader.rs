//! Reading computed results out of a generated document
//!
//! The calculation engine (driven outside this tool) recalculates and
//! persists formulas; this reader picks up whatever cached values the engine
//! left behind. A document that was never recalculated simply yields no
//! valid prices; that is a reportable state, not an error.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::workbook::fields::{
    BOM_COLS, BOM_ROW_FIRST, BOM_ROW_LAST, PRICE_DISCOUNT, PRICE_GROSS, PRICE_NET, SHEET_PRICING,
};

/// Errors in the harvest layer
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("failed to open workbook {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("sheet `{sheet}` missing from {path:?}")]
    SheetMissing { sheet: &'static str, path: PathBuf },

    #[error("failed to write {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store file {path:?}: {message}")]
    Store { path: PathBuf, message: String },
}

/// Prices and bill-of-materials block read from one document.
#[derive(Debug)]
pub struct HarvestedDocument {
    pub price_gross: Option<f64>,
    pub price_discount: Option<f64>,
    pub price_net: Option<f64>,
    /// BOM block, row-major. Numbers stay numbers, text stays text, empty
    /// cells are null.
    pub components: Vec<Vec<Value>>,
}

impl HarvestedDocument {
    /// Both headline prices present and positive.
    pub fn has_valid_prices(&self) -> bool {
        self.price_gross.is_some() && self.price_net.is_some()
    }

    /// At least one non-empty cell in the BOM block.
    pub fn has_components(&self) -> bool {
        self.components
            .iter()
            .any(|row| row.iter().any(|cell| !cell.is_null()))
    }
}

/// Read the pricing sheet of one generated document.
pub fn read_document(path: &Path) -> Result<HarvestedDocument, HarvestError> {
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| HarvestError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet = book
        .get_sheet_by_name(SHEET_PRICING)
        .ok_or(HarvestError::SheetMissing {
            sheet: SHEET_PRICING,
            path: path.to_path_buf(),
        })?;

    let price_gross = parse_price(&sheet.get_value(PRICE_GROSS));
    let price_discount = parse_price(&sheet.get_value(PRICE_DISCOUNT));
    let price_net = parse_price(&sheet.get_value(PRICE_NET));

    let mut components = Vec::with_capacity((BOM_ROW_LAST - BOM_ROW_FIRST + 1) as usize);
    for row in BOM_ROW_FIRST..=BOM_ROW_LAST {
        let cells = BOM_COLS
            .iter()
            .map(|col| cell_value(sheet.get_value(&*format!("{col}{row}"))))
            .collect();
        components.push(cells);
    }

    Ok(HarvestedDocument {
        price_gross,
        price_discount,
        price_net,
        components,
    })
}

/// A price is valid when it parses as a number greater than zero.
fn parse_price(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value > 0.0 {
        Some(value)
    } else {
        None
    }
}

fn cell_value(raw: String) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    match raw.parse::<f64>() {
        Ok(n) => serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::String(raw)),
        Err(_) => Value::String(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_rules() {
        assert_eq!(parse_price("1234.5"), Some(1234.5));
        assert_eq!(parse_price(" 99 "), Some(99.0));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("#N/A"), None);
    }

    #[test]
    fn test_cell_value_types() {
        assert_eq!(cell_value(String::new()), Value::Null);
        assert_eq!(cell_value("12.5".into()), serde_json::json!(12.5));
        assert_eq!(cell_value("Roof panel".into()), Value::String("Roof panel".into()));
    }

    #[test]
    fn test_read_document_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("doc.xlsx");

        let mut book = umya_spreadsheet::new_file();
        book.get_sheet_by_name_mut("Sheet1")
            .unwrap()
            .set_name(SHEET_PRICING);
        let sheet = book.get_sheet_by_name_mut(SHEET_PRICING).unwrap();
        sheet.get_cell_mut(PRICE_GROSS).set_value_number(2450.0);
        sheet.get_cell_mut(PRICE_NET).set_value_number(2205.0);
        sheet.get_cell_mut("A2").set_value("Post 80x80");
        sheet.get_cell_mut("E2").set_value_number(4.0);
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.price_gross, Some(2450.0));
        assert_eq!(doc.price_net, Some(2205.0));
        assert!(doc.has_valid_prices());
        assert!(doc.has_components());
        assert_eq!(doc.components.len(), 109);
        assert_eq!(doc.components[0][0], Value::String("Post 80x80".into()));
        assert_eq!(doc.components[0][4], serde_json::json!(4.0));
        assert_eq!(doc.components[1][0], Value::Null);
    }

    #[test]
    fn test_unrecalculated_document_has_no_prices() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("stale.xlsx");

        let mut book = umya_spreadsheet::new_file();
        book.get_sheet_by_name_mut("Sheet1")
            .unwrap()
            .set_name(SHEET_PRICING);
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let doc = read_document(&path).unwrap();
        assert!(!doc.has_valid_prices());
        assert!(!doc.has_components());
    }
}
