//! Configuration writer
//!
//! Duplicates the pricing template and writes one variant's full
//! configuration into the copy: dimension decompositions, options, wall
//! flags, cladding removal, and the door/hardware region per the family's
//! door rule. The manufacturer-reserved cells are snapshotted before
//! mutation and verified before save; a mismatch fails the variant rather
//! than shipping a corrupted document.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use umya_spreadsheet::Worksheet;

use crate::catalog::family::{
    door_for_width, DoorRule, ENTRANCE_DOUBLE_SWING, LOCK_EURO_CYLINDER,
};
use crate::catalog::naming;
use crate::catalog::segment::{
    decompose_depth, decompose_width, dominant_depth_segment, CatalogError,
};
use crate::catalog::Variant;
use crate::workbook::fields::{
    depth_cell, width_cell, DEPTH_CELL_COUNT, DOOR_COLS, DOOR_COUNT, DOOR_ROW_FIRST,
    DOOR_ROW_LAST, DOOR_SEGMENT, ENTRANCE_TYPE, FINISH, LOCK_KIT, LOCK_KIT_SPILL, MESH_FINISH,
    REMOVE_CLADDING, RESERVED_CELLS, SHEET_CONFIGURE, TRIM, WALL_BOTTOM, WALL_LEFT,
    WALL_MATERIAL, WALL_RIGHT, WALL_TOP, WIDTH_CELL_COUNT, WILDCARD,
};

/// Errors while producing one configuration document
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("template not found: {0:?}")]
    TemplateMissing(PathBuf),

    #[error("failed to copy template to {path:?}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open workbook {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("sheet `{0}` missing from template")]
    SheetMissing(&'static str),

    #[error("{axis} decomposition needs {needed} cells but the sheet holds {capacity}")]
    RegionOverflow {
        axis: &'static str,
        needed: usize,
        capacity: usize,
    },

    #[error("reserved cell {cell} was modified (was `{before}`, now `{after}`)")]
    ReservedCellModified {
        cell: &'static str,
        before: String,
        after: String,
    },

    #[error("failed to save workbook {path:?}: {message}")]
    Save { path: PathBuf, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Record of one successfully written configuration document.
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub width_segments: Vec<f64>,
    pub depth_segments: Vec<f64>,
}

/// Duplicate the template and write one variant's configuration into it.
pub fn write_configuration(
    template: &Path,
    out_dir: &Path,
    variant: &Variant,
) -> Result<WrittenDocument, WorkbookError> {
    let widths = decompose_width(variant.width)?;
    let depths = decompose_depth(variant.depth)?;
    if widths.len() > WIDTH_CELL_COUNT {
        return Err(WorkbookError::RegionOverflow {
            axis: "width",
            needed: widths.len(),
            capacity: WIDTH_CELL_COUNT,
        });
    }
    if depths.len() > DEPTH_CELL_COUNT {
        return Err(WorkbookError::RegionOverflow {
            axis: "depth",
            needed: depths.len(),
            capacity: DEPTH_CELL_COUNT,
        });
    }

    let file_name = naming::file_name(variant);
    let path = out_dir.join(&file_name);
    fs::copy(template, &path).map_err(|source| WorkbookError::Copy {
        path: path.clone(),
        source,
    })?;

    let mut book = umya_spreadsheet::reader::xlsx::read(&path).map_err(|e| WorkbookError::Open {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let sheet = book
        .get_sheet_by_name_mut(SHEET_CONFIGURE)
        .ok_or(WorkbookError::SheetMissing(SHEET_CONFIGURE))?;

    let reserved_before: Vec<String> = RESERVED_CELLS.iter().map(|c| sheet.get_value(*c)).collect();

    apply_configuration(sheet, variant, &widths, &depths);

    for (cell, before) in RESERVED_CELLS.iter().zip(&reserved_before) {
        let after = sheet.get_value(*cell);
        if after != *before {
            return Err(WorkbookError::ReservedCellModified {
                cell: *cell,
                before: before.clone(),
                after,
            });
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, &path).map_err(|e| WorkbookError::Save {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(WrittenDocument {
        path,
        file_name,
        width_segments: widths,
        depth_segments: depths,
    })
}

/// Write the full configuration region for a variant into the input sheet.
///
/// Exposed for tests; callers go through [`write_configuration`], which adds
/// the template duplication and the reserved-cell contract check.
pub fn apply_configuration(
    sheet: &mut Worksheet,
    variant: &Variant,
    widths: &[f64],
    depths: &[f64],
) {
    // Wildcard both dimension regions, then overwrite the first N cells of
    // each axis with the decomposed segments. Cells past the decomposition
    // stay wildcarded; the template reads those as unused.
    for i in 0..WIDTH_CELL_COUNT {
        set_text(sheet, &width_cell(i), WILDCARD);
    }
    for i in 0..DEPTH_CELL_COUNT {
        set_text(sheet, &depth_cell(i), WILDCARD);
    }
    for (i, w) in widths.iter().enumerate() {
        set_number(sheet, &width_cell(i), *w);
    }
    for (i, d) in depths.iter().enumerate() {
        set_number(sheet, &depth_cell(i), *d);
    }

    let rules = variant.rules;
    set_text(sheet, FINISH, variant.finish.label());
    set_text(sheet, TRIM, variant.trim.label());
    set_text(sheet, WALL_MATERIAL, rules.wall_material.label());
    if let Some(mesh) = rules.mesh_finish {
        set_text(sheet, MESH_FINISH, mesh);
    }
    set_text(sheet, WALL_TOP, yes_no(rules.walls.top));
    set_text(sheet, WALL_RIGHT, yes_no(rules.walls.right));
    set_text(sheet, WALL_BOTTOM, yes_no(rules.walls.bottom));
    set_text(sheet, WALL_LEFT, yes_no(rules.walls.left));
    set_text(sheet, REMOVE_CLADDING, yes_no(rules.remove_cladding));

    match rules.doors {
        DoorRule::None => {
            for row in DOOR_ROW_FIRST..=DOOR_ROW_LAST {
                for col in DOOR_COLS {
                    clear(sheet, &format!("{col}{row}"));
                }
            }
            clear(sheet, LOCK_KIT);
            clear(sheet, LOCK_KIT_SPILL);
        }
        DoorRule::PresetDepthMatched => {
            // The template pre-configures the door block; only tidy
            // whitespace-only cells below the entrance row and size the door
            // panel against the dominant depth module.
            for row in (DOOR_ROW_FIRST + 1)..=DOOR_ROW_LAST {
                for col in DOOR_COLS {
                    let addr = format!("{col}{row}");
                    let value = sheet.get_value(&*addr);
                    if !value.is_empty() && value.trim().is_empty() {
                        clear(sheet, &addr);
                    }
                }
            }
            set_number(sheet, DOOR_SEGMENT, dominant_depth_segment(depths));
        }
        DoorRule::WidthTable(table) => {
            let (segment, count) = door_for_width(table, variant.width);
            set_text(sheet, ENTRANCE_TYPE, ENTRANCE_DOUBLE_SWING);
            set_number(sheet, DOOR_SEGMENT, segment);
            set_number(sheet, DOOR_COUNT, f64::from(count));
            set_text(sheet, LOCK_KIT, LOCK_EURO_CYLINDER);
        }
    }
}

fn set_text(sheet: &mut Worksheet, cell: &str, value: &str) {
    sheet.get_cell_mut(cell).set_value(value);
}

fn set_number(sheet: &mut Worksheet, cell: &str, value: f64) {
    sheet.get_cell_mut(cell).set_value_number(value);
}

fn clear(sheet: &mut Worksheet, cell: &str) {
    sheet.get_cell_mut(cell).set_value("");
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
