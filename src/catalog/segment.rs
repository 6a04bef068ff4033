//! Catalog segment sizes and dimension decomposition
//!
//! A requested total width or depth (meters) is decomposed into the discrete
//! module lengths the pricing template understands. The totals actually sold
//! have fixed, manufacturing-approved decompositions (symmetric where the
//! layout calls for it); anything outside those tables falls back to a
//! greedy cover from the largest module down.

use thiserror::Error;

/// Manufacturable module lengths for the width axis, ascending.
pub const WIDTH_SEGMENTS: [f64; 5] = [2.03, 2.53, 4.06, 5.06, 6.09];

/// Manufacturable module lengths for the depth axis, ascending.
pub const DEPTH_SEGMENTS: [f64; 2] = [2.03, 2.53];

/// Largest total (meters) either axis will accept before being rejected as
/// nonsense input.
const MAX_TOTAL_M: f64 = 100.0;

/// Errors from dimension decomposition
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("requested {axis} must be positive, got {value} m")]
    NonPositive { axis: &'static str, value: f64 },

    #[error("requested {axis} of {value} m is outside any manufacturable range")]
    OutOfRange { axis: &'static str, value: f64 },

    #[error("unknown family code `{0}` (see `abriplan families` for valid codes)")]
    UnknownFamily(String),
}

/// Decompose a total width into catalog segment sizes.
///
/// Totals in the sold range carry fixed decompositions; larger customs fall
/// back to [`greedy`]. The table is ordered, not merely a multiset: the
/// segment order is the physical module order left to right.
pub fn decompose_width(total: f64) -> Result<Vec<f64>, CatalogError> {
    check_total("width", total)?;

    let seq: &[f64] = match cm(total) {
        200 => &[2.03],
        250 => &[2.53],
        300 => &[2.53, 2.03],
        400 | 450 => &[4.06],
        500 => &[5.06],
        600 => &[6.09],
        700 => &[2.53, 2.03, 2.53],
        800 => &[4.06, 4.06],
        900 => &[2.53, 4.06, 2.53],
        1000 => &[5.06, 5.06],
        1100 => &[2.53, 6.09, 2.53],
        1200 => &[6.09, 6.09],
        1300 => &[4.06, 5.06, 4.06],
        1400 => &[5.06, 4.06, 5.06],
        _ => return Ok(greedy(total, &WIDTH_SEGMENTS)),
    };
    Ok(seq.to_vec())
}

/// Decompose a total depth into catalog segment sizes.
///
/// Shallow canopies (2 / 2.5 m) are a single module; deeper layouts follow
/// the fixed table, symmetric where the door placement requires it (9 m is
/// `2.53 2.03 2.03 2.53`, never the greedy cover).
pub fn decompose_depth(total: f64) -> Result<Vec<f64>, CatalogError> {
    check_total("depth", total)?;

    let seq: &[f64] = match cm(total) {
        200 => &[2.03],
        250 => &[2.53],
        400 => &[2.03, 2.03],
        450 => &[2.03, 2.53],
        500 => &[2.53, 2.53],
        600 => &[2.03, 2.03, 2.03],
        650 => &[2.03, 2.03, 2.53],
        700 => &[2.03, 2.53, 2.53],
        800 => &[2.03, 2.03, 2.03, 2.03],
        900 => &[2.53, 2.03, 2.03, 2.53],
        1000 => &[2.03, 2.03, 2.03, 2.03, 2.03],
        1100 => &[2.53, 2.03, 2.03, 2.03, 2.03],
        1200 => &[2.03, 2.03, 2.03, 2.03, 2.03, 2.03],
        _ => return Ok(greedy(total, &DEPTH_SEGMENTS)),
    };
    Ok(seq.to_vec())
}

/// The depth module a door panel is sized against: 2.53 when the layout
/// contains any 2.5 m module, otherwise 2.03.
pub fn dominant_depth_segment(depths: &[f64]) -> f64 {
    if depths.iter().any(|d| cm(*d) == 253) {
        2.53
    } else {
        2.03
    }
}

/// Greedy cover from the largest segment down.
///
/// Repeatedly subtracts the largest segment that still fits; once the
/// remainder drops below the smallest segment (but is still above the 0.1 m
/// tolerance) one smallest segment is emitted and the cover stops. The
/// result may overshoot the requested total by up to one segment; callers
/// relying on exact totals must stay inside the fixed tables.
fn greedy(total: f64, segments: &[f64]) -> Vec<f64> {
    let mut result = Vec::new();
    let mut rest = total;

    while rest > 0.1 {
        match segments.iter().rev().find(|s| rest >= **s) {
            Some(seg) => {
                result.push(*seg);
                rest -= *seg;
            }
            None => {
                result.push(segments[0]);
                rest = 0.0;
            }
        }
    }

    result
}

fn check_total(axis: &'static str, total: f64) -> Result<(), CatalogError> {
    if !total.is_finite() || total <= 0.0 {
        return Err(CatalogError::NonPositive { axis, value: total });
    }
    if total > MAX_TOTAL_M {
        return Err(CatalogError::OutOfRange { axis, value: total });
    }
    Ok(())
}

/// Integer centimeter key for table lookups, immune to float comparison.
fn cm(meters: f64) -> i64 {
    (meters * 100.0).round() as i64
}
