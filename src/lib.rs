//! Abriplan: shelter catalog configuration engine
//!
//! Generates one priced configuration workbook per sellable variant of a
//! modular shelter catalog, then harvests the computed prices and
//! bill-of-materials rows back out into a consolidated dataset.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod harvest;
pub mod workbook;
