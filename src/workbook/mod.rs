//! Workbook layer: template field map, configuration writer, family runs

pub mod fields;
pub mod run;
pub mod summary;
pub mod writer;

pub use run::{run_family, FamilyRunReport};
pub use writer::{write_configuration, WorkbookError, WrittenDocument};
