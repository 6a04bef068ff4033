//! Catalog domain: segment sizes, family rules, variants, file names

pub mod family;
pub mod naming;
pub mod segment;
pub mod variant;

pub use family::{find, FamilyRules, CATALOG};
pub use segment::{decompose_depth, decompose_width, CatalogError};
pub use variant::Variant;
