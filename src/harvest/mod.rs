//! Harvest layer: reading computed prices and components back out

pub mod components;
pub mod reader;
pub mod store;

pub use reader::{read_document, HarvestError, HarvestedDocument};
pub use store::{infer_family, ResultStore, StoreRecord};
