pub mod catalog;
pub mod engine;
pub mod summary;
pub mod views;

pub use catalog::{BuildingId, BuildingSpec, CatalogError};
pub use engine::{ConstructionEngine, Track, FAST_TRACK_MS, SLOW_TRACK_MS};
