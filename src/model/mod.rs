//src/model/mod.rs
pub mod dataset;
pub mod element;
pub mod production;

// Re-exports for cleaner imports
pub use dataset::{dataset, DatasetError, ElementSet, GridPosition};
pub use element::{Element, Family, PhysicalState, ALL_FAMILIES};
pub use production::{ProductionMethod, Reaction};
