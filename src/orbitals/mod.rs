// src/orbitals/mod.rs

pub mod decode;
pub mod harmonics;
pub mod layout;

// Re-exports for cleaner imports
pub use decode::{core_symbol, decode_config, DecodeError, OrbitalRecord};
pub use layout::{build_layout, LayoutError, LayoutOptions, OrbitalLayout, OrbitalSurface};
