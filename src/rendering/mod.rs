// src/rendering/mod.rs

pub mod batch;
pub mod orbital_plot;

// Re-export specific functions to keep the API clean for the rest of the app
pub use batch::{render_all, render_element, BatchOptions, BatchReport};
pub use orbital_plot::{draw_orbital_diagram, image_path, render_orbitals};
