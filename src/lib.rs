// src/lib.rs

pub mod config;
pub mod model;
pub mod orbitals;
pub mod quiz;
pub mod rendering;
pub mod ui;
pub mod utils;
