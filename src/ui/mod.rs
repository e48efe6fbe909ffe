// src/ui/mod.rs

pub mod card;
pub mod quiz;
pub mod table;

// Re-exports
pub use card::element_card;
pub use quiz::run_quiz;
pub use table::print_table;
