// src/model/element.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- 1. CHEMICAL FAMILIES ---

/// Chemical classification bucket, used for table coloring and for
/// filtering the quiz question pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    #[serde(rename = "Alkali Metal")]
    AlkaliMetal,
    #[serde(rename = "Alkaline Earth Metal")]
    AlkalineEarthMetal,
    #[serde(rename = "Transition Metal")]
    TransitionMetal,
    #[serde(rename = "Post-Transition Metal")]
    PostTransitionMetal,
    #[serde(rename = "Metalloid")]
    Metalloid,
    #[serde(rename = "Nonmetal")]
    Nonmetal,
    #[serde(rename = "Halogen")]
    Halogen,
    #[serde(rename = "Noble Gas")]
    NobleGas,
    #[serde(rename = "Lanthanide")]
    Lanthanide,
    #[serde(rename = "Actinide")]
    Actinide,
}

/// All families, in table-legend order.
pub const ALL_FAMILIES: &[Family] = &[
    Family::AlkaliMetal,
    Family::AlkalineEarthMetal,
    Family::TransitionMetal,
    Family::PostTransitionMetal,
    Family::Metalloid,
    Family::Nonmetal,
    Family::Halogen,
    Family::NobleGas,
    Family::Lanthanide,
    Family::Actinide,
];

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::AlkaliMetal => "Alkali Metal",
            Family::AlkalineEarthMetal => "Alkaline Earth Metal",
            Family::TransitionMetal => "Transition Metal",
            Family::PostTransitionMetal => "Post-Transition Metal",
            Family::Metalloid => "Metalloid",
            Family::Nonmetal => "Nonmetal",
            Family::Halogen => "Halogen",
            Family::NobleGas => "Noble Gas",
            Family::Lanthanide => "Lanthanide",
            Family::Actinide => "Actinide",
        }
    }

    /// Case- and separator-insensitive parse, so CLI input like
    /// "noblegas", "Noble Gas" or "NOBLE-GAS" all resolve.
    pub fn parse(input: &str) -> Option<Family> {
        let folded: String = input
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        ALL_FAMILIES.iter().copied().find(|f| {
            f.label()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
                == folded
        })
    }

    /// Legend color (r, g, b). Standard print-table palette.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            Family::AlkaliMetal => (255, 102, 102),         // Red
            Family::AlkalineEarthMetal => (255, 222, 173),  // Sand
            Family::TransitionMetal => (255, 192, 192),     // Rose
            Family::PostTransitionMetal => (204, 204, 204), // Grey
            Family::Metalloid => (204, 204, 153),           // Olive
            Family::Nonmetal => (160, 255, 160),            // Green
            Family::Halogen => (255, 255, 153),             // Yellow
            Family::NobleGas => (192, 255, 255),            // Cyan
            Family::Lanthanide => (255, 191, 255),          // Pink
            Family::Actinide => (255, 153, 204),            // Magenta
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- 2. PHYSICAL STATE ---

/// Aggregate state at standard conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalState {
    Solid,
    Liquid,
    Gas,
}

impl PhysicalState {
    pub fn label(&self) -> &'static str {
        match self {
            PhysicalState::Solid => "Solid",
            PhysicalState::Liquid => "Liquid",
            PhysicalState::Gas => "Gas",
        }
    }
}

impl fmt::Display for PhysicalState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- 3. ELEMENT RECORD ---

/// One entry of the static element table. Loaded once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub symbol: String,
    pub name: String,
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub family: Family,
    pub state: PhysicalState,
    /// Configuration string with Unicode superscripts; a leading
    /// noble-gas shorthand like "[Ne] " is allowed.
    pub electron_config: String,
    #[serde(default)]
    pub isotopes: Vec<String>,
}
