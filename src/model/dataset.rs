// src/model/dataset.rs

use crate::model::element::{Element, Family};
use crate::model::production::ProductionMethod;
use crate::orbitals::decode;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

// Embedded datasets, parsed and validated once on first access.
const ELEMENTS_JSON: &str = include_str!("../../assets/elements.json");
const POSITIONS_JSON: &str = include_str!("../../assets/positions.json");
const PRODUCTION_JSON: &str = include_str!("../../assets/production_methods.json");

pub const ELEMENT_COUNT: usize = 118;

/// Display grid: 7 periods, one spacer row, and the two f-block rows.
pub const TABLE_ROWS: usize = 10;
pub const TABLE_COLS: usize = 18;

// --- 1. ERROR HANDLING ---

#[derive(Debug, Clone)]
pub enum DatasetError {
    Parse(String),
    MissingElements { found: usize },
    MalformedSymbol(String),
    EmptyName(String),
    AtomicNumberRange { symbol: String, z: u32 },
    NonPositiveMass { symbol: String, mass: f64 },
    DuplicateSymbol(String),
    DuplicateAtomicNumber(u32),
    BadConfiguration { symbol: String, error: decode::DecodeError },
    UnknownCoreSymbol { symbol: String, core: String },
    ElectronCountMismatch { symbol: String, expected: u32, decoded: f64 },
    UnknownPositionSymbol(String),
    PositionOutOfRange { symbol: String, row: usize, col: usize },
    DuplicatePosition { row: usize, col: usize, first: String, second: String },
    UnknownProductionSymbol(String),
    EmptyProduction(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::Parse(msg) => write!(f, "Dataset parse error: {}", msg),
            DatasetError::MissingElements { found } => {
                write!(f, "Expected {} elements, found {}", ELEMENT_COUNT, found)
            }
            DatasetError::MalformedSymbol(s) => {
                write!(f, "Malformed element symbol {:?}", s)
            }
            DatasetError::EmptyName(s) => write!(f, "Element {} has an empty name", s),
            DatasetError::AtomicNumberRange { symbol, z } => {
                write!(f, "Element {} has atomic number {} outside 1..=118", symbol, z)
            }
            DatasetError::NonPositiveMass { symbol, mass } => {
                write!(f, "Element {} has non-positive mass {}", symbol, mass)
            }
            DatasetError::DuplicateSymbol(s) => write!(f, "Duplicate element symbol {}", s),
            DatasetError::DuplicateAtomicNumber(z) => {
                write!(f, "Duplicate atomic number {}", z)
            }
            DatasetError::BadConfiguration { symbol, error } => {
                write!(f, "Element {} has a bad electron configuration: {}", symbol, error)
            }
            DatasetError::UnknownCoreSymbol { symbol, core } => {
                write!(f, "Element {} references unknown core [{}]", symbol, core)
            }
            DatasetError::ElectronCountMismatch {
                symbol,
                expected,
                decoded,
            } => write!(
                f,
                "Element {} configuration accounts for {} electrons, expected {}",
                symbol, decoded, expected
            ),
            DatasetError::UnknownPositionSymbol(s) => {
                write!(f, "Grid position refers to unknown symbol {}", s)
            }
            DatasetError::PositionOutOfRange { symbol, row, col } => write!(
                f,
                "Grid position ({}, {}) for {} is outside the {}x{} table",
                row, col, symbol, TABLE_ROWS, TABLE_COLS
            ),
            DatasetError::DuplicatePosition {
                row,
                col,
                first,
                second,
            } => write!(
                f,
                "Grid cell ({}, {}) assigned to both {} and {}",
                row, col, first, second
            ),
            DatasetError::UnknownProductionSymbol(s) => {
                write!(f, "Production entry refers to unknown symbol {}", s)
            }
            DatasetError::EmptyProduction(s) => {
                write!(f, "Production entry for {} is empty", s)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

// --- 2. GRID POSITION ---

/// Display-layout cell of a symbol; unrelated to chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

// --- 3. ELEMENT SET ---

/// The validated element table with its position and production maps.
/// Construction checks every record so later lookups cannot surprise.
#[derive(Debug)]
pub struct ElementSet {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
    positions: HashMap<String, GridPosition>,
    production: HashMap<String, ProductionMethod>,
}

impl ElementSet {
    /// Parse and validate the three dataset files.
    pub(crate) fn from_json(
        elements_json: &str,
        positions_json: &str,
        production_json: &str,
    ) -> Result<Self, DatasetError> {
        let mut elements: Vec<Element> = serde_json::from_str(elements_json)
            .map_err(|e| DatasetError::Parse(format!("elements: {}", e)))?;
        let raw_positions: HashMap<String, [usize; 2]> = serde_json::from_str(positions_json)
            .map_err(|e| DatasetError::Parse(format!("positions: {}", e)))?;
        let raw_production: HashMap<String, ProductionMethod> =
            serde_json::from_str(production_json)
                .map_err(|e| DatasetError::Parse(format!("production methods: {}", e)))?;

        // Record-level checks and duplicate detection
        let mut seen_symbols = HashSet::new();
        let mut seen_numbers = HashSet::new();
        for e in &elements {
            if !is_valid_symbol(&e.symbol) {
                return Err(DatasetError::MalformedSymbol(e.symbol.clone()));
            }
            if e.name.trim().is_empty() {
                return Err(DatasetError::EmptyName(e.symbol.clone()));
            }
            if !(1..=ELEMENT_COUNT as u32).contains(&e.atomic_number) {
                return Err(DatasetError::AtomicNumberRange {
                    symbol: e.symbol.clone(),
                    z: e.atomic_number,
                });
            }
            if e.atomic_mass <= 0.0 {
                return Err(DatasetError::NonPositiveMass {
                    symbol: e.symbol.clone(),
                    mass: e.atomic_mass,
                });
            }
            if !seen_symbols.insert(e.symbol.to_ascii_lowercase()) {
                return Err(DatasetError::DuplicateSymbol(e.symbol.clone()));
            }
            if !seen_numbers.insert(e.atomic_number) {
                return Err(DatasetError::DuplicateAtomicNumber(e.atomic_number));
            }
        }

        elements.sort_by_key(|e| e.atomic_number);
        let by_symbol: HashMap<String, usize> = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol.to_ascii_lowercase(), i))
            .collect();

        // Every configuration must decode, and together with its core
        // must account for exactly the element's electrons.
        for e in &elements {
            let records =
                decode::decode_config(&e.electron_config).map_err(|error| {
                    DatasetError::BadConfiguration {
                        symbol: e.symbol.clone(),
                        error,
                    }
                })?;
            let mut total: f64 = records.iter().map(|r| r.electron_count).sum();
            if let Some(core) = decode::core_symbol(&e.electron_config) {
                match by_symbol.get(&core.to_ascii_lowercase()) {
                    Some(&idx) => total += elements[idx].atomic_number as f64,
                    None => {
                        return Err(DatasetError::UnknownCoreSymbol {
                            symbol: e.symbol.clone(),
                            core: core.to_string(),
                        })
                    }
                }
            }
            if (total - e.atomic_number as f64).abs() > 1e-6 {
                return Err(DatasetError::ElectronCountMismatch {
                    symbol: e.symbol.clone(),
                    expected: e.atomic_number,
                    decoded: total,
                });
            }
        }

        // Positions must name known symbols and fit the grid, one per cell
        let mut positions = HashMap::new();
        let mut cells: HashMap<(usize, usize), String> = HashMap::new();
        for (sym, [row, col]) in raw_positions {
            if !by_symbol.contains_key(&sym.to_ascii_lowercase()) {
                return Err(DatasetError::UnknownPositionSymbol(sym));
            }
            if row >= TABLE_ROWS || col >= TABLE_COLS {
                return Err(DatasetError::PositionOutOfRange { symbol: sym, row, col });
            }
            if let Some(first) = cells.insert((row, col), sym.clone()) {
                return Err(DatasetError::DuplicatePosition {
                    row,
                    col,
                    first,
                    second: sym,
                });
            }
            positions.insert(sym.to_ascii_lowercase(), GridPosition { row, col });
        }

        // Production entries must name known symbols and carry data
        let mut production = HashMap::new();
        for (sym, methods) in raw_production {
            if !by_symbol.contains_key(&sym.to_ascii_lowercase()) {
                return Err(DatasetError::UnknownProductionSymbol(sym));
            }
            if methods.is_empty() {
                return Err(DatasetError::EmptyProduction(sym));
            }
            production.insert(sym.to_ascii_lowercase(), methods);
        }

        Ok(Self {
            elements,
            by_symbol,
            positions,
            production,
        })
    }

    fn load_embedded() -> Result<Self, DatasetError> {
        let set = Self::from_json(ELEMENTS_JSON, POSITIONS_JSON, PRODUCTION_JSON)?;
        if set.elements.len() != ELEMENT_COUNT {
            return Err(DatasetError::MissingElements {
                found: set.elements.len(),
            });
        }
        Ok(set)
    }

    /// All elements, ordered by atomic number.
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Case-insensitive symbol lookup. Unknown symbols are None, never
    /// an error.
    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol
            .get(&symbol.to_ascii_lowercase())
            .map(|&i| &self.elements[i])
    }

    pub fn by_atomic_number(&self, z: u32) -> Option<&Element> {
        self.elements
            .binary_search_by_key(&z, |e| e.atomic_number)
            .ok()
            .map(|i| &self.elements[i])
    }

    pub fn position(&self, symbol: &str) -> Option<GridPosition> {
        self.positions.get(&symbol.to_ascii_lowercase()).copied()
    }

    pub fn production(&self, symbol: &str) -> Option<&ProductionMethod> {
        self.production.get(&symbol.to_ascii_lowercase())
    }

    pub fn family_members(&self, family: Family) -> Vec<&Element> {
        self.elements.iter().filter(|e| e.family == family).collect()
    }
}

fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    symbol.len() <= 3 && chars.all(|c| c.is_ascii_lowercase())
}

// --- 4. GLOBAL ACCESS ---

static DATASET: OnceLock<Result<ElementSet, DatasetError>> = OnceLock::new();

/// Process-wide element table. Loaded and validated on first call;
/// subsequent calls are lookups into the same immutable set.
pub fn dataset() -> Result<&'static ElementSet, &'static DatasetError> {
    DATASET.get_or_init(ElementSet::load_embedded).as_ref()
}

// --- 5. TEST FIXTURE ---

/// Nine-element set (H through Fe) for unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_set() -> ElementSet {
    let elements = r#"[
        {"symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": 1.008,
         "family": "Nonmetal", "state": "Gas", "electron_config": "1s¹",
         "isotopes": ["H-1", "H-2", "H-3"]},
        {"symbol": "He", "name": "Helium", "atomic_number": 2, "atomic_mass": 4.0026,
         "family": "Noble Gas", "state": "Gas", "electron_config": "1s²",
         "isotopes": ["He-3", "He-4"]},
        {"symbol": "C", "name": "Carbon", "atomic_number": 6, "atomic_mass": 12.011,
         "family": "Nonmetal", "state": "Solid", "electron_config": "1s² 2s² 2p²",
         "isotopes": ["C-12", "C-13", "C-14"]},
        {"symbol": "N", "name": "Nitrogen", "atomic_number": 7, "atomic_mass": 14.007,
         "family": "Nonmetal", "state": "Gas", "electron_config": "1s² 2s² 2p³",
         "isotopes": ["N-14", "N-15"]},
        {"symbol": "O", "name": "Oxygen", "atomic_number": 8, "atomic_mass": 15.999,
         "family": "Nonmetal", "state": "Gas", "electron_config": "1s² 2s² 2p⁴",
         "isotopes": ["O-16", "O-17", "O-18"]},
        {"symbol": "Ne", "name": "Neon", "atomic_number": 10, "atomic_mass": 20.18,
         "family": "Noble Gas", "state": "Gas", "electron_config": "1s² 2s² 2p⁶",
         "isotopes": ["Ne-20", "Ne-21", "Ne-22"]},
        {"symbol": "Na", "name": "Sodium", "atomic_number": 11, "atomic_mass": 22.99,
         "family": "Alkali Metal", "state": "Solid", "electron_config": "[Ne] 3s¹",
         "isotopes": ["Na-23"]},
        {"symbol": "Ar", "name": "Argon", "atomic_number": 18, "atomic_mass": 39.948,
         "family": "Noble Gas", "state": "Gas", "electron_config": "[Ne] 3s² 3p⁶",
         "isotopes": ["Ar-40"]},
        {"symbol": "Fe", "name": "Iron", "atomic_number": 26, "atomic_mass": 55.845,
         "family": "Transition Metal", "state": "Solid", "electron_config": "[Ar] 3d⁶ 4s²",
         "isotopes": ["Fe-56"]}
    ]"#;
    let positions = r#"{
        "H": [0, 0], "He": [0, 17], "C": [1, 13], "N": [1, 14], "O": [1, 15],
        "Ne": [1, 17], "Na": [2, 0], "Ar": [2, 17], "Fe": [3, 7]
    }"#;
    let production = r#"{
        "H": {"Steam reforming": {"reaction": "CH4 + H2O -> CO + 3 H2",
                                  "conditions": "700-1000 °C over nickel catalyst"}},
        "He": ["Cryogenic separation from natural gas"],
        "O": ["Fractional distillation of liquefied air", "Electrolysis of water"],
        "Ne": ["Fractional distillation of liquefied air"],
        "Na": {"Downs process": {"reaction": "2 NaCl -> 2 Na + Cl2",
                                 "conditions": "Electrolysis of molten salt, ~600 °C"}}
    }"#;
    ElementSet::from_json(elements, positions, production).expect("sample set is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads_and_validates() {
        let set = dataset().expect("embedded data must load");
        assert_eq!(set.len(), ELEMENT_COUNT);

        // Atomic numbers are exactly 1..=118 in order
        for (i, e) in set.all().iter().enumerate() {
            assert_eq!(e.atomic_number as usize, i + 1);
        }

        // Every element has a grid cell
        for e in set.all() {
            assert!(set.position(&e.symbol).is_some(), "{} has no position", e.symbol);
        }
    }

    #[test]
    fn every_family_is_populated() {
        let set = dataset().unwrap();
        for family in crate::model::element::ALL_FAMILIES {
            assert!(
                !set.family_members(*family).is_empty(),
                "no members for {}",
                family
            );
        }
    }

    #[test]
    fn symbol_lookup_is_case_insensitive() {
        let set = dataset().unwrap();
        assert_eq!(set.by_symbol("fe").unwrap().name, "Iron");
        assert_eq!(set.by_symbol("FE").unwrap().name, "Iron");
        assert_eq!(set.by_symbol("Fe").unwrap().name, "Iron");
        assert!(set.by_symbol("Xx").is_none());
    }

    #[test]
    fn atomic_number_lookup() {
        let set = dataset().unwrap();
        assert_eq!(set.by_atomic_number(79).unwrap().symbol, "Au");
        assert!(set.by_atomic_number(0).is_none());
        assert!(set.by_atomic_number(119).is_none());
    }

    #[test]
    fn production_lookup_has_both_shapes() {
        let set = dataset().unwrap();
        assert!(matches!(
            set.production("H"),
            Some(ProductionMethod::Reactions(_))
        ));
        assert!(matches!(
            set.production("O"),
            Some(ProductionMethod::Freeform(_))
        ));
        assert!(set.production("Og").is_none());
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let dup = r#"[
            {"symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": 1.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1s¹"},
            {"symbol": "H", "name": "Hydrogen2", "atomic_number": 2, "atomic_mass": 2.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1s²"}
        ]"#;
        let err = ElementSet::from_json(dup, "{}", "{}").unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateSymbol(_)));
    }

    #[test]
    fn rejects_undecodable_configuration() {
        let bad = r#"[
            {"symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": 1.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1x¹"}
        ]"#;
        let err = ElementSet::from_json(bad, "{}", "{}").unwrap_err();
        assert!(matches!(err, DatasetError::BadConfiguration { .. }));
    }

    #[test]
    fn rejects_electron_count_mismatch() {
        let bad = r#"[
            {"symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": 1.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1s²"}
        ]"#;
        let err = ElementSet::from_json(bad, "{}", "{}").unwrap_err();
        assert!(matches!(err, DatasetError::ElectronCountMismatch { .. }));
    }

    #[test]
    fn rejects_position_for_unknown_symbol() {
        let one = r#"[
            {"symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": 1.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1s¹"}
        ]"#;
        let err = ElementSet::from_json(one, r#"{"Zz": [0, 0]}"#, "{}").unwrap_err();
        assert!(matches!(err, DatasetError::UnknownPositionSymbol(_)));
    }

    #[test]
    fn rejects_malformed_mass_and_range() {
        let bad_mass = r#"[
            {"symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": -1.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1s¹"}
        ]"#;
        assert!(matches!(
            ElementSet::from_json(bad_mass, "{}", "{}").unwrap_err(),
            DatasetError::NonPositiveMass { .. }
        ));

        let bad_z = r#"[
            {"symbol": "H", "name": "Hydrogen", "atomic_number": 0, "atomic_mass": 1.0,
             "family": "Nonmetal", "state": "Gas", "electron_config": "1s¹"}
        ]"#;
        assert!(matches!(
            ElementSet::from_json(bad_z, "{}", "{}").unwrap_err(),
            DatasetError::AtomicNumberRange { .. }
        ));
    }

    #[test]
    fn sample_set_is_usable() {
        let set = sample_set();
        assert_eq!(set.len(), 9);
        assert_eq!(set.by_symbol("na").unwrap().name, "Sodium");
        assert!(set.production("O").is_some());
        assert!(set.production("Fe").is_none());
    }
}
