// src/model/production.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named industrial reaction with its operating conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub reaction: String,
    pub conditions: String,
}

/// Per-symbol production data. The dataset carries one of two shapes:
/// a plain list of method descriptions, or named reactions keyed by
/// process name. Symbols without an entry simply have no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductionMethod {
    Freeform(Vec<String>),
    Reactions(BTreeMap<String, Reaction>),
}

impl ProductionMethod {
    pub fn is_empty(&self) -> bool {
        match self {
            ProductionMethod::Freeform(list) => list.is_empty(),
            ProductionMethod::Reactions(map) => map.is_empty(),
        }
    }

    /// One-line summary, used as quiz answer text. The first entry is
    /// taken; reaction maps are in key order, so this is deterministic.
    pub fn summary(&self) -> Option<&str> {
        match self {
            ProductionMethod::Freeform(list) => list.first().map(String::as_str),
            ProductionMethod::Reactions(map) => map.keys().next().map(String::as_str),
        }
    }

    /// Multi-line block for the element info card.
    pub fn details(&self) -> String {
        let mut out = String::new();
        match self {
            ProductionMethod::Freeform(list) => {
                for entry in list {
                    out.push_str(&format!("  - {}\n", entry));
                }
            }
            ProductionMethod::Reactions(map) => {
                for (name, rx) in map {
                    out.push_str(&format!("  {}:\n", name));
                    out.push_str(&format!("    {}\n", rx.reaction));
                    out.push_str(&format!("    ({})\n", rx.conditions));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_freeform_lists() {
        let json = r#"["Fractional distillation of liquefied air", "Electrolysis of water"]"#;
        let pm: ProductionMethod = serde_json::from_str(json).unwrap();
        match &pm {
            ProductionMethod::Freeform(list) => assert_eq!(list.len(), 2),
            other => panic!("expected freeform, got {:?}", other),
        }
        assert_eq!(pm.summary(), Some("Fractional distillation of liquefied air"));
    }

    #[test]
    fn deserializes_reaction_maps() {
        let json = r#"{
            "Steam reforming": {
                "reaction": "CH4 + H2O -> CO + 3 H2",
                "conditions": "700-1000 °C over nickel catalyst"
            }
        }"#;
        let pm: ProductionMethod = serde_json::from_str(json).unwrap();
        match &pm {
            ProductionMethod::Reactions(map) => {
                assert_eq!(map.len(), 1);
                assert!(map.contains_key("Steam reforming"));
            }
            other => panic!("expected reactions, got {:?}", other),
        }
        assert_eq!(pm.summary(), Some("Steam reforming"));
    }

    #[test]
    fn details_renders_both_shapes() {
        let free = ProductionMethod::Freeform(vec!["Mined as graphite".into()]);
        assert!(free.details().contains("- Mined as graphite"));

        let mut map = BTreeMap::new();
        map.insert(
            "Downs process".to_string(),
            Reaction {
                reaction: "2 NaCl -> 2 Na + Cl2".into(),
                conditions: "Electrolysis of molten salt, ~600 °C".into(),
            },
        );
        let rx = ProductionMethod::Reactions(map);
        let details = rx.details();
        assert!(details.contains("Downs process:"));
        assert!(details.contains("2 NaCl -> 2 Na + Cl2"));
        assert!(details.contains("(Electrolysis of molten salt, ~600 °C)"));
    }

    #[test]
    fn empty_entries_have_no_summary() {
        let pm = ProductionMethod::Freeform(Vec::new());
        assert!(pm.is_empty());
        assert_eq!(pm.summary(), None);
    }
}
