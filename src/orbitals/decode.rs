// src/orbitals/decode.rs

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

// --- 1. ERROR HANDLING ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No terms remain after stripping shorthand and whitespace.
    Empty,
    /// Token does not match the `<n><l><exponent?>` grammar.
    MalformedTerm(String),
    /// Shell letter outside {s, p, d, f}.
    InvalidShell { term: String, letter: char },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "Configuration contains no terms"),
            DecodeError::MalformedTerm(term) => {
                write!(f, "Malformed configuration term {:?}", term)
            }
            DecodeError::InvalidShell { term, letter } => {
                write!(f, "Unknown shell letter '{}' in term {:?}", letter, term)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

// --- 2. ORBITAL RECORDS ---

/// A decoded (n, l, m) sub-level carrying its share of the term's
/// electrons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalRecord {
    /// Principal quantum number. Integer-valued here; the layout step
    /// may apply a fractional relativistic correction.
    pub n: f64,
    /// Azimuthal number: s=0, p=1, d=2, f=3.
    pub l: u32,
    /// Magnetic number, -l..=l.
    pub m: i32,
    /// The term's electrons divided evenly across its 2l+1 sub-levels.
    /// A real number, not necessarily integral.
    pub electron_count: f64,
}

/// Capacity of a full shell with azimuthal number l.
pub fn full_shell(l: u32) -> u32 {
    2 * (2 * l + 1)
}

// --- 3. PATTERNS ---

fn term_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})([A-Za-z])(?:\^?(\d{1,3}))?$").expect("term pattern is valid")
    })
}

fn bracket_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[.*?\]\s*").expect("bracket pattern is valid"))
}

fn core_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\[([A-Za-z]{1,3})\]").expect("core pattern is valid"))
}

/// Folds Unicode superscript digits to ASCII so "2p⁶", "2p^6" and
/// "2p6" all decode identically.
fn fold_superscripts(config: &str) -> String {
    config
        .chars()
        .map(|c| match c {
            '⁰' => '0',
            '¹' => '1',
            '²' => '2',
            '³' => '3',
            '⁴' => '4',
            '⁵' => '5',
            '⁶' => '6',
            '⁷' => '7',
            '⁸' => '8',
            '⁹' => '9',
            other => other,
        })
        .collect()
}

/// Leading noble-gas shorthand symbol, if the configuration has one.
/// The decoder itself discards the bracket; dataset validation uses
/// this to account for the core's electrons.
pub fn core_symbol(config: &str) -> Option<&str> {
    core_pattern()
        .captures(config)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// --- 4. DECODER ---

/// Decodes a configuration string like "[Ne] 3s¹" or "1s² 2s² 2p⁶"
/// into orbital records.
///
/// # Algorithm
/// 1. Fold superscript digits, strip bracketed noble-gas shorthand.
/// 2. Match each whitespace-separated token against `<n><l><exponent?>`.
/// 3. Map the shell letter to l; resolve the electron count (explicit
///    exponent, else the full-shell capacity 2*(2l+1)).
/// 4. Emit one record per magnetic sub-level m in -l..=l, each with an
///    even share of the term's electrons.
///
/// Malformed terms are rejected, never silently dropped.
pub fn decode_config(config: &str) -> Result<Vec<OrbitalRecord>, DecodeError> {
    let folded = fold_superscripts(config);
    let stripped = bracket_pattern().replace_all(&folded, "");

    let mut records = Vec::new();
    for token in stripped.split_whitespace() {
        let caps = term_pattern()
            .captures(token)
            .ok_or_else(|| DecodeError::MalformedTerm(token.to_string()))?;

        let n: u32 = caps[1]
            .parse()
            .map_err(|_| DecodeError::MalformedTerm(token.to_string()))?;
        let letter = caps[2]
            .chars()
            .next()
            .ok_or_else(|| DecodeError::MalformedTerm(token.to_string()))?;
        let l: u32 = match letter {
            's' => 0,
            'p' => 1,
            'd' => 2,
            'f' => 3,
            _ => {
                return Err(DecodeError::InvalidShell {
                    term: token.to_string(),
                    letter,
                })
            }
        };
        let electrons = match caps.get(3) {
            Some(exp) => exp
                .as_str()
                .parse::<u32>()
                .map_err(|_| DecodeError::MalformedTerm(token.to_string()))?,
            None => full_shell(l),
        };

        let share = electrons as f64 / (2 * l + 1) as f64;
        let l_signed = l as i32;
        for m in -l_signed..=l_signed {
            records.push(OrbitalRecord {
                n: n as f64,
                l,
                m,
                electron_count: share,
            });
        }
    }

    if records.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_electrons(records: &[OrbitalRecord]) -> f64 {
        records.iter().map(|r| r.electron_count).sum()
    }

    #[test]
    fn decodes_neon_to_ten_electrons() {
        let records = decode_config("1s² 2s² 2p⁶").unwrap();
        // 1s, 2s, and the three 2p sub-levels
        assert_eq!(records.len(), 5);
        assert!((total_electrons(&records) - 10.0).abs() < 1e-12);
        assert!(records.iter().all(|r| r.n == 1.0 || r.n == 2.0));
    }

    #[test]
    fn decodes_sodium_shorthand_to_single_record() {
        let records = decode_config("[Ne] 3s¹").unwrap();
        assert_eq!(records.len(), 1);
        let r = records[0];
        assert_eq!(r.n, 3.0);
        assert_eq!(r.l, 0);
        assert_eq!(r.m, 0);
        assert_eq!(r.electron_count, 1.0);
    }

    #[test]
    fn rejects_invalid_shell_letter() {
        let err = decode_config("2x¹").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidShell {
                term: "2x1".into(),
                letter: 'x',
            }
        );
        // Shell letters are lowercase by grammar
        assert!(matches!(
            decode_config("2P⁶").unwrap_err(),
            DecodeError::InvalidShell { letter: 'P', .. }
        ));
    }

    #[test]
    fn rejects_malformed_terms() {
        assert!(matches!(
            decode_config("banana").unwrap_err(),
            DecodeError::MalformedTerm(_)
        ));
        assert!(matches!(
            decode_config("1s² xyz"),
            Err(DecodeError::MalformedTerm(_))
        ));
        assert!(matches!(
            decode_config("s2").unwrap_err(),
            DecodeError::MalformedTerm(_)
        ));
    }

    #[test]
    fn rejects_empty_configurations() {
        assert_eq!(decode_config("").unwrap_err(), DecodeError::Empty);
        assert_eq!(decode_config("   ").unwrap_err(), DecodeError::Empty);
        assert_eq!(decode_config("[Ne]").unwrap_err(), DecodeError::Empty);
    }

    #[test]
    fn missing_exponent_means_full_shell() {
        let records = decode_config("3d").unwrap();
        assert_eq!(records.len(), 5);
        assert!((total_electrons(&records) - 10.0).abs() < 1e-12);
        assert!(records.iter().all(|r| r.electron_count == 2.0));
    }

    #[test]
    fn exponent_notations_are_equivalent() {
        let sup = decode_config("2p⁶").unwrap();
        let caret = decode_config("2p^6").unwrap();
        let plain = decode_config("2p6").unwrap();
        assert_eq!(sup, caret);
        assert_eq!(sup, plain);
    }

    #[test]
    fn electrons_split_evenly_across_sub_levels() {
        let records = decode_config("2p³").unwrap();
        assert_eq!(records.len(), 3);
        for r in &records {
            assert_eq!(r.electron_count, 1.0);
        }
        let ms: Vec<i32> = records.iter().map(|r| r.m).collect();
        assert_eq!(ms, vec![-1, 0, 1]);
    }

    #[test]
    fn magnetic_numbers_span_minus_l_to_l() {
        let records = decode_config("3d⁵").unwrap();
        let ms: Vec<i32> = records.iter().map(|r| r.m).collect();
        assert_eq!(ms, vec![-2, -1, 0, 1, 2]);
        assert!(records.iter().all(|r| r.electron_count == 1.0));
    }

    #[test]
    fn core_symbol_reads_leading_bracket_only() {
        assert_eq!(core_symbol("[Ne] 3s¹"), Some("Ne"));
        assert_eq!(core_symbol("[Xe] 4f¹⁴ 5d¹⁰ 6s²"), Some("Xe"));
        assert_eq!(core_symbol("1s² 2s²"), None);
    }

    #[test]
    fn full_shell_capacities() {
        assert_eq!(full_shell(0), 2);
        assert_eq!(full_shell(1), 6);
        assert_eq!(full_shell(2), 10);
        assert_eq!(full_shell(3), 14);
    }
}
