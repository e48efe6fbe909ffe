// src/quiz/answer.rs

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes free-text answers for comparison: compatibility
/// decomposition (so "²" folds to "2"), combining marks stripped,
/// lowercased, all whitespace removed.
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Two answers are equal iff their normalized forms are identical.
/// Empty input never matches anything.
pub fn answers_match(expected: &str, given: &str) -> bool {
    let given = normalize(given);
    !given.is_empty() && given == normalize(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_idempotent() {
        for input in ["Néon", "Carbon Dioxide", "1s² 2s²", "  spaced  out  "] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn insensitive_to_case_accents_and_spaces() {
        assert_eq!(normalize("Carbon Dioxide"), normalize("carbondioxide"));
        assert_eq!(normalize("Néon"), normalize("neon"));
        assert_eq!(normalize("HYDROGEN"), normalize("hydrogen"));
        assert_eq!(normalize("Alkaline Earth Metal"), "alkalineearthmetal");
    }

    #[test]
    fn superscripts_fold_to_digits() {
        assert_eq!(normalize("1s² 2s² 2p⁶"), normalize("1s2 2s2 2p6"));
        assert!(answers_match("[Ne] 3s¹", "[ne]3s1"));
    }

    #[test]
    fn matching_examples() {
        assert!(answers_match("Neon", "néon"));
        assert!(answers_match("Sodium", " SODIUM "));
        assert!(!answers_match("Sodium", "Potassium"));
    }

    #[test]
    fn empty_input_never_matches() {
        assert!(!answers_match("Neon", ""));
        assert!(!answers_match("Neon", "   "));
        assert!(!answers_match("", ""));
    }
}
