// src/ui/card.rs

use crate::config::Config;
use crate::model::dataset::ElementSet;
use crate::model::element::Element;
use crate::rendering::orbital_plot::image_path;

/// Generates the bordered info card shown for one element.
pub fn element_card(set: &ElementSet, element: &Element, config: &Config) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{} ({})", element.name, element.symbol));
    lines.push(String::new());
    lines.push(format!("Atomic number : {}", element.atomic_number));
    lines.push(format!("Atomic mass   : {} u", element.atomic_mass));
    lines.push(format!("Family        : {}", element.family));
    lines.push(format!("State (STP)   : {}", element.state));
    lines.push(format!("Configuration : {}", element.electron_config));
    if !element.isotopes.is_empty() {
        lines.push(format!("Isotopes      : {}", element.isotopes.join(", ")));
    }

    if let Some(methods) = set.production(&element.symbol) {
        lines.push(String::new());
        lines.push("Production:".to_string());
        for line in methods.details().lines() {
            lines.push(line.to_string());
        }
    }

    lines.push(String::new());
    let path = image_path(&config.images_dir, &element.symbol, config.image_format);
    if path.is_file() {
        lines.push(format!("Orbitals      : {}", path.display()));
    } else {
        lines.push("Orbitals      : not rendered yet (run ptview-render)".to_string());
    }

    frame(&lines)
}

/// Wraps lines in a box border sized to the longest line.
fn frame(lines: &[String]) -> String {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(width + 2)));
    for line in lines {
        let pad = " ".repeat(width - line.chars().count());
        out.push_str(&format!("│ {}{} │\n", line, pad));
    }
    out.push_str(&format!("└{}┘\n", "─".repeat(width + 2)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::sample_set;

    fn test_config(dir: &std::path::Path) -> Config {
        let mut cfg = Config::default();
        cfg.images_dir = dir.to_path_buf();
        cfg
    }

    #[test]
    fn card_lists_the_core_fields() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let card = element_card(&set, set.by_symbol("Na").unwrap(), &test_config(dir.path()));

        assert!(card.contains("Sodium (Na)"));
        assert!(card.contains("Atomic number : 11"));
        assert!(card.contains("Family        : Alkali Metal"));
        assert!(card.contains("Configuration : [Ne] 3s¹"));
        assert!(card.contains("Downs process"));
        assert!(card.contains("not rendered yet"));
    }

    #[test]
    fn card_mentions_the_image_once_it_exists() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let image = dir.path().join("H_orbitals.png");
        std::fs::write(&image, b"png").unwrap();

        let card = element_card(&set, set.by_symbol("H").unwrap(), &config);
        assert!(card.contains("H_orbitals.png"));
        assert!(!card.contains("not rendered yet"));
    }

    #[test]
    fn border_lines_share_one_width() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let card = element_card(&set, set.by_symbol("O").unwrap(), &test_config(dir.path()));

        let widths: Vec<usize> = card.lines().map(|l| l.chars().count()).collect();
        assert!(widths.len() > 5);
        assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
    }

    #[test]
    fn elements_without_production_skip_the_section() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let card = element_card(&set, set.by_symbol("C").unwrap(), &test_config(dir.path()));
        assert!(!card.contains("Production:"));
    }
}
