// src/ui/table.rs

use crate::model::dataset::{ElementSet, TABLE_COLS, TABLE_ROWS};
use crate::model::element::{Element, ALL_FAMILIES};
use crossterm::style::{Color, Stylize};

/// Lays the elements out on the 10x18 display grid. Row 7 stays empty,
/// separating the main body from the lanthanide and actinide rows.
pub(crate) fn build_cells(set: &ElementSet) -> Vec<Vec<Option<&Element>>> {
    let mut cells: Vec<Vec<Option<&Element>>> = vec![vec![None; TABLE_COLS]; TABLE_ROWS];
    for e in set.all() {
        if let Some(pos) = set.position(&e.symbol) {
            cells[pos.row][pos.col] = Some(e);
        }
    }
    cells
}

/// Prints the periodic table as a colored symbol grid plus a family
/// legend.
pub fn print_table(set: &ElementSet) {
    for row in build_cells(set) {
        for cell in &row {
            match cell {
                Some(e) => {
                    let (r, g, b) = e.family.color_rgb();
                    print!(
                        "{} ",
                        format!("{:^3}", e.symbol)
                            .on(Color::Rgb { r, g, b })
                            .with(Color::Black)
                    );
                }
                None => print!("    "),
            }
        }
        println!();
    }
    println!();
    for family in ALL_FAMILIES {
        let (r, g, b) = family.color_rgb();
        println!("  {}  {}", "  ".on(Color::Rgb { r, g, b }), family.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::dataset;

    #[test]
    fn every_element_lands_on_its_own_cell() {
        let set = dataset().unwrap();
        let cells = build_cells(set);
        let occupied: usize = cells
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        assert_eq!(occupied, set.len());
    }

    #[test]
    fn familiar_corners_of_the_grid() {
        let set = dataset().unwrap();
        let cells = build_cells(set);
        assert_eq!(cells[0][0].map(|e| e.symbol.as_str()), Some("H"));
        assert_eq!(cells[0][17].map(|e| e.symbol.as_str()), Some("He"));
        assert_eq!(cells[5][17].map(|e| e.symbol.as_str()), Some("Rn"));
        // The f-block sits below a spacer row
        assert!(cells[7].iter().all(|c| c.is_none()));
        assert_eq!(cells[8][2].map(|e| e.symbol.as_str()), Some("La"));
        assert_eq!(cells[9][16].map(|e| e.symbol.as_str()), Some("Lr"));
    }
}
