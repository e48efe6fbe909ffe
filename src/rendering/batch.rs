// src/rendering/batch.rs
//
// Renders orbital diagrams for many elements at once. Each element is
// independent, so the table is fanned out across the rayon pool.

use crate::config::ImageFormat;
use crate::model::dataset::ElementSet;
use crate::model::element::Element;
use crate::orbitals::decode::decode_config;
use crate::orbitals::layout::{build_layout, LayoutOptions};
use crate::rendering::orbital_plot::render_orbitals;
use rayon::prelude::*;
use std::path::PathBuf;

/// Settings for a full-table render.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub format: ImageFormat,
    /// Square canvas edge, pixels.
    pub size: u32,
    pub layout: LayoutOptions,
}

impl BatchOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ImageFormat::Png,
            size: 640,
            layout: LayoutOptions::default(),
        }
    }
}

/// Outcome of a batch run. Every failure keeps its message, prefixed
/// with the element symbol.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub rendered: usize,
    pub failures: Vec<String>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Decodes, lays out and renders one element's diagram.
pub fn render_element(element: &Element, opts: &BatchOptions) -> Result<PathBuf, String> {
    let records = decode_config(&element.electron_config)
        .map_err(|e| format!("{}: {}", element.symbol, e))?;
    let layout = build_layout(&records, element.atomic_number, &opts.layout)
        .map_err(|e| format!("{}: {}", element.symbol, e))?;
    render_orbitals(element, &layout, &opts.output_dir, opts.format, opts.size)
        .map_err(|e| format!("{}: {}", element.symbol, e))
}

/// Renders every element in parallel. A failure is logged and recorded;
/// it never aborts the rest of the batch.
pub fn render_all(set: &ElementSet, opts: &BatchOptions) -> BatchReport {
    let results: Vec<(String, Result<PathBuf, String>)> = set
        .all()
        .par_iter()
        .map(|e| (e.symbol.clone(), render_element(e, opts)))
        .collect();

    let mut report = BatchReport::default();
    for (symbol, result) in results {
        match result {
            Ok(path) => {
                log::debug!("rendered {} to {}", symbol, path.display());
                report.rendered += 1;
            }
            Err(err) => {
                log::warn!("skipping {}", err);
                report.failures.push(err);
            }
        }
    }
    log::info!(
        "rendered {} diagrams, {} failed",
        report.rendered,
        report.failed()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::sample_set;

    fn fast_options(dir: &std::path::Path) -> BatchOptions {
        let mut opts = BatchOptions::new(dir);
        opts.size = 96;
        opts.layout.resolution = 16;
        opts
    }

    #[test]
    fn batch_renders_every_sample_element() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let opts = fast_options(dir.path());

        let report = render_all(&set, &opts);
        assert_eq!(report.rendered, set.len());
        assert!(report.failures.is_empty(), "{:?}", report.failures);

        for e in set.all() {
            let path = dir.path().join(format!("{}_orbitals.png", e.symbol));
            assert!(path.is_file(), "{} missing", path.display());
        }

        // PNG signature on one of them
        let bytes = std::fs::read(dir.path().join("Ne_orbitals.png")).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn svg_output_is_written_as_markup() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let mut opts = fast_options(dir.path());
        opts.format = ImageFormat::Svg;

        let h = set.by_symbol("H").unwrap();
        let path = render_element(h, &opts).unwrap();
        assert_eq!(path, dir.path().join("H_orbitals.svg"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("<svg"));
    }

    #[test]
    fn undecodable_configurations_fail_with_the_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let opts = fast_options(dir.path());
        let broken = Element {
            symbol: "Xx".into(),
            name: "Unobtainium".into(),
            atomic_number: 200,
            atomic_mass: 1.0,
            family: crate::model::element::Family::Nonmetal,
            state: crate::model::element::PhysicalState::Solid,
            electron_config: "not a configuration".into(),
            isotopes: Vec::new(),
        };
        let err = render_element(&broken, &opts).unwrap_err();
        assert!(err.contains("Xx"), "{}", err);
    }

    #[test]
    fn unusable_output_directories_are_counted_as_failures() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the output directory should go
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"x").unwrap();

        let report = render_all(&set, &fast_options(&blocked));
        assert_eq!(report.rendered, 0);
        assert_eq!(report.failed(), set.len());
        // Failure messages name their element
        assert!(report.failures.iter().any(|f| f.starts_with("Ne: ")));
    }
}
