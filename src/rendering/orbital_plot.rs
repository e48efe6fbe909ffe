// src/rendering/orbital_plot.rs
//
// Projects an orbital layout to 2D and draws it with plotters. The
// draw function is generic over the backend so the same code serves
// PNG, SVG and in-memory buffers.

use crate::config::ImageFormat;
use crate::model::element::Element;
use crate::orbitals::layout::OrbitalLayout;
use nalgebra::{Point3, Vector3};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

// --- 1. VIEW AND PALETTE ---

/// Camera elevation above the xy-plane, degrees.
const ELEVATION_DEG: f64 = 25.0;
/// Camera azimuth from the x-axis, degrees.
const AZIMUTH_DEG: f64 = 45.0;
/// Fraction of the half-canvas the layout radius is mapped to.
const CANVAS_FILL: f64 = 0.88;
/// Lobe wire opacity.
const WIRE_ALPHA: f64 = 0.35;

const NUCLEUS_RADIUS_PX: i32 = 6;
const ELECTRON_RADIUS_PX: i32 = 4;

const NUCLEUS_COLOR: RGBColor = RGBColor(0xff, 0x44, 0x44);
const ELECTRON_FILL: RGBColor = RGBColor(0xff, 0xff, 0x00);
const ELECTRON_EDGE: RGBColor = RGBColor(0x33, 0x33, 0x33);

/// One color per subshell letter: s, p, d, f.
const SHELL_COLORS: [RGBColor; 4] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0x94, 0x67, 0xbd),
];

pub fn shell_color(l: u32) -> RGBColor {
    SHELL_COLORS[(l as usize).min(SHELL_COLORS.len() - 1)]
}

// --- 2. CAMERA ---

/// Orthographic camera at the fixed viewing angles. `right` and `up`
/// span the screen; `toward` points at the viewer, so larger depth
/// means closer.
struct Camera {
    right: Vector3<f64>,
    up: Vector3<f64>,
    toward: Vector3<f64>,
    scale: f64,
    cx: i32,
    cy: i32,
}

impl Camera {
    fn new(layout_radius: f64, width: u32, height: u32) -> Self {
        let e = ELEVATION_DEG.to_radians();
        let a = AZIMUTH_DEG.to_radians();
        let toward = Vector3::new(e.cos() * a.cos(), e.cos() * a.sin(), e.sin());
        let right = Vector3::new(-a.sin(), a.cos(), 0.0);
        let up = toward.cross(&right);

        let half = width.min(height) as f64 / 2.0;
        Self {
            right,
            up,
            toward,
            scale: half * CANVAS_FILL / layout_radius.max(1e-9),
            cx: width as i32 / 2,
            cy: height as i32 / 2,
        }
    }

    fn project(&self, p: &Point3<f64>) -> ((i32, i32), f64) {
        let v = p.coords;
        let x = self.cx + (v.dot(&self.right) * self.scale).round() as i32;
        let y = self.cy - (v.dot(&self.up) * self.scale).round() as i32;
        ((x, y), v.dot(&self.toward))
    }
}

// --- 3. DRAWING ---

enum Primitive {
    Wire {
        points: Vec<(i32, i32)>,
        color: RGBAColor,
        depth: f64,
    },
    Disc {
        center: (i32, i32),
        radius: i32,
        fill: RGBColor,
        edge: Option<RGBColor>,
        depth: f64,
    },
}

impl Primitive {
    fn depth(&self) -> f64 {
        match self {
            Primitive::Wire { depth, .. } | Primitive::Disc { depth, .. } => *depth,
        }
    }
}

/// Draws the orbital diagram onto any plotters backend, back to front.
pub fn draw_orbital_diagram<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &OrbitalLayout,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (width, height) = root.dim_in_pixel();
    let camera = Camera::new(layout.radius, width, height);

    let mut prims: Vec<Primitive> = Vec::new();

    for surface in &layout.surfaces {
        let color = shell_color(surface.l).mix(WIRE_ALPHA);
        for wire in &surface.wires {
            let mut points = Vec::with_capacity(wire.len());
            let mut depth_sum = 0.0;
            for p in wire {
                let (xy, depth) = camera.project(p);
                points.push(xy);
                depth_sum += depth;
            }
            if points.len() > 1 {
                prims.push(Primitive::Wire {
                    depth: depth_sum / points.len() as f64,
                    points,
                    color,
                });
            }
        }
    }

    let (origin_xy, origin_depth) = camera.project(&Point3::origin());
    prims.push(Primitive::Disc {
        center: origin_xy,
        radius: NUCLEUS_RADIUS_PX,
        fill: NUCLEUS_COLOR,
        edge: None,
        depth: origin_depth,
    });

    for electron in &layout.electrons {
        let (xy, depth) = camera.project(electron);
        prims.push(Primitive::Disc {
            center: xy,
            radius: ELECTRON_RADIUS_PX,
            fill: ELECTRON_FILL,
            edge: Some(ELECTRON_EDGE),
            depth,
        });
    }

    // Painter's order: far primitives first
    prims.sort_by(|a, b| {
        a.depth()
            .partial_cmp(&b.depth())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for prim in &prims {
        match prim {
            Primitive::Wire { points, color, .. } => {
                root.draw(&PathElement::new(points.clone(), color.stroke_width(1)))?;
            }
            Primitive::Disc {
                center,
                radius,
                fill,
                edge,
                ..
            } => {
                root.draw(&Circle::new(*center, *radius, fill.filled()))?;
                if let Some(edge) = edge {
                    root.draw(&Circle::new(*center, *radius, edge.stroke_width(1)))?;
                }
            }
        }
    }
    Ok(())
}

// --- 4. FILE OUTPUT ---

/// Canonical image location for an element's diagram.
pub fn image_path(dir: &Path, symbol: &str, format: ImageFormat) -> PathBuf {
    dir.join(format!("{}_orbitals.{}", symbol, format.extension()))
}

/// Renders a layout to `{dir}/{symbol}_orbitals.{ext}` and returns the
/// written path.
pub fn render_orbitals(
    element: &Element,
    layout: &OrbitalLayout,
    dir: &Path,
    format: ImageFormat,
    size: u32,
) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("could not create {}: {}", dir.display(), e))?;
    let path = image_path(dir, &element.symbol, format);

    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(&path, (size, size)).into_drawing_area();
            draw_orbital_diagram(&root, layout).map_err(|e| e.to_string())?;
            root.present().map_err(|e| e.to_string())?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(&path, (size, size)).into_drawing_area();
            draw_orbital_diagram(&root, layout).map_err(|e| e.to_string())?;
            root.present().map_err(|e| e.to_string())?;
        }
    }
    Ok(path)
}
