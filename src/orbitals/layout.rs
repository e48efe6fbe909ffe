// src/orbitals/layout.rs
//
// Turns decoded orbital records into 3D geometry: one wireframe lobe
// surface per (n, l, m) term and one marker per electron. All
// coordinates are in "shell units" where a non-relativistic shell n
// sits at radius n.

use crate::orbitals::decode::OrbitalRecord;
use crate::orbitals::harmonics::real_lobe_magnitude;
use nalgebra::{Point3, Rotation3, Vector3};
use std::f64::consts::PI;

// --- 1. GEOMETRY CONSTANTS ---

/// Fine-structure constant, used for the relativistic shell contraction.
pub const FINE_STRUCTURE: f64 = 1.0 / 137.036;

/// Lobe radius as a fraction of the shell scale.
const LOBE_SCALE: f64 = 0.7;
/// s electrons ring radius, as a fraction of the shell scale.
const S_RING: f64 = 0.85;
/// p electrons axis offset, as a fraction of the shell scale.
const P_AXIS: f64 = 0.75;
/// d and f electrons ring radius, as a fraction of the shell scale.
const DF_RING: f64 = 0.8;
/// Ring tilt per magnetic quantum number, degrees about the x-axis.
const DF_TILT_DEG: f64 = 15.0;
/// Separation enforced between markers when jitter is on.
const MARKER_MIN_DIST: f64 = 0.25;
/// Relaxation rounds for marker separation.
const SEPARATION_ROUNDS: usize = 8;

// --- 2. OPTIONS AND ERRORS ---

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Contract shells by the one-electron relativistic correction.
    pub relativistic: bool,
    /// Nudge apart electron markers that land too close together.
    pub jitter: bool,
    /// Angular samples per surface direction.
    pub resolution: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            relativistic: false,
            jitter: false,
            resolution: 40,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.resolution < 8 || self.resolution > 200 {
            return Err(LayoutError::BadResolution(self.resolution));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Surface resolution outside 8..=200.
    BadResolution(usize),
    /// No orbital records to lay out.
    NoOrbitals,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::BadResolution(r) => {
                write!(f, "surface resolution {} is outside 8..=200", r)
            }
            LayoutError::NoOrbitals => write!(f, "no orbital records to lay out"),
        }
    }
}

impl std::error::Error for LayoutError {}

// --- 3. OUTPUT TYPES ---

/// Wireframe lobe for one (n, l, m) term.
#[derive(Debug)]
pub struct OrbitalSurface {
    pub n: f64,
    pub l: u32,
    pub m: i32,
    /// Polylines tracing the surface along both angular directions.
    pub wires: Vec<Vec<Point3<f64>>>,
}

/// Full scene geometry for one electron configuration.
#[derive(Debug)]
pub struct OrbitalLayout {
    pub surfaces: Vec<OrbitalSurface>,
    pub electrons: Vec<Point3<f64>>,
    /// Farthest point from the origin, for camera framing.
    pub radius: f64,
}

// --- 4. SHELL SCALE ---

/// Effective principal quantum number after the first-order
/// relativistic correction: n (1 - Z^2 a^2 / 2n^2).
pub fn effective_n(n: f64, atomic_number: u32) -> f64 {
    let za = atomic_number as f64 * FINE_STRUCTURE;
    n * (1.0 - za * za / (2.0 * n * n))
}

fn shell_scale(n: f64, atomic_number: u32, opts: &LayoutOptions) -> f64 {
    if opts.relativistic {
        effective_n(n, atomic_number)
    } else {
        n
    }
}

// --- 5. LAYOUT CONSTRUCTION ---

/// Builds the scene geometry for a decoded configuration.
pub fn build_layout(
    records: &[OrbitalRecord],
    atomic_number: u32,
    opts: &LayoutOptions,
) -> Result<OrbitalLayout, LayoutError> {
    opts.validate()?;
    if records.is_empty() {
        return Err(LayoutError::NoOrbitals);
    }

    let mut surfaces = Vec::with_capacity(records.len());
    for rec in records {
        let scale = shell_scale(rec.n, atomic_number, opts);
        surfaces.push(OrbitalSurface {
            n: rec.n,
            l: rec.l,
            m: rec.m,
            wires: surface_wires(rec.l, rec.m, scale, opts.resolution),
        });
    }

    // Electrons are placed per (n, l) subshell; decode emits the m
    // terms of a subshell consecutively.
    let mut electrons = Vec::new();
    let mut start = 0;
    while start < records.len() {
        let mut end = start + 1;
        while end < records.len()
            && records[end].n == records[start].n
            && records[end].l == records[start].l
        {
            end += 1;
        }
        let group = &records[start..end];
        let scale = shell_scale(group[0].n, atomic_number, opts);
        place_subshell(group, scale, &mut electrons);
        start = end;
    }
    if opts.jitter {
        separate_markers(&mut electrons, MARKER_MIN_DIST, SEPARATION_ROUNDS);
    }

    let radius = surfaces
        .iter()
        .flat_map(|s| s.wires.iter().flatten())
        .chain(electrons.iter())
        .map(|p| p.coords.norm())
        .fold(1.0_f64, f64::max);

    Ok(OrbitalLayout {
        surfaces,
        electrons,
        radius,
    })
}

/// Samples r = |Re Y_l^m| over the sphere, normalized so the widest
/// lobe reaches LOBE_SCALE * scale, and traces wires along constant
/// theta and constant phi.
fn surface_wires(l: u32, m: i32, scale: f64, resolution: usize) -> Vec<Vec<Point3<f64>>> {
    let nt = resolution;
    let np = resolution;

    let mut radii = vec![vec![0.0; np + 1]; nt + 1];
    let mut max_r = 0.0_f64;
    for (i, row) in radii.iter_mut().enumerate() {
        let theta = PI * i as f64 / nt as f64;
        for (j, r) in row.iter_mut().enumerate() {
            let phi = 2.0 * PI * j as f64 / np as f64;
            *r = real_lobe_magnitude(l, m, theta, phi);
            max_r = max_r.max(*r);
        }
    }
    let norm = if max_r > 1e-12 { max_r } else { 1.0 };

    let point = |i: usize, j: usize| -> Point3<f64> {
        let theta = PI * i as f64 / nt as f64;
        let phi = 2.0 * PI * j as f64 / np as f64;
        let r = radii[i][j] / norm * LOBE_SCALE * scale;
        Point3::new(
            r * theta.sin() * phi.cos(),
            r * theta.sin() * phi.sin(),
            r * theta.cos(),
        )
    };

    let mut wires = Vec::with_capacity(nt + np + 2);
    for i in 0..=nt {
        wires.push((0..=np).map(|j| point(i, j)).collect());
    }
    for j in 0..=np {
        wires.push((0..=nt).map(|i| point(i, j)).collect());
    }
    wires
}

/// Splits fractional per-m electron counts into whole electrons by
/// largest remainder, preserving the rounded subshell total.
pub fn partition_electrons(counts: &[f64]) -> Vec<usize> {
    let total = counts.iter().sum::<f64>().round() as usize;
    let mut whole: Vec<usize> = counts.iter().map(|c| c.floor() as usize).collect();
    let assigned: usize = whole.iter().sum();

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = counts[a] - counts[a].floor();
        let fb = counts[b] - counts[b].floor();
        fb.partial_cmp(&fa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    for &idx in order.iter().take(total.saturating_sub(assigned)) {
        whole[idx] += 1;
    }
    whole
}

fn place_subshell(group: &[OrbitalRecord], scale: f64, out: &mut Vec<Point3<f64>>) {
    let counts: Vec<f64> = group.iter().map(|r| r.electron_count).collect();
    let per_m = partition_electrons(&counts);

    for (rec, &count) in group.iter().zip(per_m.iter()) {
        for i in 0..count {
            let p = match rec.l {
                // s: even spacing on an equatorial ring
                0 => {
                    let angle = 2.0 * PI * i as f64 / count.max(1) as f64;
                    Point3::new(
                        S_RING * scale * angle.cos(),
                        S_RING * scale * angle.sin(),
                        0.0,
                    )
                }
                // p: paired along the axis selected by m
                1 => {
                    let axis = match rec.m {
                        -1 => Vector3::x(),
                        0 => Vector3::z(),
                        _ => Vector3::y(),
                    };
                    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                    Point3::from(axis * sign * P_AXIS * scale)
                }
                // d and f: rings tilted about x by m * 15 degrees
                _ => {
                    let angle = 2.0 * PI * i as f64 / count.max(1) as f64;
                    let flat = Vector3::new(
                        DF_RING * scale * angle.cos(),
                        DF_RING * scale * angle.sin(),
                        0.0,
                    );
                    let tilt = Rotation3::from_axis_angle(
                        &Vector3::x_axis(),
                        rec.m as f64 * DF_TILT_DEG.to_radians(),
                    );
                    Point3::from(tilt * flat)
                }
            };
            out.push(p);
        }
    }
}

/// Pushes markers apart until every pair is at least `min_dist` apart
/// or the round budget runs out. Deterministic, including the
/// direction chosen for exactly coincident markers.
fn separate_markers(points: &mut [Point3<f64>], min_dist: f64, rounds: usize) {
    for _ in 0..rounds {
        let mut moved = false;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let delta = points[i] - points[j];
                let dist = delta.norm();
                if dist >= min_dist {
                    continue;
                }
                let dir = if dist > 1e-9 {
                    delta / dist
                } else {
                    match (i + j) % 3 {
                        0 => Vector3::x(),
                        1 => Vector3::y(),
                        _ => Vector3::z(),
                    }
                };
                let push = dir * (min_dist - dist) * 0.5;
                points[i] += push;
                points[j] -= push;
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }
}
