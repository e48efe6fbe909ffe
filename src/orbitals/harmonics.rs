// src/orbitals/harmonics.rs
//
// Spherical harmonics for orbital lobe shapes. Everything works on
// f64 angles: theta is the polar angle measured from +z, phi the
// azimuth in the xy-plane.

use num_complex::Complex64;
use std::f64::consts::PI;

// --- 1. HELPERS ---

fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Associated Legendre polynomial P_l^m(x) with the Condon-Shortley
/// phase, for m >= 0 and |x| <= 1.
fn assoc_legendre(l: u32, m: u32, x: f64) -> f64 {
    // P_m^m = (-1)^m (2m-1)!! (1-x^2)^(m/2)
    let mut pmm = 1.0;
    if m > 0 {
        let somx2 = ((1.0 - x) * (1.0 + x)).max(0.0).sqrt();
        let mut fact = 1.0;
        for _ in 0..m {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == m {
        return pmm;
    }

    // P_{m+1}^m = x (2m+1) P_m^m
    let mut pmmp1 = x * (2 * m + 1) as f64 * pmm;
    if l == m + 1 {
        return pmmp1;
    }

    // (l-m) P_l^m = x (2l-1) P_{l-1}^m - (l+m-1) P_{l-2}^m
    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = (x * (2 * ll - 1) as f64 * pmmp1 - (ll + m - 1) as f64 * pmm) / (ll - m) as f64;
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}

// --- 2. SPHERICAL HARMONICS ---

/// Complex spherical harmonic Y_l^m(theta, phi).
///
/// Negative m is handled through Y_l^{-m} = (-1)^m conj(Y_l^m). Out of
/// range |m| > l evaluates to zero.
pub fn sph_harm(l: u32, m: i32, theta: f64, phi: f64) -> Complex64 {
    let m_abs = m.unsigned_abs();
    if m_abs > l {
        return Complex64::new(0.0, 0.0);
    }

    let norm = ((2 * l + 1) as f64 / (4.0 * PI) * factorial(l - m_abs) / factorial(l + m_abs))
        .sqrt();
    let y = norm * assoc_legendre(l, m_abs, theta.cos()) * Complex64::cis(m_abs as f64 * phi);

    if m < 0 {
        let sign = if m_abs % 2 == 0 { 1.0 } else { -1.0 };
        sign * y.conj()
    } else {
        y
    }
}

/// |Re Y_l^m|, the radial profile the orbital surfaces are built from.
pub fn real_lobe_magnitude(l: u32, m: i32, theta: f64, phi: f64) -> f64 {
    sph_harm(l, m, theta, phi).re.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
    }

    #[test]
    fn legendre_closed_forms() {
        // P_2^0(x) = (3x^2 - 1)/2
        assert!((assoc_legendre(2, 0, 0.3) - (3.0 * 0.09 - 1.0) / 2.0).abs() < EPS);
        // P_2^1(x) = -3x sqrt(1 - x^2)
        let x = 0.5_f64;
        let expected = -3.0 * x * (1.0 - x * x).sqrt();
        assert!((assoc_legendre(2, 1, x) - expected).abs() < EPS);
        // P_1^1(x) = -sqrt(1 - x^2)
        assert!((assoc_legendre(1, 1, 0.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn y00_is_constant() {
        let expected = 0.28209479177387814;
        for &(theta, phi) in &[(0.0, 0.0), (1.1, 2.2), (PI / 2.0, PI), (2.9, 5.5)] {
            let y = sph_harm(0, 0, theta, phi);
            assert!((y.re - expected).abs() < EPS);
            assert!(y.im.abs() < EPS);
        }
    }

    #[test]
    fn y10_peaks_on_the_z_axis() {
        // Y_1^0(0, phi) = sqrt(3/4pi)
        let y = sph_harm(1, 0, 0.0, 0.4);
        assert!((y.re - 0.4886025119029199).abs() < EPS);
        // and vanishes in the equatorial plane
        assert!(sph_harm(1, 0, PI / 2.0, 0.0).re.abs() < EPS);
    }

    #[test]
    fn y11_equatorial_magnitude() {
        // Y_1^1(pi/2, 0) = -sqrt(3/8pi)
        let y = sph_harm(1, 1, PI / 2.0, 0.0);
        assert!((y.re + 0.3454941494713355).abs() < EPS);
        assert!((real_lobe_magnitude(1, 1, PI / 2.0, 0.0) - 0.3454941494713355).abs() < EPS);
    }

    #[test]
    fn negative_m_follows_the_conjugation_identity() {
        for l in 0..4_u32 {
            for m in 1..=l as i32 {
                for &(theta, phi) in &[(0.7, 1.3), (2.1, 4.0), (1.5707, 0.25)] {
                    let plus = sph_harm(l, m, theta, phi);
                    let minus = sph_harm(l, -m, theta, phi);
                    let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
                    let expected = sign * plus.conj();
                    assert!((minus - expected).norm() < EPS, "l={} m={}", l, m);
                }
            }
        }
    }

    #[test]
    fn y20_on_the_poles() {
        // Y_2^0(0, _) = 2 sqrt(5/16pi)
        let y = sph_harm(2, 0, 0.0, 0.0);
        assert!((y.re - 0.6307831305050401).abs() < EPS);
    }

    #[test]
    fn out_of_range_m_is_zero() {
        assert_eq!(sph_harm(1, 2, 0.5, 0.5), Complex64::new(0.0, 0.0));
    }
}
