//! Thin adapters over [`scilib`]'s special functions, converting to the
//! argument order and number types used in this crate.
//!
//! Generalized Laguerre polynomials are used directly as
//! [`scilib::math::polynomial::Poly`]; only the functions whose conventions
//! differ from this crate's are wrapped here.
//!
//! ```
//! use std::f64::consts::PI;
//! use qpsi::special::sph_harm;
//!
//! // Y₀⁰ is constant
//! let y = sph_harm(0, 0, 1.2, 0.4);
//! assert!((y.re - 0.5 / PI.sqrt()).abs() < 1e-12);
//! assert!(y.im.abs() < 1e-12);
//! ```

use num_complex::Complex64 as C64;
use num_traits::Zero;
use scilib::{ math::basic, quantum };

// largest n for which n! fits in a 64-bit usize
const MAX_USIZE_FACTORIAL: u32 = 20;

/// Compute *n*! as a float.
///
/// Exact for *n* ≤ 22; overflows to infinity for *n* > 170.
pub fn factorial(n: u32) -> f64 {
    if n <= MAX_USIZE_FACTORIAL {
        basic::factorial(n as usize) as f64
    } else {
        (MAX_USIZE_FACTORIAL + 1..=n)
            .map(f64::from)
            .fold(basic::factorial(MAX_USIZE_FACTORIAL as usize) as f64, |acc, k| acc * k)
    }
}

/// Evaluate the complex spherical harmonic *Y*<sub>*l*</sub><sup>*m*</sup> at
/// azimuthal angle `azimuth` ∊ [0, 2π) and polar angle `polar` ∊ [0, π].
///
/// Arguments are taken in `sph_harm(m, l, azimuth, polar)` order and passed on
/// to [`scilib::quantum::spherical_harmonics`] as (*l*, *m*, polar, azimuth).
/// Returns zero for |*m*| > *l*.
pub fn sph_harm(m: i32, l: u32, azimuth: f64, polar: f64) -> C64 {
    if m.unsigned_abs() > l { return C64::zero(); }
    let y = quantum::spherical_harmonics(l as usize, m as isize, polar, azimuth);
    C64::new(y.re, y.im)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn factorial_small() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
    }

    #[test]
    fn factorial_past_usize() {
        let f20 = factorial(20);
        assert_eq!(f20, 2_432_902_008_176_640_000.0);
        assert!((factorial(22) / (f20 * 21.0 * 22.0) - 1.0).abs() < 1e-15);
        assert!(factorial(171).is_infinite());
    }

    #[test]
    fn sph_harm_low_orders() {
        let (az, pol) = (0.7, 1.1);
        let y10 = sph_harm(0, 1, az, pol);
        assert!((y10.re - 0.5 * (3.0 / PI).sqrt() * pol.cos()).abs() < 1e-12);
        assert!(y10.im.abs() < 1e-12);

        // |Y₁^±1|² = 3 sin²φ / 8π
        let y11 = sph_harm(1, 1, az, pol);
        let y1m1 = sph_harm(-1, 1, az, pol);
        let mod_sq = 3.0 * pol.sin().powi(2) / (8.0 * PI);
        assert!((y11.norm_sqr() - mod_sq).abs() < 1e-12);
        assert!((y1m1.norm_sqr() - mod_sq).abs() < 1e-12);

        // |Y₂^±2|² = 15 sin⁴φ / 32π
        let mod_sq = 15.0 * pol.sin().powi(4) / (32.0 * PI);
        assert!((sph_harm(-2, 2, az, pol).norm_sqr() - mod_sq).abs() < 1e-12);

        assert_eq!(sph_harm(3, 2, az, pol), C64::zero());
    }

    #[test]
    fn sph_harm_azimuthal_phase() {
        // Y_l^m ∝ e^(i m θ), so shifting the azimuth by δ multiplies by e^(i m δ)
        let (az, pol, delta) = (0.3, 0.9, 0.8);
        for &(m, l) in [(1, 1), (-1, 2), (2, 3), (-3, 3)].iter() {
            let y0 = sph_harm(m, l, az, pol);
            let y1 = sph_harm(m, l, az + delta, pol);
            let expected = y0 * C64::from_polar(1.0, f64::from(m) * delta);
            assert!((y1 - expected).norm() < 1e-12, "m = {m}, l = {l}");
        }
    }
}
