#![allow(non_upper_case_globals)]

//! Length scales used to parameterize the hydrogen wavefunctions.
//!
//! All wavefunction routines take the Bohr radius `a0` as a plain number, so
//! results come out in whatever length unit `a0` is expressed in. The default
//! used throughout the crate is [`DEF_A0`], the Bohr radius in ångströms
//! rounded to three digits.
//!
//! Concrete physical constants are taken from NIST.

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// ångström (m)
pub const angstrom: f64 = 1e-10;
//                    +/- 0 (exact)

/// nanometer (m)
pub const nm: f64 = 1e-9;
//              +/- 0 (exact)

/// Default Bohr radius in ångströms, rounded.
pub const DEF_A0: f64 = 0.529;

/// Express the Bohr radius in a length unit equal to `unit` meters.
///
/// ```
/// use qpsi::units::{ a0_in, angstrom };
///
/// assert!((a0_in(angstrom) - 0.529177210903).abs() < 1e-12);
/// ```
pub fn a0_in(unit: f64) -> f64 { a0 / unit }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_angstrom_value() {
        assert!((a0_in(angstrom) - DEF_A0).abs() < 1e-3);
        assert!((a0_in(nm) - 0.0529177210903).abs() < 1e-12);
        assert!((a0_in(1.0) - a0).abs() < 1e-24);
    }
}
