//! Closed-form radial and full wavefunctions of hydrogen-like states.
//!
//! Every evaluator here is built from an implicitly normalized snapshot of a
//! [`State`]: the state's amplitudes are rescaled to unit sum of squares when
//! the evaluator is constructed, and the caller's state is left untouched.
//! Evaluators can be called on single coordinates (`at`) or elementwise on
//! one-dimensional arrays (`eval`).
//!
//! ```
//! use ndarray as nd;
//! use qpsi::{ State, units::DEF_A0 };
//!
//! let s1 = State::new(1, 0, 0, 0.5).unwrap();
//! let R = s1.radial(DEF_A0).unwrap();
//! assert!((R.at(0.0) - 2.0 / DEF_A0.powf(1.5)).abs() < 1e-12);
//!
//! let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 5.0, 50);
//! assert_eq!(R.eval(&r).len(), 50);
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use scilib::math::polynomial::Poly;
use crate::{
    Arr1,
    error::{ LengthError, PsiError },
    special::{ factorial, sph_harm },
    state::{ PsiResult, State, Term },
};

// a single normalized term with its radial prefactor and Laguerre polynomial
// computed once
#[derive(Clone, Debug)]
struct TermEval {
    c: f64,
    l: u32,
    ml: i32,
    // n * a0
    na0: f64,
    // sqrt( (2 / n a0)³ (n - l - 1)! / (2 n (n + l)!) )
    norm: f64,
    // L_(n - l - 1)^(2l + 1)
    laguerre: Poly,
}

impl TermEval {
    fn new(term: &Term, a0: f64) -> Self {
        let Term { n, l, ml, coeff, .. } = *term;
        let nf = f64::from(n);
        let na0 = nf * a0;
        let norm
            = (
                (2.0 / na0).powi(3) * factorial(n - l - 1)
                / (2.0 * nf * factorial(n + l))
            ).sqrt();
        let laguerre
            = Poly::laguerre((n - l - 1) as usize, f64::from(2 * l + 1));
        Self { c: coeff, l, ml, na0, norm, laguerre }
    }

    fn radial(&self, r: f64) -> f64 {
        let rho = 2.0 * r / self.na0;
        let L: f64 = self.laguerre.compute(rho);
        self.c * self.norm
            * (-r / self.na0).exp()
            * rho.powi(self.l as i32)
            * L
    }

    fn full(&self, r: f64, theta: f64, phi: f64) -> C64 {
        self.radial(r) * sph_harm(self.ml, self.l, theta, phi)
    }
}

fn snapshot(state: &State, a0: f64) -> PsiResult<Vec<TermEval>> {
    PsiError::check_a0(a0)?;
    let psi = state.normalized()?;
    Ok(psi.terms().iter().map(|t| TermEval::new(t, a0)).collect())
}

fn check_coords<S, T, U>(r: &Arr1<S>, theta: &Arr1<T>, phi: &Arr1<U>)
    -> PsiResult<()>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    LengthError::check(r, theta)?;
    LengthError::check(r, phi)?;
    Ok(())
}

/// Radial wavefunction *R*(*r*) of a state.
///
/// For a superposition, this is the amplitude-weighted sum of the radial
/// functions of all terms.
#[derive(Clone, Debug)]
pub struct Radial {
    terms: Vec<TermEval>,
}

impl Radial {
    /// Evaluate at a single radius.
    pub fn at(&self, r: f64) -> f64 {
        self.terms.iter().map(|t| t.radial(r)).sum()
    }

    /// Evaluate elementwise over an array of radii.
    pub fn eval<S>(&self, r: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        r.mapv(|rk| self.at(rk))
    }
}

/// Radial probability density *P*(*r*) = *r*² |*R*(*r*)|².
#[derive(Clone, Debug)]
pub struct RadialProb {
    radial: Radial,
}

impl RadialProb {
    /// Evaluate at a single radius.
    pub fn at(&self, r: f64) -> f64 {
        r.powi(2) * self.radial.at(r).powi(2)
    }

    /// Evaluate elementwise over an array of radii.
    pub fn eval<S>(&self, r: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        r.mapv(|rk| self.at(rk))
    }
}

/// Full (complex) wavefunction Ψ(*r*, θ, φ), where θ ∊ [0, 2π) is the
/// azimuthal angle and φ ∊ [0, π] is the polar angle.
#[derive(Clone, Debug)]
pub struct Wavefunction {
    terms: Vec<TermEval>,
}

impl Wavefunction {
    /// Evaluate at a single point.
    pub fn at(&self, r: f64, theta: f64, phi: f64) -> C64 {
        self.terms.iter()
            .fold(C64::zero(), |acc, t| acc + t.full(r, theta, phi))
    }

    /// Evaluate elementwise over coordinate arrays, which must all have the
    /// same length.
    pub fn eval<S, T, U>(&self, r: &Arr1<S>, theta: &Arr1<T>, phi: &Arr1<U>)
        -> PsiResult<nd::Array1<C64>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
    {
        check_coords(r, theta, phi)?;
        let psi: nd::Array1<C64>
            = nd::Zip::from(r).and(theta).and(phi)
            .map_collect(|&rk, &thk, &phk| self.at(rk, thk, phk));
        Ok(psi)
    }
}

/// Selects how a [`Density`] is computed from the complex wavefunction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DensityKind {
    /// |Re Ψ|², which is what gets plotted by default.
    #[default]
    RealPart,
    /// |Ψ|², the physical probability density.
    Modulus,
}

/// Probability density over space, computed from a [`Wavefunction`].
#[derive(Clone, Debug)]
pub struct Density {
    wf: Wavefunction,
    kind: DensityKind,
}

impl Density {
    /// Return the kind of density computed.
    pub fn kind(&self) -> DensityKind { self.kind }

    /// Evaluate at a single point.
    pub fn at(&self, r: f64, theta: f64, phi: f64) -> f64 {
        let psi = self.wf.at(r, theta, phi);
        match self.kind {
            DensityKind::RealPart => psi.re.powi(2),
            DensityKind::Modulus => psi.norm_sqr(),
        }
    }

    /// Evaluate elementwise over coordinate arrays, which must all have the
    /// same length.
    pub fn eval<S, T, U>(&self, r: &Arr1<S>, theta: &Arr1<T>, phi: &Arr1<U>)
        -> PsiResult<nd::Array1<f64>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
    {
        check_coords(r, theta, phi)?;
        let rho: nd::Array1<f64>
            = nd::Zip::from(r).and(theta).and(phi)
            .map_collect(|&rk, &thk, &phk| self.at(rk, thk, phk));
        Ok(rho)
    }
}

impl State {
    /// Return the radial wavefunction of the normalized state for Bohr
    /// radius `a0 > 0`.
    pub fn radial(&self, a0: f64) -> PsiResult<Radial> {
        Ok(Radial { terms: snapshot(self, a0)? })
    }

    /// Return the radial probability density of the normalized state for
    /// Bohr radius `a0 > 0`.
    pub fn radial_prob(&self, a0: f64) -> PsiResult<RadialProb> {
        Ok(RadialProb { radial: self.radial(a0)? })
    }

    /// Return the full wavefunction of the normalized state for Bohr radius
    /// `a0 > 0`.
    pub fn wavefunction(&self, a0: f64) -> PsiResult<Wavefunction> {
        Ok(Wavefunction { terms: snapshot(self, a0)? })
    }

    /// Return the probability density of the normalized state for Bohr
    /// radius `a0 > 0`.
    pub fn density(&self, a0: f64, kind: DensityKind) -> PsiResult<Density> {
        Ok(Density { wf: self.wavefunction(a0)?, kind })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use crate::{ quad::integrate_semi_inf, units::DEF_A0 };
    use super::*;

    const A0: f64 = DEF_A0;

    fn state(n: u32, l: u32, ml: i32) -> State {
        State::new(n, l, ml, 0.5).unwrap()
    }

    #[test]
    fn ground_state_peak() {
        let R = state(1, 0, 0).radial(A0).unwrap();
        assert!((R.at(0.0) - 2.0 / A0.powf(1.5)).abs() < 1e-12);
    }

    #[test]
    fn matches_tabulated_radial_functions() {
        let R20 = state(2, 0, 0).radial(A0).unwrap();
        let R21 = state(2, 1, 1).radial(A0).unwrap();
        let R32 = state(3, 2, 0).radial(A0).unwrap();
        for &r in [0.0, 0.1, 0.5, 1.3, 4.0].iter() {
            let x = r / A0;
            let pre = A0.powf(-1.5);
            let r20 = pre / (2.0 * 2.0_f64.sqrt()) * (2.0 - x) * (-x / 2.0).exp();
            let r21 = pre / (2.0 * 6.0_f64.sqrt()) * x * (-x / 2.0).exp();
            let r32
                = pre * 4.0 / (81.0 * 30.0_f64.sqrt()) * x * x * (-x / 3.0).exp();
            assert!((R20.at(r) - r20).abs() < 1e-10);
            assert!((R21.at(r) - r21).abs() < 1e-10);
            assert!((R32.at(r) - r32).abs() < 1e-10);
        }
    }

    #[test]
    fn radial_prob_is_normalized() {
        for &(n, l) in [(1, 0), (2, 1), (3, 0), (3, 2), (4, 1)].iter() {
            let P = state(n, l, 0).radial_prob(A0).unwrap();
            let total = integrate_semi_inf(|r| P.at(r), 0.0, 1e-10, 50).unwrap();
            assert!((total - 1.0).abs() < 1e-6, "n = {n}, l = {l}: {total}");
        }
    }

    #[test]
    fn evaluation_uses_normalized_snapshot() {
        let s = state(2, 1, 0);
        let big = 5.0 * &s;
        let (R, Rbig) = (s.radial(A0).unwrap(), big.radial(A0).unwrap());
        assert!((R.at(0.7) - Rbig.at(0.7)).abs() < 1e-12);
        assert_eq!(big.coeffs(), vec![5.0]);

        let sup = 3.0 * state(1, 0, 0) + 4.0 * state(2, 0, 0);
        let Rsup = sup.radial(A0).unwrap();
        let R1 = state(1, 0, 0).radial(A0).unwrap();
        let R2 = state(2, 0, 0).radial(A0).unwrap();
        let r = 0.9;
        assert!((Rsup.at(r) - (0.6 * R1.at(r) + 0.8 * R2.at(r))).abs() < 1e-12);
    }

    #[test]
    fn extreme_amplitudes_evaluate_like_unit_ones() {
        let peak = 2.0 / A0.powf(1.5);
        for &c in [1e200, 1e-200].iter() {
            let s = State::with_coeff(1, 0, 0, 0.5, c).unwrap();
            let R = s.radial(A0).unwrap();
            assert!((R.at(0.0) - peak).abs() < 1e-12, "c = {c:e}");
        }
    }

    #[test]
    fn array_evaluation() {
        let s = state(3, 1, -1);
        let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 6.0, 31);
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, 6.0, 31);
        let phi: nd::Array1<f64> = nd::Array1::linspace(0.0, 3.0, 31);
        let R = s.radial(A0).unwrap();
        let P = s.radial_prob(A0).unwrap();
        let psi = s.wavefunction(A0).unwrap();
        let rho = s.density(A0, DensityKind::Modulus).unwrap();
        let Rr = R.eval(&r);
        let Pr = P.eval(&r.view());
        let psir = psi.eval(&r, &theta, &phi).unwrap();
        let rhor = rho.eval(&r, &theta, &phi).unwrap();
        assert_eq!(Rr.len(), 31);
        for k in 0..31 {
            assert_eq!(Rr[k], R.at(r[k]));
            assert!((Pr[k] - r[k].powi(2) * Rr[k].powi(2)).abs() < 1e-12);
            assert_eq!(psir[k], psi.at(r[k], theta[k], phi[k]));
            assert!((rhor[k] - psir[k].norm_sqr()).abs() < 1e-12);
        }
    }

    #[test]
    fn mismatched_coordinates() {
        let psi = state(2, 1, 0).wavefunction(A0).unwrap();
        let r = nd::array![0.1, 0.2, 0.3];
        let theta = nd::array![0.1, 0.2];
        assert!(matches!(
            psi.eval(&r, &theta, &r),
            Err(PsiError::Length(LengthError(3, 2))),
        ));
    }

    #[test]
    fn density_kinds() {
        let (r, theta, phi) = (1.1, 0.8, 1.2);
        let p0 = state(2, 1, 0);
        let re = p0.density(A0, DensityKind::default()).unwrap();
        let md = p0.density(A0, DensityKind::Modulus).unwrap();
        assert_eq!(re.kind(), DensityKind::RealPart);
        assert!((re.at(r, theta, phi) - md.at(r, theta, phi)).abs() < 1e-14);

        let p1 = state(2, 1, 1);
        let re = p1.density(A0, DensityKind::RealPart).unwrap();
        let md = p1.density(A0, DensityKind::Modulus).unwrap();
        let psi = p1.wavefunction(A0).unwrap().at(r, theta, phi);
        assert!(psi.im.abs() > 0.0);
        assert!((re.at(r, theta, phi) - psi.re.powi(2)).abs() < 1e-14);
        assert!(re.at(r, theta, phi) < md.at(r, theta, phi));
        // |Ψ|² doesn't depend on the azimuthal angle for a single term
        assert!((md.at(r, 0.1, phi) - md.at(r, 2.0 * PI - 0.3, phi)).abs() < 1e-14);
    }

    #[test]
    fn bad_parameters() {
        let s = state(1, 0, 0);
        assert!(matches!(s.radial(0.0), Err(PsiError::BadA0(_))));
        assert!(matches!(s.wavefunction(-1.0), Err(PsiError::BadA0(_))));
        assert!(matches!(
            (0.0 * &s).density(A0, DensityKind::Modulus),
            Err(PsiError::ZeroNorm),
        ));
    }
}
