//! Scalar quantities derived from a state: the mean radius and the
//! Bohr-model orbit radius.

use crate::{
    error::PsiError,
    quad::integrate_semi_inf,
    state::{ PsiResult, State },
    DEF_QUAD_EPSILON,
    DEF_QUAD_MAXDEPTH,
};

impl State {
    /// Compute the expectation value ⟨*r*⟩ = ∫₀^∞ *r* *P*(*r*) d*r* of the
    /// normalized state by numerical quadrature.
    ///
    /// ```
    /// use qpsi::{ State, units::DEF_A0 };
    ///
    /// // ⟨r⟩ = 3 a0 / 2 for the ground state
    /// let s1 = State::new(1, 0, 0, 0.5).unwrap();
    /// assert!((s1.mean_r(DEF_A0).unwrap() - 1.5 * DEF_A0).abs() < 1e-8);
    /// ```
    pub fn mean_r(&self, a0: f64) -> PsiResult<f64> {
        self.mean_r_with(a0, DEF_QUAD_EPSILON)
    }

    /// Like [`Self::mean_r`], but with an explicit absolute tolerance
    /// `epsilon > 0` for the quadrature.
    pub fn mean_r_with(&self, a0: f64, epsilon: f64) -> PsiResult<f64> {
        let P = self.radial_prob(a0)?;
        let r_mean
            = integrate_semi_inf(|r| r * P.at(r), 0.0, epsilon, DEF_QUAD_MAXDEPTH)?;
        Ok(r_mean)
    }

    /// Return the Bohr-model radius *n*² *a*<sub>0</sub>.
    ///
    /// Fails with [`PsiError::InvalidOperation`] if the state is a
    /// superposition of terms with different principal quantum numbers.
    pub fn bohr_radius(&self, a0: f64) -> PsiResult<f64> {
        PsiError::check_a0(a0)?;
        let n0 = self.terms()[0].n;
        if let Some(t) = self.terms().iter().find(|t| t.n != n0) {
            return Err(PsiError::InvalidOperation(n0, t.n));
        }
        Ok(f64::from(n0).powi(2) * a0)
    }
}
