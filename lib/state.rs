//! Hydrogen-like eigenstates and their (real) linear combinations.
//!
//! A [`State`] is a non-empty, ordered list of basis [`Term`]s, each carrying
//! a full set of quantum numbers and a real amplitude. A single eigenstate is
//! simply a one-term state. States are values: every operation here returns a
//! new state and leaves its operands untouched.
//!
//! ```
//! use qpsi::State;
//!
//! let s1 = State::new(1, 0, 0, 0.5).unwrap();
//! let p0 = State::new(2, 1, 0, 0.5).unwrap();
//! let psi = (2.0 * s1 - p0).normalized().unwrap();
//! assert_eq!(psi.len(), 2);
//! assert!((psi.norm_sq() - 1.0).abs() < 1e-12);
//! assert_eq!(
//!     psi.to_string(),
//!     "0.894·│ n = 1, l = 0, ml = 0, ms = +1/2 ⧽ \
//!     - 0.447·│ n = 2, l = 1, ml = 0, ms = +1/2 ⧽",
//! );
//! ```

use std::{ fmt, ops::{ Add, Div, Mul, Neg, Sub } };
use crate::error::{ LengthError, PsiError };

pub type PsiResult<T> = Result<T, PsiError>;

/// Spin projection *m*<sub>*s*</sub> of an electron.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Spin {
    /// *m*<sub>*s*</sub> = -1/2
    Down,
    /// *m*<sub>*s*</sub> = +1/2
    Up,
}

impl Spin {
    /// Numerical value of the projection, ±1/2.
    pub fn value(self) -> f64 {
        match self {
            Self::Down => -0.5,
            Self::Up => 0.5,
        }
    }
}

impl TryFrom<f64> for Spin {
    type Error = PsiError;

    fn try_from(ms: f64) -> PsiResult<Self> {
        if ms == 0.5 {
            Ok(Self::Up)
        } else if ms == -0.5 {
            Ok(Self::Down)
        } else {
            Err(PsiError::BadSpin(ms))
        }
    }
}

impl From<Spin> for f64 {
    fn from(ms: Spin) -> Self { ms.value() }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "-1/2"),
            Self::Up => write!(f, "+1/2"),
        }
    }
}

/// A single basis term: one eigenstate with a real amplitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Term {
    /// Principal quantum number.
    pub n: u32,
    /// Orbital angular momentum quantum number.
    pub l: u32,
    /// Magnetic quantum number.
    pub ml: i32,
    /// Spin projection.
    pub ms: Spin,
    /// Amplitude.
    pub coeff: f64,
}

impl Term {
    /// Create a new term, checking that `n ≥ 1`, `l < n`, `|ml| ≤ l`, and that
    /// `coeff` is finite.
    pub fn new(n: u32, l: u32, ml: i32, ms: Spin, coeff: f64) -> PsiResult<Self> {
        let term = Self { n, l, ml, ms, coeff };
        term.check()?;
        Ok(term)
    }

    pub(crate) fn check(&self) -> PsiResult<()> {
        let Self { n, l, ml, coeff, .. } = *self;
        (n >= 1 && l < n && ml.unsigned_abs() <= l)
            .then_some(())
            .ok_or(PsiError::BadQuantumNumbers { n, l, ml })?;
        PsiError::check_coeff(coeff)
    }

    // write the ket with coefficient magnitude only
    fn fmt_ket(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}·│ n = {}, l = {}, ml = {}, ms = {} ⧽",
            self.coeff.abs(), self.n, self.l, self.ml, self.ms,
        )
    }
}

/// Selects the divisor used in [`State::normalized_with`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Divide by √(Σ *c*<sub>*i*</sub>²), so that the normalized
    /// coefficients have unit sum of squares.
    #[default]
    Euclidean,
    /// Divide by Σ *c*<sub>*i*</sub>² without the square root.
    ///
    /// This does *not* produce a unit sum of squares unless the sum was
    /// already 1; it exists for compatibility with data generated that way.
    SumOfSquares,
}

/// A (possibly superposed) hydrogen-like state.
///
/// Always contains at least one term; term order is insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    terms: Vec<Term>,
}

impl State {
    /// Create a single eigenstate with unit amplitude.
    ///
    /// `ms` must be exactly ±0.5.
    pub fn new(n: u32, l: u32, ml: i32, ms: f64) -> PsiResult<Self> {
        Self::with_coeff(n, l, ml, ms, 1.0)
    }

    /// Create a single eigenstate with amplitude `coeff`.
    pub fn with_coeff(n: u32, l: u32, ml: i32, ms: f64, coeff: f64)
        -> PsiResult<Self>
    {
        let term = Term::new(n, l, ml, ms.try_into()?, coeff)?;
        Ok(Self { terms: vec![term] })
    }

    /// Create a superposition from a list of terms.
    pub fn from_terms<I>(terms: I) -> PsiResult<Self>
    where I: IntoIterator<Item = Term>
    {
        let terms: Vec<Term> = terms.into_iter().collect();
        if terms.is_empty() { return Err(PsiError::Empty); }
        terms.iter().try_for_each(Term::check)?;
        Ok(Self { terms })
    }

    /// Create a superposition from parallel slices of quantum numbers and
    /// amplitudes, where position *i* in every slice describes one term.
    ///
    /// All slices must have the same, nonzero length; ragged input is
    /// rejected with [`PsiError::Length`].
    pub fn from_parallel(
        n: &[u32],
        l: &[u32],
        ml: &[i32],
        ms: &[f64],
        coeff: &[f64],
    ) -> PsiResult<Self>
    {
        let len = n.len();
        LengthError::check_len(len, l.len())?;
        LengthError::check_len(len, ml.len())?;
        LengthError::check_len(len, ms.len())?;
        LengthError::check_len(len, coeff.len())?;
        let terms: Vec<Term>
            = n.iter().zip(l).zip(ml).zip(ms).zip(coeff)
            .map(|((((&n, &l), &ml), &ms), &c)| {
                Term::new(n, l, ml, ms.try_into()?, c)
            })
            .collect::<PsiResult<_>>()?;
        Self::from_terms(terms)
    }

    /// Return the terms of the state, in order.
    pub fn terms(&self) -> &[Term] { &self.terms }

    /// Return the number of terms.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.terms.len() }

    /// Return `true` if the state has more than one term.
    pub fn is_superposition(&self) -> bool { self.terms.len() > 1 }

    /// Return the amplitudes of all terms, in order.
    pub fn coeffs(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.coeff).collect()
    }

    /// Return the sum of squared amplitudes.
    pub fn norm_sq(&self) -> f64 {
        let (m, q) = self.scaled_norm_sq();
        if m == 0.0 { 0.0 } else { m * m * q }
    }

    // largest amplitude magnitude m and Σ (c / m)², so that Σ c² = m² q
    // without intermediate over- or underflow
    fn scaled_norm_sq(&self) -> (f64, f64) {
        let m: f64
            = self.terms.iter()
            .map(|t| t.coeff.abs())
            .fold(0.0, f64::max);
        if m == 0.0 { return (0.0, 0.0); }
        let q: f64 = self.terms.iter().map(|t| (t.coeff / m).powi(2)).sum();
        (m, q)
    }

    fn map_coeffs<F>(&self, mut f: F) -> Self
    where F: FnMut(f64) -> f64
    {
        let terms: Vec<Term>
            = self.terms.iter()
            .map(|t| Term { coeff: f(t.coeff), ..*t })
            .collect();
        Self { terms }
    }

    fn all_finite(&self) -> bool {
        self.terms.iter().all(|t| t.coeff.is_finite())
    }

    /// Return a copy of `self` with all amplitudes multiplied by `k`.
    ///
    /// Fails with [`PsiError::InvalidOperand`] if `k` is not finite or any
    /// product overflows.
    pub fn try_scale(&self, k: f64) -> PsiResult<Self> {
        k.is_finite().then_some(()).ok_or(PsiError::InvalidOperand(k))?;
        let scaled = self.map_coeffs(|c| c * k);
        scaled.all_finite().then_some(scaled).ok_or(PsiError::InvalidOperand(k))
    }

    /// Return a copy of `self` with all amplitudes divided by `k`.
    ///
    /// Fails with [`PsiError::InvalidOperand`] if `k` is zero or not finite,
    /// or if any quotient overflows.
    pub fn try_div(&self, k: f64) -> PsiResult<Self> {
        (k.is_finite() && k != 0.0)
            .then_some(())
            .ok_or(PsiError::InvalidOperand(k))?;
        let scaled = self.map_coeffs(|c| c / k);
        scaled.all_finite().then_some(scaled).ok_or(PsiError::InvalidOperand(k))
    }

    /// Return a normalized copy of `self`, such that the squared amplitudes
    /// sum to 1.
    ///
    /// Fails with [`PsiError::ZeroNorm`] if all amplitudes are zero.
    pub fn normalized(&self) -> PsiResult<Self> {
        self.normalized_with(Normalization::Euclidean)
    }

    /// Like [`Self::normalized`], but with an explicit choice of divisor.
    ///
    /// With [`Normalization::SumOfSquares`], fails with
    /// [`PsiError::BadCoeff`] if a rescaled amplitude is not representable.
    pub fn normalized_with(&self, norm: Normalization) -> PsiResult<Self> {
        let (m, q) = self.scaled_norm_sq();
        if m == 0.0 { return Err(PsiError::ZeroNorm); }
        let psi
            = match norm {
                Normalization::Euclidean => {
                    let d = q.sqrt();
                    self.map_coeffs(|c| c / m / d)
                },
                Normalization::SumOfSquares => {
                    let d = m * q;
                    self.map_coeffs(|c| c / m / d)
                },
            };
        psi.terms.iter().try_for_each(|t| PsiError::check_coeff(t.coeff))?;
        Ok(psi)
    }
}

/// Ket notation, e.g. `0.816·│ n = 2, l = 1, ml = 0, ms = -1/2 ⧽`.
///
/// Terms are joined by ` + ` or ` - ` according to the sign of their
/// amplitude, and terms with zero amplitude are omitted from superpositions.
/// A single-term state is always written as its ket; a superposition with only
/// zero amplitudes is written `0`.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keep_zeros = !self.is_superposition();
        let mut first = true;
        for term in self.terms.iter().filter(|t| keep_zeros || t.coeff != 0.0) {
            match (first, term.coeff < 0.0) {
                (true, false) => { },
                (true, true) => write!(f, "-")?,
                (false, false) => write!(f, " + ")?,
                (false, true) => write!(f, " - ")?,
            }
            term.fmt_ket(f)?;
            first = false;
        }
        if first { write!(f, "0")?; }
        Ok(())
    }
}

// Operator forms of the algebra. Scaling operators panic on the inputs for
// which `try_scale`/`try_div` return errors.

impl Mul<f64> for &State {
    type Output = State;

    /// *Panics if `k` is not finite*.
    fn mul(self, k: f64) -> State {
        self.try_scale(k).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Mul<f64> for State {
    type Output = State;

    fn mul(self, k: f64) -> State { &self * k }
}

impl Mul<&State> for f64 {
    type Output = State;

    fn mul(self, state: &State) -> State { state * self }
}

impl Mul<State> for f64 {
    type Output = State;

    fn mul(self, state: State) -> State { &state * self }
}

impl Div<f64> for &State {
    type Output = State;

    /// *Panics if `k` is zero or not finite*.
    fn div(self, k: f64) -> State {
        self.try_div(k).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Div<f64> for State {
    type Output = State;

    fn div(self, k: f64) -> State { &self / k }
}

impl Neg for &State {
    type Output = State;

    fn neg(self) -> State { self.map_coeffs(|c| -c) }
}

impl Neg for State {
    type Output = State;

    fn neg(self) -> State { -&self }
}

impl Add<State> for State {
    type Output = State;

    fn add(mut self, rhs: State) -> State {
        self.terms.extend(rhs.terms);
        self
    }
}

impl Add<&State> for &State {
    type Output = State;

    fn add(self, rhs: &State) -> State { self.clone() + rhs.clone() }
}

impl Sub<State> for State {
    type Output = State;

    fn sub(self, rhs: State) -> State { self + (-rhs) }
}

impl Sub<&State> for &State {
    type Output = State;

    fn sub(self, rhs: &State) -> State { self.clone() + (-rhs) }
}
