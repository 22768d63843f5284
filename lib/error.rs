//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        Self::check_len(a.len(), b.len())
    }

    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from functions in [`quad`][crate::quad].
#[derive(Debug, Error)]
pub enum QuadError {
    /// Returned when a non-positive or non-finite tolerance is encountered.
    #[error("quadrature tolerance must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when an integration bound is NaN.
    #[error("integration bounds must not be NaN; got ({0}, {1})")]
    BadBounds(f64, f64),
}

impl QuadError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0 && epsilon.is_finite())
            .then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), Self> {
        (!a.is_nan() && !b.is_nan())
            .then_some(()).ok_or(Self::BadBounds(a, b))
    }
}

/// Returned from state construction, state algebra, wavefunction evaluation,
/// and sampling functions.
#[derive(Debug, Error)]
pub enum PsiError {
    /// Returned when a state is scaled by a non-finite number or divided by
    /// zero.
    #[error("invalid operand: states may only be scaled by finite, nonzero reals; got {0}")]
    InvalidOperand(f64),

    /// Returned when the Bohr radius is requested for a superposition of
    /// terms with different principal quantum numbers.
    #[error("invalid operation: state mixes principal quantum numbers {0} and {1}")]
    InvalidOperation(u32, u32),

    /// Returned when a term's quantum numbers violate `n ≥ 1`, `l < n`, or
    /// `|ml| ≤ l`.
    #[error("bad quantum numbers: require n ≥ 1, 0 ≤ l < n, |ml| ≤ l; got n = {n}, l = {l}, ml = {ml}")]
    BadQuantumNumbers { n: u32, l: u32, ml: i32 },

    /// Returned when a spin projection other than ±1/2 is encountered.
    #[error("spin projection must be ±1/2; got {0}")]
    BadSpin(f64),

    /// Returned when a non-finite coefficient is encountered.
    #[error("coefficients must be finite; got {0}")]
    BadCoeff(f64),

    /// Returned when a state would be constructed with no terms.
    #[error("states must contain at least one term")]
    Empty,

    /// Returned when normalizing a state whose coefficients are all zero.
    #[error("cannot normalize a state with all-zero coefficients")]
    ZeroNorm,

    /// Returned when a non-positive or non-finite Bohr radius is encountered.
    #[error("a0 must be greater than 0; got {0}")]
    BadA0(f64),

    /// Returned when a non-positive or non-finite sampling radius is
    /// encountered.
    #[error("rmax must be greater than 0; got {0}")]
    BadRmax(f64),

    /// Returned when a negative or NaN threshold is encountered.
    #[error("epsilon must be non-negative; got {0}")]
    BadEpsilon(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`QuadError`]
    #[error("quadrature error: {0}")]
    Quad(#[from] QuadError),
}

impl PsiError {
    pub(crate) fn check_a0(a0: f64) -> Result<(), Self> {
        (a0 > 0.0 && a0.is_finite()).then_some(()).ok_or(Self::BadA0(a0))
    }

    pub(crate) fn check_rmax(rmax: f64) -> Result<(), Self> {
        (rmax > 0.0 && rmax.is_finite())
            .then_some(()).ok_or(Self::BadRmax(rmax))
    }

    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon >= 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_coeff(coeff: f64) -> Result<(), Self> {
        coeff.is_finite().then_some(()).ok_or(Self::BadCoeff(coeff))
    }
}
