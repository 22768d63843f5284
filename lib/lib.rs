#![allow(non_snake_case)]

//! Provides quantum states of hydrogen-like atoms, identified by their quantum
//! numbers (*n*, *l*, *m*<sub>*l*</sub>, *m*<sub>*s*</sub>), along with the
//! closed-form radial and full wavefunctions of those states, their
//! probability densities, and a Monte-Carlo sampler turning a density into a
//! point cloud for 3D scatter plots.
//!
//! States form a (real) vector space: they can be scaled by real numbers and
//! added or subtracted to form superpositions, and normalized.
//!
//! ```
//! use qpsi::{ State, units::DEF_A0 };
//!
//! let p1 = State::new(2, 1, 0, -0.5).unwrap();
//! let p2 = State::new(2, 1, -1, 0.5).unwrap();
//! let p = (2.0_f64 / 3.0).sqrt() * p1 - (1.0_f64 / 3.0).sqrt() * p2;
//! assert_eq!(p.len(), 2);
//! assert!((p.bohr_radius(DEF_A0).unwrap() - 4.0 * DEF_A0).abs() < 1e-12);
//! ```
//!
//! Provides implementations for the following routines:
//! - State algebra: scaling, addition, subtraction, normalization
//! - Radial wavefunction, radial probability, full (complex) wavefunction,
//!   and probability density, evaluated pointwise or over arrays
//! - Mean radius via adaptive quadrature over a semi-infinite interval
//! - Uniform-by-volume point sampling, thresholding, and plot data
//!   generation
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod expect;
pub mod quad;
pub mod sample;
pub mod special;
pub mod state;
pub mod units;
pub mod wavefunction;

pub mod docs;

pub use error::PsiError;
pub use sample::{ Coords, PlotConfig, PlotData };
pub use state::{ Normalization, PsiResult, Spin, State, Term };
pub use wavefunction::{ Density, DensityKind, Radial, RadialProb, Wavefunction };

/// Default threshold below which (normalized) density samples are dropped.
pub(crate) const DEF_EPSILON: f64 = 1e-3;
/// Default tolerance for adaptive quadrature.
pub(crate) const DEF_QUAD_EPSILON: f64 = 1e-10;
/// Default recursion limit for adaptive quadrature.
pub(crate) const DEF_QUAD_MAXDEPTH: usize = 50;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
