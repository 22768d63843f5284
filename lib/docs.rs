//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Coordinates](#coordinates)
//! - [Superpositions](#superpositions)
//! - [Sampling](#sampling)
//!
//! # Background
//! The bound states of an electron in the Coulomb potential of a point nucleus
//! (neglecting spin-orbit coupling and the motion of the nucleus) are
//! separable into radial and angular parts,
//! ```text
//! ψ(r, θ, φ) = R_nl(r) Y_l^m(θ, φ)
//! ```
//! labeled by the principal quantum number *n* ∊ {1, 2, ...}, the orbital
//! angular momentum quantum number *l* ∊ {0, ..., *n* - 1}, and the magnetic
//! quantum number *m* ∊ {-*l*, ..., *l*}. The spin projection *m*<sub>*s*</sub>
//! = ±1/2 labels the state but does not enter the spatial wavefunction.
//!
//! With Bohr radius *a*<sub>0</sub> and *ρ* ≡ 2 *r* / *n* *a*<sub>0</sub>, the
//! radial part is
//! ```text
//!                 ┌─────────────────────────────┐
//!                 │ ( 2  )³    (n - l - 1)!
//! R_nl(r) =      ╲│ (----)  ----------------   e^(-ρ/2) ρ^l L_(n-l-1)^(2l+1)(ρ)
//!                 │ (n a0)    2 n (n + l)!
//! ```
//! where *L*<sub>*k*</sub><sup>(α)</sup> is the generalized Laguerre
//! polynomial, built once per term with [`scilib`]'s `Poly::gen_laguerre`.
//! This normalization makes ∫₀^∞ *r*² |*R*<sub>*nl*</sub>|² d*r* = 1. At the
//! origin, only *l* = 0 states survive; for the ground state,
//! *R*<sub>10</sub>(0) = 2 / *a*<sub>0</sub><sup>3/2</sup>.
//!
//! The angular part is the complex spherical harmonic
//! ```text
//!              ┌───────────────────────┐
//!              │ 2 l + 1  (l - m)!
//! Y_l^m =     ╲│ ------- ---------      P_l^m(cos φ) e^(i m θ)
//!              │   4 π    (l + m)!
//! ```
//! as computed by `scilib::quantum::spherical_harmonics`, which takes the polar
//! angle before the azimuthal one; [`sph_harm`][sph] swaps them into the order
//! used here.
//!
//! The mean radius of a state is computed numerically as
//! ```text
//!       ∞
//! ⟨r⟩ = ∫ r · r² |R(r)|² dr
//!       0
//! ```
//! For a single eigenstate this should agree with the closed form
//! ⟨*r*⟩ = *a*<sub>0</sub> (3 *n*² - *l* (*l* + 1)) / 2, while the Bohr model
//! assigns the orbit radius *n*² *a*<sub>0</sub>, which is only defined if all
//! terms in a state share the same *n*.
//!
//! # Coordinates
//! Throughout this crate, θ ∊ [0, 2π) is the *azimuthal* angle and φ ∊ [0, π]
//! is the *polar* angle (the reverse of the usual physics convention), so
//! that
//! ```text
//! x = r cos θ sin φ
//! y = r sin θ sin φ
//! z = r cos φ
//! ```
//! Swapping the two angles in either the spherical harmonics or this
//! conversion changes the shape of the plotted orbitals, so the pairing has
//! to be kept consistent.
//!
//! # Superpositions
//! A state Σ *c*<sub>*i*</sub> |*n*<sub>*i*</sub> *l*<sub>*i*</sub>
//! *m*<sub>*i*</sub> *m*<sub>*s*,*i*</sub>⟩ is stored as an ordered list of
//! terms with real amplitudes *c*<sub>*i*</sub>. Addition concatenates term
//! lists without merging repeated basis states, and scaling acts on all
//! amplitudes. The radial function of a superposition is the
//! amplitude-weighted sum of the radial functions of its terms, so terms
//! sharing (*n*, *l*) interfere in *R* even when their angular parts are
//! orthogonal.
//!
//! Wavefunctions are always evaluated for a normalized copy of the state,
//! ```text
//!            c_i
//! c_i → -------------
//!       √( Σ_j c_j² )
//! ```
//! which gives unit total probability when all terms are distinct basis
//! states. Dividing by Σ *c*<sub>*j*</sub>² without the square root is
//! available through [`Normalization::SumOfSquares`][sos] for compatibility,
//! but does not produce a unit norm.
//!
//! # Sampling
//! For plotting, points are drawn uniformly by *volume* in a ball of radius
//! *r*<sub>max</sub>. Since the volume inside radius *r* grows as *r*³ and
//! the area of a polar band as d(cos φ),
//! ```text
//! r = r_max u^(1/3)
//! θ = 2 π v
//! φ = arccos(2 w - 1)
//! ```
//! for *u*, *v*, *w* uniform in [0, 1). The density plotted is |Re Ψ|², which
//! is real and non-negative; values are divided by their maximum and points
//! below a small threshold are discarded.
//!
//! [sos]: crate::state::Normalization::SumOfSquares
//! [sph]: crate::special::sph_harm
