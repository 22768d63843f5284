//! Monte-Carlo sampling of probability densities for 3D scatter plots.
//!
//! Points are drawn uniformly by volume inside a ball, the density of a state
//! is evaluated at each of them, and points whose (normalized) density falls
//! below a threshold are discarded so that a renderer only has to draw the
//! relevant part of the cloud.
//!
//! Angles follow the convention used throughout the crate: θ ∊ [0, 2π) is the
//! azimuthal angle and φ ∊ [0, π] is the polar angle, so that
//! ```text
//! x = r cos θ sin φ
//! y = r sin θ sin φ
//! z = r cos φ
//! ```
//!
//! ```
//! use rand::{ SeedableRng, rngs::StdRng };
//! use qpsi::{ PlotConfig, State };
//!
//! let mut rng = StdRng::seed_from_u64(10546);
//! let p = State::new(2, 1, 0, 0.5).unwrap();
//! let data = p.plot_data(&mut rng, 10.0, 5000, &PlotConfig::default()).unwrap();
//! assert!(!data.is_empty());
//! assert!(data.value.iter().all(|v| (1e-3..=1.0).contains(v)));
//! ```

use std::f64::consts::TAU;
use ndarray as nd;
use rand::Rng;
use crate::{
    Arr1,
    error::{ LengthError, PsiError },
    state::{ PsiResult, State },
    units::DEF_A0,
    wavefunction::DensityKind,
    DEF_EPSILON,
};

/// Selects the coordinate system of generated plot data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Coords {
    /// (*x*, *y*, *z*)
    #[default]
    Cartesian,
    /// (*r*, θ, φ)
    Spherical,
}

/// Random points in spherical coordinates.
#[derive(Clone, Debug)]
pub struct SpherePoints {
    /// Radii.
    pub r: nd::Array1<f64>,
    /// Azimuthal angles.
    pub theta: nd::Array1<f64>,
    /// Polar angles.
    pub phi: nd::Array1<f64>,
}

/// Sampled density values along with their coordinates.
///
/// `c1`, `c2`, `c3` are (*x*, *y*, *z*) or (*r*, θ, φ) depending on
/// `coords`; all four arrays have the same length.
#[derive(Clone, Debug)]
pub struct PlotData {
    pub c1: nd::Array1<f64>,
    pub c2: nd::Array1<f64>,
    pub c3: nd::Array1<f64>,
    pub value: nd::Array1<f64>,
    pub coords: Coords,
}

impl PlotData {
    /// Return the number of points.
    pub fn len(&self) -> usize { self.value.len() }

    /// Return `true` if there are no points.
    pub fn is_empty(&self) -> bool { self.value.is_empty() }

    /// Unpack into `(c1, c2, c3, value)`.
    pub fn into_tuple(self)
        -> (nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>)
    {
        (self.c1, self.c2, self.c3, self.value)
    }
}

/// Options for [`State::plot_data`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlotConfig {
    /// Bohr radius.
    pub a0: f64,
    /// Output coordinate system.
    pub coords: Coords,
    /// Threshold below which points are dropped.
    pub epsilon: f64,
    /// Rescale values by their maximum before thresholding.
    pub normalize: bool,
    /// Return rescaled values rather than the original ones.
    pub normalized_output: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            a0: DEF_A0,
            coords: Coords::Cartesian,
            epsilon: DEF_EPSILON,
            normalize: true,
            normalized_output: true,
        }
    }
}

impl PlotConfig {
    pub fn with_a0(mut self, a0: f64) -> Self {
        self.a0 = a0;
        self
    }

    pub fn with_coords(mut self, coords: Coords) -> Self {
        self.coords = coords;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_normalized_output(mut self, normalized_output: bool) -> Self {
        self.normalized_output = normalized_output;
        self
    }
}

/// Draw `npoints` points uniformly distributed by volume inside a ball of
/// radius `rmax > 0`.
///
/// Radii are drawn as `rmax · u^(1/3)`, azimuthal angles uniformly in
/// [0, 2π), and polar angles as `arccos(2 v - 1)`, with `u`, `v` uniform in
/// [0, 1). Seed `rng` for reproducible output.
pub fn sphere_points<R>(rng: &mut R, rmax: f64, npoints: usize)
    -> PsiResult<SpherePoints>
where R: Rng + ?Sized
{
    PsiError::check_rmax(rmax)?;
    let r: nd::Array1<f64>
        = (0..npoints).map(|_| rmax * rng.gen::<f64>().cbrt()).collect();
    let theta: nd::Array1<f64>
        = (0..npoints).map(|_| TAU * rng.gen::<f64>()).collect();
    let phi: nd::Array1<f64>
        = (0..npoints).map(|_| (2.0 * rng.gen::<f64>() - 1.0).acos()).collect();
    Ok(SpherePoints { r, theta, phi })
}

/// Convert a single point from spherical to Cartesian coordinates.
pub fn sph2rec_point(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    let (sth, cth) = theta.sin_cos();
    let (sph, cph) = phi.sin_cos();
    (r * cth * sph, r * sth * sph, r * cph)
}

/// Convert arrays of points from spherical to Cartesian coordinates.
pub fn sph2rec<S, T, U>(r: &Arr1<S>, theta: &Arr1<T>, phi: &Arr1<U>)
    -> PsiResult<(nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    LengthError::check(r, theta)?;
    LengthError::check(r, phi)?;
    let n = r.len();
    let mut x: nd::Array1<f64> = nd::Array1::zeros(n);
    let mut y: nd::Array1<f64> = nd::Array1::zeros(n);
    let mut z: nd::Array1<f64> = nd::Array1::zeros(n);
    nd::Zip::from(&mut x).and(&mut y).and(&mut z)
        .and(r).and(theta).and(phi)
        .for_each(|xk, yk, zk, &rk, &thk, &phk| {
            (*xk, *yk, *zk) = sph2rec_point(rk, thk, phk);
        });
    Ok((x, y, z))
}

/// Sample the density |Re Ψ|² of `state` at `npoints` random points inside a
/// ball of radius `rmax`, returning either Cartesian or spherical
/// coordinates.
pub fn gen_data<R>(
    state: &State,
    rng: &mut R,
    rmax: f64,
    npoints: usize,
    a0: f64,
    coords: Coords,
) -> PsiResult<PlotData>
where R: Rng + ?Sized
{
    let rho = state.density(a0, DensityKind::RealPart)?;
    let SpherePoints { r, theta, phi } = sphere_points(rng, rmax, npoints)?;
    let value = rho.eval(&r, &theta, &phi)?;
    let data
        = match coords {
            Coords::Cartesian => {
                let (x, y, z) = sph2rec(&r, &theta, &phi)?;
                PlotData { c1: x, c2: y, c3: z, value, coords }
            },
            Coords::Spherical => {
                PlotData { c1: r, c2: theta, c3: phi, value, coords }
            },
        };
    Ok(data)
}

/// Drop every point whose value is below `epsilon ≥ 0`, removing the same
/// indices from `value` and from every array in `coords`, in order.
///
/// If `normalize` is `true`, values are divided by their maximum before the
/// comparison. If `normalized_output` is also `true`, the rescaled values of
/// the surviving points are returned; otherwise their original values are. If
/// there is no positive maximum to divide by, a warning is printed and the
/// original values are compared and returned as they are, so `epsilon == 0`
/// keeps every non-NaN point.
///
/// ```
/// use ndarray as nd;
/// use qpsi::sample::clean_data;
///
/// let value = nd::array![0.2, 4.0, 1.0, 3.9];
/// let x = nd::array![0.0, 1.0, 2.0, 3.0];
/// let (v, c) = clean_data(&value, &[x.view()], 0.5, true, true).unwrap();
/// assert_eq!(v, nd::array![1.0, 0.975]);
/// assert_eq!(c[0], nd::array![1.0, 3.0]);
/// ```
pub fn clean_data<S>(
    value: &Arr1<S>,
    coords: &[nd::ArrayView1<f64>],
    epsilon: f64,
    normalize: bool,
    normalized_output: bool,
) -> PsiResult<(nd::Array1<f64>, Vec<nd::Array1<f64>>)>
where S: nd::Data<Elem = f64>
{
    PsiError::check_epsilon(epsilon)?;
    coords.iter().try_for_each(|c| LengthError::check(value, c))?;
    let max = value.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scaled: Option<nd::Array1<f64>>
        = if !normalize {
            None
        } else if max > 0.0 && max.is_finite() {
            Some(value.mapv(|v| v / max))
        } else {
            if !value.is_empty() {
                println!(
                    "sample::clean_data: WARNING: no positive maximum to \
                    normalize by; values left unscaled"
                );
            }
            None
        };
    let compared: nd::ArrayView1<f64>
        = scaled.as_ref().map(|sc| sc.view()).unwrap_or_else(|| value.view());
    let keep: Vec<usize>
        = compared.iter().enumerate()
        .filter(|(_, v)| !(**v < epsilon))
        .map(|(k, _)| k)
        .collect();
    let new_value
        = if normalized_output {
            compared.select(nd::Axis(0), &keep)
        } else {
            value.select(nd::Axis(0), &keep)
        };
    let new_coords: Vec<nd::Array1<f64>>
        = coords.iter().map(|c| c.select(nd::Axis(0), &keep)).collect();
    Ok((new_value, new_coords))
}

impl State {
    /// Generate a filtered point cloud of the density of `self` for plotting:
    /// [`gen_data`] followed by [`clean_data`], configured by `config`.
    pub fn plot_data<R>(
        &self,
        rng: &mut R,
        rmax: f64,
        npoints: usize,
        config: &PlotConfig,
    ) -> PsiResult<PlotData>
    where R: Rng + ?Sized
    {
        PsiError::check_epsilon(config.epsilon)?;
        let data = gen_data(self, rng, rmax, npoints, config.a0, config.coords)?;
        let (value, coords)
            = clean_data(
                &data.value,
                &[data.c1.view(), data.c2.view(), data.c3.view()],
                config.epsilon,
                config.normalize,
                config.normalized_output,
            )?;
        let [c1, c2, c3]: [nd::Array1<f64>; 3]
            = coords.try_into()
            .map_err(|c: Vec<_>| LengthError(3, c.len()))?;
        Ok(PlotData { c1, c2, c3, value, coords: data.coords })
    }
}
