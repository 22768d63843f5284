//! One-dimensional numerical quadrature via adaptive Simpson's rule.
//!
//! The integration range is first cut into a fixed number of panels so that
//! sharply peaked integrands are not missed by the very first Simpson
//! estimate; each panel is then refined recursively until the local error
//! estimate falls below its share of the requested tolerance.
//!
//! ```
//! use qpsi::quad::{ integrate, integrate_semi_inf };
//!
//! let i = integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1e-10, 50)
//!     .unwrap();
//! assert!((i - 2.0).abs() < 1e-9);
//!
//! let j = integrate_semi_inf(|x: f64| (-x).exp(), 0.0, 1e-10, 50).unwrap();
//! assert!((j - 1.0).abs() < 1e-9);
//! ```

use crate::error::QuadError;

pub type QuadResult<T> = Result<T, QuadError>;

// number of fixed panels before adaptive refinement
const NPANELS: usize = 8;

#[derive(Copy, Clone, Debug)]
struct Panel {
    a: f64,
    fa: f64,
    m: f64,
    fm: f64,
    b: f64,
    fb: f64,
    whole: f64,
}

impl Panel {
    fn new<F>(f: &F, a: f64, fa: f64, b: f64, fb: f64) -> Self
    where F: Fn(f64) -> f64
    {
        let m = (a + b) / 2.0;
        let fm = f(m);
        let whole = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
        Self { a, fa, m, fm, b, fb, whole }
    }

    fn split<F>(&self, f: &F) -> (Self, Self)
    where F: Fn(f64) -> f64
    {
        (
            Self::new(f, self.a, self.fa, self.m, self.fm),
            Self::new(f, self.m, self.fm, self.b, self.fb),
        )
    }
}

// recursive refinement of a single panel; sets `exhausted` if the depth limit
// is reached anywhere before the tolerance is met
fn refine<F>(f: &F, panel: Panel, epsilon: f64, depth: usize, exhausted: &mut bool)
    -> f64
where F: Fn(f64) -> f64
{
    let (left, right) = panel.split(f);
    let sum = left.whole + right.whole;
    let delta = sum - panel.whole;
    // tolerance can't usefully go below roundoff in the panel sum
    let tol = epsilon.max(64.0 * f64::EPSILON * sum.abs());
    if delta.abs() <= 15.0 * tol {
        sum + delta / 15.0
    } else if depth == 0 {
        *exhausted = true;
        sum + delta / 15.0
    } else {
        refine(f, left, epsilon / 2.0, depth - 1, exhausted)
            + refine(f, right, epsilon / 2.0, depth - 1, exhausted)
    }
}

/// Integrate `f` over `[a, b]` to within an absolute tolerance `epsilon > 0`,
/// limiting recursion in each panel to `maxdepth` levels.
///
/// If the depth limit is reached before the tolerance is met, the best
/// available estimate is returned and a warning is printed. Reversed bounds
/// give the negated integral. For an infinite upper bound, see
/// [`integrate_semi_inf`].
pub fn integrate<F>(f: F, a: f64, b: f64, epsilon: f64, maxdepth: usize)
    -> QuadResult<f64>
where F: Fn(f64) -> f64
{
    QuadError::check_epsilon(epsilon)?;
    QuadError::check_bounds(a, b)?;
    if a == b { return Ok(0.0); }
    if b < a { return integrate(f, b, a, epsilon, maxdepth).map(|i| -i); }
    let h = (b - a) / NPANELS as f64;
    let eps_panel = epsilon / NPANELS as f64;
    let mut exhausted = false;
    let mut x0 = a;
    let mut f0 = f(a);
    let mut acc: f64 = 0.0;
    for k in 1..=NPANELS {
        let x1 = if k == NPANELS { b } else { a + k as f64 * h };
        let f1 = f(x1);
        let panel = Panel::new(&f, x0, f0, x1, f1);
        acc += refine(&f, panel, eps_panel, maxdepth, &mut exhausted);
        x0 = x1;
        f0 = f1;
    }
    if exhausted {
        println!(
            "quad::integrate: WARNING: recursion limit reached before \
            meeting the requested tolerance; some accuracy may be lost"
        );
    }
    Ok(acc)
}

/// Integrate `f` over `[a, ∞)` to within an absolute tolerance `epsilon > 0`.
///
/// The interval is mapped onto `[0, 1]` via `x = a + t / (1 - t)`, so `f`
/// should decay faster than `1 / x` for the result to be meaningful. The
/// transformed integrand is taken to vanish at `t = 1`.
pub fn integrate_semi_inf<F>(f: F, a: f64, epsilon: f64, maxdepth: usize)
    -> QuadResult<f64>
where F: Fn(f64) -> f64
{
    QuadError::check_bounds(a, 0.0)?;
    let g = |t: f64| {
        if t >= 1.0 {
            0.0
        } else {
            let omt = 1.0 - t;
            f(a + t / omt) / (omt * omt)
        }
    };
    integrate(g, 0.0, 1.0, epsilon, maxdepth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_is_exact() {
        let i = integrate(|x| x.powi(3) - 2.0 * x, -1.0, 2.0, 1e-12, 20).unwrap();
        assert!((i - (15.0 / 4.0 - 3.0)).abs() < 1e-12);
    }

    #[test]
    fn reversed_and_empty_bounds() {
        let i = integrate(|x| x * x, 1.0, 0.0, 1e-12, 20).unwrap();
        assert!((i + 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(integrate(|x| x, 2.0, 2.0, 1e-12, 20).unwrap(), 0.0);
    }

    #[test]
    fn gaussian_tail() {
        let i = integrate_semi_inf(|x| (-x * x).exp(), 0.0, 1e-10, 50).unwrap();
        assert!((i - std::f64::consts::PI.sqrt() / 2.0).abs() < 1e-8);
    }

    #[test]
    fn gamma_moments() {
        // ∫₀^∞ x³ e^(-x) dx = 3!
        let i = integrate_semi_inf(|x| x.powi(3) * (-x).exp(), 0.0, 1e-10, 50)
            .unwrap();
        assert!((i - 6.0).abs() < 1e-7);
    }

    #[test]
    fn bad_tolerance() {
        assert!(matches!(
            integrate(|x| x, 0.0, 1.0, 0.0, 20),
            Err(QuadError::BadEpsilon(_)),
        ));
        assert!(matches!(
            integrate(|x| x, f64::NAN, 1.0, 1e-6, 20),
            Err(QuadError::BadBounds(..)),
        ));
    }
}
