use std::f64::consts::{ PI, TAU };
use rand::{ SeedableRng, rngs::StdRng };
use qpsi::{
    Coords,
    DensityKind,
    PlotConfig,
    PsiError,
    State,
    quad::{ integrate, integrate_semi_inf },
    units::DEF_A0,
};

const EPS: f64 = 1e-7;
const DEPTH: usize = 30;

// ∫ ρ r² sin φ dr dθ dφ over all space
fn total_probability(state: &State, kind: DensityKind) -> f64 {
    let rho = state.density(DEF_A0, kind).unwrap();
    let shell = |r: f64| {
        let polar = |phi: f64| {
            let ring = integrate(|theta| rho.at(r, theta, phi), 0.0, TAU, EPS, DEPTH)
                .unwrap();
            phi.sin() * ring
        };
        r * r * integrate(polar, 0.0, PI, EPS, DEPTH).unwrap()
    };
    integrate_semi_inf(shell, 0.0, EPS, DEPTH).unwrap()
}

fn p1() -> State { State::new(2, 1, 0, -0.5).unwrap() }

fn p2() -> State { State::new(2, 1, -1, 0.5).unwrap() }

#[test]
fn basis_states_have_unit_probability() {
    let cases = [
        (State::new(1, 0, 0, 0.5).unwrap(), DensityKind::RealPart),
        (p1(), DensityKind::RealPart),
        (State::new(3, 2, -2, -0.5).unwrap(), DensityKind::Modulus),
    ];
    for (state, kind) in cases.iter() {
        let total = total_probability(state, *kind);
        assert!((total - 1.0).abs() < 1e-3, "{state}: {total}");
    }
}

#[test]
fn superposition_probability() {
    let p = (2.0_f64 / 3.0).sqrt() * p1() - (1.0_f64 / 3.0).sqrt() * p2();
    let total = total_probability(&p, DensityKind::Modulus);
    assert!((total - 1.0).abs() < 1e-3, "{total}");
    // the real part keeps only half of the ml = -1 contribution
    let total_re = total_probability(&p, DensityKind::RealPart);
    assert!((total_re - 5.0 / 6.0).abs() < 1e-3, "{total_re}");
}

#[test]
fn p_state_superposition() {
    let p = (2.0_f64 / 3.0).sqrt() * p1() - (1.0_f64 / 3.0).sqrt() * p2();
    assert_eq!(p.len(), 2);
    let c = p.coeffs();
    assert!((c[0] - 0.8165).abs() < 1e-4);
    assert!((c[1] + 0.5774).abs() < 1e-4);
    assert_eq!(
        p.to_string(),
        "0.816·│ n = 2, l = 1, ml = 0, ms = -1/2 ⧽ \
        - 0.577·│ n = 2, l = 1, ml = -1, ms = +1/2 ⧽",
    );
    assert!((p.bohr_radius(DEF_A0).unwrap() - 4.0 * DEF_A0).abs() < 1e-12);
    // both terms share R_21, so the radial amplitudes add before squaring
    let c_sum = c[0] + c[1];
    let r_mean = p.mean_r(DEF_A0).unwrap();
    assert!((r_mean - c_sum.powi(2) * 5.0 * DEF_A0).abs() < 1e-6, "{r_mean}");

    let mixed = &p + &State::new(1, 0, 0, 0.5).unwrap();
    assert!(matches!(
        mixed.bohr_radius(DEF_A0),
        Err(PsiError::InvalidOperation(2, 1)),
    ));
}

#[test]
fn plot_data_point_cloud() {
    let p = (2.0_f64 / 3.0).sqrt() * p1() - (1.0_f64 / 3.0).sqrt() * p2();
    let rmax = 10.0;
    let config = PlotConfig::default();
    let data = p.plot_data(&mut StdRng::seed_from_u64(938792), rmax, 20_000, &config)
        .unwrap();
    assert_eq!(data.coords, Coords::Cartesian);
    assert!(!data.is_empty() && data.len() < 20_000);
    let (x, y, z, value) = data.into_tuple();
    assert_eq!((x.len(), y.len(), z.len()), (value.len(), value.len(), value.len()));
    assert!(value.iter().all(|v| (1e-3..=1.0).contains(v)));
    for k in 0..value.len() {
        let r = (x[k].powi(2) + y[k].powi(2) + z[k].powi(2)).sqrt();
        assert!(r <= rmax + 1e-9);
    }

    let sph = p.plot_data(
        &mut StdRng::seed_from_u64(938792),
        rmax,
        20_000,
        &config.with_coords(Coords::Spherical),
    ).unwrap();
    assert_eq!(sph.value, value);
    assert!(sph.c1.iter().all(|r| (0.0..=rmax).contains(r)));
}
