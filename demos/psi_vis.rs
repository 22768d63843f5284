use rand::thread_rng;
use qpsi::{ Coords, PlotConfig, State };

// generate plot data for a superposition of two n = 2, l = 1 states

const A0: f64 = 0.529; // Bohr radius; Å
const NPOINTS: usize = 100_000; // number of sampled points (before filtering)
const EPSILON: f64 = 1e-3;
const RMAX: f64 = 10.0;

fn main() -> anyhow::Result<()> {
    let p1 = State::new(2, 1, 0, -0.5)?;
    let p2 = State::new(2, 1, -1, 0.5)?;
    let p = (2.0_f64 / 3.0).sqrt() * p1 - (1.0_f64 / 3.0).sqrt() * p2;
    println!("{}", p);
    println!("bohr radius: {:.3} Å", p.bohr_radius(A0)?);
    println!("mean radius: {:.3} Å", p.mean_r(A0)?);

    let config = PlotConfig::default()
        .with_a0(A0)
        .with_coords(Coords::Cartesian)
        .with_epsilon(EPSILON);
    let data = p.plot_data(&mut thread_rng(), RMAX, NPOINTS, &config)?;
    println!("kept {} of {} points", data.len(), NPOINTS);

    // marker sizes a renderer would use, ∝ √value
    let sizes = data.value.mapv(|v| 15.0 * v.sqrt());
    let (x, y, z, value) = data.into_tuple();
    let extent = |a: &ndarray::Array1<f64>| {
        a.iter().copied().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), ak| {
            (lo.min(ak), hi.max(ak))
        })
    };
    println!("x ∊ {:.3?}", extent(&x));
    println!("y ∊ {:.3?}", extent(&y));
    println!("z ∊ {:.3?}", extent(&z));
    println!("value ∊ {:.3?}", extent(&value));
    println!("marker size ∊ {:.3?}", extent(&sizes));
    Ok(())
}
