use std::path::PathBuf;
use anyhow::Context;
use ndarray as nd;
use num_complex::Complex64 as C64;
use boxwell::{
    eigen,
    export,
    integrate::{ self, box_grid },
    mode::Mode,
    superpos::Superposition,
    units::{ self, BoxScale },
};

// eigenstates and a two-state superposition of an electron in a 1 nm box

const LENGTH: f64 = 1e-9; // m
const MASS: f64 = units::me; // kg
const NMAX: i64 = 6;
const PLOT_MODES: [i64; 4] = [1, 2, 3, 4];
const SUPERPOS_MODES: [i64; 2] = [1, 2];

fn main() -> anyhow::Result<()> {
    let outdir = PathBuf::from("output");

    // energy levels
    let n: nd::Array1<f64> = (1..=NMAX).map(|k| k as f64).collect();
    let e_ev: nd::Array1<f64>
        = (1..=NMAX)
        .map(|k| eigen::eigenenergy(&Mode::new([k]), MASS, LENGTH).map(units::to_ev))
        .collect::<Result<_, _>>()?;
    export::write_table_file(
        outdir.join("box1d_energies.csv"),
        &["n", "e_ev"],
        &[n.view(), e_ev.view()],
    )?;

    // eigenfunctions and densities of the lowest states
    let (x, dx) = box_grid(LENGTH, 1000);
    let psi: Vec<nd::Array1<f64>>
        = PLOT_MODES.iter()
        .map(|&k| eigen::eigenfunction_grid_1d(&Mode::new([k]), &x, LENGTH))
        .collect::<Result<_, _>>()?;
    let rho: Vec<nd::Array1<f64>>
        = PLOT_MODES.iter()
        .map(|&k| eigen::density_grid_1d(&Mode::new([k]), &x, LENGTH))
        .collect::<Result<_, _>>()?;
    for (k, rho_k) in PLOT_MODES.iter().zip(&rho) {
        let total = integrate::trapz(rho_k, dx);
        integrate::check_normalization(total, None)
            .with_context(|| format!("density of n={} is not normalized", k))?;
    }
    let overlap = integrate::wf_dot(&psi[0], &psi[1], dx)?;
    println!("<psi_{}|psi_{}> = {:.2e}", PLOT_MODES[0], PLOT_MODES[1], overlap);
    let names: Vec<String>
        = std::iter::once("x".to_string())
        .chain(PLOT_MODES.iter().map(|k| format!("psi_{}", k)))
        .chain(PLOT_MODES.iter().map(|k| format!("rho_{}", k)))
        .collect();
    let header: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let columns: Vec<nd::ArrayView1<f64>>
        = std::iter::once(x.view())
        .chain(psi.iter().map(|p| p.view()))
        .chain(rho.iter().map(|r| r.view()))
        .collect();
    export::write_table_file(
        outdir.join("box1d_eigenfunctions.csv"), &header, &columns)?;

    // equal-weight superposition sampled at three points in its beat period
    let sp = Superposition::new(
        SUPERPOS_MODES.iter().map(|&k| Mode::new([k])).collect(),
        vec![C64::from(0.5_f64.sqrt()); SUPERPOS_MODES.len()],
        MASS,
        LENGTH,
    )?;
    let (x2, dx2) = box_grid(LENGTH, 2000);
    let times = sp.snapshot_times();
    let mut snapshots: Vec<nd::Array1<f64>> = Vec::with_capacity(times.len());
    for &t in times.iter() {
        let q = sp.amplitude_grid(&x2, t);
        println!("t={:.2e}s  N={:.3}", t, integrate::wf_norm(&q, dx2));
        snapshots.push(q.mapv(|qk| qk.norm_sqr()));
    }
    export::write_table_file(
        outdir.join("box1d_snapshots.csv"),
        &["x", "rho_t0", "rho_t1", "rho_t2"],
        &[x2.view(), snapshots[0].view(), snapshots[1].view(), snapshots[2].view()],
    )?;

    let scale = BoxScale::new(sp.mass(), sp.length());
    let e1 = eigen::eigenenergy(&Mode::new([1]), MASS, LENGTH)?;
    let e2 = eigen::eigenenergy(&Mode::new([2]), MASS, LENGTH)?;
    println!("Particle in a 1D infinite well");
    println!("L={:.2e} m, m={:.4e} kg", sp.length(), sp.mass());
    println!(
        "E1={:.3} eV, E2={:.3} eV, E2/E1={:.2}",
        units::to_ev(e1), units::to_ev(e2), e2 / e1,
    );
    println!("E1={:.4} eps (natural units)", scale.nat_energy(e1));
    if let Some(period) = sp.beat_period() {
        println!("T_beat={:.3e} s = {:.4} tau", period, scale.nat_time(period));
    }
    println!(
        "Saved: {}",
        ["box1d_energies.csv", "box1d_eigenfunctions.csv", "box1d_snapshots.csv"]
            .map(|f| outdir.join(f).display().to_string())
            .join(", ")
    );
    Ok(())
}
