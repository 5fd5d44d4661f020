use std::path::PathBuf;
use ndarray as nd;
use num_complex::Complex64 as C64;
use boxwell::{
    eigen,
    export,
    integrate::{ self, box_grid },
    mode::Mode,
    spectrum,
    superpos::Superposition,
    units,
};

// eigenstates and a two-state superposition of an electron in a 1 nm square

const LENGTH: f64 = 1e-9; // m
const MASS: f64 = units::me; // kg
const NMAX: i64 = 4;
const NPLOT: usize = 4;
const NGRID: usize = 300;

fn main() -> anyhow::Result<()> {
    let outdir = PathBuf::from("output");

    // all modes up to NMAX, sorted by energy
    let levels = spectrum::modes_by_energy::<2>(NMAX, MASS, LENGTH)?;
    let k: nd::Array1<f64> = (1..=levels.len()).map(|k| k as f64).collect();
    let nx: nd::Array1<f64> = levels.iter().map(|l| l.mode.0[0] as f64).collect();
    let ny: nd::Array1<f64> = levels.iter().map(|l| l.mode.0[1] as f64).collect();
    let e_ev: nd::Array1<f64> = levels.iter().map(|l| units::to_ev(l.e)).collect();
    export::write_table_file(
        outdir.join("box2d_energies.csv"),
        &["k", "nx", "ny", "e_ev"],
        &[k.view(), nx.view(), ny.view(), e_ev.view()],
    )?;
    let spacing = spectrum::min_spacing(&e_ev.to_vec());
    if let Some(de) = spacing {
        println!("smallest level spacing: {:.3} eV", de);
    }

    // eigenfunctions of the lowest few modes
    let sel: Vec<Mode<2>> = levels.iter().take(NPLOT).map(|l| l.mode).collect();
    let (x, dx) = box_grid(LENGTH, NGRID);
    let psi: Vec<nd::Array2<f64>>
        = sel.iter()
        .map(|n| eigen::eigenfunction_grid_2d(n, &x, &x, LENGTH))
        .collect::<Result<_, _>>()?;
    for (n, psi_n) in sel.iter().zip(&psi) {
        let total = integrate::trapz_2d(&psi_n.mapv(|p| p * p), dx, dx);
        println!("mode {}: norm = {:.6}", n, total);
    }
    let names: Vec<String>
        = sel.iter().map(|n| format!("psi_{}_{}", n.0[0], n.0[1])).collect();
    let header: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let views: Vec<nd::ArrayView2<f64>> = psi.iter().map(|p| p.view()).collect();
    export::write_grid_file(
        outdir.join("box2d_eigenfunctions.csv"), x.view(), x.view(), &header, &views)?;

    // superposition of (1,1) and (2,1)
    let sp = Superposition::new(
        vec![Mode::new([1, 1]), Mode::new([2, 1])],
        vec![C64::from(1.0), C64::from(1.0)],
        MASS,
        LENGTH,
    )?;
    let times = sp.snapshot_times();
    let snapshots: Vec<nd::Array2<f64>>
        = times.iter().map(|&t| sp.density_grid(&x, &x, t)).collect();
    for (t, rho) in times.iter().zip(&snapshots) {
        println!("t={:.2e}s  N={:.3}", t, integrate::trapz_2d(rho, dx, dx));
    }
    let views: Vec<nd::ArrayView2<f64>> = snapshots.iter().map(|r| r.view()).collect();
    export::write_grid_file(
        outdir.join("box2d_snapshots.csv"),
        x.view(),
        x.view(),
        &["rho_t0", "rho_t1", "rho_t2"],
        &views,
    )?;

    let e11 = units::to_ev(eigen::eigenenergy(&Mode::new([1, 1]), MASS, LENGTH)?);
    let e21 = units::to_ev(eigen::eigenenergy(&Mode::new([2, 1]), MASS, LENGTH)?);
    println!("Particle in a 2D infinite well");
    println!("L={:.2e} m, m={:.4e} kg", LENGTH, MASS);
    println!("E(1,1)={:.3} eV, E(2,1)={:.3} eV", e11, e21);
    println!("Saved: {}", outdir.display());
    Ok(())
}
