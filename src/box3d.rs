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

// degenerate levels, mid-plane cuts, and a two-state superposition of an
// electron in a 1 nm cube

const LENGTH: f64 = 1e-9; // m
const MASS: f64 = units::me; // kg
const NMAX: i64 = 3;
const NPLOT: usize = 4;
const NGRID: usize = 250;
const NCHECK: usize = 61; // per-axis points for the full 3D normalization check

fn main() -> anyhow::Result<()> {
    let outdir = PathBuf::from("output");

    // unique energies with degeneracies
    let groups = spectrum::degenerate_levels::<3>(NMAX, MASS, LENGTH)?;
    for group in groups.iter() {
        let sample: Vec<String>
            = group.modes.iter().take(3).map(|n| n.to_string()).collect();
        let more = if group.degeneracy() > 3 { ", …" } else { "" };
        println!(
            "E={:.3} eV: {}{}  (g={})",
            units::to_ev(group.e), sample.join(", "), more, group.degeneracy(),
        );
    }
    let s: nd::Array1<f64> = groups.iter().map(|g| g.sum_sq as f64).collect();
    let e_ev: nd::Array1<f64> = groups.iter().map(|g| units::to_ev(g.e)).collect();
    let g: nd::Array1<f64> = groups.iter().map(|g| g.degeneracy() as f64).collect();
    export::write_table_file(
        outdir.join("box3d_levels.csv"),
        &["sum_sq", "e_ev", "g"],
        &[s.view(), e_ev.view(), g.view()],
    )?;

    // lowest few modes on the z = L/2 plane and along y = z = L/2
    let sel: Vec<Mode<3>>
        = spectrum::modes_by_energy::<3>(NMAX, MASS, LENGTH)?
        .into_iter()
        .take(NPLOT)
        .map(|l| l.mode)
        .collect();
    let (x, dx) = box_grid(LENGTH, NGRID);
    let mid = nd::array![0.5 * LENGTH];
    let planes: Vec<nd::Array2<f64>>
        = sel.iter()
        .map(|n| {
            eigen::eigenfunction_grid_3d(n, &x, &x, &mid, LENGTH)
                .map(|psi| psi.index_axis_move(nd::Axis(2), 0))
        })
        .collect::<Result<_, _>>()?;
    let names: Vec<String>
        = sel.iter()
        .map(|n| format!("psi_{}_{}_{}", n.0[0], n.0[1], n.0[2]))
        .collect();
    let header: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let views: Vec<nd::ArrayView2<f64>> = planes.iter().map(|p| p.view()).collect();
    export::write_grid_file(
        outdir.join("box3d_eigenfunctions.csv"), x.view(), x.view(), &header, &views)?;

    let lines: Vec<nd::Array1<f64>>
        = sel.iter()
        .map(|n| {
            eigen::eigenfunction_line(
                n, 0, &x, [0.0, 0.5 * LENGTH, 0.5 * LENGTH], LENGTH)
        })
        .collect::<Result<_, _>>()?;
    let columns: Vec<nd::ArrayView1<f64>>
        = std::iter::once(x.view())
        .chain(lines.iter().map(|l| l.view()))
        .collect();
    let line_header: Vec<&str>
        = std::iter::once("x").chain(header.iter().copied()).collect();
    export::write_table_file(
        outdir.join("box3d_lines.csv"), &line_header, &columns)?;

    // superposition of (1,1,1) and (2,1,1)
    let sp = Superposition::new(
        vec![Mode::new([1, 1, 1]), Mode::new([2, 1, 1])],
        vec![C64::from(1.0), C64::from(1.0)],
        MASS,
        LENGTH,
    )?;
    let times = sp.snapshot_times();
    let (xc, dxc) = box_grid(LENGTH, NCHECK);
    let mut snapshots: Vec<nd::Array2<f64>> = Vec::with_capacity(times.len());
    for &t in times.iter() {
        let rho = sp.density_slice_xy(&x, &x, 0.5 * LENGTH, t);
        let total = integrate::trapz_3d(&sp.density_grid(&xc, &xc, &xc, t), dxc, dxc, dxc);
        println!(
            "t={:.2e}s  N(z=L/2)={:.3}  N={:.3}",
            t, integrate::trapz_2d(&rho, dx, dx), total,
        );
        snapshots.push(rho);
    }
    let views: Vec<nd::ArrayView2<f64>> = snapshots.iter().map(|r| r.view()).collect();
    export::write_grid_file(
        outdir.join("box3d_snapshots.csv"),
        x.view(),
        x.view(),
        &["rho_t0", "rho_t1", "rho_t2"],
        &views,
    )?;

    let e111 = units::to_ev(eigen::eigenenergy(&Mode::new([1, 1, 1]), MASS, LENGTH)?);
    let e211 = units::to_ev(eigen::eigenenergy(&Mode::new([2, 1, 1]), MASS, LENGTH)?);
    println!("Particle in a 3D infinite well");
    println!("L={:.2e} m, m={:.4e} kg", LENGTH, MASS);
    println!("E(1,1,1)={:.3} eV, E(2,1,1)={:.3} eV", e111, e211);
    println!("Saved: {}", outdir.display());
    Ok(())
}
