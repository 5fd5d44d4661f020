use std::path::PathBuf;
use anyhow::{ bail, Context };
use rand::{ SeedableRng, rngs::StdRng };
use boxwell::{
    eigen,
    export,
    integrate::{ self, box_grid },
    mode::Mode,
    sample,
    units,
};

// electron cloud of a single 1D eigenstate, drawn by rejection sampling
//
// usage: cloud <n> [samples] [seed]

const LENGTH: f64 = 1e-9; // m
const MASS: f64 = units::me; // kg
const DEF_LEVEL: i64 = 1;
const DEF_SAMPLES: usize = 100_000;
const NCHECK: usize = 2001;

struct Args {
    n: i64,
    samples: usize,
    seed: Option<u64>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let n: i64 = match args.next() {
        Some(s) => s.parse()
            .with_context(|| format!("invalid energy level {:?}", s))?,
        None => DEF_LEVEL,
    };
    if n < 1 { bail!("Energy level must be a positive integer"); }
    let samples: usize = match args.next() {
        Some(s) => s.parse()
            .with_context(|| format!("invalid sample count {:?}", s))?,
        None => DEF_SAMPLES,
    };
    let seed: Option<u64> = args.next()
        .map(|s| s.parse().with_context(|| format!("invalid seed {:?}", s)))
        .transpose()?;
    Ok(Args { n, samples, seed })
}

fn main() -> anyhow::Result<()> {
    let Args { n, samples, seed } = parse_args()?;
    let mode = Mode::new([n]);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let cloud = sample::sample_mode(&mut rng, &mode, LENGTH, samples)?;
    let expected = cloud.expected_acceptance();
    println!(
        "n={}: accepted {} of {} ({:.4}, expected {:.4})",
        n, cloud.accepted(), cloud.attempted(), cloud.acceptance_rate(), expected,
    );
    if cloud.envelope_violations() > 0 {
        println!("warning: {} draws exceeded the envelope", cloud.envelope_violations());
    }

    let outfile = PathBuf::from("output").join(format!("cloud_n{}.tsv", n));
    export::write_cloud_file(&outfile, &cloud)
        .with_context(|| format!("failed to write {}", outfile.display()))?;

    let (x, dx) = box_grid(LENGTH, NCHECK);
    let total = integrate::trapz(&eigen::density_grid_1d(&Mode::new([1]), &x, LENGTH)?, dx);
    let e_ev = units::to_ev(eigen::eigenenergy(&mode, MASS, LENGTH)?);
    println!("E{}={:.3} eV", n, e_ev);
    println!("total probability for n=1: {:.6}", total);
    println!("Saved: {}", outfile.display());
    Ok(())
}
