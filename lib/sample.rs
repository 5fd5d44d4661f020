//! Rejection sampling of "electron clouds" from probability densities.
//!
//! Each attempt draws a position uniformly from a [`Domain`] and a height *y*
//! uniformly from `[0, max_density)`, keeping the position when *y* falls below
//! the density there. Accepted positions are distributed according to the
//! normalized density *provided that* `max_density` really bounds the density
//! over the domain. Nothing here can repair an envelope that is too small: the
//! peaks of the density are silently clipped and the resulting cloud is spread
//! too evenly. The number of attempts that exceeded the envelope is recorded by
//! [`Cloud::envelope_violations`] to help spot this.
//!
//! The random source is always passed in, so seeded generators give
//! reproducible clouds:
//! ```
//! use rand::{ SeedableRng, rngs::StdRng };
//! use boxwell::{ mode::Mode, sample };
//!
//! let l = 1e-9;
//! let mut rng = StdRng::seed_from_u64(10546);
//! let cloud = sample::sample_mode(&mut rng, &Mode::new([1]), l, 10_000).unwrap();
//! assert_eq!(cloud.attempted(), 10_000);
//! assert!((cloud.acceptance_rate() - 0.5).abs() < 0.03);
//! ```

use rand::Rng;
use crate::{
    eigen,
    error::{ BoxError, SampleError },
    mode::Mode,
    superpos::Superposition,
};

pub type SampleResult<T> = Result<T, SampleError>;

/// An axis-aligned rectangular region of position space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain<const D: usize> {
    bounds: [(f64, f64); D],
}

impl<const D: usize> Domain<D> {
    /// Create a new domain from `(lo, hi)` bounds for each axis.
    pub fn new(bounds: [(f64, f64); D]) -> SampleResult<Self> {
        bounds.iter()
            .try_for_each(|&(lo, hi)| SampleError::check_bounds(lo, hi))?;
        Ok(Self { bounds })
    }

    /// Create the domain `[0, length]`<sup>D</sup> covering a whole box.
    pub fn cube(length: f64) -> SampleResult<Self> {
        Self::new([(0.0, length); D])
    }

    /// Per-axis bounds.
    pub fn bounds(&self) -> &[(f64, f64); D] { &self.bounds }

    /// Hypervolume of the domain.
    pub fn volume(&self) -> f64 {
        self.bounds.iter().map(|(lo, hi)| hi - lo).product()
    }

    /// Return `true` if `x` lies within the domain (inclusive).
    pub fn contains(&self, x: &[f64; D]) -> bool {
        self.bounds.iter().zip(x).all(|(&(lo, hi), &xk)| lo <= xk && xk <= hi)
    }

    fn draw<R>(&self, rng: &mut R) -> [f64; D]
    where R: Rng + ?Sized
    {
        let mut x = [0.0; D];
        x.iter_mut().zip(&self.bounds)
            .for_each(|(xk, &(lo, hi))| { *xk = rng.gen_range(lo..hi); });
        x
    }
}

/// A single accepted sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CloudPoint<const D: usize> {
    /// Position of the sample.
    pub x: [f64; D],
    /// Height drawn from `[0, max_density)` that fell under the density at
    /// `x`; a one-dimensional cloud is usually drawn at `(x, y)`.
    pub y: f64,
}

/// The outcome of a rejection sampling run.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud<const D: usize> {
    domain: Domain<D>,
    points: Vec<CloudPoint<D>>,
    attempted: usize,
    violations: usize,
    max_density: f64,
}

impl<const D: usize> Cloud<D> {
    /// Accepted samples, in the order they were drawn.
    pub fn points(&self) -> &[CloudPoint<D>] { &self.points }

    /// Iterate over the positions of the accepted samples.
    pub fn positions(&self) -> impl Iterator<Item = &[f64; D]> + '_ {
        self.points.iter().map(|p| &p.x)
    }

    /// Number of attempts made.
    pub fn attempted(&self) -> usize { self.attempted }

    /// Number of attempts accepted.
    pub fn accepted(&self) -> usize { self.points.len() }

    /// Fraction of attempts accepted; zero if nothing was attempted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.points.len() as f64 / self.attempted as f64
        }
    }

    /// Number of attempts at which the density exceeded the envelope.
    ///
    /// Anything other than zero means the envelope was too small and the
    /// cloud is biased.
    pub fn envelope_violations(&self) -> usize { self.violations }

    /// The envelope the cloud was sampled under.
    pub fn max_density(&self) -> f64 { self.max_density }

    /// The domain the cloud was drawn from.
    pub fn domain(&self) -> &Domain<D> { &self.domain }

    /// Acceptance rate expected for a normalized density sampled over the same
    /// domain and envelope; see [`expected_acceptance`].
    pub fn expected_acceptance(&self) -> f64 {
        (self.domain.volume() * self.max_density).recip()
    }
}

/// Draw `n` candidate points from `domain` and keep those under `density`,
/// using `max_density` as the envelope.
///
/// `max_density` must be finite and positive; it is the caller's
/// responsibility that it bounds `density` over `domain`.
pub fn rejection_sample<R, F, const D: usize>(
    rng: &mut R,
    domain: &Domain<D>,
    max_density: f64,
    n: usize,
    mut density: F,
) -> SampleResult<Cloud<D>>
where
    R: Rng + ?Sized,
    F: FnMut(&[f64; D]) -> f64,
{
    SampleError::check_envelope(max_density)?;
    let mut points: Vec<CloudPoint<D>> = Vec::new();
    let mut violations: usize = 0;
    for _ in 0..n {
        let x = domain.draw(rng);
        let y: f64 = rng.gen_range(0.0..max_density);
        let rho = density(&x);
        if rho > max_density { violations += 1; }
        if y < rho { points.push(CloudPoint { x, y }); }
    }
    Ok(Cloud { domain: *domain, points, attempted: n, violations, max_density })
}

/// Return the acceptance rate expected when sampling a normalized density over
/// `domain` under `max_density`, 1 / (volume × `max_density`).
///
/// This assumes the density integrates to 1 over `domain`.
pub fn expected_acceptance<const D: usize>(domain: &Domain<D>, max_density: f64)
    -> SampleResult<f64>
{
    SampleError::check_envelope(max_density)?;
    Ok((domain.volume() * max_density).recip())
}

/// Sample the density of a single eigenstate over its whole box, using the
/// analytic peak (2/*L*)<sup>D</sup> as the envelope.
pub fn sample_mode<R, const D: usize>(
    rng: &mut R,
    mode: &Mode<D>,
    length: f64,
    n: usize,
) -> SampleResult<Cloud<D>>
where R: Rng + ?Sized
{
    mode.check_nonnegative()?;
    BoxError::check_length(length)?;
    let domain = Domain::cube(length)?;
    let max_density = eigen::peak_density(length, D)?;
    rejection_sample(
        rng, &domain, max_density, n,
        |x| eigen::eval_mode(mode, x, length).powi(2),
    )
}

/// Sample the density of a superposition at time `t` over its whole box, using
/// [`Superposition::envelope`] as the envelope.
pub fn sample_superposition<R, const D: usize>(
    rng: &mut R,
    sp: &Superposition<D>,
    t: f64,
    n: usize,
) -> SampleResult<Cloud<D>>
where R: Rng + ?Sized
{
    let domain = Domain::cube(sp.length())?;
    rejection_sample(rng, &domain, sp.envelope(), n, |x| sp.density(x, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{ SeedableRng, rngs::StdRng };
    use crate::units::me;

    const L: f64 = 1e-9;

    #[test]
    fn domain_validation() {
        assert!(matches!(
            Domain::new([(0.0, 1.0), (2.0, 2.0)]),
            Err(SampleError::BadDomain(..)),
        ));
        let d = Domain::new([(0.0, 2.0), (1.0, 4.0)]).unwrap();
        assert_eq!(d.volume(), 6.0);
        assert!(d.contains(&[2.0, 1.0]));
        assert!(!d.contains(&[2.5, 1.0]));
        assert!(matches!(Domain::<3>::cube(-1.0), Err(SampleError::BadDomain(..))));
        // width overflows even though both ends are finite
        assert!(matches!(
            Domain::new([(-1e308, 1e308)]),
            Err(SampleError::BadDomain(..)),
        ));
    }

    #[test]
    fn points_stay_in_domain_and_under_density() {
        let mut rng = StdRng::seed_from_u64(1);
        let mode = Mode::new([2, 3]);
        let cloud = sample_mode(&mut rng, &mode, L, 20_000).unwrap();
        let domain = Domain::<2>::cube(L).unwrap();
        for p in cloud.points() {
            assert!(domain.contains(&p.x));
            let rho = eigen::probability_density(&mode, &p.x, L).unwrap();
            assert!(p.y < rho);
        }
        assert_eq!(cloud.envelope_violations(), 0);
        assert_eq!(cloud.positions().count(), cloud.accepted());
    }

    #[test]
    fn acceptance_matches_expectation() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 100_000;
        for dims in [1_usize, 3] {
            let (rate, expected) = if dims == 1 {
                let c = sample_mode(&mut rng, &Mode::new([1]), L, n).unwrap();
                let d = Domain::<1>::cube(L).unwrap();
                let p = expected_acceptance(&d, c.max_density()).unwrap();
                assert_eq!(c.expected_acceptance(), p);
                (c.acceptance_rate(), p)
            } else {
                let c = sample_mode(&mut rng, &Mode::new([1, 2, 1]), L, n).unwrap();
                assert_eq!(c.domain(), &Domain::<3>::cube(L).unwrap());
                (c.acceptance_rate(), c.expected_acceptance())
            };
            // five standard deviations of a binomial proportion
            let sigma = (expected * (1.0 - expected) / n as f64).sqrt();
            assert!((rate - expected).abs() < 5.0 * sigma);
        }
    }

    #[test]
    fn small_envelope_is_reported_not_fixed() {
        let mut rng = StdRng::seed_from_u64(3);
        let domain = Domain::<1>::cube(L).unwrap();
        let peak = eigen::peak_density(L, 1).unwrap();
        let cloud = rejection_sample(
            &mut rng, &domain, 0.5 * peak, 10_000,
            |x| eigen::probability_density(&Mode::new([1]), x, L).unwrap(),
        ).unwrap();
        assert!(cloud.envelope_violations() > 0);
        // clipped peaks: fewer acceptances than a true envelope would give
        let expected = expected_acceptance(&domain, 0.5 * peak).unwrap();
        assert!(cloud.acceptance_rate() < expected);
    }

    #[test]
    fn bad_envelope() {
        let mut rng = StdRng::seed_from_u64(0);
        let domain = Domain::<1>::cube(L).unwrap();
        assert!(matches!(
            rejection_sample(&mut rng, &domain, 0.0, 10, |_| 1.0),
            Err(SampleError::BadEnvelope(_)),
        ));
        assert!(matches!(
            sample_mode(&mut rng, &Mode::new([-2]), L, 10),
            Err(SampleError::Box(_)),
        ));
        assert!(matches!(
            sample_mode(&mut rng, &Mode::new([1]), 0.0, 10),
            Err(SampleError::Box(BoxError::BadLength(_))),
        ));
        assert!(matches!(
            sample_mode(&mut rng, &Mode::new([1, 1]), -L, 10),
            Err(SampleError::Box(BoxError::BadLength(_))),
        ));
    }

    #[test]
    fn seeded_runs_repeat() {
        let sp = Superposition::equal(vec![Mode::new([1]), Mode::new([2])], me, L)
            .unwrap();
        let t = sp.snapshot_times()[1];
        let a = sample_superposition(&mut StdRng::seed_from_u64(99), &sp, t, 5000)
            .unwrap();
        let b = sample_superposition(&mut StdRng::seed_from_u64(99), &sp, t, 5000)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.envelope_violations(), 0);
        assert!(a.accepted() > 0);
    }

    #[test]
    fn empty_run() {
        let mut rng = StdRng::seed_from_u64(0);
        let cloud = sample_mode(&mut rng, &Mode::new([1]), L, 0).unwrap();
        assert_eq!(cloud.acceptance_rate(), 0.0);
        assert_eq!(cloud.accepted(), 0);
    }
}
