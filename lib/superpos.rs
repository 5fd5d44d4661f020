//! Time evolution of superpositions of box eigenstates.
//!
//! Since each eigenstate evolves by a pure phase, a superposition is evolved in
//! closed form,
//! ```text
//! Ψ(x, t) = Σₖ cₖ ψₖ(x) exp(-i Eₖ t / ħ)
//! ```
//! with the coefficients normalized so that Σₖ |cₖ|² = 1. Orthonormality of the
//! eigenstates then keeps ∫|Ψ|² = 1 at all times.

use std::f64::consts::TAU;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ BoxError, LengthError },
    eigen::{ self, BoxResult },
    mode::Mode,
    units::hbar,
};

// coefficients below this magnitude are treated as unpopulated
const POPULATED: f64 = 1e-12;

// snapshot times used when no beat period is defined (s)
const FALLBACK_TIMES: [f64; 3] = [0.0, 1e-15, 2e-15];

/// A normalized superposition of eigenstates of a single box.
#[derive(Clone, Debug)]
pub struct Superposition<const D: usize> {
    modes: Vec<Mode<D>>,
    coeffs: Vec<C64>,
    energies: Vec<f64>,
    mass: f64,
    length: f64,
}

impl<const D: usize> Superposition<D> {
    /// Create a new superposition, normalizing `coeffs` by their vector norm.
    ///
    /// Every mode must be physical (all quantum numbers positive), and `modes`
    /// and `coeffs` must be non-empty and of equal length.
    pub fn new(modes: Vec<Mode<D>>, coeffs: Vec<C64>, mass: f64, length: f64)
        -> BoxResult<Self>
    {
        LengthError::check_len(modes.len(), coeffs.len())?;
        if modes.is_empty() { return Err(BoxError::EmptySuperposition); }
        let energies: Vec<f64>
            = modes.iter()
            .map(|n| eigen::eigenenergy(n, mass, length))
            .collect::<BoxResult<_>>()?;
        let norm: f64 = coeffs.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
        if norm == 0.0 || !norm.is_finite() { return Err(BoxError::ZeroNorm); }
        let coeffs: Vec<C64> = coeffs.into_iter().map(|c| c / norm).collect();
        Ok(Self { modes, coeffs, energies, mass, length })
    }

    /// Create an equal-weight superposition of `modes`.
    pub fn equal(modes: Vec<Mode<D>>, mass: f64, length: f64)
        -> BoxResult<Self>
    {
        let coeffs = vec![C64::from(1.0); modes.len()];
        Self::new(modes, coeffs, mass, length)
    }

    /// Component modes.
    pub fn modes(&self) -> &[Mode<D>] { &self.modes }

    /// Normalized coefficients, in the same order as [`Self::modes`].
    pub fn coeffs(&self) -> &[C64] { &self.coeffs }

    /// Energies of the component modes.
    pub fn energies(&self) -> &[f64] { &self.energies }

    /// Particle mass.
    pub fn mass(&self) -> f64 { self.mass }

    /// Box side length.
    pub fn length(&self) -> f64 { self.length }

    /// Evaluate the complex amplitude Ψ(`x`, `t`).
    pub fn amplitude(&self, x: &[f64; D], t: f64) -> C64 {
        self.modes.iter().zip(&self.coeffs).zip(&self.energies)
            .map(|((n, c), e)| {
                c * eigen::eval_mode(n, x, self.length)
                    * C64::from_polar(1.0, -e * t / hbar)
            })
            .sum()
    }

    /// Evaluate the probability density |Ψ(`x`, `t`)|².
    pub fn density(&self, x: &[f64; D], t: f64) -> f64 {
        self.amplitude(x, t).norm_sqr()
    }

    /// Return an upper bound on [`Self::density`] over the box at all times,
    /// (Σₖ |cₖ|)² (2/*L*)<sup>D</sup>.
    pub fn envelope(&self) -> f64 {
        let sum_abs: f64 = self.coeffs.iter().map(|c| c.norm()).sum();
        sum_abs.powi(2) * (2.0 / self.length).powi(D as i32)
    }

    /// Iterate over the modes with non-negligible weight, along with their
    /// energies.
    pub fn populated(&self) -> impl Iterator<Item = (&Mode<D>, f64)> + '_ {
        self.modes.iter().zip(&self.coeffs).zip(&self.energies)
            .filter(|((_, c), _)| c.norm() > POPULATED)
            .map(|((n, _), e)| (n, *e))
    }

    /// Return the period 2*πħ*/|*E*₂ − *E*₁| of the beat between the first two
    /// populated modes.
    ///
    /// Returns `None` if fewer than two modes are populated or their energies
    /// coincide.
    pub fn beat_period(&self) -> Option<f64> {
        let mut populated = self.populated();
        let (_, e1) = populated.next()?;
        let (_, e2) = populated.next()?;
        let w = (e2 - e1).abs() / hbar;
        (w > 0.0).then(|| TAU / w)
    }

    /// Return three times at which to inspect the evolving density: 0, *T*/4,
    /// and *T*/2 for beat period *T*, or 0, 1, and 2 fs if there is no beat.
    pub fn snapshot_times(&self) -> [f64; 3] {
        match self.beat_period() {
            Some(period) => [0.0, 0.25 * period, 0.5 * period],
            None => FALLBACK_TIMES,
        }
    }
}

impl Superposition<1> {
    /// Sample the amplitude over an array of coordinates.
    pub fn amplitude_grid<S>(&self, x: &Arr1<S>, t: f64) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.amplitude(&[xk], t))
    }

    /// Sample the density over an array of coordinates.
    pub fn density_grid<S>(&self, x: &Arr1<S>, t: f64) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.density(&[xk], t))
    }
}

impl Superposition<2> {
    /// Sample the density over the Cartesian product of two coordinate arrays,
    /// indexed as `[i, j]` ↔ `(x[i], y[j])`.
    pub fn density_grid<S, T>(&self, x: &Arr1<S>, y: &Arr1<T>, t: f64)
        -> nd::Array2<f64>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        nd::Array2::from_shape_fn(
            (x.len(), y.len()), |(i, j)| self.density(&[x[i], y[j]], t))
    }
}

impl Superposition<3> {
    /// Sample the density over the Cartesian product of three coordinate
    /// arrays, indexed as `[i, j, k]` ↔ `(x[i], y[j], z[k])`.
    pub fn density_grid<S, T, U>(
        &self,
        x: &Arr1<S>,
        y: &Arr1<T>,
        z: &Arr1<U>,
        t: f64,
    ) -> nd::Array3<f64>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
    {
        nd::Array3::from_shape_fn(
            (x.len(), y.len(), z.len()),
            |(i, j, k)| self.density(&[x[i], y[j], z[k]], t),
        )
    }

    /// Sample the density over the plane at fixed `z`, indexed as `[i, j]` ↔
    /// `(x[i], y[j])`.
    pub fn density_slice_xy<S, T>(&self, x: &Arr1<S>, y: &Arr1<T>, z: f64, t: f64)
        -> nd::Array2<f64>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        nd::Array2::from_shape_fn(
            (x.len(), y.len()), |(i, j)| self.density(&[x[i], y[j], z], t))
    }
}

/// Evaluate Σₖ *c*ₖ *ψ*ₖ(`x`) exp(-*i E*ₖ `t` / *ħ*) directly, with the
/// coefficients normalized first.
///
/// This builds a [`Superposition`] on every call; construct one explicitly to
/// evaluate many positions or times.
pub fn time_dependent_superposition<const D: usize>(
    modes: &[Mode<D>],
    coeffs: &[C64],
    mass: f64,
    length: f64,
    x: &[f64; D],
    t: f64,
) -> BoxResult<C64>
{
    let sp = Superposition::new(modes.to_vec(), coeffs.to_vec(), mass, length)?;
    Ok(sp.amplitude(x, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ integrate::{ box_grid, wf_norm }, units::me };

    const L: f64 = 1e-9;

    fn two_level() -> Superposition<1> {
        Superposition::equal(vec![Mode::new([1]), Mode::new([2])], me, L)
            .unwrap()
    }

    #[test]
    fn coefficients_are_normalized() {
        let sp = Superposition::new(
            vec![Mode::new([1]), Mode::new([3])],
            vec![C64::new(3.0, 0.0), C64::new(0.0, 4.0)],
            me,
            L,
        ).unwrap();
        let total: f64 = sp.coeffs().iter().map(|c| c.norm_sqr()).sum();
        assert!((total - 1.0).abs() < 1e-15);
        assert!((sp.coeffs()[0].re - 0.6).abs() < 1e-15);
    }

    #[test]
    fn construction_errors() {
        assert!(matches!(
            Superposition::<1>::new(vec![], vec![], me, L),
            Err(BoxError::EmptySuperposition),
        ));
        assert!(matches!(
            Superposition::new(vec![Mode::new([1])], vec![], me, L),
            Err(BoxError::Length(_)),
        ));
        assert!(matches!(
            Superposition::new(vec![Mode::new([1])], vec![C64::from(0.0)], me, L),
            Err(BoxError::ZeroNorm),
        ));
        assert!(matches!(
            Superposition::equal(vec![Mode::new([0])], me, L),
            Err(BoxError::BadQuantumNumber(0)),
        ));
    }

    #[test]
    fn initial_amplitude_is_plain_sum() {
        let sp = two_level();
        let x = [0.3 * L];
        let expected
            = (eigen::eigenfunction(&Mode::new([1]), &x, L).unwrap()
            + eigen::eigenfunction(&Mode::new([2]), &x, L).unwrap())
            / 2.0_f64.sqrt();
        let amp = sp.amplitude(&x, 0.0);
        assert_eq!(amp.im, 0.0);
        assert!((amp.re - expected).abs() <= 1e-12 * expected.abs());
    }

    #[test]
    fn beat_period_and_revival() {
        let sp = two_level();
        let e1 = sp.energies()[0];
        let e2 = sp.energies()[1];
        let period = sp.beat_period().unwrap();
        assert!((period - TAU * hbar / (e2 - e1)).abs() <= 1e-12 * period);
        for &xk in [0.1, 0.25, 0.6, 0.9].iter() {
            let x = [xk * L];
            let rho0 = sp.density(&x, 0.0);
            let rho_t = sp.density(&x, period);
            assert!((rho0 - rho_t).abs() <= 1e-6 * rho0);
            // half a period later the density is mirrored about the center
            let mirrored = sp.density(&[(1.0 - xk) * L], 0.5 * period);
            assert!((rho0 - mirrored).abs() <= 1e-6 * rho0);
        }
        assert_eq!(sp.snapshot_times(), [0.0, 0.25 * period, 0.5 * period]);
    }

    #[test]
    fn no_beat_without_two_populated_modes() {
        let single = Superposition::equal(vec![Mode::new([2])], me, L).unwrap();
        assert!(single.beat_period().is_none());
        assert_eq!(single.snapshot_times(), FALLBACK_TIMES);
        let degenerate = Superposition::equal(
            vec![Mode::new([1, 2]), Mode::new([2, 1])], me, L).unwrap();
        assert!(degenerate.beat_period().is_none());
    }

    #[test]
    fn probability_is_conserved() {
        let sp = Superposition::new(
            vec![Mode::new([1]), Mode::new([2]), Mode::new([5])],
            vec![C64::new(1.0, 0.0), C64::new(0.5, -0.5), C64::new(0.0, 0.25)],
            me,
            L,
        ).unwrap();
        let (x, dx) = box_grid(L, 4001);
        let period = TAU * hbar / (sp.energies()[1] - sp.energies()[0]);
        for k in 0..8 {
            let t = k as f64 * period / 7.0;
            let q = sp.amplitude_grid(&x, t);
            assert!((wf_norm(&q, dx) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn envelope_bounds_density() {
        let sp = two_level();
        let (x, _) = box_grid(L, 501);
        let env = sp.envelope();
        for &t in sp.snapshot_times().iter() {
            assert!(sp.density_grid(&x, t).iter().all(|&rho| rho <= env));
        }
    }

    #[test]
    fn free_function_matches_method() {
        let modes = [Mode::new([1, 1, 1]), Mode::new([2, 1, 1])];
        let coeffs = [C64::from(1.0), C64::new(0.0, 1.0)];
        let x = [0.2 * L, 0.4 * L, 0.7 * L];
        let t = 3e-16;
        let a = time_dependent_superposition(&modes, &coeffs, me, L, &x, t)
            .unwrap();
        let sp = Superposition::new(modes.to_vec(), coeffs.to_vec(), me, L)
            .unwrap();
        assert_eq!(a, sp.amplitude(&x, t));
    }
}
