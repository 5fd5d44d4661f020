//! Trapezoid-rule quadrature on uniform grids, used to check that densities
//! stay normalized.

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Float;
use crate::{
    Arr1,
    Arr2,
    Arr3,
    error::{ BoxError, LengthError },
    eigen::BoxResult,
    DEF_NORM_TOLERANCE,
};

/// A wavefunction sample whose squared modulus can be taken.
pub trait Amplitude: Copy {
    /// Return |self|².
    fn modulus_sq(self) -> f64;
}

impl Amplitude for f64 {
    fn modulus_sq(self) -> f64 { self * self }
}

impl Amplitude for C64 {
    fn modulus_sq(self) -> f64 { self.norm_sqr() }
}

/// Return `npoints` evenly spaced coordinates spanning `[0, length]`
/// (inclusive) along with their spacing.
///
/// *Panics if `npoints` is less than 2*.
pub fn box_grid(length: f64, npoints: usize) -> (nd::Array1<f64>, f64) {
    assert!(npoints >= 2, "a grid needs at least 2 points; got {}", npoints);
    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, length, npoints);
    let dx = x[1] - x[0];
    (x, dx)
}

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner
        = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Integrate a two-dimensional array over both axes, indexed as `[i, j]` ↔
/// `(x[i], y[j])`.
///
/// *Panics if either axis has length less than 2*.
pub fn trapz_2d<S>(z: &Arr2<S>, dx: f64, dy: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let rows: nd::Array1<f64>
        = z.map_axis(nd::Axis(1), |lane| trapz(&lane, dy));
    trapz(&rows, dx)
}

/// Integrate a three-dimensional array over all axes, indexed as `[i, j, k]`
/// ↔ `(x[i], y[j], z[k])`.
///
/// *Panics if any axis has length less than 2*.
pub fn trapz_3d<S>(w: &Arr3<S>, dx: f64, dy: f64, dz: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let planes: nd::Array2<f64>
        = w.map_axis(nd::Axis(2), |lane| trapz(&lane, dz));
    trapz_2d(&planes, dx, dy)
}

/// Calculate the norm ∫|ψ|² of a (real or complex) wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &Arr1<S>, dx: f64) -> f64
where
    S: nd::Data<Elem = A>,
    A: Amplitude,
{
    trapz(&q.mapv(A::modulus_sq), dx)
}

/// Calculate the overlap ∫ψφ of two real wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T>(q: &Arr1<S>, p: &Arr1<T>, dx: f64) -> BoxResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(q, p)?;
    Ok(trapz(&(q * p), dx))
}

/// Check that a total probability is 1 to within `tolerance` (default 1e-6).
pub fn check_normalization(total: f64, tolerance: Option<f64>)
    -> BoxResult<()>
{
    let tol = tolerance.unwrap_or(DEF_NORM_TOLERANCE);
    ((total - 1.0).abs() <= tol)
        .then_some(()).ok_or(BoxError::NotNormalized(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapz_is_exact_for_lines() {
        let (x, dx) = box_grid(2.0, 11);
        let y = x.mapv(|xk| 3.0 * xk + 1.0);
        assert!((trapz(&y, dx) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn trapz_nd_of_constants() {
        let z: nd::Array2<f64> = nd::Array2::from_elem((5, 9), 2.0);
        assert!((trapz_2d(&z, 0.25, 0.125) - 2.0).abs() < 1e-12);
        let w: nd::Array3<f64> = nd::Array3::from_elem((3, 5, 9), 1.0);
        assert!((trapz_3d(&w, 0.5, 0.25, 0.125) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn complex_norm_ignores_phase() {
        let (x, dx) = box_grid(1.0, 101);
        let q: nd::Array1<C64> = x.mapv(|xk| C64::from_polar(1.0, 7.0 * xk));
        assert!((wf_norm(&q, dx) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalization_check() {
        assert!(check_normalization(1.0 + 5e-7, None).is_ok());
        assert!(matches!(
            check_normalization(0.99, None),
            Err(BoxError::NotNormalized(_)),
        ));
        assert!(check_normalization(0.99, Some(0.02)).is_ok());
    }

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let a: nd::Array1<f64> = nd::Array1::zeros(4);
        let b: nd::Array1<f64> = nd::Array1::zeros(5);
        assert!(matches!(wf_dot(&a, &b, 0.1), Err(BoxError::Length(_))));
    }
}
