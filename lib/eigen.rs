//! Closed-form eigenstates of the infinite square well.
//!
//! All functions take the box length *L* explicitly; the box spans `[0, L]`
//! along every axis. Eigenfunctions are separable products of
//! ```text
//! ψₙ(x) = √(2/L) sin(n π x / L)
//! ```
//! one factor per dimension, with eigenenergies
//! ```text
//!        π² ħ²
//! E(n) = ------ Σ nᵢ²
//!        2 m L²
//! ```
//!
//! A quantum number of zero is accepted by the evaluation functions and
//! describes the trivial state, which vanishes everywhere. It has no energy, so
//! [`eigenenergy`] rejects it along with negative numbers.
//!
//! ```
//! use boxwell::{ eigen, mode::Mode, units };
//!
//! let l = 1e-9;
//! let e211 = eigen::eigenenergy(&Mode::new([2, 1, 1]), units::me, l).unwrap();
//! let e121 = eigen::eigenenergy(&Mode::new([1, 2, 1]), units::me, l).unwrap();
//! assert_eq!(e211, e121);
//! assert_eq!(eigen::eigenfunction(&Mode::new([3]), &[l], l).unwrap(), 0.0);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    Arr1,
    error::BoxError,
    mode::Mode,
    units::BoxScale,
};

pub type BoxResult<T> = Result<T, BoxError>;

/// Return the energy *π*²*ħ*²/2*mL*², such that *E*(*n*) = `energy_scale`
/// × Σ *n*ᵢ².
pub fn energy_scale(mass: f64, length: f64) -> BoxResult<f64> {
    BoxError::check_mass(mass)?;
    BoxError::check_length(length)?;
    Ok(BoxScale::new(mass, length).energy_of(1.0))
}

/// Compute the energy of the eigenstate labeled by `n` for a particle of mass
/// `mass` in a box of side length `length`.
///
/// Every quantum number must be positive.
pub fn eigenenergy<const D: usize>(n: &Mode<D>, mass: f64, length: f64)
    -> BoxResult<f64>
{
    n.check_physical()?;
    let scale = energy_scale(mass, length)?;
    Ok(scale * n.sum_sq_f64())
}

// single-axis factor; exactly zero on and beyond the walls
fn sine_factor(nk: i64, xk: f64, length: f64) -> f64 {
    if nk == 0 || !(xk > 0.0 && xk < length) {
        0.0
    } else {
        (2.0 / length).sqrt() * (nk as f64 * PI * xk / length).sin()
    }
}

// product of axis factors for an already-validated mode
pub(crate) fn eval_mode<const D: usize>(n: &Mode<D>, x: &[f64; D], length: f64)
    -> f64
{
    n.components().iter().zip(x)
        .map(|(&nk, &xk)| sine_factor(nk, xk, length))
        .product()
}

/// Evaluate the eigenfunction labeled by `n` at a single position.
///
/// Positions outside the box (or on its walls) give exactly zero, as does any
/// mode with a zero quantum number.
pub fn eigenfunction<const D: usize>(n: &Mode<D>, x: &[f64; D], length: f64)
    -> BoxResult<f64>
{
    n.check_nonnegative()?;
    BoxError::check_length(length)?;
    Ok(eval_mode(n, x, length))
}

/// Evaluate the probability density |ψ|² of the eigenstate labeled by `n` at a
/// single position.
pub fn probability_density<const D: usize>(
    n: &Mode<D>,
    x: &[f64; D],
    length: f64,
) -> BoxResult<f64>
{
    eigenfunction(n, x, length).map(|psi| psi * psi)
}

/// Return (2/*L*)<sup>`dims`</sup>, the maximum value of the probability
/// density of any single eigenstate in a `dims`-dimensional box.
pub fn peak_density(length: f64, dims: usize) -> BoxResult<f64> {
    BoxError::check_length(length)?;
    Ok((2.0 / length).powi(dims as i32))
}

// sample one axis factor over a coordinate array
fn axis_factor<S>(nk: i64, x: &Arr1<S>, length: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| sine_factor(nk, xk, length))
}

/// Sample a one-dimensional eigenfunction over an array of coordinates.
pub fn eigenfunction_grid_1d<S>(n: &Mode<1>, x: &Arr1<S>, length: f64)
    -> BoxResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    n.check_nonnegative()?;
    BoxError::check_length(length)?;
    Ok(axis_factor(n.0[0], x, length))
}

/// Sample a two-dimensional eigenfunction over the Cartesian product of two
/// coordinate arrays.
///
/// The returned array is indexed as `[i, j]` ↔ `(x[i], y[j])`.
pub fn eigenfunction_grid_2d<S, T>(
    n: &Mode<2>,
    x: &Arr1<S>,
    y: &Arr1<T>,
    length: f64,
) -> BoxResult<nd::Array2<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    n.check_nonnegative()?;
    BoxError::check_length(length)?;
    let fx = axis_factor(n.0[0], x, length);
    let fy = axis_factor(n.0[1], y, length);
    Ok(
        nd::Array2::from_shape_fn(
            (fx.len(), fy.len()), |(i, j)| fx[i] * fy[j])
    )
}

/// Sample a three-dimensional eigenfunction over the Cartesian product of
/// three coordinate arrays.
///
/// The returned array is indexed as `[i, j, k]` ↔ `(x[i], y[j], z[k])`.
pub fn eigenfunction_grid_3d<S, T, U>(
    n: &Mode<3>,
    x: &Arr1<S>,
    y: &Arr1<T>,
    z: &Arr1<U>,
    length: f64,
) -> BoxResult<nd::Array3<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    n.check_nonnegative()?;
    BoxError::check_length(length)?;
    let fx = axis_factor(n.0[0], x, length);
    let fy = axis_factor(n.0[1], y, length);
    let fz = axis_factor(n.0[2], z, length);
    Ok(
        nd::Array3::from_shape_fn(
            (fx.len(), fy.len(), fz.len()),
            |(i, j, k)| fx[i] * fy[j] * fz[k],
        )
    )
}

/// Like [`eigenfunction_grid_1d`], but for the probability density.
pub fn density_grid_1d<S>(n: &Mode<1>, x: &Arr1<S>, length: f64)
    -> BoxResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    eigenfunction_grid_1d(n, x, length).map(|psi| psi.mapv(|p| p * p))
}

/// Like [`eigenfunction_grid_2d`], but for the probability density.
pub fn density_grid_2d<S, T>(
    n: &Mode<2>,
    x: &Arr1<S>,
    y: &Arr1<T>,
    length: f64,
) -> BoxResult<nd::Array2<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    eigenfunction_grid_2d(n, x, y, length).map(|psi| psi.mapv(|p| p * p))
}

/// Like [`eigenfunction_grid_3d`], but for the probability density.
pub fn density_grid_3d<S, T, U>(
    n: &Mode<3>,
    x: &Arr1<S>,
    y: &Arr1<T>,
    z: &Arr1<U>,
    length: f64,
) -> BoxResult<nd::Array3<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    eigenfunction_grid_3d(n, x, y, z, length).map(|psi| psi.mapv(|p| p * p))
}

/// Sample an eigenfunction along a line parallel to coordinate axis `axis`,
/// passing through `point`.
///
/// The `axis`-th component of `point` is ignored and replaced by each element
/// of `coords` in turn. This produces e.g. the *y* = *z* = *L*/2 cuts through a
/// three-dimensional state.
///
/// *Panics if `axis >= D`*.
pub fn eigenfunction_line<S, const D: usize>(
    n: &Mode<D>,
    axis: usize,
    coords: &Arr1<S>,
    point: [f64; D],
    length: f64,
) -> BoxResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    assert!(axis < D, "axis {} out of range for a {}-dimensional box", axis, D);
    n.check_nonnegative()?;
    BoxError::check_length(length)?;
    let fixed: f64
        = n.components().iter().zip(&point).enumerate()
        .filter(|(k, _)| *k != axis)
        .map(|(_, (&nk, &xk))| sine_factor(nk, xk, length))
        .product();
    Ok(axis_factor(n.0[axis], coords, length) * fixed)
}
