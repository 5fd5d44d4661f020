//! Provides closed-form eigenstates of a particle in a one-, two-, or
//! three-dimensional infinite square well ("particle in a box"), along with
//! tools to evolve superpositions in time and to render probability densities
//! as sampled "electron clouds".
//!
//! Provides the following:
//! - Eigenstates:
//!     - Eigenenergies, eigenfunctions, and probability densities for any
//!       [`Mode`][mode::Mode] of a `D`-dimensional cubic box
//!     - Evaluation over coordinate grids and line cuts
//!     - Sorted spectra with degeneracies
//! - Time dependence:
//!     - Normalized superpositions evaluated in closed form, with beat periods
//! - Sampling:
//!     - Rejection sampling with an injected random source and acceptance
//!       diagnostics
//! - Checks and output:
//!     - Trapezoid-rule normalization checks on 1D/2D/3D grids
//!     - Comma- or tab-separated table export
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod mode;
pub mod eigen;
pub mod superpos;
pub mod spectrum;
pub mod integrate;
pub mod sample;
pub mod export;

pub mod docs;

pub(crate) const DEF_NORM_TOLERANCE: f64 = 1e-6;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
pub type Arr3<S> = ndarray::ArrayBase<S, ndarray::Ix3>;
