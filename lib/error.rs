//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        Self::check_len(a.len(), b.len())
    }

    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from eigenstate and superposition functions.
#[derive(Debug, Error)]
pub enum BoxError {
    /// Returned when a quantum number that must be positive is not.
    #[error("quantum numbers must be positive integers; got {0}")]
    BadQuantumNumber(i64),

    /// Returned when quantum numbers are too large for their squares to be
    /// summed exactly.
    #[error("quantum numbers too large to sum their squares exactly; got {0}")]
    QuantumNumberTooLarge(i64),

    /// Returned when a non-positive or non-finite box length is encountered.
    #[error("box length must be finite and greater than 0; got {0}")]
    BadLength(f64),

    /// Returned when a non-positive or non-finite particle mass is
    /// encountered.
    #[error("particle mass must be finite and greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when a superposition is built from zero states.
    #[error("superposition requires at least one state")]
    EmptySuperposition,

    /// Returned when superposition coefficients have zero norm and hence cannot
    /// be normalized.
    #[error("superposition coefficients have zero norm")]
    ZeroNorm,

    /// Returned from [`check_normalization`][crate::integrate::check_normalization]
    /// with the computed total probability.
    #[error("total probability deviates from 1; got {0}")]
    NotNormalized(f64),

    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),
}

impl BoxError {
    pub(crate) fn check_length(length: f64) -> Result<(), Self> {
        (length.is_finite() && length > 0.0)
            .then_some(()).ok_or(Self::BadLength(length))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass.is_finite() && mass > 0.0)
            .then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_positive(n: i64) -> Result<(), Self> {
        (n > 0).then_some(()).ok_or(Self::BadQuantumNumber(n))
    }

    pub(crate) fn check_nonnegative(n: i64) -> Result<(), Self> {
        (n >= 0).then_some(()).ok_or(Self::BadQuantumNumber(n))
    }
}

/// Returned from rejection sampling functions.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Returned when the density envelope is non-positive or non-finite.
    #[error("density envelope must be finite and greater than 0; got {0}")]
    BadEnvelope(f64),

    /// Returned when a sampling axis has empty or non-finite bounds, or a width
    /// that overflows.
    #[error("sampling bounds must be finite with finite hi - lo > 0; got ({0}, {1})")]
    BadDomain(f64, f64),

    /// [`BoxError`]
    #[error("box error: {0}")]
    Box(#[from] BoxError),
}

impl SampleError {
    pub(crate) fn check_envelope(max_density: f64) -> Result<(), Self> {
        (max_density.is_finite() && max_density > 0.0)
            .then_some(()).ok_or(Self::BadEnvelope(max_density))
    }

    pub(crate) fn check_bounds(lo: f64, hi: f64) -> Result<(), Self> {
        (lo.is_finite() && hi.is_finite() && lo < hi && (hi - lo).is_finite())
            .then_some(()).ok_or(Self::BadDomain(lo, hi))
    }
}

/// Returned from table writers in [`export`][crate::export].
#[derive(Debug, Error)]
pub enum ExportError {
    /// [`std::io::Error`]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// [`LengthError`]
    #[error("column length error: {0}")]
    Length(#[from] LengthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_reject_bad_values() {
        assert!(matches!(BoxError::check_length(0.0), Err(BoxError::BadLength(_))));
        assert!(matches!(BoxError::check_length(f64::NAN), Err(BoxError::BadLength(_))));
        assert!(matches!(BoxError::check_mass(-1.0), Err(BoxError::BadMass(_))));
        assert!(matches!(BoxError::check_positive(0), Err(BoxError::BadQuantumNumber(0))));
        assert!(BoxError::check_nonnegative(0).is_ok());
        assert!(matches!(SampleError::check_bounds(1.0, 1.0), Err(SampleError::BadDomain(..))));
        assert!(matches!(
            SampleError::check_bounds(-f64::MAX, f64::MAX),
            Err(SampleError::BadDomain(..)),
        ));
        assert!(SampleError::check_bounds(-1e307, 1e307).is_ok());
        assert!(matches!(SampleError::check_envelope(f64::INFINITY), Err(SampleError::BadEnvelope(_))));
    }

    #[test]
    fn length_error_message() {
        let err = LengthError::check_len(3, 4).unwrap_err();
        assert_eq!(err.to_string(), "encountered arrays with incompatible lengths; got 3 and 4");
    }
}
