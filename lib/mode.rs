//! Quantum numbers labeling the eigenstates of a `D`-dimensional box.
//!
//! ```
//! use boxwell::mode::Mode;
//!
//! let n = Mode::new([1, 2, 1]);
//! assert_eq!(n.sum_sq(), Some(6));
//! assert_eq!(n.to_string(), "(1,2,1)");
//! ```

use std::fmt;
use crate::error::BoxError;

/// A tuple of quantum numbers, one per spatial dimension.
///
/// Components are stored signed so that invalid input can be represented and
/// rejected by the functions that consume a `Mode`; construction itself never
/// fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mode<const D: usize>(pub [i64; D]);

/// Quantum number of a one-dimensional box.
pub type Mode1 = Mode<1>;
/// Quantum numbers of a two-dimensional box.
pub type Mode2 = Mode<2>;
/// Quantum numbers of a three-dimensional box.
pub type Mode3 = Mode<3>;

impl<const D: usize> Mode<D> {
    /// Create a new set of quantum numbers.
    pub const fn new(n: [i64; D]) -> Self { Self(n) }

    /// The ground state, with all quantum numbers equal to 1.
    pub const fn ground() -> Self { Self([1; D]) }

    /// Number of spatial dimensions.
    pub const fn dims(&self) -> usize { D }

    /// Access the quantum numbers.
    pub fn components(&self) -> &[i64; D] { &self.0 }

    /// Return Σ *n*ᵢ², which fixes the energy of the mode up to a constant.
    ///
    /// Returns `None` if the sum does not fit in an `i64`.
    pub fn sum_sq(&self) -> Option<i64> {
        self.0.iter()
            .try_fold(0_i64, |acc, &nk| nk.checked_mul(nk)?.checked_add(acc))
    }

    /// Like [`Self::sum_sq`], but accumulated in floating point so that it is
    /// defined for any quantum numbers.
    pub fn sum_sq_f64(&self) -> f64 {
        self.0.iter().map(|&nk| (nk as f64).powi(2)).sum()
    }

    /// Return `true` if every quantum number is a positive integer.
    pub fn is_physical(&self) -> bool {
        self.0.iter().all(|&nk| nk > 0)
    }

    /// Return `true` if any quantum number is zero, i.e. the mode describes
    /// the trivial (everywhere-vanishing) state.
    pub fn is_trivial(&self) -> bool {
        self.0.iter().any(|&nk| nk == 0)
    }

    // reject anything that isn't a proper eigenstate label
    pub(crate) fn check_physical(&self) -> Result<(), BoxError> {
        self.0.iter().try_for_each(|&nk| BoxError::check_positive(nk))
    }

    // allow the trivial state, but never negative numbers
    pub(crate) fn check_nonnegative(&self) -> Result<(), BoxError> {
        self.0.iter().try_for_each(|&nk| BoxError::check_nonnegative(nk))
    }
}

impl From<i64> for Mode<1> {
    fn from(n: i64) -> Self { Self([n]) }
}

impl From<(i64, i64)> for Mode<2> {
    fn from(n: (i64, i64)) -> Self { Self([n.0, n.1]) }
}

impl From<(i64, i64, i64)> for Mode<3> {
    fn from(n: (i64, i64, i64)) -> Self { Self([n.0, n.1, n.2]) }
}

impl<const D: usize> fmt::Display for Mode<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, nk) in self.0.iter().enumerate() {
            write!(f, "{}{}", if k > 0 { "," } else { "" }, nk)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Mode3::ground().is_physical());
        assert!(Mode::new([1, 0]).is_trivial());
        assert!(!Mode::new([1, 0]).is_physical());
        assert!(Mode::new([2, 0]).check_nonnegative().is_ok());
        assert!(matches!(
            Mode::new([2, -1]).check_nonnegative(),
            Err(BoxError::BadQuantumNumber(-1)),
        ));
        assert!(matches!(
            Mode::from(0).check_physical(),
            Err(BoxError::BadQuantumNumber(0)),
        ));
    }

    #[test]
    fn display_and_conversion() {
        assert_eq!(Mode::from((2, 1)).to_string(), "(2,1)");
        assert_eq!(Mode::from(3), Mode1::new([3]));
        assert_eq!(Mode::from((1, 1, 2)).sum_sq(), Some(6));
    }

    #[test]
    fn large_quantum_numbers() {
        let n = Mode::new([4_000_000_000]);
        assert_eq!(n.sum_sq(), None);
        assert_eq!(n.sum_sq_f64(), 1.6e19);
        assert_eq!(Mode::new([2_000_000_000; 3]).sum_sq(), None);
        assert_eq!(Mode::new([2_000_000_000, 1]).sum_sq(), Some(4_000_000_000_000_000_001));
    }
}
