//! Enumeration of the low-lying spectrum of a box, including degeneracies.
//!
//! Energies in a cubic box depend only on Σ *n*ᵢ², so degeneracy is decided
//! with exact integer comparison rather than floating-point tolerances.

use std::cmp::Ordering;
use crate::{
    error::BoxError,
    eigen::{ self, BoxResult },
    mode::Mode,
};

/// A single mode paired with its energy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Level<const D: usize> {
    /// Quantum numbers.
    pub mode: Mode<D>,
    /// Σ *n*ᵢ².
    pub sum_sq: i64,
    /// Energy.
    pub e: f64,
}

/// A set of modes sharing one energy.
#[derive(Clone, Debug, PartialEq)]
pub struct DegenerateLevel<const D: usize> {
    /// Σ *n*ᵢ², shared by every member of `modes`.
    pub sum_sq: i64,
    /// Energy.
    pub e: f64,
    /// All modes at this energy, in lexicographic order.
    pub modes: Vec<Mode<D>>,
}

impl<const D: usize> DegenerateLevel<D> {
    /// Degeneracy *g* of the level.
    pub fn degeneracy(&self) -> usize { self.modes.len() }
}

// every mode with components in 1..=nmax, in lexicographic order
fn all_modes<const D: usize>(nmax: i64) -> Vec<Mode<D>> {
    if nmax < 1 { return Vec::new(); }
    let mut modes: Vec<Mode<D>> = Vec::new();
    let mut n = [1_i64; D];
    'outer: loop {
        modes.push(Mode::new(n));
        for k in (0..D).rev() {
            if n[k] < nmax {
                n[k] += 1;
                continue 'outer;
            }
            n[k] = 1;
        }
        break;
    }
    modes
}

/// List every mode with quantum numbers in `1..=nmax`, sorted by increasing
/// energy; modes of equal energy appear in lexicographic order.
pub fn modes_by_energy<const D: usize>(nmax: i64, mass: f64, length: f64)
    -> BoxResult<Vec<Level<D>>>
{
    BoxError::check_positive(nmax)?;
    // the largest mode bounds every sum; fail before enumerating
    Mode::new([nmax; D]).sum_sq().ok_or(BoxError::QuantumNumberTooLarge(nmax))?;
    let scale = eigen::energy_scale(mass, length)?;
    let mut levels: Vec<Level<D>>
        = all_modes::<D>(nmax).into_iter()
        .map(|mode| {
            let sum_sq = mode.sum_sq().ok_or(BoxError::QuantumNumberTooLarge(nmax))?;
            Ok(Level { mode, sum_sq, e: scale * sum_sq as f64 })
        })
        .collect::<BoxResult<_>>()?;
    levels.sort_by(|l, r| {
        l.sum_sq.cmp(&r.sum_sq).then_with(|| l.mode.cmp(&r.mode))
    });
    Ok(levels)
}

/// Group the modes of [`modes_by_energy`] into levels of equal energy.
pub fn degenerate_levels<const D: usize>(nmax: i64, mass: f64, length: f64)
    -> BoxResult<Vec<DegenerateLevel<D>>>
{
    let levels = modes_by_energy::<D>(nmax, mass, length)?;
    let mut groups: Vec<DegenerateLevel<D>> = Vec::new();
    for Level { mode, sum_sq: s, e } in levels.into_iter() {
        match groups.last_mut() {
            Some(group) if group.sum_sq == s => { group.modes.push(mode); }
            _ => { groups.push(DegenerateLevel { sum_sq: s, e, modes: vec![mode] }); }
        }
    }
    Ok(groups)
}

/// Return the smallest gap between distinct values in `energies`.
///
/// Returns `None` if there are fewer than two distinct (non-NaN) values.
pub fn min_spacing(energies: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64>
        = energies.iter().copied().filter(|e| !e.is_nan()).collect();
    sorted.sort_by(|l, r| l.partial_cmp(r).unwrap_or(Ordering::Equal));
    sorted.dedup();
    sorted.windows(2)
        .map(|w| w[1] - w[0])
        .min_by(|l, r| l.partial_cmp(r).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::me;

    const L: f64 = 1e-9;

    #[test]
    fn enumerates_every_mode() {
        assert_eq!(all_modes::<1>(4).len(), 4);
        assert_eq!(all_modes::<2>(4).len(), 16);
        assert_eq!(all_modes::<3>(3).len(), 27);
        assert!(all_modes::<2>(0).is_empty());
    }

    #[test]
    fn sorted_by_energy() {
        let levels = modes_by_energy::<2>(4, me, L).unwrap();
        assert_eq!(levels[0].mode, Mode::new([1, 1]));
        assert_eq!(levels[1].mode, Mode::new([1, 2]));
        assert_eq!(levels[2].mode, Mode::new([2, 1]));
        assert!(levels.windows(2).all(|w| w[0].e <= w[1].e));
    }

    #[test]
    fn three_dimensional_degeneracy() {
        let groups = degenerate_levels::<3>(3, me, L).unwrap();
        assert_eq!(groups[0].sum_sq, 3);
        assert_eq!(groups[0].degeneracy(), 1);
        assert_eq!(groups[1].sum_sq, 6);
        assert_eq!(
            groups[1].modes,
            vec![Mode::new([1, 1, 2]), Mode::new([1, 2, 1]), Mode::new([2, 1, 1])],
        );
        // (1,1,3) and permutations
        let g11 = groups.iter().find(|g| g.sum_sq == 11).unwrap();
        assert_eq!(g11.degeneracy(), 3);
        // (1,2,3) and permutations
        let g14 = groups.iter().find(|g| g.sum_sq == 14).unwrap();
        assert_eq!(g14.degeneracy(), 6);
        let total: usize = groups.iter().map(|g| g.degeneracy()).sum();
        assert_eq!(total, 27);
    }

    #[test]
    fn spacing() {
        assert_eq!(min_spacing(&[1.0, 4.0, 4.0, 2.0]), Some(1.0));
        assert_eq!(min_spacing(&[5.0, 5.0]), None);
        assert_eq!(min_spacing(&[]), None);
    }

    #[test]
    fn rejects_bad_nmax() {
        assert!(matches!(
            modes_by_energy::<1>(0, me, L),
            Err(BoxError::BadQuantumNumber(0)),
        ));
        assert!(matches!(
            modes_by_energy::<3>(2_000_000_000, me, L),
            Err(BoxError::QuantumNumberTooLarge(2_000_000_000)),
        ));
    }
}
