#![allow(non_upper_case_globals)]

//! Physical constants (CODATA 2018, MKS) and the natural scales of a box.

use std::f64::consts::PI;

/// Planck constant (J s), exact.
pub const h: f64 = 6.62607015e-34;
/// Reduced Planck constant (J s), exact.
pub const hbar: f64 = h / (2.0 * PI);
/// Elementary charge (C), exact.
pub const e: f64 = 1.602176634e-19;
/// Electron mass (kg).
pub const me: f64 = 9.1093837015e-31;
/// Proton mass (kg).
pub const mp: f64 = 1.67262192369e-27;

/// Convert an energy in joules to electronvolts.
pub fn to_ev(energy: f64) -> f64 { energy / e }

/// Convert an energy in electronvolts to joules.
pub fn from_ev(energy: f64) -> f64 { energy * e }

/// Natural scales of a particle of fixed mass in a box of fixed side length,
/// all stored in MKS units.
///
/// The energy scale is *ε* = *ħ*²/2*mL*², in terms of which the mode *n* has
/// energy *π*² Σ *n*ᵢ². The time scale is *τ* = *ħ*/*ε*. See
/// [`docs/units`][crate::docs#units] for more information.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxScale {
    /// Particle mass.
    pub mass: f64,
    /// Box side length.
    pub length: f64,
    /// Energy scale *ε*.
    pub energy: f64,
    /// Time scale *τ*.
    pub time: f64,
}

impl BoxScale {
    /// Compute scales for a mass (kg) and box length (m).
    ///
    /// Neither argument is checked here.
    pub fn new(mass: f64, length: f64) -> Self {
        let energy = hbar.powi(2) / (2.0 * mass * length.powi(2));
        Self { mass, length, energy, time: hbar / energy }
    }

    /// Energy (J) of any mode whose quantum numbers have squares summing to
    /// `sum_sq`.
    pub fn energy_of(&self, sum_sq: f64) -> f64 {
        PI.powi(2) * sum_sq * self.energy
    }

    /// Express an energy (J) in units of *ε*.
    pub fn nat_energy(&self, en: f64) -> f64 { en / self.energy }

    /// Express a time (s) in units of *τ*.
    pub fn nat_time(&self, t: f64) -> f64 { t / self.time }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electron_in_a_nanometer_box() {
        let sc = BoxScale::new(me, 1e-9);
        assert!((sc.time * sc.energy / hbar - 1.0).abs() < 1e-12);
        // ground state of an electron in a 1 nm box is ~0.376 eV
        let e1 = sc.energy_of(1.0);
        assert!((to_ev(e1) - 0.376).abs() < 1e-3);
        assert!((from_ev(to_ev(e1)) / e1 - 1.0).abs() < 1e-12);
        assert!((sc.nat_energy(e1) - PI.powi(2)).abs() < 1e-12);
    }

    #[test]
    fn beat_in_natural_time() {
        let sc = BoxScale::new(mp, 1e-12);
        let w = (sc.energy_of(4.0) - sc.energy_of(1.0)) / hbar;
        let period = 2.0 * PI / w;
        assert!((sc.nat_time(period) - 2.0 / (3.0 * PI)).abs() < 1e-12);
    }
}
