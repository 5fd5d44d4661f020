//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Time dependence](#time-dependence)
//! - [Electron clouds](#electron-clouds)
//!
//! # Background
//! A particle of mass *m* confined to the box [0, *L*] by infinitely high walls
//! obeys the time-independent Schrödinger equation (TISE)
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(x) = E ψ(x)
//!   2 m ∂x²
//! ```
//! inside the box, subject to *ψ*(0) = *ψ*(*L*) = 0. The solutions are standing
//! waves with an integer number of half-wavelengths across the box,
//! ```text
//! ψₙ(x) = √(2/L) sin(n π x / L),   n = 1, 2, 3, ...
//!
//!         n² π² ħ²
//! E(n) = ---------
//!          2 m L²
//! ```
//! where the prefactor √(2/*L*) normalizes ∫|*ψ*ₙ|² = 1. The value *n* = 0
//! gives the function that vanishes identically, which is not a state at all;
//! negative *n* only flips the sign of *ψ*ₙ and so describes nothing new.
//!
//! In a cubic box of side *L* in *D* dimensions the TISE separates, and
//! eigenstates are labeled by one positive integer per axis:
//! ```text
//! ψₙ(x₁, ..., x_D) = Π ψ_{nᵢ}(xᵢ)
//!
//!         π² ħ²
//! E(n) = ------ Σ nᵢ²
//!        2 m L²
//! ```
//! Because the energy depends only on Σ *n*ᵢ², any permutation of the quantum
//! numbers gives the same energy. In three dimensions, for example, (1, 1, 2),
//! (1, 2, 1), and (2, 1, 1) form a three-fold degenerate level. Some sums are
//! reached by unrelated sets of numbers as well, which
//! [`spectrum`][crate::spectrum] accounts for by grouping on the integer sum
//! directly.
//!
//! # Units
//! Taking the box length as the characteristic length scale *a* = *L* and
//! changing variables to *x'* ≡ *x* / *a* gives
//! ```text
//! dx = a dx' ⇒ (∂²/∂x²) = (1/a²) (∂²/∂(x')²)
//! ψ(x) → ψ'(x') = ψ(a x') / √a
//! ```
//! which introduces a factor of 1/*a*² into the coefficient of the kinetic
//! energy term, *ħ*²/2 *m* → *ħ*²/2 *m* *a*² ≡ *ε*. This quantity has units of
//! energy and is the natural energy scale of the box: in units of *ε* the
//! eigenenergies are simply *π*² Σ *n*ᵢ². The associated time scale is *τ* ≡
//! *ħ* / *ε*.
//!
//! [`BoxScale`][crate::units::BoxScale] holds *ε* and *τ* for a given mass and
//! box length and converts MKS quantities into these units.
//!
//! # Time dependence
//! Each eigenstate evolves under the time-dependent Schrödinger equation by a
//! pure phase, *ψ*ₙ(*x*, *t*) = *ψ*ₙ(*x*) exp(-*i* *E*ₙ *t* / *ħ*). A general
//! state is a superposition
//! ```text
//! Ψ(x, t) = Σₖ cₖ ψₖ(x) exp(-i Eₖ t / ħ),   Σₖ |cₖ|² = 1
//! ```
//! whose density |*Ψ*|² is no longer stationary. For two populated states the
//! cross term oscillates at the angular frequency *ω* = (*E*₂ − *E*₁) / *ħ*,
//! so the density repeats with period *T* = 2*π* / *ω*. Since the *ψ*ₖ are
//! orthonormal, ∫|*Ψ*|² = Σₖ |*c*ₖ|² = 1 at every time.
//!
//! # Electron clouds
//! A scatter plot whose point density follows |*Ψ*|² is produced by rejection
//! sampling. Given a density *ρ* on a domain of volume *V* and an envelope *M*
//! with *ρ* ≤ *M* everywhere, draw *x* uniformly from the domain and *y*
//! uniformly from [0, *M*), and keep *x* whenever *y* < *ρ*(*x*). Kept points
//! are distributed as *ρ*, and for normalized *ρ* the fraction kept is
//! 1 / (*V* *M*). For a single one-dimensional eigenstate *M* = 2/*L* and the
//! expected acceptance is exactly 1/2.
//!
//! If *M* is smaller than the maximum of *ρ*, the regions where *ρ* > *M* are
//! accepted with probability 1 instead of *ρ* / *M*, flattening the peaks of
//! the cloud. See [`sample`][crate::sample].
