//! Compton scattering kinematics.
//!
//! ## Purpose
//!
//! This module gives the energy deposited by the recoil electron when a gamma
//! ray Compton-scatters through a given angle. Response matrices use it to
//! place the Compton continuum and its edge on the energy axis.
//!
//! ## Key concepts
//!
//! * **Recoil energy**: `Ee = Eg * k / (1 + k)` with `k = Eg/mc² * (1 - cos θ)`.
//! * **Compton edge**: The largest recoil energy, reached at `θ = π`.
//! * **Low-energy passthrough**: Gamma energies at or below 0.1 keV are
//!   returned unchanged.
//!
//! ## Invariants
//!
//! * `0 <= Ee < Eg` for `Eg > 0.1` keV.
//! * `Ee` increases monotonically with `θ` on `[0, π]`.
//!
//! ## Non-goals
//!
//! * This module does not model Doppler broadening or binding energies.

// External dependencies
use num_traits::Float;

/// Electron rest energy `mc²`, in keV.
pub const ELECTRON_REST_ENERGY_KEV: f64 = 511.0;

/// Gamma energies at or below this value, in keV, are passed through.
pub const PASSTHROUGH_ENERGY_KEV: f64 = 0.1;

/// Energy of the electron recoiling from a gamma ray of energy `e_gamma`
/// (keV) scattered through `theta` (radians).
#[inline]
pub fn compton_electron_energy<T: Float>(e_gamma: T, theta: T) -> T {
    let threshold = T::from(PASSTHROUGH_ENERGY_KEV).unwrap_or_else(T::zero);
    if e_gamma <= threshold {
        return e_gamma;
    }

    let mc2 = T::from(ELECTRON_REST_ENERGY_KEV).unwrap_or_else(T::one);
    let k = e_gamma / mc2 * (T::one() - theta.cos());
    e_gamma * k / (T::one() + k)
}

/// Compton edge of a gamma ray of energy `e_gamma` (keV).
#[inline]
pub fn compton_edge<T: Float>(e_gamma: T) -> T {
    let pi = T::from(core::f64::consts::PI).unwrap_or_else(T::zero);
    compton_electron_energy(e_gamma, pi)
}

/// Recoil energy for every gamma energy in `e_gamma`, written into `out`.
pub fn fill_compton_electron_energy<T: Float>(e_gamma: &[T], theta: T, out: &mut [T]) {
    for (slot, &e) in out.iter_mut().zip(e_gamma.iter()) {
        *slot = compton_electron_energy(e, theta);
    }
}
