// src/physics/mod.rs
//! Physical constants shared by the DCP limit models
//!
//! All models are evaluated in log10 space, so the reference limits are
//! exposed both as raw SI values and pre-converted to log10.

pub mod constants;

pub use constants::{
    BASELINE_BITS_PER_YEAR, BOLTZMANN_J_PER_K, EARTH_MASS_KG, EARTH_POWER_W,
    SECONDS_PER_YEAR, SPEED_OF_LIGHT_M_PER_S, STORAGE_TEMPERATURE_K,
};

/// Landauer's bound: minimum energy to create or erase one bit [J],
/// at storage temperature `temperature_k`.
pub fn landauer_bit_energy(temperature_k: f64) -> f64 {
    BOLTZMANN_J_PER_K * temperature_k * std::f64::consts::LN_2
}

/// Rest-mass equivalent of one bit at storage temperature `temperature_k` [kg],
/// via E = mc² applied to the Landauer energy (Vopson 2019).
pub fn bit_mass(temperature_k: f64) -> f64 {
    landauer_bit_energy(temperature_k) / (SPEED_OF_LIGHT_M_PER_S * SPEED_OF_LIGHT_M_PER_S)
}

/// Earth's total power use, log10 [W]. Reference line for the energy model.
pub fn earth_power_log10() -> f64 {
    EARTH_POWER_W.log10()
}

/// Earth's mass, log10 [kg]. Reference line for the mass model.
pub fn earth_mass_log10() -> f64 {
    EARTH_MASS_KG.log10()
}
