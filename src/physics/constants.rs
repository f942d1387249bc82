// src/physics/constants.rs
//! Fixed physical scalars used by the growth, energy and mass models.
//!
//! Values follow Vopson, "The Information Catastrophe" (AIP Advances 10,
//! 085014, 2020). They are definition-time literals, never recomputed.

/// Boltzmann constant [m² kg s⁻² K⁻¹].
pub const BOLTZMANN_J_PER_K: f64 = 1.380_648_52e-23;

/// Speed of light in vacuum [m/s].
///
/// The study rounds to 3.0e8 rather than using the exact SI value; the
/// mass model inherits that choice.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 3.0e8;

/// Seconds in one year, used to convert annual energy to mean power.
pub const SECONDS_PER_YEAR: f64 = 3.154e7;

/// Temperature at which information is assumed to be stored [K].
pub const STORAGE_TEMPERATURE_K: f64 = 300.0;

/// Estimated current annual rate of digital bit production [bits/year].
///
/// Derived from ~2e19 bits/day of digital content production.
pub const BASELINE_BITS_PER_YEAR: f64 = 7.3e21;

/// Present total power use on Earth [W]. Reference limit for the energy model.
pub const EARTH_POWER_W: f64 = 18.5e12;

/// Mass of the Earth [kg]. Reference limit for the mass model.
pub const EARTH_MASS_KG: f64 = 6.0e24;
