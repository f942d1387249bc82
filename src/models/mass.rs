// src/models/mass.rs
//! Mass model: rest-mass equivalent of accumulated digital information.

use super::Sample;
use crate::physics::bit_mass;

/// Total information mass accumulated after `year` years of growth at `rate`:
///
/// ```text
/// m_bit   = k_B * T * ln(2) / c²
/// mass(n) = N_b * (m_bit / f) * ((f + 1)^(n+1) - 1)
/// ```
///
/// Returns log10(kg). Structurally the same compounding form as the growth
/// model, with a per-bit mass in place of a raw bit count, and the same
/// guards: non-positive rate or f64 overflow yield [`Sample::Undefined`].
pub fn information_mass_log10(
    year: u32,
    rate: f64,
    baseline_bits_per_year: f64,
    temperature_k: f64,
) -> Sample {
    if rate <= 0.0 {
        return Sample::Undefined;
    }
    let compounded = (rate + 1.0).powf(f64::from(year) + 1.0) - 1.0;
    let mass = baseline_bits_per_year * (bit_mass(temperature_k) / rate) * compounded;
    Sample::from_log10(mass.log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accumulated_bits_log10;
    use crate::physics::{bit_mass, SPEED_OF_LIGHT_M_PER_S};

    #[test]
    fn test_year_zero_is_one_year_of_bit_mass() {
        let sample = information_mass_log10(0, 0.2, 7.3e21, 300.0);
        let expected = (7.3e21 * bit_mass(300.0)).log10();
        assert!((sample.value().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mass_tracks_growth_model() {
        // mass(n) = bits(n) * m_bit, so the log traces differ by a constant.
        let offset = bit_mass(300.0).log10();
        for year in [0, 10, 100, 500] {
            let bits = accumulated_bits_log10(year, 0.05, 7.3e21).value().unwrap();
            let mass = information_mass_log10(year, 0.05, 7.3e21, 300.0)
                .value()
                .unwrap();
            assert!((mass - bits - offset).abs() < 1e-9);
        }
    }

    #[test]
    fn test_energy_equivalence_roundtrip() {
        // 10^mass * c² recovers the accumulated Landauer energy.
        let c2 = SPEED_OF_LIGHT_M_PER_S * SPEED_OF_LIGHT_M_PER_S;
        let mass_log = information_mass_log10(50, 0.2, 7.3e21, 300.0)
            .value()
            .unwrap();
        let energy_from_mass = 10f64.powf(mass_log) * c2;

        let accumulated_bits =
            10f64.powf(accumulated_bits_log10(50, 0.2, 7.3e21).value().unwrap());
        let energy_direct = accumulated_bits * crate::physics::landauer_bit_energy(300.0);

        let relative = (energy_from_mass - energy_direct).abs() / energy_direct;
        assert!(relative < 1e-9);
    }

    #[test]
    fn test_overflow_yields_sentinel() {
        assert!(information_mass_log10(10_000, 0.5, 7.3e21, 300.0).is_undefined());
    }

    #[test]
    fn test_zero_rate_yields_sentinel() {
        assert!(information_mass_log10(10, 0.0, 7.3e21, 300.0).is_undefined());
    }

    #[test]
    fn test_extreme_year_offset_yields_sentinel() {
        // Year offsets beyond i32 range must overflow cleanly, not wrap.
        assert!(information_mass_log10(u32::MAX, 0.01, 7.3e21, 300.0).is_undefined());
    }
}
