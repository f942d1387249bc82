// src/models/energy.rs
//! Energy model: power required to create one year's digital information.

use super::Sample;
use crate::physics::{landauer_bit_energy, SECONDS_PER_YEAR};

/// Total energy to create all digital information in the n-th year, at the
/// Landauer limit:
///
/// ```text
/// energy(n) = N_b * k_B * T * ln(2) * (f + 1)^n
/// ```
///
/// divided by seconds-per-year to express mean power, returned as
/// log10(Watts). Overflow maps to [`Sample::Undefined`].
pub fn power_requirement_log10(
    year: u32,
    rate: f64,
    baseline_bits_per_year: f64,
    temperature_k: f64,
) -> Sample {
    let energy = baseline_bits_per_year
        * landauer_bit_energy(temperature_k)
        * (rate + 1.0).powf(f64::from(year));
    Sample::from_log10((energy / SECONDS_PER_YEAR).log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point() {
        // k_B * 300 * ln2 * 7.3e21 / 3.154e7 ~ 6.6e-7 W -> log10 ~ -6.1775
        let sample = power_requirement_log10(0, 0.01, 7.3e21, 300.0);
        let direct = (7.3e21 * landauer_bit_energy(300.0) / SECONDS_PER_YEAR).log10();
        assert!((sample.value().unwrap() - direct).abs() < 1e-12);
        assert!((direct - (-6.1775)).abs() < 1e-3);
    }

    #[test]
    fn test_rate_independent_at_year_zero() {
        let a = power_requirement_log10(0, 0.01, 7.3e21, 300.0);
        let b = power_requirement_log10(0, 0.5, 7.3e21, 300.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_year_of_growth_scales_power() {
        let base = power_requirement_log10(0, 0.2, 7.3e21, 300.0).value().unwrap();
        let next = power_requirement_log10(1, 0.2, 7.3e21, 300.0).value().unwrap();
        assert!((next - base - 1.2f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn test_overflow_yields_sentinel() {
        assert!(power_requirement_log10(10_000, 0.5, 7.3e21, 300.0).is_undefined());
    }

    #[test]
    fn test_extreme_year_offset_yields_sentinel() {
        // Year offsets beyond i32 range must overflow cleanly, not wrap.
        assert!(power_requirement_log10(u32::MAX, 0.01, 7.3e21, 300.0).is_undefined());
    }
}
