// src/models/growth.rs
//! Growth model: accumulated digital bits after compound growth.

use super::Sample;

/// Total number of bits accumulated after `year` years of growth at `rate`:
///
/// ```text
/// bits(n) = (N_b / f) * ((f + 1)^(n+1) - 1)
/// ```
///
/// Returns log10(bits), or [`Sample::Undefined`] once the compounding term
/// overflows f64 range. A non-positive rate (reachable only through
/// misconfiguration, never the stock scenario set) also yields the sentinel
/// rather than dividing by zero.
pub fn accumulated_bits_log10(year: u32, rate: f64, baseline_bits_per_year: f64) -> Sample {
    if rate <= 0.0 {
        return Sample::Undefined;
    }
    let compounded = (rate + 1.0).powf(f64::from(year) + 1.0) - 1.0;
    let bits = (baseline_bits_per_year / rate) * compounded;
    Sample::from_log10(bits.log10())
}
