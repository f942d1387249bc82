// src/models/mod.rs
//! Closed-form models of digital content production and its physical limits
//!
//! Three independent pure evaluators, all returning log10 of the modeled
//! quantity:
//! - growth: total accumulated bits after n years of compound growth
//! - energy: mean power required to create the n-th year's bits (Landauer)
//! - mass: rest-mass equivalent of all accumulated bits (E = mc²)

pub mod energy;
pub mod growth;
pub mod mass;

pub use energy::power_requirement_log10;
pub use growth::accumulated_bits_log10;
pub use mass::information_mass_log10;

use crate::physics::{BASELINE_BITS_PER_YEAR, STORAGE_TEMPERATURE_K};
use serde::{Deserialize, Serialize};

/// One evaluated point: either a valid log10 quantity or the overflow sentinel.
///
/// Compounding growth overflows f64 well inside the default time domain, so
/// the invalid case is a first-class variant rather than a NaN that plotting
/// code would have to sniff for. JSON form: a number, or `null` for
/// `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    Value(f64),
    Undefined,
}

impl Sample {
    /// Wrap a computed log10 quantity, mapping any non-finite result to the
    /// sentinel. Rust floats overflow silently to infinity, so the check has
    /// to be explicit here rather than relying on a raised fault.
    pub fn from_log10(value: f64) -> Self {
        if value.is_finite() {
            Sample::Value(value)
        } else {
            Sample::Undefined
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Sample::Value(v) => Some(*v),
            Sample::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Sample::Undefined)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("growth rate must be in (0, 1], got {0}")]
    InvalidRate(f64),

    #[error("baseline bit production must be positive, got {0}")]
    InvalidBaseline(f64),

    #[error("storage temperature must be positive, got {0} K")]
    InvalidTemperature(f64),
}

/// A growth-rate scenario: fractional year-on-year compounding rate plus the
/// legend label derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub rate: f64,
    pub label: String,
}

impl Scenario {
    /// Build a scenario, rejecting rates outside (0, 1]. A zero rate would
    /// divide out in the growth and mass closed forms.
    pub fn new(rate: f64) -> Result<Self, ModelError> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(ModelError::InvalidRate(rate));
        }
        Ok(Self {
            rate,
            label: format!("{:.0}%", rate * 100.0),
        })
    }
}

/// Shared model parameters; defaults are the study literals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub baseline_bits_per_year: f64,
    pub temperature_k: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            baseline_bits_per_year: BASELINE_BITS_PER_YEAR,
            temperature_k: STORAGE_TEMPERATURE_K,
        }
    }
}

impl ModelParams {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.baseline_bits_per_year <= 0.0 {
            return Err(ModelError::InvalidBaseline(self.baseline_bits_per_year));
        }
        if self.temperature_k <= 0.0 {
            return Err(ModelError::InvalidTemperature(self.temperature_k));
        }
        Ok(())
    }
}

/// Which closed form a series was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Growth,
    Energy,
    Mass,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Growth, ModelKind::Energy, ModelKind::Mass];

    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Growth => "growth",
            ModelKind::Energy => "energy",
            ModelKind::Mass => "mass",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            ModelKind::Growth => "Accumulated Info. [log10(bits)]",
            ModelKind::Energy => "log10(Power [W])",
            ModelKind::Mass => "log10(Mass [kg])",
        }
    }

    /// Evaluate this model at one (year, scenario) point.
    pub fn evaluate(&self, year: u32, scenario: &Scenario, params: &ModelParams) -> Sample {
        match self {
            ModelKind::Growth => accumulated_bits_log10(
                year,
                scenario.rate,
                params.baseline_bits_per_year,
            ),
            ModelKind::Energy => power_requirement_log10(
                year,
                scenario.rate,
                params.baseline_bits_per_year,
                params.temperature_k,
            ),
            ModelKind::Mass => information_mass_log10(
                year,
                scenario.rate,
                params.baseline_bits_per_year,
                params.temperature_k,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_rejects_zero_rate() {
        assert!(Scenario::new(0.0).is_err());
        assert!(Scenario::new(-0.1).is_err());
        assert!(Scenario::new(1.5).is_err());
    }

    #[test]
    fn test_scenario_label_formatting() {
        assert_eq!(Scenario::new(0.01).unwrap().label, "1%");
        assert_eq!(Scenario::new(0.2).unwrap().label, "20%");
        assert_eq!(Scenario::new(0.5).unwrap().label, "50%");
    }

    #[test]
    fn test_sample_from_nonfinite() {
        assert!(Sample::from_log10(f64::INFINITY).is_undefined());
        assert!(Sample::from_log10(f64::NAN).is_undefined());
        assert_eq!(Sample::from_log10(21.0), Sample::Value(21.0));
    }

    #[test]
    fn test_sample_json_roundtrip() {
        let json = serde_json::to_string(&vec![Sample::Value(1.5), Sample::Undefined]).unwrap();
        assert_eq!(json, "[1.5,null]");
        let back: Vec<Sample> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Sample::Value(1.5), Sample::Undefined]);
    }

    #[test]
    fn test_default_params_validate() {
        assert!(ModelParams::default().validate().is_ok());

        let bad = ModelParams {
            baseline_bits_per_year: -1.0,
            ..ModelParams::default()
        };
        assert!(bad.validate().is_err());
    }
}
