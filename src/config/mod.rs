// src/config/mod.rs
//! Study configuration system
//! Handles TOML parsing and validation

use crate::models::{ModelParams, Scenario};
use crate::sweep::SweepConfiguration;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    pub study: StudyInfo,
    pub time_domain: TimeDomainConfig,
    /// Fractional year-on-year growth rates, each in (0, 1].
    pub growth_rates: Vec<f64>,
    pub constants: ConstantsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyInfo {
    pub name: String,
}

/// Inclusive range of year offsets from present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeDomainConfig {
    pub start_year: u32,
    pub end_year: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantsConfig {
    pub baseline_bits_per_year: f64,
    pub temperature_k: f64,
}

impl StudyConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;

        let config: StudyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Default study: the published literals (Vopson 2020).
    pub fn default_study() -> Self {
        Self {
            study: StudyInfo {
                name: "Information Catastrophe".to_string(),
            },
            time_domain: TimeDomainConfig {
                start_year: 1,
                end_year: 10_000,
            },
            growth_rates: vec![0.01, 0.05, 0.2, 0.5],
            constants: ConstantsConfig {
                baseline_bits_per_year: crate::physics::BASELINE_BITS_PER_YEAR,
                temperature_k: crate::physics::STORAGE_TEMPERATURE_K,
            },
        }
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_domain.start_year == 0 {
            return Err(ConfigError::Validation(
                "Time domain must start at year 1 or later".to_string(),
            ));
        }
        if self.time_domain.end_year < self.time_domain.start_year {
            return Err(ConfigError::Validation(format!(
                "Time domain end ({}) precedes start ({})",
                self.time_domain.end_year, self.time_domain.start_year
            )));
        }

        if self.growth_rates.is_empty() {
            return Err(ConfigError::Validation(
                "At least one growth rate is required".to_string(),
            ));
        }
        for &rate in &self.growth_rates {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(ConfigError::Validation(format!(
                    "Growth rate must be in (0, 1], got {}",
                    rate
                )));
            }
        }

        if self.constants.baseline_bits_per_year <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "Baseline bit production must be positive, got {}",
                self.constants.baseline_bits_per_year
            )));
        }
        if self.constants.temperature_k <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "Storage temperature must be positive, got {} K",
                self.constants.temperature_k
            )));
        }

        Ok(())
    }

    /// Build the sweep configuration this study describes.
    pub fn to_sweep_configuration(&self) -> Result<SweepConfiguration, ConfigError> {
        self.validate()?;
        let scenarios = self
            .growth_rates
            .iter()
            .map(|&rate| Scenario::new(rate))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(SweepConfiguration {
            years: (self.time_domain.start_year..=self.time_domain.end_year).collect(),
            scenarios,
            params: ModelParams {
                baseline_bits_per_year: self.constants.baseline_bits_per_year,
                temperature_k: self.constants.temperature_k,
            },
        })
    }

    /// Export configuration to TOML string
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_str = self.to_toml_string()?;
        std::fs::write(path.as_ref(), toml_str).map_err(ConfigError::Io)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
