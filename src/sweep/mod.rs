// src/sweep/mod.rs
//! Scenario sweep driver for the DCP limit models
//!
//! Evaluates every model once per (year, scenario) pair over a shared time
//! domain, producing one Series per (model, scenario) combination plus a
//! limit-crossing summary against the Earth power and Earth mass reference
//! lines.

use crate::models::{ModelKind, ModelParams, Sample, Scenario};
use crate::physics::{earth_mass_log10, earth_power_log10};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfiguration {
    /// Year offsets from present, ascending. Shared by every series.
    pub years: Vec<u32>,
    pub scenarios: Vec<Scenario>,
    pub params: ModelParams,
}

impl Default for SweepConfiguration {
    fn default() -> Self {
        Self {
            years: (1..=10_000).collect(),
            scenarios: [0.01, 0.05, 0.2, 0.5]
                .iter()
                .map(|&f| Scenario::new(f).expect("stock rates are valid"))
                .collect(),
            params: ModelParams::default(),
        }
    }
}

/// One model evaluated for one scenario, aligned index-for-index with the
/// sweep's time domain. Undefined samples are gaps, never omissions: the
/// series always has the full domain length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub model: ModelKind,
    pub scenario: Scenario,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn defined_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.is_undefined()).count()
    }

    /// First year whose sample strictly exceeds `limit_log10`, scanning in
    /// domain order. Undefined samples are skipped, not treated as crossed.
    pub fn first_crossing(&self, years: &[u32], limit_log10: f64) -> Option<u32> {
        self.samples
            .iter()
            .zip(years)
            .find(|(sample, _)| matches!(sample.value(), Some(v) if v > limit_log10))
            .map(|(_, &year)| year)
    }
}

/// When a modeled quantity first exceeds its physical reference limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitCrossing {
    pub model: ModelKind,
    pub scenario: String,
    pub limit_log10: f64,
    pub year: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub years: Vec<u32>,
    pub series: Vec<Series>,
    pub crossings: Vec<LimitCrossing>,
}

impl SweepOutcome {
    pub fn series_for(&self, model: ModelKind) -> Vec<&Series> {
        self.series.iter().filter(|s| s.model == model).collect()
    }
}

pub struct ModelSweep {
    config: SweepConfiguration,
    outcome: Option<SweepOutcome>,
}

impl ModelSweep {
    pub fn new(config: SweepConfiguration) -> Self {
        Self {
            config,
            outcome: None,
        }
    }

    /// Run all three models over every (year, scenario) pair. A point that
    /// overflows contributes a gap; it never aborts the rest of the sweep.
    pub fn run_sweep(&mut self) -> &SweepOutcome {
        let total = self.config.scenarios.len();
        println!("🔬 Starting DCP limit sweep");
        println!(
            "📊 {} years x {} scenarios x {} models",
            self.config.years.len(),
            total,
            ModelKind::ALL.len()
        );

        let mut series = Vec::with_capacity(total * ModelKind::ALL.len());
        for (index, scenario) in self.config.scenarios.iter().enumerate() {
            println!(
                "⚙️  Scenario {}/{}: {} growth",
                index + 1,
                total,
                scenario.label
            );
            for model in ModelKind::ALL {
                let samples: Vec<Sample> = self
                    .config
                    .years
                    .iter()
                    .map(|&year| model.evaluate(year, scenario, &self.config.params))
                    .collect();
                series.push(Series {
                    model,
                    scenario: scenario.clone(),
                    samples,
                });
            }
        }

        let crossings = Self::limit_crossings(&self.config.years, &series);
        println!("🎯 Sweep complete");
        self.outcome.insert(SweepOutcome {
            years: self.config.years.clone(),
            series,
            crossings,
        })
    }

    fn limit_crossings(years: &[u32], series: &[Series]) -> Vec<LimitCrossing> {
        series
            .iter()
            .filter_map(|s| {
                let limit_log10 = match s.model {
                    ModelKind::Energy => earth_power_log10(),
                    ModelKind::Mass => earth_mass_log10(),
                    ModelKind::Growth => return None,
                };
                Some(LimitCrossing {
                    model: s.model,
                    scenario: s.scenario.label.clone(),
                    limit_log10,
                    year: s.first_crossing(years, limit_log10),
                })
            })
            .collect()
    }

    pub fn outcome(&self) -> Option<&SweepOutcome> {
        self.outcome.as_ref()
    }

    pub fn export_results(&self, path: &str) -> Result<(), String> {
        let outcome = self
            .outcome
            .as_ref()
            .ok_or_else(|| "No sweep results to export; run the sweep first".to_string())?;

        let json = serde_json::to_string_pretty(outcome)
            .map_err(|e| format!("Serialization failed: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("File write failed: {}", e))?;

        println!("📁 Results exported to: {}", path);
        Ok(())
    }

    pub fn print_summary(&self) {
        let Some(outcome) = &self.outcome else {
            println!("No sweep results yet");
            return;
        };

        println!("\n📈 DCP Limit Sweep Summary");
        println!("==========================");
        println!("Time domain: {} years", outcome.years.len());
        println!("Series produced: {}", outcome.series.len());

        println!("\n⚡ Power requirement vs Earth power ({:.2} log10 W):", earth_power_log10());
        for crossing in outcome.crossings.iter().filter(|c| c.model == ModelKind::Energy) {
            match crossing.year {
                Some(year) => println!("  {} growth: exceeded in year {}", crossing.scenario, year),
                None => println!("  {} growth: never exceeded in domain", crossing.scenario),
            }
        }

        println!("\n🌍 Information mass vs Earth mass ({:.2} log10 kg):", earth_mass_log10());
        for crossing in outcome.crossings.iter().filter(|c| c.model == ModelKind::Mass) {
            match crossing.year {
                Some(year) => println!("  {} growth: exceeded in year {}", crossing.scenario, year),
                None => println!("  {} growth: never exceeded in domain", crossing.scenario),
            }
        }

        let gapped = outcome
            .series
            .iter()
            .filter(|s| s.defined_count() < s.samples.len())
            .count();
        if gapped > 0 {
            println!("\n⚠️  {} series hit f64 overflow and carry gaps", gapped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SweepConfiguration {
        SweepConfiguration {
            years: (1..=100).collect(),
            ..SweepConfiguration::default()
        }
    }

    #[test]
    fn test_default_configuration() {
        let config = SweepConfiguration::default();
        assert_eq!(config.years.len(), 10_000);
        assert_eq!(config.scenarios.len(), 4);
        assert_eq!(config.scenarios[2].label, "20%");
    }

    #[test]
    fn test_sweep_produces_full_series() {
        let mut sweep = ModelSweep::new(small_config());
        let outcome = sweep.run_sweep();

        assert_eq!(outcome.series.len(), 4 * 3);
        for series in &outcome.series {
            assert_eq!(series.samples.len(), outcome.years.len());
        }
    }

    #[test]
    fn test_overflow_gaps_do_not_truncate() {
        // 50% growth over 10k years overflows long before the domain ends.
        let mut sweep = ModelSweep::new(SweepConfiguration::default());
        let outcome = sweep.run_sweep();

        let growth_50 = outcome
            .series
            .iter()
            .find(|s| s.model == ModelKind::Growth && s.scenario.label == "50%")
            .unwrap();
        assert_eq!(growth_50.samples.len(), 10_000);
        assert!(growth_50.defined_count() < 10_000);
        assert!(growth_50.samples.last().unwrap().is_undefined());
    }

    #[test]
    fn test_series_ordering_matches_domain() {
        let mut sweep = ModelSweep::new(small_config());
        let outcome = sweep.run_sweep();

        let growth_1 = outcome
            .series
            .iter()
            .find(|s| s.model == ModelKind::Growth && s.scenario.label == "1%")
            .unwrap();
        // Monotone model: samples must ascend exactly as the domain does.
        let values: Vec<f64> = growth_1.samples.iter().map(|s| s.value().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_crossing_years_ordered_by_rate() {
        let mut sweep = ModelSweep::new(SweepConfiguration::default());
        let outcome = sweep.run_sweep();

        let years: Vec<Option<u32>> = outcome
            .crossings
            .iter()
            .filter(|c| c.model == ModelKind::Energy)
            .map(|c| c.year)
            .collect();
        // Every scenario eventually outgrows Earth power within 10k years.
        assert!(years.iter().all(|y| y.is_some()));
        // Faster growth crosses sooner.
        let unwrapped: Vec<u32> = years.into_iter().flatten().collect();
        assert!(unwrapped.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_first_crossing_skips_gaps() {
        let series = Series {
            model: ModelKind::Energy,
            scenario: Scenario::new(0.5).unwrap(),
            samples: vec![Sample::Undefined, Sample::Value(1.0), Sample::Value(5.0)],
        };
        assert_eq!(series.first_crossing(&[1, 2, 3], 2.0), Some(3));
        assert_eq!(series.first_crossing(&[1, 2, 3], 10.0), None);
    }

    #[test]
    fn test_export_before_run_fails() {
        let sweep = ModelSweep::new(small_config());
        assert!(sweep.export_results("/tmp/never-written.json").is_err());
    }
}
