// src/viz/mod.rs
//! Chart rendering for sweep results
//!
//! Terminal line charts with a log10 horizontal time axis, one glyph per
//! growth scenario and a dashed reference line for the physical limit, plus
//! data export for external plotting tools.

use crate::models::ModelKind;
use crate::sweep::{Series, SweepOutcome};
use crate::physics::{earth_mass_log10, earth_power_log10};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationConfig {
    pub width: usize,
    pub height: usize,
    pub export_format: ExportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Json,
    Gnuplot,
    Python,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            export_format: ExportFormat::Csv,
        }
    }
}

/// Glyphs assigned to scenarios in series order.
const SERIES_GLYPHS: [char; 6] = ['*', 'o', 'x', '+', '#', '@'];

pub struct ChartRenderer {
    config: VisualizationConfig,
}

impl ChartRenderer {
    pub fn new(config: VisualizationConfig) -> Self {
        Self { config }
    }

    /// Render one model's series as an ASCII line chart. The x axis is
    /// log10(year); undefined samples leave gaps. `reference` draws a dashed
    /// horizontal line labeled with the physical limit.
    pub fn line_chart(
        &self,
        title: &str,
        years: &[u32],
        series: &[&Series],
        y_label: &str,
        reference: Option<(&str, f64)>,
    ) -> String {
        if years.is_empty() || series.is_empty() {
            return "No data to plot".to_string();
        }

        // Bounds: x in log10(year) space, y over defined samples plus the
        // reference line so the limit is always visible.
        let min_x = (*years.first().expect("non-empty") as f64).log10();
        let max_x = (*years.last().expect("non-empty") as f64).log10();
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for s in series {
            for sample in &s.samples {
                if let Some(v) = sample.value() {
                    min_y = min_y.min(v);
                    max_y = max_y.max(v);
                }
            }
        }
        if let Some((_, limit)) = reference {
            min_y = min_y.min(limit);
            max_y = max_y.max(limit);
        }

        let x_range = max_x - min_x;
        let y_range = max_y - min_y;
        if !x_range.is_finite() || !y_range.is_finite() || x_range <= 0.0 || y_range <= 0.0 {
            return "Data range too small for plotting".to_string();
        }

        let width = self.config.width;
        let height = self.config.height;
        let mut grid = vec![vec![' '; width]; height];

        // Dashed reference line first so data overdraws it.
        if let Some((_, limit)) = reference {
            let row = height - 1 - ((limit - min_y) / y_range * (height - 1) as f64) as usize;
            for (col, cell) in grid[row].iter_mut().enumerate() {
                if col % 2 == 0 {
                    *cell = '-';
                }
            }
        }

        for (index, s) in series.iter().enumerate() {
            let glyph = SERIES_GLYPHS[index % SERIES_GLYPHS.len()];
            for (sample, &year) in s.samples.iter().zip(years) {
                let Some(v) = sample.value() else { continue };
                let col = (((year as f64).log10() - min_x) / x_range * (width - 1) as f64) as usize;
                let row = height - 1 - ((v - min_y) / y_range * (height - 1) as f64) as usize;
                if col < width && row < height {
                    grid[row][col] = glyph;
                }
            }
        }

        for row in grid.iter_mut() {
            row[0] = '|';
        }
        for cell in grid[height - 1].iter_mut() {
            *cell = '-';
        }
        grid[height - 1][0] = '+';

        let mut plot = String::new();
        plot.push_str(&format!("\n{}\n", title));
        plot.push_str(&"=".repeat(width));
        plot.push('\n');
        for row in &grid {
            plot.push_str(&row.iter().collect::<String>());
            plot.push('\n');
        }
        plot.push_str(&format!(
            "Years from present, log10 scale: {} to {}\n",
            years.first().expect("non-empty"),
            years.last().expect("non-empty")
        ));
        plot.push_str(&format!(
            "Y: {} | Range: {:.2} to {:.2}\n",
            y_label, min_y, max_y
        ));

        plot.push_str("Legend: ");
        for (index, s) in series.iter().enumerate() {
            if index > 0 {
                plot.push_str(", ");
            }
            plot.push_str(&format!(
                "{} = {} growth",
                SERIES_GLYPHS[index % SERIES_GLYPHS.len()],
                s.scenario.label
            ));
        }
        if let Some((name, limit)) = reference {
            plot.push_str(&format!(", -- = {} ({:.2})", name, limit));
        }
        plot.push('\n');

        plot
    }

    /// Render the full study: one chart per model, with the matching
    /// reference line on the energy and mass charts.
    pub fn render_study(&self, outcome: &SweepOutcome) -> String {
        let mut out = String::new();
        for model in ModelKind::ALL {
            let series = outcome.series_for(model);
            let (title, reference) = match model {
                ModelKind::Growth => ("Model of Digital Content Production Growth", None),
                ModelKind::Energy => (
                    "Power Requirement of Digital Bit Production",
                    Some(("Earth Power", earth_power_log10())),
                ),
                ModelKind::Mass => (
                    "Information Mass of Digital Bit Production",
                    Some(("Earth Mass", earth_mass_log10())),
                ),
            };
            out.push_str(&self.line_chart(
                title,
                &outcome.years,
                &series,
                model.axis_label(),
                reference,
            ));
        }
        out
    }

    /// Export data for external visualization tools.
    pub fn export_for_plotting(&self, outcome: &SweepOutcome, path: &str) -> Result<(), String> {
        match self.config.export_format {
            ExportFormat::Csv => self.export_csv(outcome, path),
            ExportFormat::Json => self.export_json(outcome, path),
            ExportFormat::Gnuplot => self.export_gnuplot(outcome, path),
            ExportFormat::Python => self.export_python(outcome, path),
        }
    }

    fn export_csv(&self, outcome: &SweepOutcome, path: &str) -> Result<(), String> {
        let mut csv = String::new();
        csv.push_str("year");
        for s in &outcome.series {
            csv.push_str(&format!(",{}_{}", s.model.name(), s.scenario.label));
        }
        csv.push('\n');

        for (index, year) in outcome.years.iter().enumerate() {
            csv.push_str(&year.to_string());
            for s in &outcome.series {
                match s.samples[index].value() {
                    Some(v) => csv.push_str(&format!(",{:.6}", v)),
                    None => csv.push(','),
                }
            }
            csv.push('\n');
        }

        std::fs::write(path, csv).map_err(|e| format!("Failed to write CSV: {}", e))?;
        println!("📊 Data exported to CSV: {}", path);
        Ok(())
    }

    fn export_json(&self, outcome: &SweepOutcome, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(outcome)
            .map_err(|e| format!("JSON serialization failed: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("📊 Data exported to JSON: {}", path);
        Ok(())
    }

    fn export_gnuplot(&self, outcome: &SweepOutcome, path: &str) -> Result<(), String> {
        let mut script = String::new();
        script.push_str("# Gnuplot script for DCP limit model charts\n");
        script.push_str("set terminal pngcairo size 1600,600\n");
        script.push_str("set output 'dcp_limits.png'\n");
        script.push_str("set multiplot layout 1,2\n");
        script.push_str("set logscale x 10\n");
        script.push_str("set xlabel 'Years from Present [log10 scale]'\n");

        let panels = [
            (
                ModelKind::Energy,
                "Power Requirement of Digital Bit Production",
                "log10(Power [W])",
                "Earth Power",
                earth_power_log10(),
            ),
            (
                ModelKind::Mass,
                "Information Mass of Digital Bit Production",
                "log10(Mass [kg])",
                "Earth Mass",
                earth_mass_log10(),
            ),
        ];

        for (model, title, y_label, limit_name, limit) in panels {
            let series = outcome.series_for(model);
            script.push_str(&format!("set title '{}'\n", title));
            script.push_str(&format!("set ylabel '{}'\n", y_label));
            script.push_str(&format!(
                "plot {:.4} with lines dashtype 2 title '{}'",
                limit, limit_name
            ));
            for s in &series {
                script.push_str(&format!(
                    ", '-' using 1:2 with lines title '{}'",
                    s.scenario.label
                ));
            }
            script.push('\n');

            for s in &series {
                for (sample, year) in s.samples.iter().zip(&outcome.years) {
                    if let Some(v) = sample.value() {
                        script.push_str(&format!("{} {:.6}\n", year, v));
                    }
                }
                script.push_str("e\n");
            }
        }
        script.push_str("unset multiplot\n");

        std::fs::write(path, script).map_err(|e| format!("Failed to write Gnuplot script: {}", e))?;
        println!("📊 Gnuplot script exported: {}", path);
        Ok(())
    }

    fn export_python(&self, outcome: &SweepOutcome, path: &str) -> Result<(), String> {
        let mut script = String::new();
        script.push_str("#!/usr/bin/env python3\n");
        script.push_str("# Matplotlib script for DCP limit model charts\n");
        script.push_str("import matplotlib.pyplot as plt\n\n");
        script.push_str("nan = float('nan')\n");
        script.push_str(&format!(
            "years = {:?}\n\n",
            outcome.years
        ));

        for s in &outcome.series {
            script.push_str(&format!("{}_{} = [", s.model.name(), glyph_safe(&s.scenario.label)));
            for (index, sample) in s.samples.iter().enumerate() {
                if index > 0 {
                    script.push_str(", ");
                }
                match sample.value() {
                    Some(v) => script.push_str(&format!("{:.6}", v)),
                    None => script.push_str("nan"),
                }
            }
            script.push_str("]\n");
        }

        script.push_str("\nfig, ax = plt.subplots(1, 2, figsize=(16, 6))\n");
        script.push_str(&format!(
            "ax[0].plot(years, [{:.4}] * len(years), label='Earth Power', linestyle='dashed')\n",
            earth_power_log10()
        ));
        script.push_str(&format!(
            "ax[1].plot(years, [{:.4}] * len(years), label='Earth Mass', linestyle='dashed')\n",
            earth_mass_log10()
        ));

        for s in &outcome.series {
            let panel = match s.model {
                ModelKind::Energy => 0,
                ModelKind::Mass => 1,
                ModelKind::Growth => continue,
            };
            script.push_str(&format!(
                "ax[{}].plot(years, {}_{}, label='{}')\n",
                panel,
                s.model.name(),
                glyph_safe(&s.scenario.label),
                s.scenario.label
            ));
        }

        script.push_str("ax[0].set_title('Power Requirement of Digital Bit Production')\n");
        script.push_str("ax[0].set_ylabel('log10(Power [W])')\n");
        script.push_str("ax[1].set_title('Information Mass of Digital Bit Production')\n");
        script.push_str("ax[1].set_ylabel('log10(mass [kg])')\n");
        script.push_str("for a in ax:\n");
        script.push_str("    a.set_xscale('log', base=10)\n");
        script.push_str("    a.set_xlabel('Years from Present [log10 scale]')\n");
        script.push_str("    a.legend()\n");
        script.push_str("plt.tight_layout()\n");
        script.push_str("plt.savefig('dcp_limits.png', dpi=300, bbox_inches='tight')\n");
        script.push_str("plt.show()\n");

        std::fs::write(path, script).map_err(|e| format!("Failed to write Python script: {}", e))?;
        println!("📊 Python visualization script exported: {}", path);
        Ok(())
    }
}

/// Scenario labels become Python identifiers: "1%" -> "1pct".
fn glyph_safe(label: &str) -> String {
    label.replace('%', "pct")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{ModelSweep, SweepConfiguration};

    fn rendered_outcome() -> crate::sweep::SweepOutcome {
        let config = SweepConfiguration {
            years: (1..=1000).collect(),
            ..SweepConfiguration::default()
        };
        let mut sweep = ModelSweep::new(config);
        sweep.run_sweep().clone()
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = ChartRenderer::new(VisualizationConfig::default());
        assert!(renderer.config.width > 0);
        assert!(renderer.config.height > 0);
    }

    #[test]
    fn test_empty_series_message() {
        let renderer = ChartRenderer::new(VisualizationConfig::default());
        let chart = renderer.line_chart("t", &[], &[], "y", None);
        assert_eq!(chart, "No data to plot");
    }

    #[test]
    fn test_study_renders_all_charts() {
        let outcome = rendered_outcome();
        let renderer = ChartRenderer::new(VisualizationConfig::default());
        let charts = renderer.render_study(&outcome);

        assert!(charts.contains("Model of Digital Content Production Growth"));
        assert!(charts.contains("Power Requirement of Digital Bit Production"));
        assert!(charts.contains("Information Mass of Digital Bit Production"));
        assert!(charts.contains("Earth Power"));
        assert!(charts.contains("Earth Mass"));
        assert!(charts.contains("1% growth"));
    }

    #[test]
    fn test_label_sanitizer() {
        assert_eq!(glyph_safe("20%"), "20pct");
    }

    #[test]
    fn test_csv_export_has_gaps_not_nans() {
        let outcome = {
            let mut sweep = ModelSweep::new(SweepConfiguration::default());
            sweep.run_sweep().clone()
        };
        let renderer = ChartRenderer::new(VisualizationConfig::default());
        let path = std::env::temp_dir().join("infocat_viz_test.csv");
        let path = path.to_str().unwrap().to_string();
        renderer.export_csv(&outcome, &path).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        let last_line = csv.lines().last().unwrap();
        // 50% growth series have overflowed by year 10000: empty cells.
        assert!(last_line.contains(",,"));
        assert!(!csv.contains("NaN"));
        std::fs::remove_file(&path).ok();
    }
}
