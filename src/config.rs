//! Experiment configuration (optional JSON file).
//!
//! JSON shape, every field optional:
//! {
//!   "references": 200000,        // entries per trace
//!   "pages": 1000,               // distinct pages, numbered from 1
//!   "dirty_rate": 0.5,           // probability an entry writes
//!   "run_length": 20,            // random flavor: longest ascending run
//!   "locality_span": 100,        // locality flavor: widest page window
//!   "burst_fraction": [0.0333, 0.05], // locality burst bounds, of total
//!   "arb_interval": 1000,        // references between ARB aging ticks
//!   "seed": 7                    // omit for entropy-seeded runs
//! }
//!
//! The raw spec deserializes leniently with per-field defaults and is then
//! checked into an [`ExperimentConfig`] before anything runs.

use crate::trace::GeneratorConfig;
use anyhow::bail;
use serde::Deserialize;

fn default_references() -> usize {
    200_000
}

fn default_pages() -> u32 {
    1000
}

fn default_dirty_rate() -> f64 {
    0.5
}

fn default_run_length() -> u32 {
    20
}

fn default_locality_span() -> u32 {
    100
}

fn default_burst_fraction() -> [f64; 2] {
    [1.0 / 30.0, 1.0 / 20.0]
}

fn default_arb_interval() -> usize {
    1000
}

/// Raw config shape as it appears in the JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentSpec {
    #[serde(default = "default_references")]
    pub references: usize,

    #[serde(default = "default_pages")]
    pub pages: u32,

    #[serde(default = "default_dirty_rate")]
    pub dirty_rate: f64,

    #[serde(default = "default_run_length")]
    pub run_length: u32,

    #[serde(default = "default_locality_span")]
    pub locality_span: u32,

    #[serde(default = "default_burst_fraction")]
    pub burst_fraction: [f64; 2],

    #[serde(default = "default_arb_interval")]
    pub arb_interval: usize,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ExperimentSpec {
    fn default() -> Self {
        Self {
            references: default_references(),
            pages: default_pages(),
            dirty_rate: default_dirty_rate(),
            run_length: default_run_length(),
            locality_span: default_locality_span(),
            burst_fraction: default_burst_fraction(),
            arb_interval: default_arb_interval(),
            seed: None,
        }
    }
}

/// Checked configuration ready for the pipeline.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub generator: GeneratorConfig,
    pub arb_interval: usize,
    pub seed: Option<u64>,
}

impl ExperimentSpec {
    /// Range-check every field and build the validated config.
    pub fn validate_and_build(&self) -> anyhow::Result<ExperimentConfig> {
        if self.references == 0 {
            bail!("references must be positive");
        }
        if self.pages < 2 {
            bail!("pages must be at least 2, got {}", self.pages);
        }
        if !(0.0..=1.0).contains(&self.dirty_rate) {
            bail!("dirty_rate must be within [0, 1], got {}", self.dirty_rate);
        }
        if self.run_length == 0 {
            bail!("run_length must be positive");
        }
        if self.locality_span == 0 {
            bail!("locality_span must be positive");
        }
        let [lo, hi] = self.burst_fraction;
        if !(lo > 0.0 && lo <= hi && hi <= 1.0) {
            bail!("burst_fraction must satisfy 0 < lo <= hi <= 1, got [{}, {}]", lo, hi);
        }
        if self.arb_interval == 0 {
            bail!("arb_interval must be positive");
        }

        Ok(ExperimentConfig {
            generator: GeneratorConfig {
                references: self.references,
                pages: self.pages,
                dirty_rate: self.dirty_rate,
                run_length: self.run_length,
                locality_span: self.locality_span,
                burst_lo: lo,
                burst_hi: hi,
            },
            arb_interval: self.arb_interval,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_the_defaults() {
        let spec: ExperimentSpec = serde_json::from_str("{}").unwrap();
        let cfg = spec.validate_and_build().unwrap();
        assert_eq!(cfg.generator.references, 200_000);
        assert_eq!(cfg.generator.pages, 1000);
        assert_eq!(cfg.generator.run_length, 20);
        assert_eq!(cfg.arb_interval, 1000);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn fields_override_individually() {
        let spec: ExperimentSpec =
            serde_json::from_str(r#"{"references": 500, "seed": 7, "dirty_rate": 0.25}"#).unwrap();
        let cfg = spec.validate_and_build().unwrap();
        assert_eq!(cfg.generator.references, 500);
        assert_eq!(cfg.generator.dirty_rate, 0.25);
        assert_eq!(cfg.seed, Some(7));
        // Untouched fields keep their defaults.
        assert_eq!(cfg.generator.locality_span, 100);
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        let bad = [
            r#"{"dirty_rate": 1.5}"#,
            r#"{"pages": 1}"#,
            r#"{"references": 0}"#,
            r#"{"run_length": 0}"#,
            r#"{"burst_fraction": [0.1, 0.05]}"#,
            r#"{"burst_fraction": [0.0, 0.05]}"#,
            r#"{"arb_interval": 0}"#,
        ];
        for json in bad {
            let spec: ExperimentSpec = serde_json::from_str(json).unwrap();
            assert!(spec.validate_and_build().is_err(), "accepted {json}");
        }
    }

    #[test]
    fn dirty_rate_message_names_the_value() {
        let spec: ExperimentSpec = serde_json::from_str(r#"{"dirty_rate": 2.0}"#).unwrap();
        let err = spec.validate_and_build().unwrap_err().to_string();
        assert!(err.contains("dirty_rate") && err.contains('2'), "unexpected error: {err}");
    }
}
