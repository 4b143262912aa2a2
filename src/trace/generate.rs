//! Synthetic reference-string generation.
//!
//! Three flavors drive the comparison: short ascending runs from uniform
//! head pages ("Random data"), bursts confined to a narrow page window
//! ("Locality data"), and exponentially distributed page numbers
//! ("Exponential random data"). All three emit exactly `references`
//! entries and are reproducible for a fixed RNG seed.

use crate::experiment::Dataset;
use crate::trace::row::Reference;
use rand::Rng;

/// Tunables shared by the three generators.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Total entries per trace.
    pub references: usize,
    /// Distinct pages, numbered 1..=pages.
    pub pages: u32,
    /// Probability that an entry is a write.
    pub dirty_rate: f64,
    /// Longest ascending run emitted by the random flavor.
    pub run_length: u32,
    /// Widest page window used by the locality flavor.
    pub locality_span: u32,
    /// Burst length bounds for the locality flavor, as fractions of
    /// `references`.
    pub burst_lo: f64,
    pub burst_hi: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            references: 200_000,
            pages: 1000,
            dirty_rate: 0.5,
            run_length: 20,
            locality_span: 100,
            burst_lo: 1.0 / 30.0,
            burst_hi: 1.0 / 20.0,
        }
    }
}

/// Generate the trace for one dataset flavor.
pub fn generate(dataset: Dataset, cfg: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Reference> {
    match dataset {
        Dataset::Random => random(cfg, rng),
        Dataset::Locality => locality(cfg, rng),
        Dataset::Exponential => exponential(cfg, rng),
    }
}

/// Uniform head pages, each followed by a short ascending run. A run is
/// clipped to the remaining total and to `pages - head`, so a head drawn
/// at the last page emits nothing and the last page itself never appears.
fn random(cfg: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Reference> {
    let mut out = Vec::with_capacity(cfg.references);
    while out.len() < cfg.references {
        let head = rng.gen_range(1..=cfg.pages);
        let remaining = (cfg.references - out.len()) as u32;
        let run = rng
            .gen_range(1..=cfg.run_length)
            .min(cfg.pages - head)
            .min(remaining);
        for offset in 0..run {
            out.push(Reference {
                page: head + offset,
                dirty: rng.gen_bool(cfg.dirty_rate),
            });
        }
    }
    out
}

/// Bursts of uniform draws confined to a window of at most `locality_span`
/// pages; each burst covers between `burst_lo` and `burst_hi` of the whole
/// trace, mimicking a workload that stays inside one routine for a while.
fn locality(cfg: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Reference> {
    let lo = ((cfg.references as f64 * cfg.burst_lo) as usize).max(1);
    let hi = ((cfg.references as f64 * cfg.burst_hi) as usize).max(lo);

    let mut out = Vec::with_capacity(cfg.references);
    while out.len() < cfg.references {
        let head = rng.gen_range(1..=cfg.pages);
        let span = rng.gen_range(1..=cfg.locality_span);
        let end = head.saturating_add(span).min(cfg.pages);
        let burst = rng.gen_range(lo..=hi).min(cfg.references - out.len());
        for _ in 0..burst {
            out.push(Reference {
                page: rng.gen_range(head..=end),
                dirty: rng.gen_bool(cfg.dirty_rate),
            });
        }
    }
    out
}

/// Exponentially distributed page numbers with rate 1/pages, sampled by
/// inverse transform; draws truncating outside 1..=pages are rejected.
fn exponential(cfg: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Reference> {
    let lambda = 1.0 / f64::from(cfg.pages);

    let mut out = Vec::with_capacity(cfg.references);
    while out.len() < cfg.references {
        let u: f64 = rng.gen_range(0.0..1.0);
        let page = (-(1.0 - u).ln() / lambda) as u32;
        if (1..=cfg.pages).contains(&page) {
            out.push(Reference {
                page,
                dirty: rng.gen_bool(cfg.dirty_rate),
            });
        }
    }
    out
}
