//! Page-replacement simulation.
//!
//! Every policy replays a reference string against a fixed number of frames
//! and counts the same three outcomes. The accounting convention is shared:
//! evicting a dirty victim costs one interrupt and one disk write, and a
//! write hit marks the resident page dirty. ARB additionally raises a timer
//! interrupt at each aging tick.

pub mod arb;
pub mod esc;
pub mod fifo;
pub mod lru_lfu;

use crate::experiment::Algorithm;
use crate::trace::Reference;

/// Counters produced by one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measurement {
    pub page_faults: u64,
    pub interrupts: u64,
    pub disk_writes: u64,
}

/// Replay `trace` under the given policy with `frames` physical frames.
///
/// `frames` must be positive; `arb_interval` is the aging-tick period and
/// only ARB consults it.
pub fn run(
    algorithm: Algorithm,
    trace: &[Reference],
    frames: usize,
    arb_interval: usize,
) -> Measurement {
    debug_assert!(frames > 0);
    match algorithm {
        Algorithm::Fifo => fifo::simulate(trace, frames),
        Algorithm::Arb => arb::simulate(trace, frames, arb_interval),
        Algorithm::Esc => esc::simulate(trace, frames),
        Algorithm::LruLfu => lru_lfu::simulate(trace, frames),
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::Reference;

    /// Shorthand for building traces in policy tests: (page, dirty) pairs.
    pub fn trace(entries: &[(u32, bool)]) -> Vec<Reference> {
        entries
            .iter()
            .map(|&(page, dirty)| Reference { page, dirty })
            .collect()
    }

    /// All-clean trace from bare page numbers.
    pub fn reads(pages: &[u32]) -> Vec<Reference> {
        pages.iter().map(|&page| Reference { page, dirty: false }).collect()
    }
}
