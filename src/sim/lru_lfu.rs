//! Combined frequency/recency replacement.
//!
//! The victim is the resident page with the lowest use count; among equally
//! cold pages the least recently used one goes. Use counts include the
//! loading reference, and recency is the position in the reference string,
//! so the (frequency, last use) pair orders victims totally.

use crate::sim::Measurement;
use crate::trace::Reference;
use std::collections::HashMap;

struct PageState {
    freq: u64,
    last_use: u64,
    dirty: bool,
}

pub fn simulate(trace: &[Reference], frames: usize) -> Measurement {
    let mut m = Measurement::default();
    let mut resident: HashMap<u32, PageState> = HashMap::with_capacity(frames);

    for (now, r) in trace.iter().enumerate() {
        let now = now as u64;
        if let Some(s) = resident.get_mut(&r.page) {
            s.freq += 1;
            s.last_use = now;
            if r.dirty {
                s.dirty = true;
            }
            continue;
        }

        m.page_faults += 1;
        if resident.len() >= frames {
            let victim = resident
                .iter()
                .min_by_key(|(_, s)| (s.freq, s.last_use))
                .map(|(&page, _)| page);
            if let Some(victim) = victim {
                if resident.remove(&victim).map(|s| s.dirty).unwrap_or(false) {
                    m.interrupts += 1;
                    m.disk_writes += 1;
                }
            }
        }
        resident.insert(r.page, PageState { freq: 1, last_use: now, dirty: r.dirty });
    }

    m
}
