//! Additional-reference-bits aging.
//!
//! Each resident page carries an 8-bit register seeded with `1000_0000` on
//! load. Every `interval` references a timer tick shifts all registers one
//! bit right and then sets the top bit of pages referenced since the last
//! tick, so the register value approximates recency of use. The victim is
//! the page with the smallest register.

use crate::sim::Measurement;
use crate::trace::Reference;
use std::collections::{HashMap, HashSet};

const TOP_BIT: u8 = 0x80;

struct PageState {
    age: u8,
    dirty: bool,
}

pub fn simulate(trace: &[Reference], frames: usize, interval: usize) -> Measurement {
    let mut m = Measurement::default();
    // Frame occupancy in load order; ages and dirty bits keyed by page.
    let mut memory: Vec<u32> = Vec::with_capacity(frames);
    let mut state: HashMap<u32, PageState> = HashMap::with_capacity(frames);
    // Pages referenced since the previous tick.
    let mut touched: HashSet<u32> = HashSet::new();
    let mut countdown = 0usize;

    for r in trace {
        let mut wrote_back = false;

        if state.contains_key(&r.page) {
            touched.insert(r.page);
            if r.dirty {
                if let Some(s) = state.get_mut(&r.page) {
                    s.dirty = true;
                }
            }
        } else {
            m.page_faults += 1;
            if memory.len() >= frames {
                let slot = min_age_slot(&memory, &state);
                let victim = memory[slot];
                memory[slot] = r.page;
                if state.remove(&victim).map(|s| s.dirty).unwrap_or(false) {
                    m.interrupts += 1;
                    m.disk_writes += 1;
                    wrote_back = true;
                }
            } else {
                memory.push(r.page);
            }
            state.insert(r.page, PageState { age: TOP_BIT, dirty: r.dirty });
        }

        countdown += 1;
        if countdown == interval {
            countdown = 0;
            for page in &memory {
                if let Some(s) = state.get_mut(page) {
                    s.age >>= 1;
                }
            }
            for page in touched.drain() {
                if let Some(s) = state.get_mut(&page) {
                    s.age |= TOP_BIT;
                }
            }
            // The tick is itself an interrupt, unless this reference already
            // paid one for a write-back.
            if !wrote_back {
                m.interrupts += 1;
            }
        }
    }

    m
}

/// First frame holding a minimal register value.
fn min_age_slot(memory: &[u32], state: &HashMap<u32, PageState>) -> usize {
    let mut best = 0usize;
    let mut best_age = u16::MAX;
    for (slot, page) in memory.iter().enumerate() {
        let age = state.get(page).map(|s| u16::from(s.age)).unwrap_or(0);
        if age < best_age {
            best_age = age;
            best = slot;
        }
    }
    best
}
