//! Enhanced second chance.
//!
//! Resident pages carry (referenced, dirty) bits and a clock hand sweeps
//! the frames on eviction. The four (referenced, dirty) classes are
//! preferred in order: (0,0) clean and cold first, then (0,1) at the cost
//! of clearing reference bits along the way. At most four sweeps find a
//! victim, since the second pass leaves every reference bit clear.

use crate::sim::Measurement;
use crate::trace::Reference;
use std::collections::HashMap;

struct Frame {
    page: u32,
    referenced: bool,
    dirty: bool,
}

pub fn simulate(trace: &[Reference], frames: usize) -> Measurement {
    let mut m = Measurement::default();
    let mut slots: Vec<Frame> = Vec::with_capacity(frames);
    let mut resident: HashMap<u32, usize> = HashMap::with_capacity(frames);
    let mut hand = 0usize;

    for r in trace {
        match resident.get(&r.page).copied() {
            Some(slot) => {
                let f = &mut slots[slot];
                f.referenced = true;
                if r.dirty {
                    f.dirty = true;
                }
            }
            None => {
                m.page_faults += 1;
                if slots.len() >= frames {
                    let slot = loop {
                        if let Some(s) = find_clean_cold(&slots, hand) {
                            break s;
                        }
                        if let Some(s) = find_dirty_cold(&mut slots, hand) {
                            break s;
                        }
                    };

                    let victim = &slots[slot];
                    if victim.dirty {
                        m.interrupts += 1;
                        m.disk_writes += 1;
                    }
                    resident.remove(&victim.page);

                    slots[slot] = Frame { page: r.page, referenced: true, dirty: r.dirty };
                    resident.insert(r.page, slot);
                    hand = (slot + 1) % slots.len();
                } else {
                    resident.insert(r.page, slots.len());
                    slots.push(Frame { page: r.page, referenced: true, dirty: r.dirty });
                }
            }
        }
    }

    m
}

/// One sweep from the hand looking for class (referenced=0, dirty=0).
/// Leaves every bit untouched.
fn find_clean_cold(slots: &[Frame], hand: usize) -> Option<usize> {
    for step in 0..slots.len() {
        let slot = (hand + step) % slots.len();
        if !slots[slot].referenced && !slots[slot].dirty {
            return Some(slot);
        }
    }
    None
}

/// One sweep from the hand looking for class (referenced=0, dirty=1),
/// clearing the reference bit of every frame it passes over.
fn find_dirty_cold(slots: &mut [Frame], hand: usize) -> Option<usize> {
    for step in 0..slots.len() {
        let slot = (hand + step) % slots.len();
        if !slots[slot].referenced && slots[slot].dirty {
            return Some(slot);
        }
        slots[slot].referenced = false;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testutil::{reads, trace};

    #[test]
    fn prefers_the_clean_cold_victim() {
        // After 4 replaces 1, pages 2 (dirty) and 3 (clean) both sit with
        // cleared reference bits; 5 must take clean 3 and spare dirty 2.
        let m = simulate(
            &trace(&[(1, false), (2, true), (3, false), (4, false), (5, false), (2, false)]),
            3,
        );
        // The final touch of 2 hits, so exactly the five distinct loads fault.
        assert_eq!(m.page_faults, 5);
        assert_eq!(m.disk_writes, 0);
        assert_eq!(m.interrupts, 0);
    }

    #[test]
    fn falls_back_to_a_dirty_victim() {
        let m = simulate(&trace(&[(1, true), (2, true), (3, false)]), 2);
        assert_eq!(m.page_faults, 3);
        assert_eq!(m.interrupts, 1);
        assert_eq!(m.disk_writes, 1);
    }

    #[test]
    fn second_chance_spares_a_rereferenced_page() {
        // The eviction of 1 clears the surviving bits; the hit on 2 sets
        // its bit again, so the next scan passes over 2 and takes cold 3.
        // The final touch of 2 must therefore still hit.
        let m = simulate(&reads(&[1, 2, 3, 4, 2, 5, 2]), 3);
        assert_eq!(m.page_faults, 5);
        assert_eq!(m.disk_writes, 0);
    }

    #[test]
    fn no_evictions_without_pressure() {
        let m = simulate(&reads(&[1, 2, 1, 2]), 4);
        assert_eq!(m.page_faults, 2);
        assert_eq!(m.interrupts, 0);
    }
}
