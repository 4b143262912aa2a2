use crate::sim::Measurement;
use crate::trace::Reference;
use std::collections::{HashMap, VecDeque};

/// First-in first-out: the victim is always the page resident the longest,
/// regardless of how recently or how often it was used.
pub fn simulate(trace: &[Reference], frames: usize) -> Measurement {
    let mut m = Measurement::default();
    let mut queue: VecDeque<u32> = VecDeque::with_capacity(frames);
    let mut dirty: HashMap<u32, bool> = HashMap::with_capacity(frames);

    for r in trace {
        if let Some(d) = dirty.get_mut(&r.page) {
            if r.dirty {
                *d = true;
            }
            continue;
        }

        m.page_faults += 1;
        if queue.len() >= frames {
            if let Some(victim) = queue.pop_front() {
                if dirty.remove(&victim).unwrap_or(false) {
                    m.interrupts += 1;
                    m.disk_writes += 1;
                }
            }
        }
        queue.push_back(r.page);
        dirty.insert(r.page, r.dirty);
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testutil::{reads, trace};

    #[test]
    fn evicts_in_arrival_order() {
        // 1,2,3 fill the frames; 1 hits; 4 evicts the oldest (1).
        let m = simulate(&reads(&[1, 2, 3, 1, 4]), 3);
        assert_eq!(m.page_faults, 4);
        assert_eq!(m.interrupts, 0);
        assert_eq!(m.disk_writes, 0);

        // 1 was evicted, so touching it again faults.
        let m = simulate(&reads(&[1, 2, 3, 1, 4, 1]), 3);
        assert_eq!(m.page_faults, 5);
    }

    #[test]
    fn dirty_victim_costs_an_interrupt_and_a_disk_write() {
        let m = simulate(&trace(&[(1, true), (2, false), (3, false), (4, false)]), 3);
        assert_eq!(m.page_faults, 4);
        assert_eq!(m.interrupts, 1);
        assert_eq!(m.disk_writes, 1);
    }

    #[test]
    fn a_write_hit_dirties_the_resident_page() {
        // Page 1 loads clean, is dirtied by a hit, and later writes back.
        let m = simulate(
            &trace(&[(1, false), (1, true), (2, false), (3, false), (4, false)]),
            3,
        );
        assert_eq!(m.page_faults, 4);
        assert_eq!(m.disk_writes, 1);
    }

    #[test]
    fn enough_frames_means_no_evictions() {
        let m = simulate(&reads(&[1, 2, 3, 1, 2, 3]), 5);
        assert_eq!(m.page_faults, 3);
        assert_eq!(m.disk_writes, 0);
    }
}
