/*!
 * Adaptive-Gang Policy
 * Round-robin with a deterministic per-dispatch quantum adaptation rule
 */

use super::round_robin::{admit, arrival_order};
use super::trace::Trace;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use log::debug;
use std::collections::VecDeque;

/// Ready-queue depth at which the quantum shrinks instead of growing
const CONTENTION_THRESHOLD: usize = 3;

/// Compute the quantum for one dispatch from observable state only.
///
/// A record that fits its current quantum keeps it; one that would finish
/// within two slices gets its quantum stretched to its remaining time, so
/// it completes without a further context switch. Otherwise the quantum
/// shrinks by 1 (floor 1) under contention and grows by 1 when the queue
/// is short.
fn adapted_quantum(current: Time, remaining: Time, ready: usize) -> Time {
    if remaining <= current {
        current
    } else if remaining <= current.saturating_mul(2) {
        remaining
    } else if ready >= CONTENTION_THRESHOLD {
        (current - 1).max(1)
    } else {
        current + 1
    }
}

/// Run the adaptive-gang simulation.
///
/// Identical to round-robin except that each dispatch first re-evaluates
/// the record's quantum; every change persists on the record and is
/// appended to its history row.
pub(super) fn run(records: &mut [ProcessRecord], context_switch: Time) -> Trace {
    let mut trace = Trace::seeded(records, |r| r.quantum as i32);
    let order = arrival_order(records);
    let mut next_admit = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut now: Time = 0;
    let mut completed = 0;
    let mut last: Option<usize> = None;

    while completed < records.len() {
        admit(&mut queue, &order, records, &mut next_admit, now);

        let Some(idx) = queue.pop_front() else {
            // Idle tick, not recorded in the trace
            now += 1;
            continue;
        };

        if last.is_some() && last != Some(idx) {
            debug!("context switch to {} at t={}", records[idx].name, now);
            now += context_switch;
        }

        let quantum = adapted_quantum(
            records[idx].quantum,
            records[idx].remaining_time,
            queue.len(),
        );
        if quantum != records[idx].quantum {
            debug!(
                "{} quantum adapted {} -> {} at t={}",
                records[idx].name, records[idx].quantum, quantum, now
            );
            records[idx].quantum = quantum;
            trace.mutate(idx, quantum as i32);
        }

        let slice = quantum.min(records[idx].remaining_time);
        let mut finished = false;
        for _ in 0..slice {
            now += 1;
            trace.grant(idx);
            if records[idx].tick(now) {
                debug!("{} completed at t={}", records[idx].name, now);
                completed += 1;
                finished = true;
                break;
            }
            admit(&mut queue, &order, records, &mut next_admit, now);
        }

        if !finished {
            queue.push_back(idx);
        }
        last = Some(idx);
    }

    trace
}
