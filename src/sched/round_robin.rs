/*!
 * Round-Robin Policy
 * FIFO dispatch with per-process time quanta and mid-slice admission
 */

use super::trace::Trace;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use log::debug;
use std::collections::VecDeque;

/// Admit every not-yet-queued record that has arrived by `now`.
///
/// `arrival_order` is the record indices sorted by arrival time (stable, so
/// equal arrivals keep input order); `next_admit` is the cursor into it.
pub(super) fn admit(
    queue: &mut VecDeque<usize>,
    arrival_order: &[usize],
    records: &[ProcessRecord],
    next_admit: &mut usize,
    now: Time,
) {
    while let Some(&idx) = arrival_order.get(*next_admit) {
        if !records[idx].has_arrived(now) {
            break;
        }
        queue.push_back(idx);
        *next_admit += 1;
    }
}

/// Indices sorted by arrival time, input order preserved on ties
pub(super) fn arrival_order(records: &[ProcessRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| records[i].arrival_time);
    order
}

/// Run the round-robin simulation.
///
/// Each dispatch grants `min(quantum, remaining_time)` units one at a time,
/// admitting new arrivals after every unit so that a record arriving
/// mid-slice is queued before the preempted record is re-queued.
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

        let slice = records[idx].quantum.min(records[idx].remaining_time);
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
