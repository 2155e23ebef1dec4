/*!
 * Shortest-Remaining-Time Policy
 * Preemptive SJF in discrete 1-unit time steps
 */

use super::trace::Trace;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use log::debug;

/// Run the preemptive shortest-remaining-time simulation.
///
/// At every step the arrived, unfinished record with minimum remaining time
/// runs for one unit; ties go to the lowest input index. A newly-arrived
/// shorter record displaces the current one on the very next step.
pub(super) fn run(records: &mut [ProcessRecord], context_switch: Time) -> Trace {
    let mut trace = Trace::seeded(records, |r| r.quantum as i32);
    let mut now: Time = 0;
    let mut completed = 0;
    let mut last: Option<usize> = None;

    while completed < records.len() {
        // First-encountered wins ties, so only a strictly smaller remaining
        // time replaces the candidate.
        let mut next: Option<usize> = None;
        for (i, r) in records.iter().enumerate() {
            if !r.has_arrived(now) || r.is_complete() {
                continue;
            }
            match next {
                Some(j) if records[j].remaining_time <= r.remaining_time => {}
                _ => next = Some(i),
            }
        }

        let Some(idx) = next else {
            // Idle tick, not recorded in the trace
            now += 1;
            continue;
        };

        if last.is_some() && last != Some(idx) {
            debug!("context switch to {} at t={}", records[idx].name, now);
            now += context_switch;
        }

        now += 1;
        trace.grant(idx);
        if records[idx].tick(now) {
            debug!("{} completed at t={}", records[idx].name, now);
            completed += 1;
        }
        last = Some(idx);
    }

    trace
}
