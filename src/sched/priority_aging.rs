/*!
 * Priority-with-Aging Policy
 * Non-preemptive priority dispatch with starvation-avoiding aging
 */

use super::trace::Trace;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use log::debug;

/// Run the priority-with-aging simulation.
///
/// The numerically lowest priority wins (ties by earliest arrival, then
/// input order) and runs its full remaining burst. For every
/// `aging_interval` units a record spends arrived but un-dispatched, its
/// priority drops by 1 and the new value is appended to its history row.
/// Aging is caught up at every selection point, which is equivalent to
/// per-tick aging since priorities only matter at selection.
pub(super) fn run(
    records: &mut [ProcessRecord],
    context_switch: Time,
    aging_interval: Time,
) -> Trace {
    debug_assert!(aging_interval > 0, "validated at construction");

    let mut trace = Trace::seeded(records, |r| r.priority);
    let mut age_anchor: Vec<Time> = records.iter().map(|r| r.arrival_time).collect();
    let mut now: Time = 0;
    let mut completed = 0;
    let mut last: Option<usize> = None;

    while completed < records.len() {
        for (i, r) in records.iter_mut().enumerate() {
            if r.is_complete() || !r.has_arrived(now) {
                continue;
            }
            while now - age_anchor[i] >= aging_interval {
                age_anchor[i] += aging_interval;
                r.priority -= 1;
                trace.mutate(i, r.priority);
                debug!("{} aged to priority {} at t={}", r.name, r.priority, now);
            }
        }

        let mut next: Option<usize> = None;
        for (i, r) in records.iter().enumerate() {
            if !r.has_arrived(now) || r.is_complete() {
                continue;
            }
            let better = match next {
                None => true,
                Some(j) => {
                    (r.priority, r.arrival_time) < (records[j].priority, records[j].arrival_time)
                }
            };
            if better {
                next = Some(i);
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

        // Run to completion (the documented non-preemptive variant)
        let burst_left = records[idx].remaining_time;
        for _ in 0..burst_left {
            now += 1;
            trace.grant(idx);
            if records[idx].tick(now) {
                debug!("{} completed at t={}", records[idx].name, now);
                completed += 1;
            }
        }
        last = Some(idx);
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    fn records(specs: Vec<ProcessSpec>) -> Vec<ProcessRecord> {
        specs.into_iter().map(ProcessRecord::from_spec).collect()
    }

    fn names(records: &[ProcessRecord], trace: &Trace) -> Vec<String> {
        trace
            .order
            .iter()
            .map(|&i| records[i].name.clone())
            .collect()
    }

    #[test]
    fn test_lowest_priority_value_runs_first() {
        let mut records = records(vec![
            ProcessSpec::new("P1", 0, 2).with_priority(3),
            ProcessSpec::new("P2", 0, 2).with_priority(1),
            ProcessSpec::new("P3", 0, 2).with_priority(2),
        ]);
        let trace = run(&mut records, 0, 100);

        assert_eq!(
            names(&records, &trace),
            vec!["P2", "P2", "P3", "P3", "P1", "P1"]
        );
    }

    #[test]
    fn test_priority_tie_breaks_by_arrival_then_input() {
        let mut records = records(vec![
            ProcessSpec::new("P1", 1, 2).with_priority(1),
            ProcessSpec::new("P2", 0, 2).with_priority(1),
            ProcessSpec::new("P3", 0, 2).with_priority(1),
        ]);
        let trace = run(&mut records, 0, 100);

        // P2 and P3 tie on priority and arrival; input order decides
        assert_eq!(
            names(&records, &trace),
            vec!["P2", "P2", "P3", "P3", "P1", "P1"]
        );
    }

    #[test]
    fn test_waiter_ages_while_burst_runs() {
        let mut records = records(vec![
            ProcessSpec::new("P1", 0, 10).with_priority(1),
            ProcessSpec::new("P2", 0, 2).with_priority(5),
        ]);
        let trace = run(&mut records, 0, 3);

        // P2 waits 10 units: aged at t=3, 6, 9 down to priority 2
        assert_eq!(records[1].priority, 2);
        assert_eq!(trace.history[1], vec![5, 4, 3, 2]);
        assert_eq!(records[0].completion_time, Some(10));
        assert_eq!(records[1].completion_time, Some(12));
    }

    #[test]
    fn test_aging_prevents_starvation() {
        // P2's aged priority overtakes a later arrival with a fixed one
        let mut records = records(vec![
            ProcessSpec::new("P1", 0, 6).with_priority(0),
            ProcessSpec::new("P2", 0, 3).with_priority(4),
            ProcessSpec::new("P3", 5, 3).with_priority(2),
        ]);
        let trace = run(&mut records, 0, 2);

        // By t=6, P2 has aged 4 -> 1 (t=2,4,6) and beats P3's 2
        assert_eq!(
            names(&records, &trace),
            vec!["P1", "P1", "P1", "P1", "P1", "P1", "P2", "P2", "P2", "P3", "P3", "P3"]
        );
        assert_eq!(trace.history[1], vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_run_to_completion_is_non_preemptive() {
        // A more urgent arrival does not displace the running record
        let mut records = records(vec![
            ProcessSpec::new("P1", 0, 5).with_priority(3),
            ProcessSpec::new("P2", 1, 2).with_priority(0),
        ]);
        let trace = run(&mut records, 0, 100);

        assert_eq!(
            names(&records, &trace),
            vec!["P1", "P1", "P1", "P1", "P1", "P2", "P2"]
        );
    }

    #[test]
    fn test_history_seeds_initial_priority() {
        let mut records = records(vec![ProcessSpec::new("P1", 0, 2).with_priority(7)]);
        let trace = run(&mut records, 0, 50);
        assert_eq!(trace.history, vec![vec![7]]);
    }
}
