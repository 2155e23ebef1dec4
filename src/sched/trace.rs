/*!
 * Execution Trace
 * Accumulates the per-unit execution order and per-process mutation history
 */

use crate::process::ProcessRecord;

/// Raw output of one policy run, indexed by position in the record slice.
///
/// Names are attached later by the metrics calculator; the policies only
/// deal in indices to keep the hot loop free of string clones.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    /// One record index per granted unit of CPU time (idle ticks excluded)
    pub order: Vec<usize>,
    /// Per-record history of quantum (or priority) values, seeded with the
    /// initial value and appended to on every mutation
    pub history: Vec<Vec<i32>>,
}

impl Trace {
    /// Build a trace with one seeded history row per record
    pub(crate) fn seeded<F>(records: &[ProcessRecord], snapshot: F) -> Self
    where
        F: Fn(&ProcessRecord) -> i32,
    {
        Self {
            order: Vec::new(),
            history: records.iter().map(|r| vec![snapshot(r)]).collect(),
        }
    }

    /// Record one granted unit of CPU time for `idx`
    pub(crate) fn grant(&mut self, idx: usize) {
        self.order.push(idx);
    }

    /// Record a quantum/priority mutation for `idx`
    pub(crate) fn mutate(&mut self, idx: usize, value: i32) {
        self.history[idx].push(value);
    }
}
