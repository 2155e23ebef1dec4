/*!
 * Metrics Calculator
 * Derives waiting/turnaround times and averages from finished records
 */

use crate::core::errors::MetricsError;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use crate::sched::Trace;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Immutable aggregate handed to the presentation layer.
///
/// `execution_order` holds one name per granted unit of CPU time (idle
/// ticks are not recorded). `quantum_history` holds quantum values for
/// quantum-based policies and priority values for the aging policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    pub execution_order: Vec<String>,
    pub waiting_times: AHashMap<String, Time>,
    pub turnaround_times: AHashMap<String, Time>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub quantum_history: AHashMap<String, Vec<i32>>,
}

/// Derive a [`SimulationResult`] from fully resolved records and a trace.
///
/// Pure function: `turnaround = completion - arrival`, `waiting =
/// turnaround - burst`, averages as arithmetic means. Fails on an empty
/// record list or any record without a completion time.
pub fn calculate(
    records: &[ProcessRecord],
    trace: &Trace,
) -> Result<SimulationResult, MetricsError> {
    if records.is_empty() {
        return Err(MetricsError::EmptyProcessList);
    }

    let mut waiting_times = AHashMap::with_capacity(records.len());
    let mut turnaround_times = AHashMap::with_capacity(records.len());
    let mut total_waiting = 0.0;
    let mut total_turnaround = 0.0;

    for record in records {
        let completion = record
            .completion_time
            .ok_or_else(|| MetricsError::IncompleteSimulation(record.name.clone()))?;
        let turnaround = completion - record.arrival_time;
        let waiting = turnaround - record.burst_time;
        total_turnaround += f64::from(turnaround);
        total_waiting += f64::from(waiting);
        turnaround_times.insert(record.name.clone(), turnaround);
        waiting_times.insert(record.name.clone(), waiting);
    }

    let count = records.len() as f64;
    let execution_order = trace
        .order
        .iter()
        .map(|&i| records[i].name.clone())
        .collect();
    let quantum_history = records
        .iter()
        .zip(&trace.history)
        .map(|(r, h)| (r.name.clone(), h.clone()))
        .collect();

    Ok(SimulationResult {
        execution_order,
        waiting_times,
        turnaround_times,
        average_waiting_time: total_waiting / count,
        average_turnaround_time: total_turnaround / count,
        quantum_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    fn finished(name: &str, arrival: Time, burst: Time, completion: Time) -> ProcessRecord {
        let mut record = ProcessRecord::from_spec(ProcessSpec::new(name, arrival, burst));
        record.remaining_time = 0;
        record.completion_time = Some(completion);
        record
    }

    #[test]
    fn test_empty_records_rejected() {
        assert_eq!(
            calculate(&[], &Trace::default()),
            Err(MetricsError::EmptyProcessList)
        );
    }

    #[test]
    fn test_unfinished_record_rejected() {
        let records = vec![
            finished("P1", 0, 3, 3),
            ProcessRecord::from_spec(ProcessSpec::new("P2", 0, 4)),
        ];
        let mut trace = Trace::default();
        trace.history = vec![vec![1], vec![1]];
        assert_eq!(
            calculate(&records, &trace),
            Err(MetricsError::IncompleteSimulation("P2".into()))
        );
    }

    #[test]
    fn test_formulas_and_averages() {
        let records = vec![finished("P1", 0, 3, 3), finished("P2", 1, 2, 6)];
        let mut trace = Trace::default();
        trace.order = vec![0, 0, 0, 1, 1];
        trace.history = vec![vec![1], vec![1]];

        let result = calculate(&records, &trace).unwrap();
        assert_eq!(result.turnaround_times["P1"], 3);
        assert_eq!(result.waiting_times["P1"], 0);
        assert_eq!(result.turnaround_times["P2"], 5);
        assert_eq!(result.waiting_times["P2"], 3);
        assert_eq!(result.average_turnaround_time, 4.0);
        assert_eq!(result.average_waiting_time, 1.5);
        assert_eq!(result.execution_order, vec!["P1", "P1", "P1", "P2", "P2"]);
    }
}
