//! Preemptive round-robin engine.
//!
//! Processes are served in arrival order, at most [`QUANTUM`] ticks per
//! dispatch, looping until every process has exhausted its burst. This is the
//! only engine that emits multiple rows and Gantt slices per process.
//!
//! Waiting time flows through one shared accumulator rather than per-process
//! clocks: every dispatch after the first adds its slice to the accumulator,
//! so later processes in a pass absorb the waiting contributed by earlier
//! ones. That is the accounting model this engine reproduces, so the
//! accumulator is an explicit local threaded through the loop. True
//! per-process waiting totals are tracked separately and drive the wait
//! average.

use super::{Accounting, Schedule};
use crate::process::{Process, ScheduleRow, Ticks, TimeSlice};

/// Maximum CPU time granted per dispatch before preemption. A design
/// constant, not user input.
pub const QUANTUM: Ticks = 5;

pub(crate) fn run(processes: Vec<Process>) -> Schedule {
    let mut time_left: Vec<Ticks> = processes.iter().map(|p| p.burst).collect();
    let mut wait_times: Vec<Ticks> = vec![0; processes.len()];

    // Shared waiting accumulator and completed-dispatch counter
    let mut waiting: Ticks = 0;
    let mut dispatches: u64 = 0;

    // A burst that is already <= 0 can never be dispatched; count it
    // completed up front or the outer loop would never terminate.
    let mut completed = time_left.iter().filter(|&&t| t <= 0).count();

    let mut acct = Accounting::default();

    while completed < processes.len() {
        for (i, p) in processes.iter().enumerate() {
            if time_left[i] <= 0 {
                continue;
            }

            let slice = QUANTUM.min(time_left[i]);

            // Everything after the very first dispatch waits for the slice
            if dispatches > 0 {
                waiting += slice;
                wait_times[i] += slice;
            }
            dispatches += 1;

            let start = waiting;
            let turnaround = slice + waiting;
            let completion = slice + waiting;

            log::debug!(
                "dispatch pid={} slice={} start={} remaining={}",
                p.id,
                slice,
                start,
                time_left[i] - slice
            );

            acct.record(
                ScheduleRow {
                    pid: p.id,
                    priority: p.priority,
                    burst: p.burst,
                    arrival_time: p.arrival_time,
                    waiting,
                    turnaround,
                    completion,
                },
                TimeSlice {
                    pid: p.id,
                    start,
                    stop: start + slice,
                },
            );

            time_left[i] -= slice;
            if time_left[i] <= 0 {
                completed += 1;
            }
        }
    }

    acct.finish_round_robin(&wait_times)
}
