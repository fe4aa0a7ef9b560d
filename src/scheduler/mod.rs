//! The four scheduling disciplines and their shared accounting model.
//!
//! Every engine consumes an ordered copy of the process list and produces the
//! same output bundle: per-dispatch rows, a Gantt timeline, and three
//! aggregate statistics. The non-preemptive engines share one dispatch loop
//! parameterized by a wait policy; round-robin carries its own preemptive
//! loop. Both feed the [`Accounting`] collector defined here.

pub mod nonpreemptive;
pub mod round_robin;

use average::Estimate;

use crate::order;
use crate::process::{Process, ScheduleRow, Ticks, TimeSlice};

/// The closed set of scheduling disciplines, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Fcfs,
    Sjf,
    SjfPriority,
    RoundRobin,
}

impl Discipline {
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::SjfPriority,
        Discipline::RoundRobin,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First-come, first-serve",
            Discipline::Sjf => "Shortest-job-first",
            Discipline::SjfPriority => "Priority",
            Discipline::RoundRobin => "Round-robin",
        }
    }

    /// Runs the discipline over its own ordered copy of `processes`.
    ///
    /// The caller's list is never mutated, so the four disciplines can run
    /// back-to-back against one loaded list without seeing each other's sort.
    pub fn run(&self, processes: &[Process]) -> Schedule {
        let copy = processes.to_vec();
        match self {
            // FCFS trusts the input order to be the intended service order
            Discipline::Fcfs => nonpreemptive::run(copy, nonpreemptive::WaitPolicy::ArrivalAware),
            Discipline::Sjf => {
                nonpreemptive::run(order::by_burst(copy), nonpreemptive::WaitPolicy::RunQueue)
            }
            Discipline::SjfPriority => {
                nonpreemptive::run(order::by_priority(copy), nonpreemptive::WaitPolicy::RunQueue)
            }
            Discipline::RoundRobin => round_robin::run(order::by_arrival(copy)),
        }
    }
}

/// Aggregate statistics for one engine run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub avg_wait: f64,
    pub avg_turnaround: f64,
    /// Completed dispatch count divided by the last completion value.
    pub throughput: f64,
}

/// The full output of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub rows: Vec<ScheduleRow>,
    pub gantt: Vec<TimeSlice>,
    pub stats: Stats,
}

/// Shared collector: every engine appends one row and one Gantt slice per
/// dispatch event and tracks the completion value of the last event.
#[derive(Debug, Default)]
pub(crate) struct Accounting {
    rows: Vec<ScheduleRow>,
    gantt: Vec<TimeSlice>,
    last_completion: Ticks,
}

impl Accounting {
    pub(crate) fn record(&mut self, row: ScheduleRow, slice: TimeSlice) {
        self.last_completion = row.completion;
        self.rows.push(row);
        self.gantt.push(slice);
    }

    /// Finishes a non-preemptive run: one row per process, so every mean is
    /// taken over the rows themselves.
    pub(crate) fn finish(self) -> Schedule {
        let avg_wait = mean(self.rows.iter().map(|r| r.waiting as f64));
        self.into_schedule(avg_wait)
    }

    /// Finishes a round-robin run. Rows are dispatch events there, so the
    /// wait average comes from the caller's per-process totals instead; the
    /// turnaround average and throughput stay per-dispatch by design.
    pub(crate) fn finish_round_robin(self, wait_times: &[Ticks]) -> Schedule {
        let avg_wait = mean(wait_times.iter().map(|&w| w as f64));
        self.into_schedule(avg_wait)
    }

    fn into_schedule(self, avg_wait: f64) -> Schedule {
        let avg_turnaround = mean(self.rows.iter().map(|r| r.turnaround as f64));
        let throughput = self.rows.len() as f64 / self.last_completion as f64;
        Schedule {
            rows: self.rows,
            gantt: self.gantt,
            stats: Stats {
                avg_wait,
                avg_turnaround,
                throughput,
            },
        }
    }
}

fn mean(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
