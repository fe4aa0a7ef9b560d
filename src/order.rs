//! Ordering strategies applied before an engine runs.
//!
//! Each strategy takes ownership of its input and returns it reordered by a
//! single key. All sorts are stable: equal keys keep their insertion order,
//! which is what makes tie-breaking deterministic and testable.

use crate::process::Process;

/// Non-decreasing burst duration (shortest-job-first).
pub fn by_burst(mut processes: Vec<Process>) -> Vec<Process> {
    processes.sort_by_key(|p| p.burst);
    processes
}

/// Non-decreasing priority value, lower meaning more urgent.
pub fn by_priority(mut processes: Vec<Process>) -> Vec<Process> {
    processes.sort_by_key(|p| p.priority);
    processes
}

/// Non-decreasing arrival time (round-robin admission order).
pub fn by_arrival(mut processes: Vec<Process>) -> Vec<Process> {
    processes.sort_by_key(|p| p.arrival_time);
    processes
}
