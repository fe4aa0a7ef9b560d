//! Text renderer for engine output: title banner, Gantt strip, and the
//! schedule table with its aggregate footer. Purely presentational — every
//! number is computed before it arrives here.

use std::io::{self, Write};

use crate::process::TimeSlice;
use crate::scheduler::Schedule;

const HEADER: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

// Width of one pid box in the Gantt strip
const GANTT_CELL: usize = 8;

/// Writes one complete discipline block: banner, Gantt strip, table.
pub fn render<W: Write>(w: &mut W, title: &str, schedule: &Schedule) -> io::Result<()> {
    write_title(w, title)?;
    write_gantt(w, &schedule.gantt)?;
    write_table(w, schedule)
}

fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {}", " ".repeat(title.len() / 2), title)?;
    writeln!(w, "{rule}")
}

fn write_gantt<W: Write>(w: &mut W, gantt: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for slice in gantt {
        let pid = slice.pid.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for (i, slice) in gantt.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i == gantt.len() - 1 {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

fn write_table<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let rows: Vec<[String; 7]> = schedule
        .rows
        .iter()
        .map(|r| {
            [
                r.pid.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival_time.to_string(),
                r.waiting.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();

    let stats = &schedule.stats;
    let footer_labels = ["", "", "", "", "Average", "Average", "Throughput"];
    let footer_values = [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", stats.avg_wait),
        format!("{:.2}", stats.avg_turnaround),
        format!("{:.2}/t", stats.throughput),
    ];

    let mut widths: [usize; 7] = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }
    for (width, cell) in widths.iter_mut().zip(footer_labels.iter()) {
        *width = (*width).max(cell.len());
    }
    for (width, cell) in widths.iter_mut().zip(footer_values.iter()) {
        *width = (*width).max(cell.len());
    }

    let rule: String = widths
        .iter()
        .map(|width| format!("+{}", "-".repeat(width + 2)))
        .collect::<String>()
        + "+";

    writeln!(w, "{rule}")?;
    write_row(w, &widths, &HEADER.map(String::from))?;
    writeln!(w, "{rule}")?;
    for row in &rows {
        write_row(w, &widths, row)?;
    }
    writeln!(w, "{rule}")?;
    write_row(w, &widths, &footer_labels.map(String::from))?;
    write_row(w, &widths, &footer_values)?;
    writeln!(w, "{rule}")
}

fn write_row<W: Write>(w: &mut W, widths: &[usize; 7], cells: &[String; 7]) -> io::Result<()> {
    for (&width, cell) in widths.iter().zip(cells.iter()) {
        write!(w, "| {cell:>width$} ")?;
    }
    writeln!(w, "|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;
    use crate::scheduler::Discipline;

    fn rendered(title: &str, schedule: &Schedule) -> String {
        let mut out = Vec::new();
        render(&mut out, title, schedule).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_schedule() -> Schedule {
        let processes = vec![
            Process {
                id: 1,
                arrival_time: 0,
                burst: 5,
                priority: 0,
            },
            Process {
                id: 2,
                arrival_time: 1,
                burst: 3,
                priority: 0,
            },
        ];
        Discipline::Fcfs.run(&processes)
    }

    #[test]
    fn banner_frames_the_title() {
        let text = rendered("Priority", &sample_schedule());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "-".repeat(16));
        assert!(lines[1].ends_with("Priority"));
        assert_eq!(lines[2], "-".repeat(16));
    }

    #[test]
    fn gantt_strip_boxes_pids_and_marks_boundaries() {
        let text = rendered("First-come, first-serve", &sample_schedule());
        assert!(text.contains("Gantt schedule"));
        assert!(text.contains("|   1   |   2   |"));
        // Start markers for both slices plus the final stop marker
        assert!(text.contains("0\t5\t8"));
    }

    #[test]
    fn footer_formats_aggregates_to_two_decimals() {
        let text = rendered("First-come, first-serve", &sample_schedule());
        // waits [0, 4] -> average 2.00; completions [5, 8] -> 2/8 throughput
        assert!(text.contains("2.00"));
        assert!(text.contains("6.00"));
        assert!(text.contains("0.25/t"));
        assert!(text.contains("Average"));
        assert!(text.contains("Throughput"));
    }

    #[test]
    fn table_rows_follow_dispatch_order() {
        let text = rendered("First-come, first-serve", &sample_schedule());
        let id_line = text
            .lines()
            .find(|l| l.contains("| ID |"))
            .expect("header row");
        assert!(id_line.contains("Turnaround"));
        let first = text.lines().position(|l| l.starts_with("|  1 |"));
        let second = text.lines().position(|l| l.starts_with("|  2 |"));
        assert!(first.unwrap() < second.unwrap());
    }

    #[test]
    fn empty_schedule_still_renders_structure() {
        let schedule = Discipline::Sjf.run(&[]);
        let text = rendered("Shortest-job-first", &schedule);
        assert!(text.contains("Gantt schedule"));
        assert!(text.contains("Schedule table"));
    }
}
