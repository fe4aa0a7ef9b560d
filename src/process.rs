pub type Pid = i64;
pub type Ticks = i64;

/// One process definition, loaded once per run and read-only thereafter.
///
/// `burst` is nominally positive and `arrival_time` nominally non-negative,
/// but neither is validated; degenerate values flow through the engines
/// unchanged (see the round-robin zero-burst guard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst: Ticks,
    // Lower value means more urgent; 0 when the input omits the column
    pub priority: i64,
}

/// A contiguous interval during which one process held the CPU.
///
/// Round-robin produces one slice per quantum burst; the non-preemptive
/// engines produce exactly one slice per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlice {
    pub pid: Pid,
    pub start: Ticks,
    pub stop: Ticks,
}

impl TimeSlice {
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

/// Per-dispatch accounting record, rendered as one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub pid: Pid,
    pub priority: i64,
    pub burst: Ticks,
    pub arrival_time: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
    pub completion: Ticks,
}
