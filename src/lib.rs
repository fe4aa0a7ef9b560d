pub mod error;
pub mod input;
pub mod order;
pub mod process;
pub mod report;
pub mod scheduler;

pub use error::Error;
pub use process::{Pid, Process, ScheduleRow, Ticks, TimeSlice};
pub use scheduler::{Discipline, Schedule, Stats};
