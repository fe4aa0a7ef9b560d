//! CSV process loader.
//!
//! One process per row, no header: `id,burst,arrival[,priority]`. All values
//! are base-10 integers. Priority defaults to 0 when the column is absent.
//! Record lengths are strict (the reader rejects a file mixing 3- and
//! 4-column rows), and any malformed field is an error — there is no partial
//! load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::process::Process;

pub fn load_processes_from_path(path: &Path) -> Result<Vec<Process>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_processes(file)
}

pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut processes = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() < 3 {
            return Err(Error::FieldCount {
                row,
                found: record.len(),
            });
        }

        let priority = if record.len() == 4 {
            parse_field(row, "priority", &record[3])?
        } else {
            0
        };

        processes.push(Process {
            id: parse_field(row, "process id", &record[0])?,
            burst: parse_field(row, "burst duration", &record[1])?,
            arrival_time: parse_field(row, "arrival time", &record[2])?,
            priority,
        });
    }

    log::debug!("loaded {} processes", processes.len());
    Ok(processes)
}

fn parse_field(row: usize, column: &'static str, value: &str) -> Result<i64, Error> {
    value.parse().map_err(|source| Error::ParseInt {
        row,
        column,
        value: value.to_string(),
        source,
    })
}
