use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error opening scheduling file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading CSV")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected 3 or 4 fields, found {found}")]
    FieldCount { row: usize, found: usize },
    #[error("row {row}, {column}: '{value}' is not a valid integer")]
    ParseInt {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
