use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::debug;

use schedsim::scheduler::Discipline;
use schedsim::{input, report};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let matches = Command::new("schedsim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates classic CPU-scheduling disciplines over a CSV process list")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .help("Scheduling file: one process per row, 'id,burst,arrival[,priority]'"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("file")
        .expect("FILE is a required argument");

    let processes = input::load_processes_from_path(Path::new(path))
        .context("loading scheduling file")?;
    debug!("loaded {} processes from {path}", processes.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for discipline in Discipline::ALL {
        let schedule = discipline.run(&processes);
        report::render(&mut out, discipline.title(), &schedule)
            .context("writing schedule report")?;
    }
    out.flush()?;

    Ok(())
}
