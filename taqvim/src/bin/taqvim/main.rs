mod cli;
mod config;
mod convert_cmd;
mod logging;
mod months_cmd;
mod year_cmd;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use taqvim::core::Year;
use taqvim::time::{holidays, CalendarDate, CalendarKind};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    config::install(cli.config.as_deref())?;
    let table = holidays::current();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match cli.command {
        Command::Year(args) => {
            let year = resolve_year(args.year)?;
            year_cmd::run(&args, year, table, &mut out)?;
        }
        Command::Convert(args) => convert_cmd::run(&args, table, &mut out)?,
        Command::Months(args) => {
            let year = resolve_year(args.year)?;
            months_cmd::run(year, table, &mut out)?;
        }
    }
    out.flush().context("failed to write output")
}

/// Use the given Persian year, or the one containing today's local date.
fn resolve_year(year: Option<Year>) -> Result<Year> {
    if let Some(year) = year {
        return Ok(year);
    }
    let today = CalendarDate::from(chrono::Local::now().date_naive());
    let persian = today
        .convert(CalendarKind::Persian)
        .context("today's date has no Persian equivalent")?;
    debug!(%today, %persian, "defaulting to the current Persian year");
    Ok(persian.year())
}
