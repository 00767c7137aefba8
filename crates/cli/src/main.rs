//! Command-line front end for external inputs.
//!
//! Loads an input table the same way a simulation would, then evaluates it on
//! a time grid and streams the resolved input vectors to stdout as CSV.
//! A table that cannot be loaded ends the process with a nonzero status.

mod args;
mod grid;

use std::{io, iter, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use extin_core::ExternalInput;
use extin_csv::CsvLoader;
use tracing::{debug, error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crate::{args::Args, grid::TimeGrid};

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.config()?;
    let grid = TimeGrid::new(args.start, args.stop, args.step)?;
    let loader = CsvLoader::new().delimiter(args.delimiter()?);

    let mut input = ExternalInput::load(&config, &loader, &args.inputs)
        .context("failed to load external inputs")?;
    if !input.is_active() {
        warn!("no external input table loaded, inputs keep their initial values");
    }

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    writer.write_record(iter::once("time").chain(args.inputs.iter().map(String::as_str)))?;

    debug!(
        points = grid.len(),
        inputs = args.inputs.len(),
        boundary = ?input.boundary(),
        "resampling external inputs"
    );
    let mut values = vec![0.0; args.inputs.len()];
    let mut resolved = 0_usize;
    for time in grid.iter() {
        let status = input
            .evaluate(time, &mut values)
            .with_context(|| format!("failed to evaluate inputs at t = {time}"))?;
        if status.wrote_inputs() {
            resolved += 1;
        }
        writer.write_record(
            iter::once(time)
                .chain(values.iter().copied())
                .map(|value| value.to_string()),
        )?;
    }
    writer.flush()?;
    debug!(resolved, points = grid.len(), "resampled external inputs");

    input.release();
    Ok(())
}
