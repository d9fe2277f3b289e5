//! csf - Command-line interface for the closest string solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod output;
mod trace;

use clap::Parser;
use cli::Args;
use closest_string::{
    ReadError, StringSet, brute_force, heuristic, heuristic_interactive, read_string_set,
};
use config::{Config, RunMode, SweepSettings};
use error::CliError;
use executor::SweepExecutor;
use output::OutputFormatter;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use trace::TracePrinter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let formatter = OutputFormatter::new(config.quiet);

    match &config.mode {
        RunMode::Read { interactive, input } => {
            let set = read_string_set(open_input(input.as_deref())?)?;
            solve_once(&config, &formatter, &set, *interactive);
            Ok(())
        }
        RunMode::Random {
            interactive,
            generator,
        } => {
            let set = generator
                .generator(0)
                .generate(generator.string_length, generator.num_strings)?;
            solve_once(&config, &formatter, &set, *interactive);
            Ok(())
        }
        RunMode::Measure(sweep) => run_sweep(*sweep, config.max_brute_force_length, &formatter),
    }
}

/// Open the input file, or stdin when no file is given
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(ReadError::from)?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(std::io::stdin()))),
    }
}

/// Solve one set with both solvers and print the report
fn solve_once(config: &Config, formatter: &OutputFormatter, set: &StringSet, interactive: bool) {
    formatter.print_input(set);

    let heuristic_solution = if interactive {
        formatter.print_trace_header();
        let stdin = std::io::stdin();
        let mut printer = TracePrinter::new(stdin.lock(), std::io::stdout());
        heuristic_interactive(set, &mut printer)
    } else {
        heuristic(set)
    };

    let brute_force_solution = if config.brute_force_allowed(set.string_length()) {
        Some(brute_force(set))
    } else {
        tracing::warn!(
            length = set.string_length(),
            limit = config.max_brute_force_length,
            "skipping brute force for long strings"
        );
        None
    };

    formatter.print_solutions(&heuristic_solution, brute_force_solution.as_ref());
}

/// Run the sweep and print its points in order
fn run_sweep(
    settings: SweepSettings,
    max_brute_force_length: usize,
    formatter: &OutputFormatter,
) -> Result<(), CliError> {
    let executor = SweepExecutor::new(settings, max_brute_force_length)?;

    let mut aggregator = aggregator::SweepAggregator::new(executor.points().len());

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    formatter.print_sweep_header();
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_sweep_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_sweep_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        tracing::warn!("not all sweep points were measured");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    Ok(())
}
