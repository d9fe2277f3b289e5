//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Closest string finder for strings over {0, 1, *}
#[derive(Parser, Debug)]
#[command(
    name = "csf",
    about = "Find a binary string closest to a set of {0,1,*} strings",
    version
)]
pub struct Args {
    /// Run mode
    #[command(subcommand)]
    pub mode: Mode,

    /// Longest string length brute force is attempted for
    #[arg(long, global = true, default_value_t = 24)]
    pub max_brute_force_length: usize,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Read data from stdin (or a file) and print results to stdout
    Read {
        /// Run the heuristic in interactive mode
        #[arg(short, long)]
        interactive: bool,

        /// Read from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Generate random data and print results to stdout
    Random {
        /// Run the heuristic in interactive mode
        #[arg(short, long)]
        interactive: bool,

        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Generate random data, measure execution time and print results to stdout
    Measure {
        #[command(flatten)]
        generator: GeneratorArgs,

        #[command(flatten)]
        sweep: SweepArgs,
    },
}

/// Generator options
#[derive(clap::Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Length of generated strings
    #[arg(short = 'n', long = "length")]
    pub string_length: usize,

    /// Number of generated strings
    #[arg(short = 'm', long = "count")]
    pub num_strings: usize,

    /// Seed for reproducible data (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability of a wildcard at each position
    #[arg(long, default_value_t = closest_string::generator::DEFAULT_WILDCARD_PROBABILITY)]
    pub wildcard_probability: f64,
}

/// Test parameters
#[derive(clap::Args, Debug, Clone)]
pub struct SweepArgs {
    /// Number of different generator settings
    #[arg(short = 'k', long = "settings", default_value_t = 1)]
    pub settings: usize,

    /// Increment of the length of generated strings
    #[arg(long, default_value_t = 0)]
    pub step_n: usize,

    /// Increment of the number of generated strings
    #[arg(long, default_value_t = 0)]
    pub step_m: usize,

    /// Number of algorithm runs per generator setting
    #[arg(short = 'r', long = "runs", default_value_t = 1)]
    pub runs: usize,

    /// Number of generator settings measured in parallel
    #[arg(long)]
    pub threads: Option<usize>,
}
