//! Configuration resolution from CLI args

use crate::cli::{Args, GeneratorArgs, Mode, SweepArgs};
use crate::error::CliError;
use closest_string::RandomStringGenerator;
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// What to run
    pub mode: RunMode,
    /// Brute force is skipped for longer strings
    pub max_brute_force_length: usize,
    /// Quiet mode
    pub quiet: bool,
}

/// The three run modes of the program
#[derive(Debug, Clone)]
pub enum RunMode {
    /// Read one set and solve it
    Read {
        interactive: bool,
        input: Option<PathBuf>,
    },
    /// Generate one set and solve it
    Random {
        interactive: bool,
        generator: GeneratorSettings,
    },
    /// Time both solvers over a sweep of generator settings
    Measure(SweepSettings),
}

/// Validated generator options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub string_length: usize,
    pub num_strings: usize,
    pub seed: Option<u64>,
    pub wildcard_probability: f64,
}

impl GeneratorSettings {
    /// Build a generator; `stream` separates the data of different runs under one seed
    pub fn generator(&self, stream: u64) -> RandomStringGenerator {
        let generator = match self.seed {
            Some(seed) => RandomStringGenerator::with_seed(seed.wrapping_add(stream)),
            None => RandomStringGenerator::new(),
        };
        generator.with_wildcard_probability(self.wildcard_probability)
    }
}

/// Validated sweep options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSettings {
    /// Settings of the first point of the sweep
    pub base: GeneratorSettings,
    /// Number of points
    pub settings: usize,
    pub step_length: usize,
    pub step_count: usize,
    /// Runs per point
    pub runs: usize,
    /// Threads used to measure points in parallel
    pub thread_count: usize,
}

/// One point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub setting: usize,
    pub string_length: usize,
    pub num_strings: usize,
}

impl SweepSettings {
    /// All points, the `j`-th one stepped `j` times from the base
    pub fn points(&self) -> Vec<SweepPoint> {
        (0..self.settings)
            .map(|setting| SweepPoint {
                setting,
                string_length: self.base.string_length + setting * self.step_length,
                num_strings: self.base.num_strings + setting * self.step_count,
            })
            .collect()
    }

    /// Generator for one run of one point
    pub fn generator(&self, point: &SweepPoint, run: usize) -> RandomStringGenerator {
        let stream = ((point.setting as u64) << 32) | run as u64;
        self.base.generator(stream)
    }
}

impl Config {
    /// Build config from CLI args, validating every numeric option
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = match args.mode {
            Mode::Read { interactive, input } => RunMode::Read { interactive, input },
            Mode::Random {
                interactive,
                generator,
            } => RunMode::Random {
                interactive,
                generator: resolve_generator(generator)?,
            },
            Mode::Measure { generator, sweep } => {
                RunMode::Measure(resolve_sweep(resolve_generator(generator)?, sweep)?)
            }
        };

        Ok(Config {
            mode,
            max_brute_force_length: args.max_brute_force_length,
            quiet: args.quiet,
        })
    }

    /// Whether brute force is run for strings of this length
    pub fn brute_force_allowed(&self, string_length: usize) -> bool {
        string_length <= self.max_brute_force_length
    }
}

fn resolve_generator(args: GeneratorArgs) -> Result<GeneratorSettings, CliError> {
    if args.string_length == 0 {
        return Err(CliError::Config(
            "String length must be positive".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&args.wildcard_probability) {
        return Err(CliError::Config(format!(
            "Wildcard probability must be within [0, 1], got {}",
            args.wildcard_probability
        )));
    }

    Ok(GeneratorSettings {
        string_length: args.string_length,
        num_strings: args.num_strings,
        seed: args.seed,
        wildcard_probability: args.wildcard_probability,
    })
}

fn resolve_sweep(base: GeneratorSettings, args: SweepArgs) -> Result<SweepSettings, CliError> {
    if args.settings == 0 {
        return Err(CliError::Config(
            "Number of generator settings must be positive".to_string(),
        ));
    }
    if args.runs == 0 {
        return Err(CliError::Config(
            "Number of runs must be positive".to_string(),
        ));
    }

    let thread_count = match args.threads {
        Some(0) => {
            return Err(CliError::Config(
                "Thread count must be positive".to_string(),
            ));
        }
        Some(n) => n,
        None => 1,
    };

    Ok(SweepSettings {
        base,
        settings: args.settings,
        step_length: args.step_n,
        step_count: args.step_m,
        runs: args.runs,
        thread_count,
    })
}
