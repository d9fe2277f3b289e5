//! Error types for the CLI

use closest_string::{ReadError, StringSetError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be read
    #[error("File error: {0}")]
    Read(#[from] ReadError),

    /// Generated data did not form a valid set
    #[error("Invalid string set: {0}")]
    StringSet(#[from] StringSetError),

    /// Measurement sweep error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Errors raised while running the measurement sweep
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Generating the data of a run failed
    #[error("Generation failed for setting {setting}, run {run}: {source}")]
    Generate {
        setting: usize,
        run: usize,
        #[source]
        source: StringSetError,
    },

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Combine two errors into one, flattening nested `Multiple`s
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut v1), ExecutorError::Multiple(v2)) => {
                v1.extend(v2);
                v1
            }
            (first, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v);
                combined
            }
            (ExecutorError::Multiple(mut v), second) => {
                v.push(second);
                v
            }
            (first, second) => vec![first, second],
        };
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}
