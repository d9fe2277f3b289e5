//! Measurement sweep executor
//!
//! Every sweep point is measured on one thread, running its solver calls back to back so
//! that the timings of a point are not disturbed by each other. Different points may be
//! measured in parallel on a rayon pool; results are streamed over a channel as soon as
//! a point is done.

use crate::config::{SweepPoint, SweepSettings};
use crate::error::ExecutorError;
use chrono::TimeDelta;
use closest_string::{BruteForce, Heuristic, Solution, Solver, StringSet};
use rayon::prelude::*;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Measurements of one run of one sweep point
#[derive(Debug, Clone)]
pub struct RunMeasurement {
    pub heuristic: Solution,
    pub heuristic_duration: TimeDelta,
    /// `None` when the point is too long for brute force
    pub brute_force: Option<(Solution, TimeDelta)>,
}

impl RunMeasurement {
    /// How much worse the heuristic scored than the optimum
    pub fn gap(&self) -> Option<usize> {
        self.brute_force
            .as_ref()
            .map(|(optimum, _)| self.heuristic.score() - optimum.score())
    }
}

/// All runs of one sweep point
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub point: SweepPoint,
    pub runs: Vec<RunMeasurement>,
}

impl SweepResult {
    /// Mean heuristic time over all runs
    pub fn mean_heuristic_duration(&self) -> TimeDelta {
        mean(self.runs.iter().map(|r| r.heuristic_duration))
    }

    /// Mean brute-force time, `None` if brute force was skipped
    pub fn mean_brute_force_duration(&self) -> Option<TimeDelta> {
        let durations: Vec<TimeDelta> = self
            .runs
            .iter()
            .filter_map(|r| r.brute_force.as_ref().map(|(_, d)| *d))
            .collect();
        (!durations.is_empty()).then(|| mean(durations.into_iter()))
    }

    /// Number of runs where the heuristic found an optimal center
    pub fn optimal_runs(&self) -> Option<usize> {
        self.gaps().map(|gaps| gaps.iter().filter(|&&g| g == 0).count())
    }

    /// Mean distance between the heuristic score and the optimum
    pub fn mean_gap(&self) -> Option<f64> {
        self.gaps()
            .map(|gaps| gaps.iter().sum::<usize>() as f64 / gaps.len() as f64)
    }

    fn gaps(&self) -> Option<Vec<usize>> {
        let gaps: Vec<usize> = self.runs.iter().filter_map(RunMeasurement::gap).collect();
        (!gaps.is_empty()).then_some(gaps)
    }
}

fn mean(durations: impl ExactSizeIterator<Item = TimeDelta>) -> TimeDelta {
    let count = durations.len() as i32;
    if count == 0 {
        return TimeDelta::zero();
    }
    durations.sum::<TimeDelta>() / count
}

/// Executor for the measurement sweep
pub struct SweepExecutor {
    settings: SweepSettings,
    max_brute_force_length: usize,
    thread_pool: rayon::ThreadPool,
}

impl SweepExecutor {
    /// Create a new executor
    pub fn new(
        settings: SweepSettings,
        max_brute_force_length: usize,
    ) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            settings,
            max_brute_force_length,
            thread_pool,
        })
    }

    /// Points of the sweep in order
    pub fn points(&self) -> Vec<SweepPoint> {
        self.settings.points()
    }

    /// Measure every point and send its result to the channel
    pub fn execute(&self, tx: Sender<SweepResult>) -> Result<(), ExecutorError> {
        let points = self.points();

        if self.settings.thread_count == 1 {
            let mut collected_error: Option<ExecutorError> = None;
            for point in points {
                if let Err(e) = self.measure_and_send(point, &tx) {
                    collected_error = Some(ExecutorError::combine_opt(collected_error, e));
                }
            }
            return collected_error.map_or(Ok(()), Err);
        }

        self.thread_pool.install(|| {
            points
                .into_par_iter()
                .map(|point| self.measure_and_send(point, &tx).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    fn measure_and_send(
        &self,
        point: SweepPoint,
        tx: &Sender<SweepResult>,
    ) -> Result<(), ExecutorError> {
        let result = self.measure_point(point)?;
        tx.send(result).map_err(|_| ExecutorError::ChannelSend)
    }

    /// Run every repetition of one point
    fn measure_point(&self, point: SweepPoint) -> Result<SweepResult, ExecutorError> {
        let with_brute_force = point.string_length <= self.max_brute_force_length;
        if !with_brute_force {
            tracing::warn!(
                setting = point.setting,
                length = point.string_length,
                limit = self.max_brute_force_length,
                "skipping brute force for long strings"
            );
        }

        let mut runs = Vec::with_capacity(self.settings.runs);
        for run in 0..self.settings.runs {
            let set = self
                .settings
                .generator(&point, run)
                .generate(point.string_length, point.num_strings)
                .map_err(|source| ExecutorError::Generate {
                    setting: point.setting,
                    run,
                    source,
                })?;
            runs.push(measure_run(&set, with_brute_force));
        }

        tracing::debug!(setting = point.setting, runs = runs.len(), "measured point");
        Ok(SweepResult { point, runs })
    }
}

fn measure_run(set: &StringSet, with_brute_force: bool) -> RunMeasurement {
    let (heuristic, heuristic_duration) = timed(&Heuristic, set);
    let brute_force = with_brute_force.then(|| timed(&BruteForce, set));

    RunMeasurement {
        heuristic,
        heuristic_duration,
        brute_force,
    }
}

/// Solve `set` and measure the wall-clock time taken
fn timed(solver: &dyn Solver, set: &StringSet) -> (Solution, TimeDelta) {
    let start = Instant::now();
    let solution = solver.solve(set);
    let elapsed = TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX);
    tracing::trace!(solver = solver.name(), score = solution.score(), "timed solve");
    (solution, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorSettings;
    use std::sync::mpsc;

    fn settings(settings: usize, thread_count: usize) -> SweepSettings {
        SweepSettings {
            base: GeneratorSettings {
                string_length: 3,
                num_strings: 4,
                seed: Some(5),
                wildcard_probability: 0.25,
            },
            settings,
            step_length: 1,
            step_count: 2,
            runs: 3,
            thread_count,
        }
    }

    fn collect(executor: &SweepExecutor) -> Vec<SweepResult> {
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| r.point.setting);
        results
    }

    #[test]
    fn test_sequential_sweep_measures_every_point() {
        let executor = SweepExecutor::new(settings(3, 1), 24).unwrap();
        let results = collect(&executor);

        assert_eq!(results.len(), 3);
        for (j, result) in results.iter().enumerate() {
            assert_eq!(result.point.string_length, 3 + j);
            assert_eq!(result.point.num_strings, 4 + 2 * j);
            assert_eq!(result.runs.len(), 3);
            assert!(result.mean_brute_force_duration().is_some());
            // Brute force is exact, so the gap is never negative.
            assert!(result.mean_gap().unwrap() >= 0.0);
            assert!(result.optimal_runs().unwrap() <= 3);
        }
    }

    #[test]
    fn test_parallel_sweep_matches_sequential_scores() {
        let sequential = collect(&SweepExecutor::new(settings(4, 1), 24).unwrap());
        let parallel = collect(&SweepExecutor::new(settings(4, 3), 24).unwrap());

        let scores = |results: &[SweepResult]| -> Vec<Vec<usize>> {
            results
                .iter()
                .map(|r| r.runs.iter().map(|run| run.heuristic.score()).collect())
                .collect()
        };
        assert_eq!(scores(&sequential), scores(&parallel));
    }

    #[test]
    fn test_brute_force_skipped_above_limit() {
        let executor = SweepExecutor::new(settings(2, 1), 3).unwrap();
        let results = collect(&executor);

        assert!(results[0].mean_brute_force_duration().is_some());
        assert!(results[1].mean_brute_force_duration().is_none());
        assert!(results[1].optimal_runs().is_none());
        assert!(results[1].mean_gap().is_none());
    }
}
