//! Output formatting for solver results and sweep measurements

use crate::executor::SweepResult;
use chrono::TimeDelta;
use closest_string::{Solution, StringSet};

/// Output formatter for reports
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print the set about to be solved
    pub fn print_input(&self, set: &StringSet) {
        if self.quiet {
            return;
        }
        println!("Input:");
        println!("{}", set);
        println!();
    }

    /// Announce the interactive heuristic trace
    pub fn print_trace_header(&self) {
        if !self.quiet {
            println!("HEURISTIC:");
        }
    }

    /// Print the result of both solvers
    ///
    /// `brute_force` is `None` when the strings were too long for brute force.
    pub fn print_solutions(&self, heuristic: &Solution, brute_force: Option<&Solution>) {
        if self.quiet {
            println!("{}", heuristic);
            if let Some(solution) = brute_force {
                println!("{}", solution);
            }
            return;
        }

        println!("Heuristic solution:   {}", heuristic);
        match brute_force {
            Some(solution) => println!("Brute-force solution: {}", solution),
            None => println!("Brute-force solution: skipped (string too long)"),
        }
    }

    /// Print the column header of the sweep table
    pub fn print_sweep_header(&self) {
        if !self.quiet {
            println!(
                "{:>6} {:>8} {:>12} {:>12} {:>9} {:>9}",
                "n", "m", "heuristic", "brute-force", "optimal", "mean gap"
            );
        }
    }

    /// Print one sweep point
    pub fn print_sweep_result(&self, result: &SweepResult) {
        if self.quiet {
            println!("{}", format_sweep_row_quiet(result));
        } else {
            println!("{}", format_sweep_row(result));
        }
    }

    /// Print how often the heuristic hit the optimum, the time spent in each solver and
    /// the wall-clock time of the whole sweep
    pub fn print_summary(&self, results: &[SweepResult]) {
        if self.quiet {
            return;
        }

        let total_runs: usize = results.iter().map(|r| r.runs.len()).sum();
        let compared_runs = results
            .iter()
            .flat_map(|r| &r.runs)
            .filter(|run| run.brute_force.is_some())
            .count();
        let optimal_runs: usize = results.iter().filter_map(SweepResult::optimal_runs).sum();

        let total_heuristic_time: TimeDelta = results
            .iter()
            .flat_map(|r| &r.runs)
            .map(|run| run.heuristic_duration)
            .sum();
        let total_brute_force_time: TimeDelta = results
            .iter()
            .flat_map(|r| &r.runs)
            .filter_map(|run| run.brute_force.as_ref().map(|(_, d)| *d))
            .sum();
        let total_compute_time = total_heuristic_time + total_brute_force_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Settings: {}, runs: {}", results.len(), total_runs);
        println!(
            "Heuristic optimal in {} of {} compared run(s)",
            optimal_runs, compared_runs
        );
        println!(
            "Total heuristic time: {}",
            format_duration(total_heuristic_time)
        );
        println!(
            "Total brute-force time: {}",
            format_duration(total_brute_force_time)
        );
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Format one sweep point as a table row
fn format_sweep_row(result: &SweepResult) -> String {
    let brute_force = result
        .mean_brute_force_duration()
        .map(format_duration)
        .unwrap_or_else(|| "skipped".to_string());
    let optimal = result
        .optimal_runs()
        .map(|count| format!("{}/{}", count, result.runs.len()))
        .unwrap_or_else(|| "-".to_string());
    let gap = result
        .mean_gap()
        .map(|gap| format!("{:.2}", gap))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>6} {:>8} {:>12} {:>12} {:>9} {:>9}",
        result.point.string_length,
        result.point.num_strings,
        format_duration(result.mean_heuristic_duration()),
        brute_force,
        optimal,
        gap
    )
}

/// Format one sweep point as bare numbers: `n m heuristic_us brute_force_us`
fn format_sweep_row_quiet(result: &SweepResult) -> String {
    let micros = |d: TimeDelta| {
        d.num_microseconds()
            .map_or_else(|| "N/A".to_string(), |us| us.to_string())
    };
    let brute_force = result
        .mean_brute_force_duration()
        .map_or_else(|| "-".to_string(), micros);

    format!(
        "{} {} {} {}",
        result.point.string_length,
        result.point.num_strings,
        micros(result.mean_heuristic_duration()),
        brute_force
    )
}

/// Solver time, `N/A` when it does not fit in microseconds
fn format_duration(d: TimeDelta) -> String {
    d.num_microseconds()
        .map_or_else(|| "N/A".to_string(), format_micros)
}

/// Wall-clock time of the sweep
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(i64::try_from(d.as_micros()).unwrap_or(i64::MAX))
}

/// Whole microseconds below a millisecond, otherwise ms or s with two decimals
fn format_micros(micros: i64) -> String {
    let sign = if micros < 0 { "-" } else { "" };
    let magnitude = micros.unsigned_abs();
    match magnitude {
        0..1_000 => format!("{sign}{magnitude}µs"),
        1_000..1_000_000 => format!("{sign}{:.2}ms", magnitude as f64 / 1e3),
        _ => format!("{sign}{:.2}s", magnitude as f64 / 1e6),
    }
}
