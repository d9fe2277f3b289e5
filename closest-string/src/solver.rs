//! Common interface over both solving strategies

use crate::brute_force::brute_force;
use crate::heuristic::heuristic;
use crate::solution::Solution;
use crate::string_set::StringSet;

/// A strategy that turns a string set into a center and its score
///
/// Implementations only borrow the set, so any number of solvers can be run back to
/// back on the same instance.
///
/// # Example
///
/// ```
/// use closest_string::{BruteForce, Heuristic, Solver, StringSet};
///
/// let set = StringSet::from_strs(3, ["010", "011", "110"]).unwrap();
/// let solvers: [&dyn Solver; 2] = [&Heuristic, &BruteForce];
///
/// for solver in solvers {
///     let solution = solver.solve(&set);
///     println!("{}: {}", solver.name(), solution);
/// }
/// ```
pub trait Solver {
    /// Short human readable name
    fn name(&self) -> &'static str;

    /// Solve `set`
    fn solve(&self, set: &StringSet) -> Solution;
}

/// The incremental majority heuristic, see [`heuristic`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Solver for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn solve(&self, set: &StringSet) -> Solution {
        heuristic(set)
    }
}

/// Exhaustive search, see [`brute_force`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Solver for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn solve(&self, set: &StringSet) -> Solution {
        brute_force(set)
    }
}
