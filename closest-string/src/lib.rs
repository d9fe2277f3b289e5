//! Closest String Solver Library
//!
//! Finds a binary "center" string that is as close as possible to every string of a set
//! over the alphabet `{0, 1, *}`, where `*` matches either bit. Closeness is measured by the
//! radius: the largest number of mismatching positions between the center and any single
//! string of the set.
//!
//! # Overview
//!
//! This library provides:
//! - [`StringSet`], a validated, immutable container of equal-length strings
//! - The [`metric`] functions computing mismatches and the radius
//! - [`heuristic`], a fast incremental solver with an optional step-by-step [`Observer`]
//! - [`brute_force`], an exhaustive solver used as the reference optimum
//! - A [`reader`] for the line-oriented input format and a random [`generator`]
//!
//! # Quick Example
//!
//! ```
//! use closest_string::{brute_force, heuristic, StringSet};
//!
//! let set = StringSet::from_strs(4, ["1*0*", "*100", "1101"]).unwrap();
//!
//! let fast = heuristic(&set);
//! let exact = brute_force(&set);
//!
//! assert!(exact.score() <= fast.score());
//! assert_eq!(exact.to_string(), "0101 (score: 1)");
//! ```
//!
//! # Interactive Tracing
//!
//! [`heuristic_interactive`] calls an [`Observer`] after every string it folds in. Any
//! `FnMut(&Trace)` closure is an observer:
//!
//! ```
//! use closest_string::{heuristic_interactive, StringSet, Trace};
//!
//! let set = StringSet::from_strs(2, ["01", "11"]).unwrap();
//! let mut rounds = 0;
//! heuristic_interactive(&set, &mut |trace: &Trace<'_>| {
//!     assert_eq!(trace.match_counts.len(), trace.index + 1);
//!     rounds += 1;
//! });
//! assert_eq!(rounds, 2);
//! ```

mod brute_force;
mod error;
mod heuristic;
mod solution;
mod solver;
mod string_set;

pub mod generator;
pub mod metric;
pub mod reader;

// Re-export public API
pub use brute_force::{Candidates, brute_force};
pub use error::{ReadError, StringSetError};
pub use generator::RandomStringGenerator;
pub use heuristic::{Observer, Trace, heuristic, heuristic_interactive};
pub use reader::read_string_set;
pub use solution::{Center, Solution};
pub use solver::{BruteForce, Heuristic, Solver};
pub use string_set::{Bit, StringSet, Symbol};
