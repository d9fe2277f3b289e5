//! Incremental majority heuristic
//!
//! Input strings are folded in one at a time. Every position of the key is decided by the
//! majority of the concrete symbols seen so far in its column, and the solver keeps track
//! of which strings agree with the key at every position (`position_groups`) and how many
//! positions of every string agree with it (`match_counts`). When a new string swings a
//! column majority the position flips and its group is rebuilt, so the bookkeeping always
//! describes the current key exactly.

use crate::solution::{Center, Solution};
use crate::string_set::{Bit, StringSet, Symbol};

/// Snapshot handed to an [`Observer`] after a string has been incorporated
#[derive(Debug, Clone, Copy)]
pub struct Trace<'a> {
    /// Key under construction, `None` for positions not decided yet
    pub key: &'a [Option<Bit>],
    /// The set being solved
    pub set: &'a StringSet,
    /// Agreement count for every string incorporated so far (`index + 1` entries)
    pub match_counts: &'a [usize],
    /// For every position, the ascending indices of strings agreeing with the key there
    pub position_groups: &'a [Vec<usize>],
    /// Index of the string incorporated in this round
    pub index: usize,
    /// Whether any key position differs from its value before this round
    pub key_changed: bool,
}

impl Trace<'_> {
    /// The string incorporated in this round
    pub fn row(&self) -> &[Symbol] {
        self.set.row(self.index)
    }

    /// Key rendered with `?` for undecided positions
    pub fn key_string(&self) -> String {
        self.key
            .iter()
            .map(|bit| bit.map_or('?', Bit::as_char))
            .collect()
    }
}

/// Receives a [`Trace`] after every round of the heuristic
///
/// The solver waits for `observe` to return before incorporating the next string, so an
/// observer may block, e.g. until the user presses a key.
pub trait Observer {
    fn observe(&mut self, trace: &Trace<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Trace<'_>),
{
    fn observe(&mut self, trace: &Trace<'_>) {
        self(trace)
    }
}

/// Run the heuristic on `set`
pub fn heuristic(set: &StringSet) -> Solution {
    run(set, &mut |_: &Trace<'_>| {})
}

/// Run the heuristic on `set`, reporting every round to `observer`
pub fn heuristic_interactive<O>(set: &StringSet, observer: &mut O) -> Solution
where
    O: Observer + ?Sized,
{
    run(set, observer)
}

fn run<O>(set: &StringSet, observer: &mut O) -> Solution
where
    O: Observer + ?Sized,
{
    tracing::debug!(
        strings = set.num_strings(),
        length = set.string_length(),
        "running heuristic"
    );

    let mut state = WorkingState::new(set);
    for index in 0..set.num_strings() {
        let key_changed = state.incorporate(index);
        tracing::trace!(index, key_changed, "incorporated string");
        observer.observe(&state.trace(index, key_changed));
    }

    // Bookkeeping is exact, but the score is recomputed from the finished key.
    let solution = Solution::evaluate(state.into_center(), set);
    tracing::debug!(score = solution.score(), "heuristic finished");
    solution
}

/// Working state of one heuristic run
struct WorkingState<'s> {
    set: &'s StringSet,
    key: Vec<Option<Bit>>,
    /// Concrete symbol counts per column, indexed by bit
    tallies: Vec<[usize; 2]>,
    match_counts: Vec<usize>,
    position_groups: Vec<Vec<usize>>,
}

impl<'s> WorkingState<'s> {
    fn new(set: &'s StringSet) -> Self {
        let n = set.string_length();
        Self {
            set,
            key: vec![None; n],
            tallies: vec![[0; 2]; n],
            match_counts: Vec::with_capacity(set.num_strings()),
            position_groups: vec![Vec::new(); n],
        }
    }

    /// Fold string `index` into the key; returns whether the key changed
    fn incorporate(&mut self, index: usize) -> bool {
        let set = self.set;
        let row = set.row(index);
        let is_last = index + 1 == set.num_strings();
        let before = self.key.clone();

        for (position, &symbol) in row.iter().enumerate() {
            match symbol.bit() {
                Some(bit) => {
                    self.tallies[position][slot(bit)] += 1;
                    match self.key[position] {
                        // Only wildcards so far, so this symbol is the majority.
                        None => self.key[position] = Some(bit),
                        Some(current) => {
                            let tally = self.tallies[position];
                            if tally[slot(current.flipped())] > tally[slot(current)] {
                                self.key[position] = Some(current.flipped());
                                self.regroup(position, index);
                            }
                        }
                    }
                }
                None if is_last && self.key[position].is_none() => {
                    self.key[position] = Some(Bit::Zero);
                }
                None => {}
            }
        }

        let mut matched = 0;
        for (position, &symbol) in row.iter().enumerate() {
            // An undecided position implies a wildcard here.
            if self.key[position].is_none_or(|bit| symbol.matches(bit)) {
                matched += 1;
                self.position_groups[position].push(index);
            }
        }
        self.match_counts.push(matched);

        self.key != before
    }

    /// Rebuild the group of a flipped position over the first `processed` strings
    fn regroup(&mut self, position: usize, processed: usize) {
        let Some(value) = self.key[position] else {
            return;
        };

        let mut group = Vec::with_capacity(processed);
        for j in 0..processed {
            match self.set.row(j)[position] {
                Symbol::Wildcard => group.push(j),
                Symbol::Bit(bit) if bit == value => {
                    self.match_counts[j] += 1;
                    group.push(j);
                }
                Symbol::Bit(_) => self.match_counts[j] -= 1,
            }
        }
        self.position_groups[position] = group;
    }

    fn trace(&self, index: usize, key_changed: bool) -> Trace<'_> {
        Trace {
            key: &self.key,
            set: self.set,
            match_counts: &self.match_counts,
            position_groups: &self.position_groups,
            index,
            key_changed,
        }
    }

    /// Finished key; positions never decided (all wildcards, or `m = 0`) become `0`
    fn into_center(self) -> Center {
        self.key
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
            .into()
    }
}

#[inline]
fn slot(bit: Bit) -> usize {
    match bit {
        Bit::Zero => 0,
        Bit::One => 1,
    }
}
