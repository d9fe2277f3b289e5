//! Distance between a candidate and the strings of a set
//!
//! A wildcard in an input string never counts as a mismatch. The objective both solvers
//! minimise is the radius: the largest per-string mismatch count over the set.

use crate::string_set::{Bit, StringSet, Symbol};

/// Number of concrete positions where `row` disagrees with `candidate`
#[inline]
pub fn mismatches(candidate: &[Bit], row: &[Symbol]) -> usize {
    debug_assert_eq!(candidate.len(), row.len());
    candidate
        .iter()
        .zip(row)
        .filter(|&(&bit, &symbol)| !symbol.matches(bit))
        .count()
}

/// Worst-case mismatch count of `candidate` over every string in `set`
///
/// An empty set has radius 0.
pub fn radius(candidate: &[Bit], set: &StringSet) -> usize {
    set.rows()
        .map(|row| mismatches(candidate, row))
        .max()
        .unwrap_or(0)
}

/// Radius of `candidate`, or `None` once some string reaches `bound` mismatches
///
/// A `Some` result is always strictly below `bound` and equal to [`radius`].
pub fn radius_within(candidate: &[Bit], set: &StringSet, bound: usize) -> Option<usize> {
    let mut worst = 0;
    for row in set.rows() {
        let mut count = 0;
        for (&bit, &symbol) in candidate.iter().zip(row) {
            if !symbol.matches(bit) {
                count += 1;
                if count >= bound {
                    return None;
                }
            }
        }
        worst = worst.max(count);
    }
    (worst < bound).then_some(worst)
}
