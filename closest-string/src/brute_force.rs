//! Exhaustive search over every binary string of the target length
//!
//! Exponential in the string length; meant as a reference for small instances.

use crate::metric;
use crate::solution::{Center, Solution};
use crate::string_set::{Bit, StringSet};

/// Lazy enumeration of all `2^n` binary strings of length `n`
///
/// Candidates come out in counting order, `0…00` up to `1…11`, with position 0 as the
/// most significant bit. Only the current candidate is held in memory.
#[derive(Debug, Clone)]
pub struct Candidates {
    current: Vec<Bit>,
    started: bool,
    exhausted: bool,
}

impl Candidates {
    pub fn new(len: usize) -> Self {
        Self {
            current: vec![Bit::Zero; len],
            started: false,
            exhausted: false,
        }
    }

    /// Step to the next candidate and borrow it, or `None` once all have been produced
    pub fn advance(&mut self) -> Option<&[Bit]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }

        // Binary increment from the least significant (last) position.
        for position in (0..self.current.len()).rev() {
            if self.current[position] == Bit::Zero {
                self.current[position] = Bit::One;
                return Some(&self.current);
            }
            self.current[position] = Bit::Zero;
        }

        self.exhausted = true;
        None
    }

    /// Start over from the all-zero candidate
    pub fn reset(&mut self) {
        self.current.fill(Bit::Zero);
        self.started = false;
        self.exhausted = false;
    }
}

/// Find the candidate with the smallest radius, preferring the numerically smallest
pub fn brute_force(set: &StringSet) -> Solution {
    let n = set.string_length();
    tracing::debug!(strings = set.num_strings(), length = n, "running brute force");

    let mut candidates = Candidates::new(n);
    let mut best: Option<(Vec<Bit>, usize)> = None;

    while let Some(candidate) = candidates.advance() {
        // A candidate must beat the best so far strictly, so the bound prunes ties too.
        let bound = best.as_ref().map_or(usize::MAX, |(_, score)| *score);
        if let Some(score) = metric::radius_within(candidate, set, bound) {
            tracing::trace!(score, "brute force improved");
            best = Some((candidate.to_vec(), score));
        }
    }

    let center = best.map_or_else(|| Center::zeros(n), |(bits, _)| Center::from(bits));
    let solution = Solution::evaluate(center, set);
    tracing::debug!(score = solution.score(), "brute force finished");
    solution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(len: usize) -> Vec<String> {
        let mut candidates = Candidates::new(len);
        let mut out = Vec::new();
        while let Some(c) = candidates.advance() {
            out.push(c.iter().map(|b| b.as_char()).collect());
        }
        out
    }

    #[test]
    fn test_candidates_count_in_order() {
        assert_eq!(
            collect(3),
            vec!["000", "001", "010", "011", "100", "101", "110", "111"]
        );
        assert_eq!(collect(1), vec!["0", "1"]);
    }

    #[test]
    fn test_candidates_restart() {
        let mut candidates = Candidates::new(2);
        while candidates.advance().is_some() {}
        assert!(candidates.advance().is_none());

        candidates.reset();
        assert_eq!(candidates.advance(), Some(&[Bit::Zero, Bit::Zero][..]));
    }

    #[test]
    fn test_three_strings_smallest_optimum() {
        let set = StringSet::from_strs(3, ["010", "011", "110"]).unwrap();
        let solution = brute_force(&set);

        assert_eq!(solution.center().to_string(), "010");
        assert_eq!(solution.score(), 1);
    }

    #[test]
    fn test_empty_set_returns_zero_candidate() {
        let set = StringSet::empty(3).unwrap();
        let solution = brute_force(&set);

        assert_eq!(solution.center().to_string(), "000");
        assert_eq!(solution.score(), 0);
    }

    #[test]
    fn test_wildcard_instance() {
        let set = StringSet::from_strs(4, ["1*0*", "*100", "1101"]).unwrap();
        let solution = brute_force(&set);

        // Column 3 holds both a 0 and a 1, so radius 0 is out of reach.
        assert_eq!(solution.score(), 1);
        assert_eq!(solution.center().to_string(), "0101");
    }
}
