//! Property-based tests comparing the heuristic with brute force
//!
//! **Feature: closest-string-solvers**

mod common;

use closest_string::metric::radius;
use closest_string::{
    Bit, BruteForce, Heuristic, Solver, StringSet, Symbol, brute_force, heuristic,
};
use common::string_set;
use proptest::prelude::*;

/// Every candidate of length `n` in counting order, position 0 most significant
fn all_candidates(n: usize) -> impl Iterator<Item = Vec<Bit>> {
    (0u32..1 << n).map(move |value| {
        (0..n)
            .map(|p| {
                if value >> (n - 1 - p) & 1 == 1 {
                    Bit::One
                } else {
                    Bit::Zero
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// **Feature: closest-string-solvers, Property 1: Brute force is optimal**
    /// *For any* set, brute force never scores worse than the heuristic.
    #[test]
    fn prop_brute_force_never_worse(set in string_set(8, 6)) {
        prop_assert!(brute_force(&set).score() <= heuristic(&set).score());
    }

    /// **Feature: closest-string-solvers, Property 2: Smallest optimum wins**
    /// *For any* set, brute force returns the numerically smallest candidate reaching
    /// the minimum radius.
    #[test]
    fn prop_brute_force_first_minimum(set in string_set(7, 5)) {
        let n = set.string_length();
        let (best, best_score) = all_candidates(n)
            .map(|c| {
                let score = radius(&c, &set);
                (c, score)
            })
            .fold(None, |acc: Option<(Vec<Bit>, usize)>, (c, score)| match acc {
                Some((_, s)) if s <= score => acc,
                _ => Some((c, score)),
            })
            .unwrap();

        let solution = brute_force(&set);
        prop_assert_eq!(solution.score(), best_score);
        prop_assert_eq!(solution.center().bits(), best.as_slice());
    }

    /// **Feature: closest-string-solvers, Property 3: Scores are exact**
    /// *For any* set, both solvers report the exact radius of the center they return.
    #[test]
    fn prop_reported_score_is_radius(set in string_set(8, 6)) {
        for solver in [&Heuristic as &dyn Solver, &BruteForce] {
            let solution = solver.solve(&set);
            prop_assert_eq!(solution.center().len(), set.string_length());
            prop_assert_eq!(solution.score(), radius(solution.center().bits(), &set));
        }
    }

    /// **Feature: closest-string-solvers, Property 4: Identical strings**
    /// *For any* string repeated several times, brute force returns it with wildcards
    /// resolved to `0` and score 0.
    #[test]
    fn prop_identical_strings_are_their_own_center(
        row in (1usize..=8).prop_flat_map(|n| prop::collection::vec(common::symbol(), n)),
        copies in 1usize..=4,
    ) {
        let set = StringSet::new(row.len(), vec![row.clone(); copies]).unwrap();
        let expected: Vec<Bit> = row.iter().map(|s| s.bit().unwrap_or(Bit::Zero)).collect();

        let solution = brute_force(&set);
        prop_assert_eq!(solution.score(), 0);
        prop_assert_eq!(solution.center().bits(), expected.as_slice());
        prop_assert_eq!(heuristic(&set).score(), 0);
    }

    /// **Feature: closest-string-solvers, Property 5: Empty sets**
    /// *For any* length, both solvers score an empty set with 0.
    #[test]
    fn prop_empty_set_scores_zero(n in 1usize..=10) {
        let set = StringSet::empty(n).unwrap();
        prop_assert_eq!(heuristic(&set).score(), 0);
        prop_assert_eq!(brute_force(&set).score(), 0);
    }

    /// **Feature: closest-string-solvers, Property 6: Solving does not disturb the set**
    /// *For any* set, running both solvers repeatedly yields identical results.
    #[test]
    fn prop_solvers_are_repeatable(set in string_set(6, 5)) {
        let snapshot = set.clone();
        prop_assert_eq!(heuristic(&set), heuristic(&set));
        prop_assert_eq!(brute_force(&set), brute_force(&set));
        prop_assert_eq!(set, snapshot);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_three_strings_of_length_three() {
        let set = StringSet::from_strs(3, ["010", "011", "110"]).unwrap();

        let exact = brute_force(&set);
        assert_eq!(exact.to_string(), "010 (score: 1)");
        assert!(heuristic(&set).score() >= exact.score());
    }

    #[test]
    fn test_wildcards_never_count() {
        let set = StringSet::from_strs(4, ["1*0*", "*100", "1101"]).unwrap();

        for solver in [&Heuristic as &dyn Solver, &BruteForce] {
            let solution = solver.solve(&set);
            for (row, text) in set.rows().zip(["1*0*", "*100", "1101"]) {
                let concrete_mismatches = solution
                    .center()
                    .bits()
                    .iter()
                    .zip(text.chars())
                    .filter(|&(bit, c)| c != '*' && bit.as_char() != c)
                    .count();
                assert_eq!(
                    closest_string::metric::mismatches(solution.center().bits(), row),
                    concrete_mismatches
                );
            }
        }
    }

    #[test]
    fn test_all_wildcards_score_zero() {
        let set = StringSet::new(3, vec![vec![Symbol::Wildcard; 3]; 4]).unwrap();
        assert_eq!(heuristic(&set).to_string(), "000 (score: 0)");
        assert_eq!(brute_force(&set).to_string(), "000 (score: 0)");
    }

    #[test]
    fn test_solver_names() {
        assert_eq!(Heuristic.name(), "heuristic");
        assert_eq!(BruteForce.name(), "brute-force");
    }
}
