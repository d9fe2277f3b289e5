//! Property-based tests for the heuristic's step trace
//!
//! **Feature: heuristic-trace**

mod common;

use closest_string::{Bit, StringSet, Trace, heuristic, heuristic_interactive};
use common::string_set;
use proptest::prelude::*;

/// Recorded copy of one trace
#[derive(Debug, Clone)]
struct Round {
    key: Vec<Option<Bit>>,
    match_counts: Vec<usize>,
    position_groups: Vec<Vec<usize>>,
    index: usize,
    key_changed: bool,
}

fn record(set: &StringSet) -> Vec<Round> {
    let mut rounds = Vec::new();
    heuristic_interactive(set, &mut |trace: &Trace<'_>| {
        rounds.push(Round {
            key: trace.key.to_vec(),
            match_counts: trace.match_counts.to_vec(),
            position_groups: trace.position_groups.to_vec(),
            index: trace.index,
            key_changed: trace.key_changed,
        });
    });
    rounds
}

fn agrees(set: &StringSet, row: usize, position: usize, key: Option<Bit>) -> bool {
    let symbol = set.row(row)[position];
    match key {
        Some(bit) => symbol.matches(bit),
        None => symbol.bit().is_none(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: heuristic-trace, Property 1: One call per string**
    /// *For any* set, the observer runs once per string, in order, with `index + 1`
    /// match counts.
    #[test]
    fn prop_one_round_per_string(set in string_set(8, 8)) {
        let rounds = record(&set);

        prop_assert_eq!(rounds.len(), set.num_strings());
        for (i, round) in rounds.iter().enumerate() {
            prop_assert_eq!(round.index, i);
            prop_assert_eq!(round.match_counts.len(), i + 1);
            prop_assert_eq!(round.key.len(), set.string_length());
        }
    }

    /// **Feature: heuristic-trace, Property 2: Bookkeeping is exact**
    /// *For any* set and round, every match count equals the agreement of its string with
    /// the current key, and every position group holds exactly the agreeing strings in
    /// ascending order.
    #[test]
    fn prop_bookkeeping_matches_key(set in string_set(8, 8)) {
        for round in record(&set) {
            for j in 0..=round.index {
                let expected = (0..set.string_length())
                    .filter(|&p| agrees(&set, j, p, round.key[p]))
                    .count();
                prop_assert_eq!(round.match_counts[j], expected);
            }
            for (p, group) in round.position_groups.iter().enumerate() {
                let expected: Vec<usize> = (0..=round.index)
                    .filter(|&j| agrees(&set, j, p, round.key[p]))
                    .collect();
                prop_assert_eq!(group, &expected);
            }
        }
    }

    /// **Feature: heuristic-trace, Property 3: Key change flag**
    /// *For any* set, `key_changed` is set exactly when the key differs from the key of
    /// the previous round.
    #[test]
    fn prop_key_changed_flag(set in string_set(8, 8)) {
        let mut previous = vec![None; set.string_length()];
        for round in record(&set) {
            prop_assert_eq!(round.key_changed, round.key != previous);
            previous = round.key.clone();
        }
    }

    /// **Feature: heuristic-trace, Property 4: Result is the final key**
    /// *For any* non-empty set, the last round leaves no position undecided and the
    /// returned center equals that key; tracing does not change the result.
    #[test]
    fn prop_result_is_final_key(set in string_set(8, 8)) {
        prop_assume!(!set.is_empty());
        let rounds = record(&set);
        let last = rounds.last().unwrap();

        prop_assert!(last.key.iter().all(Option::is_some));
        let key: Vec<Bit> = last.key.iter().flatten().copied().collect();
        let solution = heuristic(&set);
        prop_assert_eq!(solution.center().bits(), key.as_slice());
    }
}

#[test]
fn test_two_strings_two_rounds() {
    let set = StringSet::from_strs(2, ["0*", "1*"]).unwrap();
    let rounds = record(&set);

    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].index, 0);
    assert_eq!(rounds[0].match_counts.len(), 1);
    assert_eq!(rounds[1].index, 1);
    assert_eq!(rounds[1].match_counts.len(), 2);
}
