//! Shared proptest strategies

#![allow(dead_code)]

use closest_string::{Bit, StringSet, Symbol};
use proptest::prelude::*;

pub fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        Just(Symbol::Bit(Bit::Zero)),
        Just(Symbol::Bit(Bit::One)),
        Just(Symbol::Wildcard),
    ]
}

pub fn bit() -> impl Strategy<Value = Bit> {
    prop_oneof![Just(Bit::Zero), Just(Bit::One)]
}

/// Rows of `n` symbols for a set of `m` strings
pub fn rows(n: usize, max_strings: usize) -> impl Strategy<Value = Vec<Vec<Symbol>>> {
    prop::collection::vec(prop::collection::vec(symbol(), n), 0..=max_strings)
}

/// A small string set, brute-force friendly
pub fn string_set(max_len: usize, max_strings: usize) -> impl Strategy<Value = StringSet> {
    (1..=max_len).prop_flat_map(move |n| {
        rows(n, max_strings).prop_map(move |rows| StringSet::new(n, rows).unwrap())
    })
}

/// A string set together with a candidate of matching length
pub fn set_and_candidate(
    max_len: usize,
    max_strings: usize,
) -> impl Strategy<Value = (StringSet, Vec<Bit>)> {
    (1..=max_len).prop_flat_map(move |n| {
        (
            rows(n, max_strings).prop_map(move |rows| StringSet::new(n, rows).unwrap()),
            prop::collection::vec(bit(), n),
        )
    })
}
