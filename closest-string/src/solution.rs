//! Center strings and the result value both solvers return

use crate::metric;
use crate::string_set::{Bit, StringSet};
use std::fmt;

/// A binary candidate string, free of wildcards
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Center(Vec<Bit>);

impl Center {
    /// All-zero center of length `len`
    pub fn zeros(len: usize) -> Self {
        Self(vec![Bit::Zero; len])
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a string of `0`/`1` characters
    pub fn parse(text: &str) -> Option<Self> {
        text.chars()
            .map(|c| match c {
                '0' => Some(Bit::Zero),
                '1' => Some(Bit::One),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }
}

impl From<Vec<Bit>> for Center {
    fn from(bits: Vec<Bit>) -> Self {
        Self(bits)
    }
}

impl AsRef<[Bit]> for Center {
    fn as_ref(&self) -> &[Bit] {
        &self.0
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// A center string together with the radius it achieves
///
/// The score is always the radius of `center` against the set it was solved for, so
/// results from different solvers can be compared directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    center: Center,
    score: usize,
}

impl Solution {
    /// Score `center` against `set` and wrap both
    pub fn evaluate(center: Center, set: &StringSet) -> Self {
        let score = metric::radius(center.bits(), set);
        Self { center, score }
    }

    pub fn center(&self) -> &Center {
        &self.center
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn into_parts(self) -> (Center, usize) {
        (self.center, self.score)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {})", self.center, self.score)
    }
}
