//! Fixed-length strings over the alphabet {0, 1, *}

use crate::error::StringSetError;
use std::fmt;

/// One binary position of a center string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// The opposite bit
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One character of an input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A concrete binary value
    Bit(Bit),
    /// Matches either binary value
    Wildcard,
}

impl Symbol {
    pub const ZERO: Symbol = Symbol::Bit(Bit::Zero);
    pub const ONE: Symbol = Symbol::Bit(Bit::One);

    /// Parse a single character of the `{0, 1, *}` alphabet
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::ZERO),
            '1' => Some(Self::ONE),
            '*' => Some(Self::Wildcard),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Bit(bit) => bit.as_char(),
            Symbol::Wildcard => '*',
        }
    }

    /// The concrete value, or `None` for a wildcard
    pub fn bit(self) -> Option<Bit> {
        match self {
            Symbol::Bit(bit) => Some(bit),
            Symbol::Wildcard => None,
        }
    }

    /// Whether this symbol agrees with `bit` (wildcards always do)
    #[inline]
    pub fn matches(self, bit: Bit) -> bool {
        match self {
            Symbol::Bit(own) => own == bit,
            Symbol::Wildcard => true,
        }
    }
}

impl From<Bit> for Symbol {
    fn from(bit: Bit) -> Self {
        Symbol::Bit(bit)
    }
}

/// An ordered collection of `m` strings, each exactly `n` symbols long
///
/// The set is validated once at construction and is read-only afterwards, so solvers
/// only ever borrow it. Rows are stored back to back in a single buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSet {
    string_length: usize,
    num_strings: usize,
    data: Vec<Symbol>,
}

impl StringSet {
    /// Build a set from rows of symbols
    ///
    /// # Returns
    /// * `Err(StringSetError::EmptyLength)` - `string_length` is zero
    /// * `Err(StringSetError::LengthMismatch)` - a row has a different length
    pub fn new<R>(
        string_length: usize,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, StringSetError>
    where
        R: AsRef<[Symbol]>,
    {
        if string_length == 0 {
            return Err(StringSetError::EmptyLength);
        }

        let mut data = Vec::new();
        let mut num_strings = 0;
        for (row, symbols) in rows.into_iter().enumerate() {
            let symbols = symbols.as_ref();
            if symbols.len() != string_length {
                return Err(StringSetError::LengthMismatch {
                    row,
                    expected: string_length,
                    actual: symbols.len(),
                });
            }
            data.extend_from_slice(symbols);
            num_strings += 1;
        }

        Ok(Self {
            string_length,
            num_strings,
            data,
        })
    }

    /// Build a set from textual rows such as `"1*0"`
    pub fn from_strs<S>(
        string_length: usize,
        rows: impl IntoIterator<Item = S>,
    ) -> Result<Self, StringSetError>
    where
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, text)| parse_row(row, text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(string_length, rows)
    }

    /// An empty set (`m = 0`) of strings with the given length
    pub fn empty(string_length: usize) -> Result<Self, StringSetError> {
        Self::new::<&[Symbol]>(string_length, [])
    }

    /// Length `n` shared by every string
    pub fn string_length(&self) -> usize {
        self.string_length
    }

    /// Number of strings `m`
    pub fn num_strings(&self) -> usize {
        self.num_strings
    }

    pub fn is_empty(&self) -> bool {
        self.num_strings == 0
    }

    /// The `index`-th string
    ///
    /// # Panics
    /// If `index >= num_strings()`
    pub fn row(&self, index: usize) -> &[Symbol] {
        let start = index * self.string_length;
        &self.data[start..start + self.string_length]
    }

    /// Iterate over the strings in their original order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Symbol]> + '_ {
        self.data.chunks_exact(self.string_length)
    }

    /// Render one string as text
    pub fn row_string(&self, index: usize) -> String {
        self.row(index).iter().map(|s| s.as_char()).collect()
    }
}

fn parse_row(row: usize, text: &str) -> Result<Vec<Symbol>, StringSetError> {
    text.chars()
        .enumerate()
        .map(|(position, c)| {
            Symbol::from_char(c).ok_or(StringSetError::InvalidSymbol {
                row,
                position,
                symbol: c,
            })
        })
        .collect()
}

impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol.as_char())?;
            }
        }
        Ok(())
    }
}
