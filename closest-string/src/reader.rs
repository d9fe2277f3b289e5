//! Line-oriented text input
//!
//! The first line is a template made of `0`, `1` and `*` that fixes the string length; it
//! is not part of the set. Every following line must be a string of exactly that length.
//!
//! ```text
//! ****
//! 1*0*
//! *100
//! 1101
//! ```

use crate::error::ReadError;
use crate::string_set::{StringSet, Symbol};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

/// A non-empty line over the `{0, 1, *}` alphabet
static LINE_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[10*]+$").unwrap());

/// Read a string set from `reader`
///
/// # Returns
/// * `Ok(StringSet)` - All lines were well formed
/// * `Err(ReadError::Empty)` - The stream has no template line
/// * `Err(ReadError::Format)` - A line has a wrong length or a foreign character
/// * `Err(ReadError::Io)` - Reading the stream failed
pub fn read_string_set(reader: impl BufRead) -> Result<StringSet, ReadError> {
    let mut lines = reader.lines();

    let template = match lines.next() {
        Some(line) => line?,
        None => return Err(ReadError::Empty),
    };
    let template = trim_line_ending(&template);

    if !LINE_FORMAT.is_match(template) {
        return Err(ReadError::Format {
            line: 1,
            reason: "expected a non-empty line of 0, 1 and *".to_string(),
        });
    }

    let string_length = template.len();

    let mut rows = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        let line = trim_line_ending(&line);
        if line.len() != string_length || !LINE_FORMAT.is_match(line) {
            return Err(ReadError::Format {
                line: offset + 2,
                reason: format!("expected {string_length} characters of 0, 1 and *"),
            });
        }
        rows.push(line.chars().filter_map(Symbol::from_char).collect::<Vec<_>>());
    }

    tracing::debug!(
        strings = rows.len(),
        length = string_length,
        "read string set"
    );
    Ok(StringSet::new(string_length, rows)?)
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
