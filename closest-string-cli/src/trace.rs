//! Step-by-step trace of the heuristic for interactive mode

use closest_string::{Observer, Trace};
use itertools::Itertools;
use std::io::{BufRead, Write};

/// Observer that prints every heuristic round and waits for a line of input
pub struct TracePrinter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TracePrinter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_trace(&mut self, trace: &Trace<'_>) -> std::io::Result<()> {
        write!(self.output, "{}", render_trace(trace))?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Observer for TracePrinter<R, W> {
    fn observe(&mut self, trace: &Trace<'_>) {
        if let Err(e) = self.write_trace(trace) {
            tracing::warn!(error = %e, "failed to print trace");
        }

        // Block until the user presses enter; EOF just continues.
        let mut line = String::new();
        if let Err(e) = self.input.read_line(&mut line) {
            tracing::warn!(error = %e, "failed to wait for input");
        }
    }
}

/// Render one round: the key, the current string, match counts (`mL`) and position
/// groups (`mS`)
pub fn render_trace(trace: &Trace<'_>) -> String {
    let mut out = String::new();

    let marker = if trace.key_changed { " (new)" } else { "" };
    out.push_str(&format!("Key: {}{}\n", trace.key_string(), marker));
    out.push_str(&format!(
        "{:<3}: {}\n",
        trace.index,
        trace.set.row_string(trace.index)
    ));

    let counts = trace
        .match_counts
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{}({})", i, count))
        .join("  ");
    out.push_str(&format!("mL:  {}\n", counts));

    out.push_str("mS:\n");
    for (position, group) in trace.position_groups.iter().enumerate() {
        let key = trace.key[position].map_or('?', |bit| bit.as_char());
        out.push_str(&format!("{}({}): [{}]\n", position, key, group.iter().join(", ")));
    }
    out
}
