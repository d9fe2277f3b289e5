//! Puts sweep results back in setting order
//!
//! Points finish in any order when measured in parallel. Settings are always the dense
//! range `0..k`, so a cursor on the next setting to print plus a buffer of early arrivals
//! is enough.

use crate::executor::SweepResult;
use std::collections::BTreeMap;

/// Releases sweep results as soon as every earlier setting has been released
pub struct SweepAggregator {
    next: usize,
    settings: usize,
    early: BTreeMap<usize, SweepResult>,
}

impl SweepAggregator {
    /// Expect results for settings `0..settings`
    pub fn new(settings: usize) -> Self {
        Self {
            next: 0,
            settings,
            early: BTreeMap::new(),
        }
    }

    /// Accept one result; returns the run of results that can now be printed
    pub fn add(&mut self, result: SweepResult) -> Vec<SweepResult> {
        self.early.insert(result.point.setting, result);

        let mut ready = Vec::new();
        while let Some(result) = self.early.remove(&self.next) {
            ready.push(result);
            self.next += 1;
        }
        ready
    }

    /// Results still held back behind a missing setting, in setting order
    pub fn drain(&mut self) -> Vec<SweepResult> {
        std::mem::take(&mut self.early).into_values().collect()
    }

    /// Whether every setting has been released by `add`
    pub fn is_complete(&self) -> bool {
        self.next >= self.settings
    }
}
