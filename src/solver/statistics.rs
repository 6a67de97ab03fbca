// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters tracking how much work a solver instance has done. Stored
//! in the solver and incremented as the search proceeds.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Catalog partitions checked against the balances.
    PartitionsTested,
    /// Individual groups whose balance sum was computed.
    GroupsSummed,
    /// Searches that ended with a zero-balance decomposition.
    SolutionsFound,
    /// Searches that ended with the unsplit fallback.
    FallbacksReturned,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
