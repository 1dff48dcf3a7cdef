// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters for one orbit run. They live beside the transformation cache,
//! since both span exactly one run, and are bumped by the cache and the
//! depth orchestrator.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Sequence lookups answered from the cache.
    CacheHits,
    /// Sequence lookups that had to be evaluated.
    CacheMisses,
    /// Individual 2×2 by 2×N matrix products.
    Multiplications,
    /// Sequences produced by the generator.
    SequencesEnumerated,
    /// Render requests handed to the renderer.
    RenderRequests,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Increment the specified counter by `amount`.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Counters::iter()
            .map(|counter| format!("{}={}", counter, self.get(counter)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
