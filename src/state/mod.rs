// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run mutable state.
//!
//! Everything here is owned by exactly one orbit run and dropped with it;
//! nothing is process-wide.

pub mod statistics;

pub use statistics::{Counters, Statistics};
