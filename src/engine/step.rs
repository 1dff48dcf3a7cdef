// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-depth results and per-run plot settings.

use std::path::PathBuf;
use std::sync::Arc;

use crate::geometry::PointSet;
use crate::render::Style;
use crate::sequence::Sequence;
use crate::state::Statistics;

/// All sequences of one exact length and their point sets, index-aligned.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub depth: usize,
    pub sequences: Vec<Sequence>,
    pub point_sets: Vec<Arc<PointSet>>,
}

impl StepResult {
    /// Number of new point sets at this depth.
    pub fn len(&self) -> usize {
        self.point_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_sets.is_empty()
    }

    /// `(sequence, point set)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Sequence, &Arc<PointSet>)> {
        self.sequences.iter().zip(self.point_sets.iter())
    }
}

/// Cosmetic settings for the render requests of one run.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    /// Appended to every title, e.g. `(h_2 matrices)`.
    pub title_prefix: String,
    pub style: Style,
    pub include_seed: bool,
    pub output_dir: PathBuf,
}

impl PlotSpec {
    /// `Step {depth}: Accumulated Transformations {prefix}`.
    pub fn title(&self, depth: usize) -> String {
        format!(
            "Step {}: Accumulated Transformations {}",
            depth, self.title_prefix
        )
        .trim_end()
        .to_string()
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: Vec<StepResult>,
    /// The final cumulative collection, seed first.
    pub cumulative: Vec<Arc<PointSet>>,
    pub statistics: Statistics,
}
