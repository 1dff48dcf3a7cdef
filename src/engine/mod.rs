// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth orchestrator.
//!
//! This module drives the sequence generator and the transformation cache
//! across depths `1..=max_step` and hands the growing geometry to a
//! [`Renderer`].
//!
//! # Execution model
//!
//! For each depth `d`:
//! 1. Enumerate every sequence of length `d` over the alphabet
//! 2. Evaluate each through the run's [`TransformCache`]
//! 3. Append the new point sets to the cumulative collection
//! 4. Emit one [`RenderRequest`] with the full cumulative collection
//!
//! The cumulative collection starts with the seed, so at depth `d` it holds
//! `1 + k + k² + … + k^d` point sets for an alphabet of size `k`.
//!
//! The first error (invalid input, unknown label, renderer failure) aborts
//! the run and is returned; nothing is skipped.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use triangle_orbits::engine::{NullRenderer, OrbitEngine};
//! use triangle_orbits::variants::Variant;
//!
//! let variant = Variant::Hk(2);
//! let mut engine = OrbitEngine::new(
//!     variant.alphabet().unwrap(),
//!     variant.seed().point_set().unwrap(),
//!     3,
//! )
//! .unwrap();
//!
//! let summary = engine.run(&mut NullRenderer, &variant.plot_spec(Path::new("."))).unwrap();
//! assert_eq!(summary.cumulative.len(), 1 + 4 + 16 + 64);
//! ```

pub mod renderer;
pub mod step;

pub use renderer::{NullRenderer, RenderRequest, Renderer};
pub use step::{PlotSpec, RunSummary, StepResult};

use std::sync::Arc;

use log::{debug, info};

use crate::alphabet::Alphabet;
use crate::error::{OrbitError, Result};
use crate::geometry::PointSet;
use crate::sequence::SequenceGenerator;
use crate::state::{Counters, Statistics};
use crate::transform::TransformCache;

/// One orbit run: a fixed alphabet, seed and depth bound, plus the cache
/// that lives exactly as long as the run.
#[derive(Debug)]
pub struct OrbitEngine {
    alphabet: Alphabet,
    seed: Arc<PointSet>,
    max_step: usize,
    cache: TransformCache,
}

impl OrbitEngine {
    /// Create a run, rejecting `max_step < 1` before any work is done.
    pub fn new(alphabet: Alphabet, seed: PointSet, max_step: usize) -> Result<Self> {
        if max_step < 1 {
            return Err(OrbitError::InvalidLength(max_step));
        }
        Ok(Self {
            alphabet,
            seed: Arc::new(seed),
            max_step,
            cache: TransformCache::new(),
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn seed(&self) -> &Arc<PointSet> {
        &self.seed
    }

    pub fn max_step(&self) -> usize {
        self.max_step
    }

    pub fn cache(&self) -> &TransformCache {
        &self.cache
    }

    /// Counters accumulated so far in this run.
    pub fn statistics(&self) -> &Statistics {
        self.cache.statistics()
    }

    /// Evaluate every sequence of exactly `depth` labels.
    pub fn step(&mut self, depth: usize) -> Result<StepResult> {
        info!("Step {}", depth);

        let sequences: Vec<_> = SequenceGenerator::new(self.alphabet.labels(), depth)?.collect();
        self.cache
            .statistics_mut()
            .add(Counters::SequencesEnumerated, sequences.len() as u64);

        let mut point_sets = Vec::with_capacity(sequences.len());
        for sequence in &sequences {
            point_sets.push(self.cache.apply(sequence, &self.seed, &self.alphabet)?);
        }

        Ok(StepResult {
            depth,
            sequences,
            point_sets,
        })
    }

    /// Evaluate all depths without rendering.
    pub fn generate_steps(&mut self) -> Result<Vec<StepResult>> {
        (1..=self.max_step).map(|depth| self.step(depth)).collect()
    }

    /// Evaluate all depths, rendering the cumulative collection after each.
    pub fn run(&mut self, renderer: &mut dyn Renderer, plot: &PlotSpec) -> Result<RunSummary> {
        debug!(
            "Running {} labels to depth {} with renderer {}",
            self.alphabet.len(),
            self.max_step,
            renderer.name()
        );

        let mut cumulative = vec![Arc::clone(&self.seed)];
        let mut steps = Vec::with_capacity(self.max_step);

        for depth in 1..=self.max_step {
            let step = self.step(depth)?;
            cumulative.extend(step.point_sets.iter().cloned());

            let request = RenderRequest {
                depth,
                title: plot.title(depth),
                point_sets: &cumulative,
                seed: &self.seed,
                style: &plot.style,
                include_seed: plot.include_seed,
                output_dir: &plot.output_dir,
                file_name: RenderRequest::file_name_for(depth),
            };
            renderer.render(&request)?;
            self.cache.statistics_mut().increment(Counters::RenderRequests);

            info!("Completed step {} with {} new triangles", depth, step.len());
            steps.push(step);
        }

        debug!("Run statistics: {}", self.statistics());

        Ok(RunSummary {
            steps,
            cumulative,
            statistics: self.statistics().clone(),
        })
    }
}
