// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Renderer trait: the hand-off from the depth orchestrator to image output.
//!
//! The engine emits exactly one [`RenderRequest`] per depth. A renderer never
//! influences the transformations; it only consumes the accumulated geometry
//! together with the cosmetic plot settings.
//!
//! # Example
//!
//! ```
//! use triangle_orbits::engine::{RenderRequest, Renderer};
//! use triangle_orbits::error::Result;
//!
//! #[derive(Debug, Default)]
//! struct CountingRenderer {
//!     sizes: Vec<usize>,
//! }
//!
//! impl Renderer for CountingRenderer {
//!     fn render(&mut self, request: &RenderRequest<'_>) -> Result<()> {
//!         self.sizes.push(request.point_sets.len());
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Counting"
//!     }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::error::Result;
use crate::geometry::PointSet;
use crate::render::Style;

/// Everything a renderer needs to produce the image for one depth.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Depth just completed (1-based).
    pub depth: usize,
    pub title: String,
    /// Cumulative collection: the seed first, then every transformed point
    /// set of depths 1..=depth in generation order.
    pub point_sets: &'a [Arc<PointSet>],
    pub seed: &'a PointSet,
    pub style: &'a Style,
    /// Whether the seed should be drawn in its own style.
    pub include_seed: bool,
    pub output_dir: &'a Path,
    /// Depth-indexed file name hint, e.g. `Step_3.png`.
    pub file_name: String,
}

impl RenderRequest<'_> {
    /// File name hint for `depth`.
    pub fn file_name_for(depth: usize) -> String {
        format!("Step_{}.png", depth)
    }

    /// The cumulative collection without the leading seed.
    pub fn transformed(&self) -> &[Arc<PointSet>] {
        self.point_sets.get(1..).unwrap_or(&[])
    }
}

/// Consumer of per-depth render requests.
pub trait Renderer {
    /// Produce the output for one depth.
    ///
    /// An error aborts the run; the engine never retries.
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<()>;

    /// Optional: Get a name for this renderer (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Renderer that only logs what it would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<()> {
        info!(
            "[dry run] {} -> {} ({} triangles)",
            request.title,
            request.output_dir.join(&request.file_name).display(),
            request.transformed().len()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Null"
    }
}
