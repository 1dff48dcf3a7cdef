// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbits of a triangle under words in a small alphabet of 2×2 matrices.
//!
//! Starting from a seed triangle, every sequence of labels up to a maximum
//! length is applied to the seed and the images are accumulated depth by
//! depth, producing one plot per depth.
//!
//! # Architecture
//!
//! ## Immutable run data
//!
//! Built once per run and only read afterwards:
//! - [`Alphabet`]: labels and their matrices, inverses precomputed by
//!   [`AlphabetBuilder`]
//! - The seed [`PointSet`]
//!
//! ## Run state
//!
//! - [`TransformCache`]: exact sequence → transformed point set, with the
//!   run's [`Statistics`]
//! - The cumulative collection of point sets, seed first
//!
//! # Pipeline
//!
//! 1. [`SequenceGenerator`]: all k^d sequences of length d, lexicographically
//! 2. [`TransformCache::apply`]: fold each sequence over the seed
//! 3. [`OrbitEngine::run`]: accumulate and hand one [`RenderRequest`] per depth
//!    to a [`Renderer`]
//!
//! Labels are applied left to right by left-multiplication: `AB` maps `P` to
//! `B·A·P`.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use triangle_orbits::{NullRenderer, OrbitEngine, Variant};
//!
//! let variant = Variant::Monodromy;
//! let mut engine = OrbitEngine::new(
//!     variant.alphabet().unwrap(),
//!     variant.seed().point_set().unwrap(),
//!     variant.default_max_step(),
//! )
//! .unwrap();
//! let summary = engine
//!     .run(&mut NullRenderer, &variant.plot_spec(Path::new(".")))
//!     .unwrap();
//! assert_eq!(summary.cumulative.len(), 4);
//! ```

pub mod alphabet;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod render;
pub mod sequence;
pub mod state;
pub mod transform;
pub mod variants;

// Re-export commonly used types
pub use alphabet::{Alphabet, AlphabetBuilder};
pub use config::{RunConfig, RunPlan};
pub use engine::{NullRenderer, OrbitEngine, PlotSpec, RenderRequest, Renderer, RunSummary};
pub use error::{OrbitError, Result};
pub use geometry::{Label, PointSet, SeedTriangle};
pub use sequence::{generate_sequences, Sequence, SequenceGenerator};
pub use state::{Counters, Statistics};
pub use transform::{apply_sequence, trace_sequence, TransformCache};
pub use variants::Variant;
