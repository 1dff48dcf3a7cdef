// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for triangle orbits.
//!
//! This module contains type-safe representations of the primitives:
//! - Label: Single-symbol names for alphabet matrices
//! - PointSet: Immutable 2×N arrays of triangle vertices
//! - constants: The fixed matrices and seed triangles

pub mod constants;
pub mod label;
pub mod point_set;

// Re-export for convenience
pub use constants::SeedTriangle;
pub use label::{labels, Label};
pub use point_set::PointSet;
