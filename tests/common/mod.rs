// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use nalgebra::Matrix2;
use triangle_orbits::engine::{PlotSpec, RenderRequest, Renderer};
use triangle_orbits::error::Result;
use triangle_orbits::geometry::{Label, PointSet};
use triangle_orbits::render::Style;
use triangle_orbits::Alphabet;

pub const A: [[f64; 2]; 2] = [[2.0, -1.0], [1.0, 0.0]];
pub const B: [[f64; 2]; 2] = [[3.0, 1.0], [-4.0, -1.0]];

pub fn matrix(rows: [[f64; 2]; 2]) -> Matrix2<f64> {
    Matrix2::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
}

/// Alphabet `{A, B}` using the first two monodromy matrices.
pub fn two_labels() -> Alphabet {
    Alphabet::new(vec![
        (Label::new('A'), matrix(A)),
        (Label::new('B'), matrix(B)),
    ])
    .unwrap()
}

/// The standard seed triangle (-1,-1), (2,-1), (-1,2).
pub fn seed() -> PointSet {
    PointSet::from_rows(&[-1.0, 2.0, -1.0], &[-1.0, -1.0, 2.0]).unwrap()
}

pub fn plot() -> PlotSpec {
    PlotSpec {
        title_prefix: "(test)".to_string(),
        style: Style::default(),
        include_seed: true,
        output_dir: PathBuf::from("unused"),
    }
}

/// What one render request carried.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub depth: usize,
    pub title: String,
    pub file_name: String,
    pub point_sets: Vec<Arc<PointSet>>,
}

/// A renderer that keeps every request for later inspection.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub requests: Vec<Recorded>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<()> {
        self.requests.push(Recorded {
            depth: request.depth,
            title: request.title.clone(),
            file_name: request.file_name.clone(),
            point_sets: request.point_sets.to_vec(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "Recording"
    }
}

/// Raw bit patterns of every coordinate, for exact reproducibility checks.
pub fn bits(points: &PointSet) -> Vec<u64> {
    points.as_matrix().iter().map(|v| v.to_bits()).collect()
}
