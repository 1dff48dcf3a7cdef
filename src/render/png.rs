// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PNG renderer writing one `Step_{d}.png` per depth.
//!
//! Each output folder also gets a `manifest.json` listing the images written
//! to it so far, with their titles (the raster carries no text).

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::engine::{RenderRequest, Renderer};
use crate::error::Result;
use crate::geometry::PointSet;
use crate::render::{Canvas, NamedColor, RenderSettings};

/// Name of the per-folder index file.
pub const MANIFEST_FILE: &str = "manifest.json";

const GRID_COLOR: [u8; 3] = [176, 176, 176];
const GRID_ALPHA: f32 = 0.5;

/// One rendered image as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub depth: usize,
    pub title: String,
    pub file: String,
    /// Transformed triangles drawn (the seed is not counted).
    pub triangles: usize,
}

#[derive(Debug, Default)]
pub struct PngRenderer {
    settings: RenderSettings,
    manifests: BTreeMap<PathBuf, Vec<ManifestEntry>>,
}

impl PngRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            manifests: BTreeMap::new(),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Entries written so far for `output_dir`.
    pub fn manifest(&self, output_dir: &Path) -> &[ManifestEntry] {
        self.manifests
            .get(output_dir)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn draw(&self, request: &RenderRequest<'_>) -> Canvas {
        let style = request.style;
        let mut canvas = Canvas::new(&self.settings);
        canvas.grid(self.settings.grid_step, GRID_COLOR, GRID_ALPHA);

        if request.include_seed {
            canvas.fill_polygon(&vertices(request.seed), style.seed_fill.rgb(), style.seed_alpha);
        }

        let edge = style.edge.rgb();
        for (i, points) in request.transformed().iter().enumerate() {
            let polygon = vertices(points);
            canvas.fill_polygon(&polygon, style.fill_for(i).rgb(), style.fill_alpha);
            canvas.stroke_polygon(&polygon, edge, style.edge_alpha);
        }

        canvas.axes(NamedColor::Black.rgb());
        canvas
    }

    fn write_manifest(&self, output_dir: &Path) -> Result<()> {
        let path = output_dir.join(MANIFEST_FILE);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, self.manifest(output_dir))?;
        writer.flush()?;
        debug!("Updated {}", path.display());
        Ok(())
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<()> {
        self.settings.validate()?;
        fs::create_dir_all(request.output_dir)?;

        let canvas = self.draw(request);
        let path = request.output_dir.join(&request.file_name);
        info!("Saving plot to: {}", path.display());
        canvas.save(&path)?;

        self.manifests
            .entry(request.output_dir.to_path_buf())
            .or_default()
            .push(ManifestEntry {
                depth: request.depth,
                title: request.title.clone(),
                file: request.file_name.clone(),
                triangles: request.transformed().len(),
            });
        self.write_manifest(request.output_dir)
    }

    fn name(&self) -> &str {
        "Png"
    }
}

fn vertices(points: &PointSet) -> Vec<(f64, f64)> {
    points.points().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Style, Viewport};
    use std::sync::Arc;

    fn settings() -> RenderSettings {
        RenderSettings {
            width: 40,
            height: 40,
            viewport: Viewport::default(),
            grid_step: 5.0,
        }
    }

    #[test]
    fn test_writes_image_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Spanning");
        let seed = PointSet::from_rows(&[-1.0, 2.0, -1.0], &[-1.0, -1.0, 2.0]).unwrap();
        let image = PointSet::from_rows(&[1.0, 5.0, 1.0], &[1.0, 1.0, 5.0]).unwrap();
        let sets = vec![Arc::new(seed.clone()), Arc::new(image)];
        let style = Style::default();
        let request = RenderRequest {
            depth: 1,
            title: "Step 1: Accumulated Transformations".to_string(),
            point_sets: &sets,
            seed: &seed,
            style: &style,
            include_seed: true,
            output_dir: &out,
            file_name: RenderRequest::file_name_for(1),
        };

        let mut renderer = PngRenderer::new(settings());
        renderer.render(&request).unwrap();

        let png = image::open(out.join("Step_1.png")).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (40, 40));

        let manifest: Vec<ManifestEntry> =
            serde_json::from_reader(File::open(out.join(MANIFEST_FILE)).unwrap()).unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest[0].file, "Step_1.png");
        assert_eq!(manifest[0].triangles, 1);
        assert_eq!(renderer.manifest(&out), manifest.as_slice());
    }

    #[test]
    fn test_seed_is_drawn_only_when_requested() {
        let seed = PointSet::from_rows(&[-8.0, -2.0, -8.0], &[-8.0, -8.0, -2.0]).unwrap();
        let sets = vec![Arc::new(seed.clone())];
        let style = Style::default();
        let mut request = RenderRequest {
            depth: 1,
            title: String::new(),
            point_sets: &sets,
            seed: &seed,
            style: &style,
            include_seed: true,
            output_dir: Path::new("unused"),
            file_name: RenderRequest::file_name_for(1),
        };
        let renderer = PngRenderer::new(RenderSettings {
            grid_step: 0.0,
            ..settings()
        });

        // Plot (-6, -6) lands on pixel (8, 32).
        let with_seed = renderer.draw(&request);
        assert_ne!(with_seed.pixel(8, 32), [255, 255, 255, 255]);

        request.include_seed = false;
        let without_seed = renderer.draw(&request);
        assert_eq!(without_seed.pixel(8, 32), [255, 255, 255, 255]);
    }

    #[test]
    fn test_palette_colours_each_triangle() {
        let seed = PointSet::from_rows(&[-1.0, 2.0, -1.0], &[-1.0, -1.0, 2.0]).unwrap();
        // Two separated triangles around plot (-6, -6) and (6, 6).
        let left = PointSet::from_rows(&[-8.0, -2.0, -8.0], &[-8.0, -8.0, -2.0]).unwrap();
        let right = PointSet::from_rows(&[8.0, 2.0, 8.0], &[8.0, 8.0, 2.0]).unwrap();
        let sets = vec![Arc::new(seed.clone()), Arc::new(left), Arc::new(right)];
        let style = Style {
            palette: vec![NamedColor::Red, NamedColor::Blue],
            fill_alpha: 1.0,
            ..Style::default()
        };
        let request = RenderRequest {
            depth: 1,
            title: String::new(),
            point_sets: &sets,
            seed: &seed,
            style: &style,
            include_seed: false,
            output_dir: Path::new("unused"),
            file_name: RenderRequest::file_name_for(1),
        };
        let renderer = PngRenderer::new(RenderSettings {
            grid_step: 0.0,
            ..settings()
        });

        let canvas = renderer.draw(&request);
        let [r, g, b] = NamedColor::Red.rgb();
        assert_eq!(canvas.pixel(8, 32), [r, g, b, 255]);
        // Plot (6, 6) lands on pixel (32, 8).
        let [r, g, b] = NamedColor::Blue.rgb();
        assert_eq!(canvas.pixel(32, 8), [r, g, b, 255]);
    }

    #[test]
    fn test_invalid_settings_fail_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Spanning");
        let seed = PointSet::from_rows(&[0.0], &[0.0]).unwrap();
        let sets = vec![Arc::new(seed.clone())];
        let style = Style::default();
        let request = RenderRequest {
            depth: 1,
            title: String::new(),
            point_sets: &sets,
            seed: &seed,
            style: &style,
            include_seed: true,
            output_dir: &out,
            file_name: RenderRequest::file_name_for(1),
        };
        let mut renderer = PngRenderer::new(RenderSettings {
            width: 100_000,
            height: 100_000,
            ..settings()
        });
        assert!(matches!(
            renderer.render(&request),
            Err(crate::error::OrbitError::InvalidRenderSettings(_))
        ));
        assert!(!out.exists());
    }
}
