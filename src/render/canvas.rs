// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal alpha-blending rasterizer over an RGBA image.
//!
//! Coordinates passed in are plot coordinates; the canvas maps them through
//! its viewport (y up) onto pixels (y down). Orbit triangles grow quickly
//! with depth, so every primitive is clipped to the canvas before any pixel
//! loop runs.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::render::{RenderSettings, Viewport};

pub struct Canvas {
    image: RgbaImage,
    viewport: Viewport,
}

impl Canvas {
    /// A white canvas of the configured size.
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            image: RgbaImage::from_pixel(
                settings.width.max(1),
                settings.height.max(1),
                Rgba([255, 255, 255, 255]),
            ),
            viewport: settings.viewport,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Plot coordinates to continuous pixel coordinates.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let vp = &self.viewport;
        let px = (x - vp.x_min) / (vp.x_max - vp.x_min) * self.width() as f64;
        let py = (vp.y_max - y) / (vp.y_max - vp.y_min) * self.height() as f64;
        (px, py)
    }

    pub fn pixel(&self, px: u32, py: u32) -> [u8; 4] {
        self.image.get_pixel(px, py).0
    }

    fn blend(&mut self, px: u32, py: u32, rgb: [u8; 3], alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        let pixel = self.image.get_pixel_mut(px, py);
        for channel in 0..3 {
            let under = pixel.0[channel] as f32;
            let over = rgb[channel] as f32;
            pixel.0[channel] = (over * alpha + under * (1.0 - alpha)).round() as u8;
        }
    }

    /// Fill a polygon given in plot coordinates (even-odd rule, pixel centres).
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], rgb: [u8; 3], alpha: f32) {
        if points.len() < 3 {
            return;
        }
        let pixels: Vec<(f64, f64)> = points.iter().map(|&(x, y)| self.to_pixel(x, y)).collect();
        if pixels.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
            return;
        }

        let (width, height) = (self.width() as f64, self.height() as f64);
        let y_lo = pixels.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y_hi = pixels.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let x_lo = pixels.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x_hi = pixels.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        if y_hi < 0.0 || x_hi < 0.0 || y_lo > height || x_lo > width {
            return;
        }

        let first_row = (y_lo - 0.5).ceil().max(0.0) as u32;
        let last_row = ((y_hi - 0.5).floor().min(height - 1.0)) as i64;
        let mut crossings = Vec::with_capacity(pixels.len());

        for row in first_row as i64..=last_row {
            let yc = row as f64 + 0.5;
            crossings.clear();
            for i in 0..pixels.len() {
                let (x0, y0) = pixels[i];
                let (x1, y1) = pixels[(i + 1) % pixels.len()];
                if (y0 <= yc && yc < y1) || (y1 <= yc && yc < y0) {
                    crossings.push(x0 + (yc - y0) * (x1 - x0) / (y1 - y0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0);
                let end = (span[1] - 0.5).ceil().min(width);
                if start >= end {
                    continue;
                }
                for col in start as u32..end as u32 {
                    self.blend(col, row as u32, rgb, alpha);
                }
            }
        }
    }

    /// Draw a closed outline through `points` (plot coordinates).
    pub fn stroke_polygon(&mut self, points: &[(f64, f64)], rgb: [u8; 3], alpha: f32) {
        for i in 0..points.len() {
            self.line(points[i], points[(i + 1) % points.len()], rgb, alpha);
        }
    }

    /// Draw a one-pixel line between two points in plot coordinates.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), rgb: [u8; 3], alpha: f32) {
        let p0 = self.to_pixel(from.0, from.1);
        let p1 = self.to_pixel(to.0, to.1);
        let Some(((x0, y0), (x1, y1))) = clip_segment(p0, p1, self.width() as f64, self.height() as f64)
        else {
            return;
        };

        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as u32;
        let mut last = None;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let px = (x0 + (x1 - x0) * t).floor();
            let py = (y0 + (y1 - y0) * t).floor();
            let px = (px as i64).clamp(0, self.width() as i64 - 1) as u32;
            let py = (py as i64).clamp(0, self.height() as i64 - 1) as u32;
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            self.blend(px, py, rgb, alpha);
        }
    }

    /// Grid lines every `step` plot units, anchored at the origin.
    ///
    /// A direction needing more lines than the canvas has pixels is skipped.
    pub fn grid(&mut self, step: f64, rgb: [u8; 3], alpha: f32) {
        if step <= 0.0 || !step.is_finite() {
            return;
        }
        let vp = self.viewport;
        for x in grid_positions(vp.x_min, vp.x_max, step, self.width()) {
            self.line((x, vp.y_min), (x, vp.y_max), rgb, alpha);
        }
        for y in grid_positions(vp.y_min, vp.y_max, step, self.height()) {
            self.line((vp.x_min, y), (vp.x_max, y), rgb, alpha);
        }
    }

    /// The x and y axes.
    pub fn axes(&mut self, rgb: [u8; 3]) {
        let vp = self.viewport;
        self.line((vp.x_min, 0.0), (vp.x_max, 0.0), rgb, 1.0);
        self.line((0.0, vp.y_min), (0.0, vp.y_max), rgb, 1.0);
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Multiples of `step` within `[lo, hi]`, or none if there would be more
/// than `max_lines` of them.
fn grid_positions(lo: f64, hi: f64, step: f64, max_lines: u32) -> impl Iterator<Item = f64> {
    let first = (lo / step).ceil() * step;
    let last = ((hi - first) / step).floor();
    let count = if last.is_finite() && last >= 0.0 && last < max_lines as f64 {
        last as u64 + 1
    } else {
        0
    };
    (0..count).map(move |i| first + i as f64 * step)
}

/// Liang–Barsky clip of a segment to `[0, width] × [0, height]`.
fn clip_segment(
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    width: f64,
    height: f64,
) -> Option<((f64, f64), (f64, f64))> {
    if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (x1 - x0, y1 - y0);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [(-dx, x0), (dx, width - x0), (-dy, y0), (dy, height - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (x0 + t0 * dx, y0 + t0 * dy),
        (x0 + t1 * dx, y0 + t1 * dy),
    ))
}
