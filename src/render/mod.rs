// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Image output for orbit runs.
//!
//! - `color`: Named colours used by variants and configuration
//! - `style`: Plot styling and raster settings
//! - `canvas`: Clipping, alpha-blending rasterizer
//! - `png`: The [`Renderer`](crate::engine::Renderer) that writes PNG files

pub mod canvas;
pub mod color;
pub mod png;
pub mod style;

pub use canvas::Canvas;
pub use color::NamedColor;
pub use png::{ManifestEntry, PngRenderer};
pub use style::{RenderSettings, Style, Viewport, MAX_DIMENSION};
