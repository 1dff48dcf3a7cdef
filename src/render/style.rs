// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cosmetic settings for one plot series and for the raster itself.
//!
//! Nothing here affects the transformations; these are handed through the
//! render request untouched.

use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};
use crate::render::NamedColor;

/// Largest accepted canvas side in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Fill and edge styling for the seed and transformed triangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Fill colour of transformed triangles.
    pub fill: NamedColor,
    /// Per-triangle fill colours, cycled in drawing order. Empty means `fill`
    /// for every triangle.
    pub palette: Vec<NamedColor>,
    pub fill_alpha: f32,
    /// Fill colour of the seed triangle.
    pub seed_fill: NamedColor,
    pub seed_alpha: f32,
    /// Outline colour of transformed triangles.
    pub edge: NamedColor,
    pub edge_alpha: f32,
}

impl Style {
    /// The default style with a different fill colour.
    pub fn with_fill(fill: NamedColor) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }

    /// Fill colour of the `index`th transformed triangle.
    pub fn fill_for(&self, index: usize) -> NamedColor {
        match self.palette.len() {
            0 => self.fill,
            n => self.palette[index % n],
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill: NamedColor::Purple,
            palette: Vec::new(),
            fill_alpha: 0.6,
            seed_fill: NamedColor::Gray,
            seed_alpha: 0.5,
            edge: NamedColor::Black,
            edge_alpha: 0.8,
        }
    }
}

/// The visible region in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// Raster settings for the PNG renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub viewport: Viewport,
    /// Spacing of grid lines in plot units; 0 disables the grid.
    pub grid_step: f64,
}

impl RenderSettings {
    /// Reject sizes, viewports and grid spacings that cannot be drawn.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(OrbitError::InvalidRenderSettings(format!(
                    "{} {} outside 1..={}",
                    name, value, MAX_DIMENSION
                )));
            }
        }
        let vp = &self.viewport;
        let finite = [vp.x_min, vp.x_max, vp.y_min, vp.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || vp.x_min >= vp.x_max || vp.y_min >= vp.y_max {
            return Err(OrbitError::InvalidRenderSettings(format!(
                "empty or non-finite viewport {:?}",
                vp
            )));
        }
        if !self.grid_step.is_finite() || self.grid_step < 0.0 {
            return Err(OrbitError::InvalidRenderSettings(format!(
                "grid_step {} must be finite and not negative",
                self.grid_step
            )));
        }
        Ok(())
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        // 10in square at 150 dpi.
        RenderSettings {
            width: 1500,
            height: 1500,
            viewport: Viewport::default(),
            grid_step: 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_style_uses_defaults() {
        let style: Style = serde_json::from_str(r#"{"fill": "green"}"#).unwrap();
        assert_eq!(style.fill, NamedColor::Green);
        assert_eq!(style.seed_fill, NamedColor::Gray);
        assert_eq!(style.fill_alpha, 0.6);
    }

    #[test]
    fn test_fill_for_cycles_palette() {
        let mut style = Style::with_fill(NamedColor::Blue);
        assert_eq!(style.fill_for(7), NamedColor::Blue);
        style.palette = vec![NamedColor::Orange, NamedColor::Green];
        assert_eq!(style.fill_for(0), NamedColor::Orange);
        assert_eq!(style.fill_for(1), NamedColor::Green);
        assert_eq!(style.fill_for(2), NamedColor::Orange);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{"width": 300, "viewport": {"x_max": 20.0}}"#).unwrap();
        assert_eq!(settings.width, 300);
        assert_eq!(settings.height, 1500);
        assert_eq!(settings.viewport.x_max, 20.0);
        assert_eq!(settings.viewport.x_min, -10.0);
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(RenderSettings::default().validate().is_ok());
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{"width": 100000, "height": 100000}"#).unwrap();
        assert!(matches!(
            settings.validate(),
            Err(OrbitError::InvalidRenderSettings(_))
        ));
        let settings = RenderSettings {
            height: 0,
            ..RenderSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_viewport_and_grid_rejected() {
        let inverted = RenderSettings {
            viewport: Viewport {
                x_min: 5.0,
                x_max: -5.0,
                ..Viewport::default()
            },
            ..RenderSettings::default()
        };
        assert!(inverted.validate().is_err());

        let negative = RenderSettings {
            grid_step: -1.0,
            ..RenderSettings::default()
        };
        assert!(negative.validate().is_err());

        // Tiny steps are accepted; the canvas skips grids it cannot draw.
        let tiny = RenderSettings {
            grid_step: 1e-16,
            ..RenderSettings::default()
        };
        assert!(tiny.validate().is_ok());
    }
}
