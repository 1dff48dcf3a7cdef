// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! A [`RunConfig`] is deserialized from JSON; every field has a default, so
//! `{}` is a valid configuration meaning "the standard variant, as shipped".
//! Command-line flags are applied on top by the binary.
//!
//! ```json
//! {
//!   "variant": "hk",
//!   "hk_values": [2, 9],
//!   "max_step": 5,
//!   "output_root": "plots",
//!   "render": { "width": 800, "height": 800 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::engine::{OrbitEngine, PlotSpec, Renderer, RunSummary};
use crate::error::{OrbitError, Result};
use crate::geometry::{PointSet, SeedTriangle};
use crate::render::{NamedColor, RenderSettings};
use crate::variants::{Variant, VariantKind, DEFAULT_HK_VALUES};

/// Everything needed to produce one or more orbit runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub variant: VariantKind,
    /// k values for the `hk` variant; one run per value.
    pub hk_values: Vec<u32>,
    /// Overrides the variant's depth.
    pub max_step: Option<usize>,
    /// Overrides the variant's seed triangle.
    pub seed: Option<SeedTriangle>,
    /// Overrides the variant's fill colour.
    pub color: Option<NamedColor>,
    pub fill_alpha: Option<f32>,
    pub seed_alpha: Option<f32>,
    /// Variant output folders are created under this directory.
    pub output_root: PathBuf,
    pub include_seed: bool,
    pub render: RenderSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            variant: VariantKind::Standard,
            hk_values: DEFAULT_HK_VALUES.to_vec(),
            max_step: None,
            seed: None,
            color: None,
            fill_alpha: None,
            seed_alpha: None,
            output_root: PathBuf::from("."),
            include_seed: true,
            render: RenderSettings::default(),
        }
    }
}

impl RunConfig {
    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the configuration into concrete runs, in execution order.
    ///
    /// Alphabets, seeds, depths and render settings are checked here, so an
    /// invalid configuration fails before any run starts.
    pub fn plans(&self) -> Result<Vec<RunPlan>> {
        self.render.validate()?;
        self.variant
            .variants(&self.hk_values)
            .into_iter()
            .map(|variant| self.plan(variant))
            .collect()
    }

    fn plan(&self, variant: Variant) -> Result<RunPlan> {
        let max_step = self.max_step.unwrap_or(variant.default_max_step());
        if max_step < 1 {
            return Err(OrbitError::InvalidLength(max_step));
        }

        let mut plot = variant.plot_spec(&self.output_root);
        plot.include_seed = self.include_seed;
        if let Some(color) = self.color {
            plot.style.fill = color;
            plot.style.palette.clear();
        }
        if let Some(alpha) = self.fill_alpha {
            plot.style.fill_alpha = alpha;
        }
        if let Some(alpha) = self.seed_alpha {
            plot.style.seed_alpha = alpha;
        }

        Ok(RunPlan {
            variant,
            alphabet: variant.alphabet()?,
            seed: self.seed.unwrap_or(variant.seed()).point_set()?,
            max_step,
            plot,
        })
    }
}

/// One resolved run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub variant: Variant,
    pub alphabet: Alphabet,
    pub seed: PointSet,
    pub max_step: usize,
    pub plot: PlotSpec,
}

impl RunPlan {
    /// Run the plan to completion with `renderer`.
    pub fn execute(self, renderer: &mut dyn Renderer) -> Result<RunSummary> {
        info!(
            "Running {} to depth {} into {}",
            self.variant,
            self.max_step,
            self.plot.output_dir.display()
        );
        let mut engine = OrbitEngine::new(self.alphabet, self.seed, self.max_step)?;
        engine.run(renderer, &self.plot)
    }
}
