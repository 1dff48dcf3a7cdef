// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `orbits`: render triangle orbits for the preset variants.
//!
//! ```text
//! orbits                              # standard variant, depths 1..=8
//! orbits --variant hk --k 2 --k 9     # two h_k runs
//! orbits --config run.json --dry-run  # log what would be drawn
//! orbits --variant monodromy trace ABC
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;

use triangle_orbits::config::RunConfig;
use triangle_orbits::engine::{NullRenderer, Renderer};
use triangle_orbits::geometry::SeedTriangle;
use triangle_orbits::render::{NamedColor, PngRenderer};
use triangle_orbits::sequence::Sequence;
use triangle_orbits::transform::trace_sequence;
use triangle_orbits::variants::VariantKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON run configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// standard, hk, non-dense or monodromy
    #[arg(short, long)]
    variant: Option<VariantKind>,

    /// k value for the hk variant (repeatable)
    #[arg(long = "k")]
    k: Vec<u32>,

    /// Deepest sequence length to plot
    #[arg(short, long)]
    max_step: Option<usize>,

    /// standard, non-dense, mirrored-non-dense or large
    #[arg(long)]
    seed: Option<SeedTriangle>,

    /// Fill colour of transformed triangles
    #[arg(long)]
    color: Option<NamedColor>,

    /// Directory the variant output folders are created in
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not draw the seed triangle
    #[arg(long)]
    no_seed: bool,

    /// Run the transformations but write no files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every intermediate point set of one sequence
    Trace {
        /// Labels to apply, left to right
        sequence: String,
    },
}

impl Args {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if !self.k.is_empty() {
            config.hk_values = self.k.clone();
        }
        if self.max_step.is_some() {
            config.max_step = self.max_step;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.color.is_some() {
            config.color = self.color;
        }
        if let Some(output) = &self.output {
            config.output_root = output.clone();
        }
        if self.no_seed {
            config.include_seed = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let config = args.run_config()?;
    let plans = config.plans().context("Invalid run configuration")?;
    if plans.is_empty() {
        bail!("Configuration selects no runs (hk with no k values?)");
    }

    if let Some(Command::Trace { sequence }) = &args.command {
        for plan in &plans {
            let parsed = Sequence::parse(sequence, &plan.alphabet)
                .with_context(|| format!("Cannot trace '{}' for {}", sequence, plan.variant))?;
            let steps = trace_sequence(&parsed, &plan.seed, &plan.alphabet)?;
            println!("{}:", plan.variant);
            for (i, points) in steps.iter().enumerate() {
                let applied = match i {
                    0 => "seed".to_string(),
                    _ => parsed.split_at(i).0.to_string(),
                };
                println!("Step {} ({}):\n{}", i, applied, points);
            }
        }
        return Ok(());
    }

    let mut renderer: Box<dyn Renderer> = if args.dry_run {
        Box::new(NullRenderer)
    } else {
        Box::new(PngRenderer::new(config.render.clone()))
    };

    for plan in plans {
        let variant = plan.variant;
        let summary = plan
            .execute(renderer.as_mut())
            .with_context(|| format!("Run {} failed", variant))?;
        info!(
            "Finished {}: {} point sets ({})",
            variant,
            summary.cumulative.len(),
            summary.statistics
        );
    }
    Ok(())
}
