// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Preset alphabets, seeds and plot settings.
//!
//! Every preset runs through the same [`OrbitEngine`](crate::engine::OrbitEngine);
//! a variant only supplies data.
//!
//! | variant     | labels | seed      | depth | folder               |
//! |-------------|--------|-----------|-------|----------------------|
//! | `standard`  | ABCDEF | standard  | 8     | `Spanning`           |
//! | `hk(k)`     | THIK   | standard  | 8     | `Spanning_h{k}`      |
//! | `non-dense` | ABCDEF | non-dense | 9     | `Spanning_non_dense` |
//! | `monodromy` | ABC    | standard  | 1     | `Monodromy`          |

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::alphabet::{Alphabet, AlphabetBuilder};
use crate::engine::PlotSpec;
use crate::error::Result;
use crate::geometry::constants::{h_k, matrix, MATRIX_A, MATRIX_B, MATRIX_C, MATRIX_T};
use crate::geometry::{Label, SeedTriangle};
use crate::render::{NamedColor, Style};

/// k values run when an `hk` configuration names none.
pub const DEFAULT_HK_VALUES: [u32; 4] = [2, 4, 5, 9];

/// A fully determined preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// A, B, C and their inverses D, E, F.
    Standard,
    /// t, h_k and their inverses as T, H, I, K.
    Hk(u32),
    /// As `Standard`, from a seed where the orbit is not dense.
    NonDense,
    /// A, B, C only, one step.
    Monodromy,
}

/// Preset name without parameters, as written in configuration and on the
/// command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    #[default]
    Standard,
    Hk,
    NonDense,
    Monodromy,
}

impl VariantKind {
    /// Expand into concrete variants; only `Hk` uses `hk_values`.
    pub fn variants(self, hk_values: &[u32]) -> Vec<Variant> {
        match self {
            VariantKind::Standard => vec![Variant::Standard],
            VariantKind::Hk => hk_values.iter().map(|&k| Variant::Hk(k)).collect(),
            VariantKind::NonDense => vec![Variant::NonDense],
            VariantKind::Monodromy => vec![Variant::Monodromy],
        }
    }
}

impl Variant {
    pub fn kind(self) -> VariantKind {
        match self {
            Variant::Standard => VariantKind::Standard,
            Variant::Hk(_) => VariantKind::Hk,
            Variant::NonDense => VariantKind::NonDense,
            Variant::Monodromy => VariantKind::Monodromy,
        }
    }

    /// The labelled matrices, in enumeration order.
    pub fn alphabet(self) -> Result<Alphabet> {
        let l = Label::new;
        let builder = AlphabetBuilder::new();
        let builder = match self {
            Variant::Standard | Variant::NonDense => builder
                .matrix(l('A'), matrix(MATRIX_A))
                .matrix(l('B'), matrix(MATRIX_B))
                .matrix(l('C'), matrix(MATRIX_C))
                .inverse(l('D'), l('A'))
                .inverse(l('E'), l('B'))
                .inverse(l('F'), l('C')),
            Variant::Hk(k) => builder
                .matrix(l('T'), matrix(MATRIX_T))
                .matrix(l('H'), h_k(k))
                .inverse(l('I'), l('T'))
                .inverse(l('K'), l('H')),
            Variant::Monodromy => builder
                .matrix(l('A'), matrix(MATRIX_A))
                .matrix(l('B'), matrix(MATRIX_B))
                .matrix(l('C'), matrix(MATRIX_C)),
        };
        builder.build()
    }

    pub fn seed(self) -> SeedTriangle {
        match self {
            Variant::NonDense => SeedTriangle::NonDense,
            _ => SeedTriangle::Standard,
        }
    }

    pub fn default_max_step(self) -> usize {
        match self {
            Variant::Standard | Variant::Hk(_) => 8,
            Variant::NonDense => 9,
            Variant::Monodromy => 1,
        }
    }

    /// Fill colour of transformed triangles.
    pub fn color(self) -> NamedColor {
        match self {
            Variant::Hk(2) => NamedColor::Blue,
            Variant::Hk(4) => NamedColor::Green,
            Variant::Hk(5) => NamedColor::Red,
            Variant::Monodromy => NamedColor::Orange,
            _ => NamedColor::Purple,
        }
    }

    pub fn output_folder(self) -> String {
        match self {
            Variant::Standard => "Spanning".to_string(),
            Variant::Hk(k) => format!("Spanning_h{}", k),
            Variant::NonDense => "Spanning_non_dense".to_string(),
            Variant::Monodromy => "Monodromy".to_string(),
        }
    }

    /// Appended to every plot title; empty for `Standard`.
    pub fn title_prefix(self) -> String {
        match self {
            Variant::Standard => String::new(),
            Variant::Hk(k) => format!("(h_{} matrices)", k),
            Variant::NonDense => "(Non dense start)".to_string(),
            Variant::Monodromy => "(Monodromy)".to_string(),
        }
    }

    /// Per-image colours; only `Monodromy` gives each matrix its own.
    pub fn palette(self) -> Vec<NamedColor> {
        match self {
            Variant::Monodromy => vec![NamedColor::Orange, NamedColor::Green, NamedColor::Red],
            _ => Vec::new(),
        }
    }

    /// Default plot settings with the output folder placed under `output_root`.
    pub fn plot_spec(self, output_root: &Path) -> PlotSpec {
        PlotSpec {
            title_prefix: self.title_prefix(),
            style: Style {
                palette: self.palette(),
                ..Style::with_fill(self.color())
            },
            include_seed: true,
            output_dir: output_root.join(self.output_folder()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Hk(k) => write!(f, "hk({})", k),
            other => write!(f, "{}", other.kind()),
        }
    }
}
