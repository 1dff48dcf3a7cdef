// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for alphabet construction, enumeration and rendering.

use crate::geometry::Label;

/// Every failure the orbit engine and its collaborators can report.
///
/// All core operations are pure, so none of these are retried: repeating the
/// call with the same inputs reproduces the same error.
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    /// An alphabet (or label list handed to the generator) has no labels.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The same label was declared twice.
    #[error("duplicate label '{0}' in alphabet")]
    DuplicateLabel(Label),

    /// A sequence length or depth bound below 1.
    #[error("invalid sequence length {0}: must be at least 1")]
    InvalidLength(usize),

    /// k^n sequences do not fit in memory addressing.
    #[error("{labels}^{length} sequences exceed the addressable range")]
    SequenceSpaceTooLarge { labels: usize, length: usize },

    /// A sequence refers to a label the alphabet does not define.
    #[error("unknown label '{label}'; use only: {valid}")]
    UnknownLabel { label: char, valid: String },

    /// An inverse was requested for a singular matrix.
    #[error("matrix '{0}' is not invertible")]
    NonInvertible(Label),

    /// An inverse refers to a base matrix that was never declared.
    #[error("inverse '{label}' refers to undeclared matrix '{of}'")]
    MissingBase { label: Label, of: Label },

    /// A point set that is not a non-empty 2×N array.
    #[error("invalid point set: {0}")]
    InvalidPointSet(String),

    /// Raster size, viewport or grid spacing that cannot be drawn.
    #[error("invalid render settings: {0}")]
    InvalidRenderSettings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrbitError>;
