// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder that finalizes base matrices and their inverses into an alphabet.
//!
//! Inverses are computed exactly once, in [`AlphabetBuilder::build`]. After
//! that they are ordinary matrices and nothing downstream can tell them apart
//! from the base matrices.
//!
//! # Example
//!
//! ```
//! use nalgebra::Matrix2;
//! use triangle_orbits::alphabet::AlphabetBuilder;
//! use triangle_orbits::geometry::Label;
//!
//! let alphabet = AlphabetBuilder::new()
//!     .matrix(Label::new('T'), Matrix2::new(1.0, 1.0, 0.0, 1.0))
//!     .inverse(Label::new('I'), Label::new('T'))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     alphabet.matrix(Label::new('I')).unwrap(),
//!     &Matrix2::new(1.0, -1.0, 0.0, 1.0)
//! );
//! ```

use log::debug;
use nalgebra::Matrix2;

use crate::alphabet::Alphabet;
use crate::error::{OrbitError, Result};
use crate::geometry::Label;

#[derive(Debug, Clone)]
enum Entry {
    Base(Label, Matrix2<f64>),
    Inverse { label: Label, of: Label },
}

/// Collects named matrices and inverse declarations in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct AlphabetBuilder {
    entries: Vec<Entry>,
}

impl AlphabetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base matrix under `label`.
    pub fn matrix(mut self, label: Label, matrix: Matrix2<f64>) -> Self {
        self.entries.push(Entry::Base(label, matrix));
        self
    }

    /// Add the inverse of the base matrix `of` under `label`.
    ///
    /// `of` may be declared before or after this call.
    pub fn inverse(mut self, label: Label, of: Label) -> Self {
        self.entries.push(Entry::Inverse { label, of });
        self
    }

    /// Compute the inverses and produce the finished alphabet.
    ///
    /// Fails with `NonInvertible` for a singular base, `MissingBase` for an
    /// inverse of an undeclared label, and with the [`Alphabet::new`] errors.
    pub fn build(self) -> Result<Alphabet> {
        let base = |wanted: Label| {
            self.entries.iter().find_map(|entry| match entry {
                Entry::Base(label, matrix) if *label == wanted => Some(*matrix),
                _ => None,
            })
        };

        let mut resolved = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match *entry {
                Entry::Base(label, matrix) => resolved.push((label, matrix)),
                Entry::Inverse { label, of } => {
                    let matrix = base(of).ok_or(OrbitError::MissingBase { label, of })?;
                    let inverse = matrix.try_inverse().ok_or(OrbitError::NonInvertible(of))?;
                    debug!("Inverse {} of {} = {:?}", label, of, inverse);
                    resolved.push((label, inverse));
                }
            }
        }

        Alphabet::new(resolved)
    }
}
