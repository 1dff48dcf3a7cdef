// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable label → matrix alphabets.
//!
//! An [`Alphabet`] is built once per run (usually through
//! [`AlphabetBuilder`]) and never changes afterwards. It plays the same role
//! for a run as precomputed lookup tables do for a search: shared, read-only
//! and cheap to consult.

pub mod builder;

pub use builder::AlphabetBuilder;

use std::collections::HashMap;

use nalgebra::Matrix2;

use crate::error::{OrbitError, Result};
use crate::geometry::Label;

/// An ordered set of distinct labels with their matrices.
///
/// Label order is significant: sequences are enumerated lexicographically by
/// position in this order.
#[derive(Debug, Clone)]
pub struct Alphabet {
    labels: Vec<Label>,
    matrices: Vec<Matrix2<f64>>,
    index: HashMap<Label, usize>,
}

impl Alphabet {
    /// Create an alphabet from `(label, matrix)` entries in enumeration order.
    ///
    /// Fails with `EmptyAlphabet` or `DuplicateLabel`.
    pub fn new(entries: Vec<(Label, Matrix2<f64>)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(OrbitError::EmptyAlphabet);
        }

        let mut labels = Vec::with_capacity(entries.len());
        let mut matrices = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for (position, (label, matrix)) in entries.into_iter().enumerate() {
            if index.insert(label, position).is_some() {
                return Err(OrbitError::DuplicateLabel(label));
            }
            labels.push(label);
            matrices.push(matrix);
        }

        Ok(Self {
            labels,
            matrices,
            index,
        })
    }

    /// Labels in enumeration order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: Label) -> bool {
        self.index.contains_key(&label)
    }

    /// Look up the matrix for `label`.
    pub fn matrix(&self, label: Label) -> Result<&Matrix2<f64>> {
        self.index
            .get(&label)
            .map(|&i| &self.matrices[i])
            .ok_or_else(|| self.unknown(label.symbol()))
    }

    /// Resolve a raw symbol to one of this alphabet's labels.
    pub fn label_for(&self, symbol: char) -> Result<Label> {
        Label::try_new(symbol)
            .filter(|label| self.contains(*label))
            .ok_or_else(|| self.unknown(symbol))
    }

    /// Iterate over `(label, matrix)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &Matrix2<f64>)> {
        self.labels.iter().copied().zip(self.matrices.iter())
    }

    /// The valid labels, sorted, as `"A, B, C"`.
    pub fn valid_labels(&self) -> String {
        let mut sorted = self.labels.clone();
        sorted.sort();
        sorted
            .iter()
            .map(|label| label.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn unknown(&self, symbol: char) -> OrbitError {
        OrbitError::UnknownLabel {
            label: symbol,
            valid: self.valid_labels(),
        }
    }
}
