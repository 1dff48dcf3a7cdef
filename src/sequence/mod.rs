// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Label sequences and their enumeration.
//!
//! A [`Sequence`] names one composed transformation: the labels are applied
//! to the seed points left to right. Sequences are also the exact keys of the
//! transformation cache.

pub mod generator;

pub use generator::{generate_sequences, SequenceGenerator};

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::geometry::Label;

/// An ordered tuple of labels, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Vec<Label>);

impl Sequence {
    pub fn new(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    /// Parse a label string such as `"ABD"` against `alphabet`.
    ///
    /// Every symbol must name a label of the alphabet; the first one that
    /// does not fails the whole parse with `UnknownLabel`.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self> {
        text.chars()
            .map(|symbol| alphabet.label_for(symbol))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    /// Length of the sequence (its depth).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into the first `n` labels and the rest.
    pub fn split_at(&self, n: usize) -> (Sequence, Sequence) {
        let (head, tail) = self.0.split_at(n);
        (Sequence(head.to_vec()), Sequence(tail.to_vec()))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.0 {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl From<Vec<Label>> for Sequence {
    fn from(labels: Vec<Label>) -> Self {
        Self(labels)
    }
}
