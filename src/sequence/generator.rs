// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of every fixed-length sequence over an alphabet.
//!
//! # Algorithm
//!
//! The generator keeps an odometer of label positions:
//! 1. Start with `[0, 0, ..., 0]` (the first label repeated)
//! 2. Emit the current sequence
//! 3. Increment the rightmost position that is below `k - 1`
//! 4. Reset all positions to its right to 0
//! 5. Stop when no position can be incremented
//!
//! This yields the Cartesian product with repetition in lexicographic order
//! of alphabet position, exactly `k^n` sequences.

use std::collections::HashSet;

use crate::error::{OrbitError, Result};
use crate::geometry::Label;
use crate::sequence::Sequence;

/// Lazy iterator over all `n`-length sequences of a label list.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    labels: Vec<Label>,
    odometer: Vec<usize>,
    remaining: usize,
}

impl SequenceGenerator {
    /// Validate the inputs and position the odometer on the first sequence.
    ///
    /// Fails with `InvalidLength` for `length < 1`, `EmptyAlphabet`,
    /// `DuplicateLabel`, or `SequenceSpaceTooLarge` when `k^n` overflows.
    pub fn new(labels: &[Label], length: usize) -> Result<Self> {
        if length < 1 {
            return Err(OrbitError::InvalidLength(length));
        }
        if labels.is_empty() {
            return Err(OrbitError::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for &label in labels {
            if !seen.insert(label) {
                return Err(OrbitError::DuplicateLabel(label));
            }
        }

        let total = u32::try_from(length)
            .ok()
            .and_then(|exp| labels.len().checked_pow(exp))
            .ok_or(OrbitError::SequenceSpaceTooLarge {
                labels: labels.len(),
                length,
            })?;

        Ok(Self {
            labels: labels.to_vec(),
            odometer: vec![0; length],
            remaining: total,
        })
    }

    fn advance(&mut self) {
        let last = self.labels.len() - 1;
        for pos in (0..self.odometer.len()).rev() {
            if self.odometer[pos] < last {
                self.odometer[pos] += 1;
                for digit in &mut self.odometer[pos + 1..] {
                    *digit = 0;
                }
                return;
            }
        }
    }
}

impl Iterator for SequenceGenerator {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        if self.remaining == 0 {
            return None;
        }
        let sequence = Sequence::new(self.odometer.iter().map(|&i| self.labels[i]).collect());
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(sequence)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SequenceGenerator {}

/// Collect every `length`-long sequence over `labels`.
///
/// # Example
///
/// ```
/// use triangle_orbits::geometry::labels;
/// use triangle_orbits::sequence::generate_sequences;
///
/// let all = generate_sequences(&labels("AB"), 2).unwrap();
/// let text: Vec<String> = all.iter().map(|s| s.to_string()).collect();
/// assert_eq!(text, vec!["AA", "AB", "BA", "BB"]);
/// ```
pub fn generate_sequences(labels: &[Label], length: usize) -> Result<Vec<Sequence>> {
    Ok(SequenceGenerator::new(labels, length)?.collect())
}
