// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Label type naming one matrix of an alphabet.
//!
//! Labels are single ASCII alphanumeric symbols such as `A` or `T`.

use std::fmt;

/// A single-symbol label for one alphabet matrix.
///
/// This is a newtype wrapper so labels cannot be confused with arbitrary
/// characters read from user input; use [`Label::try_new`] at those seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(char);

impl Label {
    /// Create a new label, panicking if the symbol is not ASCII alphanumeric.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is not in `[A-Za-z0-9]`.
    pub fn new(symbol: char) -> Self {
        assert!(
            symbol.is_ascii_alphanumeric(),
            "Label must be ASCII alphanumeric: {:?}",
            symbol
        );
        Self(symbol)
    }

    /// Try to create a new label, returning None for unusable symbols.
    pub fn try_new(symbol: char) -> Option<Self> {
        if symbol.is_ascii_alphanumeric() {
            Some(Self(symbol))
        } else {
            None
        }
    }

    /// Get the underlying symbol.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Label> for char {
    fn from(label: Label) -> Self {
        label.0
    }
}

/// Convert a run of symbols such as `"ABCDEF"` into labels.
///
/// # Panics
///
/// Panics if any symbol is not a valid label.
pub fn labels(symbols: &str) -> Vec<Label> {
    symbols.chars().map(Label::new).collect()
}
