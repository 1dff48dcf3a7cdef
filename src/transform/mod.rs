// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Applying label sequences to point sets.
//!
//! The fold direction is fixed throughout the crate: the labels of a sequence
//! are applied left to right, each by left-multiplication, so the sequence
//! `L1 L2 … Ln` maps `P` to `Mn · … · M2 · M1 · P`.

pub mod cache;

pub use cache::TransformCache;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::geometry::PointSet;
use crate::sequence::Sequence;

/// Apply `sequence` to `base` without caching.
pub fn apply_sequence(sequence: &Sequence, base: &PointSet, alphabet: &Alphabet) -> Result<PointSet> {
    let mut points = base.clone();
    for &label in sequence.labels() {
        points = points.transformed_by(alphabet.matrix(label)?);
    }
    Ok(points)
}

/// Apply `sequence` to `base`, keeping every intermediate point set.
///
/// The result starts with `base` itself and has `sequence.len() + 1` entries.
pub fn trace_sequence(
    sequence: &Sequence,
    base: &PointSet,
    alphabet: &Alphabet,
) -> Result<Vec<PointSet>> {
    let mut steps = Vec::with_capacity(sequence.len() + 1);
    steps.push(base.clone());
    for &label in sequence.labels() {
        let matrix = alphabet.matrix(label)?;
        let next = steps[steps.len() - 1].transformed_by(matrix);
        steps.push(next);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrbitError;
    use crate::geometry::Label;
    use nalgebra::Matrix2;

    fn alphabet() -> Alphabet {
        Alphabet::new(vec![
            (Label::new('A'), Matrix2::new(2.0, -1.0, 1.0, 0.0)),
            (Label::new('B'), Matrix2::new(3.0, 1.0, -4.0, -1.0)),
        ])
        .unwrap()
    }

    fn seed() -> PointSet {
        PointSet::from_rows(&[-1.0, 2.0, -1.0], &[-1.0, -1.0, 2.0]).unwrap()
    }

    #[test]
    fn test_fold_direction() {
        let alphabet = alphabet();
        let a = *alphabet.matrix(Label::new('A')).unwrap();
        let b = *alphabet.matrix(Label::new('B')).unwrap();
        let seq = Sequence::parse("AB", &alphabet).unwrap();

        let result = apply_sequence(&seq, &seed(), &alphabet).unwrap();
        assert_eq!(result, seed().transformed_by(&(b * a)));
    }

    #[test]
    fn test_empty_sequence_is_identity() {
        let alphabet = alphabet();
        let result = apply_sequence(&Sequence::new(vec![]), &seed(), &alphabet).unwrap();
        assert_eq!(result, seed());
    }

    #[test]
    fn test_unknown_label_fails() {
        let alphabet = alphabet();
        let seq = Sequence::new(vec![Label::new('A'), Label::new('Z')]);
        assert!(matches!(
            apply_sequence(&seq, &seed(), &alphabet),
            Err(OrbitError::UnknownLabel { label: 'Z', .. })
        ));
    }

    #[test]
    fn test_trace_ends_at_apply() {
        let alphabet = alphabet();
        let seq = Sequence::parse("ABBA", &alphabet).unwrap();
        let steps = trace_sequence(&seq, &seed(), &alphabet).unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], seed());
        assert_eq!(steps[4], apply_sequence(&seq, &seed(), &alphabet).unwrap());
    }
}
