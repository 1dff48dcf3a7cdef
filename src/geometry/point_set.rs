// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable 2×N point sets.
//!
//! Points are stored as the columns of a `Matrix2xX<f64>`, so applying a
//! linear map is a single left-multiplication.

use std::fmt;

use nalgebra::{Matrix2, Matrix2xX, Vector2};

use crate::error::{OrbitError, Result};

/// A fixed set of 2-D points (triangle vertices), one per column.
///
/// Point sets are never mutated: every transformation produces a new set.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Matrix2xX<f64>,
}

impl PointSet {
    /// Build a point set from its x and y coordinate rows.
    pub fn from_rows(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(OrbitError::InvalidPointSet(format!(
                "{} x coordinates but {} y coordinates",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(OrbitError::InvalidPointSet("no points".to_string()));
        }
        let columns: Vec<Vector2<f64>> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect();
        Ok(Self {
            points: Matrix2xX::from_columns(&columns),
        })
    }

    /// Build a point set from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        if points.is_empty() {
            return Err(OrbitError::InvalidPointSet("no points".to_string()));
        }
        let columns: Vec<Vector2<f64>> = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        Ok(Self {
            points: Matrix2xX::from_columns(&columns),
        })
    }

    /// Left-multiply every point by `matrix`.
    pub fn transformed_by(&self, matrix: &Matrix2<f64>) -> Self {
        Self {
            points: matrix * &self.points,
        }
    }

    /// Number of points (columns).
    pub fn len(&self) -> usize {
        self.points.ncols()
    }

    /// True if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.ncols() == 0
    }

    /// The `i`th point as `(x, y)`.
    pub fn point(&self, i: usize) -> (f64, f64) {
        (self.points[(0, i)], self.points[(1, i)])
    }

    /// Iterate over the points in column order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// The underlying 2×N matrix.
    pub fn as_matrix(&self) -> &Matrix2xX<f64> {
        &self.points
    }
}

impl fmt::Display for PointSet {
    /// One point per line, like the transposed array the plots are built from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.points().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{:>12.4} {:>12.4}]", x, y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_is_column_major_points() {
        let set = PointSet::from_rows(&[-1.0, 2.0, -1.0], &[-1.0, -1.0, 2.0]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.point(0), (-1.0, -1.0));
        assert_eq!(set.point(1), (2.0, -1.0));
        assert_eq!(set.point(2), (-1.0, 2.0));
    }

    #[test]
    fn test_from_points_matches_from_rows() {
        let a = PointSet::from_points(&[(1.0, 4.0), (2.0, 5.0)]).unwrap();
        let b = PointSet::from_rows(&[1.0, 2.0], &[4.0, 5.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_mismatched_rows() {
        assert!(matches!(
            PointSet::from_rows(&[1.0, 2.0], &[1.0]),
            Err(OrbitError::InvalidPointSet(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(PointSet::from_rows(&[], &[]).is_err());
        assert!(PointSet::from_points(&[]).is_err());
    }

    #[test]
    fn test_transformed_by() {
        let set = PointSet::from_rows(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        let m = Matrix2::new(2.0, -1.0, 1.0, 0.0);
        let out = set.transformed_by(&m);
        assert_eq!(out.point(0), (2.0, 1.0));
        assert_eq!(out.point(1), (-1.0, 0.0));
        // original untouched
        assert_eq!(set.point(0), (1.0, 0.0));
    }

    #[test]
    fn test_display() {
        let set = PointSet::from_rows(&[1.0], &[-2.5]).unwrap();
        assert_eq!(format!("{}", set), "[      1.0000      -2.5000]");
    }
}
