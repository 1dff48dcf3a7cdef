// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed matrices and seed triangles shared by the variants.
//!
//! Matrices are given row-major as `[[a, b], [c, d]]`; seed triangles as the
//! x row followed by the y row.

use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::Result;
use crate::geometry::PointSet;

/// Monodromy matrix A.
pub const MATRIX_A: [[f64; 2]; 2] = [[2.0, -1.0], [1.0, 0.0]];
/// Monodromy matrix B.
pub const MATRIX_B: [[f64; 2]; 2] = [[3.0, 1.0], [-4.0, -1.0]];
/// Monodromy matrix C.
pub const MATRIX_C: [[f64; 2]; 2] = [[3.0, 4.0], [-1.0, -1.0]];
/// Unipotent shear t.
pub const MATRIX_T: [[f64; 2]; 2] = [[1.0, 1.0], [0.0, 1.0]];

/// Lower shear h_k = [[1, 0], [k, 1]].
pub fn h_k(k: u32) -> Matrix2<f64> {
    Matrix2::new(1.0, 0.0, k as f64, 1.0)
}

/// Build a matrix from row-major rows.
pub fn matrix(rows: [[f64; 2]; 2]) -> Matrix2<f64> {
    Matrix2::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
}

/// The seed triangles used across the variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SeedTriangle {
    /// (-1,-1), (2,-1), (-1,2).
    Standard,
    /// Small triangle away from the origin, where the orbit is not dense.
    NonDense,
    /// `NonDense` mirrored in the y axis.
    MirroredNonDense,
    /// A very large triangle far from the origin.
    Large,
}

impl SeedTriangle {
    /// Coordinate rows `(xs, ys)`.
    pub fn rows(self) -> ([f64; 3], [f64; 3]) {
        match self {
            SeedTriangle::Standard => ([-1.0, 2.0, -1.0], [-1.0, -1.0, 2.0]),
            SeedTriangle::NonDense => ([5.2, 4.6, 5.2], [4.8, 4.8, 5.4]),
            SeedTriangle::MirroredNonDense => ([-5.2, -4.6, -5.2], [4.8, 4.8, 5.4]),
            SeedTriangle::Large => (
                [-300000.0, -300000.0, -200000.0],
                [300000.0, 200000.0, 200000.0],
            ),
        }
    }

    pub fn point_set(self) -> Result<PointSet> {
        let (xs, ys) = self.rows();
        PointSet::from_rows(&xs, &ys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_matrix_is_row_major() {
        let a = matrix(MATRIX_A);
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(0, 1)], -1.0);
        assert_eq!(a[(1, 0)], 1.0);
        assert_eq!(a[(1, 1)], 0.0);
    }

    #[test]
    fn test_h_k() {
        let h = h_k(5);
        assert_eq!(h, Matrix2::new(1.0, 0.0, 5.0, 1.0));
    }

    #[test]
    fn test_monodromy_matrices_are_unimodular() {
        for rows in [MATRIX_A, MATRIX_B, MATRIX_C, MATRIX_T] {
            assert_eq!(matrix(rows).determinant(), 1.0);
        }
    }

    #[test]
    fn test_seed_triangles_have_three_points() {
        for seed in SeedTriangle::iter() {
            assert_eq!(seed.point_set().unwrap().len(), 3);
        }
    }

    #[test]
    fn test_seed_names() {
        assert_eq!(SeedTriangle::from_str("non-dense").unwrap(), SeedTriangle::NonDense);
        assert_eq!(SeedTriangle::MirroredNonDense.to_string(), "mirrored-non-dense");
        let parsed: SeedTriangle = serde_json::from_str(r#""large""#).unwrap();
        assert_eq!(parsed, SeedTriangle::Large);
    }
}
