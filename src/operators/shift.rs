// src/operators/shift.rs

//! One-dimensional cyclic shift matrices, the building blocks of the lattice
//! operator.

use crate::core::QcaError;
use crate::gf2::Gf2Matrix;

fn check_side(n: usize) -> Result<(), QcaError> {
    if n == 0 {
        return Err(QcaError::InvalidSize {
            message: "Shift matrices need N >= 1".to_string(),
        });
    }
    Ok(())
}

/// Cyclic left shift `L` (N×N): row i has its single 1 at column `(i - 1) mod N`.
///
/// Periodic boundary: row 0 points at column N-1.
pub fn left_shift(n: usize) -> Result<Gf2Matrix, QcaError> {
    check_side(n)?;
    Ok(Gf2Matrix::from_fn(n, n, |i, j| j == (i + n - 1) % n))
}

/// Cyclic right shift `R` (N×N): row i has its single 1 at column `(i + 1) mod N`.
pub fn right_shift(n: usize) -> Result<Gf2Matrix, QcaError> {
    check_side(n)?;
    Ok(Gf2Matrix::from_fn(n, n, |i, j| j == (i + 1) % n))
}

/// `(L, R)` for the same N.
pub fn shift_pair(n: usize) -> Result<(Gf2Matrix, Gf2Matrix), QcaError> {
    Ok((left_shift(n)?, right_shift(n)?))
}
