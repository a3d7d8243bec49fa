// src/gf2/mod.rs

//! Linear algebra over GF(2).
//!
//! Two storage formats share one interface: [`Gf2Matrix`] keeps every entry in
//! bit-packed rows and is the reference construction, [`SparseGf2Matrix`] keeps
//! only the set entries of each row. Both are consumed through [`Gf2Operator`], and
//! [`mod2_matmul`] is the single primitive every automaton step reduces to.

mod dense;
mod sparse;

pub use dense::Gf2Matrix;
pub use sparse::SparseGf2Matrix;

use crate::core::QcaError;

/// A linear map over GF(2) that can be applied to vectors.
pub trait Gf2Operator {
    /// `(rows, columns)`
    fn shape(&self) -> (usize, usize);

    /// Entry at `(row, col)`. Panics when out of bounds.
    fn get(&self, row: usize, col: usize) -> bool;

    /// Multiplies by a vector whose entries are already 0 or 1 and whose length
    /// equals the column count. Callers go through [`mod2_matmul`], which checks both.
    fn mul_vec(&self, reduced: &[u8]) -> Vec<u8>;

    fn rows(&self) -> usize {
        self.shape().0
    }

    fn columns(&self) -> usize {
        self.shape().1
    }
}

/// Matrix–vector product over GF(2).
///
/// The input vector need not be reduced; each entry counts by its parity. The result
/// has one entry per operator row, each 0 or 1.
///
/// # Errors
/// `DimensionMismatch` if `vector.len()` differs from the operator's column count.
pub fn mod2_matmul<O: Gf2Operator + ?Sized>(operator: &O, vector: &[u8]) -> Result<Vec<u8>, QcaError> {
    let columns = operator.columns();
    if vector.len() != columns {
        return Err(QcaError::dimension("mod2_matmul vector length", columns, vector.len()));
    }
    if vector.iter().all(|&v| v <= 1) {
        Ok(operator.mul_vec(vector))
    } else {
        let reduced: Vec<u8> = vector.iter().map(|&v| v & 1).collect();
        Ok(operator.mul_vec(&reduced))
    }
}

/// `true` when two operators have the same shape and agree on every entry,
/// regardless of storage.
pub fn same_entries<A, B>(left: &A, right: &B) -> bool
where
    A: Gf2Operator + ?Sized,
    B: Gf2Operator + ?Sized,
{
    let (rows, columns) = left.shape();
    if right.shape() != (rows, columns) {
        return false;
    }
    (0..rows).all(|r| (0..columns).all(|c| left.get(r, c) == right.get(r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_reduces_inputs() -> Result<(), QcaError> {
        // [[1 1 0], [0 1 1]] · [3, 1, 2] = [1+1, 1+0] mod 2
        let m = Gf2Matrix::from_rows(&[vec![1i64, 1, 0], vec![0, 1, 1]])?;
        assert_eq!(mod2_matmul(&m, &[3, 1, 2])?, vec![0, 1]);
        assert_eq!(mod2_matmul(&m, &[1, 1, 0])?, vec![0, 1]);
        assert_eq!(mod2_matmul(&m, &[1, 0, 1])?, vec![1, 1]);
        Ok(())
    }

    #[test]
    fn test_matmul_rejects_wrong_length() -> Result<(), QcaError> {
        let m = Gf2Matrix::identity(4);
        let err = mod2_matmul(&m, &[1, 0, 1]).unwrap_err();
        assert!(matches!(err, QcaError::DimensionMismatch { expected: 4, found: 3, .. }));

        let sparse = SparseGf2Matrix::identity(4);
        assert!(mod2_matmul(&sparse, &[0; 5]).is_err());
        Ok(())
    }

    #[test]
    fn test_dense_and_sparse_agree() -> Result<(), QcaError> {
        let dense = Gf2Matrix::from_rows(&[vec![0i64, 1, 1], vec![1, 0, 0], vec![1, 1, 1]])?;
        let sparse = SparseGf2Matrix::from_dense(&dense);
        assert!(same_entries(&dense, &sparse));
        assert_eq!(mod2_matmul(&dense, &[1, 1, 0])?, mod2_matmul(&sparse, &[1, 1, 0])?);
        assert!(!same_entries(&dense, &Gf2Matrix::identity(3)));
        assert!(!same_entries(&dense, &Gf2Matrix::identity(2)));
        Ok(())
    }
}
