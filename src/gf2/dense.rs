// src/gf2/dense.rs

use super::Gf2Operator;
use crate::core::{QcaError, reduce_mod2};
use num_traits::PrimInt;
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Dense matrix over GF(2) stored as bit-packed rows.
///
/// Row `r` occupies `words_per_row` consecutive `u64` words; column `c` is bit
/// `c % 64` of word `c / 64`. Padding bits past the last column are always zero, so
/// derived equality and hashing compare entries only.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Gf2Matrix {
    rows: usize,
    columns: usize,
    words_per_row: usize,
    data: Vec<u64>,
}

impl Gf2Matrix {
    /// All-zero matrix.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let words_per_row = columns.div_ceil(WORD_BITS);
        Self { rows, columns, words_per_row, data: vec![0; rows * words_per_row] }
    }

    /// Identity of the given dimension.
    pub fn identity(dimension: usize) -> Self {
        let mut matrix = Self::zeros(dimension, dimension);
        for i in 0..dimension {
            matrix.set(i, i, true);
        }
        matrix
    }

    /// Builds a matrix entry by entry.
    pub fn from_fn(rows: usize, columns: usize, entry: impl Fn(usize, usize) -> bool) -> Self {
        let mut matrix = Self::zeros(rows, columns);
        for r in 0..rows {
            for c in 0..columns {
                if entry(r, c) {
                    matrix.set(r, c, true);
                }
            }
        }
        matrix
    }

    /// Builds a matrix from integer rows, reducing every entry mod 2.
    ///
    /// # Errors
    /// `DimensionMismatch` if the rows are ragged.
    pub fn from_rows<T: PrimInt>(rows: &[Vec<T>]) -> Result<Self, QcaError> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::zeros(rows.len(), columns);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(QcaError::dimension(format!("from_rows row {}", r), columns, row.len()));
            }
            for (c, &value) in row.iter().enumerate() {
                if reduce_mod2(value) == 1 {
                    matrix.set(r, c, true);
                }
            }
        }
        Ok(matrix)
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    fn row_words(&self, row: usize) -> &[u64] {
        &self.data[row * self.words_per_row..(row + 1) * self.words_per_row]
    }

    fn row_words_mut(&mut self, row: usize) -> &mut [u64] {
        let start = row * self.words_per_row;
        &mut self.data[start..start + self.words_per_row]
    }

    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.columns, "index ({row}, {col}) out of bounds for {}x{}", self.rows, self.columns);
        (self.row_words(row)[col / WORD_BITS] >> (col % WORD_BITS)) & 1 == 1
    }

    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(row < self.rows && col < self.columns, "index ({row}, {col}) out of bounds for {}x{}", self.rows, self.columns);
        let word = &mut self.row_words_mut(row)[col / WORD_BITS];
        let mask = 1u64 << (col % WORD_BITS);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Columns holding a 1 in `row`, ascending.
    pub fn row_ones(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.row_words(row).iter().enumerate().flat_map(|(w, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }

    /// Ones in `row`.
    pub fn row_weight(&self, row: usize) -> usize {
        self.row_words(row).iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Ones in column `col`.
    pub fn column_weight(&self, col: usize) -> usize {
        (0..self.rows).filter(|&r| self.get(r, col)).count()
    }

    /// Ones in the whole matrix.
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True when no entry is set.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&w| w == 0)
    }

    /// Kronecker product `self ⊗ other`.
    pub fn kron(&self, other: &Self) -> Self {
        let (br, bc) = other.shape();
        let mut out = Self::zeros(self.rows * br, self.columns * bc);
        for i in 0..self.rows {
            for j in self.row_ones(i) {
                for k in 0..br {
                    for l in other.row_ones(k) {
                        out.set(i * br + k, j * bc + l, true);
                    }
                }
            }
        }
        out
    }

    /// Entrywise sum mod 2.
    ///
    /// # Errors
    /// `DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, QcaError> {
        if self.shape() != other.shape() {
            let context = format!("add {}x{} + {}x{}", self.rows, self.columns, other.rows, other.columns);
            return Err(QcaError::dimension(context, self.rows * self.columns, other.rows * other.columns));
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a ^ b).collect();
        Ok(Self { data, ..self.clone_shape() })
    }

    fn clone_shape(&self) -> Self {
        Self { rows: self.rows, columns: self.columns, words_per_row: self.words_per_row, data: Vec::new() }
    }

    /// `[self | other]`
    pub fn hstack(&self, other: &Self) -> Result<Self, QcaError> {
        if self.rows != other.rows {
            return Err(QcaError::dimension("hstack row count", self.rows, other.rows));
        }
        let mut out = Self::zeros(self.rows, self.columns + other.columns);
        for r in 0..self.rows {
            for c in self.row_ones(r) {
                out.set(r, c, true);
            }
            for c in other.row_ones(r) {
                out.set(r, self.columns + c, true);
            }
        }
        Ok(out)
    }

    /// `self` on top of `other`.
    pub fn vstack(&self, other: &Self) -> Result<Self, QcaError> {
        if self.columns != other.columns {
            return Err(QcaError::dimension("vstack column count", self.columns, other.columns));
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Self { rows: self.rows + other.rows, data, ..self.clone_shape() })
    }

    /// Assembles `[[top_left, top_right], [bottom_left, bottom_right]]`.
    pub fn block(top_left: &Self, top_right: &Self, bottom_left: &Self, bottom_right: &Self) -> Result<Self, QcaError> {
        top_left.hstack(top_right)?.vstack(&bottom_left.hstack(bottom_right)?)
    }

    /// Matrix product over GF(2).
    pub fn matmul(&self, other: &Self) -> Result<Self, QcaError> {
        if self.columns != other.rows {
            return Err(QcaError::dimension("matmul inner dimension", self.columns, other.rows));
        }
        let mut out = Self::zeros(self.rows, other.columns);
        for i in 0..self.rows {
            let ones: Vec<usize> = self.row_ones(i).collect();
            let target = out.row_words_mut(i);
            for j in ones {
                for (t, &w) in target.iter_mut().zip(other.row_words(j)) {
                    *t ^= w;
                }
            }
        }
        Ok(out)
    }

    /// Transpose as a new matrix.
    pub fn transposed(&self) -> Self {
        let mut out = Self::zeros(self.columns, self.rows);
        for r in 0..self.rows {
            for c in self.row_ones(r) {
                out.set(c, r, true);
            }
        }
        out
    }
}

impl Gf2Operator for Gf2Matrix {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn get(&self, row: usize, col: usize) -> bool {
        Gf2Matrix::get(self, row, col)
    }

    fn mul_vec(&self, reduced: &[u8]) -> Vec<u8> {
        let mut packed = vec![0u64; self.words_per_row];
        for (i, &bit) in reduced.iter().enumerate() {
            packed[i / WORD_BITS] |= u64::from(bit & 1) << (i % WORD_BITS);
        }
        (0..self.rows)
            .map(|r| {
                let ones: u32 = self.row_words(r).iter().zip(&packed).map(|(a, b)| (a & b).count_ones()).sum();
                (ones & 1) as u8
            })
            .collect()
    }
}

impl fmt::Display for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.columns {
                write!(f, "{}", if self.get(r, c) { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gf2Matrix {}x{}", self.rows, self.columns)?;
        fmt::Display::fmt(self, f)
    }
}
