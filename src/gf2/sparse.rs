// src/gf2/sparse.rs

use super::{Gf2Matrix, Gf2Operator};
use crate::core::QcaError;

/// Compressed-sparse-row matrix over GF(2).
///
/// Only positions holding a 1 are stored, sorted ascending within each row. Sums
/// cancel pairs of equal positions, so no stored entry is ever a 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SparseGf2Matrix {
    rows: usize,
    columns: usize,
    /// `row_offsets[r]..row_offsets[r + 1]` indexes the entries of row `r`.
    row_offsets: Vec<usize>,
    column_indices: Vec<usize>,
}

impl SparseGf2Matrix {
    /// All-zero matrix with no stored entries.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self { rows, columns, row_offsets: vec![0; rows + 1], column_indices: Vec::new() }
    }

    /// Identity of the given dimension.
    pub fn identity(dimension: usize) -> Self {
        Self {
            rows: dimension,
            columns: dimension,
            row_offsets: (0..=dimension).collect(),
            column_indices: (0..dimension).collect(),
        }
    }

    /// Builds from per-row column lists. Each list is sorted and repeated columns
    /// cancel in pairs.
    pub fn from_row_lists(columns: usize, rows: Vec<Vec<usize>>) -> Result<Self, QcaError> {
        let mut builder = RowBuilder::new(rows.len(), columns);
        for mut row in rows {
            row.sort_unstable();
            if let Some(&last) = row.last() {
                if last >= columns {
                    return Err(QcaError::dimension("sparse column index", columns, last));
                }
            }
            builder.push_row(cancel_pairs(row));
        }
        Ok(builder.finish())
    }

    /// Keeps only the ones of a dense matrix.
    pub fn from_dense(dense: &Gf2Matrix) -> Self {
        let (rows, columns) = dense.shape();
        let mut builder = RowBuilder::new(rows, columns);
        for r in 0..rows {
            builder.push_row(dense.row_ones(r));
        }
        builder.finish()
    }

    /// Expands into bit-packed storage.
    pub fn to_dense(&self) -> Gf2Matrix {
        let mut dense = Gf2Matrix::zeros(self.rows, self.columns);
        for r in 0..self.rows {
            for &c in self.row(r) {
                dense.set(r, c, true);
            }
        }
        dense
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of stored ones.
    pub fn nnz(&self) -> usize {
        self.column_indices.len()
    }

    /// Sorted columns holding a 1 in `row`.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.column_indices[self.row_offsets[row]..self.row_offsets[row + 1]]
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.columns, "index ({row}, {col}) out of bounds for {}x{}", self.rows, self.columns);
        self.row(row).binary_search(&col).is_ok()
    }

    /// Kronecker product `self ⊗ other`.
    pub fn kron(&self, other: &Self) -> Self {
        let (br, bc) = other.shape();
        let mut builder = RowBuilder::new(self.rows * br, self.columns * bc);
        for i in 0..self.rows {
            for k in 0..br {
                // outer loop ascending in j keeps the row sorted
                let row = self.row(i).iter().flat_map(|&j| other.row(k).iter().map(move |&l| j * bc + l));
                builder.push_row(row);
            }
        }
        builder.finish()
    }

    /// Entrywise sum mod 2: the symmetric difference of each pair of rows.
    pub fn add(&self, other: &Self) -> Result<Self, QcaError> {
        if self.shape() != other.shape() {
            let context = format!("add {}x{} + {}x{}", self.rows, self.columns, other.rows, other.columns);
            return Err(QcaError::dimension(context, self.rows * self.columns, other.rows * other.columns));
        }
        let mut builder = RowBuilder::new(self.rows, self.columns);
        for r in 0..self.rows {
            builder.push_row(symmetric_difference(self.row(r), other.row(r)));
        }
        Ok(builder.finish())
    }

    /// `[self | other]`
    pub fn hstack(&self, other: &Self) -> Result<Self, QcaError> {
        if self.rows != other.rows {
            return Err(QcaError::dimension("hstack row count", self.rows, other.rows));
        }
        let offset = self.columns;
        let mut builder = RowBuilder::new(self.rows, self.columns + other.columns);
        for r in 0..self.rows {
            builder.push_row(self.row(r).iter().copied().chain(other.row(r).iter().map(|&c| c + offset)));
        }
        Ok(builder.finish())
    }

    /// `self` on top of `other`.
    pub fn vstack(&self, other: &Self) -> Result<Self, QcaError> {
        if self.columns != other.columns {
            return Err(QcaError::dimension("vstack column count", self.columns, other.columns));
        }
        let mut builder = RowBuilder::new(self.rows + other.rows, self.columns);
        for r in 0..self.rows {
            builder.push_row(self.row(r).iter().copied());
        }
        for r in 0..other.rows {
            builder.push_row(other.row(r).iter().copied());
        }
        Ok(builder.finish())
    }

    /// Assembles `[[top_left, top_right], [bottom_left, bottom_right]]`.
    pub fn block(top_left: &Self, top_right: &Self, bottom_left: &Self, bottom_right: &Self) -> Result<Self, QcaError> {
        top_left.hstack(top_right)?.vstack(&bottom_left.hstack(bottom_right)?)
    }
}

impl Gf2Operator for SparseGf2Matrix {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn get(&self, row: usize, col: usize) -> bool {
        SparseGf2Matrix::get(self, row, col)
    }

    fn mul_vec(&self, reduced: &[u8]) -> Vec<u8> {
        (0..self.rows)
            .map(|r| self.row(r).iter().fold(0u8, |acc, &c| acc ^ (reduced[c] & 1)))
            .collect()
    }
}

/// Accumulates rows in order. (Internal helper)
struct RowBuilder {
    rows: usize,
    columns: usize,
    row_offsets: Vec<usize>,
    column_indices: Vec<usize>,
}

impl RowBuilder {
    fn new(rows: usize, columns: usize) -> Self {
        let mut row_offsets = Vec::with_capacity(rows + 1);
        row_offsets.push(0);
        Self { rows, columns, row_offsets, column_indices: Vec::new() }
    }

    /// `columns` must be ascending and free of repeats.
    fn push_row(&mut self, columns: impl IntoIterator<Item = usize>) {
        self.column_indices.extend(columns);
        self.row_offsets.push(self.column_indices.len());
    }

    fn finish(self) -> SparseGf2Matrix {
        debug_assert_eq!(self.row_offsets.len(), self.rows + 1);
        SparseGf2Matrix {
            rows: self.rows,
            columns: self.columns,
            row_offsets: self.row_offsets,
            column_indices: self.column_indices,
        }
    }
}

/// Drops adjacent equal pairs from a sorted list.
fn cancel_pairs(sorted: Vec<usize>) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::with_capacity(sorted.len());
    for c in sorted {
        if out.last() == Some(&c) {
            out.pop();
        } else {
            out.push(c);
        }
    }
    out
}

fn symmetric_difference(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => {
                out.push(left[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(right[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}
