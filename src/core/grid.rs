// src/core/grid.rs

use super::error::QcaError;
use std::fmt;

/// Side length N of a periodic N×N lattice.
///
/// Only the size is modeled; a cell is identified by its row-major linear index
/// `row * N + col`. Construction rejects N = 0, so every `GridSize` in circulation
/// describes a non-empty torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSize(usize);

impl GridSize {
    /// Creates a grid size, failing with `InvalidSize` for N = 0 or when 2·N² overflows `usize`.
    pub fn new(side: usize) -> Result<Self, QcaError> {
        if side == 0 {
            return Err(QcaError::InvalidSize {
                message: "Grid size N must be at least 1".to_string(),
            });
        }
        // cells() and state_len() stay unchecked once 2·N² is known to fit
        if side.checked_mul(side).and_then(|cells| cells.checked_mul(2)).is_none() {
            return Err(QcaError::InvalidSize {
                message: format!("Grid size {} overflows the state length 2·N²", side),
            });
        }
        Ok(Self(side))
    }

    /// Accepts a signed size as it arrives from callers that do not track signs,
    /// rejecting zero and negative values.
    pub fn try_from_signed(side: i64) -> Result<Self, QcaError> {
        if side <= 0 {
            return Err(QcaError::InvalidSize {
                message: format!("Grid size N must be positive, got {}", side),
            });
        }
        let side = usize::try_from(side).map_err(|_| QcaError::InvalidSize {
            message: format!("Grid size {} does not fit the address space", side),
        })?;
        Self::new(side)
    }

    /// N
    pub fn side(&self) -> usize {
        self.0
    }

    /// Number of cells, N².
    pub fn cells(&self) -> usize {
        self.0 * self.0
    }

    /// Length of a full state vector, 2·N² (X-part followed by Z-part).
    pub fn state_len(&self) -> usize {
        2 * self.cells()
    }

    /// Row-major index of the cell at `(row, col)`.
    pub fn cell_index(&self, row: usize, col: usize) -> Result<usize, QcaError> {
        if row >= self.0 || col >= self.0 {
            return Err(QcaError::CellOutOfRange { row, col, grid: self.0 });
        }
        Ok(row * self.0 + col)
    }

    /// Inverse of [`GridSize::cell_index`].
    pub fn coords(&self, cell: usize) -> Result<(usize, usize), QcaError> {
        if cell >= self.cells() {
            return Err(QcaError::IndexOutOfRange { index: cell, cells: self.cells() });
        }
        Ok((cell / self.0, cell % self.0))
    }

    /// The seed cell of the reference animation, `N² / 2`.
    ///
    /// For odd N this is the geometric center; for even N it is the first cell
    /// of the lower half.
    pub fn center_cell(&self) -> usize {
        self.cells() / 2
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

impl TryFrom<usize> for GridSize {
    type Error = QcaError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}
