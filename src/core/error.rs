//! Error handling logic

use thiserror::Error;

/// Error types raised by the automaton core.
///
/// Every failure is detected eagerly at the offending call. Nothing is retried:
/// all computations are pure and deterministic, so a failed call is surfaced to the
/// caller and the current simulation stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum QcaError {
    /// Operator and vector (or two matrices) disagree on a dimension.
    #[error("Dimension Mismatch ({context}): expected {expected}, found {found}")]
    DimensionMismatch {
        /// Which operation detected the mismatch
        context: String,
        /// Dimension required by the operation
        expected: usize,
        /// Dimension actually supplied
        found: usize,
    },

    /// A grid size or step count outside the supported range.
    #[error("Invalid Size: {message}")]
    InvalidSize {
        /// InvalidSize failure message
        message: String,
    },

    /// A Pauli string contains a character outside {I, X, Z, Y}.
    #[error("Invalid Symbol: '{symbol}'{} is not one of I, X, Z, Y", at_position(.position))]
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Character position within the string, `None` for a lone character
        position: Option<usize>,
    },

    /// A state vector with odd length cannot be split into X and Z parts.
    #[error("Odd Length: state vector of length {length} has no X/Z split")]
    OddLength {
        /// Length of the rejected vector
        length: usize,
    },

    /// A Pauli string does not fill the requested grid exactly.
    #[error("Size Mismatch: {found} symbols cannot fill a {grid}x{grid} grid ({expected} cells)")]
    SizeMismatch {
        /// Grid side length N
        grid: usize,
        /// N²
        expected: usize,
        /// Length of the supplied string
        found: usize,
    },

    /// A cell coordinate or index lies outside the lattice.
    #[error("Cell Out Of Range: ({row}, {col}) on a {grid}x{grid} grid")]
    CellOutOfRange {
        /// Row of the rejected cell
        row: usize,
        /// Column of the rejected cell
        col: usize,
        /// Grid side length N
        grid: usize,
    },

    /// A linear cell index lies outside the state it addresses.
    #[error("Index Out Of Range: cell {index} on a lattice of {cells} cells")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of cells available
        cells: usize,
    },
}

impl QcaError {
    pub(crate) fn dimension(context: impl Into<String>, expected: usize, found: usize) -> Self {
        QcaError::DimensionMismatch { context: context.into(), expected, found }
    }
}

fn at_position(position: &Option<usize>) -> String {
    position.map(|p| format!(" at position {}", p)).unwrap_or_default()
}
