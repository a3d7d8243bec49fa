// src/codec/mod.rs

//! Conversions between state vectors, Pauli strings and symbolic grids.
//!
//! The label table `(0,0)→I, (1,0)→X, (0,1)→Z, (1,1)→Y` and the display codes
//! `I=0, X=1, Z=2, Y=3` are fixed. Visualization layers hard-code both.

use crate::core::{PALETTE, Pauli, QcaError, StateVector};
use std::fmt;

/// Encodes a length-`2M` GF(2) vector as `M` Pauli labels.
///
/// Entries are read by parity, so unreduced input is accepted.
///
/// # Errors
/// `OddLength` if the vector cannot be split into X and Z halves.
pub fn vector_to_pauli_string(vector: &[u8]) -> Result<String, QcaError> {
    if vector.len() % 2 != 0 {
        return Err(QcaError::OddLength { length: vector.len() });
    }
    let (x, z) = vector.split_at(vector.len() / 2);
    Ok(x.iter().zip(z).map(|(&x, &z)| Pauli::from_bits(x, z).label()).collect())
}

fn parse_labels(pauli: &str) -> impl Iterator<Item = Result<Pauli, QcaError>> + '_ {
    pauli
        .chars()
        .enumerate()
        .map(|(position, symbol)| Pauli::from_label(symbol).ok_or(QcaError::InvalidSymbol { symbol, position: Some(position) }))
}

/// Decodes a Pauli string back into its state vector (X-part then Z-part).
///
/// # Errors
/// `InvalidSymbol` on any character outside {I, X, Z, Y}.
pub fn pauli_string_to_vector(pauli: &str) -> Result<StateVector, QcaError> {
    let labels = parse_labels(pauli).collect::<Result<Vec<_>, _>>()?;
    let m = labels.len();
    let mut bits = vec![0u8; 2 * m];
    for (cell, label) in labels.into_iter().enumerate() {
        let (x, z) = label.bits();
        bits[cell] = x;
        bits[m + cell] = z;
    }
    Ok(StateVector::from_reduced(bits))
}

/// Re-encodes a Pauli string of length `N²` as an N×N grid of display codes,
/// row-major.
///
/// # Errors
/// `InvalidSize` for N = 0, `InvalidSymbol` for an unknown character (checked first),
/// `SizeMismatch` if the string length is not exactly `N²`.
pub fn pauli_to_numeric(pauli: &str, n: usize) -> Result<SymbolicGrid, QcaError> {
    if n == 0 {
        return Err(QcaError::InvalidSize {
            message: "Symbolic grid needs N >= 1".to_string(),
        });
    }
    let codes = parse_labels(pauli).map(|label| label.map(Pauli::code)).collect::<Result<Vec<u8>, _>>()?;
    let expected = n * n;
    if codes.len() != expected {
        return Err(QcaError::SizeMismatch { grid: n, expected, found: codes.len() });
    }
    Ok(SymbolicGrid { side: n, codes })
}

/// Palette entry for a display code, `None` outside 0..=3.
pub fn color_of(code: u8) -> Option<&'static str> {
    PALETTE.get(usize::from(code)).copied()
}

/// An N×N array of display codes (I=0, X=1, Z=2, Y=3), row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolicGrid {
    side: usize,
    codes: Vec<u8>,
}

impl SymbolicGrid {
    /// Side length N.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Code at `(row, col)`, `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.side && col < self.side).then(|| self.codes[row * self.side + col])
    }

    /// # Panics
    /// Panics if `row >= side`.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.codes[row * self.side..(row + 1) * self.side]
    }

    /// Rows of codes, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.codes.chunks(self.side)
    }

    /// All codes in row-major order.
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Per-label cell counts, indexed by code.
    pub fn histogram(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for &code in &self.codes {
            counts[usize::from(code)] += 1;
        }
        counts
    }
}

impl fmt::Display for SymbolicGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for code in row {
                write!(f, "{}", code)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
