// src/core/state.rs

use super::error::QcaError;
use super::grid::GridSize;
use super::pauli::Pauli;
use num_traits::PrimInt;
use rand::Rng;
use std::fmt;

/// Reduces any primitive integer into GF(2).
///
/// Works on the two's-complement low bit, which agrees with Euclidean `mod 2`
/// for negative values as well.
pub fn reduce_mod2<T: PrimInt>(value: T) -> u8 {
    if value & T::one() == T::one() { 1 } else { 0 }
}

/// The global automaton state: `2·N²` bits over GF(2).
///
/// The first `N²` entries are the X-part (one bit per cell, row-major), the last
/// `N²` the Z-part. Every constructor reduces its input, so entries are always 0 or 1.
///
/// The lattice size is not stored; a vector only knows it has an even length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateVector {
    bits: Vec<u8>,
}

impl StateVector {
    /// The all-identity state for `grid`.
    pub fn zeros(grid: GridSize) -> Self {
        Self { bits: vec![0; grid.state_len()] }
    }

    /// Builds a state from raw bytes, reducing each one mod 2.
    pub fn from_bits(values: &[u8]) -> Result<Self, QcaError> {
        Self::from_integers(values)
    }

    /// Builds a state from arbitrary integers, reducing each one mod 2.
    /// Fails with `OddLength` when the input has no X/Z split.
    pub fn from_integers<T: PrimInt>(values: &[T]) -> Result<Self, QcaError> {
        if values.len() % 2 != 0 {
            return Err(QcaError::OddLength { length: values.len() });
        }
        Ok(Self { bits: values.iter().map(|&v| reduce_mod2(v)).collect() })
    }

    /// Wraps an already-reduced vector. (Internal visibility)
    pub(crate) fn from_reduced(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        debug_assert!(bits.len() % 2 == 0);
        Self { bits }
    }

    /// Identity everywhere except `pauli` at `cell`.
    pub fn with_pauli(grid: GridSize, cell: usize, pauli: Pauli) -> Result<Self, QcaError> {
        let mut state = Self::zeros(grid);
        state.set_pauli(cell, pauli)?;
        Ok(state)
    }

    /// A single X at [`GridSize::center_cell`], the reference point source.
    pub fn centered_x(grid: GridSize) -> Self {
        let mut bits = vec![0; grid.state_len()];
        bits[grid.center_cell()] = 1;
        Self { bits }
    }

    /// Independent uniformly random bits for every entry.
    pub fn random<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Self {
        let bits = (0..grid.state_len()).map(|_| u8::from(rng.random::<bool>())).collect();
        Self { bits }
    }

    /// Number of cells M (half the vector length).
    pub fn cells(&self) -> usize {
        self.bits.len() / 2
    }

    /// Vector length, 2·M.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-cell vector.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Raw bits, X-part then Z-part.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Consumes the state, returning its bits.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// First M bits.
    pub fn x_part(&self) -> &[u8] {
        &self.bits[..self.cells()]
    }

    /// Last M bits.
    pub fn z_part(&self) -> &[u8] {
        &self.bits[self.cells()..]
    }

    /// Label of a single cell.
    pub fn pauli_at(&self, cell: usize) -> Option<Pauli> {
        let m = self.cells();
        (cell < m).then(|| Pauli::from_bits(self.bits[cell], self.bits[m + cell]))
    }

    /// Overwrites the `(x, z)` pair of `cell`.
    pub fn set_pauli(&mut self, cell: usize, pauli: Pauli) -> Result<(), QcaError> {
        let m = self.cells();
        if cell >= m {
            return Err(QcaError::IndexOutOfRange { index: cell, cells: m });
        }
        let (x, z) = pauli.bits();
        self.bits[cell] = x;
        self.bits[m + cell] = z;
        Ok(())
    }

    /// Labels of all cells in row-major order.
    pub fn paulis(&self) -> impl Iterator<Item = Pauli> + '_ {
        let (x, z) = self.bits.split_at(self.cells());
        x.iter().zip(z).map(|(&x, &z)| Pauli::from_bits(x, z))
    }

    /// Number of cells carrying a non-identity label.
    pub fn weight(&self) -> usize {
        self.paulis().filter(|p| !p.is_identity()).count()
    }

    /// Re-applies the mod-2 reduction. A no-op on any vector built by this type.
    pub fn reduce_mod2(&mut self) {
        for bit in &mut self.bits {
            *bit &= 1;
        }
    }
}

impl fmt::Display for StateVector {
    /// Renders the Pauli string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pauli in self.paulis() {
            write!(f, "{}", pauli)?;
        }
        Ok(())
    }
}
