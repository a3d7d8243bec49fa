// src/patterns/mod.rs

//! Builders for initial conditions.
//!
//! An initial condition is a [`StateVector`]; the builder lets callers describe it
//! as a set of Pauli labels placed on lattice cells instead of raw bit indices.

use crate::core::{GridSize, Pauli, QcaError, StateVector};
use std::fmt;

/// Where a label is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// `(row, col)` on the lattice.
    Cell { row: usize, col: usize },
    /// Row-major linear index.
    Index(usize),
    /// [`GridSize::center_cell`].
    Center,
}

impl Site {
    fn resolve(self, grid: GridSize) -> Result<usize, QcaError> {
        match self {
            Site::Cell { row, col } => grid.cell_index(row, col),
            Site::Index(cell) if cell < grid.cells() => Ok(cell),
            Site::Index(cell) => Err(QcaError::IndexOutOfRange { index: cell, cells: grid.cells() }),
            Site::Center => Ok(grid.center_cell()),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Cell { row, col } => write!(f, "({}, {})", row, col),
            Site::Index(cell) => write!(f, "#{}", cell),
            Site::Center => write!(f, "center"),
        }
    }
}

/// Constructs initial states with method chaining.
///
/// Placements apply in order, so a later label on the same cell replaces an
/// earlier one. Out-of-range sites are reported by [`InitialStateBuilder::build`].
///
/// ```
/// use cqca::{GridSize, Pauli};
/// use cqca::patterns::InitialStateBuilder;
///
/// let grid = GridSize::new(3).unwrap();
/// let state = InitialStateBuilder::new(grid)
///     .place(0, 0, Pauli::Z)
///     .center(Pauli::X)
///     .build()
///     .unwrap();
/// assert_eq!(state.to_string(), "ZIIIXIIII");
/// ```
#[derive(Debug, Clone)]
pub struct InitialStateBuilder {
    grid: GridSize,
    placements: Vec<(Site, Pauli)>,
}

impl InitialStateBuilder {
    /// Creates a builder for the all-identity state on `grid`.
    pub fn new(grid: GridSize) -> Self {
        Self { grid, placements: Vec::new() }
    }

    /// Places `pauli` at `(row, col)`.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn place(self, row: usize, col: usize, pauli: Pauli) -> Self {
        self.at(Site::Cell { row, col }, pauli)
    }

    /// Places `pauli` at a row-major index.
    pub fn place_index(self, cell: usize, pauli: Pauli) -> Self {
        self.at(Site::Index(cell), pauli)
    }

    /// Places `pauli` at the seed cell.
    pub fn center(self, pauli: Pauli) -> Self {
        self.at(Site::Center, pauli)
    }

    /// Places `pauli` at any [`Site`].
    pub fn at(mut self, site: Site, pauli: Pauli) -> Self {
        self.placements.push((site, pauli));
        self
    }

    /// Places labels from an iterator.
    pub fn place_all<I>(mut self, placements: I) -> Self
    where
        I: IntoIterator<Item = (Site, Pauli)>,
    {
        self.placements.extend(placements);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// `CellOutOfRange` or `IndexOutOfRange` for the first placement that misses
    /// the lattice.
    pub fn build(self) -> Result<StateVector, QcaError> {
        let mut state = StateVector::zeros(self.grid);
        for (site, pauli) in self.placements {
            let cell = site.resolve(self.grid)?;
            state.set_pauli(cell, pauli)?;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_placements_win() -> Result<(), QcaError> {
        let grid = GridSize::new(2)?;
        let state = InitialStateBuilder::new(grid)
            .place(1, 1, Pauli::X)
            .place_index(3, Pauli::Y)
            .place_all([(Site::Index(0), Pauli::Z)])
            .build()?;
        assert_eq!(state.to_string(), "ZIIY");
        Ok(())
    }

    #[test]
    fn test_center_matches_reference_seed() -> Result<(), QcaError> {
        for n in [1, 2, 3, 6] {
            let grid = GridSize::new(n)?;
            assert_eq!(InitialStateBuilder::new(grid).center(Pauli::X).build()?, StateVector::centered_x(grid));
        }
        Ok(())
    }

    #[test]
    fn test_out_of_range_sites() -> Result<(), QcaError> {
        let grid = GridSize::new(3)?;
        let err = InitialStateBuilder::new(grid).place(0, 3, Pauli::X).build().unwrap_err();
        assert_eq!(err, QcaError::CellOutOfRange { row: 0, col: 3, grid: 3 });
        let err = InitialStateBuilder::new(grid).place_index(9, Pauli::X).build().unwrap_err();
        assert_eq!(err, QcaError::IndexOutOfRange { index: 9, cells: 9 });
        assert_eq!(Site::Cell { row: 1, col: 2 }.to_string(), "(1, 2)");
        Ok(())
    }
}
