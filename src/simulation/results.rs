// src/simulation/results.rs
use crate::codec::{SymbolicGrid, pauli_to_numeric};
use crate::core::{GridSize, Pauli, QcaError};
use std::fmt;

/// The recorded output of a bounded run: one Pauli string per time step, from
/// the initial state (t = 0) through the last step (t = T), `T + 1` in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationHistory {
    grid: GridSize,
    frames: Vec<String>,
}

impl SimulationHistory {
    /// Creates a history from recorded frames. (Internal visibility)
    pub(crate) fn new(grid: GridSize, frames: Vec<String>) -> Self {
        Self { grid, frames }
    }

    /// Lattice the history was recorded on.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Number of recorded frames, `T + 1`.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frame was recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of steps simulated, `T`.
    pub fn steps(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Pauli string at time `t`.
    pub fn get(&self, t: usize) -> Option<&str> {
        self.frames.get(t).map(String::as_str)
    }

    /// Pauli strings in time order.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The state after the final step.
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Non-identity cell count of each frame.
    pub fn weights(&self) -> Vec<usize> {
        self.frames
            .iter()
            .map(|frame| frame.chars().filter(|&c| c != Pauli::I.label()).count())
            .collect()
    }

    /// Display codes for every frame, in time order.
    pub fn symbolic_grids(&self) -> Result<Vec<SymbolicGrid>, QcaError> {
        self.frames.iter().map(|frame| pauli_to_numeric(frame, self.grid.side())).collect()
    }

    /// Consumes the history, returning its frames.
    pub fn into_frames(self) -> Vec<String> {
        self.frames
    }
}

impl fmt::Display for SimulationHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation History ({} grid, {} steps):", self.grid, self.steps())?;
        for (t, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  t = {}: {}", t, frame)?;
        }
        Ok(())
    }
}
