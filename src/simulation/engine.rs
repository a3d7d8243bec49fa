// src/simulation/engine.rs
use crate::codec::{SymbolicGrid, pauli_to_numeric};
use crate::core::{GridSize, QcaError, StateVector};
use crate::gf2::{Gf2Operator, mod2_matmul};
use std::fmt;
use tracing::trace;

/// Advances a state by one time step: one application of the operator followed
/// by mod-2 reduction.
///
/// Both the bounded driver and the live [`Evolution`] go through this function,
/// so a tick of the animation and a step of a recorded history are the same
/// computation.
pub fn evolve_step<O: Gf2Operator + ?Sized>(operator: &O, state: &StateVector) -> Result<StateVector, QcaError> {
    let next = mod2_matmul(operator, state.as_slice())?;
    if next.len() % 2 != 0 {
        return Err(QcaError::OddLength { length: next.len() });
    }
    Ok(StateVector::from_reduced(next))
}

/// Checks that `operator` maps `grid`'s state space to itself.
pub(crate) fn check_operator<O: Gf2Operator + ?Sized>(grid: GridSize, operator: &O) -> Result<(), QcaError> {
    let (rows, columns) = operator.shape();
    let dim = grid.state_len();
    if rows != dim {
        return Err(QcaError::dimension(format!("operator rows for a {} grid", grid), dim, rows));
    }
    if columns != dim {
        return Err(QcaError::dimension(format!("operator columns for a {} grid", grid), dim, columns));
    }
    Ok(())
}

pub(crate) fn check_state(grid: GridSize, state: &StateVector) -> Result<(), QcaError> {
    if state.len() != grid.state_len() {
        return Err(QcaError::dimension(format!("initial state for a {} grid", grid), grid.state_len(), state.len()));
    }
    Ok(())
}

/// One rendered time step of a live evolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Number of steps applied since the initial state.
    pub time: usize,
    /// Row-major Pauli string of the state at `time`.
    pub pauli: String,
    side: usize,
}

impl Frame {
    /// Display codes for this frame.
    pub fn symbolic_grid(&self) -> Result<SymbolicGrid, QcaError> {
        pauli_to_numeric(&self.pauli, self.side)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t = {}: {}", self.time, self.pauli)
    }
}

/// An unbounded evolution that owns its current state.
///
/// Each [`Evolution::step`] replaces the state with its successor and returns the
/// new frame; the caller decides the cadence (once per timer tick, say) and stops
/// whenever it likes. The operator is borrowed read-only for the whole run.
pub struct Evolution<'op, O: Gf2Operator + ?Sized> {
    operator: &'op O,
    grid: GridSize,
    state: StateVector,
    time: usize,
}

impl<'op, O: Gf2Operator + ?Sized> Evolution<'op, O> {
    /// Starts an evolution at `initial` (time 0).
    ///
    /// # Errors
    /// `DimensionMismatch` if the operator or the state does not fit `grid`.
    pub fn new(grid: GridSize, operator: &'op O, initial: StateVector) -> Result<Self, QcaError> {
        check_operator(grid, operator)?;
        check_state(grid, &initial)?;
        Ok(Self { operator, grid, state: initial, time: 0 })
    }

    /// Frame for the current state, without stepping.
    pub fn frame(&self) -> Frame {
        Frame { time: self.time, pauli: self.state.to_string(), side: self.grid.side() }
    }

    /// Applies one step and returns the resulting frame.
    pub fn step(&mut self) -> Result<Frame, QcaError> {
        self.state = evolve_step(self.operator, &self.state)?;
        self.time += 1;
        trace!(time = self.time, weight = self.state.weight(), "evolution step");
        Ok(self.frame())
    }

    /// The current state vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Steps applied so far.
    pub fn time(&self) -> usize {
        self.time
    }

    /// Lattice being evolved.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Consumes the evolution, returning the current state.
    pub fn into_state(self) -> StateVector {
        self.state
    }
}

impl<O: Gf2Operator + ?Sized> Iterator for Evolution<'_, O> {
    type Item = Result<Frame, QcaError>;

    /// Never returns `None`: the automaton has no horizon.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step())
    }
}
