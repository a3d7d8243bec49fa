// src/simulation/mod.rs

//! Drives the automaton through time.
//!
//! [`simulate_fractal_qca`] records a bounded history for batch use; [`Evolution`]
//! steps without a horizon for live animation. Both apply the single step contract
//! of [`evolve_step`]. [`Simulator`] bundles a grid with its operator so callers
//! build the operator once and reuse it across runs.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use engine::{Evolution, Frame, evolve_step};
pub use results::SimulationHistory;

use crate::core::{GridSize, QcaError, StateVector};
use crate::gf2::Gf2Operator;
use crate::operators::{EvolutionOperator, Representation};
use engine::{check_operator, check_state};
use tracing::{debug, info_span};

/// Runtime options for a [`Simulator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Storage for the operator built by the simulator.
    pub representation: Representation,
}

impl SimulatorConfig {
    /// Selects dense or sparse operator storage.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }
}

/// Records `steps + 1` frames starting at `initial`. Inputs are already checked.
fn record<O: Gf2Operator + ?Sized>(
    grid: GridSize,
    operator: &O,
    initial: StateVector,
    steps: usize,
) -> Result<Vec<String>, QcaError> {
    let _span = info_span!("simulate", grid = %grid, steps).entered();
    let mut evolution = Evolution::new(grid, operator, initial)?;
    let mut frames = Vec::with_capacity(steps + 1);
    frames.push(evolution.frame().pauli);
    for _ in 0..steps {
        frames.push(evolution.step()?.pauli);
    }
    debug!(frames = frames.len(), final_weight = evolution.state().weight(), "simulation finished");
    Ok(frames)
}

/// Simulates `steps` time steps of the automaton on an N×N torus.
///
/// Returns `steps + 1` Pauli strings: element 0 encodes `initial` reduced mod 2 and
/// element k the state after k applications of `operator`. Identical inputs always
/// yield identical histories.
///
/// # Arguments
/// * `n` - Grid side N (at least 1).
/// * `steps` - Number of steps T.
/// * `initial` - Initial state of length `2·N²`; entries are read by parity.
/// * `operator` - A `2·N² × 2·N²` evolution operator.
///
/// # Errors
/// * `InvalidSize` if N = 0.
/// * `DimensionMismatch` if `initial` or `operator` does not fit the grid.
///
/// ```
/// use cqca::operators::build_evolution_operator;
/// use cqca::simulation::simulate_fractal_qca;
///
/// let mut initial = vec![0u8; 18];
/// initial[4] = 1; // X on the center cell of a 3x3 grid
/// let t = build_evolution_operator(3).unwrap();
/// let history = simulate_fractal_qca(3, 1, &initial, &t).unwrap();
/// assert_eq!(history, vec!["IIIIXIIII", "IXIXYXIXI"]);
/// ```
pub fn simulate_fractal_qca<O: Gf2Operator + ?Sized>(
    n: usize,
    steps: usize,
    initial: &[u8],
    operator: &O,
) -> Result<Vec<String>, QcaError> {
    let grid = GridSize::new(n)?;
    check_operator(grid, operator)?;
    if initial.len() != grid.state_len() {
        return Err(QcaError::dimension(format!("initial state for a {} grid", grid), grid.state_len(), initial.len()));
    }
    let state = StateVector::from_bits(initial)?;
    record(grid, operator, state, steps)
}

/// A lattice together with the evolution operator built for it.
///
/// The operator is constructed once (or supplied by the caller) and shared
/// read-only by every run.
#[derive(Debug, Clone)]
pub struct Simulator {
    grid: GridSize,
    config: SimulatorConfig,
    operator: EvolutionOperator,
}

impl Simulator {
    /// Creates a simulator with the default (dense) operator.
    pub fn new(grid: GridSize) -> Result<Self, QcaError> {
        Self::with_config(grid, SimulatorConfig::default())
    }

    /// Creates a simulator, building the operator as `config` asks.
    pub fn with_config(grid: GridSize, config: SimulatorConfig) -> Result<Self, QcaError> {
        let operator = EvolutionOperator::build(grid, config.representation)?;
        Ok(Self { grid, config, operator })
    }

    /// Uses a caller-supplied operator instead of building one.
    ///
    /// # Errors
    /// `DimensionMismatch` unless the operator is `2·N² × 2·N²`.
    pub fn with_operator(grid: GridSize, operator: impl Into<EvolutionOperator>) -> Result<Self, QcaError> {
        let operator = operator.into();
        check_operator(grid, &operator)?;
        let config = SimulatorConfig { representation: operator.representation() };
        Ok(Self { grid, config, operator })
    }

    /// Lattice this simulator evolves.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Configuration the operator was built with.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// The prebuilt evolution operator.
    pub fn operator(&self) -> &EvolutionOperator {
        &self.operator
    }

    /// Runs `steps` steps from `initial` and records every frame.
    ///
    /// # Errors
    /// `DimensionMismatch` if `initial` does not fit the grid.
    pub fn run(&self, initial: &StateVector, steps: usize) -> Result<SimulationHistory, QcaError> {
        check_state(self.grid, initial)?;
        let frames = record(self.grid, &self.operator, initial.clone(), steps)?;
        Ok(SimulationHistory::new(self.grid, frames))
    }

    /// Starts an unbounded evolution from `initial`, for per-tick use.
    pub fn evolve(&self, initial: StateVector) -> Result<Evolution<'_, EvolutionOperator>, QcaError> {
        Evolution::new(self.grid, &self.operator, initial)
    }

    /// Single step from `state`.
    pub fn step(&self, state: &StateVector) -> Result<StateVector, QcaError> {
        check_state(self.grid, state)?;
        evolve_step(&self.operator, state)
    }
}
