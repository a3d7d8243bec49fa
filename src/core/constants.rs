//! Constants shared by the automaton and its presentation layer.

/// Defaults taken from the reference animation and the fixed display contract.
pub mod qca_constants {
    /// Grid side used by the live animation when no size is chosen.
    pub const DEFAULT_GRID_SIZE: usize = 50;
    /// Cadence of the live animation, one step per tick.
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 500;
    /// Display colors indexed by Pauli code (I, X, Z, Y).
    /// Consumers hard-code this order.
    pub const PALETTE: [&str; 4] = ["white", "red", "blue", "green"];
}
