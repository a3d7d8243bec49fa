// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod grid;
pub mod pauli;
pub mod state;

// Re-export public types for convenient access via `cqca::core::TypeName`
pub use error::QcaError;
pub use grid::GridSize;
pub use pauli::Pauli;
pub use state::{StateVector, reduce_mod2};

pub mod constants;
pub use constants::qca_constants::{DEFAULT_FRAME_INTERVAL_MS, DEFAULT_GRID_SIZE, PALETTE}; // Re-export
