// src/operators/mod.rs

//! Construction of the lattice transition operator.
//!
//! The 2D rule is assembled from 1D cyclic shifts with Kronecker products, so each
//! shift moves bits along exactly one axis of the torus.

pub mod shift;
mod evolution;

pub use evolution::{
    EvolutionOperator,
    Representation,
    build_evolution_operator,
    build_inverse_evolution_operator,
    build_shift_sum,
    build_sparse_evolution_operator,
};
pub use shift::{left_shift, right_shift, shift_pair};
