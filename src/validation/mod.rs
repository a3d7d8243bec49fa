// src/validation/mod.rs

//! Checks on states and operators, for callers that bring their own.
//!
//! The automaton core validates inputs at every entry point; these functions
//! expose the same checks plus structural properties of the transition rule
//! (permutation shifts, the X→Z memory plane, reversibility).

use crate::core::{GridSize, QcaError, StateVector};
use crate::gf2::{Gf2Operator, mod2_matmul};
use crate::simulation::engine::check_operator;

// --- Helper Functions ---

/// Unit vector `e_index` of length `len`. (Internal to this module)
fn basis_vector(len: usize, index: usize) -> Vec<u8> {
    let mut v = vec![0u8; len];
    v[index] = 1;
    v
}

// --- Public Validation Functions ---

/// `true` when every entry is 0 or 1.
pub fn is_mod2_reduced(vector: &[u8]) -> bool {
    vector.iter().all(|&v| v <= 1)
}

/// Checks that a vector of length `len` is a full state for `grid`.
///
/// # Returns
/// * `Ok(())` if `len == 2·N²`.
/// * `Err(QcaError::OddLength)` for odd lengths, `DimensionMismatch` otherwise.
pub fn validate_state_len(grid: GridSize, len: usize) -> Result<(), QcaError> {
    if len % 2 != 0 {
        return Err(QcaError::OddLength { length: len });
    }
    if len != grid.state_len() {
        return Err(QcaError::dimension(format!("state for a {} grid", grid), grid.state_len(), len));
    }
    Ok(())
}

/// Checks a state vector against `grid`.
pub fn validate_state(grid: GridSize, state: &StateVector) -> Result<(), QcaError> {
    validate_state_len(grid, state.len())
}

/// Checks that `operator` is square with side `2·N²`.
pub fn validate_operator<O: Gf2Operator + ?Sized>(grid: GridSize, operator: &O) -> Result<(), QcaError> {
    check_operator(grid, operator)
}

/// `true` when the operator is square with exactly one 1 in every row and column.
pub fn is_permutation_matrix<O: Gf2Operator + ?Sized>(operator: &O) -> bool {
    let (rows, columns) = operator.shape();
    if rows != columns {
        return false;
    }
    let mut column_hits = vec![0usize; columns];
    for r in 0..rows {
        let mut row_hits = 0;
        for (c, hits) in column_hits.iter_mut().enumerate() {
            if operator.get(r, c) {
                row_hits += 1;
                *hits += 1;
            }
        }
        if row_hits != 1 {
            return false;
        }
    }
    column_hits.iter().all(|&hits| hits == 1)
}

/// `true` when the operator copies the X-part of any state into the Z-part of its
/// image unchanged (the lower block row is `[I, 0]`).
///
/// Probes every basis vector through [`mod2_matmul`].
pub fn copies_x_into_z<O: Gf2Operator + ?Sized>(operator: &O) -> Result<bool, QcaError> {
    let (rows, columns) = operator.shape();
    if rows != columns || rows % 2 != 0 {
        return Ok(false);
    }
    let m = rows / 2;
    for j in 0..columns {
        let image = mod2_matmul(operator, &basis_vector(columns, j))?;
        let z_image = &image[m..];
        let expected_one = (j < m).then_some(j);
        let ok = z_image.iter().enumerate().all(|(i, &bit)| (bit == 1) == (Some(i) == expected_one));
        if !ok {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `true` when `backward` undoes `forward` on every basis vector, i.e.
/// `backward · forward = I`.
pub fn is_inverse_pair<F, B>(forward: &F, backward: &B) -> Result<bool, QcaError>
where
    F: Gf2Operator + ?Sized,
    B: Gf2Operator + ?Sized,
{
    let (rows, columns) = forward.shape();
    if rows != columns || backward.shape() != (rows, columns) {
        return Ok(false);
    }
    for j in 0..columns {
        let e_j = basis_vector(columns, j);
        let round_trip = mod2_matmul(backward, &mod2_matmul(forward, &e_j)?)?;
        if round_trip != e_j {
            return Ok(false);
        }
    }
    Ok(true)
}
