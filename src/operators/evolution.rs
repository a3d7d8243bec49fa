// src/operators/evolution.rs

use super::shift::shift_pair;
use crate::core::{GridSize, QcaError};
use crate::gf2::{Gf2Matrix, Gf2Operator, SparseGf2Matrix};
use tracing::debug;

/// Storage used for the evolution operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// Every entry stored, Θ(N⁴) bits. The reference construction.
    #[default]
    Dense,
    /// Only the ones, Θ(N²) entries. Entry-for-entry identical to `Dense`.
    Sparse,
}

/// The four grid-wide neighbor shifts `(H_left, H_right, V_up, V_down)`.
///
/// Horizontal shifts act within each row (`I_N ⊗ S`); vertical shifts act within
/// each column (`S ⊗ I_N`).
fn lattice_shifts(n: usize) -> Result<[Gf2Matrix; 4], QcaError> {
    let (l, r) = shift_pair(n)?;
    let identity = Gf2Matrix::identity(n);
    Ok([identity.kron(&l), identity.kron(&r), l.kron(&identity), r.kron(&identity)])
}

/// `A = (H_left + H_right + V_up + V_down + I) mod 2`, the N²×N² plus-shaped
/// neighborhood sum acting on the X-plane.
pub fn build_shift_sum(n: usize) -> Result<Gf2Matrix, QcaError> {
    let grid = GridSize::new(n)?;
    let [h_left, h_right, v_up, v_down] = lattice_shifts(n)?;
    h_left
        .add(&h_right)?
        .add(&v_up)?
        .add(&v_down)?
        .add(&Gf2Matrix::identity(grid.cells()))
}

/// Builds the dense `2N² × 2N²` transition operator `T = [[A, I], [I, 0]]`.
///
/// Applied to a state `(x, z)` it yields `(A·x + z, x)`: the X-plane picks up its
/// plus-shaped neighborhood and the old Z-plane, the Z-plane remembers the old
/// X-plane.
///
/// # Errors
/// `InvalidSize` for N = 0.
pub fn build_evolution_operator(n: usize) -> Result<Gf2Matrix, QcaError> {
    let grid = GridSize::new(n)?;
    let a = build_shift_sum(n)?;
    let identity = Gf2Matrix::identity(grid.cells());
    let zero = Gf2Matrix::zeros(grid.cells(), grid.cells());
    let t = Gf2Matrix::block(&a, &identity, &identity, &zero)?;
    debug!(grid = %grid, dimension = t.row_count(), ones = t.count_ones(), "built dense evolution operator");
    Ok(t)
}

fn sparse_shift_sum(n: usize) -> Result<SparseGf2Matrix, QcaError> {
    let grid = GridSize::new(n)?;
    let (l, r) = shift_pair(n)?;
    let (l, r) = (SparseGf2Matrix::from_dense(&l), SparseGf2Matrix::from_dense(&r));
    let identity = SparseGf2Matrix::identity(n);
    identity
        .kron(&l)
        .add(&identity.kron(&r))?
        .add(&l.kron(&identity))?
        .add(&r.kron(&identity))?
        .add(&SparseGf2Matrix::identity(grid.cells()))
}

/// Same operator as [`build_evolution_operator`] in compressed-sparse-row storage.
pub fn build_sparse_evolution_operator(n: usize) -> Result<SparseGf2Matrix, QcaError> {
    let grid = GridSize::new(n)?;
    let a = sparse_shift_sum(n)?;
    let identity = SparseGf2Matrix::identity(grid.cells());
    let zero = SparseGf2Matrix::zeros(grid.cells(), grid.cells());
    let t = SparseGf2Matrix::block(&a, &identity, &identity, &zero)?;
    debug!(grid = %grid, dimension = t.shape().0, ones = t.nnz(), "built sparse evolution operator");
    Ok(t)
}

/// Builds `T⁻¹ = [[0, I], [I, A]]`, which runs the automaton one step backwards:
/// `(x, z) ↦ (z, x + A·z)`.
pub fn build_inverse_evolution_operator(n: usize) -> Result<Gf2Matrix, QcaError> {
    let grid = GridSize::new(n)?;
    let a = build_shift_sum(n)?;
    let identity = Gf2Matrix::identity(grid.cells());
    let zero = Gf2Matrix::zeros(grid.cells(), grid.cells());
    Gf2Matrix::block(&zero, &identity, &identity, &a)
}

fn build_sparse_inverse_evolution_operator(n: usize) -> Result<SparseGf2Matrix, QcaError> {
    let grid = GridSize::new(n)?;
    let a = sparse_shift_sum(n)?;
    let identity = SparseGf2Matrix::identity(grid.cells());
    let zero = SparseGf2Matrix::zeros(grid.cells(), grid.cells());
    SparseGf2Matrix::block(&zero, &identity, &identity, &a)
}

/// An evolution operator in either storage. Immutable once built and shared
/// read-only by every step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionOperator {
    Dense(Gf2Matrix),
    Sparse(SparseGf2Matrix),
}

impl EvolutionOperator {
    /// Forward operator for `grid`.
    pub fn build(grid: GridSize, representation: Representation) -> Result<Self, QcaError> {
        match representation {
            Representation::Dense => build_evolution_operator(grid.side()).map(EvolutionOperator::Dense),
            Representation::Sparse => build_sparse_evolution_operator(grid.side()).map(EvolutionOperator::Sparse),
        }
    }

    /// Backward operator for `grid`.
    pub fn build_inverse(grid: GridSize, representation: Representation) -> Result<Self, QcaError> {
        match representation {
            Representation::Dense => build_inverse_evolution_operator(grid.side()).map(EvolutionOperator::Dense),
            Representation::Sparse => build_sparse_inverse_evolution_operator(grid.side()).map(EvolutionOperator::Sparse),
        }
    }

    /// Storage backing this operator.
    pub fn representation(&self) -> Representation {
        match self {
            EvolutionOperator::Dense(_) => Representation::Dense,
            EvolutionOperator::Sparse(_) => Representation::Sparse,
        }
    }

    /// Side of the square operator, 2·N².
    pub fn dimension(&self) -> usize {
        self.shape().0
    }
}

impl Gf2Operator for EvolutionOperator {
    fn shape(&self) -> (usize, usize) {
        match self {
            EvolutionOperator::Dense(m) => Gf2Operator::shape(m),
            EvolutionOperator::Sparse(m) => Gf2Operator::shape(m),
        }
    }

    fn get(&self, row: usize, col: usize) -> bool {
        match self {
            EvolutionOperator::Dense(m) => m.get(row, col),
            EvolutionOperator::Sparse(m) => m.get(row, col),
        }
    }

    fn mul_vec(&self, reduced: &[u8]) -> Vec<u8> {
        match self {
            EvolutionOperator::Dense(m) => m.mul_vec(reduced),
            EvolutionOperator::Sparse(m) => m.mul_vec(reduced),
        }
    }
}

impl From<Gf2Matrix> for EvolutionOperator {
    fn from(matrix: Gf2Matrix) -> Self {
        EvolutionOperator::Dense(matrix)
    }
}

impl From<SparseGf2Matrix> for EvolutionOperator {
    fn from(matrix: SparseGf2Matrix) -> Self {
        EvolutionOperator::Sparse(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf2::{mod2_matmul, same_entries};

    #[test]
    fn test_single_cell_operator() -> Result<(), QcaError> {
        // N=1: five copies of the identity sum to the identity.
        assert_eq!(build_shift_sum(1)?, Gf2Matrix::identity(1));
        let t = build_evolution_operator(1)?;
        assert_eq!(t, Gf2Matrix::from_rows(&[vec![1u8, 1], vec![1, 0]])?);
        Ok(())
    }

    #[test]
    fn test_two_by_two_shifts_cancel() -> Result<(), QcaError> {
        assert_eq!(build_shift_sum(2)?, Gf2Matrix::identity(4));
        let i4 = Gf2Matrix::identity(4);
        let expected = Gf2Matrix::block(&i4, &i4, &i4, &Gf2Matrix::zeros(4, 4))?;
        assert_eq!(build_evolution_operator(2)?, expected);
        Ok(())
    }

    #[test]
    fn test_plus_shaped_neighborhood() -> Result<(), QcaError> {
        let a = build_shift_sum(5)?;
        let grid = GridSize::new(5)?;
        for cell in 0..grid.cells() {
            assert_eq!(a.row_weight(cell), 5, "row {}", cell);
        }
        // corner (0, 0) couples to itself and its wrapped neighbors
        assert_eq!(a.row_ones(0).collect::<Vec<usize>>(), vec![0, 1, 4, 5, 20]);
        assert_eq!(a, a.transposed());
        Ok(())
    }

    #[test]
    fn test_block_structure() -> Result<(), QcaError> {
        let n = 4;
        let m = n * n;
        let t = build_evolution_operator(n)?;
        let a = build_shift_sum(n)?;
        assert_eq!(t.shape(), (2 * m, 2 * m));
        for r in 0..m {
            for c in 0..m {
                assert_eq!(t.get(r, c), a.get(r, c));
                assert_eq!(t.get(r, m + c), r == c);
                assert_eq!(t.get(m + r, c), r == c);
                assert!(!t.get(m + r, m + c));
            }
        }
        Ok(())
    }

    #[test]
    fn test_sparse_matches_dense() -> Result<(), QcaError> {
        for n in 1..=6 {
            let dense = build_evolution_operator(n)?;
            let sparse = build_sparse_evolution_operator(n)?;
            assert!(same_entries(&dense, &sparse), "forward N={}", n);
            assert_eq!(sparse.to_dense(), dense);

            let grid = GridSize::new(n)?;
            let inverse = EvolutionOperator::build_inverse(grid, Representation::Sparse)?;
            assert!(same_entries(&build_inverse_evolution_operator(n)?, &inverse), "inverse N={}", n);
        }
        Ok(())
    }

    #[test]
    fn test_inverse_undoes_forward() -> Result<(), QcaError> {
        for n in 1..=5 {
            let t = build_evolution_operator(n)?;
            let t_inv = build_inverse_evolution_operator(n)?;
            let dim = 2 * n * n;
            assert_eq!(t.matmul(&t_inv)?, Gf2Matrix::identity(dim));
            assert_eq!(t_inv.matmul(&t)?, Gf2Matrix::identity(dim));
        }
        Ok(())
    }

    #[test]
    fn test_new_z_is_old_x() -> Result<(), QcaError> {
        let grid = GridSize::new(3)?;
        let op = EvolutionOperator::build(grid, Representation::Sparse)?;
        assert_eq!(op.representation(), Representation::Sparse);
        assert_eq!(op.dimension(), 18);
        let v: Vec<u8> = (0..18).map(|i| u8::from(i % 3 == 0 || i % 7 == 1)).collect();
        let out = mod2_matmul(&op, &v)?;
        assert_eq!(&out[9..], &v[..9]);
        Ok(())
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(build_evolution_operator(0), Err(QcaError::InvalidSize { .. })));
        assert!(matches!(build_sparse_evolution_operator(0), Err(QcaError::InvalidSize { .. })));
        assert!(build_inverse_evolution_operator(0).is_err());
    }
}
