// tests/operator_tests.rs

use cqca::gf2::same_entries;
use cqca::operators::{build_inverse_evolution_operator, build_shift_sum, shift_pair};
use cqca::simulation::Evolution;
use cqca::{
    EvolutionOperator, Gf2Matrix, GridSize, QcaError, Representation, StateVector, build_evolution_operator,
    build_sparse_evolution_operator, copies_x_into_z, is_inverse_pair, is_permutation_matrix, left_shift,
    mod2_matmul, right_shift,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_shifts_are_inverse_permutations() -> Result<(), Box<dyn std::error::Error>> {
    for n in 1..=8 {
        let (l, r) = shift_pair(n)?;
        assert!(is_permutation_matrix(&l), "L not a permutation for N={}", n);
        assert!(is_permutation_matrix(&r), "R not a permutation for N={}", n);
        let identity = Gf2Matrix::identity(n);
        assert_eq!(l.matmul(&r)?, identity);
        assert_eq!(r.matmul(&l)?, identity);
    }
    Ok(())
}

#[test]
fn test_lattice_shifts_move_one_axis() -> Result<(), QcaError> {
    let n = 4;
    let g = GridSize::new(n)?;
    let identity = Gf2Matrix::identity(n);
    let horizontal = identity.kron(&right_shift(n)?);
    let vertical = left_shift(n)?.kron(&identity);
    assert!(is_permutation_matrix(&horizontal));
    assert!(is_permutation_matrix(&vertical));

    // a bit at (2, 3) is read from its right neighbor, wrapping to column 0
    let mut v = vec![0u8; g.cells()];
    v[g.cell_index(2, 0)?] = 1;
    let moved = mod2_matmul(&horizontal, &v)?;
    assert_eq!(moved.iter().position(|&b| b == 1), Some(g.cell_index(2, 3)?));

    // vertical shift keeps the column and wraps the row
    let mut v = vec![0u8; g.cells()];
    v[g.cell_index(3, 1)?] = 1;
    let moved = mod2_matmul(&vertical, &v)?;
    assert_eq!(moved.iter().position(|&b| b == 1), Some(g.cell_index(0, 1)?));
    Ok(())
}

#[test]
fn test_boundary_operators() -> Result<(), QcaError> {
    assert_eq!(build_evolution_operator(1)?.to_string(), "11\n10\n");
    assert_eq!(build_shift_sum(2)?, Gf2Matrix::identity(4));
    assert_eq!(
        build_evolution_operator(2)?.to_string(),
        "10001000\n01000100\n00100010\n00010001\n10000000\n01000000\n00100000\n00010000\n"
    );
    Ok(())
}

#[test]
fn test_sparse_construction_is_entry_identical() -> Result<(), QcaError> {
    for n in 1..=8 {
        let dense = build_evolution_operator(n)?;
        let sparse = build_sparse_evolution_operator(n)?;
        assert!(same_entries(&dense, &sparse), "N={}", n);
        // 5 ones per row of A for N >= 3, plus the two identity blocks
        if n >= 3 {
            assert_eq!(sparse.nnz(), 7 * n * n);
        }
    }
    Ok(())
}

#[test]
fn test_every_operator_copies_x_into_z() -> Result<(), QcaError> {
    for n in 1..=4 {
        assert!(copies_x_into_z(&build_evolution_operator(n)?)?);
        assert!(copies_x_into_z(&build_sparse_evolution_operator(n)?)?);
    }
    Ok(())
}

#[test]
fn test_inverse_operator_rewinds_random_states() -> Result<(), QcaError> {
    let g = GridSize::new(5)?;
    let forward = EvolutionOperator::build(g, Representation::Sparse)?;
    let backward = EvolutionOperator::build_inverse(g, Representation::Sparse)?;
    assert!(is_inverse_pair(&forward, &backward)?);
    assert!(is_inverse_pair(&build_evolution_operator(3)?, &build_inverse_evolution_operator(3)?)?);

    let initial = StateVector::random(g, &mut StdRng::seed_from_u64(31));
    let mut ahead = Evolution::new(g, &forward, initial.clone())?;
    for _ in 0..9 {
        ahead.step()?;
    }
    let mut behind = Evolution::new(g, &backward, ahead.into_state())?;
    for _ in 0..9 {
        behind.step()?;
    }
    assert_eq!(behind.state(), &initial);
    Ok(())
}

#[test]
fn test_matmul_output_is_reduced() -> Result<(), QcaError> {
    let t = build_evolution_operator(3)?;
    let raw: Vec<u8> = (0..18u8).map(|i| i * 3).collect();
    let once = mod2_matmul(&t, &raw)?;
    assert!(once.iter().all(|&b| b <= 1));
    let reduced: Vec<u8> = raw.iter().map(|v| v % 2).collect();
    assert_eq!(once, mod2_matmul(&t, &reduced)?);
    Ok(())
}
