// tests/simulation_tests.rs

// Import necessary types from the cqca crate
use cqca::{
    GridSize, Pauli, QcaError, Representation, SimulationHistory, Simulator, SimulatorConfig, StateVector,
    build_evolution_operator, pauli_to_numeric, simulate_fractal_qca, vector_to_pauli_string,
};
use cqca::patterns::InitialStateBuilder;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Helper function to create a validated grid size for tests
fn grid(n: usize) -> GridSize {
    GridSize::new(n).expect("test grid sizes are positive")
}

// Helper function to check a whole history against expected Pauli strings
fn check_history(history: &SimulationHistory, expected: &[&str]) {
    assert_eq!(history.len(), expected.len(), "History length mismatch");
    for (t, want) in expected.iter().enumerate() {
        assert_eq!(history.get(t), Some(*want), "Mismatch at t = {}", t);
    }
}

#[test]
fn test_center_seed_on_three_by_three() -> Result<(), QcaError> {
    let mut initial = vec![0u8; 18];
    initial[4] = 1;
    let t = build_evolution_operator(3)?;
    let history = simulate_fractal_qca(3, 1, &initial, &t)?;

    // X-part after one step: A·e4 = center plus its four neighbors {1, 3, 5, 7}.
    // Z-part: the old X-part, so only the center carries z = 1.
    assert_eq!(history[0], "IIIIXIIII");
    assert_eq!(history[1], "IXIXYXIXI");
    Ok(())
}

#[test]
fn test_two_by_two_cycle_period_three() -> Result<(), QcaError> {
    // Shifts cancel pairwise on a 2x2 torus, so T = [[I, I], [I, 0]] and every
    // cell evolves alone: x' = x + z, z' = x.
    let simulator = Simulator::new(grid(2))?;
    let initial = InitialStateBuilder::new(grid(2)).place(0, 0, Pauli::X).place(1, 1, Pauli::Z).build()?;
    let history = simulator.run(&initial, 6)?;
    check_history(&history, &["XIIZ", "YIIX", "ZIIY", "XIIZ", "YIIX", "ZIIY", "XIIZ"]);
    Ok(())
}

#[test]
fn test_single_cell_grid() -> Result<(), QcaError> {
    let simulator = Simulator::new(grid(1))?;
    let history = simulator.run(&StateVector::with_pauli(grid(1), 0, Pauli::Y)?, 3)?;
    check_history(&history, &["Y", "Z", "X", "Y"]);
    Ok(())
}

#[test]
fn test_identity_state_is_fixed() -> Result<(), QcaError> {
    let simulator = Simulator::new(grid(4))?;
    let history = simulator.run(&StateVector::zeros(grid(4)), 5)?;
    assert!(history.frames().iter().all(|frame| frame == &"I".repeat(16)));
    assert_eq!(history.weights(), vec![0; 6]);
    Ok(())
}

#[test]
fn test_history_is_deterministic() -> Result<(), QcaError> {
    let g = grid(6);
    let initial = StateVector::random(g, &mut StdRng::seed_from_u64(2024));
    let t = build_evolution_operator(6)?;
    let first = simulate_fractal_qca(6, 10, initial.as_slice(), &t)?;
    let second = simulate_fractal_qca(6, 10, initial.as_slice(), &t)?;
    assert_eq!(first, second);
    assert_eq!(first.len(), 11);
    Ok(())
}

#[test]
fn test_z_plane_remembers_x_plane() -> Result<(), QcaError> {
    let g = grid(5);
    let simulator = Simulator::new(g)?;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..8 {
        let state = StateVector::random(g, &mut rng);
        let next = simulator.step(&state)?;
        assert_eq!(next.z_part(), state.x_part());
    }
    Ok(())
}

#[test]
fn test_dense_and_sparse_runs_agree() -> Result<(), QcaError> {
    let g = grid(7);
    let initial = StateVector::random(g, &mut StdRng::seed_from_u64(99));
    let dense = Simulator::new(g)?.run(&initial, 12)?;
    let sparse_config = SimulatorConfig::default().with_representation(Representation::Sparse);
    let sparse = Simulator::with_config(g, sparse_config)?.run(&initial, 12)?;
    assert_eq!(dense, sparse);
    Ok(())
}

#[test]
fn test_frames_decode_to_original_bits() -> Result<(), QcaError> {
    // Every frame decodes to codes that match the (x, z) pairs of the state it came from.
    let g = grid(4);
    let simulator = Simulator::new(g)?;
    let mut evolution = simulator.evolve(StateVector::random(g, &mut StdRng::seed_from_u64(5)))?;
    for _ in 0..6 {
        let frame = evolution.step()?;
        let codes = frame.symbolic_grid()?;
        let state = evolution.state();
        for cell in 0..g.cells() {
            let (x, z) = (state.x_part()[cell], state.z_part()[cell]);
            let (row, col) = g.coords(cell)?;
            assert_eq!(codes.get(row, col), Some(Pauli::from_bits(x, z).code()));
        }
        assert_eq!(vector_to_pauli_string(state.as_slice())?, frame.pauli);
    }
    Ok(())
}

#[test]
fn test_symbolic_grids_for_every_step() -> Result<(), QcaError> {
    let simulator = Simulator::new(grid(3))?;
    let history = simulator.run(&StateVector::centered_x(grid(3)), 2)?;
    let grids = history.symbolic_grids()?;
    assert_eq!(grids.len(), 3);
    assert_eq!(grids[2], pauli_to_numeric("IYIYZYIYI", 3)?);
    assert_eq!(grids[2].histogram(), [4, 0, 1, 4]);
    assert_eq!(history.weights(), vec![1, 5, 5]);
    assert_eq!(history.last(), Some("IYIYZYIYI"));
    Ok(())
}

#[test]
fn test_mismatched_state_aborts_run() -> Result<(), QcaError> {
    let simulator = Simulator::new(grid(3))?;
    let err = simulator.run(&StateVector::zeros(grid(2)), 4).unwrap_err();
    assert!(matches!(err, QcaError::DimensionMismatch { expected: 18, found: 8, .. }));
    Ok(())
}
