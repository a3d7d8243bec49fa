//! Point-source evolution: a single X in the middle of the torus grows into a
//! fractal pattern.
//!
//! Run with `RUST_LOG=cqca=debug` to see operator construction and step tracing.

use cqca::core::{DEFAULT_FRAME_INTERVAL_MS, DEFAULT_GRID_SIZE, PALETTE};
use cqca::{GridSize, Representation, Simulator, SimulatorConfig, StateVector};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // --- Bounded history on a small grid, printed as display codes ---
    let grid = match GridSize::new(9) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    println!("Palette (I, X, Z, Y): {:?}", PALETTE);

    let simulator = match Simulator::new(grid) {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Failed to build the {} operator: {}", grid, e);
            return;
        }
    };

    match simulator.run(&StateVector::centered_x(grid), 4) {
        Ok(history) => {
            println!("{}", history);
            match history.symbolic_grids() {
                Ok(grids) => {
                    for ((t, codes), weight) in grids.iter().enumerate().zip(history.weights()) {
                        println!("t = {} (weight {})\n{}", t, weight, codes);
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Err(e) => {
            eprintln!("\n--- Simulation Failed ---");
            eprintln!("Error: {}", e);
            return;
        }
    }

    // --- Live evolution on the default grid, a few ticks at the animation cadence ---
    let live_grid = match GridSize::new(DEFAULT_GRID_SIZE) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let config = SimulatorConfig::default().with_representation(Representation::Sparse);
    let live = match Simulator::with_config(live_grid, config) {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Failed to build the {} operator: {}", live_grid, e);
            return;
        }
    };
    let mut evolution = match live.evolve(StateVector::centered_x(live_grid)) {
        Ok(evolution) => evolution,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("Live evolution on {} ({} ms per tick):", live_grid, DEFAULT_FRAME_INTERVAL_MS);
    for frame in evolution.by_ref().take(5) {
        match frame {
            Ok(frame) => println!("  t = {}: {} non-identity cells", frame.time, frame.pauli.chars().filter(|&c| c != 'I').count()),
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS));
    }
    println!("Final weight: {}", evolution.state().weight());
}
