// src/simulation/mod.rs

//! Simulates a `Circuit` and derives the per-qubit Bloch views.
//! This module contains the `Simulator` entry point and the internal
//! `StateEngine` responsible for evolving the joint state.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{QubitView, Snapshot};

use crate::bloch::to_bloch;
use crate::circuits::Circuit;
use crate::core::VisError;
use crate::reduction::reduce;
use engine::StateEngine;

/// The main simulator orchestrating one visualization pass.
///
/// A run is a single synchronous recomputation: rebuild the joint state from
/// |0…0⟩ through the whole gate log, then reduce and map every qubit. The
/// log is never applied incrementally on top of a previous state — replaying
/// from scratch and incremental application are not guaranteed bit-identical
/// under floating-point rounding, and only the former is offered.
#[derive(Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the full gate log of `circuit` and returns the per-qubit views.
    ///
    /// Deterministic: the same circuit always yields a bit-identical
    /// [`Snapshot`].
    ///
    /// # Errors
    /// `InvalidDimension` or `InvalidOperation` when a gate is inconsistent
    /// with the register; these indicate a caller bug since [`Circuit`]
    /// already validates gates at assembly time.
    pub fn run(&self, circuit: &Circuit) -> Result<Snapshot, VisError> {
        let num_qubits = circuit.num_qubits();

        // 1. Fresh engine in |0...0>.
        let mut engine = StateEngine::init(num_qubits)?;

        // 2. Replay the append-only gate log in order.
        for gate in circuit.gates() {
            engine.apply_gate(gate)?;
        }
        let state = engine.into_state();

        // 3. For each qubit: partial trace, then Pauli expectations.
        let mut qubits = Vec::with_capacity(num_qubits);
        for target in 0..num_qubits {
            let density = reduce(&state, num_qubits, target)?;
            let bloch = to_bloch(&density);
            qubits.push(QubitView::new(density, bloch));
        }

        Ok(Snapshot::new(state, qubits))
    }
}

#[cfg(test)]
mod tests {
    use super::engine::StateEngine;
    use super::*;
    use crate::core::JointState;
    use crate::operations::Gate;
    use num_complex::Complex;
    use num_traits::Zero;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    /// Asserts that two complex state vectors are approximately equal
    /// component-wise.
    fn assert_complex_vec_approx_equal(
        actual: &[Complex<f64>],
        expected: &[Complex<f64>],
        tolerance: f64,
        context: &str,
    ) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < tolerance * tolerance,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
                i,
                actual[i],
                expected[i],
                dist_sq,
                context
            );
        }
    }

    #[test]
    fn engine_starts_in_all_zero_state() -> Result<(), VisError> {
        let engine = StateEngine::init(2)?;
        let expected = vec![
            Complex::new(1.0, 0.0),
            Complex::zero(),
            Complex::zero(),
            Complex::zero(),
        ];
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "initial |00> state",
        );
        Ok(())
    }

    #[test]
    fn engine_rejects_empty_register() {
        assert!(matches!(
            StateEngine::init(0),
            Err(VisError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn hadamard_creates_equal_superposition() -> Result<(), VisError> {
        let mut engine = StateEngine::init(1)?;
        engine.apply_gate(&Gate::Hadamard { target: 0 })?;
        let expected = vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        ];
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "H|0>",
        );
        Ok(())
    }

    #[test]
    fn hadamard_then_cnot_builds_bell_state() -> Result<(), VisError> {
        let mut engine = StateEngine::init(2)?;
        engine.apply_gate(&Gate::Hadamard { target: 0 })?;
        engine.apply_gate(&Gate::CNot { control: 0, target: 1 })?;
        // (|00> + |11>)/sqrt(2)
        let expected = vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::zero(),
            Complex::zero(),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        ];
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "Bell state after H then CNOT",
        );
        Ok(())
    }

    #[test]
    fn cnot_leaves_zero_control_alone() -> Result<(), VisError> {
        let mut engine = StateEngine::init(2)?;
        engine.apply_gate(&Gate::CNot { control: 0, target: 1 })?;
        let expected = vec![
            Complex::new(1.0, 0.0),
            Complex::zero(),
            Complex::zero(),
            Complex::zero(),
        ];
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "CNOT with |0> control",
        );
        Ok(())
    }

    #[test]
    fn rotate_x_tilts_toward_minus_i_one() -> Result<(), VisError> {
        // Rx(theta)|0> = cos(theta/2)|0> - i sin(theta/2)|1>
        let theta = std::f64::consts::FRAC_PI_3;
        let mut engine = StateEngine::init(1)?;
        engine.apply_gate(&Gate::RotateX { target: 0, theta })?;
        let expected = vec![
            Complex::new((theta / 2.0).cos(), 0.0),
            Complex::new(0.0, -(theta / 2.0).sin()),
        ];
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "Rx(pi/3)|0>",
        );
        Ok(())
    }

    #[test]
    fn gate_on_middle_qubit_keeps_neighbours_fixed() -> Result<(), VisError> {
        // H on qubit 1 of three: |000> -> (|000> + |010>)/sqrt(2)
        let mut engine = StateEngine::init(3)?;
        engine.apply_gate(&Gate::Hadamard { target: 1 })?;
        let mut expected = vec![Complex::zero(); 8];
        expected[0] = Complex::new(FRAC_1_SQRT_2, 0.0);
        expected[2] = Complex::new(FRAC_1_SQRT_2, 0.0);
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "H on middle qubit of |000>",
        );
        Ok(())
    }

    #[test]
    fn cnot_flips_target_given_set_control() -> Result<(), VisError> {
        let mut engine = StateEngine::init(2)?;
        // Put the control in |1> directly.
        engine.set_state(JointState::from_amplitudes(vec![
            Complex::zero(),
            Complex::zero(),
            Complex::new(1.0, 0.0), // |10>
            Complex::zero(),
        ]))?;
        engine.apply_gate(&Gate::CNot { control: 0, target: 1 })?;
        let expected = vec![
            Complex::zero(),
            Complex::zero(),
            Complex::zero(),
            Complex::new(1.0, 0.0), // |11>
        ];
        assert_complex_vec_approx_equal(
            engine.state().amplitudes(),
            &expected,
            TEST_TOLERANCE,
            "CNOT flips |10> to |11>",
        );
        Ok(())
    }

    #[test]
    fn engine_rejects_out_of_range_gate() -> Result<(), VisError> {
        let mut engine = StateEngine::init(1)?;
        assert!(matches!(
            engine.apply_gate(&Gate::Hadamard { target: 1 }),
            Err(VisError::InvalidDimension { .. })
        ));
        assert!(matches!(
            engine.apply_gate(&Gate::CNot { control: 0, target: 0 }),
            Err(VisError::InvalidOperation { .. })
        ));
        Ok(())
    }
}
