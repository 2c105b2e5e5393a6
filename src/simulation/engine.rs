// src/simulation/engine.rs
use crate::core::{JointState, VisError};
use crate::operations::Gate;
use num_complex::Complex;

/// The core simulation engine: owns the working joint state and evolves it
/// gate by gate. (Internal visibility)
///
/// The state vector has dimension 2^N with qubit 0 as the most significant
/// bit of the basis index, matching the reduction module's convention.
pub(crate) struct StateEngine {
    state: JointState,
    num_qubits: usize,
}

impl StateEngine {
    /// Initializes the engine for a register of `num_qubits` qubits in the
    /// all-zero basis state |0…0⟩.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, VisError> {
        if num_qubits == 0 {
            return Err(VisError::InvalidDimension {
                message: "Cannot initialize the engine with zero qubits".to_string(),
            });
        }
        Ok(Self {
            state: JointState::zero_state(num_qubits),
            num_qubits,
        })
    }

    /// Read access to the current joint state.
    #[allow(dead_code)]
    pub(crate) fn state(&self) -> &JointState {
        &self.state
    }

    /// Consumes the engine, handing the joint state to the caller.
    pub(crate) fn into_state(self) -> JointState {
        self.state
    }

    // Crate-visible state override for engine-level tests.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: JointState) -> Result<(), VisError> {
        if state.dim() != self.state.dim() {
            return Err(VisError::InvalidDimension {
                message: format!(
                    "Cannot set state: dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    /// Applies one palette gate to the joint state.
    pub(crate) fn apply_gate(&mut self, gate: &Gate) -> Result<(), VisError> {
        match gate {
            Gate::Hadamard { target } => self.apply_single_qubit(*target, &hadamard_matrix()),
            Gate::RotateX { target, theta } => {
                self.apply_single_qubit(*target, &rotate_x_matrix(*theta))
            }
            Gate::RotateY { target, theta } => {
                self.apply_single_qubit(*target, &rotate_y_matrix(*theta))
            }
            Gate::CNot { control, target } => self.apply_cnot(*control, *target),
        }
    }

    /// Applies a 2×2 unitary to `target` in place.
    ///
    /// Basis states pair up into (|…0…⟩, |…1…⟩) couples differing only in the
    /// target bit; the matrix acts on each couple independently.
    fn apply_single_qubit(
        &mut self,
        target: usize,
        matrix: &[[Complex<f64>; 2]; 2],
    ) -> Result<(), VisError> {
        if target >= self.num_qubits {
            return Err(VisError::InvalidDimension {
                message: format!(
                    "Gate target {} out of range for a {}-qubit register",
                    target, self.num_qubits
                ),
            });
        }

        let stride = 1usize << (self.num_qubits - 1 - target);
        let dim = self.state.dim();
        let amps = self.state.amplitudes_mut();

        let mut base = 0;
        while base < dim {
            for i in base..base + stride {
                let a0 = amps[i];
                let a1 = amps[i + stride];
                amps[i] = matrix[0][0] * a0 + matrix[0][1] * a1;
                amps[i + stride] = matrix[1][0] * a0 + matrix[1][1] * a1;
            }
            base += stride << 1;
        }
        Ok(())
    }

    /// Applies a CNOT by swapping the amplitude pairs where the control bit
    /// is set and the target bit differs.
    fn apply_cnot(&mut self, control: usize, target: usize) -> Result<(), VisError> {
        if control == target {
            return Err(VisError::InvalidOperation {
                message: "CNOT control and target qubits cannot coincide".to_string(),
            });
        }
        if control >= self.num_qubits || target >= self.num_qubits {
            return Err(VisError::InvalidDimension {
                message: format!(
                    "CNOT ({}, {}) out of range for a {}-qubit register",
                    control, target, self.num_qubits
                ),
            });
        }

        let control_mask = 1usize << (self.num_qubits - 1 - control);
        let target_mask = 1usize << (self.num_qubits - 1 - target);
        let dim = self.state.dim();
        let amps = self.state.amplitudes_mut();

        for i in 0..dim {
            if i & control_mask != 0 && i & target_mask == 0 {
                amps.swap(i, i | target_mask);
            }
        }
        Ok(())
    }
}

/// The Hadamard matrix, (1/√2)·[[1, 1], [1, -1]].
fn hadamard_matrix() -> [[Complex<f64>; 2]; 2] {
    const S: f64 = std::f64::consts::FRAC_1_SQRT_2;
    [
        [Complex::new(S, 0.0), Complex::new(S, 0.0)],
        [Complex::new(S, 0.0), Complex::new(-S, 0.0)],
    ]
}

/// Rx(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]].
fn rotate_x_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let cos = Complex::new(half.cos(), 0.0);
    let neg_i_sin = Complex::new(0.0, -half.sin());
    [[cos, neg_i_sin], [neg_i_sin, cos]]
}

/// Ry(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]].
fn rotate_y_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let cos = Complex::new(half.cos(), 0.0);
    let sin = Complex::new(half.sin(), 0.0);
    [[cos, -sin], [sin, cos]]
}
