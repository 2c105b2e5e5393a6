// src/operations/mod.rs

//! The fixed gate palette a circuit can be assembled from.
//!
//! The palette is deliberately small: a Hadamard, two single-qubit rotations
//! and a CNOT. This is everything the visualization front-end offers; there
//! is no arbitrary-unitary escape hatch.

/// A single gate in the palette, applied at a fixed position in the register.
///
/// Rotation angles are free parameters here; the front-end binds them to
/// fixed values (π/3 for X, π/4 for Y).
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// The Hadamard gate, mapping |0⟩ to (|0⟩+|1⟩)/√2.
    Hadamard {
        /// The qubit the gate acts on.
        target: usize,
    },

    /// Rotation about the X axis of the Bloch sphere by `theta` radians.
    RotateX {
        /// The qubit the gate acts on.
        target: usize,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Rotation about the Y axis of the Bloch sphere by `theta` radians.
    RotateY {
        /// The qubit the gate acts on.
        target: usize,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Controlled-NOT: flips `target` when `control` is |1⟩.
    CNot {
        /// The qubit whose state conditions the flip.
        control: usize,
        /// The qubit that is flipped.
        target: usize,
    },
}

impl Gate {
    /// Returns the qubit indices the gate mentions, in declaration order.
    /// Used by the circuit log to validate indices against the register size.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Gate::Hadamard { target } => vec![*target],
            Gate::RotateX { target, .. } => vec![*target],
            Gate::RotateY { target, .. } => vec![*target],
            Gate::CNot { control, target } => vec![*control, *target],
        }
    }
}
