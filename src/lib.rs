// src/lib.rs

//! `blochview` - per-qubit Bloch sphere views of small quantum circuits
//!
//! This library assembles a small circuit (at most 4 qubits) from a fixed
//! gate palette, simulates it from the all-zero basis state, and exposes
//! each qubit's marginal as a 2×2 reduced density matrix plus a Bloch
//! vector suitable for plotting against a unit sphere.
//!
//! The pipeline is a chain of pure functions: replay the gate log into a
//! joint state, trace every other qubit out of |ψ⟩⟨ψ| per target qubit,
//! then read off the Pauli expectation values ⟨X⟩, ⟨Y⟩, ⟨Z⟩. Every run
//! recomputes from scratch; nothing is cached between gate-log changes.
//!
//! ```
//! use blochview::{AsciiSphere, CircuitBuilder, Render, Simulator, VisError};
//!
//! # fn main() -> Result<(), VisError> {
//! // Bell pair: H on qubit 0, then CNOT 0 -> 1.
//! let circuit = CircuitBuilder::new(2)?
//!     .hadamard(0)?
//!     .cnot(0, 1)?
//!     .build();
//!
//! let snapshot = Simulator::new().run(&circuit)?;
//!
//! // Both marginals are maximally mixed: Bloch vectors at the origin.
//! for view in snapshot.qubits() {
//!     assert!(view.bloch().magnitude() < 1e-9);
//!     assert!((view.density().purity() - 0.5).abs() < 1e-9);
//! }
//!
//! // Any renderer can plot the views; the crate ships a text one.
//! let sphere = AsciiSphere::new();
//! let artifact = sphere.render(snapshot.qubit(0).unwrap().bloch(), "Qubit 0");
//! assert!(artifact.contains("Qubit 0"));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod operations;
pub mod circuits;
pub mod reduction;
pub mod bloch;
pub mod simulation;
pub mod render;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{BlochVector, DensityMatrix, JointState, VisError};
pub use operations::Gate;
pub use circuits::{Circuit, CircuitBuilder, MAX_QUBITS};
pub use reduction::{reduce, reduce_all};
pub use bloch::{pauli_x, pauli_y, pauli_z, to_bloch};
pub use simulation::{QubitView, Simulator, Snapshot};
pub use render::{AsciiSphere, Render};
pub use validation::{
    check_hermiticity,
    check_normalization,
    check_unit_ball,
    check_unit_trace,
    validate_marginal,
};
