// src/simulation/results.rs
use crate::core::{BlochVector, DensityMatrix, JointState};
use std::fmt;

/// One qubit's marginal view: its reduced density matrix and the Bloch
/// coordinates derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitView {
    density: DensityMatrix,
    bloch: BlochVector,
}

impl QubitView {
    pub(crate) fn new(density: DensityMatrix, bloch: BlochVector) -> Self {
        Self { density, bloch }
    }

    /// The qubit's 2×2 reduced density matrix.
    pub fn density(&self) -> &DensityMatrix {
        &self.density
    }

    /// The qubit's Bloch coordinates.
    pub fn bloch(&self) -> &BlochVector {
        &self.bloch
    }
}

/// Holds the outcome of one visualization run: the final joint state and the
/// per-qubit marginals in qubit index order.
///
/// Snapshots are derived values. A new one is produced by every run; none of
/// its contents are cached across gate-log changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    state: JointState,
    qubits: Vec<QubitView>,
}

impl Snapshot {
    /// Creates a snapshot from a final state and its marginals. (Internal visibility)
    pub(crate) fn new(state: JointState, qubits: Vec<QubitView>) -> Self {
        Self { state, qubits }
    }

    /// The joint state the circuit produced.
    pub fn joint_state(&self) -> &JointState {
        &self.state
    }

    /// The marginal view of one qubit, or `None` when the index is outside
    /// the register.
    pub fn qubit(&self, index: usize) -> Option<&QubitView> {
        self.qubits.get(index)
    }

    /// All per-qubit views, indexed by qubit.
    pub fn qubits(&self) -> &[QubitView] {
        &self.qubits
    }

    /// The register size the snapshot covers.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot of {} qubit(s):", self.qubits.len())?;
        for (i, view) in self.qubits.iter().enumerate() {
            writeln!(
                f,
                "  qubit {}: bloch {} |r| = {:.4}",
                i,
                view.bloch(),
                view.bloch().magnitude()
            )?;
        }
        Ok(())
    }
}
