// src/circuits/mod.rs

//! The append-only gate log a visualization run is driven by.
//!
//! A [`Circuit`] is an explicit, externally owned command log: the register
//! size is fixed at construction, gates are only ever appended, and the
//! simulator replays the whole log from |0…0⟩ on every run. Keeping the log
//! outside the mathematical core keeps reduction and Bloch mapping fully
//! stateless and independently testable.

use crate::core::VisError;
use crate::operations::Gate;
use std::fmt;

/// Upper bound on the register size. The front-end offers 1 to 4 qubits,
/// so the joint state never exceeds 16 amplitudes.
pub const MAX_QUBITS: usize = 4;

/// An ordered, append-only sequence of gates over a fixed-size register.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates an empty circuit over `num_qubits` qubits.
    ///
    /// # Errors
    /// `InvalidDimension` if `num_qubits` is 0 or exceeds [`MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self, VisError> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(VisError::InvalidDimension {
                message: format!(
                    "Register size must be between 1 and {}, got {}",
                    MAX_QUBITS, num_qubits
                ),
            });
        }
        Ok(Self { num_qubits, gates: Vec::new() })
    }

    /// Appends a gate to the end of the log.
    ///
    /// Index validity is checked here, at assembly time, so a built circuit
    /// can never reference a qubit outside its register.
    ///
    /// # Errors
    /// `InvalidDimension` if any mentioned qubit index is out of range;
    /// `InvalidOperation` for a CNOT whose control and target coincide.
    pub fn push(&mut self, gate: Gate) -> Result<(), VisError> {
        for qubit in gate.involved_qubits() {
            if qubit >= self.num_qubits {
                return Err(VisError::InvalidDimension {
                    message: format!(
                        "Qubit index {} out of range for a {}-qubit register",
                        qubit, self.num_qubits
                    ),
                });
            }
        }
        if let Gate::CNot { control, target } = &gate {
            if control == target {
                return Err(VisError::InvalidOperation {
                    message: "CNOT control and target qubits cannot coincide".to_string(),
                });
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    /// The fixed register size.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The ordered gate sequence.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates in the log.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// `true` if no gate has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Constructs [`Circuit`] instances with method chaining.
///
/// Each gate method validates eagerly and returns `Result`, so chains
/// propagate with `?`:
///
/// ```
/// use blochview::{CircuitBuilder, VisError};
///
/// # fn main() -> Result<(), VisError> {
/// let circuit = CircuitBuilder::new(2)?
///     .hadamard(0)?
///     .cnot(0, 1)?
///     .build();
/// assert_eq!(circuit.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Starts a builder for a `num_qubits`-qubit register.
    pub fn new(num_qubits: usize) -> Result<Self, VisError> {
        Ok(Self { circuit: Circuit::new(num_qubits)? })
    }

    /// Appends an arbitrary palette gate.
    pub fn gate(mut self, gate: Gate) -> Result<Self, VisError> {
        self.circuit.push(gate)?;
        Ok(self)
    }

    /// Appends a Hadamard on `target`.
    pub fn hadamard(self, target: usize) -> Result<Self, VisError> {
        self.gate(Gate::Hadamard { target })
    }

    /// Appends an X rotation by `theta` radians on `target`.
    pub fn rotate_x(self, target: usize, theta: f64) -> Result<Self, VisError> {
        self.gate(Gate::RotateX { target, theta })
    }

    /// Appends a Y rotation by `theta` radians on `target`.
    pub fn rotate_y(self, target: usize, theta: f64) -> Result<Self, VisError> {
        self.gate(Gate::RotateY { target, theta })
    }

    /// Appends a CNOT from `control` to `target`.
    pub fn cnot(self, control: usize, target: usize) -> Result<Self, VisError> {
        self.gate(Gate::CNot { control, target })
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "blochview::Circuit[{} gates on {} qubits]",
            self.gates.len(),
            self.num_qubits
        )?;

        const GATE_WIDTH: usize = 7; // e.g. "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        let num_ops = self.gates.len();
        let num_qubits = self.num_qubits;

        // op_grid[row][time] holds the gate/wire segment for that cell;
        // v_connect[row][time] holds the vertical connector drawn below the row.
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total = GATE_WIDTH - slen;
                let pre = total / 2;
                let post = total - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        for (t, gate) in self.gates.iter().enumerate() {
            match gate {
                Gate::Hadamard { target } => op_grid[*target][t] = format_gate("H"),
                Gate::RotateX { target, .. } => op_grid[*target][t] = format_gate("RX"),
                Gate::RotateY { target, .. } => op_grid[*target][t] = format_gate("RY"),
                Gate::CNot { control, target } => {
                    op_grid[*control][t] = format_gate("●");
                    op_grid[*target][t] = format_gate("X");
                    let r_min = (*control).min(*target);
                    let r_max = (*control).max(*target);
                    for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row_vec[t] = V_WIRE;
                    }
                }
            }
        }

        let max_label_width = format!("q{}", num_qubits - 1).len();
        for r in 0..num_qubits {
            let label = format!("q{}: ", r);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", " ".repeat(max_label_width + 2))?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding = GATE_WIDTH.saturating_sub(1);
                    let pre = padding / 2;
                    let post = padding - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains_the_palette() -> Result<(), VisError> {
        let circuit = CircuitBuilder::new(2)?
            .hadamard(0)?
            .rotate_x(0, std::f64::consts::FRAC_PI_3)?
            .rotate_y(1, std::f64::consts::FRAC_PI_4)?
            .cnot(0, 1)?
            .build();
        assert_eq!(circuit.len(), 4);
        assert_eq!(circuit.num_qubits(), 2);
        Ok(())
    }

    #[test]
    fn register_size_is_bounded() {
        assert!(matches!(Circuit::new(0), Err(VisError::InvalidDimension { .. })));
        assert!(matches!(
            Circuit::new(MAX_QUBITS + 1),
            Err(VisError::InvalidDimension { .. })
        ));
        assert!(Circuit::new(MAX_QUBITS).is_ok());
    }

    #[test]
    fn push_rejects_out_of_range_qubits() -> Result<(), VisError> {
        let mut circuit = Circuit::new(2)?;
        let err = circuit.push(Gate::Hadamard { target: 2 });
        assert!(matches!(err, Err(VisError::InvalidDimension { .. })));

        let err = circuit.push(Gate::CNot { control: 0, target: 3 });
        assert!(matches!(err, Err(VisError::InvalidDimension { .. })));
        assert!(circuit.is_empty());
        Ok(())
    }

    #[test]
    fn push_rejects_self_controlled_cnot() -> Result<(), VisError> {
        let mut circuit = Circuit::new(2)?;
        let err = circuit.push(Gate::CNot { control: 1, target: 1 });
        assert!(matches!(err, Err(VisError::InvalidOperation { .. })));
        Ok(())
    }

    #[test]
    fn display_draws_gates_and_connectors() -> Result<(), VisError> {
        let circuit = CircuitBuilder::new(2)?.hadamard(0)?.cnot(0, 1)?.build();
        let drawn = format!("{}", circuit);
        assert!(drawn.contains("H"));
        assert!(drawn.contains("●"));
        assert!(drawn.contains("│"));
        assert!(drawn.contains("q0:"));
        assert!(drawn.contains("q1:"));
        Ok(())
    }
}
