//! Error handling logic

use std::fmt;

/// Error types raised at the boundaries of the visualization core.
///
/// Every variant indicates a caller bug (a circuit/state mismatch or an
/// ill-formed value) rather than a runtime condition to retry. Errors
/// propagate upward to the orchestrator, which prevents them by construction
/// (register size is fixed before circuit assembly).
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum VisError {
    /// A dimension mismatch: the amplitude count is not `2^num_qubits`, a
    /// qubit index is outside the register, or the register size itself is
    /// outside the supported range.
    InvalidDimension {
        /// InvalidDimension failure message
        message: String,
    },

    /// A gate is inconsistent with the register it is applied to
    /// (e.g. a CNOT whose control and target coincide).
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// A validation check failed: the joint state is not normalized, or a
    /// marginal is not Hermitian / trace-1 / inside the unit ball.
    StateInvalid {
        /// StateInvalid failure message
        message: String,
    },
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisError::InvalidDimension { message } => write!(f, "Invalid Dimension: {}", message),
            VisError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
            VisError::StateInvalid { message } => write!(f, "Invalid State: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for VisError {}
