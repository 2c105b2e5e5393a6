// src/reduction/mod.rs

//! Reduces a joint pure state to one qubit's 2×2 density matrix.
//!
//! Conceptually: form ρ_full = |ψ⟩⟨ψ| and trace out every qubit except the
//! target. Because the joint state is pure, the partial trace collapses to a
//! single contraction over the traced-out basis —
//! ρ[a][b] = Σ_rest ψ(a, rest) · conj(ψ(b, rest)) — so the full 2^N × 2^N
//! outer product is never materialized.

use crate::core::{DensityMatrix, JointState, VisError};
use num_complex::Complex;
use num_traits::Zero;

/// Computes the reduced density matrix of `target` by tracing out every
/// other qubit of `state`.
///
/// Pure function of its inputs: no side effects, deterministic, and the
/// result for a normalized state is Hermitian with unit trace up to
/// floating-point rounding.
///
/// Qubit 0 is the most significant bit of the basis index.
///
/// # Errors
/// `InvalidDimension` when `state` does not hold exactly `2^num_qubits`
/// amplitudes, or when `target` is outside the register.
pub fn reduce(
    state: &JointState,
    num_qubits: usize,
    target: usize,
) -> Result<DensityMatrix, VisError> {
    let dim = 1usize
        .checked_shl(num_qubits as u32)
        .ok_or_else(|| VisError::InvalidDimension {
            message: format!("Register of {} qubits overflows the state dimension", num_qubits),
        })?;
    if state.dim() != dim {
        return Err(VisError::InvalidDimension {
            message: format!(
                "Joint state holds {} amplitudes, expected {} for {} qubits",
                state.dim(),
                dim,
                num_qubits
            ),
        });
    }
    if target >= num_qubits {
        return Err(VisError::InvalidDimension {
            message: format!(
                "Target qubit {} out of range for a {}-qubit register",
                target, num_qubits
            ),
        });
    }

    let amplitudes = state.amplitudes();
    let mask = 1usize << (num_qubits - 1 - target);

    let mut rho = [[Complex::zero(); 2]; 2];
    // Pair up basis states that differ only in the target bit; each pair
    // contributes one term to every element of the 2x2 contraction.
    for i in 0..dim {
        if i & mask != 0 {
            continue;
        }
        let a0 = amplitudes[i];
        let a1 = amplitudes[i | mask];
        rho[0][0] += a0 * a0.conj();
        rho[0][1] += a0 * a1.conj();
        rho[1][0] += a1 * a0.conj();
        rho[1][1] += a1 * a1.conj();
    }

    Ok(DensityMatrix::new(rho))
}

/// Reduces every qubit of `state` in index order. Convenience wrapper for
/// the per-qubit visualization loop.
pub fn reduce_all(state: &JointState, num_qubits: usize) -> Result<Vec<DensityMatrix>, VisError> {
    (0..num_qubits).map(|q| reduce(state, num_qubits, q)).collect()
}
