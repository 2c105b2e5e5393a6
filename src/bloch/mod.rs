// src/bloch/mod.rs

//! Maps a single-qubit density matrix onto Bloch coordinates.
//!
//! The coordinates are the Pauli expectation values of the state:
//! x = Re Tr(ρX), y = Re Tr(ρY), z = Re Tr(ρZ). A pure state lands on the
//! unit sphere surface, a mixed one strictly inside it, the maximally mixed
//! state at the origin.

use crate::core::{BlochVector, DensityMatrix};
use num_complex::Complex;
use num_traits::Zero;

/// The Pauli X matrix, [[0, 1], [1, 0]].
pub fn pauli_x() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::zero(), Complex::new(1.0, 0.0)],
        [Complex::new(1.0, 0.0), Complex::zero()],
    ]
}

/// The Pauli Y matrix, [[0, -i], [i, 0]].
pub fn pauli_y() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::zero(), -Complex::i()],
        [Complex::i(), Complex::zero()],
    ]
}

/// The Pauli Z matrix, [[1, 0], [0, -1]].
pub fn pauli_z() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::new(1.0, 0.0), Complex::zero()],
        [Complex::zero(), Complex::new(-1.0, 0.0)],
    ]
}

/// Tr(ρ · op) for a 2×2 operator.
fn trace_product(rho: &DensityMatrix, op: &[[Complex<f64>; 2]; 2]) -> Complex<f64> {
    let mut trace = Complex::zero();
    for row in 0..2 {
        for col in 0..2 {
            trace += rho.element(row, col) * op[col][row];
        }
    }
    trace
}

/// Computes the Bloch coordinates of `rho`.
///
/// Pure function: no side effects, deterministic, bit-identical on repeated
/// calls with the same input. `rho` is taken as a well-formed marginal
/// (the reducer's guarantee); nothing is re-verified here.
pub fn to_bloch(rho: &DensityMatrix) -> BlochVector {
    BlochVector::new(
        trace_product(rho, &pauli_x()).re,
        trace_product(rho, &pauli_y()).re,
        trace_product(rho, &pauli_z()).re,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn re(x: f64) -> Complex<f64> {
        Complex::new(x, 0.0)
    }

    #[test]
    fn ground_state_points_at_north_pole() {
        let rho = DensityMatrix::new([[re(1.0), re(0.0)], [re(0.0), re(0.0)]]);
        let bloch = to_bloch(&rho);
        assert!(bloch.x.abs() < TEST_TOLERANCE);
        assert!(bloch.y.abs() < TEST_TOLERANCE);
        assert!((bloch.z - 1.0).abs() < TEST_TOLERANCE);
        assert!(bloch.is_pure(1e-9));
    }

    #[test]
    fn plus_state_points_along_x() {
        let rho = DensityMatrix::new([[re(0.5), re(0.5)], [re(0.5), re(0.5)]]);
        let bloch = to_bloch(&rho);
        assert!((bloch.x - 1.0).abs() < TEST_TOLERANCE);
        assert!(bloch.y.abs() < TEST_TOLERANCE);
        assert!(bloch.z.abs() < TEST_TOLERANCE);
    }

    #[test]
    fn plus_i_state_points_along_y() {
        // rho for (|0> + i|1>)/sqrt(2)
        let rho = DensityMatrix::new([
            [re(0.5), Complex::new(0.0, -0.5)],
            [Complex::new(0.0, 0.5), re(0.5)],
        ]);
        let bloch = to_bloch(&rho);
        assert!(bloch.x.abs() < TEST_TOLERANCE);
        assert!((bloch.y - 1.0).abs() < TEST_TOLERANCE);
        assert!(bloch.z.abs() < TEST_TOLERANCE);
    }

    #[test]
    fn maximally_mixed_state_sits_at_origin() {
        let rho = DensityMatrix::new([[re(0.5), re(0.0)], [re(0.0), re(0.5)]]);
        let bloch = to_bloch(&rho);
        assert!(bloch.magnitude() < TEST_TOLERANCE);
        assert!(!bloch.is_pure(1e-9));
    }

    #[test]
    fn mapping_is_bit_identical_across_calls() {
        let rho = DensityMatrix::new([
            [re(0.75), Complex::new(0.1, -0.2)],
            [Complex::new(0.1, 0.2), re(0.25)],
        ]);
        let first = to_bloch(&rho);
        let second = to_bloch(&rho);
        assert_eq!(first, second);
    }
}
