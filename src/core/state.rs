// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// A pure state of an N-qubit register: an ordered vector of `2^N` complex
/// amplitudes over the computational basis.
///
/// The vector is implicitly normalized (sum of squared magnitudes = 1) by
/// construction upstream; nothing here renormalizes. The state is owned by
/// the caller for the duration of one reduction call and is immutable once
/// produced — the engine builds a fresh one on every run.
///
/// Basis convention: qubit 0 is the most significant bit of the basis index,
/// so for two qubits the amplitudes are ordered |00⟩, |01⟩, |10⟩, |11⟩.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct JointState {
    amplitudes: Vec<Complex<f64>>,
}

impl JointState {
    /// Creates the all-zero computational basis state |0…0⟩ for `num_qubits`
    /// qubits. Every circuit run starts from this state.
    pub fn zero_state(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes }
    }

    /// Creates a joint state from an explicit amplitude vector.
    ///
    /// The caller is responsible for the length being a power of two and the
    /// vector being normalized; `reduce` re-checks the length against the
    /// declared qubit count.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Read-only access to the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for the simulation engine.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Dimension of the state vector (`2^N`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared magnitudes; 1.0 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for JointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.dim().trailing_zeros() as usize;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            writeln!(f, "|{:0width$b}⟩: {:.4}{:+.4}i", i, amp.re, amp.im, width = width)?;
        }
        Ok(())
    }
}

/// A 2×2 complex matrix describing one qubit's marginal state.
///
/// Produced by tracing the other qubits out of the joint density matrix
/// |ψ⟩⟨ψ|. For normalized input it is Hermitian, trace-1 and positive
/// semidefinite up to floating-point rounding. A derived value: it is never
/// stored across runs, only recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMatrix {
    elements: [[Complex<f64>; 2]; 2],
}

impl DensityMatrix {
    /// Wraps a 2×2 element array, row-major.
    pub fn new(elements: [[Complex<f64>; 2]; 2]) -> Self {
        Self { elements }
    }

    /// The element at `(row, col)`.
    pub fn element(&self, row: usize, col: usize) -> Complex<f64> {
        self.elements[row][col]
    }

    /// The full 2×2 element array, row-major.
    pub fn elements(&self) -> &[[Complex<f64>; 2]; 2] {
        &self.elements
    }

    /// Tr(ρ); 1 (up to rounding) for a valid marginal.
    pub fn trace(&self) -> Complex<f64> {
        self.elements[0][0] + self.elements[1][1]
    }

    /// Re Tr(ρ²). 1 for a pure marginal, ½ for the maximally mixed state.
    pub fn purity(&self) -> f64 {
        let mut tr = Complex::zero();
        for row in 0..2 {
            for col in 0..2 {
                tr += self.elements[row][col] * self.elements[col][row];
            }
        }
        tr.re
    }

    /// Whether ρ = ρ† within `tolerance` on every element.
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        for row in 0..2 {
            for col in 0..2 {
                let diff = self.elements[row][col] - self.elements[col][row].conj();
                if diff.norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            write!(f, "[")?;
            for (i, e) in row.iter().enumerate() {
                write!(f, "{}{:.4}{:+.4}i", if i > 0 { ", " } else { "" }, e.re, e.im)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// The three real Bloch coordinates of a single-qubit state.
///
/// Each coordinate lies in [-1, 1] and x²+y²+z² ≤ 1, with equality exactly
/// when the marginal is pure: the sphere surface holds pure states, the
/// interior mixed ones. A pure output value with no identity beyond its
/// numeric content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    /// ⟨X⟩ coordinate.
    pub x: f64,
    /// ⟨Y⟩ coordinate.
    pub y: f64,
    /// ⟨Z⟩ coordinate; +1 is |0⟩, -1 is |1⟩.
    pub z: f64,
}

impl BlochVector {
    /// Builds a Bloch vector from Cartesian coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length; 1 for pure states, < 1 for mixed ones.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether the vector reaches the sphere surface within `tolerance`.
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
