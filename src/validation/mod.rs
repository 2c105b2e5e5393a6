// src/validation/mod.rs

//! Checks the mathematical guarantees the pipeline promises: joint states
//! are normalized, marginals are Hermitian with unit trace, Bloch vectors
//! stay inside the unit ball.
//!
//! The pipeline itself never calls these; they exist for callers and tests
//! that want the guarantees verified explicitly.

use crate::core::{BlochVector, DensityMatrix, JointState, VisError};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `JointState` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(VisError::StateInvalid)` otherwise.
pub fn check_normalization(state: &JointState, tolerance: Option<f64>) -> Result<(), VisError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(VisError::StateInvalid {
            message: format!(
                "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that ρ = ρ† within tolerance on every element.
pub fn check_hermiticity(rho: &DensityMatrix, tolerance: Option<f64>) -> Result<(), VisError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    if rho.is_hermitian(effective_tolerance) {
        Ok(())
    } else {
        Err(VisError::StateInvalid {
            message: "Density matrix Hermiticity check failed".to_string(),
        })
    }
}

/// Checks that Tr(ρ) ≈ 1 with a negligible imaginary part.
pub fn check_unit_trace(rho: &DensityMatrix, tolerance: Option<f64>) -> Result<(), VisError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let trace = rho.trace();
    if (trace.re - 1.0).abs() > effective_tolerance || trace.im.abs() > effective_tolerance {
        Err(VisError::StateInvalid {
            message: format!(
                "Density matrix trace check failed. Tr = {}{:+}i (Deviation > {})",
                trace.re, trace.im, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that the Bloch vector lies within the closed unit ball.
pub fn check_unit_ball(bloch: &BlochVector, tolerance: Option<f64>) -> Result<(), VisError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let magnitude = bloch.magnitude();
    if magnitude > 1.0 + effective_tolerance {
        Err(VisError::StateInvalid {
            message: format!(
                "Bloch vector escapes the unit ball. |r| = {} (Deviation > {})",
                magnitude, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Runs the full marginal contract: Hermiticity and unit trace.
pub fn validate_marginal(rho: &DensityMatrix, tolerance: Option<f64>) -> Result<(), VisError> {
    check_hermiticity(rho, tolerance)?;
    check_unit_trace(rho, tolerance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn re(x: f64) -> Complex<f64> {
        Complex::new(x, 0.0)
    }

    #[test]
    fn zero_state_is_normalized() {
        let state = JointState::zero_state(3);
        assert!(check_normalization(&state, None).is_ok());
    }

    #[test]
    fn unnormalized_state_is_rejected() {
        let state = JointState::from_amplitudes(vec![re(1.0), re(1.0)]);
        assert!(matches!(
            check_normalization(&state, None),
            Err(VisError::StateInvalid { .. })
        ));
    }

    #[test]
    fn ground_projector_passes_the_marginal_contract() {
        let rho = DensityMatrix::new([[re(1.0), re(0.0)], [re(0.0), re(0.0)]]);
        assert!(validate_marginal(&rho, None).is_ok());
    }

    #[test]
    fn non_hermitian_matrix_is_rejected() {
        let rho = DensityMatrix::new([
            [re(0.5), Complex::new(0.0, 0.5)],
            [Complex::new(0.0, 0.5), re(0.5)],
        ]);
        assert!(matches!(
            check_hermiticity(&rho, None),
            Err(VisError::StateInvalid { .. })
        ));
    }

    #[test]
    fn traceless_matrix_is_rejected() {
        let rho = DensityMatrix::new([[re(0.5), re(0.0)], [re(0.0), re(0.4)]]);
        assert!(matches!(
            check_unit_trace(&rho, None),
            Err(VisError::StateInvalid { .. })
        ));
    }

    #[test]
    fn unit_ball_bound_is_enforced() {
        assert!(check_unit_ball(&BlochVector::new(0.3, 0.2, 0.1), None).is_ok());
        assert!(check_unit_ball(&BlochVector::new(0.0, 0.0, 1.0), None).is_ok());
        assert!(matches!(
            check_unit_ball(&BlochVector::new(1.0, 1.0, 1.0), None),
            Err(VisError::StateInvalid { .. })
        ));
    }
}
