// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `blochview::core::TypeName`
pub use error::VisError;
pub use state::{BlochVector, DensityMatrix, JointState};
