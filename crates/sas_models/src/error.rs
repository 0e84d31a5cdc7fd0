//! Error types for model construction.
//!
//! This module provides:
//! - `ModelError`: Errors from parameter-struct validation
//!
//! Validation happens once, at the API boundary; the evaluation kernels
//! themselves never signal errors (numerical preconditions propagate as
//! `NaN`, as documented per function).

use thiserror::Error;

/// Model parameter validation errors.
///
/// Provides structured error handling for model construction with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidRadius`: Negative or non-finite radius
/// - `InvalidLength`: Negative or non-finite length/thickness
/// - `InvalidLattice`: Non-positive nearest-neighbour distance
/// - `InvalidDistortion`: Negative distortion factor
/// - `ShellMismatch`: Shell SLD and thickness sequences of unequal length
///
/// # Examples
/// ```
/// use sas_models::ModelError;
///
/// let err = ModelError::InvalidLattice { dnn: -160.0 };
/// assert!(format!("{}", err).contains("dnn"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Negative or non-finite particle radius.
    #[error("Invalid radius: r = {radius}")]
    InvalidRadius {
        /// The rejected radius value
        radius: f64,
    },

    /// Negative or non-finite length or layer thickness.
    #[error("Invalid length: {name} = {length}")]
    InvalidLength {
        /// Which length parameter was rejected
        name: &'static str,
        /// The rejected length value
        length: f64,
    },

    /// Non-positive nearest-neighbour distance.
    #[error("Invalid lattice spacing: dnn = {dnn}")]
    InvalidLattice {
        /// The rejected nearest-neighbour distance
        dnn: f64,
    },

    /// Negative paracrystalline distortion factor.
    #[error("Invalid distortion factor: d = {d_factor}")]
    InvalidDistortion {
        /// The rejected distortion value
        d_factor: f64,
    },

    /// Shell SLD and thickness sequences disagree in length.
    #[error("Shell arrays mismatch: {slds} SLDs vs {thicknesses} thicknesses")]
    ShellMismatch {
        /// Number of shell SLD entries supplied
        slds: usize,
        /// Number of shell thickness entries supplied
        thicknesses: usize,
    },
}
