//! Numerical building blocks for scattering-model evaluation.
//!
//! This module provides:
//! - Fixed-size 3-vector algebra (`vec3`)
//! - Scattering special functions (`special`)
//! - Bessel function approximations (`bessel`)
//! - Gauss-Legendre quadrature tables (`quadrature`)
//! - Uniform-sphere form-factor helpers (`sphere`)
//! - Detector-plane orientation projections (`orientation`)
//!
//! ## Design Principles
//!
//! - **Pure value semantics**: every operation returns a freshly constructed
//!   value; nothing writes through caller-supplied storage
//! - **Numerical stability branches preserved**: small-argument series and
//!   `expm1`-style rewrites are deliberate, with documented thresholds
//! - **No validation in kernels**: precondition violations propagate as
//!   `NaN`/`inf`

pub mod bessel;
pub mod orientation;
pub mod quadrature;
pub mod special;
pub mod sphere;
pub mod vec3;

// Re-export the workhorse types at module level
pub use quadrature::{GaussLegendre, GAUSS_150, GAUSS_76};
pub use vec3::Vec3;
