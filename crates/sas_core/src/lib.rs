//! # sas_core: Mathematical Foundation for Small-Angle Scattering Models
//!
//! ## Layer 1 (Foundation) Role
//!
//! sas_core serves as the bottom layer of the two-layer architecture,
//! providing:
//! - 3-vector algebra for magnetisation and scattering directions (`math::vec3`)
//! - Scattering special functions with small-argument branches (`math::special`)
//! - Bessel J1 rational approximations (`math::bessel`)
//! - Gauss-Legendre quadrature tables (`math::quadrature`)
//! - Uniform-sphere helpers (`math::sphere`)
//! - Detector-to-particle frame projections (`math::orientation`)
//! - Error types: `QuadratureError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other sas_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Numerical Contract
//!
//! Per-point kernels perform no input validation: non-finite inputs and
//! documented precondition violations (zero-length direction vectors,
//! degenerate projection axes) propagate as `NaN`/`inf` exactly as the
//! closed forms produce them. Validation belongs to the parameter-struct
//! boundary in `sas_models` and to the embedding framework.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sas_core::math::special::sas_3j1x_x;
//! use sas_core::math::sphere::{sphere_form, sphere_volume};
//! use sas_core::math::vec3::Vec3;
//!
//! // Spherical form-factor kernel, small-argument limit is exactly 1
//! assert!((sas_3j1x_x(0.0_f64) - 1.0).abs() < 1e-15);
//!
//! // Component of v perpendicular to an axis
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! let axis = Vec3::new(0.0, 0.0, 1.0);
//! let perp = v.rejection_from(axis);
//! assert!(perp.dot(axis).abs() < 1e-12);
//!
//! // Uniform sphere intensity at q = 0 reduces to the contrast-volume square
//! let pq = sphere_form(0.0, 40.0, 4e-6, 1e-6);
//! let expected = 1e-4 * (3e-6 * sphere_volume(40.0)).powi(2);
//! assert!((pq - expected).abs() / expected < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Vec3`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
