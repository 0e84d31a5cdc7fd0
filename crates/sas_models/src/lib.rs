//! # Scattering Models (L2: Model Layer)
//!
//! Closed-form small-angle scattering models built on the `sas_core`
//! foundation.
//!
//! This crate provides:
//! - Polarised-beam machinery: spin-resolved cross-section weights and the
//!   Halpern-Johnson magnetic SLD decomposition (`magnetic`)
//! - Radial core-shell form-factor amplitudes (`magnetic::core_shell`)
//! - The BCC paracrystal structure factor with powder averaging
//!   (`paracrystal`)
//! - Shape form factors (`shapes`)
//! - Empirical intensity models (`empirical`)
//! - A data-parallel q-grid sweep (`sweep`)
//!
//! ## Design Principles
//!
//! - **Validated boundary, unguarded kernels**: parameter structs check
//!   their invariants once at construction; the per-point kernels never
//!   branch on validity and let `NaN` propagate from documented
//!   precondition violations
//! - **Pure value types** throughout; every evaluation is reentrant and
//!   safe to fan out across threads
//! - **Frozen positional layouts**: the 8-slot cross-section order is a
//!   serialisation boundary and is never permuted

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod empirical;
pub mod error;
pub mod magnetic;
pub mod paracrystal;
pub mod shapes;
pub mod sweep;
pub mod traits;

pub use error::ModelError;
pub use traits::ScatteringModel;
