//! Polarised-beam magnetic scattering.
//!
//! This module provides the machinery for spin-resolved SANS:
//! - Cross-section weighting for imperfect polariser/analyser optics
//!   (`spin`)
//! - The Halpern-Johnson decomposition of a complex magnetisation field
//!   into the eight spin-resolved SLD contributions (`sld`)
//! - The radial core-shell form-factor amplitude (`core_shell`)
//!
//! ## Coordinate Convention
//!
//! The applied field, and with it the polarisation axis, lies along the
//! laboratory z-axis. This matches Moon-Riste-Koehler with relabelled axes;
//! the relabelling happens once, inside [`sld::mag_sld`], and nowhere else.

pub mod core_shell;
pub mod sld;
pub mod spin;

// Re-export main types at module level
pub use core_shell::{fq_core_shell, CoreShellProfile};
pub use sld::{mag_sld, set_scatvec, CrossSections};
pub use spin::SpinWeights;
