//! Paracrystalline lattice structure factors.
//!
//! A paracrystal is a lattice with positional disorder about the ideal
//! sites, parameterised by a Debye-Waller-like distortion factor. The
//! closed-form lattice sums here factor over the three cubic axes.

pub mod bcc;

pub use bcc::BccParacrystal;
