//! Shape-independent empirical intensity models.
//!
//! Closed forms fitted directly to data rather than derived from a
//! particle geometry. 2D evaluation for all of these is
//! `iq(sqrt(qx^2 + qy^2))`.

pub mod broad_peak;
pub mod guinier_porod;
pub mod lamellar_hg;

pub use broad_peak::BroadPeak;
pub use guinier_porod::GuinierPorod;
pub use lamellar_hg::LamellarHg;
