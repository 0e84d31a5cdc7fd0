//! Evaluation traits for scattering models.
//!
//! The one seam the sweep machinery generalises over: a model that can
//! produce a 1D intensity per scattering magnitude. Oriented (2D)
//! evaluation stays on the concrete types since its signature differs per
//! symmetry class.

use crate::empirical::{BroadPeak, GuinierPorod, LamellarHg};
use crate::paracrystal::BccParacrystal;
use crate::shapes::Cylinder;

/// A model with a 1D (orientation-averaged or shape-independent) intensity.
///
/// Implementations are pure and reentrant: `iq` may be fanned out across
/// threads over any q-grid without coordination.
pub trait ScatteringModel {
    /// Intensity at scattering magnitude `q`.
    fn iq(&self, q: f64) -> f64;

    /// Particle volume for normalisation; 1 for shape-independent models.
    fn form_volume(&self) -> f64 {
        1.0
    }
}

impl ScatteringModel for BccParacrystal {
    fn iq(&self, q: f64) -> f64 {
        BccParacrystal::iq(self, q)
    }

    fn form_volume(&self) -> f64 {
        BccParacrystal::form_volume(self)
    }
}

impl ScatteringModel for Cylinder {
    fn iq(&self, q: f64) -> f64 {
        Cylinder::iq(self, q)
    }

    fn form_volume(&self) -> f64 {
        Cylinder::form_volume(self)
    }
}

impl ScatteringModel for GuinierPorod {
    fn iq(&self, q: f64) -> f64 {
        GuinierPorod::iq(self, q)
    }
}

impl ScatteringModel for BroadPeak {
    fn iq(&self, q: f64) -> f64 {
        BroadPeak::iq(self, q)
    }
}

impl ScatteringModel for LamellarHg {
    fn iq(&self, q: f64) -> f64 {
        LamellarHg::iq(self, q)
    }
}
