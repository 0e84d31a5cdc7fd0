//! Random lamellar phase with head and tail groups.
//!
//! Lyotropic bilayer sheets with a head-group SLD distinct from the tail
//! region, randomly distributed in solution (Nallet, Laversanne and Roux,
//! J. Phys. II France 3 (1993) 487-502). The total sheet thickness is
//! `2 (head_length + tail_length)`; in a non-aqueous solvent the chemical
//! head group may play the tail role and vice versa.

use std::f64::consts::PI;

use sas_core::math::special::square;

use crate::error::ModelError;

/// Head-tail lamellar intensity.
///
/// ```text
/// P(q) = (4/q^2) [ drh (sin(q(dH+dT)) - sin(q dT)) + drt sin(q dT) ]^2
/// I(q) = 2e-4 pi P(q) / q^2 / (2 (dH + dT))
/// ```
/// with `drh`/`drt` the head and tail contrasts against the solvent.
///
/// # Examples
/// ```
/// use sas_models::empirical::LamellarHg;
///
/// let model = LamellarHg::new(15.0, 10.0, 0.4, 3.0, 6.0).unwrap();
/// assert!(model.iq(0.001) > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LamellarHg {
    tail_length: f64,
    head_length: f64,
    sld: f64,
    sld_head: f64,
    sld_solvent: f64,
}

impl LamellarHg {
    /// Creates a validated bilayer.
    ///
    /// # Errors
    /// `ModelError::InvalidLength` if either layer thickness is negative or
    /// non-finite.
    pub fn new(
        tail_length: f64,
        head_length: f64,
        sld: f64,
        sld_head: f64,
        sld_solvent: f64,
    ) -> Result<Self, ModelError> {
        if !tail_length.is_finite() || tail_length < 0.0 {
            return Err(ModelError::InvalidLength {
                name: "tail_length",
                length: tail_length,
            });
        }
        if !head_length.is_finite() || head_length < 0.0 {
            return Err(ModelError::InvalidLength {
                name: "head_length",
                length: head_length,
            });
        }

        Ok(LamellarHg {
            tail_length,
            head_length,
            sld,
            sld_head,
            sld_solvent,
        })
    }

    /// Intensity at scattering magnitude `q`.
    ///
    /// Diverges as `q^-4` towards `q = 0`; the forward-scattering point
    /// itself divides by zero, as in the closed form.
    pub fn iq(&self, q: f64) -> f64 {
        let qsq = q * q;
        let drh = self.sld_head - self.sld_solvent;
        let drt = self.sld - self.sld_solvent;
        let q_tail = q * self.tail_length;

        let amplitude = drh * ((q * (self.head_length + self.tail_length)).sin() - q_tail.sin())
            + drt * q_tail.sin();
        let pq = square(amplitude) * 4.0 / qsq;

        // normalise by the bilayer thickness
        2.0e-4 * PI * pq / qsq / (2.0 * (self.head_length + self.tail_length))
    }

    /// Intensity at a detector coordinate.
    pub fn iqxy(&self, qx: f64, qy: f64) -> f64 {
        self.iq(qx.hypot(qy))
    }
}
