//! Broad Lorentzian-type peak on a power-law decay.
//!
//! Many SAS spectra from amorphous soft materials (copolymers,
//! polyelectrolytes, multiphase and layered systems) show a broad peak on
//! top of a low-q power law. The peak position relates to the d-spacing of
//! the scattering inhomogeneities as `q0 = 2 pi / d0`.

/// Broad-peak empirical intensity.
///
/// ```text
/// I(q) = porod_scale / q^porod_exp
///      + lorentz_scale / (1 + (|q - peak_pos| lorentz_length)^lorentz_exp)
/// ```
///
/// # Examples
/// ```
/// use sas_models::empirical::BroadPeak;
///
/// let model = BroadPeak::new(1e-5, 3.0, 10.0, 50.0, 0.1, 2.0);
/// // The Lorentzian contributes its full scale at the peak position
/// assert!((model.iq(0.1) - 10.01).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BroadPeak {
    /// Power-law scale factor
    pub porod_scale: f64,
    /// Power-law exponent
    pub porod_exp: f64,
    /// Lorentzian peak scale factor
    pub lorentz_scale: f64,
    /// Lorentzian screening length
    pub lorentz_length: f64,
    /// Peak position in q
    pub peak_pos: f64,
    /// Lorentzian exponent
    pub lorentz_exp: f64,
}

impl BroadPeak {
    /// Creates the model; any finite parameters are accepted.
    pub fn new(
        porod_scale: f64,
        porod_exp: f64,
        lorentz_scale: f64,
        lorentz_length: f64,
        peak_pos: f64,
        lorentz_exp: f64,
    ) -> Self {
        BroadPeak {
            porod_scale,
            porod_exp,
            lorentz_scale,
            lorentz_length,
            peak_pos,
            lorentz_exp,
        }
    }

    /// Intensity at scattering magnitude `q`.
    ///
    /// `q = 0` with a positive power-law exponent diverges, as the closed
    /// form does; the framework excludes the forward-scattering point.
    pub fn iq(&self, q: f64) -> f64 {
        self.porod_scale / q.powf(self.porod_exp)
            + self.lorentz_scale
                / (1.0 + ((q - self.peak_pos).abs() * self.lorentz_length).powf(self.lorentz_exp))
    }

    /// Intensity at a detector coordinate.
    pub fn iqxy(&self, qx: f64, qy: f64) -> f64 {
        self.iq(qx.hypot(qy))
    }
}
