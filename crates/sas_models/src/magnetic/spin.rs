//! Spin-resolved cross-section weights.
//!
//! Reconstructs a partially polarised measurement from the four physical
//! cross-sections (non-spin-flip uu/dd, spin-flip ud/du) given the
//! polariser and analyser efficiencies. No intensity weighting is applied
//! on the incoming side: the user is assumed to have normalised to the
//! incoming flux with the polariser in place.

use sas_core::math::special::clip;

/// Weights applied to the eight spin-resolved cross-section slots.
///
/// One weight per physical channel; the real and imaginary slot of each
/// channel receive the same weight (the imaginary slot only matters once
/// combined with complex amplitude contributions downstream). The frozen
/// positional layout is exposed by [`to_array`](Self::to_array).
///
/// The normalisation makes the weighted sum of spin-resolved measurements
/// reproduce the unpolarised or half-polarised cross-section: the four
/// weights sum to `1/norm` with `norm = max(out_spin, 1 - out_spin)`, which
/// is exactly 1 at the fully-analysed endpoints (`out_spin` of 0 or 1).
///
/// # Examples
/// ```
/// use sas_models::magnetic::SpinWeights;
///
/// let w = SpinWeights::from_efficiencies(1.0, 1.0);
/// // Perfect optics: only the uu channel survives
/// assert_eq!(w.uu, 1.0);
/// assert_eq!(w.dd + w.du + w.ud, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinWeights {
    /// Down-down (non-spin-flip) weight
    pub dd: f64,
    /// Up-up (non-spin-flip) weight
    pub uu: f64,
    /// Down-up (spin-flip) weight
    pub du: f64,
    /// Up-down (spin-flip) weight
    pub ud: f64,
}

impl SpinWeights {
    /// Builds the weights from polariser/analyser efficiencies.
    ///
    /// # Arguments
    /// * `in_spin` - Fraction of the incoming beam in the up state
    /// * `out_spin` - Analyser efficiency for the outgoing beam
    ///
    /// Both are clamped to [0, 1] through |x| first; the efficiency sign
    /// carries no physics here. The normalisation uses the analyser side
    /// only: `norm = out_spin`, or `1 - out_spin` when `out_spin < 0.5`,
    /// so `norm >= 0.5` for every clamped input and the division is always
    /// well-defined. Only a non-finite input (which survives the clamp as
    /// `NaN`) can poison the result; that is a caller error by contract.
    pub fn from_efficiencies(in_spin: f64, out_spin: f64) -> Self {
        let in_spin = clip(in_spin.abs(), 0.0, 1.0);
        let out_spin = clip(out_spin.abs(), 0.0, 1.0);

        let norm = if out_spin < 0.5 {
            1.0 - out_spin
        } else {
            out_spin
        };

        SpinWeights {
            dd: (1.0 - in_spin) * (1.0 - out_spin) / norm,
            uu: in_spin * out_spin / norm,
            du: (1.0 - in_spin) * out_spin / norm,
            ud: in_spin * (1.0 - out_spin) / norm,
        }
    }

    /// The frozen 8-slot positional layout.
    ///
    /// Order: `{dd.re, dd.im, uu.re, uu.im, du.re, du.im, ud.re, ud.im}`.
    /// External consumers index into this layout by position; it must never
    /// be permuted.
    pub fn to_array(self) -> [f64; 8] {
        [
            self.dd, self.dd, self.uu, self.uu, self.du, self.du, self.ud, self.ud,
        ]
    }

    /// Sum of the four physical weights.
    ///
    /// Equals `1/norm` for clamped inputs, so it is 1 exactly when the
    /// analyser efficiency sits at either endpoint.
    pub fn total(self) -> f64 {
        self.dd + self.uu + self.du + self.ud
    }
}
