//! Halpern-Johnson decomposition of the magnetic scattering length density.
//!
//! The transversal magnetisation, and hence the magnetic scattering
//! vector, is a complex quantity here. The spin-flip scattering amplitude
//! is `MperpPperpQ ± i MperpP` (Moon, Riste, Koehler, Phys Rev 181, 920,
//! 1969), with `Mperp` the magnetisation component perpendicular to the
//! scattering vector. Moon-Riste-Koehler choose z along the
//! field/polarisation axis; this library's historical convention differs,
//! and the relabelling is confined to [`mag_sld`].

use num_complex::Complex64;
use sas_core::math::vec3::Vec3;

/// Polarisation axis: the applied field lies along the laboratory z-axis.
const P_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// First axis orthogonal to the polarisation direction.
const PERP_X: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Second axis orthogonal to the polarisation direction.
const PERP_Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// The eight spin-resolved scattering-length-density contributions.
///
/// Four complex channels: non-spin-flip `dd`/`uu` and spin-flip `du`/`ud`.
/// Internally these are named fields; the frozen positional layout
/// `{dd.re, dd.im, uu.re, uu.im, du.re, du.im, ud.re, ud.im}` that external
/// consumers index into is exposed by [`to_array`](Self::to_array) and must
/// never be permuted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSections {
    /// Down-down non-spin-flip channel
    pub dd: Complex64,
    /// Up-up non-spin-flip channel
    pub uu: Complex64,
    /// Down-up spin-flip channel
    pub du: Complex64,
    /// Up-down spin-flip channel
    pub ud: Complex64,
}

impl CrossSections {
    /// The frozen 8-slot positional layout.
    pub fn to_array(self) -> [f64; 8] {
        [
            self.dd.re, self.dd.im, self.uu.re, self.uu.im, self.du.re, self.du.im, self.ud.re,
            self.ud.im,
        ]
    }
}

/// Rotates the scattering vector into the field/polarisation frame.
///
/// The field is defined along (0,0,1); the detector orientation precesses
/// in a cone around it with an inclination given by the polar angle. The
/// two frame-rotation angles are in **degrees** (the orientation-average
/// loops elsewhere work in radians; the split is the surrounding
/// framework's convention and is preserved).
///
/// # Arguments
/// * `q` - Scattering-vector magnitude
/// * `cos_theta`, `sin_theta` - Polar angle of the detector-cone precession
/// * `alpha_deg`, `beta_deg` - Frame-rotation angles, degrees
pub fn set_scatvec(q: f64, cos_theta: f64, sin_theta: f64, alpha_deg: f64, beta_deg: f64) -> Vec3 {
    let (sin_alpha, cos_alpha) = alpha_deg.to_radians().sin_cos();
    let (sin_beta, cos_beta) = beta_deg.to_radians().sin_cos();

    Vec3::new(
        q * (cos_alpha * cos_theta),
        q * (cos_theta * sin_alpha * sin_beta + cos_beta * sin_theta),
        q * (-cos_beta * cos_theta * sin_alpha + sin_beta * sin_theta),
    )
}

/// Evaluates the magnetic scattering (Halpern-Johnson) vector for a general
/// scattering direction and collects the spin-resolved cross-sections.
///
/// # Arguments
/// * `q_dir` - Scattering direction; not required to be pre-normalised
/// * `m_real`, `m_imag` - Real and imaginary parts of the local
///   magnetisation vector, with z along the applied field
/// * `nuc` - Nuclear (non-magnetic) scattering length density
///
/// # Algorithm
/// 1. Normalise `q_dir` to a unit direction.
/// 2. Project both magnetisation parts onto the plane perpendicular to it
///    (the magnetic interaction vector); the generic projection is kept
///    rather than the Moon-Riste-Koehler simplification.
/// 3. Collect terms against the fixed axes (0,0,1), (1,0,0), (0,1,0):
///    non-spin-flip channels are `nuc ∓ P·Mperp`, spin-flip channels mix
///    the two perpendicular-axis projections with a relative sign flip
///    between `du` and `ud` on the imaginary-axis term.
///
/// A nuclear imaginary part would enter `dd.im`/`uu.im` for
/// non-centrosymmetric nuclear structures; only the real `nuc` is carried
/// here.
///
/// # Preconditions
/// `q_dir` must be non-zero: the forward-scattering point produces `NaN`
/// in every slot via 0/0 and must be excluded or special-cased upstream.
/// Stateless and safe to invoke per scattering point independently.
///
/// # Examples
/// ```
/// use sas_core::math::vec3::Vec3;
/// use sas_models::magnetic::mag_sld;
///
/// // Zero magnetisation: the nuclear SLD survives in both non-spin-flip
/// // channels and nothing else
/// let xs = mag_sld(Vec3::new(0.0, 0.3, 0.4), Vec3::ZERO, Vec3::ZERO, 2e-6);
/// assert_eq!(xs.dd.re, 2e-6);
/// assert_eq!(xs.uu.re, 2e-6);
/// assert_eq!(xs.du.re, 0.0);
/// ```
pub fn mag_sld(q_dir: Vec3, m_real: Vec3, m_imag: Vec3, nuc: f64) -> CrossSections {
    let unit_q = q_dir.normalized();

    let m_perp_real = m_real.rejection_from(unit_q);
    let m_perp_imag = m_imag.rejection_from(unit_q);

    CrossSections {
        dd: Complex64::new(
            nuc - P_AXIS.dot(m_perp_real),
            P_AXIS.dot(m_perp_imag),
        ),
        uu: Complex64::new(
            nuc + P_AXIS.dot(m_perp_real),
            -P_AXIS.dot(m_perp_imag),
        ),
        du: Complex64::new(
            PERP_Y.dot(m_perp_real) + PERP_X.dot(m_perp_imag),
            PERP_Y.dot(m_perp_imag) - PERP_X.dot(m_perp_real),
        ),
        ud: Complex64::new(
            PERP_Y.dot(m_perp_real) - PERP_X.dot(m_perp_imag),
            PERP_Y.dot(m_perp_imag) + PERP_X.dot(m_perp_real),
        ),
    }
}
