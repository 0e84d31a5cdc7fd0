//! Detector-plane to particle-frame projections.
//!
//! Oriented 2D models receive a detector coordinate `(qx, qy)` and Euler
//! angles positioning the particle in the lab frame; the kernels want the
//! scattering vector resolved along the particle's own axes. The particle
//! frame is reached by `R = Rz(φ) · Ry(θ) · Rz(ψ)` and the projection is
//! `q_abc = Rᵀ · (qx, qy, 0)`, so the particle c-axis sits along the beam at
//! zero angles.
//!
//! Euler angles are in **degrees** here, while the orientation-average loops
//! in the model layer work in radians internally. The split is inherited
//! from the surrounding framework's convention and is kept as documented
//! behaviour rather than normalised away.

/// Scattering-vector magnitude and direction cosines in the particle frame.
///
/// Produced by [`orient_asymmetric`]. The cosines satisfy
/// `xhat² + yhat² + zhat² = 1` for any finite non-zero `(qx, qy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedQ {
    /// |q| in the detector plane
    pub q: f64,
    /// Direction cosine along the particle a-axis
    pub xhat: f64,
    /// Direction cosine along the particle b-axis
    pub yhat: f64,
    /// Direction cosine along the particle c-axis
    pub zhat: f64,
}

/// Scattering-vector magnitude and axis angle for axisymmetric particles.
///
/// Produced by [`orient_symmetric`]; `alpha` is the angle between the
/// particle symmetry axis and the scattering vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricQ {
    /// |q| in the detector plane
    pub q: f64,
    /// sin of the axis angle
    pub sin_alpha: f64,
    /// cos of the axis angle
    pub cos_alpha: f64,
}

/// Projects a detector coordinate onto the frame of a fully oriented particle.
///
/// # Arguments
/// * `qx`, `qy` - Detector-plane scattering vector components
/// * `theta_deg` - Polar tilt of the particle c-axis away from the beam, degrees
/// * `phi_deg` - Azimuth of the tilt plane, degrees
/// * `psi_deg` - Rotation of the particle about its own c-axis, degrees
///
/// # Preconditions
/// `qx = qy = 0` (the forward-scattering point) produces `NaN` direction
/// cosines via 0/0; the caller excludes or special-cases it, exactly as for
/// the magnetic decomposer.
///
/// # Examples
/// ```
/// use sas_core::math::orientation::orient_asymmetric;
///
/// // Unrotated: a-axis along x, b along y, c along the beam
/// let o = orient_asymmetric(0.3, 0.4, 0.0, 0.0, 0.0);
/// assert!((o.q - 0.5).abs() < 1e-12);
/// assert!((o.xhat - 0.6).abs() < 1e-12);
/// assert!((o.yhat - 0.8).abs() < 1e-12);
/// assert!(o.zhat.abs() < 1e-12);
/// ```
pub fn orient_asymmetric(qx: f64, qy: f64, theta_deg: f64, phi_deg: f64, psi_deg: f64) -> OrientedQ {
    let q = (qx * qx + qy * qy).sqrt();
    let qxhat = qx / q;
    let qyhat = qy / q;

    let (sin_theta, cos_theta) = theta_deg.to_radians().sin_cos();
    let (sin_phi, cos_phi) = phi_deg.to_radians().sin_cos();
    let (sin_psi, cos_psi) = psi_deg.to_radians().sin_cos();

    // Columns of R = Rz(phi) Ry(theta) Rz(psi), dotted with (qxhat, qyhat, 0)
    let xhat = qxhat * (cos_phi * cos_theta * cos_psi - sin_phi * sin_psi)
        + qyhat * (sin_phi * cos_theta * cos_psi + cos_phi * sin_psi);
    let yhat = qxhat * (-cos_phi * cos_theta * sin_psi - sin_phi * cos_psi)
        + qyhat * (-sin_phi * cos_theta * sin_psi + cos_phi * cos_psi);
    let zhat = qxhat * (cos_phi * sin_theta) + qyhat * (sin_phi * sin_theta);

    OrientedQ {
        q,
        xhat,
        yhat,
        zhat,
    }
}

/// Projects a detector coordinate onto the axis of an axisymmetric particle.
///
/// The symmetry axis is `(sinθ cosφ, sinθ sinφ, cosθ)` in the lab frame;
/// `cos_alpha` is its inner product with the in-plane unit scattering
/// vector. Agrees with the c-axis cosine of [`orient_asymmetric`] (the ψ
/// rotation drops out for a body of revolution).
///
/// # Preconditions
/// As for [`orient_asymmetric`], `qx = qy = 0` produces `NaN`.
pub fn orient_symmetric(qx: f64, qy: f64, theta_deg: f64, phi_deg: f64) -> SymmetricQ {
    let q = (qx * qx + qy * qy).sqrt();
    let qxhat = qx / q;
    let qyhat = qy / q;

    let sin_theta = theta_deg.to_radians().sin();
    let (sin_phi, cos_phi) = phi_deg.to_radians().sin_cos();

    let cos_alpha = sin_theta * (qxhat * cos_phi + qyhat * sin_phi);
    let sin_alpha = (1.0 - cos_alpha * cos_alpha).sqrt();

    SymmetricQ {
        q,
        sin_alpha,
        cos_alpha,
    }
}
