//! Radially layered sphere amplitude.
//!
//! The forward-scattering amplitude of a core plus concentric shells is a
//! telescoping sum: each boundary contributes the volume inside it times
//! the SLD step across it, weighted by the spherical kernel `3 j1(qr)/(qr)`.

use sas_core::math::special::sas_3j1x_x;
use sas_core::math::sphere::sphere_volume;

use crate::error::ModelError;

/// Scattering amplitude of a core-shell sphere.
///
/// Accumulates shell-by-shell: shell `i` contributes
/// `V(r_i) · (sld[i] - sld_inside) · 3j1(q r_i)/(q r_i)` at its inner
/// radius `r_i`, radii accumulating additively through the thicknesses,
/// with a final solvent-contrast term at the outer surface.
///
/// # Arguments
/// * `q` - Scattering-vector magnitude
/// * `sld_core` - Core scattering length density
/// * `radius` - Core radius
/// * `sld_solvent` - Solvent scattering length density
/// * `fp_n` - Shell count as a real, rounded half-up to an integer (the
///   kernel calling convention passes counts as floating point; supply a
///   value that rounds unambiguously)
/// * `sld` - Shell SLDs, at least `n` entries
/// * `thickness` - Shell thicknesses, at least `n` entries
///
/// # Preconditions
/// `sld` and `thickness` must hold at least the rounded shell count of
/// entries; shorter slices panic on indexing. [`CoreShellProfile`] is the
/// validated way in.
///
/// # Examples
/// ```
/// use sas_models::magnetic::fq_core_shell;
/// use sas_core::math::special::sas_3j1x_x;
/// use sas_core::math::sphere::sphere_volume;
///
/// // No shells: a uniform sphere in solvent contrast
/// let f = fq_core_shell(0.01, 2e-6, 50.0, 6e-6, 0.0, &[], &[]);
/// let expected = sphere_volume(50.0) * (6e-6 - 2e-6) * sas_3j1x_x(0.01 * 50.0);
/// assert!((f - expected).abs() < 1e-20);
/// ```
pub fn fq_core_shell(
    q: f64,
    sld_core: f64,
    radius: f64,
    sld_solvent: f64,
    fp_n: f64,
    sld: &[f64],
    thickness: &[f64],
) -> f64 {
    let n = (fp_n + 0.5) as usize;

    let mut f = 0.0;
    let mut r = radius;
    let mut last_sld = sld_core;
    for i in 0..n {
        f += sphere_volume(r) * (sld[i] - last_sld) * sas_3j1x_x(q * r);
        last_sld = sld[i];
        r += thickness[i];
    }
    f += sphere_volume(r) * (sld_solvent - last_sld) * sas_3j1x_x(q * r);
    f
}

/// A radially layered sphere: core, `n` shells, solvent.
///
/// Validates the parallel shell sequences once at construction; evaluation
/// then dispatches to [`fq_core_shell`] with the exact count, bypassing the
/// floating-point rounding of the raw kernel convention.
///
/// # Examples
/// ```
/// use sas_models::magnetic::CoreShellProfile;
///
/// let profile = CoreShellProfile::new(
///     1e-6, 30.0, 6.3e-6,
///     vec![2e-6, 3e-6],
///     vec![10.0, 5.0],
/// ).unwrap();
/// assert_eq!(profile.outer_radius(), 45.0);
/// assert!(profile.amplitude(0.01).is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreShellProfile {
    sld_core: f64,
    radius: f64,
    sld_solvent: f64,
    shell_slds: Vec<f64>,
    shell_thicknesses: Vec<f64>,
}

impl CoreShellProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    /// - `ModelError::InvalidRadius` if the core radius is negative or
    ///   non-finite
    /// - `ModelError::ShellMismatch` if the SLD and thickness sequences
    ///   differ in length
    /// - `ModelError::InvalidLength` if any shell thickness is negative or
    ///   non-finite
    pub fn new(
        sld_core: f64,
        radius: f64,
        sld_solvent: f64,
        shell_slds: Vec<f64>,
        shell_thicknesses: Vec<f64>,
    ) -> Result<Self, ModelError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ModelError::InvalidRadius { radius });
        }
        if shell_slds.len() != shell_thicknesses.len() {
            return Err(ModelError::ShellMismatch {
                slds: shell_slds.len(),
                thicknesses: shell_thicknesses.len(),
            });
        }
        if let Some(bad) = shell_thicknesses
            .iter()
            .copied()
            .find(|t| !t.is_finite() || *t < 0.0)
        {
            return Err(ModelError::InvalidLength {
                name: "shell thickness",
                length: bad,
            });
        }

        Ok(CoreShellProfile {
            sld_core,
            radius,
            sld_solvent,
            shell_slds,
            shell_thicknesses,
        })
    }

    /// Number of shells between core and solvent.
    #[inline]
    pub fn shell_count(&self) -> usize {
        self.shell_slds.len()
    }

    /// Radius of the outermost surface.
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.shell_thicknesses.iter().sum::<f64>()
    }

    /// Forward-scattering amplitude at `q`.
    pub fn amplitude(&self, q: f64) -> f64 {
        fq_core_shell(
            q,
            self.sld_core,
            self.radius,
            self.sld_solvent,
            self.shell_count() as f64,
            &self.shell_slds,
            &self.shell_thicknesses,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sas_core::math::special::sas_3j1x_x;

    // ==========================================================
    // Kernel
    // ==========================================================

    #[test]
    fn test_no_shells_reduces_to_uniform_sphere() {
        // n = 0: amplitude of a uniform sphere with solvent-core contrast
        let (q, radius) = (0.013, 42.0);
        let (sld_core, sld_solvent) = (2e-6, 6e-6);
        let f = fq_core_shell(q, sld_core, radius, sld_solvent, 0.0, &[], &[]);
        let expected = sphere_volume(radius) * (sld_solvent - sld_core) * sas_3j1x_x(q * radius);
        assert_relative_eq!(f, expected, max_relative = 1e-14);
    }

    #[test]
    fn test_matched_shell_equivalent_to_thicker_core() {
        // A shell with the core's SLD only moves the outer surface
        let q = 0.02;
        let with_shell = fq_core_shell(q, 2e-6, 30.0, 6e-6, 1.0, &[2e-6], &[10.0]);
        let thick_core = fq_core_shell(q, 2e-6, 40.0, 6e-6, 0.0, &[], &[]);
        assert_relative_eq!(with_shell, thick_core, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_contrast_everywhere_vanishes() {
        let f = fq_core_shell(0.05, 3e-6, 25.0, 3e-6, 2.0, &[3e-6, 3e-6], &[5.0, 5.0]);
        assert_relative_eq!(f, 0.0, epsilon = 1e-24);
    }

    #[test]
    fn test_shell_count_rounds_half_up() {
        // fp_n = 1.6 rounds to 2 shells, fp_n = 2.4 rounds to 2 shells
        let slds = [4e-6, 5e-6];
        let thicknesses = [8.0, 12.0];
        let exact = fq_core_shell(0.01, 1e-6, 20.0, 6e-6, 2.0, &slds, &thicknesses);
        let up = fq_core_shell(0.01, 1e-6, 20.0, 6e-6, 1.6, &slds, &thicknesses);
        let down = fq_core_shell(0.01, 1e-6, 20.0, 6e-6, 2.4, &slds, &thicknesses);
        assert_eq!(exact, up);
        assert_eq!(exact, down);
    }

    #[test]
    fn test_zero_q_amplitude_is_contrast_volume_sum() {
        // At q = 0 each kernel is 1: amplitude telescopes to
        // sum of V(boundary) * SLD-step
        let f = fq_core_shell(0.0, 1e-6, 10.0, 4e-6, 1.0, &[2e-6], &[5.0]);
        let expected =
            sphere_volume(10.0) * (2e-6 - 1e-6) + sphere_volume(15.0) * (4e-6 - 2e-6);
        assert_relative_eq!(f, expected, max_relative = 1e-14);
    }

    // ==========================================================
    // Validated profile
    // ==========================================================

    #[test]
    fn test_profile_matches_kernel() {
        let profile = CoreShellProfile::new(
            1e-6,
            30.0,
            6.3e-6,
            vec![2e-6, 3e-6],
            vec![10.0, 5.0],
        )
        .unwrap();
        let direct = fq_core_shell(
            0.02,
            1e-6,
            30.0,
            6.3e-6,
            2.0,
            &[2e-6, 3e-6],
            &[10.0, 5.0],
        );
        assert_eq!(profile.amplitude(0.02), direct);
    }

    #[test]
    fn test_profile_rejects_mismatched_shells() {
        let err = CoreShellProfile::new(1e-6, 30.0, 6e-6, vec![2e-6, 3e-6], vec![10.0]);
        assert_eq!(
            err,
            Err(ModelError::ShellMismatch {
                slds: 2,
                thicknesses: 1
            })
        );
    }

    #[test]
    fn test_profile_rejects_negative_radius() {
        let err = CoreShellProfile::new(1e-6, -5.0, 6e-6, vec![], vec![]);
        assert_eq!(err, Err(ModelError::InvalidRadius { radius: -5.0 }));
    }

    #[test]
    fn test_profile_rejects_negative_thickness() {
        let err = CoreShellProfile::new(1e-6, 5.0, 6e-6, vec![2e-6], vec![-1.0]);
        assert!(matches!(err, Err(ModelError::InvalidLength { .. })));
    }

    #[test]
    fn test_outer_radius_accumulates() {
        let profile =
            CoreShellProfile::new(0.0, 12.0, 0.0, vec![1e-6, 2e-6, 3e-6], vec![3.0, 4.0, 5.0])
                .unwrap();
        assert_eq!(profile.shell_count(), 3);
        assert_relative_eq!(profile.outer_radius(), 24.0, epsilon = 1e-12);
    }
}
