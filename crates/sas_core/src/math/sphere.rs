//! Uniform-sphere helpers.
//!
//! The paracrystal models are lattices of uniform spheres; their intensity
//! factorises into a lattice structure factor times the single-sphere form
//! factor computed here.

use super::special::{cube, sas_3j1x_x, square};

/// 4π/3.
const M_4PI_3: f64 = 4.188_790_204_786_391;

/// Volume of a sphere of radius `r`.
#[inline]
pub fn sphere_volume(radius: f64) -> f64 {
    M_4PI_3 * cube(radius)
}

/// Intensity of a uniform sphere, `1e-4 [Δρ V 3j1(qr)/(qr)]²`.
///
/// The 1e-4 prefactor converts from the library's Å / 1e-6 Å⁻² SLD
/// conventions to cm⁻¹; every model in the workspace shares it so
/// intensities are mutually comparable.
///
/// # Examples
/// ```
/// use sas_core::math::sphere::{sphere_form, sphere_volume};
///
/// // q -> 0 limit is the squared contrast volume
/// let pq = sphere_form(0.0, 50.0, 6e-6, 1e-6);
/// let expected = 1e-4 * (5e-6 * sphere_volume(50.0)).powi(2);
/// assert!((pq - expected).abs() / expected < 1e-12);
/// ```
#[inline]
pub fn sphere_form(q: f64, radius: f64, sld: f64, solvent_sld: f64) -> f64 {
    let fq = sphere_volume(radius) * sas_3j1x_x(q * radius);
    let contrast = sld - solvent_sld;
    1.0e-4 * square(contrast * fq)
}
