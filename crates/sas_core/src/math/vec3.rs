//! Fixed-size 3-vector algebra.
//!
//! The minimal operation set used by the magnetic scattering kernels: set,
//! scale, add, dot, magnitude and orthogonal-projection remainder. All
//! operations are pure and return freshly constructed values; vectors are
//! `Copy` stack values that are never aliased across calls.

use std::ops::{Add, Mul, Neg, Sub};

/// A 3-component real vector.
///
/// Used for spatial directions, magnetisation components and the
/// intermediates of the Halpern-Johnson decomposition. Construction is by
/// component; all arithmetic is component-wise.
///
/// # Examples
/// ```
/// use sas_core::math::vec3::Vec3;
///
/// let v = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v.dot(Vec3::new(1.0, 0.0, 0.0)), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// x component
    pub x: f64,
    /// y component
    pub y: f64,
    /// z component
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Standard inner product.
    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm, `sqrt(v . v)`.
    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Multiplies every component by a scalar.
    #[inline]
    pub fn scale(self, a: f64) -> Vec3 {
        Vec3::new(a * self.x, a * self.y, a * self.z)
    }

    /// Returns the unit vector along `self`.
    ///
    /// # Preconditions
    /// The zero vector produces `NaN` components (0/0); callers must
    /// exclude degenerate directions, matching the forward-scattering
    /// exclusion of the magnetic decomposer.
    #[inline]
    pub fn normalized(self) -> Vec3 {
        let q = self.norm();
        Vec3::new(self.x / q, self.y / q, self.z / q)
    }

    /// Component of `self` perpendicular to `axis`.
    ///
    /// Computes `self - (self . axis / axis . axis) * axis`, the
    /// orthogonal-projection remainder. This is the magnetic interaction
    /// (Halpern-Johnson) construction: the part of a magnetisation vector
    /// that scatters.
    ///
    /// # Preconditions
    /// `axis` must be non-degenerate; a zero axis divides by zero and the
    /// result is `NaN`/`inf`. In practice `axis` is always a unit scattering
    /// direction.
    ///
    /// # Examples
    /// ```
    /// use sas_core::math::vec3::Vec3;
    ///
    /// let m = Vec3::new(1.0, 2.0, 3.0);
    /// let q = Vec3::new(0.0, 0.0, 1.0);
    /// let m_perp = m.rejection_from(q);
    /// assert!((m_perp.dot(q)).abs() < 1e-12);
    /// assert_eq!(m_perp, Vec3::new(1.0, 2.0, 0.0));
    /// ```
    #[inline]
    pub fn rejection_from(self, axis: Vec3) -> Vec3 {
        let ratio = self.dot(axis) / axis.dot(axis);
        self - axis.scale(ratio)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}
