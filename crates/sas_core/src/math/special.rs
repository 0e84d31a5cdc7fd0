//! Scattering special functions.
//!
//! This module provides the scalar kernels shared by the form-factor and
//! magnetic models:
//! - `sas_3j1x_x`: spherical form-factor kernel `3 j1(x)/x`
//! - `sas_2j1x_x`: cylindrical cross-section kernel `2 J1(x)/x`
//! - `sas_sinx_x`: cardinal sine
//! - `langevin` / `langevin_over_x`: Langevin function and its ratio
//! - `clip` / `square` / `cube`: numeric helpers
//!
//! The small-argument branches are deliberate numerical-stability choices
//! with authoritative thresholds; they are preserved exactly and must not be
//! "simplified" into the closed forms they protect.

use num_traits::Float;

use super::bessel::j1;

/// Series cutoff for [`sas_3j1x_x`].
///
/// Below this |x| the closed form `3(sin x - x cos x)/x^3` loses relative
/// precision to cancellation; the Taylor series is exact to double precision
/// there.
pub const SPH_J1C_CUTOFF: f64 = 0.1;

/// Branch threshold for the Langevin small-argument series.
pub const LANGEVIN_CUTOFF: f64 = 0.00001;

/// Clamps `x` into `[lo, hi]`.
///
/// Values below `lo` map to `lo`, above `hi` to `hi`. `NaN` propagates.
#[inline]
pub fn clip<T: Float>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// `x^2`.
#[inline]
pub fn square<T: Float>(x: T) -> T {
    x * x
}

/// `x^3`.
#[inline]
pub fn cube<T: Float>(x: T) -> T {
    x * x * x
}

/// Cardinal sine `sin(x)/x` with the exact limit `1` at `x = 0`.
#[inline]
pub fn sas_sinx_x<T: Float>(x: T) -> T {
    if x == T::zero() {
        T::one()
    } else {
        x.sin() / x
    }
}

/// Spherical form-factor kernel `3 j1(x)/x = 3 (sin x - x cos x)/x^3`.
///
/// # Mathematical Definition
/// ```text
/// sas_3j1x_x(x) = 3 j1(x)/x,    sas_3j1x_x(0) = 1
/// ```
/// where `j1` is the first spherical Bessel function.
///
/// # Numerical Stability
/// For `|x| <` [`SPH_J1C_CUTOFF`] the closed form suffers catastrophic
/// cancellation between `sin x` and `x cos x`; the Taylor series
/// `1 - x^2/10 + x^4/280 - x^6/15120` is used instead and agrees with the
/// closed form to double precision at the cutoff.
///
/// # Examples
/// ```
/// use sas_core::math::special::sas_3j1x_x;
///
/// assert_eq!(sas_3j1x_x(0.0_f64), 1.0);
/// // First zero of j1 is at x ~ 4.493
/// assert!(sas_3j1x_x(4.4934094579_f64).abs() < 1e-9);
/// ```
#[inline]
pub fn sas_3j1x_x<T: Float>(x: T) -> T {
    let cutoff = T::from(SPH_J1C_CUTOFF).unwrap();
    if x.abs() < cutoff {
        let x2 = x * x;
        let c2 = T::from(-3.0 / 30.0).unwrap();
        let c4 = T::from(3.0 / 840.0).unwrap();
        let c6 = T::from(-3.0 / 45360.0).unwrap();
        T::one() + x2 * (c2 + x2 * (c4 + x2 * c6))
    } else {
        let three = T::from(3.0).unwrap();
        three * (x.sin() / x - x.cos()) / (x * x)
    }
}

/// Cylindrical cross-section kernel `2 J1(x)/x` with the limit `1` at zero.
///
/// `J1` is the (cylindrical) Bessel function of the first kind, order one;
/// see [`j1`](super::bessel::j1). The rational approximation used for `J1`
/// carries an explicit factor of `x`, so the ratio is cancellation-free for
/// small arguments.
#[inline]
pub fn sas_2j1x_x(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        2.0 * j1(x) / x
    }
}

/// Langevin function `L(x) = coth(x) - 1/x`.
///
/// Describes the field alignment of an ensemble of superparamagnetic
/// moments.
///
/// # Numerical Stability
/// For `x <` [`LANGEVIN_CUTOFF`] the two diverging terms cancel to
/// `x/3 + O(x^3)`; the series branch avoids the division blow-up.
///
/// # Examples
/// ```
/// use sas_core::math::special::langevin;
///
/// // L(x) -> x/3 as x -> 0
/// assert!((langevin(1e-6_f64) - 1e-6 / 3.0).abs() < 1e-18);
/// // L(x) -> 1 as x -> inf
/// assert!((langevin(100.0_f64) - 0.99).abs() < 0.01);
/// ```
#[inline]
pub fn langevin<T: Float>(x: T) -> T {
    let cutoff = T::from(LANGEVIN_CUTOFF).unwrap();
    if x < cutoff {
        T::from(1.0 / 3.0).unwrap() * x
    } else {
        T::one() / x.tanh() - T::one() / x
    }
}

/// `L(x)/x` with the exact small-argument limit `1/3`.
///
/// Appears in the cross-section prefactors of superparamagnetic models,
/// where the ratio, not the Langevin function itself, multiplies the
/// field-dependent amplitudes.
#[inline]
pub fn langevin_over_x<T: Float>(x: T) -> T {
    let cutoff = T::from(LANGEVIN_CUTOFF).unwrap();
    if x < cutoff {
        T::from(1.0 / 3.0).unwrap()
    } else {
        langevin(x) / x
    }
}
