//! Gauss-Legendre quadrature tables.
//!
//! The orientation averages in the model layer are weighted sums over
//! fixed-order Gauss-Legendre rules: 150 points for the paracrystal powder
//! average, 76 points for axisymmetric shapes. The tables are process-owned
//! immutable constants ([`GAUSS_150`], [`GAUSS_76`]) handed to the
//! integration loops as read-only data; nothing mutates them after
//! construction.
//!
//! Nodes and weights are computed by Newton iteration on the Legendre
//! polynomials (the same construction the reference tables were generated
//! with) and are exact to double precision, so generating them at first use
//! is equivalent to shipping 300 transcribed constants.

use std::sync::LazyLock;

use crate::types::error::QuadratureError;

/// Newton-iteration convergence tolerance on the node position.
const NODE_EPS: f64 = 3e-14;

/// Iteration cap; Newton on Legendre roots converges in a handful of steps.
const MAX_NEWTON_ITER: usize = 100;

/// The 76-point rule used by axisymmetric-shape orientation averages.
pub static GAUSS_76: LazyLock<GaussLegendre> =
    LazyLock::new(|| GaussLegendre::new(76).expect("order 76 is valid"));

/// The 150-point rule used by the paracrystal powder average.
pub static GAUSS_150: LazyLock<GaussLegendre> =
    LazyLock::new(|| GaussLegendre::new(150).expect("order 150 is valid"));

/// A Gauss-Legendre rule on the canonical interval [-1, 1].
///
/// Nodes are the roots of the order-`n` Legendre polynomial, in ascending
/// order; weights are the matching Christoffel numbers. A rule of order `n`
/// integrates polynomials of degree `2n - 1` exactly.
///
/// # Examples
/// ```
/// use sas_core::math::quadrature::GaussLegendre;
///
/// let rule = GaussLegendre::new(5).unwrap();
/// // Exact for x^2 on [-1, 1]
/// let integral = rule.integrate(-1.0, 1.0, |x| x * x);
/// assert!((integral - 2.0 / 3.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Builds the order-`n` rule.
    ///
    /// # Errors
    /// `QuadratureError::InvalidOrder` if `n == 0`.
    pub fn new(n: usize) -> Result<Self, QuadratureError> {
        if n == 0 {
            return Err(QuadratureError::InvalidOrder { order: n });
        }

        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];
        let nf = n as f64;

        // Roots come in +/- pairs; solve the upper half and mirror.
        let half = n.div_ceil(2);
        for i in 0..half {
            // Chebyshev-based initial guess for the i-th root
            let mut z = (std::f64::consts::PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
            let mut derivative = 0.0;

            for _ in 0..MAX_NEWTON_ITER {
                // Upward recurrence for P_n(z)
                let mut p1 = 1.0;
                let mut p2 = 0.0;
                for j in 0..n {
                    let p3 = p2;
                    p2 = p1;
                    let jf = j as f64;
                    p1 = ((2.0 * jf + 1.0) * z * p2 - jf * p3) / (jf + 1.0);
                }
                derivative = nf * (z * p1 - p2) / (z * z - 1.0);

                let z_prev = z;
                z = z_prev - p1 / derivative;
                if (z - z_prev).abs() <= NODE_EPS {
                    break;
                }
            }

            nodes[i] = -z;
            nodes[n - 1 - i] = z;
            weights[i] = 2.0 / ((1.0 - z * z) * derivative * derivative);
            weights[n - 1 - i] = weights[i];
        }

        Ok(GaussLegendre { nodes, weights })
    }

    /// Number of abscissae.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the rule is empty (never true for a constructed rule).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes on [-1, 1], ascending.
    #[inline]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Weights matching [`nodes`](Self::nodes) by position.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Integrates `f` over `[lower, upper]`.
    ///
    /// Maps the canonical nodes affinely onto the interval and returns the
    /// weighted sum scaled by the half-range.
    pub fn integrate<F>(&self, lower: f64, upper: f64, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half_range = 0.5 * (upper - lower);
        let midpoint = 0.5 * (upper + lower);
        let sum: f64 = self
            .nodes
            .iter()
            .zip(&self.weights)
            .map(|(&z, &w)| w * f(half_range * z + midpoint))
            .sum();
        sum * half_range
    }
}
