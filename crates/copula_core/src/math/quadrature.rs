//! Gauss–Legendre quadrature.
//!
//! Nodes and weights are computed once per rule by Newton iteration on the
//! Legendre polynomial `P_n`. Composite rules split the interval into equal
//! panels, which keeps the error under control for integrands with mild
//! kinks (copula CDFs near the diagonal, Debye integrands near zero).
//!
//! # Example
//!
//! ```
//! use copula_core::math::quadrature::GaussLegendre;
//!
//! let rule = GaussLegendre::new(16);
//! let integral = rule.integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI);
//! assert!((integral - 2.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::sync::OnceLock;

const NEWTON_TOLERANCE: f64 = 1e-15;
const NEWTON_MAX_ITERATIONS: usize = 100;

/// Order of the shared rule returned by [`GaussLegendre::standard`].
pub const STANDARD_ORDER: usize = 32;

/// Gauss–Legendre rule of fixed order on `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Build an `n`-point rule.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "quadrature order must be positive");
        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];
        let nf = n as f64;

        for i in 0..n.div_ceil(2) {
            let mut z = (PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
            let mut derivative = 1.0;
            for _ in 0..NEWTON_MAX_ITERATIONS {
                let (p, dp) = legendre_with_derivative(n, z);
                derivative = dp;
                let step = p / dp;
                z -= step;
                if step.abs() < NEWTON_TOLERANCE {
                    break;
                }
            }
            let weight = 2.0 / ((1.0 - z * z) * derivative * derivative);
            nodes[i] = -z;
            nodes[n - 1 - i] = z;
            weights[i] = weight;
            weights[n - 1 - i] = weight;
        }

        Self { nodes, weights }
    }

    /// Shared 32-point rule, built on first use.
    pub fn standard() -> &'static GaussLegendre {
        static RULE: OnceLock<GaussLegendre> = OnceLock::new();
        RULE.get_or_init(|| GaussLegendre::new(STANDARD_ORDER))
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes on `[-1, 1]`.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Weights matching [`nodes`](Self::nodes).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Integrate `f` over `[a, b]` with a single panel.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        half * self
            .nodes
            .iter()
            .zip(&self.weights)
            .map(|(&x, &w)| w * f(mid + half * x))
            .sum::<f64>()
    }

    /// Integrate `f` over `[a, b]` split into `panels` equal panels.
    pub fn integrate_composite<F>(&self, f: F, a: f64, b: f64, panels: usize) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let panels = panels.max(1);
        let width = (b - a) / panels as f64;
        (0..panels)
            .map(|k| {
                let lo = a + k as f64 * width;
                self.integrate(&f, lo, lo + width)
            })
            .sum()
    }

    /// Integrate `f(x, y)` over `[ax, bx] × [ay, by]` with a composite
    /// tensor-product rule.
    pub fn integrate_2d<F>(&self, f: F, x_range: (f64, f64), y_range: (f64, f64), panels: usize) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        self.integrate_composite(
            |x| self.integrate_composite(|y| f(x, y), y_range.0, y_range.1, panels),
            x_range.0,
            x_range.1,
            panels,
        )
    }
}

/// `(P_n(z), P_n'(z))` by the three-term recurrence.
fn legendre_with_derivative(n: usize, z: f64) -> (f64, f64) {
    let mut p_curr = 1.0;
    let mut p_prev = 0.0;
    for j in 0..n {
        let jf = j as f64;
        let p_next = ((2.0 * jf + 1.0) * z * p_curr - jf * p_prev) / (jf + 1.0);
        p_prev = p_curr;
        p_curr = p_next;
    }
    let derivative = n as f64 * (z * p_curr - p_prev) / (z * z - 1.0);
    (p_curr, derivative)
}
