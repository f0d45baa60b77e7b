//! # Symbolic Engine Derivatives Module
//!
//! Numeric evaluation and analytic differentiation of `Expr` trees at a point.
//!
//! ## Purpose
//!
//! This module enables:
//! - **Evaluation**: `value(id, x)` - the expression at `x`, with `id` the active variable
//! - **Analytical Differentiation**: `diff(id, x)` - the derivative at `x` by recursive calculus rules
//! - **Sampling**: evaluation of value and derivative over a linspace, in parallel
//! - **Numerical Validation**: comparing analytical derivatives with finite differences
//!
//! ## Active variable convention
//!
//! Exactly one variable is active per call. Every other `Var` node is frozen at its
//! fallback value, so it behaves as a constant for both `value` and `diff`.
//!
//! ## Numeric edge cases
//!
//! Nothing here checks for zero divisors or logarithms of non-positive numbers:
//! results follow IEEE-754 (`inf`, `-inf`, `NaN`). The power rule is the functional one,
//! `(a^b)' = a^b * (a' * b/a + b' * ln a)`, used for every power, so a zero base
//! yields `NaN` even where the closed form would be finite.

use crate::symbolic::symbolic_engine::{BinaryOp, Expr, Function, VarId};
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::{debug, info, warn};
use rayon::prelude::*;

impl Expr {
    /// EVALUATION

    /// Evaluates the expression with variable `id` set to `x`.
    ///
    /// # Examples
    /// ```
    /// use RustedDiffTree::symbolic::symbolic_engine::Expr;
    /// let x = Expr::var('x', 0.0);
    /// let y = Expr::var('y', 3.0);
    /// let f = x * y;
    /// assert_eq!(f.value('x', 2.0), 6.0);
    /// ```
    pub fn value(&self, id: impl Into<VarId>, x: f64) -> f64 {
        let id = id.into();
        match self {
            Expr::Const(val) => *val,
            Expr::Var(vid, fallback) => {
                if *vid == id {
                    x
                } else {
                    *fallback
                }
            }
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.value(id, x);
                let b = rhs.value(id, x);
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                }
            }
            Expr::Unary(func, arg) => {
                let a = arg.value(id, x);
                match func {
                    Function::Sin => a.sin(),
                    Function::Cos => a.cos(),
                    Function::Log => a.ln(),
                }
            }
        }
    }

    /// DIFFERENTIATION

    /// Computes the derivative of the expression with respect to variable `id` at `x`.
    ///
    /// Implements the standard rules:
    /// - Sum rule: (f+g)' = f' + g'
    /// - Product rule: (f*g)' = f'*g + f*g'
    /// - Quotient rule: (f/g)' = (f'*g - f*g')/g^2
    /// - Functional power rule: (f^g)' = f^g * (f'*g/f + g'*ln f)
    /// - Chain rule for sin, cos, log
    ///
    /// # Examples
    /// ```
    /// use RustedDiffTree::symbolic::symbolic_engine::Expr;
    /// let x = Expr::var('x', 0.0);
    /// let f = &x * &x;
    /// assert_eq!(f.diff('x', 5.0), 10.0);
    /// ```
    pub fn diff(&self, id: impl Into<VarId>, x: f64) -> f64 {
        let id = id.into();
        match self {
            Expr::Const(_) => 0.0,
            Expr::Var(vid, _) => {
                if *vid == id {
                    1.0
                } else {
                    0.0
                }
            }
            Expr::Binary(op, lhs, rhs) => match op {
                BinaryOp::Add => lhs.diff(id, x) + rhs.diff(id, x),
                BinaryOp::Mul => {
                    lhs.diff(id, x) * rhs.value(id, x) + lhs.value(id, x) * rhs.diff(id, x)
                }
                BinaryOp::Div => {
                    let b = rhs.value(id, x);
                    (lhs.diff(id, x) * b - lhs.value(id, x) * rhs.diff(id, x)) / (b * b)
                }
                BinaryOp::Pow => {
                    let a = lhs.value(id, x);
                    let b = rhs.value(id, x);
                    a.powf(b) * (lhs.diff(id, x) * (b / a) + rhs.diff(id, x) * a.ln())
                }
            },
            Expr::Unary(func, arg) => {
                let a = arg.value(id, x);
                let da = arg.diff(id, x);
                match func {
                    Function::Sin => a.cos() * da,
                    Function::Cos => -a.sin() * da,
                    Function::Log => da / a,
                }
            }
        }
    } // end of diff

    //___________________________________________________________________________________________________________________
    //                     SAMPLING
    // _________________________________________________________________________________________________________________

    /// Evaluates the expression on every point of `xs`.
    ///
    /// The tree is only read, so the points are processed in parallel.
    pub fn values_at(&self, id: impl Into<VarId>, xs: &[f64]) -> Vec<f64> {
        let id = id.into();
        xs.par_iter().map(|&x| self.value(id, x)).collect()
    }

    /// Derivative on every point of `xs`, in parallel.
    pub fn diffs_at(&self, id: impl Into<VarId>, xs: &[f64]) -> Vec<f64> {
        let id = id.into();
        xs.par_iter().map(|&x| self.diff(id, x)).collect()
    }

    /// Evaluates the expression over a linearly spaced domain.
    ///
    /// # Arguments
    /// * `id` - active variable
    /// * `start` - Domain start value
    /// * `end` - Domain end value
    /// * `num_values` - Number of evaluation points
    pub fn values_on_linspace(
        &self,
        id: impl Into<VarId>,
        start: f64,
        end: f64,
        num_values: usize,
    ) -> Vec<f64> {
        debug!("sampling values on [{}, {}] with {} points", start, end, num_values);
        self.values_at(id, &linspace(start, end, num_values))
    }

    /// Analytical derivative over a linearly spaced domain.
    pub fn diffs_on_linspace(
        &self,
        id: impl Into<VarId>,
        start: f64,
        end: f64,
        num_values: usize,
    ) -> Vec<f64> {
        debug!("sampling derivative on [{}, {}] with {} points", start, end, num_values);
        self.diffs_at(id, &linspace(start, end, num_values))
    }

    /// Validates the analytical derivative against a central finite difference.
    ///
    /// # Arguments
    /// * `id` - Variable to differentiate with respect to
    /// * `start` - Domain start
    /// * `end` - Domain end
    /// * `num_values` - Number of test points
    /// * `max_norm` - Maximum acceptable norm difference
    ///
    /// # Returns
    /// Tuple of (actual_norm, is_within_tolerance). A `NaN` norm is never within tolerance;
    /// an empty domain gives `(NaN, false)`.
    pub fn compare_num1D(
        &self,
        id: impl Into<VarId>,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let id = id.into();
        let domain = linspace(start, end, num_values);
        if domain.is_empty() {
            warn!("derivative of {} w.r.t. {}: empty domain, nothing to compare", self, id);
            return (f64::NAN, false);
        }
        let analytical_derivative = self.diffs_at(id, &domain);
        let intervals = num_values.saturating_sub(1).max(1) as f64;
        let step = (1.0 / 1e4) * (end - start) / intervals;
        let numerical_derivative = numerical_derivative(self.lambdify1D(id), &domain, step);
        let norma_val = norm(&analytical_derivative, &numerical_derivative);
        let within = norma_val < max_norm;
        if within {
            info!(
                "derivative of {} w.r.t. {} matches finite differences on [{}, {}]: norm = {:e}",
                self, id, start, end, norma_val
            );
        } else {
            warn!(
                "derivative of {} w.r.t. {} deviates from finite differences on [{}, {}]: norm = {:e} (max {:e})",
                self, id, start, end, norma_val, max_norm
            );
        }
        (norma_val, within)
    }
}
