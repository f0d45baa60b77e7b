use crate::symbolic::symbolic_engine::{Expr, VarId};

/// A tree together with the way it should be called: plain value or derivative.
///
/// Both variants wrap the same kind of tree; switching the mode never touches it.
///
/// # Examples
/// ```
/// use RustedDiffTree::symbolic::symbolic_engine::Expr;
/// let x = Expr::var('x', 0.0);
/// let f = (&x * &x).into_value_fn();
/// assert_eq!(f.call('x', 3.0), 9.0);
/// let df = f.toggled();
/// assert_eq!(df.call('x', 3.0), 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ExprFn {
    Value(Expr),
    Derivative(Expr),
}

impl ExprFn {
    /// value or derivative of the wrapped tree at `x`, `id` being the active variable
    pub fn call(&self, id: impl Into<VarId>, x: f64) -> f64 {
        match self {
            ExprFn::Value(expr) => expr.value(id, x),
            ExprFn::Derivative(expr) => expr.diff(id, x),
        }
    }

    pub fn expr(&self) -> &Expr {
        match self {
            ExprFn::Value(expr) | ExprFn::Derivative(expr) => expr,
        }
    }

    pub fn into_inner(self) -> Expr {
        match self {
            ExprFn::Value(expr) | ExprFn::Derivative(expr) => expr,
        }
    }

    pub fn is_derivative(&self) -> bool {
        matches!(self, ExprFn::Derivative(_))
    }

    /// Same tree, other mode
    pub fn toggled(self) -> ExprFn {
        match self {
            ExprFn::Value(expr) => ExprFn::Derivative(expr),
            ExprFn::Derivative(expr) => ExprFn::Value(expr),
        }
    }

    /// Text of what `call` computes: the expression or its derivative
    pub fn print(&self, id: impl Into<VarId>) -> String {
        match self {
            ExprFn::Value(expr) => expr.print_value(),
            ExprFn::Derivative(expr) => expr.print_diff(id),
        }
    }

    /// Fixes the active variable and returns a plain one-argument closure owning the tree.
    pub fn bind(self, id: impl Into<VarId>) -> Box<dyn Fn(f64) -> f64 + Send + Sync> {
        let id = id.into();
        Box::new(move |x| self.call(id, x))
    }
}

impl Expr {
    /// LAMBDIFICATION

    pub fn into_value_fn(self) -> ExprFn {
        ExprFn::Value(self)
    }

    pub fn into_diff_fn(self) -> ExprFn {
        ExprFn::Derivative(self)
    }

    /// Borrowing closure x -> value(id, x).
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = (x ^ 2).lambdify1D('x');
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, id: impl Into<VarId>) -> Box<dyn Fn(f64) -> f64 + '_> {
        let id = id.into();
        Box::new(move |x| self.value(id, x))
    }

    /// Borrowing closure x -> diff(id, x)
    pub fn lambdify_diff1D(&self, id: impl Into<VarId>) -> Box<dyn Fn(f64) -> f64 + '_> {
        let id = id.into();
        Box::new(move |x| self.diff(id, x))
    }
}
