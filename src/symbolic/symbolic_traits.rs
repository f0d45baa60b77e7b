// SYMBOLIC TRAITS //////////////////////////////////////////////////////////////////
// Anything that can be evaluated, differentiated and printed like an expression tree.
// Implemented for the native `Expr` and for a bare `f64`, which behaves as a constant.

use crate::symbolic::symbolic_engine::{Expr, VarId};
use crate::symbolic::symbolic_engine_print::{RenderSettings, format_constant};

pub trait Symbolic {
    fn value(&self, id: VarId, x: f64) -> f64;
    fn diff(&self, id: VarId, x: f64) -> f64;
    fn print_value(&self) -> String;
    fn print_diff(&self, id: VarId) -> String;
    /// the same thing as a tree
    fn to_native(&self) -> Expr;
}

///////////////// IMPLEMENTATION OF THE TRAIT FOR THE NATIVE ENGINE /////////////////////////
impl Symbolic for Expr {
    fn value(&self, id: VarId, x: f64) -> f64 {
        Expr::value(self, id, x)
    }
    fn diff(&self, id: VarId, x: f64) -> f64 {
        Expr::diff(self, id, x)
    }
    fn print_value(&self) -> String {
        Expr::print_value(self)
    }
    fn print_diff(&self, id: VarId) -> String {
        Expr::print_diff(self, id)
    }
    fn to_native(&self) -> Expr {
        self.clone()
    }
}

impl Symbolic for f64 {
    fn value(&self, _id: VarId, _x: f64) -> f64 {
        *self
    }
    fn diff(&self, _id: VarId, _x: f64) -> f64 {
        0.0
    }
    fn print_value(&self) -> String {
        format_constant(*self, &RenderSettings::default())
    }
    fn print_diff(&self, _id: VarId) -> String {
        "0".to_string()
    }
    fn to_native(&self) -> Expr {
        Expr::Const(*self)
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
// COMMANDS  ////////////////////////////////////////////////////////////////////////////

/// value of `tree` at `x` with `id` active
pub fn value<S: Symbolic + ?Sized>(tree: &S, id: impl Into<VarId>, x: f64) -> f64 {
    tree.value(id.into(), x)
}

/// derivative of `tree` with respect to `id` at `x`
pub fn diff<S: Symbolic + ?Sized>(tree: &S, id: impl Into<VarId>, x: f64) -> f64 {
    tree.diff(id.into(), x)
}

pub fn print_value<S: Symbolic + ?Sized>(tree: &S) -> String {
    tree.print_value()
}

pub fn print_diff<S: Symbolic + ?Sized>(tree: &S, id: impl Into<VarId>) -> String {
    tree.print_diff(id.into())
}
