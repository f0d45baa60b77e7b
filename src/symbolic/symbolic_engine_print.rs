//! # Printing of expressions and derivatives
//!
//! Two traversals producing fully parenthesized text:
//! - `print_value` - the expression itself
//! - `print_diff` - its derivative, built with the same rule shapes the numeric
//!   differentiator uses, but joining strings instead of numbers
//!
//! No simplification happens here: `x*x` differentiates to `((1)*(x)+(x)*(1))`.

use crate::symbolic::symbolic_engine::{BinaryOp, Expr, Function, VarId};

/// How constants are written out.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// a constant closer than this to an integer prints as that integer
    pub integer_tolerance: f64,
    /// digits after the decimal point for every other constant
    pub decimals: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            integer_tolerance: 1e-7,
            decimals: 3,
        }
    }
}

/// Integer literal when `value` is (almost) whole, fixed-point literal otherwise.
/// `NaN` and infinities fall through to the fixed-point branch.
pub fn format_constant(value: f64, settings: &RenderSettings) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < settings.integer_tolerance {
        // `+ 0.0` turns -0 into 0
        format!("{:.0}", rounded + 0.0)
    } else {
        format!("{:.*}", settings.decimals, value)
    }
}

impl Expr {
    /// Converts the expression to a human-readable string.
    ///
    /// # Examples
    /// ```
    /// use RustedDiffTree::symbolic::symbolic_engine::Expr;
    /// let x = Expr::var('x', 0.0);
    /// assert_eq!((1.5 / x).print_value(), "(1.500)/(x)");
    /// ```
    pub fn print_value(&self) -> String {
        self.print_value_with(&RenderSettings::default())
    }

    pub fn print_value_with(&self, settings: &RenderSettings) -> String {
        match self {
            Expr::Const(val) => format_constant(*val, settings),
            Expr::Var(vid, _) => vid.to_string(),
            Expr::Binary(op, lhs, rhs) => format!(
                "({}){}({})",
                lhs.print_value_with(settings),
                op,
                rhs.print_value_with(settings)
            ),
            Expr::Unary(func, arg) => format!("{}({})", func, arg.print_value_with(settings)),
        }
    } // end of print_value_with

    /// Symbolic derivative with respect to `id`, as text.
    ///
    /// # Examples
    /// ```
    /// use RustedDiffTree::symbolic::symbolic_engine::{Expr, sin};
    /// let x = Expr::var('x', 0.0);
    /// assert_eq!(sin(x).print_diff('x'), "cos(x)*(1)");
    /// ```
    pub fn print_diff(&self, id: impl Into<VarId>) -> String {
        self.print_diff_with(id, &RenderSettings::default())
    }

    pub fn print_diff_with(&self, id: impl Into<VarId>, settings: &RenderSettings) -> String {
        let id = id.into();
        match self {
            Expr::Const(_) => "0".to_string(),
            Expr::Var(vid, _) => {
                if *vid == id {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.print_value_with(settings);
                let b = rhs.print_value_with(settings);
                let da = lhs.print_diff_with(id, settings);
                let db = rhs.print_diff_with(id, settings);
                match op {
                    BinaryOp::Add => format!("({})+({})", da, db),
                    BinaryOp::Mul => format!("(({})*({})+({})*({}))", da, b, a, db),
                    BinaryOp::Div => {
                        format!("((({})*({})-({})*({}))/(({})*({})))", da, b, a, db, b, b)
                    }
                    BinaryOp::Pow => format!(
                        "(({})*(({})*(({})/({}))+(({})*(log({})))))",
                        self.print_value_with(settings),
                        da,
                        b,
                        a,
                        db,
                        a
                    ),
                }
            }
            Expr::Unary(func, arg) => {
                let a = arg.print_value_with(settings);
                let da = arg.print_diff_with(id, settings);
                match func {
                    Function::Sin => format!("cos({})*({})", a, da),
                    Function::Cos => format!("-sin({})*({})", a, da),
                    Function::Log => format!("({})/({})", da, a),
                }
            }
        }
    } // end of print_diff_with
}
