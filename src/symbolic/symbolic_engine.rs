//! # Symbolic Engine Module
//!
//! This module holds the expression model of the crate and the builder layer on top of it:
//! the `Expr` tree itself, the variable tags, and the operator overloads that assemble
//! trees from variables, literals and existing trees.
//!
//! ## Purpose
//!
//! The symbolic engine allows users to:
//! - Create variables tagged by a small integer or a character, each with a fallback value
//! - Combine them with `+ - * / ^` and `sin`, `cos`, `log`
//! - Mix raw numeric literals into expressions (they are promoted to constants)
//!
//! Evaluation and differentiation live in `symbolic_engine_derivatives`, rendering in
//! `symbolic_engine_print`.
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! - **Constants**: `Const(f64)`
//! - **Variables**: `Var(VarId, f64)` - tag plus the fallback used when another variable is active
//! - **Operations**: `Binary(BinaryOp, lhs, rhs)` - `Add`, `Mul`, `Div`, `Pow`
//! - **Functions**: `Unary(Function, arg)` - `Sin`, `Cos`, `Log`
//!
//! ## Interesting Code Features
//!
//! 1. **No subtraction node**: `a - b` is stored as `a + (-1)*b`, so the variant set stays small
//!
//! 2. **Uniform negation**: `-e` is `Mul(Const(-1), e)` for every kind of node
//!
//! 3. **Literal promotion**: `2.0 * x`, `x ^ 2` and `sin(1.5)` all wrap the bare number into `Const`
//!
//! 4. **Precedence caveat**: Rust gives `^` a lower precedence than `+` and `*`, so
//!    `x ^ 2 + 1` is `x ^ (2 + 1)`. Parenthesize or use `Expr::pow`.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, BitXor, Div, Mul, Neg, Sub};
use strum_macros::{Display, EnumIter};

/// Identifier of a symbolic variable.
///
/// A character tag uses its code point, so `VarId::from('x')` and `VarId::from(120u32)`
/// name the same variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub u32);

impl From<char> for VarId {
    fn from(tag: char) -> Self {
        VarId(tag as u32)
    }
}

impl From<u32> for VarId {
    fn from(index: u32) -> Self {
        VarId(index)
    }
}

/// Alphabetic tags print as themselves, anything else as `v<n>`
impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match char::from_u32(self.0) {
            Some(tag) if tag.is_alphabetic() => write!(f, "{}", tag),
            _ => write!(f, "v{}", self.0),
        }
    }
}

/// Binary operations of the tree. Subtraction is built from `Add` and negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BinaryOp {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = "^")]
    Pow,
}

/// Elementary functions of one argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Function {
    #[strum(to_string = "sin")]
    Sin,
    #[strum(to_string = "cos")]
    Cos,
    /// natural logarithm
    #[strum(to_string = "log")]
    Log,
}

/// Core symbolic expression enum: an owned, immutable, acyclic tree.
///
/// Every non-leaf node exclusively owns its children through `Box<Expr>`.
/// Nothing in the crate edits a tree in place; traversals produce numbers,
/// strings, or new trees.
///
/// # Examples
/// ```
/// use RustedDiffTree::symbolic::symbolic_engine::{Expr, sin};
/// let x = Expr::var('x', 0.0);
/// let f = sin(2.0 * x);
/// assert_eq!(f.print_value(), "sin((2)*(x))");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Symbolic variable: identifier and the value used when a different variable is active
    Var(VarId, f64),
    /// Binary operation: op, left, right
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// Function applied to a single argument
    Unary(Function, Box<Expr>),
}

/// Display prints the same fully parenthesized form as `print_value`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.print_value())
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates a constant leaf.
    pub fn constant(value: f64) -> Expr {
        Expr::Const(value)
    }

    /// Creates a variable leaf.
    ///
    /// # Arguments
    /// * `id` - tag of the variable, a `char` or a small `u32`
    /// * `fallback` - value substituted when the tree is evaluated or differentiated
    ///   with respect to some other variable
    pub fn var(id: impl Into<VarId>, fallback: f64) -> Expr {
        Expr::Var(id.into(), fallback)
    }

    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::Binary(op, lhs.into().boxed(), rhs.into().boxed())
    }

    pub fn unary(func: Function, arg: impl Into<Expr>) -> Expr {
        Expr::Unary(func, arg.into().boxed())
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// The single negation rule shared by every kind of node: `(-1) * self`.
    pub fn negate(self) -> Expr {
        Expr::binary(BinaryOp::Mul, Expr::Const(-1.0), self)
    }

    /// Creates power expression self^rhs.
    ///
    /// Same as the `^` operator but without its precedence surprises.
    pub fn pow(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Pow, self, rhs)
    }

    pub fn sin(self) -> Expr {
        Expr::unary(Function::Sin, self)
    }

    pub fn cos(self) -> Expr {
        Expr::unary(Function::Cos, self)
    }

    /// Natural logarithm ln(self), printed as `log`
    pub fn ln(self) -> Expr {
        Expr::unary(Function::Log, self)
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, id: impl Into<VarId>) -> bool {
        let id = id.into();
        match self {
            Expr::Const(_) => false,
            Expr::Var(vid, _) => *vid == id,
            Expr::Binary(_, lhs, rhs) => lhs.contains_variable(id) || rhs.contains_variable(id),
            Expr::Unary(_, arg) => arg.contains_variable(id),
        }
    }

    /// Sorted, deduplicated identifiers of all variables occurring in the tree.
    pub fn extract_variables(&self) -> Vec<VarId> {
        let mut found = BTreeSet::new();
        self.collect_variables(&mut found);
        found.into_iter().collect()
    }

    fn collect_variables(&self, found: &mut BTreeSet<VarId>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(vid, _) => {
                found.insert(*vid);
            }
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_variables(found);
                rhs.collect_variables(found);
            }
            Expr::Unary(_, arg) => arg.collect_variables(found),
        }
    }

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Builds a new tree; `self` is left untouched.
    ///
    /// # Arguments
    /// * `id` - variable to substitute
    /// * `value` - numerical value to put in its place
    pub fn set_variable(&self, id: impl Into<VarId>, value: f64) -> Expr {
        let id = id.into();
        match self {
            Expr::Var(vid, _) if *vid == id => Expr::Const(value),
            Expr::Binary(op, lhs, rhs) => Expr::Binary(
                *op,
                lhs.set_variable(id, value).boxed(),
                rhs.set_variable(id, value).boxed(),
            ),
            Expr::Unary(func, arg) => Expr::Unary(*func, arg.set_variable(id, value).boxed()),
            _ => self.clone(),
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(..) => 1,
            Expr::Binary(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
            Expr::Unary(_, arg) => 1 + arg.node_count(),
        }
    }
}

//___________________________________BUILDER FUNCTIONS____________________________________

/// sin(arg); a bare number is promoted to a constant
pub fn sin(arg: impl Into<Expr>) -> Expr {
    Expr::unary(Function::Sin, arg)
}

/// cos(arg); a bare number is promoted to a constant
pub fn cos(arg: impl Into<Expr>) -> Expr {
    Expr::unary(Function::Cos, arg)
}

/// natural logarithm of arg; a bare number is promoted to a constant
pub fn log(arg: impl Into<Expr>) -> Expr {
    Expr::unary(Function::Log, arg)
}

//___________________________________LITERAL PROMOTION____________________________________

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

macro_rules! promote_literal {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Expr::Const(value as f64)
                }
            }
        )+
    };
}

promote_literal!(f64, i32);

//___________________________________OPERATORS____________________________________

impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Self::Output {
        Expr::binary(BinaryOp::Add, self, rhs)
    }
}

/// a - b is stored as a + (-b)
impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Self::Output {
        self + rhs.into().negate()
    }
}

impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Self::Output {
        Expr::binary(BinaryOp::Mul, self, rhs)
    }
}

impl<T: Into<Expr>> Div<T> for Expr {
    type Output = Expr;

    fn div(self, rhs: T) -> Self::Output {
        Expr::binary(BinaryOp::Div, self, rhs)
    }
}

/// `^` is power, not xor
impl<T: Into<Expr>> BitXor<T> for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: T) -> Self::Output {
        Expr::binary(BinaryOp::Pow, self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// borrowed trees are cloned into the new node
macro_rules! borrowed_operator {
    ($($trait:ident, $method:ident);+) => {
        $(
            impl<T: Into<Expr>> $trait<T> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: T) -> Self::Output {
                    self.clone().$method(rhs)
                }
            }
        )+
    };
}

borrowed_operator!(Add, add; Sub, sub; Mul, mul; Div, div; BitXor, bitxor);

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.clone().negate()
    }
}

// literal on the left-hand side: promote, then combine
macro_rules! literal_lhs_operator {
    ($($t:ty),+) => {
        $(
            impl Add<Expr> for $t {
                type Output = Expr;
                fn add(self, rhs: Expr) -> Expr {
                    Expr::from(self) + rhs
                }
            }
            impl Sub<Expr> for $t {
                type Output = Expr;
                fn sub(self, rhs: Expr) -> Expr {
                    Expr::from(self) - rhs
                }
            }
            impl Mul<Expr> for $t {
                type Output = Expr;
                fn mul(self, rhs: Expr) -> Expr {
                    Expr::from(self) * rhs
                }
            }
            impl Div<Expr> for $t {
                type Output = Expr;
                fn div(self, rhs: Expr) -> Expr {
                    Expr::from(self) / rhs
                }
            }
            impl BitXor<Expr> for $t {
                type Output = Expr;
                fn bitxor(self, rhs: Expr) -> Expr {
                    Expr::from(self) ^ rhs
                }
            }
            impl Add<&Expr> for $t {
                type Output = Expr;
                fn add(self, rhs: &Expr) -> Expr {
                    Expr::from(self) + rhs
                }
            }
            impl Sub<&Expr> for $t {
                type Output = Expr;
                fn sub(self, rhs: &Expr) -> Expr {
                    Expr::from(self) - rhs
                }
            }
            impl Mul<&Expr> for $t {
                type Output = Expr;
                fn mul(self, rhs: &Expr) -> Expr {
                    Expr::from(self) * rhs
                }
            }
            impl Div<&Expr> for $t {
                type Output = Expr;
                fn div(self, rhs: &Expr) -> Expr {
                    Expr::from(self) / rhs
                }
            }
            impl BitXor<&Expr> for $t {
                type Output = Expr;
                fn bitxor(self, rhs: &Expr) -> Expr {
                    Expr::from(self) ^ rhs
                }
            }
        )+
    };
}

literal_lhs_operator!(f64, i32);
