#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds expression trees from variables, literals and the operators `+ - * / ^`, `sin`, `cos`, `log`
/// 2) evaluates a tree and its analytical derivative at a point
/// 3) turns a tree and its derivative into strings for printing and control results
///# Example#
/// ```
/// use RustedDiffTree::symbolic::symbolic_engine::{Expr, cos, log, sin};
/// let x = Expr::var('x', 0.0);
/// // 3 + x + 3x - 3^x + sin(cos(x^3)) + log(x/(x-3)^3)
/// let f = 3.0 + &x + 3.0 * &x - (3.0 ^ &x)
///     + sin(cos(&x ^ 3))
///     + log(&x / ((&x - 3) ^ 3));
/// let value = f.value('x', 5.0);
/// let derivative = f.diff('x', 5.0);
/// assert!(value.is_finite() && derivative.is_finite());
/// println!("f = {}", f);
/// println!("f' = {}", f.print_diff('x'));
/// ```
/// Example2#
/// ```
/// use RustedDiffTree::symbolic::symbolic_engine::Expr;
/// // the fallback of y is used whenever x is the active variable, and the other way round
/// let x = Expr::var('x', 1.0);
/// let y = Expr::var('y', 2.0);
/// let f = &x * &y;
/// assert_eq!(f.value('x', 5.0), 10.0);
/// assert_eq!(f.diff('x', 5.0), 2.0);
/// assert_eq!(f.diff('y', 7.0), 1.0);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
pub mod symbolic_engine_print;
///________________________________________________________________________________________________________________________________________________
///
/// value/derivative callables over one tree
/// Example#
/// ```
/// use RustedDiffTree::symbolic::symbolic_engine::{Expr, log};
/// let x = Expr::var('x', 0.0);
/// let df = log(x).into_diff_fn();
/// assert_eq!(df.call('x', 5.0), 0.2);
/// let df_of_x = df.bind('x');
/// assert_eq!(df_of_x(4.0), 0.25);
/// ```
pub mod symbolic_lambdify;
pub mod symbolic_traits;
///______________________________________________________________________________________________________________
/// numeric helpers: linspace, finite differences, norm
/// _____________________________________________________________________________________________________________
pub mod utils;
