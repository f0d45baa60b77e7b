// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod symbolic;

pub use symbolic::symbolic_engine::{BinaryOp, Expr, Function, VarId};
pub use symbolic::symbolic_lambdify::ExprFn;
pub use symbolic::symbolic_traits::Symbolic;
