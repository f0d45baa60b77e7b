use RustedDiffTree::Utils::config::EngineConfig;
use RustedDiffTree::symbolic::symbolic_engine::{cos, log, sin};
use RustedDiffTree::{Expr, ExprFn, Symbolic, VarId};
use approx::assert_relative_eq;

fn demo_expression(x: &Expr) -> Expr {
    3.0 + x + 3.0 * x - (3.0 ^ x) + sin(cos(x ^ 3)) + log(x / ((x - 3) ^ 3))
}

#[test]
fn demo_expression_value_and_derivative() {
    let x = Expr::var('x', 0.0);
    let f = demo_expression(&x);
    assert_relative_eq!(f.value('x', 5.0), -219.76126084059723, epsilon = 1e-9);
    assert_relative_eq!(f.diff('x', 5.0), -231.6680709845861, epsilon = 1e-9);
    let (norm, ok) = f.compare_num1D('x', 4.0, 6.0, 100, 1e-4);
    assert!(ok, "norm = {}", norm);
}

#[test]
fn demo_expression_text() {
    let x = Expr::var('x', 0.0);
    let f = demo_expression(&x);
    let text = f.to_string();
    assert_eq!(text, f.print_value());
    assert!(text.contains("sin(cos((x)^(3)))"));
    assert!(text.contains("log((x)/(((x)+((-1)*(3)))^(3)))"));

    let derivative = f.print_diff('x');
    let opened = derivative.matches('(').count();
    let closed = derivative.matches(')').count();
    assert_eq!(opened, closed);
    assert!(derivative.contains("cos(cos((x)^(3)))"));
}

#[test]
fn two_variables_with_fallbacks() {
    let x = Expr::var('x', 2.0);
    let y = Expr::var('y', 3.0);
    let f = (&x ^ 2) * &y;
    assert_relative_eq!(f.value('x', 4.0), 48.0, epsilon = 1e-12);
    assert_relative_eq!(f.value('y', 4.0), 16.0, epsilon = 1e-12);
    assert_relative_eq!(f.diff('x', 4.0), 24.0, epsilon = 1e-12);
    assert_relative_eq!(f.diff('y', 4.0), 4.0, epsilon = 1e-12);
    assert_eq!(f.extract_variables(), vec![VarId::from('x'), VarId::from('y')]);
    // an id no variable carries: everything frozen
    assert_relative_eq!(f.value('z', 100.0), 12.0, epsilon = 1e-12);
    assert_eq!(f.diff('z', 100.0), 0.0);
}

#[test]
fn callables_and_trait() {
    let t = Expr::var('t', 0.0);
    let f = sin(&t) * cos(&t);
    let df: ExprFn = f.clone().into_diff_fn();
    let bound = df.bind('t');
    let samples: Vec<f64> = [0.0, 0.5, 1.0].iter().map(|&v| bound(v)).collect();
    for (v, got) in [0.0_f64, 0.5, 1.0].iter().zip(samples) {
        assert_relative_eq!(got, (2.0 * v).cos(), epsilon = 1e-12);
    }
    let as_trait: &dyn Symbolic = &f;
    assert_relative_eq!(as_trait.value(VarId::from('t'), 0.3), 0.5 * (0.6_f64).sin(), epsilon = 1e-12);
}

#[test]
fn configured_rendering() {
    let config = EngineConfig::from_toml_str("[render]\ndecimals = 1\ninteger_tolerance = 0.01\n").unwrap();
    let x = Expr::var('x', 0.0);
    let f = 2.004 * &x + 0.3;
    assert_eq!(f.print_value_with(&config.render), "((2)*(x))+(0.3)");
}
