use RustedDiffTree::symbolic::symbolic_engine::{Expr, cos, log, sin};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn demo_expression() -> Expr {
    let x = Expr::var('x', 0.0);
    3.0 + &x + 3.0 * &x - (3.0 ^ &x) + sin(cos(&x ^ 3)) + log(&x / ((&x - 3) ^ 3))
}

fn bench_value(c: &mut Criterion) {
    let f = demo_expression();
    c.bench_function("value at x=5", |b| b.iter(|| f.value('x', black_box(5.0))));
}

fn bench_diff(c: &mut Criterion) {
    let f = demo_expression();
    c.bench_function("diff at x=5", |b| b.iter(|| f.diff('x', black_box(5.0))));
}

fn bench_print_diff(c: &mut Criterion) {
    let f = demo_expression();
    c.bench_function("print_diff", |b| b.iter(|| black_box(&f).print_diff('x')));
}

fn bench_sampling(c: &mut Criterion) {
    let f = demo_expression();
    c.bench_function("diffs on 10000 points", |b| {
        b.iter(|| f.diffs_on_linspace('x', 4.0, 6.0, black_box(10_000)))
    });
}

criterion_group!(benches, bench_value, bench_diff, bench_print_diff, bench_sampling);
criterion_main!(benches);
