use RustedAD::symbolic::symbolic_engine::{Expr, X0, X1, X2};
use RustedAD::symbolic::symbolic_functions::Gradient;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn test_function() -> Expr {
    (X0 * X1).exp() * X2.sin() + X0.pow(X1) / (X2 + 1.0) - (X1 * X2).atan()
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build expression", |b| b.iter(|| black_box(test_function())));
}

fn bench_derivatives(c: &mut Criterion) {
    let f = test_function();
    c.bench_function("first partial", |b| b.iter(|| black_box(f.diff(0))));
    c.bench_function("fourth mixed partial", |b| {
        b.iter(|| black_box(f.derive(&[0, 1, 2, 0])))
    });
}

fn bench_gradient(c: &mut Criterion) {
    let f = test_function();
    let mut group = c.benchmark_group("gradient");
    group.bench_function("sequential", |b| b.iter(|| Gradient::new(black_box(&f))));
    group.bench_function("parallel", |b| b.iter(|| Gradient::new_parallel(black_box(&f))));
    let gradient = Gradient::new(&f);
    group.bench_function("eval", |b| b.iter(|| gradient.eval(black_box(&[0.3, 0.7, 1.1]))));
    group.finish();
}

fn bench_eval_and_print(c: &mut Criterion) {
    let f = test_function().derive(&[0, 2]);
    c.bench_function("eval second partial", |b| {
        b.iter(|| f.eval(black_box(&[0.3, 0.7, 1.1])))
    });
    c.bench_function("print second partial", |b| b.iter(|| f.to_string()));
}

criterion_group!(
    benches,
    bench_construction,
    bench_derivatives,
    bench_gradient,
    bench_eval_and_print
);
criterion_main!(benches);
