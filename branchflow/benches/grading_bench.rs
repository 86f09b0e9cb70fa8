//! Benchmarks for grade evaluation and score parsing.

use branchflow::grading::{evaluate, parse_scores};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn grading_benchmark(c: &mut Criterion) {
    let scores: Vec<f64> = (0..1_000).map(|i| f64::from(i % 101)).collect();
    let line = scores
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    c.bench_function("evaluate_1000", |b| {
        b.iter(|| evaluate(black_box(&scores)))
    });

    c.bench_function("parse_scores_1000", |b| {
        b.iter(|| parse_scores(black_box(&line)))
    });
}

criterion_group!(benches, grading_benchmark);
criterion_main!(benches);
