use criterion::{criterion_group, criterion_main, Criterion};
use rec_session::SolverSession;
use std::hint::black_box;

const INPUTS: &[&str] = &[
    "T(n) = 2T(n/2) + n",
    "T(n) = 8T(n/2) + n^2",
    "T(n) = T(n-1) + n log n",
    "T(n) = T(n/2) + T(n/6) + n*log(n)",
];

fn bench_parse_and_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_solve");
    for input in INPUTS {
        group.bench_function(*input, |b| {
            b.iter(|| {
                let mut session = SolverSession::new();
                session.parse(black_box(input));
                black_box(session.solve(None))
            })
        });
    }
    group.finish();
}

fn bench_substitution(c: &mut Criterion) {
    c.bench_function("substitution_divide", |b| {
        b.iter(|| {
            let mut session = SolverSession::new();
            session.parse("T(n) = 3T(n/4) + n log n");
            black_box(session.solve(Some(rec_ast::MethodHint::Substitution)))
        })
    });
}

criterion_group!(benches, bench_parse_and_solve, bench_substitution);
criterion_main!(benches);
