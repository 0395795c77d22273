#[macro_use]
extern crate criterion;

use criterion::Criterion;
use oncurve::curve::{probability_for_commander_curve, probability_on_curve};

fn criterion_function(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "probability_on_curve 99 cards, 40 lands, 4 copies",
        |b, turn| {
            b.iter(|| probability_on_curve(99, **turn, 40, 4));
        },
        &[1, 4, 8, 12],
    );
    c.bench_function_over_inputs(
        "probability_for_commander_curve 99 cards, 38 lands",
        |b, turn| {
            b.iter(|| probability_for_commander_curve(99, **turn, 38));
        },
        &[1, 4, 8, 12],
    );
    c.bench_function("probability_on_curve 400 cards, 160 lands, turn 20", |b| {
        b.iter(|| probability_on_curve(400, 20, 160, 12))
    });
}

criterion_group!(benches, criterion_function);
criterion_main!(benches);
