use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use outcome_rail::convert::{flatten_errors, try_catch};
use outcome_rail::diagnostic::NoCapture;
use outcome_rail::{ErrorKind, Outcome, WireOutcome};

fn bench_combinators(c: &mut Criterion) {
    c.bench_function("map_chain_success", |b| {
        b.iter(|| {
            black_box(Outcome::success(black_box(1)))
                .map(|n| n + 1)
                .map(|n| n * 2)
                .map(|n| n - 3)
                .into_data()
        })
    });

    c.bench_function("flat_map_chain_success", |b| {
        b.iter(|| {
            black_box(Outcome::success(black_box(1)))
                .flat_map(|n| Outcome::success(n + 1))
                .flat_map(|n| Outcome::success(n * 2))
                .into_data()
        })
    });

    c.bench_function("error_short_circuit", |b| {
        b.iter(|| {
            black_box(Outcome::<i32>::error_with_capture(
                "boom",
                ErrorKind::Unexpected,
                &NoCapture,
            ))
            .map(|n| n + 1)
            .flat_map(|n| Outcome::success(n * 2))
            .fold(|n| n, |e| e.status_code() as i32)
        })
    });
}

fn bench_serialization(c: &mut Criterion) {
    c.bench_function("serialize_round_trip", |b| {
        b.iter(|| {
            let wire = black_box(Outcome::success(vec![1, 2, 3])).serialize();
            Outcome::from_wire(wire).into_data()
        })
    });

    c.bench_function("wire_to_json", |b| {
        let wire = Outcome::success(vec![1u32, 2, 3]).with_request_id("r-1").into_wire();
        b.iter(|| serde_json::to_string(black_box(&wire)))
    });
}

fn bench_adapters(c: &mut Criterion) {
    c.bench_function("try_catch_ok", |b| {
        b.iter(|| try_catch(|| black_box("7").parse::<i32>()))
    });

    c.bench_function("flatten_errors_mixed", |b| {
        b.iter(|| {
            flatten_errors(vec![
                WireOutcome::success(black_box(1)),
                WireOutcome::error("a"),
                WireOutcome::success(2),
                WireOutcome::error("b"),
            ])
        })
    });
}

criterion_group!(benches, bench_combinators, bench_serialization, bench_adapters);
criterion_main!(benches);
