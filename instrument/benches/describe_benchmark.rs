// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate instrument;
use instrument::InstrumentParameters;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_describe);
criterion_main!(benches);

pub fn criterion_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("Instrument parameters diagnostic line");
    let params = InstrumentParameters::new(1.0, 0.05, 0.2, 100.0, 100.0);

    group.bench_function("describe into a string", |b| {
        b.iter(|| black_box(params).describe())
    });
    group.bench_function("write into a reused buffer", |b| {
        let mut sink = Vec::with_capacity(128);
        b.iter(|| {
            sink.clear();
            black_box(params).write_to(&mut sink).unwrap();
        })
    });
    group.bench_function("parse the line back", |b| {
        let line = params.describe();
        b.iter(|| black_box(line.as_str()).parse::<InstrumentParameters>().unwrap())
    });

    group.finish()
}
