// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

use criterion::{criterion_group, criterion_main, Criterion};
use manybody_rs::{combinations::Combinations, system::System};

fn benchmark(c: &mut Criterion) {
    c.bench_function("Combinations (n = 20, order = 4)", |b| {
        b.iter(|| std::hint::black_box(Combinations::new(20, 4).count()))
    });

    c.bench_function("Combinations (n = 16, full)", |b| {
        b.iter(|| std::hint::black_box(Combinations::new(16, 0).count()))
    });

    c.bench_function("System::from_file", |b| {
        b.iter(|| std::hint::black_box(System::from_file("test_files/CONTCAR").unwrap()))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
