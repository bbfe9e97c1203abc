//! Cleaning and aggregation benchmarks.
//!
//! Run with: `cargo bench --package tickbar-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tickbar_bench::{BenchmarkConfig, synthetic_records};
use tickbar_lib::{Interval, Pipeline, Sanitizer, TimeRange};

fn benchmark_configs() -> Vec<(&'static str, BenchmarkConfig)> {
    vec![
        ("1-day", BenchmarkConfig::default()),
        (
            "5-days",
            BenchmarkConfig {
                days: 5,
                ..BenchmarkConfig::default()
            },
        ),
    ]
}

fn clean_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    group.sample_size(20);

    for (name, config) in benchmark_configs() {
        let records = synthetic_records(&config);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::new("sanitize", name), &records, |b, records| {
            let sanitizer = Sanitizer::default();
            b.iter(|| sanitizer.clean(black_box(records)));
        });
    }

    group.finish();
}

fn aggregate_benchmark(c: &mut Criterion) {
    let config = BenchmarkConfig {
        days: 5,
        ..BenchmarkConfig::default()
    };
    let pipeline = Pipeline::new(&synthetic_records(&config), &Sanitizer::default());
    let range = TimeRange::new(config.first_open(), config.end());

    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(pipeline.ticks().len() as u64));

    for spec in ["1s", "1m", "3m", "1h", "1d"] {
        let interval = Interval::parse(spec);
        group.bench_with_input(BenchmarkId::new("bars", spec), &interval, |b, interval| {
            b.iter(|| pipeline.bars(black_box(interval), range));
        });
    }

    group.finish();
}

criterion_group!(benches, clean_benchmark, aggregate_benchmark);
criterion_main!(benches);
