use criterion::{criterion_group, criterion_main, Criterion};
use snowdrift::{IdGenerator, Method, Options};
use std::hint::black_box;
use std::sync::Arc;

pub fn sequence_bits_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequence Bits Comparison");

    // Wider sequence fields mean fewer drift terms under sustained load
    for &seq_bits in &[4u8, 6, 8, 10, 12] {
        let options = Options::builder(1).seq_bits(seq_bits).build().unwrap();
        let max_sequence = 1u32 << seq_bits;

        group.bench_function(format!("bits_{}_seq_{}", seq_bits, max_sequence), |b| {
            let generator = IdGenerator::new(options).unwrap();
            b.iter(|| {
                black_box(generator.next_id());
            });
        });
    }

    group.finish();
}

pub fn method_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Method Comparison");

    for method in [Method::Drift, Method::Simple] {
        let options = Options::builder(1)
            .seq_bits(12)
            .method(method)
            .build()
            .unwrap();
        group.bench_function(format!("{:?}", method), |b| {
            let generator = IdGenerator::new(options).unwrap();
            b.iter(|| {
                black_box(generator.next_id());
            });
        });
    }

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let generator = IdGenerator::new(Options::new(1).unwrap()).unwrap();
    let id = generator.next_id();

    group.bench_function("extract_components", |b| {
        b.iter(|| {
            black_box(generator.extract.decompose(black_box(id)));
        });
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let generator = Arc::new(IdGenerator::new(Options::new(1).unwrap()).unwrap());
            b.iter(|| {
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let generator = Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        for _ in 0..100 {
                            black_box(generator.next_id());
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

pub fn default_generator_benchmarks(c: &mut Criterion) {
    c.bench_function("global_next_id", |b| {
        b.iter(|| {
            black_box(snowdrift::next_id());
        });
    });
}

criterion_group!(
    benches,
    sequence_bits_comparison,
    method_comparison,
    concurrent_benchmarks,
    component_extraction_benchmarks,
    default_generator_benchmarks
);
criterion_main!(benches);
