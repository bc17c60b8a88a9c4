//! Generation pipeline benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use uxbind_bench::fixtures::{nested_document, to_uxml};
use uxbind_codegen::{Generator, GeneratorConfig, extract_bindings};
use uxbind_markup::{flatten, parse_markup};

fn benchmark_flatten(c: &mut Criterion) {
    let doc = nested_document(4, 6);

    c.bench_function("flatten_1554_nodes", |b| {
        b.iter(|| flatten(black_box(&doc.children)))
    });
}

fn benchmark_extract(c: &mut Criterion) {
    let doc = nested_document(4, 6);
    let nodes = flatten(&doc.children);
    let config = GeneratorConfig::default();

    c.bench_function("extract_1296_bindings", |b| {
        b.iter(|| extract_bindings(black_box(&nodes), &config))
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let xml = to_uxml(&nested_document(4, 6));

    c.bench_function("parse_markup", |b| {
        b.iter(|| parse_markup(black_box(&xml)))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let generator = Generator::default();
    let mut group = c.benchmark_group("generate");

    for (depth, breadth) in [(2, 4), (3, 6), (4, 6)] {
        let doc = nested_document(depth, breadth);
        let size = doc.subtree_len();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| generator.generate("Bench", black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_flatten,
    benchmark_extract,
    benchmark_parse,
    benchmark_generate,
);
criterion_main!(benches);
