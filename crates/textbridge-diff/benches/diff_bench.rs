// Criterion benchmarks for textbridge-diff.
//
// Run:
//   cargo bench -p textbridge-diff

use criterion::{Criterion, criterion_group, criterion_main};

const BEFORE: &str = "The bridge exposes two independent text processing \
capabilities to an embedding host. Diff results are flattened into an \
ordered sequence of operations, and dictionary handles survive across \
multiple host calls without leaking or dangling. Every operation runs to \
completion on the calling thread before returning.";

const AFTER: &str = "The bridge exposes two separate text processing \
facilities to an embedding host. Diff output is marshaled into an ordered \
sequence of edit operations, and dictionary handles must survive across \
many host calls without leaking. Each operation runs to completion on the \
calling thread and nothing suspends mid-operation.";

fn bench_diff(c: &mut Criterion) {
    c.bench_function("diff_paragraph", |b| {
        b.iter(|| textbridge_diff::diff(std::hint::black_box(BEFORE), std::hint::black_box(AFTER)))
    });

    c.bench_function("diff_identity", |b| {
        b.iter(|| textbridge_diff::diff(std::hint::black_box(BEFORE), std::hint::black_box(BEFORE)))
    });

    c.bench_function("diff_flatten", |b| {
        let edits = textbridge_diff::diff(BEFORE, AFTER);
        b.iter(|| textbridge_diff::flatten(std::hint::black_box(&edits)))
    });
}

criterion_group!(benches, bench_diff);
criterion_main!(benches);
