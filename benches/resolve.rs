// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use folio_lens::i18n::LocalizationStore;
use std::hint::black_box; // Use std::hint::black_box

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let store = LocalizationStore::load().expect("embedded documents should load");

    group.bench_function("nested_hit", |b| {
        b.iter(|| {
            // Use black_box to prevent the compiler from optimizing away the call
            let _ = black_box(store.resolve(black_box("navbar.gallery")));
        });
    });

    group.bench_function("miss_echo", |b| {
        b.iter(|| {
            let _ = black_box(store.resolve(black_box("navbar.nonexistent")));
        });
    });

    group.finish();
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
