// SPDX-License-Identifier: PMPL-1.0-or-later
//! Benchmarks for catalog queries

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wcag_catalog::checklist::{Checklist, ChecklistFilter, Column};
use wcag_catalog::registry::Registry;
use wcag_catalog::search::search;
use wcag_catalog::{criteria_by_level, criteria_by_principle, criterion_by_id, registry, WcagLevel};

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("registry_build", |b| b.iter(Registry::load));
}

fn bench_lookup(c: &mut Criterion) {
    registry();

    c.bench_function("criterion_by_id", |b| {
        b.iter(|| criterion_by_id(black_box("2-4-11")))
    });
}

fn bench_level_filter(c: &mut Criterion) {
    registry();

    c.bench_function("criteria_by_level_aa", |b| {
        b.iter(|| criteria_by_level(black_box(WcagLevel::AA)))
    });
    c.bench_function("criteria_by_principle", |b| {
        b.iter(|| criteria_by_principle(black_box("understandable")))
    });
}

fn bench_search(c: &mut Criterion) {
    let reg = registry();

    c.bench_function("search_focus", |b| b.iter(|| search(reg, black_box("focus"))));
    c.bench_function("search_number", |b| b.iter(|| search(reg, black_box("1.4.3"))));
}

fn bench_checklist(c: &mut Criterion) {
    let reg = registry();
    let filter = ChecklistFilter::default();
    let columns = Column::ALL.to_vec();

    c.bench_function("checklist_all_columns", |b| {
        b.iter(|| Checklist::build(reg, black_box(&filter), black_box(&columns)))
    });
}

criterion_group!(
    benches,
    bench_registry_build,
    bench_lookup,
    bench_level_filter,
    bench_search,
    bench_checklist
);
criterion_main!(benches);
