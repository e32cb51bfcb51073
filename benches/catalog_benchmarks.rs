use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use studygate::catalog::{Catalog, Category, CategoryFilter, CourseFilter};

fn bench_catalog_search(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("catalog_search");

    let all = CourseFilter::default();
    group.bench_function("no_filter", |b| b.iter(|| catalog.search(black_box(&all))));

    let query = CourseFilter::new("script", CategoryFilter::All);
    group.bench_function("query_only", |b| b.iter(|| catalog.search(black_box(&query))));

    let both = CourseFilter::new("a", CategoryFilter::Only(Category::Development));
    group.bench_function("query_and_category", |b| {
        b.iter(|| catalog.search(black_box(&both)))
    });

    group.finish();
}

fn bench_catalog_serialization(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    c.bench_function("catalog_to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(catalog.courses())))
    });

    c.bench_function("catalog_to_yaml", |b| {
        b.iter(|| serde_yaml::to_string(black_box(catalog.courses())))
    });
}

criterion_group!(benches, bench_catalog_search, bench_catalog_serialization);
criterion_main!(benches);
