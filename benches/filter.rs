// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use cricdex::{
    catalog::Catalog,
    filter::{self, FilterState},
    sync::{self, QueryParams},
};

fn load_catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog parses")
}

fn bench_filter(c: &mut Criterion) {
    let catalog = load_catalog();
    let records = catalog.records();

    let empty = FilterState::default();
    let text = FilterState::default().with_query("an");
    let faceted = FilterState::default()
        .with_query("a")
        .with_country("India")
        .with_role("Batsman");

    c.bench_function("filter_all_empty", |b| {
        b.iter(|| black_box(filter::filter(black_box(records), &empty).len()))
    });

    c.bench_function("filter_text", |b| {
        b.iter(|| black_box(filter::filter(black_box(records), &text).len()))
    });

    c.bench_function("filter_faceted", |b| {
        b.iter(|| black_box(filter::filter_indices(black_box(records), &faceted).len()))
    });

    c.bench_function("decode_location", |b| {
        b.iter(|| {
            let params = QueryParams::parse(black_box("q=virat+kohli&country=India&role=Batsmen"));
            black_box(sync::decode(&params))
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
