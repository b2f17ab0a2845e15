use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use portnav_core::{Catalog, RelatedQuery};

fn bench_resolvers(c: &mut Criterion) {
    let catalog = Catalog::bundled();

    c.bench_function("find_origins/country", |b| {
        b.iter(|| catalog.find_origins(black_box("일본")))
    });

    c.bench_function("find_origins/free_text", |b| {
        b.iter(|| catalog.find_origins(black_box("인천")))
    });

    c.bench_function("find_destinations/generic", |b| {
        b.iter(|| catalog.find_destinations(black_box("터미널"), Some("일본")))
    });

    c.bench_function("find_destinations/free_text", |b| {
        b.iter(|| catalog.find_destinations(black_box("에버글레이즈"), None))
    });

    c.bench_function("related_places/country", |b| {
        b.iter(|| {
            catalog.related_places(&RelatedQuery {
                country_hint: Some(black_box("미국")),
                ..Default::default()
            })
        })
    });

    c.bench_function("resolve_category", |b| {
        b.iter(|| catalog.resolve_category(black_box("근처 맛집")))
    });
}

criterion_group!(benches, bench_resolvers);
criterion_main!(benches);
