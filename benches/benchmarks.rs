use std::iter;

use criterion::Criterion;
use wordbloom::{BloomFilter, Collection, FilterConfig};

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn keys(n: usize) -> Vec<String> {
    iter::repeat_with(key).take(n).collect()
}

fn bench_filter_add(c: &mut Criterion) {
    c.bench_function("add-500", |b| {
        let mut bf = BloomFilter::new();
        let items = keys(1000);
        let mut i = 0;

        b.iter(|| {
            bf.add(&items[i % items.len()]);
            i += 1;
        });
    });

    c.bench_function("add-10000", |b| {
        let mut bf = BloomFilter::with_config(FilterConfig::new(10_000, 7).unwrap());
        let items = keys(1000);
        let mut i = 0;

        b.iter(|| {
            bf.add(&items[i % items.len()]);
            i += 1;
        });
    });
}

fn bench_filter_check(c: &mut Criterion) {
    c.bench_function("maybe-contains-500", |b| {
        let mut bf = BloomFilter::new();
        for item in keys(50) {
            bf.add(&item);
        }
        let probes = keys(1000);
        let mut i = 0;

        b.iter(|| {
            bf.maybe_contains(&probes[i % probes.len()]);
            i += 1;
        });
    });
}

fn bench_collection_contains(c: &mut Criterion) {
    let mut collection = Collection::new();
    collection.extend(keys(50));

    let members: Vec<String> = collection.iter().map(str::to_owned).collect();
    let strangers = keys(1000);

    c.bench_function("contains-member", |b| {
        let mut i = 0;
        b.iter(|| {
            collection.contains(&members[i % members.len()]);
            i += 1;
        });
    });

    c.bench_function("contains-stranger", |b| {
        let mut i = 0;
        b.iter(|| {
            collection.contains(&strangers[i % strangers.len()]);
            i += 1;
        });
    });
}

criterion::criterion_group!(
    benches,
    bench_filter_add,
    bench_filter_check,
    bench_collection_contains
);
criterion::criterion_main!(benches);
