//! Membership guarantees of filters and collections.
use std::collections::HashSet;
use std::iter;
use std::thread;

use wordbloom::{BloomFilter, Collection, CollectionSet, FilterConfig};

fn key(rng: &fastrand::Rng) -> String {
    iter::repeat_with(|| rng.alphanumeric()).take(16).collect()
}

fn distinct(rng: &fastrand::Rng, n: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    iter::repeat_with(|| key(rng))
        .filter(|k| seen.insert(k.clone()))
        .take(n)
        .collect()
}

#[test]
fn no_false_negatives() {
    let rng = fastrand::Rng::new();
    let items = distinct(&rng, 400);
    let mut c = Collection::new();

    for (i, item) in items.iter().enumerate() {
        c.add(item);
        // Everything added so far is still reported.
        for earlier in &items[..=i] {
            assert!(c.contains(earlier), "false negative for {}", earlier);
        }
    }
}

#[test]
fn fresh_collection_is_empty() {
    let rng = fastrand::Rng::new();
    let c = Collection::new();

    for item in distinct(&rng, 1000) {
        assert!(!c.contains(&item));
        assert!(!c.filter().maybe_contains(&item));
    }
}

#[test]
fn bounded_false_positive_rate() {
    // Seeds are random, so repeat over several filters.
    for _ in 0..10 {
        let rng = fastrand::Rng::new();
        let items = distinct(&rng, 1050);
        let (inserted, strangers) = items.split_at(50);

        let mut bf = BloomFilter::new();
        for item in inserted {
            bf.add(item);
        }
        let false_positives = strangers.iter().filter(|s| bf.maybe_contains(s)).count();
        let rate = false_positives as f64 / strangers.len() as f64;

        assert!(rate < 0.2, "false positive rate {} too high", rate);
    }
}

#[test]
fn scenario_alpha_beta_gamma() {
    for _ in 0..20 {
        let mut c = Collection::new();
        c.extend(["alpha", "beta", "gamma"]);

        assert!(c.contains("alpha"));
        assert!(!c.contains("delta"));
    }
}

#[test]
fn independent_collections_never_cross_confirm() {
    let rng = fastrand::Rng::with_seed(8);
    let items = distinct(&rng, 600);
    let (left, right) = items.split_at(300);

    // Small filters, so plenty of cross matches reach the exact check.
    let config = FilterConfig::new(64, 2).unwrap();
    let mut a = Collection::with_seed_source(config, fastrand::Rng::with_seed(1));
    let mut b = Collection::with_seed_source(config, fastrand::Rng::with_seed(2));
    a.extend(left);
    b.extend(right);

    for item in right {
        assert!(!a.contains(item));
        assert!(b.contains(item));
    }
    for item in left {
        assert!(!b.contains(item));
        assert!(a.contains(item));
    }
    assert!(right.iter().any(|item| a.filter().maybe_contains(item)));
}

#[test]
fn collections_fill_in_parallel() {
    let rng = fastrand::Rng::new();
    let shards: Vec<Vec<String>> = (0..4).map(|_| distinct(&rng, 100)).collect();

    let collections: Vec<Collection> = thread::scope(|s| {
        let handles: Vec<_> = shards
            .iter()
            .map(|shard| {
                s.spawn(move || {
                    let mut c = Collection::new();
                    c.extend(shard);
                    c
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (c, shard) in collections.iter().zip(&shards) {
        assert_eq!(c.len(), shard.len());
        assert!(shard.iter().all(|item| c.contains(item)));
    }
}

#[test]
fn every_word_lands_in_exactly_one_collection() {
    let rng = fastrand::Rng::new();
    let words = distinct(&rng, 250);
    let mut set = CollectionSet::new(5, FilterConfig::default()).unwrap();

    set.extend_random(&words, &rng);

    for word in &words {
        let report = set.check(word);
        assert_eq!(report.found_in().count(), 1, "{}", report);
    }
}
