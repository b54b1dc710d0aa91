//! Exact word collections fronted by Bloom filters.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! The [`BloomFilter`] here has a fixed size (`m` bits, 500 by default) and
//! `k` probes (7 by default). Each probe hashes the item followed by the
//! decimal text of its own seed, using SipHash, and takes the result modulo
//! `m`. Seeds are drawn from a [`SeedSource`] when the filter is built, which
//! is system entropy unless the caller supplies a seeded generator.
//!
//! # Collections
//!
//! A [`Collection`] pairs a filter with an exact set. Lookups ask the filter
//! first and only touch the set when the filter can't rule the item out, so
//! answers are always exact.
//!
//! # Example
//!
//! ```
//! use wordbloom::Collection;
//!
//! let mut words = Collection::new();
//!
//! words.add("alpha");
//! words.add("beta");
//!
//! assert!(words.contains("alpha"));
//! assert!(words.contains("beta"));
//! assert!(!words.contains("gamma"));
//! ```
//!
//! A [`CollectionSet`] spreads words over several collections and reports
//! where a word turns up:
//!
//! ```
//! use wordbloom::{CollectionSet, FilterConfig};
//!
//! let rng = fastrand::Rng::new();
//! let mut set = CollectionSet::new(5, FilterConfig::default()).unwrap();
//!
//! set.extend_random("a Bloom filter is a set".split_whitespace(), &rng);
//!
//! assert!(set.check("Bloom").is_found());
//! assert!(!set.check("bloom").is_found());
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitarray;
pub mod collection;
pub mod error;
pub mod filter;
pub mod hash;
pub mod partition;
pub mod words;

pub use collection::Collection;
pub use error::{Error, Result};
pub use filter::{BloomFilter, FilterConfig, DEFAULT_BITS, DEFAULT_HASHES};
pub use hash::SeedSource;
pub use partition::{CollectionSet, Outcome, WordReport};
