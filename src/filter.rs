// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A fixed-size Bloom filter probed with independently seeded hashes.

use crate::bitarray::BitArray;
use crate::error::{Error, Result};
use crate::hash::{Seed, SeedSource};

/// Default number of bits (`m`).
pub const DEFAULT_BITS: usize = 500;

/// Default number of hashes (`k`).
pub const DEFAULT_HASHES: usize = 7;

/// Size parameters of a [`BloomFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    bits: usize,
    hashes: usize,
}

impl FilterConfig {
    /// Return a configuration with `bits` bits and `hashes` probes per item.
    /// Both must be non-zero.
    pub fn new(bits: usize, hashes: usize) -> Result<Self> {
        if bits == 0 || hashes == 0 {
            return Err(Error::InvalidConfig { bits, hashes });
        }
        Ok(Self { bits, hashes })
    }

    /// Number of bits (`m`).
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of hashes (`k`).
    pub fn hashes(&self) -> usize {
        self.hashes
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            hashes: DEFAULT_HASHES,
        }
    }
}

/// A Bloom filter over strings.
///
/// Each of the `k` probes hashes the item salted with its own seed. Seeds are
/// drawn once at construction and never change; bits are only ever set.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    bits: BitArray,
    seeds: Vec<Seed>,
}

impl BloomFilter {
    /// Return a new filter with the default configuration and entropy-drawn seeds.
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    /// Return a new filter with the given configuration and entropy-drawn seeds.
    pub fn with_config(config: FilterConfig) -> Self {
        Self::with_seed_source(config, fastrand::Rng::new())
    }

    /// Return a new filter drawing one seed per hash from `source`.
    pub fn with_seed_source<S: SeedSource>(config: FilterConfig, mut source: S) -> Self {
        let seeds = (0..config.hashes)
            .map(|_| Seed::new(source.next_seed()))
            .collect();

        BloomFilter {
            bits: BitArray::new(config.bits),
            seeds,
        }
    }

    /// Set the item's probe bits. Idempotent per item.
    pub fn add(&mut self, item: &str) {
        let nbits = self.bits.len();

        for seed in &self.seeds {
            self.bits.set(position(seed, item, nbits));
        }
    }

    /// Return whether the item may have been added. A `false` answer is
    /// definitive; a `true` answer may be a false positive.
    pub fn maybe_contains(&self, item: &str) -> bool {
        self.positions(item).all(|i| self.bits.is_set(i))
    }

    /// The bit positions probed for `item`, one per seed.
    pub fn positions<'a>(&'a self, item: &'a str) -> impl Iterator<Item = usize> + 'a {
        let nbits = self.bits.len();
        self.seeds.iter().map(move |seed| position(seed, item, nbits))
    }

    /// The configuration this filter was built with.
    pub fn config(&self) -> FilterConfig {
        FilterConfig {
            bits: self.bits(),
            hashes: self.hashes(),
        }
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.seeds.len()
    }

    /// The raw seed values, in probe order.
    pub fn seeds(&self) -> impl Iterator<Item = u64> + '_ {
        self.seeds.iter().map(Seed::value)
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices of the bits currently set.
    pub fn set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// Fraction of bits set.
    pub fn load_factor(&self) -> f64 {
        self.count_ones() as f64 / self.bits() as f64
    }

    /// Probability that a never-added item passes all probes, given the
    /// current load factor.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.load_factor().powi(self.hashes() as i32)
    }

    /// Count the approximate number of distinct items in the filter.
    ///
    /// Returns `None` once every bit is set, since a saturated filter gives
    /// no upper bound.
    pub fn estimated_count(&self) -> Option<usize> {
        let nbits_set = self.count_ones();
        if nbits_set == self.bits() {
            return None;
        }
        let nbits = self.bits() as f64;
        let nhashes = self.hashes() as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set as f64 / nbits)).ln();

        Some(count.round() as usize)
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn position(seed: &Seed, item: &str, nbits: usize) -> usize {
    (seed.hash(item) % nbits as u64) as usize
}
