// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! An exact string set fronted by a Bloom filter.
use std::collections::HashSet;

use crate::filter::{BloomFilter, FilterConfig};
use crate::hash::SeedSource;

/// A set of strings whose lookups are first screened by a [`BloomFilter`].
///
/// Answers are exact: the filter only spares the set lookup for items it
/// can rule out.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    filter: BloomFilter,
    members: HashSet<String>,
}

impl Collection {
    /// Return an empty collection with a default-sized filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return an empty collection whose filter uses `config`.
    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            filter: BloomFilter::with_config(config),
            members: HashSet::new(),
        }
    }

    /// Return an empty collection whose filter draws its seeds from `source`.
    pub fn with_seed_source<S: SeedSource>(config: FilterConfig, source: S) -> Self {
        Self {
            filter: BloomFilter::with_seed_source(config, source),
            members: HashSet::new(),
        }
    }

    /// Add an item. Adding an item twice has no further effect.
    pub fn add(&mut self, item: &str) {
        if !self.members.contains(item) {
            self.members.insert(item.to_owned());
        }
        self.filter.add(item);
    }

    /// Return whether the item was added to this collection.
    pub fn contains(&self, item: &str) -> bool {
        self.filter.maybe_contains(item) && self.is_member(item)
    }

    /// Exact lookup, skipping the filter. For callers that already probed it.
    pub(crate) fn is_member(&self, item: &str) -> bool {
        self.members.contains(item)
    }

    /// Number of distinct items added.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The filter screening this collection.
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Iterate over the members, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for Collection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.add(item.as_ref());
        }
    }
}
