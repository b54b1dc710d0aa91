// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Spreading words over several independent collections, and reporting where
//! a word turns up.
use std::fmt;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::filter::FilterConfig;

/// What the exact set said about a word its filter let through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The word is a member.
    Present,
    /// The filter matched, but the word is not a member.
    FalsePositive,
}

/// A collection whose filter reported a possible match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Zero-based collection index.
    pub index: usize,
    /// Result of the exact check.
    pub outcome: Outcome,
}

/// Where a word was found across a [`CollectionSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordReport {
    word: String,
    hits: Vec<Hit>,
}

impl WordReport {
    /// The word checked.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Collections whose filter matched, in index order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Indices of the collections that actually hold the word.
    pub fn found_in(&self) -> impl Iterator<Item = usize> + '_ {
        self.hits
            .iter()
            .filter(|h| h.outcome == Outcome::Present)
            .map(|h| h.index)
    }

    /// Whether any collection holds the word.
    pub fn is_found(&self) -> bool {
        self.found_in().next().is_some()
    }

    /// Number of filter matches the exact sets rejected.
    pub fn false_positives(&self) -> usize {
        self.hits
            .iter()
            .filter(|h| h.outcome == Outcome::FalsePositive)
            .count()
    }
}

impl fmt::Display for WordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits.is_empty() {
            return writeln!(f, "'{}' is not in any collection", self.word);
        }
        for hit in &self.hits {
            let n = hit.index + 1;

            writeln!(f, "'{}' is possibly in collection {}", self.word, n)?;
            match hit.outcome {
                Outcome::Present => {
                    writeln!(f, "'{}' is actually in collection {}", self.word, n)?
                }
                Outcome::FalsePositive => {
                    writeln!(f, "'{}' is a false positive in collection {}", self.word, n)?
                }
            }
        }
        Ok(())
    }
}

/// A fixed number of independent collections sharing one filter configuration.
///
/// Each collection draws its own seeds.
#[derive(Clone, Debug)]
pub struct CollectionSet {
    collections: Vec<Collection>,
}

impl CollectionSet {
    /// Return `n` empty collections. `n` must be at least one.
    pub fn new(n: usize, config: FilterConfig) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyCollectionSet);
        }
        tracing::debug!(
            "Creating {} collection(s) with bits={}, hashes={}",
            n,
            config.bits(),
            config.hashes()
        );

        Ok(Self {
            collections: (0..n).map(|_| Collection::with_config(config)).collect(),
        })
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Always `false`; a set holds at least one collection.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// The collections, in index order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The collection at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Collection> {
        self.collections.get(index)
    }

    /// Add `word` to the collection at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn insert_into(&mut self, index: usize, word: &str) {
        tracing::trace!("Adding {:?} to collection {}", word, index);

        self.collections[index].add(word);
    }

    /// Add `word` to one uniformly chosen collection, returning its index.
    pub fn insert_random(&mut self, word: &str, rng: &fastrand::Rng) -> usize {
        let index = rng.usize(..self.collections.len());
        self.insert_into(index, word);

        index
    }

    /// Spread `words` over the collections at random.
    pub fn extend_random<I, S>(&mut self, words: I, rng: &fastrand::Rng)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for word in words {
            self.insert_random(word.as_ref(), rng);
            count += 1;
        }
        tracing::debug!("Distributed {} word(s) over {} collection(s)", count, self.len());
    }

    /// Check `word` against every collection.
    pub fn check(&self, word: &str) -> WordReport {
        let hits = self
            .collections
            .iter()
            .enumerate()
            .filter(|(_, c)| c.filter().maybe_contains(word))
            .map(|(index, c)| Hit {
                index,
                outcome: if c.is_member(word) {
                    Outcome::Present
                } else {
                    Outcome::FalsePositive
                },
            })
            .collect();

        WordReport {
            word: word.to_owned(),
            hits,
        }
    }
}
