// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Fixed-length, set-only bit array.
use std::fmt::Debug;

/// A packed array of bits that can be set but never cleared.
///
/// All bits start at zero. The only mutation is [`BitArray::set`], so the
/// number of set bits never decreases over the array's lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct BitArray {
    words: Vec<u64>,
    nbits: usize,
}

impl BitArray {
    /// Create an array of `nbits` zero bits.
    pub fn new(nbits: usize) -> Self {
        Self {
            words: vec![0; (nbits + 63) / 64],
            nbits,
        }
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Whether the array holds zero bits.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`. Returns `true` if the bit was previously unset.
    pub fn set(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_unset = self.words[word] & mask == 0;

        self.words[word] |= mask;
        was_unset
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);

        self.words[word] & mask != 0
    }

    /// Number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Iterate over the indices of set bits, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nbits).filter(move |&i| self.is_set(i))
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        if index >= self.nbits {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.nbits, index,
            )
        }
        (index / 64, 1 << (index % 64))
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitArray({}/{} set)", self.count_ones(), self.nbits)
    }
}
