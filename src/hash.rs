// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Seeded string hashing used to derive probe positions.
use std::hash::Hasher;

use siphasher::sip::SipHasher13;

/// Key used for SipHash. Probes are decorrelated by their seeds, not the key.
const HASHER_KEY: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// A source of hash seeds, drawn once per probe when a filter is built.
pub trait SeedSource {
    /// Draw the next seed.
    fn next_seed(&mut self) -> u64;
}

impl SeedSource for fastrand::Rng {
    fn next_seed(&mut self) -> u64 {
        self.u64(..)
    }
}

impl<S: SeedSource + ?Sized> SeedSource for &mut S {
    fn next_seed(&mut self) -> u64 {
        (**self).next_seed()
    }
}

/// A hash seed along with its decimal text, which salts every hashed item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    value: u64,
    salt: String,
}

impl Seed {
    /// Wrap a raw seed value.
    pub fn new(value: u64) -> Self {
        Self {
            value,
            salt: value.to_string(),
        }
    }

    /// The raw seed value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Hash `item` followed by this seed's decimal text.
    ///
    /// Equivalent to hashing the concatenated string, without allocating it.
    pub fn hash(&self, item: &str) -> u64 {
        let mut sip = SipHasher13::new_with_key(&HASHER_KEY);

        sip.write(item.as_bytes());
        sip.write(self.salt.as_bytes());
        sip.finish()
    }
}
