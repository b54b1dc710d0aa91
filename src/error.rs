// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the filter core: configuration and word ingestion.
///
/// Membership operations themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter needs at least one bit and one hash.
    #[error("invalid filter configuration: bits={bits}, hashes={hashes}")]
    InvalidConfig {
        /// Requested bit count.
        bits: usize,
        /// Requested hash count.
        hashes: usize,
    },

    /// The word source could not be opened or read.
    #[error("word source {path} unavailable: {source}")]
    SourceUnavailable {
        /// Path of the source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Words can't be partitioned across zero collections.
    #[error("a collection set needs at least one collection")]
    EmptyCollectionSet,
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
