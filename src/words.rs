// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Reading word lists from text sources.
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Split text into whitespace-delimited words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Read every whitespace-delimited word from the file at `path`.
///
/// Bytes that aren't valid UTF-8 are replaced rather than rejected; only
/// failing to open or read the file is an error.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let words: Vec<String> = split_words(&text).map(str::to_owned).collect();

    tracing::debug!("Read {} word(s) from {}", words.len(), path.display());

    Ok(words)
}

/// Like [`read_words`], but an unavailable source yields no words.
pub fn load_words<P: AsRef<Path>>(path: P) -> Vec<String> {
    match read_words(path) {
        Ok(words) => words,
        Err(err) => {
            tracing::warn!("{}", err);
            Vec::new()
        }
    }
}
