//! Spread the words of a text file over five collections, then look a few up.
//!
//! Usage: `cargo run --example wordcheck -- <path>`
use std::env;

use wordbloom::{words, CollectionSet, FilterConfig};

const COLLECTIONS: usize = 5;

const WORDS_TO_CHECK: [&str; 10] = [
    "Bloom",
    "filter",
    "larger",
    "element",
    "irakli",
    "definitely",
    "not",
    "bla",
    "ahaaa",
    "Bloon",
];

fn main() -> wordbloom::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("data/in/sample_data.txt"));
    let words = words::load_words(&path);

    let rng = fastrand::Rng::new();
    let mut set = CollectionSet::new(COLLECTIONS, FilterConfig::default())?;
    set.extend_random(&words, &rng);

    for word in WORDS_TO_CHECK {
        println!("{}", set.check(word));
    }
    Ok(())
}
