//! Corpus reports that do not use the boolean index.

pub mod zipf;

pub use zipf::{WordFrequency, ZipfReport};
