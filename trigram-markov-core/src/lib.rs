//! Word-level trigram Markov text generation library.
//!
//! This crate provides:
//! - Corpus tokenization and normalization into trigrams
//! - A second-order Markov model keyed by two-word prefixes
//! - Weighted, reproducible text generation with dead-end recovery
//! - Small I/O helpers for reading a corpus and persisting output
//!
//! The random source is injected into the model, so a fixed source
//! always replays the same text.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Markov model, frequency table and random sources.
pub mod model;

/// Tokenizer turning raw text into normalized trigrams.
pub mod trigram;

/// I/O utilities (corpus loading, output persistence).
pub mod io;

pub use error::{MarkovError, Result};
pub use model::markov_model::Model;
pub use trigram::Trigram;
