//! Top-level module for the trigram Markov model.
//!
//! - Per-prefix successor counts (`Successors`)
//! - The prefix-keyed frequency table (`FrequencyTable`)
//! - The generating model (`Model`)
//! - Random sources suitable for `Model::new`

/// High-level model: training through `add`, text through `generate`.
///
/// Owns the frequency table and the injected random source, and
/// implements the dead-end recovery policy.
pub mod markov_model;

/// Mapping from a two-word prefix to the words observed after it.
///
/// Provides deterministic, index-based prefix selection.
pub mod frequency_table;

/// Successor counts of a single prefix, with weighted sampling.
pub mod successors;

/// Seeded random sources.
pub mod random;
