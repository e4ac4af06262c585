//! Corpus tokenization.
//!
//! Raw text is split on whitespace, each word is normalized to lowercase
//! ASCII letters, and the surviving words are cut into overlapping
//! three-word windows.

mod normalize;
mod parser;

pub use normalize::{normalise, normalise_words};
pub use parser::{parse, parse_file_to_normalised_trigrams, trigrams_from_words};

/// Three consecutive normalized words of a corpus.
///
/// `word1` and `word2` form the lookup prefix, `word3` is the successor
/// observed after that prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Trigram {
	pub word1: String,
	pub word2: String,
	pub word3: String,
}

impl Trigram {
	pub fn new(word1: impl Into<String>, word2: impl Into<String>, word3: impl Into<String>) -> Self {
		Self {
			word1: word1.into(),
			word2: word2.into(),
			word3: word3.into(),
		}
	}

	/// Returns the two-word prefix, `"word1 word2"`.
	pub fn prefix(&self) -> String {
		format!("{} {}", self.word1, self.word2)
	}
}
