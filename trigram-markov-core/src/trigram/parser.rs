use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use super::normalize::normalise_words;
use super::Trigram;
use crate::error::{MarkovError, Result};
use crate::io::read_to_string;

/// Minimal number of words needed to build a single trigram.
const MIN_WORDS: usize = 3;

/// Parses every trigram from a corpus file.
///
/// # Errors
/// - `MarkovError::Io` if the file cannot be read.
/// - `MarkovError::InsufficientInput` if fewer than 3 words survive normalization.
pub fn parse_file_to_normalised_trigrams<P: AsRef<Path>>(path: P) -> Result<Vec<Trigram>> {
	let contents = read_to_string(&path)?;
	let words = parse(contents.as_bytes())?;
	let trigrams = trigrams_from_words(&words)?;
	debug!("Parsed {} words into {} trigrams from {}", words.len(), trigrams.len(), path.as_ref().display());
	Ok(trigrams)
}

/// Collects the whitespace-separated words of a reader.
///
/// Words are returned raw (case and punctuation kept).
///
/// # Errors
/// Returns `MarkovError::InsufficientInput` if the input has less than 3 words.
pub fn parse<R: Read>(reader: R) -> Result<Vec<String>> {
	let mut words = Vec::new();
	for line in BufReader::new(reader).lines() {
		words.extend(line?.split_whitespace().map(str::to_owned));
	}

	if words.len() < MIN_WORDS {
		return Err(MarkovError::InsufficientInput { found: words.len() });
	}
	Ok(words)
}

/// Normalises `words` and slides a three-word window over the result.
///
/// # Errors
/// Returns `MarkovError::InsufficientInput` if fewer than 3 words remain
/// after normalization.
pub fn trigrams_from_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<Trigram>> {
	let words = normalise_words(words);
	if words.len() < MIN_WORDS {
		return Err(MarkovError::InsufficientInput { found: words.len() });
	}

	Ok(words
		.windows(MIN_WORDS)
		.map(|w| Trigram::new(w[0].as_str(), w[1].as_str(), w[2].as_str()))
		.collect())
}
