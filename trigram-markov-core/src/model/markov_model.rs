use std::fmt;

use log::{debug, trace};

use super::frequency_table::FrequencyTable;
use crate::error::{MarkovError, Result};
use crate::trigram::Trigram;

/// Second-order Markov model over words.
///
/// # Responsibilities
/// - Own the frequency table and be its only writer (`add`)
/// - Generate text of an exact word count (`generate`)
/// - Recover from dead ends, i.e. prefixes with no recorded successor
///
/// The pseudo-random source is injected: a function returning an integer
/// in `[0, n)` for an upper bound `n`. With a deterministic source the
/// generated text is fully reproducible, because every index-based choice
/// is made over lexically sorted candidates.
pub struct Model {
	table: FrequencyTable,
	prng: Box<dyn FnMut(usize) -> usize>,
}

impl Model {
	/// Creates an empty model drawing its random indices from `prng`.
	pub fn new<P>(prng: P) -> Self
	where
		P: FnMut(usize) -> usize + 'static,
	{
		Self {
			table: FrequencyTable::new(),
			prng: Box::new(prng),
		}
	}

	/// Stores a trigram by updating the frequency table.
	pub fn add(&mut self, trigram: &Trigram) {
		self.table.add(trigram);
	}

	/// Stores every trigram of `trigrams`.
	pub fn add_all<'a, I>(&mut self, trigrams: I)
	where
		I: IntoIterator<Item = &'a Trigram>,
	{
		for trigram in trigrams {
			self.table.add(trigram);
		}
		debug!("Model now holds {} distinct prefixes", self.table.len());
	}

	/// Read-only view of the frequency table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Number of distinct prefixes learned so far.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Generates `num_words` words of text.
	///
	/// # Behavior
	/// - Seeds the text with a random prefix.
	/// - Extends it with successors sampled by weight.
	/// - On a dead end, closes the sentence and continues (see `handle_dead_end`).
	/// - Capitalizes the first word and terminates the text with a period.
	///
	/// # Errors
	/// - `MarkovError::EmptyModel` if nothing was added yet.
	/// - `MarkovError::InvalidWordCount` if `num_words` is 0.
	pub fn generate(&mut self, num_words: usize) -> Result<String> {
		if self.table.is_empty() {
			return Err(MarkovError::EmptyModel);
		}
		if num_words == 0 {
			return Err(MarkovError::InvalidWordCount);
		}

		let mut words = self.random_prefix()?;

		if num_words == 1 {
			return Ok(format!("{}.", capitalize(&words[0])));
		}

		while words.len() < num_words {
			let prefix = words[words.len() - 2..].join(" ");
			let next = match self.table.get(&prefix) {
				Some(successors) => successors.choose(&mut *self.prng).map(str::to_owned),
				None => None,
			};

			match next {
				Some(word) => {
					trace!("{} -> {}", prefix, word);
					words.push(word);
				}
				None => {
					debug!("Dead end on prefix '{}' after {} words", prefix, words.len());
					self.handle_dead_end(&mut words, num_words)?;
				}
			}
		}

		words[0] = capitalize(&words[0]);

		Ok(format!("{}.", words.join(" ")))
	}

	/// Draws a prefix at random and splits it into its words.
	fn random_prefix(&mut self) -> Result<Vec<String>> {
		if self.table.is_empty() {
			return Err(MarkovError::EmptyModel);
		}
		let index = (self.prng)(self.table.len());
		let prefix = self.table.prefix_by_index(index).ok_or(MarkovError::EmptyModel)?;
		Ok(prefix.split(' ').map(str::to_owned).collect())
	}

	/// Keeps generation alive when the current prefix has no precedent in
	/// the corpus, which mostly happens with small corpora.
	///
	/// The last word gets a period, then depending on how many words are
	/// still missing:
	/// - more than 2: a fresh random prefix, first word capitalized
	/// - exactly 2: "You heard"
	/// - exactly 1: "amen"
	///
	/// # Panics
	/// If no word is missing; the generation loop never calls it then.
	fn handle_dead_end(&mut self, words: &mut Vec<String>, num_words: usize) -> Result<()> {
		let remaining = num_words.saturating_sub(words.len());
		assert!(remaining > 0, "dead end handled with no word left to generate");

		if let Some(last) = words.last_mut() {
			last.push('.');
		}

		match remaining {
			1 => words.push("amen".to_owned()),
			2 => words.extend(["You".to_owned(), "heard".to_owned()]),
			_ => {
				let mut prefix = self.random_prefix()?;
				if let Some(first) = prefix.first_mut() {
					*first = capitalize(first);
				}
				words.extend(prefix);
			}
		}
		Ok(())
	}
}

impl fmt::Debug for Model {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Model")
			.field("table", &self.table)
			.finish_non_exhaustive()
	}
}

/// Upper-cases the first character of `word` (ASCII only).
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => {
			let mut out = String::with_capacity(word.len());
			out.push(first.to_ascii_uppercase());
			out.push_str(chars.as_str());
			out
		}
		None => String::new(),
	}
}
