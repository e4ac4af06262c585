use std::collections::{BTreeMap, HashMap};

use super::successors::Successors;
use crate::trigram::Trigram;

/// Second-order frequency table: counts of a word given the two words
/// preceding it.
///
/// # Responsibilities
/// - Accumulate trigram observations
/// - Look up the successors of a two-word prefix
/// - Select a prefix deterministically from a numerical index
///
/// # Invariants
/// - Each key is a `"word1 word2"` prefix
/// - A prefix is present if and only if it has at least one successor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	prefixes: HashMap<String, Successors>,
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `trigram.word3` as a successor of its two-word prefix.
	///
	/// Accumulation is commutative: the order of calls does not change
	/// the final counts.
	pub fn add(&mut self, trigram: &Trigram) {
		self.prefixes
			.entry(trigram.prefix())
			.or_insert_with(Successors::new)
			.add(&trigram.word3);
	}

	/// Returns the successors recorded for `prefix`.
	pub fn get(&self, prefix: &str) -> Option<&Successors> {
		self.prefixes.get(prefix)
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.prefixes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.prefixes.is_empty()
	}

	/// Selects a prefix from a numerical index.
	///
	/// Prefixes are sorted lexically and `index` wraps around their count,
	/// so the same index always yields the same prefix for a given table.
	///
	/// Returns `None` if the table is empty.
	pub fn prefix_by_index(&self, index: usize) -> Option<&str> {
		if self.prefixes.is_empty() {
			return None;
		}

		let mut keys: Vec<&str> = self.prefixes.keys().map(String::as_str).collect();
		keys.sort_unstable();

		Some(keys[index % keys.len()])
	}

	/// Ordered copy of the table, for comparisons and diagnostics.
	pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<String, u32>> {
		self.prefixes
			.iter()
			.map(|(prefix, successors)| {
				let counts = successors
					.sorted()
					.into_iter()
					.map(|(word, count)| (word.to_owned(), count))
					.collect();
				(prefix.clone(), counts)
			})
			.collect()
	}
}
