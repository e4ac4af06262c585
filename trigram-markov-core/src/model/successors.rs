use std::collections::HashMap;

use log::trace;

/// Successor counts observed after a single two-word prefix.
///
/// Conceptually a node of the Markov chain, where outgoing edges are
/// weighted by their number of observations.
///
/// ## Invariants
/// - Each occurrence count is strictly positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Successors {
	/// Example: { "or" => 2, "that" => 1 }
	counts: HashMap<String, u32>,
}

impl Successors {
	/// Creates an empty set of successors.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `word` after this prefix.
	pub fn add(&mut self, word: &str) {
		match self.counts.get_mut(word) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(word.to_owned(), 1);
			}
		}
	}

	/// Returns how many times `word` was observed, if ever.
	pub fn count(&self, word: &str) -> Option<u32> {
		self.counts.get(word).copied()
	}

	/// Total number of observations, every repetition included.
	pub fn total(&self) -> usize {
		self.counts.values().map(|c| *c as usize).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(word, count)` pairs in lexical word order.
	pub fn sorted(&self) -> Vec<(&str, u32)> {
		let mut pairs: Vec<(&str, u32)> = self.counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
		pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
		pairs
	}

	/// Chooses a successor at random, weighted by occurrence count.
	///
	/// Equivalent to repeating each word `count` times, sorting that list
	/// lexically and picking the element at `prng(list length)`. The walk
	/// over cumulative counts avoids building the list.
	///
	/// `prng` is called exactly once whenever a word is returned.
	/// Returns `None` if there are no successors.
	pub fn choose<P>(&self, prng: &mut P) -> Option<&str>
	where
		P: FnMut(usize) -> usize + ?Sized,
	{
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = prng(total) % total;
		trace!("Sampling index {} out of {}", r, total);

		for (word, count) in self.sorted() {
			let count = count as usize;
			if r < count {
				return Some(word);
			}
			r -= count;
		}

		// Unreachable: r < total
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn counting_prng() -> impl FnMut(usize) -> usize {
		let mut counter = 0;
		move |n| {
			let result = counter % n;
			counter += 1;
			result
		}
	}

	fn successors(pairs: &[(&str, u32)]) -> Successors {
		let mut s = Successors::new();
		for (word, count) in pairs {
			for _ in 0..*count {
				s.add(word);
			}
		}
		s
	}

	#[test]
	fn choose_follows_sorted_expanded_order() {
		let s = successors(&[("or", 1), ("not", 5), ("to", 3), ("be", 1)]);
		let mut prng = counting_prng();
		let expected = [
			"be", "not", "not", "not", "not", "not", "or", "to", "to", "to",
			"be", "not", "not", "not", "not", "not", "or", "to", "to", "to",
		];
		for want in expected {
			assert_eq!(s.choose(&mut prng), Some(want));
		}
	}

	#[test]
	fn choose_is_weighted_by_count() {
		let s = successors(&[("a", 1), ("b", 3)]);
		let mut prng = counting_prng();
		let mut a = 0;
		let mut b = 0;
		for _ in 0..400 {
			match s.choose(&mut prng) {
				Some("a") => a += 1,
				Some("b") => b += 1,
				other => panic!("unexpected choice {:?}", other),
			}
		}
		assert_eq!(b, 3 * a);
	}

	#[test]
	fn choose_consumes_a_draw_for_single_successor() {
		let s = successors(&[("only", 1)]);
		let mut calls = 0;
		let mut prng = |n: usize| {
			calls += 1;
			n - 1
		};
		assert_eq!(s.choose(&mut prng), Some("only"));
		assert_eq!(calls, 1);
	}

	#[test]
	fn choose_on_empty_returns_none() {
		let s = Successors::new();
		let mut prng = counting_prng();
		assert_eq!(s.choose(&mut prng), None);
	}
}
