/// Lowercases a word and removes every character outside `a..=z`.
///
/// Digits, punctuation and non-ASCII letters are dropped, so the result
/// may be empty.
pub fn normalise(word: &str) -> String {
	word.chars()
		.flat_map(char::to_lowercase)
		.filter(|c| c.is_ascii_lowercase())
		.collect()
}

/// Normalises every word, discarding the ones that end up empty.
pub fn normalise_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
	words
		.iter()
		.map(|w| normalise(w.as_ref()))
		.filter(|w| !w.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn strips_case_digits_and_punctuation() {
		assert_eq!(normalise("Repeat!"), "repeat");
		assert_eq!(normalise("don't"), "dont");
		assert_eq!(normalise("R2-D2"), "rd");
		assert_eq!(normalise("café"), "caf");
		assert_eq!(normalise("!!"), "");
	}

	#[test]
	fn empty_words_are_dropped() {
		let words = ["This", "is", "42", "a", "test,", "!!"];
		assert_eq!(normalise_words(&words), vec!["this", "is", "a", "test"]);
	}
}
