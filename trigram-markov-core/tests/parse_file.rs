use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use trigram_markov_core::io::write_output;
use trigram_markov_core::trigram::parse_file_to_normalised_trigrams;
use trigram_markov_core::{MarkovError, Model, Trigram};

#[test]
fn parses_corpus_file_into_trigrams() {
	let temp = TempDir::new().unwrap();
	let path = temp.path().join("corpus.txt");
	fs::write(&path, "This is a test, I repeat!\n\nThis is a test !!\n").unwrap();

	let got = parse_file_to_normalised_trigrams(&path).unwrap();
	assert_eq!(got.len(), 8);
	assert_eq!(got[0], Trigram::new("this", "is", "a"));
	assert_eq!(got[3], Trigram::new("test", "i", "repeat"));
	assert_eq!(got[7], Trigram::new("is", "a", "test"));
}

#[test]
fn missing_corpus_is_an_io_error() {
	let temp = TempDir::new().unwrap();
	let err = parse_file_to_normalised_trigrams(temp.path().join("missing.txt")).unwrap_err();
	assert!(matches!(err, MarkovError::Io(_)));
}

#[test]
fn short_corpus_builds_no_model() {
	let temp = TempDir::new().unwrap();
	let path = temp.path().join("short.txt");
	fs::write(&path, "A Test").unwrap();

	let err = parse_file_to_normalised_trigrams(&path).unwrap_err();
	assert!(matches!(err, MarkovError::InsufficientInput { found: 2 }));

	// Three raw words, but only two survive normalization
	fs::write(&path, "hello 123 world").unwrap();
	let err = parse_file_to_normalised_trigrams(&path).unwrap_err();
	assert!(matches!(err, MarkovError::InsufficientInput { found: 2 }));
}

#[test]
fn corpus_to_output_file() {
	let temp = TempDir::new().unwrap();
	let corpus = temp.path().join("corpus.txt");
	let output = temp.path().join("out.txt");
	fs::write(&corpus, "to be or not to be that is the question").unwrap();

	let trigrams = parse_file_to_normalised_trigrams(&corpus).unwrap();
	let mut model = Model::new(|n| n - 1);
	model.add_all(&trigrams);
	let text = model.generate(6).unwrap();

	let written = write_output(&output, &text).unwrap();
	assert_eq!(written, text.len());
	assert_eq!(fs::read_to_string(&output).unwrap(), text);
	assert_eq!(text.split(' ').count(), 6);
}
