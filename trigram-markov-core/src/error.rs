use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkovError {
	#[error("Model is empty")]
	EmptyModel,

	#[error("Input has less than 3 words (found {found})")]
	InsufficientInput { found: usize },

	#[error("Requested word count must be at least 1")]
	InvalidWordCount,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;
