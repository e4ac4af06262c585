use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Reads a text file and returns its whole content.
///
/// - Reads the entire file into memory
/// - Line endings are kept as-is, the tokenizer splits on any whitespace
pub fn read_to_string<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Writes `text` to `filename` through a buffered writer.
///
/// Creates the file or truncates an existing one. The buffer is flushed
/// before returning, so an `Ok` means every byte reached the file.
///
/// Returns the number of bytes written.
pub fn write_output<P: AsRef<Path>>(filename: P, text: &str) -> io::Result<usize> {
	let mut writer = BufWriter::new(File::create(filename)?);
	writer.write_all(text.as_bytes())?;
	writer.flush()?;
	Ok(text.len())
}
