use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole source text from a file, or from stdin when `path` is `None`.
pub fn read_source<P: AsRef<Path>>(path: Option<P>) -> io::Result<String> {
	let mut contents = String::new();
	match path {
		Some(path) => File::open(path)?.read_to_string(&mut contents)?,
		None => io::stdin().lock().read_to_string(&mut contents)?,
	};
	Ok(contents)
}

/// Splits a text into whitespace-delimited tokens.
///
/// Punctuation stays attached to its word: `"Hello, world!"` → `["Hello,", "world!"]`.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Greedily wraps whitespace-separated words into lines of at most `width` characters.
///
/// - Words are never split; a word longer than `width` gets a line of its own
/// - Width is counted in `char`s
/// - A `width` of 0 disables wrapping
pub fn wrap(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut line = String::new();
	let mut line_len = 0;

	for word in text.split_whitespace() {
		let word_len = word.chars().count();
		if line_len > 0 && width > 0 && line_len + 1 + word_len > width {
			lines.push(std::mem::take(&mut line));
			line_len = 0;
		}
		if line_len > 0 {
			line.push(' ');
			line_len += 1;
		}
		line.push_str(word);
		line_len += word_len;
	}

	if !line.is_empty() {
		lines.push(line);
	}
	lines
}
