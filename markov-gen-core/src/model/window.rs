use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of exactly `n` consecutive tokens.
///
/// Two windows are equal iff every position matches. The derived `Hash` only
/// hashes the inner vector, which hashes like a `[String]` slice, so a table
/// keyed by `Window` can be queried with a borrowed slice of emitted tokens.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Window(Vec<String>);

impl Window {
	/// Creates a window from owned tokens.
	pub fn new(tokens: Vec<String>) -> Self {
		Self(tokens)
	}

	/// Number of tokens in the window (the chain order).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn tokens(&self) -> &[String] {
		&self.0
	}
}

impl Borrow<[String]> for Window {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

impl From<&[String]> for Window {
	fn from(tokens: &[String]) -> Self {
		Self(tokens.to_vec())
	}
}

impl fmt::Display for Window {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(" "))
	}
}
