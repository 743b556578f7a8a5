use crate::error::ChainError;

/// Default number of tokens produced by a generation.
pub const DEFAULT_LENGTH: usize = 30;

/// Strategy used to select the starting seed when generating a sequence.
///
/// # Variants
/// - `Random`: start from a uniformly chosen window of the table.
/// - `Custom(tokens)`: start from the given tokens. They are emitted as-is and
///   sampling begins once at least `n` tokens are available.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub enum StartSeed {
	#[default]
	Random,
	Custom(Vec<String>),
}

impl StartSeed {
	/// Builds a custom seed from whitespace separated words.
	///
	/// Blank input falls back to `Random`.
	pub fn from_words(words: &str) -> Self {
		let tokens: Vec<String> = words.split_whitespace().map(str::to_owned).collect();
		if tokens.is_empty() {
			Self::Random
		} else {
			Self::Custom(tokens)
		}
	}
}

/// Input parameters of a generation request.
///
/// # Invariants
/// - `length` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Target number of emitted tokens, seed included.
	length: usize,

	/// How the walk is started.
	pub start_seed: StartSeed,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			start_seed: StartSeed::Random,
		}
	}
}

impl GenerationInput {
	/// Creates an input with the given target length and seed.
	///
	/// # Errors
	/// Returns `InvalidLength` if `length` is zero.
	pub fn new(length: usize, start_seed: StartSeed) -> Result<Self, ChainError> {
		let mut input = Self { start_seed, ..Self::default() };
		input.set_length(length)?;
		Ok(input)
	}

	/// Returns the target length.
	pub fn length(&self) -> usize {
		self.length
	}

	/// Sets the target length.
	///
	/// # Errors
	/// Returns `InvalidLength` if `length` is zero.
	pub fn set_length(&mut self, length: usize) -> Result<(), ChainError> {
		if length == 0 {
			return Err(ChainError::InvalidLength);
		}
		self.length = length;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_input() {
		let input = GenerationInput::default();
		assert_eq!(input.length(), DEFAULT_LENGTH);
		assert_eq!(input.start_seed, StartSeed::Random);
	}

	#[test]
	fn zero_length_is_rejected() {
		assert_eq!(GenerationInput::new(0, StartSeed::Random), Err(ChainError::InvalidLength));

		let mut input = GenerationInput::default();
		assert_eq!(input.set_length(0), Err(ChainError::InvalidLength));
		assert_eq!(input.length(), DEFAULT_LENGTH);
	}

	#[test]
	fn seed_from_words() {
		assert_eq!(
			StartSeed::from_words("  the  old man "),
			StartSeed::Custom(vec!["the".into(), "old".into(), "man".into()])
		);
		assert_eq!(StartSeed::from_words("   "), StartSeed::Random);
	}
}
