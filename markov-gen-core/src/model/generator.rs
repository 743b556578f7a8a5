use log::{debug, trace};
use rand::Rng;

use super::chain::TransitionTable;
use super::generation_input::{GenerationInput, StartSeed};
use crate::error::ChainError;

/// Mutable state of a single generation.
///
/// Owned by one `generate` call and dropped when it returns. The current
/// window is always the last `order` emitted tokens.
#[derive(Debug)]
pub struct GenerationState {
	order: usize,
	output: Vec<String>,
}

impl GenerationState {
	/// Starts a generation from `seed`, keeping at most `target_length` of its tokens.
	pub fn new(order: usize, seed: &[String], target_length: usize) -> Self {
		let kept = seed.len().min(target_length);
		Self {
			order,
			output: seed[..kept].to_vec(),
		}
	}

	/// Returns the current window, or `None` while fewer than `order` tokens were emitted.
	pub fn window(&self) -> Option<&[String]> {
		let len = self.output.len();
		if len < self.order {
			return None;
		}
		Some(&self.output[len - self.order..])
	}

	pub fn len(&self) -> usize {
		self.output.len()
	}

	pub fn is_empty(&self) -> bool {
		self.output.is_empty()
	}

	pub fn push(&mut self, token: String) {
		self.output.push(token);
	}

	pub fn into_output(self) -> Vec<String> {
		self.output
	}
}

/// Walks `table` from `seed` until `target_length` tokens are emitted.
///
/// # Behavior
/// - The seed is emitted as-is (truncated to `target_length`).
/// - While fewer than `n` tokens are emitted nothing is sampled and the walk stops.
/// - Each step looks up the last `n` tokens and appends one uniformly drawn
///   successor, so frequent successors are proportionally more likely.
/// - An unknown window is a dead end: the walk stops and the partial output
///   is returned. This is not an error, so the output may be shorter than
///   `target_length`.
///
/// With a seeded `rng` the output is fully reproducible.
pub fn generate<R: Rng + ?Sized>(
	table: &TransitionTable,
	seed: &[String],
	target_length: usize,
	rng: &mut R,
) -> Vec<String> {
	let mut state = GenerationState::new(table.order(), seed, target_length);

	while state.len() < target_length {
		let Some(window) = state.window() else {
			debug!("seed has {} token(s), order is {}: nothing to sample", state.len(), table.order());
			break;
		};

		let Some(next) = table.get(window).and_then(|entry| entry.predict(&mut *rng)) else {
			debug!("dead end at window '{}' after {} token(s)", window.join(" "), state.len());
			break;
		};

		trace!("'{}' -> '{}'", window.join(" "), next);
		state.push(next.to_owned());
	}

	state.into_output()
}

/// High-level generator owning a transition table.
///
/// # Responsibilities
/// - Build the table once from a token sequence
/// - Resolve the start seed of each request
/// - Run independent generations over the same immutable table
#[derive(Debug, Clone)]
pub struct Generator {
	table: TransitionTable,
}

impl Generator {
	/// Builds a generator of order `order` from `tokens`.
	///
	/// # Errors
	/// Same as `TransitionTable::build`.
	pub fn new(tokens: &[String], order: usize, cyclic: bool) -> Result<Self, ChainError> {
		Ok(Self {
			table: TransitionTable::build(tokens, order, cyclic)?,
		})
	}

	/// Read-only access to the transition table, e.g. for display.
	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Generates a token sequence according to `input`.
	///
	/// # Notes
	/// - `StartSeed::Random` starts from a uniformly chosen window of the table.
	/// - `StartSeed::Custom` seeds that are not a known window end right after
	///   the seed, like any other dead end.
	pub fn predict<R: Rng + ?Sized>(&self, input: &GenerationInput, rng: &mut R) -> Vec<String> {
		let seed: Vec<String> = match &input.start_seed {
			StartSeed::Random => self
				.table
				.random_window(&mut *rng)
				.map(|window| window.tokens().to_vec())
				.unwrap_or_default(),
			StartSeed::Custom(tokens) => tokens.clone(),
		};

		generate(&self.table, &seed, input.length(), rng)
	}
}

impl From<TransitionTable> for Generator {
	fn from(table: TransitionTable) -> Self {
		Self { table }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn words(s: &str) -> Vec<String> {
		s.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn deterministic_chain_is_followed_exactly() {
		let table = TransitionTable::build(&words("a b c d e"), 1, false).unwrap();
		let mut rng = StdRng::seed_from_u64(0);

		let output = generate(&table, &words("a"), 4, &mut rng);
		assert_eq!(output, words("a b c d"));
	}

	#[test]
	fn stops_early_at_dead_end() {
		// "c" is never followed by anything.
		let table = TransitionTable::build(&words("a b c"), 1, false).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		let output = generate(&table, &words("a"), 10, &mut rng);
		assert_eq!(output, words("a b c"));
	}

	#[test]
	fn unknown_seed_window_is_a_dead_end() {
		let table = TransitionTable::build(&words("a b c a"), 1, false).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		assert_eq!(generate(&table, &words("zebra"), 5, &mut rng), words("zebra"));
	}

	#[test]
	fn short_seed_is_emitted_without_sampling() {
		let table = TransitionTable::build(&words("a b c a b d"), 2, false).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		assert_eq!(generate(&table, &words("a"), 5, &mut rng), words("a"));
		assert!(generate(&table, &[], 5, &mut rng).is_empty());
	}

	#[test]
	fn long_seed_uses_its_last_window() {
		let table = TransitionTable::build(&words("a b c d e"), 2, false).unwrap();
		let mut rng = StdRng::seed_from_u64(9);

		let output = generate(&table, &words("x y c d"), 6, &mut rng);
		assert_eq!(output, words("x y c d e"));
	}

	#[test]
	fn seed_is_truncated_to_target_length() {
		let table = TransitionTable::build(&words("a b c d"), 1, false).unwrap();
		let mut rng = StdRng::seed_from_u64(9);

		assert_eq!(generate(&table, &words("a b c"), 2, &mut rng), words("a b"));
	}

	#[test]
	fn cyclic_table_never_dead_ends() {
		let table = TransitionTable::build(&words("a b a c a b"), 1, true).unwrap();
		let mut rng = StdRng::seed_from_u64(11);

		let output = generate(&table, &words("c"), 50, &mut rng);
		assert_eq!(output.len(), 50);
		for pair in output.windows(2) {
			let successors = table.get(&pair[..1]).unwrap().successors();
			assert!(successors.contains(&pair[1]));
		}
	}

	#[test]
	fn same_rng_seed_same_output() {
		let tokens = words("the cat sat on the mat and the cat ran to the dog on the mat");
		let table = TransitionTable::build(&tokens, 1, true).unwrap();

		let first = generate(&table, &words("the"), 25, &mut StdRng::seed_from_u64(5));
		let second = generate(&table, &words("the"), 25, &mut StdRng::seed_from_u64(5));
		assert_eq!(first, second);
	}

	#[test]
	fn generation_state_window_tracks_last_tokens() {
		let mut state = GenerationState::new(2, &words("a"), 10);
		assert_eq!(state.window(), None);

		state.push("b".to_owned());
		assert_eq!(state.window(), Some(&words("a b")[..]));

		state.push("c".to_owned());
		assert_eq!(state.window(), Some(&words("b c")[..]));
		assert_eq!(state.into_output(), words("a b c"));
	}

	#[test]
	fn random_seed_starts_from_a_table_window() {
		let tokens = words("one two three four five six");
		let generator = Generator::new(&tokens, 2, true).unwrap();
		let input = GenerationInput::new(4, StartSeed::Random).unwrap();
		let mut rng = StdRng::seed_from_u64(21);

		let output = generator.predict(&input, &mut rng);
		assert_eq!(output.len(), 4);
		assert!(generator.table().contains(&output[..2]));
	}

	#[test]
	fn custom_seed_is_used_verbatim() {
		let tokens = words("one two three four five six");
		let generator = Generator::new(&tokens, 2, false).unwrap();
		let input = GenerationInput::new(10, StartSeed::Custom(words("three four"))).unwrap();
		let mut rng = StdRng::seed_from_u64(21);

		assert_eq!(generator.predict(&input, &mut rng), words("three four five six"));
	}

	#[test]
	fn generator_propagates_build_errors() {
		assert_eq!(
			Generator::new(&words("a b"), 3, false).unwrap_err(),
			ChainError::InvalidOrder { order: 3, tokens: 2 }
		);
	}
}
