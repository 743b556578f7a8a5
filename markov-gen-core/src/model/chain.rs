use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::state::State;
use super::window::Window;
use crate::error::ChainError;

/// Transition table of an order-`n` Markov chain over tokens.
///
/// The table maps every observed window of `n` consecutive tokens to the
/// ordered multiset of tokens that followed it in the source.
///
/// # Responsibilities
/// - Build the table from a token sequence in a single pass
/// - Optionally treat the source as cyclic (the end wraps to the beginning)
/// - Answer lookups by the last `n` emitted tokens during generation
///
/// # Invariants
/// - `order` is always >= 1
/// - Every key has exactly `order` tokens and a non-empty successor sequence
/// - `states` is in first-observation order; `index` maps each key to its position
/// - Never mutated after `build` returns
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
	order: usize,
	cyclic: bool,
	observations: usize,
	states: Vec<State>,
	#[serde(skip)]
	index: HashMap<Window, usize>,
}

impl TransitionTable {
	/// Builds the transition table of `tokens` for a chain of order `n`.
	///
	/// # Behavior
	/// - Non-cyclic: each position `i` in `n..len` records `tokens[i-n..i] -> tokens[i]`,
	///   so the trailing window never becomes a key on its own.
	/// - Cyclic: positions wrap modulo `len`, every position has a successor and
	///   exactly `len` observations are recorded.
	///
	/// # Errors
	/// - `InvalidOrder` if `n == 0` or `n >= tokens.len()`
	/// - `EmptySource` if `tokens` is empty
	pub fn build(tokens: &[String], n: usize, cyclic: bool) -> Result<Self, ChainError> {
		if n == 0 {
			return Err(ChainError::InvalidOrder { order: n, tokens: tokens.len() });
		}
		if tokens.is_empty() {
			return Err(ChainError::EmptySource);
		}
		if n >= tokens.len() {
			return Err(ChainError::InvalidOrder { order: n, tokens: tokens.len() });
		}

		let mut table = Self {
			order: n,
			cyclic,
			observations: 0,
			states: Vec::new(),
			index: HashMap::new(),
		};

		let source = Self::wrapped_source(tokens, n, cyclic);
		for i in n..source.len() {
			table.observe(&source[i - n..i], &source[i]);
		}

		debug!(
			"built order-{} table ({}): {} tokens, {} windows, {} observations",
			n,
			if cyclic { "cyclic" } else { "linear" },
			tokens.len(),
			table.states.len(),
			table.observations
		);
		Ok(table)
	}

	/// Returns the source with the wrap strategy applied.
	///
	/// In cyclic mode the first `n` tokens are appended again, which is the same
	/// as reading every index modulo `tokens.len()`; keys then stay contiguous slices.
	fn wrapped_source(tokens: &[String], n: usize, cyclic: bool) -> Cow<'_, [String]> {
		if cyclic {
			Cow::Owned(tokens.iter().chain(tokens.iter().take(n)).cloned().collect())
		} else {
			Cow::Borrowed(tokens)
		}
	}

	/// Appends one `key -> next` observation, creating the state on first sight.
	fn observe(&mut self, key: &[String], next: &str) {
		let position = match self.index.get(key) {
			Some(position) => *position,
			None => {
				let window = Window::from(key);
				self.states.push(State::new(window.clone()));
				self.index.insert(window, self.states.len() - 1);
				self.states.len() - 1
			}
		};
		self.states[position].add_transition(next);
		self.observations += 1;
	}

	/// Order `n` of the chain.
	pub fn order(&self) -> usize {
		self.order
	}

	pub fn is_cyclic(&self) -> bool {
		self.cyclic
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of recorded `window -> successor` observations.
	pub fn observations(&self) -> usize {
		self.observations
	}

	/// Looks up the state for a window given as a token slice.
	///
	/// Returns `None` for unknown windows and for slices whose length is not the order.
	pub fn get(&self, window: &[String]) -> Option<&State> {
		self.index.get(window).map(|position| &self.states[*position])
	}

	pub fn contains(&self, window: &[String]) -> bool {
		self.index.contains_key(window)
	}

	/// Iterates over the states in first-observation order.
	pub fn iter(&self) -> impl Iterator<Item = &State> {
		self.states.iter()
	}

	/// Returns a uniformly chosen key, useful for starting a generation.
	///
	/// Returns `None` if the table has no states.
	pub fn random_window<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Window> {
		self.states.choose(rng).map(State::key)
	}
}

impl fmt::Display for TransitionTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for state in &self.states {
			writeln!(f, "{} => [{}]", state.key(), state.successors().join(", "))?;
		}
		Ok(())
	}
}
