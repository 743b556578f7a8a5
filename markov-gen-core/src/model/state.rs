use rand::Rng;
use rand::seq::IndexedRandom;

use serde::{Deserialize, Serialize};

use super::window::Window;

/// Represents an entry of the transition table.
///
/// A `State` corresponds to a fixed n-token window (`key`) and stores every
/// token observed right after it, in observation order.
///
/// Duplicates are kept on purpose: a successor observed three times appears
/// three times, so a uniform draw over `successors` is already weighted by
/// frequency.
///
/// ## Invariants
/// - All successors were observed after the same `key`
/// - `successors` is never empty once the state is part of a table
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// The n-token context.
	key: Window,
	/// Observed successors, duplicates included.
	/// Example: ["cat", "dog", "cat"]
	successors: Vec<String>,
}

impl State {
	/// Creates a new state for the given window with no successors yet.
	pub(crate) fn new(key: Window) -> Self {
		Self {
			key,
			successors: Vec::new(),
		}
	}

	/// Records one more observation of `next` following this window.
	pub(crate) fn add_transition(&mut self, next: &str) {
		self.successors.push(next.to_owned());
	}

	pub fn key(&self) -> &Window {
		&self.key
	}

	/// Successors in observation order, duplicates included.
	pub fn successors(&self) -> &[String] {
		&self.successors
	}

	/// Predicts the next token with a uniform draw over the successor multiset.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.successors.choose(rng).map(String::as_str)
	}

	/// Distinct successors in first-seen order with their relative frequency.
	///
	/// The probabilities of a non-empty state sum to 1.0.
	pub fn frequencies(&self) -> Vec<(&str, f64)> {
		let mut counts: Vec<(&str, usize)> = Vec::new();
		for successor in &self.successors {
			match counts.iter_mut().find(|(token, _)| *token == successor.as_str()) {
				Some((_, count)) => *count += 1,
				None => counts.push((successor.as_str(), 1)),
			}
		}

		let total = self.successors.len() as f64;
		counts
			.into_iter()
			.map(|(token, count)| (token, count as f64 / total))
			.collect()
	}
}
