use thiserror::Error;

/// Errors that can occur when building a transition table or preparing a generation.
///
/// Reaching a dead end during generation is not an error: the walk simply stops
/// and returns what it produced so far.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
	#[error("invalid chain order {order} for a source of {tokens} token(s); order must be >= 1 and < source length")]
	InvalidOrder { order: usize, tokens: usize },

	#[error("no words encountered in input")]
	EmptySource,

	#[error("generation length must be a positive integer")]
	InvalidLength,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_order_message_names_both_values() {
		let message = ChainError::InvalidOrder { order: 5, tokens: 3 }.to_string();
		assert!(message.contains("order 5"));
		assert!(message.contains("3 token(s)"));
	}
}
