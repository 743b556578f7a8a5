//! Top-level module for the Markov chain.
//!
//! - Fixed-width token contexts (`Window`)
//! - Table entries with their successor multisets (`State`)
//! - The immutable transition table (`TransitionTable`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk itself (`generate`, `Generator`)

/// Ordered n-token context used as a table key.
pub mod window;

/// Single table entry: a window and every successor observed after it.
///
/// Supports weighted random sampling through duplicate entries.
pub mod state;

/// Transition table construction and read-only accessors.
pub mod chain;

/// Generation parameters such as the target length and start seed.
pub mod generation_input;

/// Random walk over a transition table.
pub mod generator;
