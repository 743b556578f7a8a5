//! Word-level Markov chain text generation library.
//!
//! This crate provides an order-n Markov chain over whitespace tokens:
//! - Transition table construction, optionally treating the source as cyclic
//! - Weighted random walks over the table with early termination at dead ends
//! - Small I/O helpers for reading and wrapping text
//!
//! The table is built once and never mutated, so it can be shared freely
//! between concurrent generations.

/// Markov chain models and generation logic.
pub mod model;

/// Errors raised while building a chain or validating generation input.
pub mod error;

/// I/O utilities (source reading, tokenization, wrapping).
pub mod io;

pub use error::ChainError;
pub use model::chain::TransitionTable;
pub use model::generator::{generate, Generator};
pub use model::generation_input::{GenerationInput, StartSeed};
pub use model::window::Window;
