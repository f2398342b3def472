//! Whitespace-delimited text input for the containers.

pub mod tokens;

pub use tokens::{TextIoError, TokenReader};
