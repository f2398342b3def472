//! dynmat: dynamic-size vector and square matrix containers.
//!
//! This crate provides a heap-backed `DynamicVector` with a length fixed at
//! construction, a square `DynamicMatrix` composed of row vectors, checked
//! arithmetic over both, and whitespace-delimited text I/O.
//!
//! Every binary operation validates operand sizes and reports a
//! [`ContainerError`] instead of truncating or padding.
pub mod config;
pub mod error;
pub mod io;
pub mod math;

pub use config::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use error::ContainerError;
pub use io::{TextIoError, TokenReader};
pub use math::{DynamicMatrix, DynamicVector, Element};
