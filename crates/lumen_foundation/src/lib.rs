//! Error types shared by every layer of the Lumen code generator.
//!
//! This crate provides:
//! - [`Error`] - Compilation errors with optional context
//! - [`ErrorKind`] - The categorized failure modes
//! - [`ErrorContext`] - Where in the program an error was raised

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// Result type used throughout Lumen.
pub type Result<T> = std::result::Result<T, Error>;
