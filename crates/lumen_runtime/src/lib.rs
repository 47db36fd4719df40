//! Configuration, input loading and the `lumenc` CLI for Lumen.
//!
//! This crate provides:
//! - [`CompilerConfig`] - Settings for a compiler run
//! - [`load_fragments`] - Reading the runtime's C sources from disk
//! - [`serialize`] - `MessagePack` encoding of parsed programs
//! - [`driver`] - Whole runs from AST file to C output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod fragments;
pub mod logs;
pub mod serialize;

pub use config::CompilerConfig;
pub use driver::{compile_file, run};
pub use fragments::load_fragments;
pub use logs::init_tracing;
