//! Lumen - C code generator for a small functional language
//!
//! This crate re-exports all layers of the Lumen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: lumen_runtime     - Configuration, input loading, lumenc CLI
//! Layer 1: lumen_language    - AST, function table, compiler, assembler
//! Layer 0: lumen_foundation  - Error types
//! ```

pub use lumen_foundation as foundation;
pub use lumen_language as language;
pub use lumen_runtime as runtime;
