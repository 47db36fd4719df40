//! Cross-layer integration tests
//!
//! Tests whole-program assembly and complete compiler runs from an AST file.

mod assembly;
mod driver;
