//! AST, function table, C code generator and program assembler for Lumen.
//!
//! This crate provides:
//! - [`FunctionDef`], [`Call`], [`Expr`] - The AST handed over by the parser
//! - [`FunctionTable`] - Built-in and user-defined functions with arities
//! - [`Compiler`] - Lowering of expressions, bodies and definitions to C
//! - [`Assembler`] - Stitching runtime fragments and generated code together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod ast;
pub mod compiler;
pub mod fragment;
pub mod table;
pub mod target;

pub use assembler::{Assembler, GeneratedCode, assemble};
pub use ast::{Call, Expr, FunctionDef, Ident, Literal};
pub use compiler::function::forward_declarations;
pub use compiler::{CodegenOptions, Compiler};
pub use fragment::{FragmentKind, RuntimeFragments};
pub use table::{BUILTINS, FunctionEntry, FunctionTable};
