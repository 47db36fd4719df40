//! Compiler from AST nodes to C source text.
//!
//! The [`Compiler`] is the compilation context: it borrows the function
//! table and carries the output options, and it is never mutated once
//! built. Each stage lives in its own submodule:
//!
//! - [`value`] - value expressions
//! - [`call`] - call resolution and arity checking
//! - [`function`] - function bodies, definitions and forward declarations
//!
//! Errors propagate with `?` and abort the whole compilation.

pub mod call;
pub mod function;
pub mod value;

use crate::table::FunctionTable;

/// Output formatting options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Spaces written for each level of indentation.
    pub indent_width: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl CodegenOptions {
    /// Builder method to set the indentation width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Replaces every horizontal tab with `indent_width` spaces.
    #[must_use]
    pub fn expand_tabs(&self, text: &str) -> String {
        text.replace('\t', &" ".repeat(self.indent_width))
    }
}

/// Immutable compilation context shared by every compile step.
#[derive(Clone, Copy, Debug)]
pub struct Compiler<'a> {
    table: &'a FunctionTable,
    options: CodegenOptions,
}

impl<'a> Compiler<'a> {
    /// Creates a compiler over the given table with default options.
    #[must_use]
    pub fn new(table: &'a FunctionTable) -> Self {
        Self::with_options(table, CodegenOptions::default())
    }

    /// Creates a compiler with explicit options.
    #[must_use]
    pub fn with_options(table: &'a FunctionTable, options: CodegenOptions) -> Self {
        Self { table, options }
    }

    /// The function table calls are resolved against.
    #[must_use]
    pub fn table(&self) -> &'a FunctionTable {
        self.table
    }

    /// The output options.
    #[must_use]
    pub fn options(&self) -> CodegenOptions {
        self.options
    }
}
