//! Whole-program assembly.
//!
//! The assembler builds the function table, compiles every definition and
//! lays the result out as one C translation unit:
//!
//! ```text
//! utils.h, value.h          runtime headers
//! utils.c, value.c,
//! builtins.c                runtime sources
//! forward declarations      one per user-defined function
//! definitions               in source order
//! entry.c                   program entry point
//! ```
//!
//! Include directives naming a header that is already part of the unit
//! are dropped from the runtime fragments as they are laid out.

use lumen_foundation::Result;
use tracing::{debug, instrument};

use crate::ast::FunctionDef;
use crate::compiler::function::forward_declarations;
use crate::compiler::{CodegenOptions, Compiler};
use crate::fragment::{FragmentKind, IncludeFilter, RuntimeFragments};
use crate::table::FunctionTable;

/// The generated part of a program, without runtime fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Forward declarations of user-defined functions.
    pub declarations: String,
    /// Compiled definitions separated by blank lines.
    pub definitions: String,
}

/// Assembles programs against a fixed set of runtime fragments.
#[derive(Clone, Copy, Debug)]
pub struct Assembler<'f> {
    fragments: &'f RuntimeFragments,
    options: CodegenOptions,
}

impl<'f> Assembler<'f> {
    /// Creates an assembler with default options.
    #[must_use]
    pub fn new(fragments: &'f RuntimeFragments) -> Self {
        Self {
            fragments,
            options: CodegenOptions::default(),
        }
    }

    /// Builder method to set the codegen options.
    #[must_use]
    pub fn with_options(mut self, options: CodegenOptions) -> Self {
        self.options = options;
        self
    }

    /// Compiles every definition without adding runtime fragments.
    ///
    /// Stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns an error if a call names an unknown function or supplies
    /// fewer arguments than the callee's arity.
    pub fn compile_functions(&self, defs: &[FunctionDef]) -> Result<GeneratedCode> {
        let table = FunctionTable::new(defs);
        let compiler = Compiler::with_options(&table, self.options);

        let definitions = defs
            .iter()
            .map(|def| compiler.compile_def(def))
            .collect::<Result<Vec<_>>>()?
            .join("\n\n");

        Ok(GeneratedCode {
            declarations: forward_declarations(&table),
            definitions,
        })
    }

    /// Compiles `defs` into a complete C translation unit.
    ///
    /// Fails on the first unresolved call or arity error; no partial output
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns the first compile error raised by any definition.
    #[instrument(skip_all, fields(functions = defs.len()))]
    pub fn assemble(&self, defs: &[FunctionDef]) -> Result<String> {
        let generated = self.compile_functions(defs)?;
        let filter = IncludeFilter::new(self.fragments);
        let fragment = |kind: FragmentKind| filter.apply(self.fragments.text(kind));

        let utils_header = fragment(FragmentKind::UtilsHeader);
        let value_header = fragment(FragmentKind::ValueHeader);
        let sources = [
            FragmentKind::UtilsSource,
            FragmentKind::ValueSource,
            FragmentKind::BuiltinsSource,
        ]
        .into_iter()
        .map(fragment)
        .collect::<Vec<_>>()
        .join("\n");
        let entry = fragment(FragmentKind::Entry);

        let unit = format!(
            "\n{utils_header}\n{value_header}\n{sources}\n\n{}\n\n{}\n\n{entry}\n",
            generated.declarations, generated.definitions,
        );
        debug!(bytes = unit.len(), "assembled translation unit");
        Ok(unit)
    }
}

/// Assembles a program with default options.
///
/// # Errors
///
/// Returns the first compile error raised by any definition.
pub fn assemble(defs: &[FunctionDef], fragments: &RuntimeFragments) -> Result<String> {
    Assembler::new(fragments).assemble(defs)
}
