//! The function table used to resolve calls.
//!
//! A table is built once per compilation from the fixed built-in list and
//! the program's top-level definitions, and is read-only afterwards.

use crate::ast::FunctionDef;

/// Built-in functions provided by the runtime, as `(name, arity)`.
///
/// Generated programs link against these, so names and arities must match
/// the runtime exactly.
pub const BUILTINS: &[(&str, usize)] = &[
    ("null", 0),
    ("false", 0),
    ("true", 0),
    ("add", 2),
    ("sub", 2),
    ("mul", 2),
    ("div", 2),
    ("mod", 2),
    ("pow", 2),
    ("sqrt", 1),
    ("string", 1),
    ("at", 2),
    ("length", 1),
    ("join", 2),
    ("split", 2),
    ("map", 1),
    ("reduce", 3),
    ("reduceRight", 3),
    ("repeat", 2),
    ("if", 3),
    ("return", 1),
    ("print", 1),
    ("input", 1),
];

/// A function known to the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionEntry {
    /// Source-level name.
    pub name: String,
    /// Number of required arguments.
    pub argc: usize,
    /// True for functions defined by the program being compiled.
    pub userdef: bool,
}

impl FunctionEntry {
    /// Creates a built-in entry.
    #[must_use]
    pub fn builtin(name: impl Into<String>, argc: usize) -> Self {
        Self {
            name: name.into(),
            argc,
            userdef: false,
        }
    }

    /// Creates the entry for a top-level definition.
    #[must_use]
    pub fn from_def(def: &FunctionDef) -> Self {
        Self {
            name: def.name.value.clone(),
            argc: def.arity(),
            userdef: true,
        }
    }
}

/// Ordered registry of callable functions.
///
/// Built-ins always come first. Lookup returns the first entry with a
/// matching name, so a user definition that reuses a built-in's name is
/// shadowed by the built-in rather than rejected.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    entries: Vec<FunctionEntry>,
}

impl FunctionTable {
    /// Builds a table from the standard built-ins and the given definitions.
    #[must_use]
    pub fn new(defs: &[FunctionDef]) -> Self {
        Self::build(BUILTINS, defs)
    }

    /// Builds a table from an explicit built-in list and the given definitions.
    #[must_use]
    pub fn build(builtins: &[(&str, usize)], defs: &[FunctionDef]) -> Self {
        let entries = builtins
            .iter()
            .map(|&(name, argc)| FunctionEntry::builtin(name, argc))
            .chain(defs.iter().map(FunctionEntry::from_def))
            .collect();
        Self { entries }
    }

    /// Returns the first entry named `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Returns true if some entry is named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All entries, built-ins first.
    #[must_use]
    pub fn entries(&self) -> &[FunctionEntry] {
        &self.entries
    }

    /// User-defined entries in source order.
    pub fn user_defined(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.iter().filter(|entry| entry.userdef)
    }

    /// Built-in entries.
    pub fn builtins(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.iter().filter(|entry| !entry.userdef)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
