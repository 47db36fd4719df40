//! Runtime source fragments spliced around generated code.
//!
//! The runtime library ships as a fixed set of C files. The generator does
//! not parse them; it only needs to know which headers they provide so that
//! `#include` directives naming those headers can be dropped once every
//! fragment lives in a single translation unit.

use std::collections::HashSet;
use std::fmt;

/// One of the runtime's source files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// `utils.h`
    UtilsHeader,
    /// `value.h`
    ValueHeader,
    /// `utils.c`
    UtilsSource,
    /// `value.c`
    ValueSource,
    /// `builtins.c`
    BuiltinsSource,
    /// `entry.c`, the program entry point
    Entry,
}

impl FragmentKind {
    /// Every fragment, in the order it appears in the output.
    pub const ALL: [Self; 6] = [
        Self::UtilsHeader,
        Self::ValueHeader,
        Self::UtilsSource,
        Self::ValueSource,
        Self::BuiltinsSource,
        Self::Entry,
    ];

    /// File name of this fragment within the runtime directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::UtilsHeader => "utils.h",
            Self::ValueHeader => "value.h",
            Self::UtilsSource => "utils.c",
            Self::ValueSource => "value.c",
            Self::BuiltinsSource => "builtins.c",
            Self::Entry => "entry.c",
        }
    }

    /// Returns true for header fragments.
    #[must_use]
    pub const fn is_header(self) -> bool {
        matches!(self, Self::UtilsHeader | Self::ValueHeader)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// The complete set of runtime fragments for one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeFragments {
    texts: [String; 6],
}

impl RuntimeFragments {
    /// Creates a set where every fragment is empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set one fragment's text.
    #[must_use]
    pub fn with(mut self, kind: FragmentKind, text: impl Into<String>) -> Self {
        self.set(kind, text);
        self
    }

    /// Sets one fragment's text.
    pub fn set(&mut self, kind: FragmentKind, text: impl Into<String>) {
        self.texts[kind.index()] = text.into();
    }

    /// Returns one fragment's text.
    #[must_use]
    pub fn text(&self, kind: FragmentKind) -> &str {
        &self.texts[kind.index()]
    }

    /// Header file names whose contents are part of the unit.
    #[must_use]
    pub fn provided_headers(&self) -> HashSet<&'static str> {
        FragmentKind::ALL
            .into_iter()
            .filter(|kind| kind.is_header())
            .map(FragmentKind::file_name)
            .collect()
    }
}

/// An `#include` directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Include<'a> {
    /// `#include "name"`
    Local(&'a str),
    /// `#include <name>`
    System(&'a str),
}

/// Parses a line as an include directive.
///
/// Accepts the whitespace C allows around `#` and `include`; anything else
/// on the line, such as a comment after the directive, is ignored.
#[must_use]
pub fn parse_include(line: &str) -> Option<Include<'_>> {
    let rest = line.trim_start().strip_prefix('#')?;
    let rest = rest.trim_start().strip_prefix("include")?.trim_start();
    if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        Some(Include::Local(&quoted[..end]))
    } else if let Some(angled) = rest.strip_prefix('<') {
        let end = angled.find('>')?;
        Some(Include::System(&angled[..end]))
    } else {
        None
    }
}

/// Drops local includes of headers that are already part of the unit.
///
/// System includes are always kept, wherever they appear.
#[derive(Clone, Debug)]
pub struct IncludeFilter {
    provided: HashSet<&'static str>,
}

impl IncludeFilter {
    /// Creates a filter for the headers provided by `fragments`.
    #[must_use]
    pub fn new(fragments: &RuntimeFragments) -> Self {
        Self {
            provided: fragments.provided_headers(),
        }
    }

    /// Returns true if `line` includes a header the unit already contains.
    #[must_use]
    pub fn is_redundant(&self, line: &str) -> bool {
        matches!(parse_include(line), Some(Include::Local(name)) if self.provided.contains(name))
    }

    /// Copies `text`, leaving out redundant include lines.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        text.split('\n')
            .filter(|line| !self.is_redundant(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
