//! Configuration for a compiler run.

use std::path::{Path, PathBuf};

use lumen_foundation::{Error, Result};
use lumen_language::CodegenOptions;

/// Directory searched for runtime fragments when none is given.
pub const DEFAULT_FRAGMENT_DIR: &str = "source";

/// Configuration for a single compiler run.
///
/// Controls where runtime fragments come from, where output goes, and how
/// generated code is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Directory holding `utils.h`, `value.h`, `utils.c`, `value.c`,
    /// `builtins.c` and `entry.c`.
    pub fragment_dir: PathBuf,

    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,

    /// Spaces per indentation level in generated code.
    pub indent_width: usize,

    /// Emit debug-level logs.
    pub verbose: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            fragment_dir: PathBuf::from(DEFAULT_FRAGMENT_DIR),
            output: None,
            indent_width: CodegenOptions::default().indent_width,
            verbose: false,
        }
    }
}

impl CompilerConfig {
    /// Builder method to set the fragment directory.
    #[must_use]
    pub fn with_fragment_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.fragment_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Builder method to set the output file.
    #[must_use]
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builder method to set the indentation width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Builder method to enable/disable verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the indentation width is zero.
    pub fn validate(&self) -> Result<()> {
        if self.indent_width == 0 {
            return Err(Error::invalid_config("indent width must be at least 1"));
        }
        Ok(())
    }

    /// Codegen options derived from this configuration.
    #[must_use]
    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions::default().with_indent_width(self.indent_width)
    }
}
