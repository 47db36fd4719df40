//! Error types for the Lumen code generator.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every compile error is fatal: it travels back to the caller through
//! `Result` and no partial output survives it.

use std::fmt;

use thiserror::Error;

/// The main error type for Lumen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating one if needed.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an undefined function error.
    #[must_use]
    pub fn undefined_function(name: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::UndefinedFunction {
            name: name.into(),
            line,
        })
    }

    /// Creates an arity error for a call that supplied too few arguments.
    #[must_use]
    pub fn arity(name: impl Into<String>, line: u32, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityError {
            name: name.into(),
            line,
            expected,
            actual,
        })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Returns the source line this error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        match &self.kind {
            ErrorKind::UndefinedFunction { line, .. } | ErrorKind::ArityError { line, .. } => {
                Some(*line)
            }
            _ => self.context.as_ref().and_then(|ctx| ctx.line),
        }
    }

    /// Returns true if this error was raised while compiling the program,
    /// as opposed to loading inputs or writing output.
    #[must_use]
    pub const fn is_compile_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UndefinedFunction { .. } | ErrorKind::ArityError { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A call names a function that is neither built in nor user defined.
    #[error("function '{name}' not defined (line {line})")]
    UndefinedFunction {
        /// The callee name as written in the source.
        name: String,
        /// Line of the call site.
        line: u32,
    },

    /// A call supplies fewer arguments than the callee's arity.
    #[error("not enough args on line {line}: '{name}' expects {expected}, got {actual}")]
    ArityError {
        /// The callee name as written in the source.
        name: String,
        /// Line of the call site.
        line: u32,
        /// Arity of the resolved function.
        expected: usize,
        /// Number of arguments the call supplied.
        actual: usize,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding or decoding the AST failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Input file the program came from.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Enclosing definitions, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
