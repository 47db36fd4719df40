//! Abstract Syntax Tree consumed by the code generator.
//!
//! The tree is produced by the external parser and is never mutated here.
//! Function bodies hold [`Call`]s only, so a bare literal or name can never
//! appear as a body statement.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An identifier together with the line it was written on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ident {
    /// The identifier text.
    pub value: String,
    /// 1-based source line, 0 when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub line: u32,
}

impl Ident {
    /// Creates an identifier with no line information.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            line: 0,
        }
    }

    /// Creates an identifier on the given line.
    #[must_use]
    pub fn at(value: impl Into<String>, line: u32) -> Self {
        Self {
            value: value.into(),
            line,
        }
    }
}

/// Literal token text, kept exactly as the parser produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    /// Source text of the literal (for strings, the content between quotes).
    pub value: String,
}

impl Literal {
    /// Creates a literal from its source text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A function application.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The callee; its line is reported in diagnostics.
    pub name: Ident,
    /// Arguments in source order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<Expr>,
}

impl Call {
    /// Creates a call on the given line.
    #[must_use]
    pub fn new(name: impl Into<String>, line: u32, args: Vec<Expr>) -> Self {
        Self {
            name: Ident::at(name, line),
            args,
        }
    }
}

/// A value expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Expr {
    /// Integer literal like `42`
    Int(Literal),
    /// Float literal like `2.5`
    Float(Literal),
    /// String literal like `"hello"`
    String(Literal),
    /// Reference to a bound parameter
    Name(Ident),
    /// Array literal like `[1, 2, 3]`
    Array {
        /// Elements in source order.
        values: Vec<Expr>,
    },
    /// Eager conditional; both arms are expressions.
    Branch {
        /// Value coerced to a boolean at runtime.
        condition: Box<Expr>,
        /// Result when the condition holds.
        truthy: Box<Expr>,
        /// Result otherwise.
        falsy: Box<Expr>,
    },
    /// Function application
    Call(Call),
}

impl Expr {
    /// Creates an integer literal.
    #[must_use]
    pub fn int(text: impl Into<String>) -> Self {
        Self::Int(Literal::new(text))
    }

    /// Creates a float literal.
    #[must_use]
    pub fn float(text: impl Into<String>) -> Self {
        Self::Float(Literal::new(text))
    }

    /// Creates a string literal from its unquoted content.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(Literal::new(text))
    }

    /// Creates a name reference.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(Ident::new(name))
    }

    /// Creates an array literal.
    #[must_use]
    pub fn array(values: Vec<Self>) -> Self {
        Self::Array { values }
    }

    /// Creates a conditional.
    #[must_use]
    pub fn branch(condition: Self, truthy: Self, falsy: Self) -> Self {
        Self::Branch {
            condition: Box::new(condition),
            truthy: Box::new(truthy),
            falsy: Box::new(falsy),
        }
    }

    /// Creates a call expression.
    #[must_use]
    pub fn call(name: impl Into<String>, line: u32, args: Vec<Self>) -> Self {
        Self::Call(Call::new(name, line, args))
    }

    /// A human-readable type name for this node.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Name(_) => "name",
            Self::Array { .. } => "array",
            Self::Branch { .. } => "branch",
            Self::Call(_) => "call",
        }
    }
}

/// A top-level named function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionDef {
    /// Function name.
    pub name: Ident,
    /// Formal parameters in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<Ident>,
    /// Statements; all but the last are evaluated for effect only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: Vec<Call>,
}

impl FunctionDef {
    /// Creates a definition from plain names.
    #[must_use]
    pub fn new(name: impl Into<String>, args: &[&str], body: Vec<Call>) -> Self {
        Self {
            name: Ident::new(name),
            args: args.iter().map(|arg| Ident::new(*arg)).collect(),
            body,
        }
    }

    /// Number of formal parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, self.args.as_slice())?;
        write!(f, ")")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(lit) | Self::Float(lit) => f.write_str(&lit.value),
            Self::String(lit) => write!(f, "\"{}\"", lit.value),
            Self::Name(ident) => write!(f, "{ident}"),
            Self::Array { values } => {
                write!(f, "[")?;
                write_list(f, values.as_slice())?;
                write!(f, "]")
            }
            Self::Branch {
                condition,
                truthy,
                falsy,
            } => write!(f, "{condition} ? {truthy} : {falsy}"),
            Self::Call(call) => write!(f, "{call}"),
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, self.args.as_slice())?;
        write!(f, ") = [")?;
        write_list(f, self.body.as_slice())?;
        write!(f, "]")
    }
}
