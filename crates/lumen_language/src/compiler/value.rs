//! Value expressions.

use lumen_foundation::Result;
use tracing::trace;

use super::Compiler;
use crate::ast::{Expr, Ident, Literal};
use crate::target::{
    ARRAY_CTOR, ARRAY_TERMINATOR, FLOAT_CTOR, INT_CTOR, STRING_CTOR, TRUTHINESS, VALUE_TYPE,
    escape_c_string, mangle,
};

impl Compiler<'_> {
    /// Compiles one value node into a single C expression.
    ///
    /// Only calls can fail; every other node kind is a direct rewrite.
    /// Nested arrays, branches and calls are compiled recursively, so
    /// nesting depth is bounded only by the stack.
    ///
    /// # Errors
    ///
    /// Returns an error if a call inside `node` cannot be resolved.
    pub fn compile_value(&self, node: &Expr) -> Result<String> {
        trace!(kind = node.type_name(), "compiling value");
        match node {
            Expr::Int(lit) => Ok(Self::compile_int(lit)),
            Expr::Float(lit) => Ok(Self::compile_float(lit)),
            Expr::String(lit) => Ok(Self::compile_string(lit)),
            Expr::Name(ident) => Ok(Self::compile_name(ident)),
            Expr::Array { values } => self.compile_array(values),
            Expr::Branch {
                condition,
                truthy,
                falsy,
            } => self.compile_branch(condition, truthy, falsy),
            Expr::Call(call) => self.compile_call(call),
        }
    }

    fn compile_int(lit: &Literal) -> String {
        format!("{INT_CTOR}({})", lit.value)
    }

    fn compile_float(lit: &Literal) -> String {
        format!("{FLOAT_CTOR}({})", lit.value)
    }

    fn compile_string(lit: &Literal) -> String {
        format!("{STRING_CTOR}(\"{}\")", escape_c_string(&lit.value))
    }

    fn compile_name(ident: &Ident) -> String {
        mangle(&ident.value)
    }

    fn compile_array(&self, values: &[Expr]) -> Result<String> {
        let mut elements = values
            .iter()
            .map(|value| self.compile_value(value))
            .collect::<Result<Vec<_>>>()?;
        elements.push(ARRAY_TERMINATOR.to_string());
        Ok(format!(
            "{ARRAY_CTOR}(({VALUE_TYPE} []) {{{}}})",
            elements.join(", ")
        ))
    }

    fn compile_branch(&self, condition: &Expr, truthy: &Expr, falsy: &Expr) -> Result<String> {
        let condition = self.compile_value(condition)?;
        let truthy = self.compile_value(truthy)?;
        let falsy = self.compile_value(falsy)?;
        Ok(format!("({TRUTHINESS}({condition}) ? {truthy} : {falsy})"))
    }
}
