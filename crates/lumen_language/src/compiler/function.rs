//! Function bodies, definitions and forward declarations.

use lumen_foundation::Result;
use tracing::debug;

use super::Compiler;
use crate::ast::{Call, FunctionDef};
use crate::table::FunctionTable;
use crate::target::{RETURN_NONE, VALUE_TYPE, mangle, parameter_types};

/// Separator between body statements, before tab expansion.
const STATEMENT_SEPARATOR: &str = "\n\t";

impl Compiler<'_> {
    /// Compiles a function body into newline-separated statements.
    ///
    /// Every call becomes an expression statement except the last, which is
    /// returned. An empty body returns the "none" value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while resolving a call.
    pub fn compile_body(&self, calls: &[Call]) -> Result<String> {
        let mut statements = calls
            .iter()
            .map(|call| self.compile_call(call).map(|expr| format!("{expr};")))
            .collect::<Result<Vec<_>>>()?;

        match statements.last_mut() {
            Some(last) => last.insert_str(0, "return "),
            None => statements.push(RETURN_NONE.to_string()),
        }

        Ok(statements.join(STATEMENT_SEPARATOR))
    }

    /// Compiles a top-level definition into a C function definition.
    ///
    /// Errors raised inside the body are tagged with the function's name.
    ///
    /// # Errors
    ///
    /// Returns the first body error, with the function pushed as a frame.
    pub fn compile_def(&self, def: &FunctionDef) -> Result<String> {
        let params = def
            .args
            .iter()
            .map(|arg| format!("{VALUE_TYPE} {}", mangle(&arg.value)))
            .collect::<Vec<_>>()
            .join(", ");
        let body = self
            .compile_body(&def.body)
            .map_err(|err| err.in_frame(def.name.value.as_str()))?;

        debug!(
            function = %def.name,
            params = def.args.len(),
            statements = def.body.len().max(1),
            "compiled function"
        );

        let text = format!(
            "{VALUE_TYPE} {}({params})\n{{\n\t{body}\n}}",
            mangle(&def.name.value)
        );
        Ok(self.options().expand_tabs(&text))
    }
}

/// Emits one prototype per user-defined function, in table order.
///
/// Built-ins are declared by the runtime fragments and are skipped.
#[must_use]
pub fn forward_declarations(table: &FunctionTable) -> String {
    table
        .user_defined()
        .map(|entry| {
            format!(
                "{VALUE_TYPE} {}({});",
                mangle(&entry.name),
                parameter_types(entry.argc)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
