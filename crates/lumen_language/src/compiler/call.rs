//! Call resolution.
//!
//! The only place the code generator reports errors.

use lumen_foundation::{Error, Result};
use tracing::trace;

use super::Compiler;
use crate::ast::Call;
use crate::target::mangle;

impl Compiler<'_> {
    /// Resolves a call against the function table and compiles it.
    ///
    /// Fails when the callee is unknown or when fewer arguments than its
    /// arity are supplied. Extra arguments are accepted and all of them are
    /// passed through.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UndefinedFunction`] for an unknown callee and
    /// [`ErrorKind::ArityError`] for a short call, including those raised
    /// by nested arguments.
    ///
    /// [`ErrorKind::UndefinedFunction`]: lumen_foundation::ErrorKind::UndefinedFunction
    /// [`ErrorKind::ArityError`]: lumen_foundation::ErrorKind::ArityError
    pub fn compile_call(&self, call: &Call) -> Result<String> {
        let name = &call.name.value;
        let line = call.name.line;
        let entry = self
            .table()
            .lookup(name)
            .ok_or_else(|| Error::undefined_function(name.as_str(), line))?;

        let args = call
            .args
            .iter()
            .map(|arg| self.compile_value(arg))
            .collect::<Result<Vec<_>>>()?;

        if args.len() < entry.argc {
            return Err(Error::arity(name.as_str(), line, entry.argc, args.len()));
        }

        trace!(
            callee = %name,
            line,
            argc = args.len(),
            userdef = entry.userdef,
            "resolved call"
        );
        Ok(format!("{}({})", mangle(name), args.join(", ")))
    }
}
