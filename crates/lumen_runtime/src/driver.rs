//! End-to-end compiler runs: load inputs, assemble, write output.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use lumen_foundation::{Error, ErrorContext, Result};
use lumen_language::Assembler;
use tracing::info;

use crate::config::CompilerConfig;
use crate::fragments::load_fragments;
use crate::serialize::load_from_file;

/// Compiles the program stored at `ast_path` into C source.
///
/// Compile errors are annotated with the input path.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, an input cannot be
/// read, or the program does not compile.
pub fn compile_file<P: AsRef<Path>>(config: &CompilerConfig, ast_path: P) -> Result<String> {
    let ast_path = ast_path.as_ref();
    config.validate()?;

    let program = load_from_file(ast_path)?;
    let fragments = load_fragments(&config.fragment_dir)?;

    Assembler::new(&fragments)
        .with_options(config.codegen_options())
        .assemble(&program)
        .map_err(|err| annotate(err, ast_path))
}

/// Compiles `ast_path` and writes the result to the configured output.
///
/// Nothing is written when compilation fails.
///
/// # Errors
///
/// Returns an error if compilation fails or the output cannot be written.
pub fn run<P: AsRef<Path>>(config: &CompilerConfig, ast_path: P) -> Result<()> {
    let source = compile_file(config, ast_path)?;

    match &config.output {
        Some(path) => {
            fs::write(path, &source).map_err(|e| {
                Error::io(format!("failed to write output '{}': {e}", path.display()))
            })?;
            info!(output = %path.display(), bytes = source.len(), "wrote C source");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| Error::io(format!("failed to write to stdout: {e}")))?;
        }
    }
    Ok(())
}

fn annotate(err: Error, ast_path: &Path) -> Error {
    let line = err.line();
    let mut context = err.context.clone().unwrap_or_else(ErrorContext::new);
    context.source = Some(ast_path.display().to_string());
    context.line = context.line.or(line);
    err.with_context(context)
}
