//! Lumen compiler entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use lumen_runtime::{CompilerConfig, init_tracing, run};

/// CLI options parsed from arguments.
#[derive(Default)]
struct CliOptions {
    config: CompilerConfig,
    input: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run_cli(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, Box<dyn std::error::Error>> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.show_help = true,
            "-V" | "--version" => options.show_version = true,
            "-v" | "--verbose" => options.config.verbose = true,
            "-o" | "--output" => {
                let path = args.next().ok_or("--output requires a path")?;
                options.config.output = Some(PathBuf::from(path));
            }
            "-r" | "--runtime" => {
                let dir = args.next().ok_or("--runtime requires a directory")?;
                options.config.fragment_dir = PathBuf::from(dir);
            }
            "--indent" => {
                let value = args.next().ok_or("--indent requires a value")?;
                options.config.indent_width = value
                    .parse()
                    .map_err(|_| format!("invalid --indent value: {value}"))?;
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => {
                if options.input.replace(PathBuf::from(path)).is_some() {
                    return Err("only one AST file may be given".into());
                }
            }
        }
    }

    Ok(options)
}

fn run_cli(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let options = parse_args(args)?;

    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.show_version {
        println!("lumenc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(options.config.verbose);

    let input = options.input.ok_or("no AST file given (see --help)")?;
    if let Err(err) = run(&options.config, &input) {
        if let Some(context) = &err.context {
            eprintln!("{context}");
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mlumenc\x1b[0m - Compile a parsed Lumen program to C

\x1b[1mUSAGE:\x1b[0m
    lumenc [OPTIONS] <AST_FILE>

\x1b[1mARGUMENTS:\x1b[0m
    <AST_FILE>    MessagePack program produced by the Lumen parser

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -o, --output PATH    Write C source to PATH instead of stdout
    -r, --runtime DIR    Read runtime fragments from DIR (default: ./source)
    --indent N           Spaces per indentation level (default: 4)
    -v, --verbose        Log each compiled function to stderr

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG             Overrides the log filter, e.g. RUST_LOG=lumen_language=trace

\x1b[1mEXAMPLES:\x1b[0m
    lumenc prog.ast                  Print C for prog.ast
    lumenc -o prog.c prog.ast        Write C to prog.c
    lumenc -r runtime/ prog.ast      Use fragments from runtime/"
    );
}
