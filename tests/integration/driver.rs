//! Integration tests for complete compiler runs
//!
//! Writes an AST file and a runtime directory, then compiles through the
//! runtime crate the same way `lumenc` does.

use std::fs;
use std::path::Path;

use lumen_foundation::ErrorKind;
use lumen_language::{Call, Expr, FragmentKind, FunctionDef};
use lumen_runtime::serialize::save_to_file;
use lumen_runtime::{CompilerConfig, compile_file, run};

fn write_runtime(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for kind in FragmentKind::ALL {
        let text = if kind.is_header() {
            format!("/* {kind} */")
        } else {
            format!("#include \"value.h\"\n/* {kind} */")
        };
        fs::write(dir.join(kind.file_name()), text).unwrap();
    }
}

#[test]
fn compile_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = dir.path().join("runtime");
    write_runtime(&runtime);

    let program = vec![FunctionDef::new(
        "main",
        &[],
        vec![Call::new(
            "print",
            1,
            vec![Expr::call("join", 1, vec![Expr::array(vec![Expr::string("a")]), Expr::string(",")])],
        )],
    )];
    let ast = dir.path().join("main.ast");
    save_to_file(&program, &ast).unwrap();

    let config = CompilerConfig::default().with_fragment_dir(&runtime);
    let out = compile_file(&config, &ast).unwrap();
    assert!(!out.contains("#include"));
    assert!(out.contains("/* builtins.c */"));
    assert!(out.contains(
        "return _print(_join(array_value((Value* []) {string_value(\"a\"), NULL}), string_value(\",\")));"
    ));
}

#[test]
fn missing_runtime_directory() {
    let dir = tempfile::tempdir().unwrap();
    let ast = dir.path().join("main.ast");
    save_to_file(&[FunctionDef::new("main", &[], vec![])], &ast).unwrap();

    let config = CompilerConfig::default().with_fragment_dir(dir.path().join("nope"));
    let err = compile_file(&config, &ast).expect_err("should fail");
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert!(err.to_string().contains("utils.h"));
}

#[test]
fn run_writes_requested_output() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = dir.path().join("runtime");
    write_runtime(&runtime);
    let ast = dir.path().join("main.ast");
    save_to_file(
        &[FunctionDef::new("main", &[], vec![Call::new("input", 1, vec![Expr::string("? ")])])],
        &ast,
    )
    .unwrap();

    let output = dir.path().join("main.c");
    let config = CompilerConfig::default()
        .with_fragment_dir(&runtime)
        .with_output(&output)
        .with_indent_width(3);
    run(&config, &ast).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\n   return _input(string_value(\"? \"));\n"));
}

#[test]
fn undefined_function_reports_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = dir.path().join("runtime");
    write_runtime(&runtime);
    let ast = dir.path().join("broken.ast");
    save_to_file(
        &[FunctionDef::new("main", &[], vec![Call::new("launch", 9, vec![])])],
        &ast,
    )
    .unwrap();

    let config = CompilerConfig::default().with_fragment_dir(&runtime);
    let err = compile_file(&config, &ast).expect_err("should fail");
    assert!(matches!(err.kind, ErrorKind::UndefinedFunction { line: 9, .. }));
    let shown = err.context.expect("context").to_string();
    assert!(shown.contains("broken.ast:9"));
    assert!(shown.contains("in main"));
}
