//! Integration tests for program assembly
//!
//! Uses a small but realistic runtime so the output reads like a real unit.

use lumen_foundation::ErrorKind;
use lumen_language::{
    Assembler, Call, CodegenOptions, Expr, FragmentKind, FunctionDef, RuntimeFragments, assemble,
};

const UTILS_H: &str = "#ifndef UTILS_H\n#define UTILS_H\n#include <stdio.h>\nvoid fail(const char* msg);\n#endif";
const VALUE_H: &str = "#ifndef VALUE_H\n#define VALUE_H\n#include \"utils.h\"\ntypedef struct Value Value;\nValue* none_value(void);\n#endif";
const UTILS_C: &str = "#include \"utils.h\"\nvoid fail(const char* msg) { fputs(msg, stderr); }";
const VALUE_C: &str = "#include \"value.h\"\n#include <stdlib.h>\nValue* none_value(void) { return NULL; }";
const BUILTINS_C: &str = "#include \"value.h\"\nValue* _print(Value* v) { return v; }";
const ENTRY_C: &str = "int main(void)\n{\n    _main();\n    return 0;\n}";

fn runtime() -> RuntimeFragments {
    RuntimeFragments::new()
        .with(FragmentKind::UtilsHeader, UTILS_H)
        .with(FragmentKind::ValueHeader, VALUE_H)
        .with(FragmentKind::UtilsSource, UTILS_C)
        .with(FragmentKind::ValueSource, VALUE_C)
        .with(FragmentKind::BuiltinsSource, BUILTINS_C)
        .with(FragmentKind::Entry, ENTRY_C)
}

fn program() -> Vec<FunctionDef> {
    vec![
        FunctionDef::new(
            "main",
            &[],
            vec![
                Call::new("print", 1, vec![Expr::call("foo", 1, vec![Expr::int("41")])]),
                Call::new("null", 2, vec![]),
            ],
        ),
        FunctionDef::new(
            "foo",
            &["n"],
            vec![Call::new("add", 5, vec![Expr::name("n"), Expr::int("1")])],
        ),
    ]
}

#[test]
fn one_declaration_per_user_function() {
    let defs = vec![FunctionDef::new(
        "foo",
        &["x"],
        vec![Call::new("return", 1, vec![Expr::name("x")])],
    )];
    let out = assemble(&defs, &runtime()).unwrap();
    assert_eq!(out.matches("Value* _foo(Value*);").count(), 1);
    assert_eq!(out.matches("Value* _foo(Value* _x)\n{").count(), 1);
    // Built-ins are never declared by the generator.
    assert!(!out.contains("Value* _add("));
    assert!(!out.contains("Value* _return(Value*);"));
}

#[test]
fn assembly_is_deterministic() {
    let fragments = runtime();
    let first = assemble(&program(), &fragments).unwrap();
    let second = assemble(&program(), &fragments).unwrap();
    assert_eq!(first, second);
}

#[test]
fn runtime_includes_are_resolved_structurally() {
    let out = assemble(&program(), &runtime()).unwrap();
    assert!(!out.contains("#include \"utils.h\""));
    assert!(!out.contains("#include \"value.h\""));
    assert!(out.contains("#include <stdio.h>"));
    assert!(out.contains("#include <stdlib.h>"));
    assert!(out.contains("#define VALUE_H"));
}

#[test]
fn guarded_system_include_does_not_hide_later_one() {
    let fragments = runtime()
        .with(
            FragmentKind::UtilsHeader,
            "#ifdef _WIN32\n#include <windows.h>\n#endif\nvoid fail(const char* msg);",
        )
        .with(
            FragmentKind::BuiltinsSource,
            "#include <windows.h>\nValue* _print(Value* v) { return v; }",
        );
    let out = assemble(&[], &fragments).unwrap();
    assert_eq!(out.matches("#include <windows.h>").count(), 2);
    assert!(out.contains("#include <windows.h>\nValue* _print("));
}

#[test]
fn full_unit_layout() {
    let out = assemble(&program(), &runtime()).unwrap();
    let expected_tail = "\n\nValue* _main();\nValue* _foo(Value*);\n\n\
        Value* _main()\n{\n    _print(_foo(int_value(41)));\n    return _null();\n}\n\n\
        Value* _foo(Value* _n)\n{\n    return _add(_n, int_value(1));\n}\n\n\
        int main(void)\n{\n    _main();\n    return 0;\n}\n";
    assert!(out.ends_with(expected_tail), "unexpected output:\n{out}");
    assert!(out.starts_with("\n#ifndef UTILS_H\n"));
}

#[test]
fn runtime_text_is_not_reindented() {
    let fragments = runtime().with(
        FragmentKind::BuiltinsSource,
        "Value* _print(Value* v)\n{\n\treturn v;\n}",
    );
    let out = Assembler::new(&fragments)
        .with_options(CodegenOptions::default().with_indent_width(2))
        .assemble(&program())
        .unwrap();
    assert!(out.contains("{\n\treturn v;\n}"));
    assert!(out.contains("\n  return _add(_n, int_value(1));\n"));
}

#[test]
fn error_discards_everything() {
    let mut defs = program();
    defs.push(FunctionDef::new(
        "late",
        &[],
        vec![Call::new("split", 30, vec![Expr::string("a,b")])],
    ));
    let err = assemble(&defs, &runtime()).expect_err("should fail");
    assert!(matches!(
        err.kind,
        ErrorKind::ArityError {
            line: 30,
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn empty_program_still_links_runtime() {
    let out = assemble(&[], &runtime()).unwrap();
    assert!(out.contains("Value* none_value(void) { return NULL; }"));
    assert!(out.ends_with("return 0;\n}\n"));
}
