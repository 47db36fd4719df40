//! Integration tests for the function table
//!
//! The built-in list is part of the language's contract with the runtime.

use lumen_language::{BUILTINS, FunctionDef, FunctionTable};

#[test]
fn builtin_list_is_exact() {
    let expected: &[(&str, usize)] = &[
        ("null", 0),
        ("false", 0),
        ("true", 0),
        ("add", 2),
        ("sub", 2),
        ("mul", 2),
        ("div", 2),
        ("mod", 2),
        ("pow", 2),
        ("sqrt", 1),
        ("string", 1),
        ("at", 2),
        ("length", 1),
        ("join", 2),
        ("split", 2),
        ("map", 1),
        ("reduce", 3),
        ("reduceRight", 3),
        ("repeat", 2),
        ("if", 3),
        ("return", 1),
        ("print", 1),
        ("input", 1),
    ];
    assert_eq!(BUILTINS, expected);
}

#[test]
fn user_entries_keep_source_order() {
    let defs = vec![
        FunctionDef::new("zeta", &["a", "b", "c"], vec![]),
        FunctionDef::new("alpha", &[], vec![]),
    ];
    let table = FunctionTable::new(&defs);
    let user: Vec<_> = table
        .user_defined()
        .map(|e| (e.name.as_str(), e.argc))
        .collect();
    assert_eq!(user, [("zeta", 3), ("alpha", 0)]);
    assert_eq!(table.len(), BUILTINS.len() + 2);
}

#[test]
fn first_match_wins_for_duplicates() {
    let defs = vec![
        FunctionDef::new("twice", &["x"], vec![]),
        FunctionDef::new("twice", &["x", "y"], vec![]),
    ];
    let table = FunctionTable::new(&defs);
    assert_eq!(table.lookup("twice").map(|e| e.argc), Some(1));
}

#[test]
fn builtin_named_user_function_is_shadowed() {
    let defs = vec![FunctionDef::new("length", &[], vec![])];
    let table = FunctionTable::new(&defs);
    let entry = table.lookup("length").expect("length");
    assert!(!entry.userdef);
    assert_eq!(entry.argc, 1);
}

#[test]
fn custom_builtin_list() {
    let table = FunctionTable::build(&[("exit", 1)], &[FunctionDef::new("main", &[], vec![])]);
    assert_eq!(table.builtins().count(), 1);
    assert!(table.lookup("print").is_none());
    assert!(table.contains("main"));
}
