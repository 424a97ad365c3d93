mod common;

use common::lox;

#[test]
fn assignment_writes_through_to_outer_scope() {
    lox("run", "var a = 1; { a = 2; } print a;")
        .success()
        .stdout("2\n");
}

#[test]
fn declaration_defaults_to_nil() {
    lox("run", "var a; print a;").success().stdout("nil\n");
}

#[test]
fn block_scope_is_dropped() {
    lox("run", "{ var a = 1; } print a;")
        .code(70)
        .stderr("Undefined variable 'a'.\n[line 1]\n");
}

#[test]
fn inner_declaration_shadows_without_clobbering() {
    lox("run", "var a = \"outer\"; { var a = \"inner\"; print a; } print a;")
        .success()
        .stdout("inner\nouter\n");
}

#[test]
fn assignment_to_undeclared_is_an_error() {
    lox("run", "ghost = 1;")
        .code(70)
        .stderr("Undefined variable 'ghost'.\n[line 1]\n");
}

#[test]
fn loop_body_scope_resets_each_iteration() {
    let source = "var i = 0; while (i < 2) { var x = i; print x; i = i + 1; }";

    lox("run", source).success().stdout("0\n1\n");
}
