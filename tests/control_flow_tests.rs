//! Branch-mode lowering: label triples, loops, and short-circuit connectives.

mod common;

use common::*;
use quackc::ast::{BinOp, Expr};
use quackc::translate;

#[test]
fn test_if_else_emits_label_triple() {
    // if (a < b) { x = 1; } else { x = 2; }
    let program = main_program(vec![
        assign("a", Expr::int("1")),
        assign("b", Expr::int("2")),
        if_stmt(
            Expr::less(Expr::load("a"), Expr::load("b")),
            vec![assign("x", Expr::int("1"))],
            vec![assign("x", Expr::int("2"))],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert_eq!(
        asm,
        "\
.class Main:Obj
.method $constructor
.locals a, b, x
const 1
store a
const 2
store b
load a
load b
call Int:less
jump_if then_1
jump else_2
then_1:
const 1
store x
jump endif_3
else_2:
const 2
store x
endif_3:
const nothing
return 0
"
    );
}

#[test]
fn test_while_tests_condition_before_body() {
    // i = 0; while (i < 3) { i = i + 1; }
    let program = main_program(vec![
        assign("i", Expr::int("0")),
        while_stmt(
            Expr::less(Expr::load("i"), Expr::int("3")),
            vec![assign(
                "i",
                Expr::binary(BinOp::Plus, Expr::load("i"), Expr::int("1")),
            )],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert_eq!(
        asm,
        "\
.class Main:Obj
.method $constructor
.locals i
const 0
store i
cond_1:
load i
const 3
call Int:less
jump_if loop_2
jump endloop_3
loop_2:
load i
const 1
call Int:plus
store i
jump cond_1
endloop_3:
const nothing
return 0
"
    );
}

#[test]
fn test_and_short_circuits_through_continue_label() {
    let program = main_program(vec![
        assign("a", Expr::int("1")),
        assign("b", Expr::int("2")),
        assign("c", Expr::int("3")),
        if_stmt(
            Expr::and(
                Expr::less(Expr::load("a"), Expr::load("b")),
                Expr::less(Expr::load("b"), Expr::load("c")),
            ),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let asm = translate(&program).unwrap();
    // The left operand falls through to the fresh `and` label on success and
    // bails straight to `else` on failure.
    assert!(
        asm.contains(
            "load a\nload b\ncall Int:less\njump_if and_4\njump else_2\nand_4:\nload b\nload c\ncall Int:less\njump_if then_1\njump else_2\n"
        ),
        "{asm}"
    );
}

#[test]
fn test_or_short_circuits_through_continue_label() {
    let program = main_program(vec![
        assign("a", Expr::int("1")),
        assign("b", Expr::int("2")),
        if_stmt(
            Expr::or(
                Expr::less(Expr::load("a"), Expr::load("b")),
                Expr::less(Expr::load("b"), Expr::load("a")),
            ),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(
        asm.contains(
            "load a\nload b\ncall Int:less\njump_if then_1\njump or_4\nor_4:\nload b\nload a\ncall Int:less\njump_if then_1\njump else_2\n"
        ),
        "{asm}"
    );
}

#[test]
fn test_not_swaps_branch_targets() {
    let program = main_program(vec![
        assign("a", Expr::int("1")),
        if_stmt(
            Expr::not(Expr::less(Expr::load("a"), Expr::int("2"))),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(
        asm.contains("call Int:less\njump_if else_2\njump then_1\n"),
        "{asm}"
    );
}

#[test]
fn test_greater_is_swapped_less() {
    // a > b is lowered as b < a at tree-construction time.
    let program = main_program(vec![
        assign("a", Expr::int("1")),
        assign("b", Expr::int("2")),
        if_stmt(
            Expr::greater(Expr::load("a"), Expr::load("b")),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("load b\nload a\ncall Int:less\n"), "{asm}");
}

#[test]
fn test_string_comparison_dispatches_to_string() {
    let program = main_program(vec![
        assign("s", Expr::string("\"abc\"")),
        assign("t", Expr::string("\"abd\"")),
        if_stmt(
            Expr::less(Expr::load("s"), Expr::load("t")),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("load s\nload t\ncall String:less\n"), "{asm}");
}

#[test]
fn test_int_evidence_wins_over_untyped_side() {
    let program = main_program(vec![
        assign("i", Expr::int("1")),
        assign("o", Expr::call(Expr::string("\"x\""), "string", vec![])),
        if_stmt(
            Expr::equals(Expr::load("i"), Expr::load("o")),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("load i\nload o\ncall Int:equals\n"), "{asm}");
}

#[test]
fn test_method_call_refuses_branch_mode() {
    // A call never materializes a boolean, so it cannot drive a branch.
    let program = main_program(vec![
        assign("i", Expr::int("1")),
        if_stmt(
            Expr::call(Expr::load("i"), "equals", vec![Expr::int("2")]),
            vec![assign("x", Expr::int("1"))],
            vec![],
        ),
    ]);
    let err = translate(&program).unwrap_err();
    assert!(matches!(err, quackc::Error::UnsupportedMode { .. }));
    assert_eq!(
        err.to_string(),
        "method call node does not support branch evaluation"
    );
}

#[test]
fn test_labels_stay_unique_across_statements() {
    let cond = |a: &str, b: &str| Expr::less(Expr::load(a), Expr::load(b));
    let program = main_program(vec![
        assign("a", Expr::int("1")),
        assign("b", Expr::int("2")),
        if_stmt(cond("a", "b"), vec![assign("x", Expr::int("1"))], vec![]),
        if_stmt(cond("b", "a"), vec![assign("x", Expr::int("2"))], vec![]),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("then_1:"), "{asm}");
    assert!(asm.contains("endif_3:"), "{asm}");
    assert!(asm.contains("then_4:"), "{asm}");
    assert!(asm.contains("endif_6:"), "{asm}");
}
