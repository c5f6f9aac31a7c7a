//! Value-mode code generation and the error taxonomy.

mod common;

use common::*;
use quackc::ast::{BinOp, ClassDecl, Expr, Formal, LValue, MethodDecl, Program, Stmt};
use quackc::{translate, Error};

#[test]
fn test_assign_arithmetic_print_sequence() {
    // i = 42; j = i - 32; j.print();
    let program = main_program(vec![
        assign("i", Expr::int("42")),
        assign("j", Expr::binary(BinOp::Sub, Expr::load("i"), Expr::int("32"))),
        call_stmt(Expr::load("j"), "print"),
    ]);
    let asm = translate(&program).unwrap();
    assert_eq!(
        asm,
        "\
.class Main:Obj
.method $constructor
.locals i, j
const 42
store i
load i
const 32
call Int:sub
store j
load j
call Int:print
pop
const nothing
return 0
"
    );
}

#[test]
fn test_negate_pushes_operand_before_zero() {
    // j = -i computes 0 - i via Int:sub with the operand pushed first.
    let program = main_program(vec![
        assign("i", Expr::int("7")),
        assign("j", Expr::negate(Expr::load("i"))),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("load i\nconst 0\ncall Int:sub\nstore j\n"), "{asm}");
}

#[test]
fn test_string_operands_dispatch_to_string_class() {
    let program = main_program(vec![
        assign("a", Expr::string("\"quack\"")),
        assign(
            "b",
            Expr::binary(BinOp::Plus, Expr::load("a"), Expr::string("\"!\"")),
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("load a\nconst \"!\"\ncall String:plus\nstore b\n"), "{asm}");
}

#[test]
fn test_untyped_operands_dispatch_to_obj() {
    // `a` is recorded as Obj (method-call rhs), so a + a falls back to Obj.
    let program = main_program(vec![
        assign("a", Expr::call(Expr::string("\"x\""), "string", vec![])),
        assign("b", Expr::binary(BinOp::Plus, Expr::load("a"), Expr::load("a"))),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("call Obj:plus\n"), "{asm}");
}

#[test]
fn test_call_arguments_follow_receiver_in_order() {
    // i.plus(1): receiver first, then each argument, then the typed call.
    let program = main_program(vec![
        assign("i", Expr::int("2")),
        assign("j", Expr::call(Expr::load("i"), "plus", vec![Expr::int("1")])),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("load i\nconst 1\ncall Int:plus\nstore j\n"), "{asm}");
}

#[test]
fn test_multi_argument_call_keeps_argument_order() {
    // b.pair(1, 2) on a formal of a user class dispatches through the symbol
    // table with the arguments pushed in declaration order.
    let pair = MethodDecl::with_default_return(
        "pair".to_string(),
        vec![Formal::new("a", "Int"), Formal::new("b", "Int")],
        vec![Stmt::Return(Some(Expr::load("a")))],
    );
    let rect = ClassDecl::new("Rect".to_string(), vec![], "Obj".to_string(), vec![pair], vec![]);
    let show = MethodDecl::with_default_return(
        "show".to_string(),
        vec![Formal::new("r", "Rect")],
        vec![Stmt::Expr(Expr::call(
            Expr::load("r"),
            "pair",
            vec![Expr::int("1"), Expr::int("2")],
        ))],
    );
    let program = Program::new(vec![rect], vec![show], vec![]);
    let asm = translate(&program).unwrap();
    assert!(
        asm.contains("load r\nconst 1\nconst 2\ncall Rect:pair\npop\n"),
        "{asm}"
    );
}

#[test]
fn test_chained_call_dispatches_on_declared_return_type() {
    // a.string() yields a String, so the outer call is String:print.
    let program = main_program(vec![
        assign("a", Expr::string("\"duck\"")),
        call_stmt(Expr::call(Expr::load("a"), "string", vec![]), "print"),
    ]);
    let asm = translate(&program).unwrap();
    assert!(
        asm.contains("load a\ncall String:string\ncall String:print\npop\n"),
        "{asm}"
    );
}

#[test]
fn test_field_store_and_load_through_receiver() {
    let program = main_program(vec![
        assign("p", Expr::call(Expr::string("\"x\""), "string", vec![])),
        Stmt::Assign {
            target: LValue::Field {
                receiver: Expr::load("p"),
                name: "x".to_string(),
            },
            declared: None,
            value: Expr::int("1"),
        },
        assign(
            "y",
            Expr::LoadField {
                receiver: Box::new(Expr::load("p")),
                field: "x".to_string(),
            },
        ),
    ]);
    let asm = translate(&program).unwrap();
    assert!(asm.contains("const 1\nload p\nstore_field x\n"), "{asm}");
    assert!(asm.contains("load p\nload_field x\nstore y\n"), "{asm}");
}

#[test]
fn test_arithmetic_type_mismatch_is_fatal() {
    let program = main_program(vec![
        assign("s", Expr::string("\"hi\"")),
        assign("t", Expr::binary(BinOp::Plus, Expr::int("1"), Expr::load("s"))),
    ]);
    let err = translate(&program).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "type mismatch between Int and String operands of plus"
    );
}

#[test]
fn test_unbound_variable_is_fatal() {
    let program = main_program(vec![call_stmt(Expr::load("ghost"), "print")]);
    let err = translate(&program).unwrap_err();
    assert!(matches!(err, Error::UnboundVariable { .. }));
    assert_eq!(err.to_string(), "unbound variable ghost");
}

#[test]
fn test_unknown_method_is_fatal() {
    let program = main_program(vec![
        assign("i", Expr::int("1")),
        call_stmt(Expr::load("i"), "launch"),
    ]);
    let err = translate(&program).unwrap_err();
    assert!(matches!(err, Error::UnknownMethod { .. }));
    assert_eq!(err.to_string(), "unknown method Int:launch");
}

#[test]
fn test_comparison_refuses_value_mode() {
    let program = main_program(vec![assign(
        "b",
        Expr::less(Expr::int("1"), Expr::int("2")),
    )]);
    let err = translate(&program).unwrap_err();
    assert_eq!(
        err.to_string(),
        "comparison node does not support value evaluation"
    );
}

#[test]
fn test_boolean_connectives_refuse_value_mode() {
    let lhs = Expr::less(Expr::int("1"), Expr::int("2"));
    let rhs = Expr::less(Expr::int("2"), Expr::int("3"));
    let program = main_program(vec![assign("b", Expr::and(lhs, rhs))]);
    let err = translate(&program).unwrap_err();
    assert_eq!(err.to_string(), "and node does not support value evaluation");
}
