// Common test utilities: tree-building shorthand for translator tests.
#![allow(dead_code)]

use quackc::ast::{Expr, LValue, Program, Stmt};

/// A program with no user classes; the statements become the body of the
/// injected Main constructor.
pub fn main_program(stmts: Vec<Stmt>) -> Program {
    Program::new(vec![], vec![], stmts)
}

pub fn assign(name: &str, value: Expr) -> Stmt {
    Stmt::Assign {
        target: LValue::Var(name.to_string()),
        declared: None,
        value,
    }
}

/// A zero-argument method call in statement position.
pub fn call_stmt(receiver: Expr, method: &str) -> Stmt {
    Stmt::Expr(Expr::call(receiver, method, vec![]))
}

pub fn if_stmt(cond: Expr, then_part: Vec<Stmt>, else_part: Vec<Stmt>) -> Stmt {
    Stmt::If {
        cond,
        then_part,
        else_part,
    }
}

pub fn while_stmt(cond: Expr, body: Vec<Stmt>) -> Stmt {
    Stmt::While { cond, body }
}
