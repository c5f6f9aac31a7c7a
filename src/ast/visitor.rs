//! Pre/post-order traversal over the Quack AST
//!
//! A walk fires `pre_visit` on entry to a node, descends into the children in
//! their normalized order, then fires `post_visit` on exit. Child storage is
//! normalized at construction (argument lists live inside call nodes), so no
//! ad hoc list flattening happens here. Both callbacks are fallible and the
//! first error aborts the whole walk.

use super::*;
use crate::error::Result;

/// Borrowed view of any node kind, handed to visitor callbacks.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Class(&'a ClassDecl),
    Method(&'a MethodDecl),
    Formal(&'a Formal),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// Visitor over the AST; both hooks default to no-ops so a phase only
/// overrides the traversal point it cares about.
pub trait Visitor {
    fn pre_visit(&mut self, _node: NodeRef<'_>) -> Result<()> {
        Ok(())
    }

    fn post_visit(&mut self, _node: NodeRef<'_>) -> Result<()> {
        Ok(())
    }
}

pub fn walk_program<V: Visitor>(program: &Program, v: &mut V) -> Result<()> {
    v.pre_visit(NodeRef::Program(program))?;
    for class in &program.classes {
        walk_class(class, v)?;
    }
    v.post_visit(NodeRef::Program(program))
}

/// Declared methods first, then the synthetic constructor.
pub fn walk_class<V: Visitor>(class: &ClassDecl, v: &mut V) -> Result<()> {
    v.pre_visit(NodeRef::Class(class))?;
    for method in &class.methods {
        walk_method(method, v)?;
    }
    walk_method(&class.constructor, v)?;
    v.post_visit(NodeRef::Class(class))
}

pub fn walk_method<V: Visitor>(method: &MethodDecl, v: &mut V) -> Result<()> {
    v.pre_visit(NodeRef::Method(method))?;
    for formal in &method.formals {
        v.pre_visit(NodeRef::Formal(formal))?;
        v.post_visit(NodeRef::Formal(formal))?;
    }
    for stmt in &method.body {
        walk_stmt(stmt, v)?;
    }
    v.post_visit(NodeRef::Method(method))
}

pub fn walk_stmt<V: Visitor>(stmt: &Stmt, v: &mut V) -> Result<()> {
    v.pre_visit(NodeRef::Stmt(stmt))?;
    match stmt {
        Stmt::Assign { target, value, .. } => {
            walk_expr(value, v)?;
            if let LValue::Field { receiver, .. } = target {
                walk_expr(receiver, v)?;
            }
        }
        Stmt::Block(stmts) => {
            for s in stmts {
                walk_stmt(s, v)?;
            }
        }
        Stmt::If {
            cond,
            then_part,
            else_part,
        } => {
            walk_expr(cond, v)?;
            for s in then_part {
                walk_stmt(s, v)?;
            }
            for s in else_part {
                walk_stmt(s, v)?;
            }
        }
        Stmt::While { cond, body } => {
            walk_expr(cond, v)?;
            for s in body {
                walk_stmt(s, v)?;
            }
        }
        Stmt::Return(expr) => {
            if let Some(e) = expr {
                walk_expr(e, v)?;
            }
        }
        Stmt::Expr(e) => walk_expr(e, v)?,
    }
    v.post_visit(NodeRef::Stmt(stmt))
}

pub fn walk_expr<V: Visitor>(expr: &Expr, v: &mut V) -> Result<()> {
    v.pre_visit(NodeRef::Expr(expr))?;
    match expr {
        Expr::IntConst(_) | Expr::StrConst(_) | Expr::Var(_) | Expr::Load(_) => {}
        Expr::LoadField { receiver, .. } => walk_expr(receiver, v)?,
        Expr::Binary { left, right, .. } | Expr::Compare { left, right, .. } => {
            walk_expr(left, v)?;
            walk_expr(right, v)?;
        }
        Expr::And(left, right) | Expr::Or(left, right) => {
            walk_expr(left, v)?;
            walk_expr(right, v)?;
        }
        Expr::Negate(operand) | Expr::Not(operand) => walk_expr(operand, v)?,
        Expr::Call { receiver, args, .. } => {
            walk_expr(receiver, v)?;
            for arg in &args.args {
                walk_expr(arg, v)?;
            }
        }
    }
    v.post_visit(NodeRef::Expr(expr))
}
