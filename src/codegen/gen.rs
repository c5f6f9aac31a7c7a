//! Dual-mode code generation
//!
//! Every expression can be asked for its value (emit instructions that leave
//! exactly one result on the operand stack) or, for the boolean forms, for a
//! branch (emit instructions that transfer control to one of two
//! caller-chosen labels without ever materializing a boolean). Statements and
//! methods compose the two modes; the short-circuit lowering of `and`/`or`
//! lives entirely in branch mode.

use crate::analysis::SymbolTable;
use crate::ast::{BinOp, ClassDecl, Expr, LValue, MethodDecl, Program, Stmt};
use crate::codegen::builtins::BuiltinTable;
use crate::codegen::emitter::{ClassCode, MethodCode};
use crate::codegen::instr::Instr;
use crate::codegen::label::LabelAllocator;
use crate::codegen::types::{TypeTable, TypeTag};
use crate::error::{Error, EvalMode, Result};

/// Code generator for one translation unit.
///
/// Owns the label allocator; the symbol and type tables arrive read-only from
/// the analysis phases. Nothing here is global, so independent units can be
/// translated back to back (or in parallel) without sharing state.
pub struct Gen<'a> {
    symbols: &'a SymbolTable,
    types: &'a TypeTable,
    builtins: &'a BuiltinTable,
    labels: LabelAllocator,
    current_class: Option<&'a ClassDecl>,
    current_method: Option<&'a MethodDecl>,
}

impl<'a> Gen<'a> {
    pub fn new(symbols: &'a SymbolTable, types: &'a TypeTable, builtins: &'a BuiltinTable) -> Self {
        Self {
            symbols,
            types,
            builtins,
            labels: LabelAllocator::new(),
            current_class: None,
            current_method: None,
        }
    }

    pub fn gen_program(&mut self, program: &'a Program) -> Result<Vec<ClassCode>> {
        program
            .classes
            .iter()
            .map(|class| self.gen_class(class))
            .collect()
    }

    fn gen_class(&mut self, class: &'a ClassDecl) -> Result<ClassCode> {
        self.current_class = Some(class);
        let constructor = self.gen_method(class, &class.constructor)?;
        let methods = class
            .methods
            .iter()
            .map(|method| self.gen_method(class, method))
            .collect::<Result<Vec<_>>>()?;
        Ok(ClassCode {
            name: class.name.clone(),
            super_class: class.super_class.clone(),
            fields: class.formals.iter().map(|f| f.name.clone()).collect(),
            constructor,
            methods,
        })
    }

    fn gen_method(&mut self, class: &'a ClassDecl, method: &'a MethodDecl) -> Result<MethodCode> {
        self.current_method = Some(method);
        let mut code = Vec::new();
        for stmt in &method.body {
            self.gen_stmt(stmt, &mut code)?;
        }
        let info = self.symbols.method(&class.name, &method.name).ok_or_else(|| {
            Error::internal(format!(
                "method {}.{} missing from symbol table",
                class.name, method.name
            ))
        })?;
        Ok(MethodCode {
            name: method.name.clone(),
            args: method.formals.iter().map(|f| f.name.clone()).collect(),
            locals: info.locals.iter().map(|(name, _)| name.clone()).collect(),
            code,
        })
    }

    fn gen_stmt(&mut self, stmt: &Stmt, code: &mut Vec<Instr>) -> Result<()> {
        match stmt {
            Stmt::Assign { target, value, .. } => {
                self.gen_value(value, code)?;
                match target {
                    LValue::Var(name) => code.push(Instr::Store(name.clone())),
                    LValue::Field { receiver, name } => {
                        self.gen_value(receiver, code)?;
                        code.push(Instr::StoreField(name.clone()));
                    }
                }
            }
            Stmt::Block(stmts) => {
                for s in stmts {
                    self.gen_stmt(s, code)?;
                }
            }
            Stmt::If {
                cond,
                then_part,
                else_part,
            } => {
                let then_label = self.labels.fresh("then");
                let else_label = self.labels.fresh("else");
                let endif_label = self.labels.fresh("endif");
                self.gen_branch(cond, &then_label, &else_label, code)?;
                code.push(Instr::Label(then_label));
                for s in then_part {
                    self.gen_stmt(s, code)?;
                }
                code.push(Instr::Jump(endif_label.clone()));
                code.push(Instr::Label(else_label));
                for s in else_part {
                    self.gen_stmt(s, code)?;
                }
                code.push(Instr::Label(endif_label));
            }
            Stmt::While { cond, body } => {
                let cond_label = self.labels.fresh("cond");
                let loop_label = self.labels.fresh("loop");
                let endloop_label = self.labels.fresh("endloop");
                code.push(Instr::Label(cond_label.clone()));
                self.gen_branch(cond, &loop_label, &endloop_label, code)?;
                code.push(Instr::Label(loop_label));
                for s in body {
                    self.gen_stmt(s, code)?;
                }
                code.push(Instr::Jump(cond_label));
                code.push(Instr::Label(endloop_label));
            }
            Stmt::Return(expr) => {
                // The `return N` instruction itself belongs to method
                // emission; only the returned value is generated here.
                if let Some(e) = expr {
                    self.gen_value(e, code)?;
                }
            }
            Stmt::Expr(e) => {
                self.gen_value(e, code)?;
                code.push(Instr::Pop);
            }
        }
        Ok(())
    }

    /// Value mode: net stack effect is exactly +1.
    fn gen_value(&mut self, expr: &Expr, code: &mut Vec<Instr>) -> Result<()> {
        match expr {
            Expr::IntConst(lit) | Expr::StrConst(lit) => {
                code.push(Instr::Const(lit.clone()));
            }
            Expr::Var(name) | Expr::Load(name) => {
                self.check_bound(name)?;
                code.push(Instr::Load(name.clone()));
            }
            Expr::LoadField { receiver, field } => {
                self.gen_value(receiver, code)?;
                code.push(Instr::LoadField(field.clone()));
            }
            Expr::Binary { op, left, right } => {
                let class = self.binary_call_class(*op, left, right)?;
                self.gen_value(left, code)?;
                self.gen_value(right, code)?;
                code.push(Instr::Call {
                    class,
                    method: op.as_str().to_string(),
                });
            }
            Expr::Negate(operand) => {
                // Computes 0 - x; the operand-before-zero ordering is the
                // reference behavior and is covered by a regression test.
                self.gen_value(operand, code)?;
                code.push(Instr::Const("0".to_string()));
                code.push(Instr::Call {
                    class: "Int".to_string(),
                    method: "sub".to_string(),
                });
            }
            Expr::Call {
                receiver,
                method,
                args,
            } => {
                let class = self.receiver_class(receiver)?;
                self.check_call(&class, method)?;
                self.gen_value(receiver, code)?;
                for arg in &args.args {
                    self.gen_value(arg, code)?;
                }
                code.push(Instr::Call {
                    class,
                    method: method.clone(),
                });
            }
            Expr::And(..) | Expr::Or(..) | Expr::Not(_) | Expr::Compare { .. } => {
                return Err(Error::unsupported_mode(expr.kind(), EvalMode::Value));
            }
        }
        Ok(())
    }

    /// Branch mode: transfer control to exactly one of the two labels, with
    /// net stack effect zero.
    fn gen_branch(
        &mut self,
        expr: &Expr,
        true_label: &str,
        false_label: &str,
        code: &mut Vec<Instr>,
    ) -> Result<()> {
        match expr {
            Expr::And(left, right) => {
                let continue_label = self.labels.fresh("and");
                self.gen_branch(left, &continue_label, false_label, code)?;
                code.push(Instr::Label(continue_label));
                self.gen_branch(right, true_label, false_label, code)
            }
            Expr::Or(left, right) => {
                let continue_label = self.labels.fresh("or");
                self.gen_branch(left, true_label, &continue_label, code)?;
                code.push(Instr::Label(continue_label));
                self.gen_branch(right, true_label, false_label, code)
            }
            Expr::Not(operand) => self.gen_branch(operand, false_label, true_label, code),
            Expr::Compare { op, left, right } => {
                let class = self.comparison_class(left, right);
                self.gen_value(left, code)?;
                self.gen_value(right, code)?;
                code.push(Instr::Call {
                    class: class.as_str().to_string(),
                    method: op.as_str().to_string(),
                });
                code.push(Instr::JumpIf(true_label.to_string()));
                code.push(Instr::Jump(false_label.to_string()));
                Ok(())
            }
            _ => Err(Error::unsupported_mode(expr.kind(), EvalMode::Branch)),
        }
    }

    /// Class whose typed operator implements an arithmetic op: the static
    /// type of the right operand, with a consensus check when both sides are
    /// compile-time known.
    fn binary_call_class(&self, op: BinOp, left: &Expr, right: &Expr) -> Result<String> {
        let left_type = self.types.static_type(left);
        let right_type = self.types.static_type(right);
        if let (Some(l), Some(r)) = (left_type, right_type) {
            if l != r {
                return Err(Error::type_mismatch(op.as_str(), l.as_str(), r.as_str()));
            }
        }
        Ok(right_type
            .or(left_type)
            .unwrap_or(TypeTag::Obj)
            .as_str()
            .to_string())
    }

    /// Class whose typed operator implements a comparison: Int evidence on
    /// either side wins, then String, else Obj. Evidence is a constant's kind
    /// or a variable's type-table entry.
    fn comparison_class(&self, left: &Expr, right: &Expr) -> TypeTag {
        let evidence = |e: &Expr| match e {
            Expr::IntConst(_) => Some(TypeTag::Int),
            Expr::StrConst(_) => Some(TypeTag::Str),
            Expr::Var(name) | Expr::Load(name) => self.types.lookup(name),
            _ => None,
        };
        let l = evidence(left);
        let r = evidence(right);
        if l == Some(TypeTag::Int) || r == Some(TypeTag::Int) {
            TypeTag::Int
        } else if l == Some(TypeTag::Str) || r == Some(TypeTag::Str) {
            TypeTag::Str
        } else {
            TypeTag::Obj
        }
    }

    /// Dispatch class of a method-call receiver.
    fn receiver_class(&self, receiver: &Expr) -> Result<String> {
        match receiver {
            Expr::Var(name) | Expr::Load(name) => {
                if let Some(tag) = self.types.lookup(name) {
                    return Ok(tag.as_str().to_string());
                }
                if let Some(declared) = self.declared_type(name) {
                    return Ok(declared);
                }
                Err(Error::unbound_variable(name))
            }
            Expr::IntConst(_) => Ok("Int".to_string()),
            Expr::StrConst(_) => Ok("String".to_string()),
            Expr::Negate(_) => Ok("Int".to_string()),
            Expr::Binary { .. } => Ok(self
                .types
                .static_type(receiver)
                .unwrap_or(TypeTag::Obj)
                .as_str()
                .to_string()),
            Expr::Call {
                receiver: inner,
                method,
                ..
            } => {
                // Chained call: the dispatch class is the inner call's
                // declared return type.
                let class = self.receiver_class(inner)?;
                if let Some(sig) = self.builtins.lookup(&class, method) {
                    return Ok(sig.ret.clone());
                }
                if let Some(info) = self.symbols.method(&class, method) {
                    return Ok(info.ret.clone());
                }
                Err(Error::unknown_method(class, method))
            }
            _ => Ok(TypeTag::Obj.as_str().to_string()),
        }
    }

    /// A call is legal when the builtin descriptor or the symbol table knows
    /// the method on the dispatch class.
    fn check_call(&self, class: &str, method: &str) -> Result<()> {
        if self.builtins.lookup(class, method).is_some() {
            return Ok(());
        }
        if self.symbols.method(class, method).is_some() {
            return Ok(());
        }
        Err(Error::unknown_method(class, method))
    }

    /// Declared type of a formal or field binding visible from the current
    /// method, when the type table has nothing.
    fn declared_type(&self, name: &str) -> Option<String> {
        if let Some(method) = self.current_method {
            if let Some(formal) = method.formals.iter().find(|f| f.name == name) {
                return Some(formal.var_type.clone());
            }
        }
        if let Some(class) = self.current_class {
            if let Some(formal) = class.formals.iter().find(|f| f.name == name) {
                return Some(formal.var_type.clone());
            }
        }
        None
    }

    /// A load is legal when the name is a formal, a discovered local, or a
    /// field of the enclosing class.
    fn check_bound(&self, name: &str) -> Result<()> {
        if let Some(method) = self.current_method {
            if method.formals.iter().any(|f| f.name == name) {
                return Ok(());
            }
            if let Some(class) = self.current_class {
                if class.formals.iter().any(|f| f.name == name) {
                    return Ok(());
                }
                if self
                    .symbols
                    .method(&class.name, &method.name)
                    .map_or(false, |info| info.has_local(name))
                {
                    return Ok(());
                }
            }
        }
        Err(Error::unbound_variable(name))
    }
}
