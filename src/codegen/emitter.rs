//! Rendering of generated classes into assembly text
//!
//! The generator produces [`ClassCode`]/[`MethodCode`] values; this module
//! turns them into the whitespace-delimited text the tiny-vm assembler
//! consumes. The implicit-return convention lives here: a method always ends
//! in exactly one `return N` with N equal to its formal count, preceded by
//! `const nothing` when there are no formals so a value is on the stack.

use super::instr::Instr;
use std::fmt;

/// A generated method body ready for rendering.
#[derive(Debug, Clone)]
pub struct MethodCode {
    pub name: String,
    /// Formal parameter names, in declaration order.
    pub args: Vec<String>,
    /// Local names discovered by the initialization walk, in discovery order.
    pub locals: Vec<String>,
    pub code: Vec<Instr>,
}

impl fmt::Display for MethodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".method {}", self.name)?;
        if !self.args.is_empty() {
            writeln!(f, ".args {}", self.args.join(", "))?;
        }
        if !self.locals.is_empty() {
            writeln!(f, ".locals {}", self.locals.join(", "))?;
        }
        for instr in &self.code {
            writeln!(f, "{instr}")?;
        }
        if self.args.is_empty() {
            writeln!(f, "{}", Instr::Const("nothing".to_string()))?;
        }
        writeln!(f, "{}", Instr::Return(self.args.len()))
    }
}

/// A generated class ready for rendering: constructor first, then the
/// declared methods.
#[derive(Debug, Clone)]
pub struct ClassCode {
    pub name: String,
    pub super_class: String,
    /// Field names, in declaration order.
    pub fields: Vec<String>,
    pub constructor: MethodCode,
    pub methods: Vec<MethodCode>,
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".class {}:{}", self.name, self.super_class)?;
        if !self.fields.is_empty() {
            writeln!(f, ".field {}", self.fields.join(", "))?;
        }
        write!(f, "{}", self.constructor)?;
        for method in &self.methods {
            write!(f, "{method}")?;
        }
        Ok(())
    }
}

/// Concatenate class renderings into the final program text.
pub fn emit_program(classes: &[ClassCode]) -> String {
    classes.iter().map(ToString::to_string).collect()
}
