//! Coarse type tags and the best-effort variable type table
//!
//! This is deliberately not a sound type system: it is a heuristic over
//! literal syntax whose only job is to choose which typed `call` instruction
//! to emit. The table spans the whole translation unit (no class or method
//! scoping), and downstream dispatch typing depends on exactly that
//! imprecision.

use crate::ast::Expr;
use std::collections::HashMap;
use std::fmt;

/// Coarse static type tag drawn from the builtin classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Int,
    Str,
    Bool,
    Obj,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Int => "Int",
            TypeTag::Str => "String",
            TypeTag::Bool => "Bool",
            TypeTag::Obj => "Obj",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide mapping from variable name to inferred coarse type.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    entries: HashMap<String, TypeTag>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<TypeTag> {
        self.entries.get(name).copied()
    }

    /// Classify a literal by its surface shape: quoted text is a String, the
    /// `True`/`False`/`None` keywords are Bool, all-digit text is an Int,
    /// anything else is Obj.
    pub fn literal_shape(text: &str) -> TypeTag {
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            TypeTag::Str
        } else if matches!(text, "True" | "False" | "None") {
            TypeTag::Bool
        } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            TypeTag::Int
        } else {
            TypeTag::Obj
        }
    }

    /// Record one observation of a variable's type. A recording that
    /// conflicts with an earlier one collapses the entry to Obj, and it stays
    /// there; identical re-recordings are idempotent.
    pub fn record(&mut self, name: &str, tag: TypeTag) {
        match self.entries.get(name) {
            Some(&prev) if prev != tag => {
                self.entries.insert(name.to_string(), TypeTag::Obj);
            }
            Some(_) => {}
            None => {
                self.entries.insert(name.to_string(), tag);
            }
        }
    }

    /// Inference step run for every assignment statement: a literal rhs is
    /// classified by shape, an arithmetic rhs takes the static type of its
    /// right operand, anything else records Obj.
    pub fn record_assignment(&mut self, name: &str, rhs: &Expr) {
        let tag = match rhs {
            Expr::IntConst(lit) | Expr::StrConst(lit) => Self::literal_shape(lit),
            Expr::Binary { right, .. } => self.static_type(right).unwrap_or(TypeTag::Obj),
            _ => TypeTag::Obj,
        };
        self.record(name, tag);
    }

    /// Compile-time-known type of an expression, when the surface syntax or
    /// the table gives one away. Integer constants answer Int regardless of
    /// text because the grammar folds keyword literals into that node kind.
    pub fn static_type(&self, expr: &Expr) -> Option<TypeTag> {
        match expr {
            Expr::IntConst(_) => Some(TypeTag::Int),
            Expr::StrConst(_) => Some(TypeTag::Str),
            Expr::Binary { right, .. } => self.static_type(right),
            Expr::Negate(_) => Some(TypeTag::Int),
            Expr::Var(name) | Expr::Load(name) => self.lookup(name),
            _ => None,
        }
    }
}
