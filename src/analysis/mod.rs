//! Semantic analysis phases run between tree construction and code generation
//!
//! Two walks over the tree, matching the two-phase symbol-table contract:
//!
//! - Enter: pre-order initialization walk that builds the per-class symbol
//!   table and the variable type table
//! - Attr: post-order type-check seat, currently a deliberate no-op

pub mod attr;
pub mod enter;

pub use enter::{ClassInfo, Enter, MethodInfo, SymbolTable};

use crate::ast::Program;
use crate::codegen::TypeTable;
use crate::error::Result;

/// Orchestrates the analysis phases: Enter → Attr.
pub struct Analyzer {
    pub enter: enter::Enter,
    pub attr: attr::Attr,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            enter: enter::Enter::new(),
            attr: attr::Attr::new(),
        }
    }

    /// Run all phases, yielding the populated symbol and type tables ready
    /// for code generation.
    pub fn analyze(mut self, program: &Program) -> Result<(SymbolTable, TypeTable)> {
        let (symbols, types) = self.enter.process(program)?;
        self.attr.process(program)?;
        Ok((symbols, types))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
