//! Attr phase - post-order type-check seat
//!
//! The traversal point is wired up so a sound checker can move in later; for
//! now the walk enforces nothing, because the only real type error in this
//! translator is the generator's arithmetic operand-mismatch check.

use crate::ast::{walk_program, NodeRef, Program, Visitor};
use crate::error::Result;

/// Attr phase processor.
#[derive(Debug, Default)]
pub struct Attr;

impl Attr {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&mut self, program: &Program) -> Result<()> {
        walk_program(program, self)
    }
}

impl Visitor for Attr {
    fn post_visit(&mut self, _node: NodeRef<'_>) -> Result<()> {
        Ok(())
    }
}
