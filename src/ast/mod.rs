//! Abstract Syntax Tree (AST) representation for the Quack language
//!
//! The tree arrives pre-built from an external parser; this module defines the
//! node shapes and the traversal machinery used by the later phases.

mod nodes;
mod visitor;

pub use nodes::*;
pub use visitor::*;
