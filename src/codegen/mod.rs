//! Code generation: dual-mode expression lowering, label allocation, and
//! assembly-text rendering for the tiny-vm.

pub mod builtins;
pub mod emitter;
pub mod gen;
pub mod instr;
pub mod label;
pub mod types;

pub use builtins::{BuiltinTable, MethodSig, DEFAULT_BUILTINS};
pub use emitter::{emit_program, ClassCode, MethodCode};
pub use gen::Gen;
pub use instr::Instr;
pub use label::LabelAllocator;
pub use types::{TypeTable, TypeTag};

use crate::analysis::SymbolTable;
use crate::ast::Program;
use crate::error::Result;

/// Lower an analyzed program to assembly text.
pub fn generate(
    program: &Program,
    symbols: &SymbolTable,
    types: &TypeTable,
    builtins: &BuiltinTable,
) -> Result<String> {
    let mut gen = Gen::new(symbols, types, builtins);
    let classes = gen.gen_program(program)?;
    Ok(emit_program(&classes))
}
