//! Quack compiler (quackc)
//!
//! A single-pass compiler backend that lowers Quack class trees to textual
//! stack-machine assembly for the tiny-vm.
//!
//! ## Architecture
//!
//! The translator follows the javac-style phase pipeline:
//!
//! - **ast**: tree representation of a Quack translation unit
//! - **analysis**: symbol-table walks (Enter → Attr)
//! - **codegen**: dual-mode lowering to tiny-vm assembly text
//!
//! ## Translation Flow
//!
//! ```text
//! Quack AST → Analysis → Code Generation → assembly text
//!                ↓
//!           Enter → Attr
//! ```

pub mod analysis;
pub mod ast;
pub mod codegen;
pub mod error;

pub use error::{Error, EvalMode, Result};

/// Translate a Quack program to tiny-vm assembly using the default builtin
/// method descriptor.
pub fn translate(program: &ast::Program) -> Result<String> {
    translate_with_builtins(program, &codegen::DEFAULT_BUILTINS)
}

/// Complete translation pipeline: analysis walks, then code generation.
pub fn translate_with_builtins(
    program: &ast::Program,
    builtins: &codegen::BuiltinTable,
) -> Result<String> {
    eprintln!("🔧 QUACKC: Starting translation");

    // Phase 1: Symbol-table walks (Enter → Attr)
    eprintln!("🧠 QUACKC: Phase 1 - Symbol analysis");
    let analyzer = analysis::Analyzer::new();
    let (symbols, types) = analyzer.analyze(program)?;
    eprintln!("✅ QUACKC: Symbol analysis complete");

    // Phase 2: Code Generation
    eprintln!("⚙️  QUACKC: Phase 2 - Assembly generation");
    let asm = codegen::generate(program, &symbols, &types, builtins)?;
    eprintln!("✅ QUACKC: Assembly generation complete");

    eprintln!("🎉 QUACKC: Translation finished successfully");
    Ok(asm)
}
