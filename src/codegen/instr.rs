//! Stack-machine instruction set emitted for the tiny-vm
//!
//! A closed set mirroring the assembler vocabulary of the VM's op table;
//! every variant renders to exactly one line of assembly text.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// Push a constant; the literal text is emitted verbatim.
    Const(String),
    /// Push a local variable.
    Load(String),
    /// Pop the stack top into a local variable.
    Store(String),
    /// Replace the receiver on the stack top with one of its fields.
    LoadField(String),
    /// Store into a field of the receiver on the stack top.
    StoreField(String),
    /// Typed method call, `call Class:method`.
    Call { class: String, method: String },
    /// Unconditional jump.
    Jump(String),
    /// Conditional jump, taken when the stack top is true.
    JumpIf(String),
    /// Label definition.
    Label(String),
    /// Discard the stack top.
    Pop,
    /// Return from a method, reclaiming N arguments.
    Return(usize),
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Const(lit) => write!(f, "const {lit}"),
            Instr::Load(name) => write!(f, "load {name}"),
            Instr::Store(name) => write!(f, "store {name}"),
            Instr::LoadField(name) => write!(f, "load_field {name}"),
            Instr::StoreField(name) => write!(f, "store_field {name}"),
            Instr::Call { class, method } => write!(f, "call {class}:{method}"),
            Instr::Jump(label) => write!(f, "jump {label}"),
            Instr::JumpIf(label) => write!(f, "jump_if {label}"),
            Instr::Label(label) => write!(f, "{label}:"),
            Instr::Pop => write!(f, "pop"),
            Instr::Return(n) => write!(f, "return {n}"),
        }
    }
}
