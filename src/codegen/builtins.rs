//! Builtin-method descriptor for the tiny-vm runtime classes
//!
//! The on-disk descriptor loader belongs to the CLI layer; the generator only
//! consults the mapping: is `class:method` callable and, if so, with what
//! signature.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Parameter and return types of one builtin method.
#[derive(Debug, Clone)]
pub struct MethodSig {
    pub params: Vec<String>,
    pub ret: String,
}

/// Class name → method name → signature.
#[derive(Debug, Clone, Default)]
pub struct BuiltinTable {
    classes: HashMap<String, HashMap<String, MethodSig>>,
}

impl BuiltinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builtin method signature.
    pub fn add(&mut self, class: &str, method: &str, params: &[&str], ret: &str) {
        self.classes.entry(class.to_string()).or_default().insert(
            method.to_string(),
            MethodSig {
                params: params.iter().map(|p| p.to_string()).collect(),
                ret: ret.to_string(),
            },
        );
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn lookup(&self, class: &str, method: &str) -> Option<&MethodSig> {
        self.classes.get(class)?.get(method)
    }
}

/// Default descriptor mirroring the tiny-vm builtin classes.
pub static DEFAULT_BUILTINS: Lazy<BuiltinTable> = Lazy::new(|| {
    let mut table = BuiltinTable::new();
    for class in ["Obj", "Int", "String", "Bool", "Nothing"] {
        table.add(class, "print", &[], "Nothing");
        table.add(class, "string", &[], "String");
        table.add(class, "equals", &["Obj"], "Bool");
    }
    for op in ["plus", "sub", "mul", "div"] {
        table.add("Int", op, &["Int"], "Int");
    }
    table.add("Int", "less", &["Int"], "Bool");
    table.add("String", "plus", &["String"], "String");
    table.add("String", "less", &["String"], "Bool");
    table
});
