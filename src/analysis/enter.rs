//! Enter phase - symbol table construction
//!
//! Pre-order initialization walk over the program tree. Registers every class
//! and method, discovers method locals the first time they are stored, and
//! records assignment shapes into the variable type table so the whole table
//! is complete before a single instruction is generated.

use crate::ast::{walk_program, LValue, NodeRef, Program, Stmt, Visitor};
use crate::codegen::TypeTable;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Symbol table entry for one class.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub super_class: String,
    /// Declared field types, in declaration order.
    pub fields: Vec<String>,
    pub methods: HashMap<String, MethodInfo>,
}

/// Symbol table entry for one method.
#[derive(Debug, Clone, Default)]
pub struct MethodInfo {
    /// Declared parameter types, in declaration order.
    pub params: Vec<String>,
    pub ret: String,
    /// Locals in discovery order, each with its default type.
    pub locals: Vec<(String, String)>,
}

impl MethodInfo {
    pub fn has_local(&self, name: &str) -> bool {
        self.locals.iter().any(|(n, _)| n == name)
    }
}

/// Per-class registry of fields, methods and locals built by the
/// initialization walk.
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub classes: HashMap<String, ClassInfo>,
}

impl SymbolTable {
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    pub fn method(&self, class: &str, method: &str) -> Option<&MethodInfo> {
        self.classes.get(class)?.methods.get(method)
    }
}

/// Enter phase processor.
pub struct Enter {
    pub symbols: SymbolTable,
    pub types: TypeTable,
    current_class: Option<String>,
    current_method: Option<String>,
    /// Formal names of the method being walked; stores to these never become
    /// locals.
    current_formals: Vec<String>,
}

impl Enter {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::default(),
            types: TypeTable::new(),
            current_class: None,
            current_method: None,
            current_formals: Vec::new(),
        }
    }

    /// Walk the program, building the symbol and type tables.
    pub fn process(mut self, program: &Program) -> Result<(SymbolTable, TypeTable)> {
        walk_program(program, &mut self)?;
        Ok((self.symbols, self.types))
    }

    fn current_class(&self) -> Result<&str> {
        self.current_class
            .as_deref()
            .ok_or_else(|| Error::internal("method declared outside of any class"))
    }

    /// First store of a name inside a method registers it as a local with the
    /// default type `Obj`.
    fn register_local(&mut self, name: &str) -> Result<()> {
        if self.current_formals.iter().any(|f| f == name) {
            return Ok(());
        }
        let class = self
            .current_class
            .clone()
            .ok_or_else(|| Error::internal("store outside of any class"))?;
        let method = self
            .current_method
            .clone()
            .ok_or_else(|| Error::internal("store outside of any method"))?;
        let info = self
            .symbols
            .classes
            .get_mut(&class)
            .and_then(|c| c.methods.get_mut(&method))
            .ok_or_else(|| Error::internal(format!("unregistered method {class}.{method}")))?;
        if !info.has_local(name) {
            info.locals.push((name.to_string(), "Obj".to_string()));
        }
        Ok(())
    }
}

impl Default for Enter {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for Enter {
    fn pre_visit(&mut self, node: NodeRef<'_>) -> Result<()> {
        match node {
            NodeRef::Class(class) => {
                if self.symbols.classes.contains_key(&class.name) {
                    return Err(Error::duplicate_class(&class.name));
                }
                self.current_class = Some(class.name.clone());
                self.symbols.classes.insert(
                    class.name.clone(),
                    ClassInfo {
                        super_class: class.super_class.clone(),
                        fields: class.formals.iter().map(|f| f.var_type.clone()).collect(),
                        methods: HashMap::new(),
                    },
                );
            }
            NodeRef::Method(method) => {
                let class = self.current_class()?.to_string();
                let info = self
                    .symbols
                    .classes
                    .get_mut(&class)
                    .ok_or_else(|| Error::internal(format!("unregistered class {class}")))?;
                if info.methods.contains_key(&method.name) {
                    return Err(Error::duplicate_method(class, &method.name));
                }
                info.methods.insert(
                    method.name.clone(),
                    MethodInfo {
                        params: method.formals.iter().map(|f| f.var_type.clone()).collect(),
                        ret: method.returns.clone(),
                        locals: Vec::new(),
                    },
                );
                self.current_method = Some(method.name.clone());
                self.current_formals = method.formals.iter().map(|f| f.name.clone()).collect();
            }
            NodeRef::Stmt(Stmt::Assign { target, value, .. }) => {
                if let LValue::Var(name) = target {
                    self.register_local(name)?;
                    self.types.record_assignment(name, value);
                }
            }
            _ => {}
        }
        Ok(())
    }
}
