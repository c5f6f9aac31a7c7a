use thiserror::Error;

/// Result type for quackc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Evaluation modes an expression node can be asked for.
///
/// Value mode leaves one result on the operand stack; branch mode transfers
/// control to one of two caller-chosen labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    Value,
    Branch,
}

impl std::fmt::Display for EvalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalMode::Value => write!(f, "value"),
            EvalMode::Branch => write!(f, "branch"),
        }
    }
}

/// Error types for the Quack translator
///
/// Every error is fatal: the translator surfaces the first one and halts, and
/// no partial assembly output is considered valid.
#[derive(Error, Debug)]
pub enum Error {
    #[error("duplicate declaration of class {name}")]
    DuplicateClass { name: String },

    #[error("duplicate declaration of method {name} in class {class}")]
    DuplicateMethod { class: String, name: String },

    #[error("type mismatch between {left} and {right} operands of {op}")]
    TypeMismatch {
        op: String,
        left: String,
        right: String,
    },

    #[error("unbound variable {name}")]
    UnboundVariable { name: String },

    #[error("unknown method {class}:{method}")]
    UnknownMethod { class: String, method: String },

    #[error("{node} node does not support {mode} evaluation")]
    UnsupportedMode { node: &'static str, mode: EvalMode },

    #[error("internal translator error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a duplicate-class declaration error
    pub fn duplicate_class(name: impl Into<String>) -> Self {
        Self::DuplicateClass { name: name.into() }
    }

    /// Create a duplicate-method declaration error
    pub fn duplicate_method(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateMethod {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Create an operand type mismatch error
    pub fn type_mismatch(
        op: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            op: op.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an unbound-variable error
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable { name: name.into() }
    }

    /// Create an unknown-method dispatch error
    pub fn unknown_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            class: class.into(),
            method: method.into(),
        }
    }

    /// Create an unsupported-evaluation-mode error
    pub fn unsupported_mode(node: &'static str, mode: EvalMode) -> Self {
        Self::UnsupportedMode { node, mode }
    }

    /// Create an internal translator error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
