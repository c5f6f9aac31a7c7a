use std::fmt;

/// Name of the synthetic constructor every class receives.
pub const CONSTRUCTOR_NAME: &str = "$constructor";

/// Root of the builtin class hierarchy and the default super class.
pub const ROOT_CLASS: &str = "Obj";

/// Root node: a translation unit is an ordered list of classes.
///
/// Construction appends a synthetic `Main` class wrapping the program's
/// top-level methods and statements, so every unit has at least one class.
#[derive(Debug, Clone)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
}

impl Program {
    /// Build a program from parsed classes, top-level methods and the
    /// top-level statement block. The statements become the constructor body
    /// of the injected `Main` class.
    pub fn new(mut classes: Vec<ClassDecl>, methods: Vec<MethodDecl>, stmt_block: Vec<Stmt>) -> Self {
        let main_class = ClassDecl::new(
            "Main".to_string(),
            Vec::new(),
            ROOT_CLASS.to_string(),
            methods,
            stmt_block,
        );
        classes.push(main_class);
        Self { classes }
    }
}

/// Class declaration: constructor formals double as the class fields.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub formals: Vec<Formal>,
    pub super_class: String,
    pub methods: Vec<MethodDecl>,
    /// Synthetic constructor assembled from the formals and the class body.
    pub constructor: MethodDecl,
}

impl ClassDecl {
    pub fn new(
        name: String,
        formals: Vec<Formal>,
        super_class: String,
        methods: Vec<MethodDecl>,
        body: Vec<Stmt>,
    ) -> Self {
        let constructor = MethodDecl::new(
            CONSTRUCTOR_NAME.to_string(),
            formals.clone(),
            name.clone(),
            body,
        );
        Self {
            name,
            formals,
            super_class,
            methods,
            constructor,
        }
    }
}

/// Method declaration. Locals are not stored on the node; the initialization
/// walk discovers them into the symbol table as stores are encountered.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub formals: Vec<Formal>,
    pub returns: String,
    pub body: Vec<Stmt>,
}

impl MethodDecl {
    pub fn new(name: String, formals: Vec<Formal>, returns: String, body: Vec<Stmt>) -> Self {
        Self {
            name,
            formals,
            returns,
            body,
        }
    }

    /// Declared return type defaults to `Obj` when the grammar omits it.
    pub fn with_default_return(name: String, formals: Vec<Formal>, body: Vec<Stmt>) -> Self {
        Self::new(name, formals, ROOT_CLASS.to_string(), body)
    }
}

/// Formal parameter: a (name, declared type) pair with no computed state.
#[derive(Debug, Clone)]
pub struct Formal {
    pub name: String,
    pub var_type: String,
}

impl Formal {
    pub fn new(name: impl Into<String>, var_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_type: var_type.into(),
        }
    }
}

/// Statement forms.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `x = e` or `x: T = e`; the declared type annotation is carried but not
    /// consulted (typing runs off the inference table instead).
    Assign {
        target: LValue,
        declared: Option<String>,
        value: Expr,
    },
    Block(Vec<Stmt>),
    If {
        cond: Expr,
        then_part: Vec<Stmt>,
        else_part: Vec<Stmt>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    /// `return` with 0 or 1 expressions.
    Return(Option<Expr>),
    /// Expression in statement position, e.g. a bare method call.
    Expr(Expr),
}

/// Assignment targets.
#[derive(Debug, Clone)]
pub enum LValue {
    Var(String),
    Field { receiver: Expr, name: String },
}

/// Arithmetic operators, named after the builtin methods they dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Plus,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Plus => "plus",
            BinOp::Sub => "sub",
            BinOp::Mul => "mul",
            BinOp::Div => "div",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison operators. The grammar lowers `>`, `<=` and `>=` onto these two
/// (see the builder helpers on [`Expr`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Less,
    Equals,
}

impl CmpOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Less => "less",
            CmpOp::Equals => "equals",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Argument list of a method call, normalized at construction so walks never
/// see nested child lists.
#[derive(Debug, Clone, Default)]
pub struct ArgList {
    pub args: Vec<Expr>,
}

/// Expression forms. The set is closed and exhaustively matched by the
/// generator, so a node kind missing an evaluation mode is rejected up front
/// rather than through a runtime "not implemented" default.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Integer constant, kept as literal text; the `True`/`False`/`None`
    /// keyword literals arrive through this variant because the grammar folds
    /// them into plain constants.
    IntConst(String),
    /// String constant, stored with its surrounding quotes.
    StrConst(String),
    /// Bare variable reference.
    Var(String),
    /// Variable load.
    Load(String),
    /// Field load through a receiver expression.
    LoadField { receiver: Box<Expr>, field: String },
    /// Arithmetic binary operation.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary arithmetic negation, lowered as `0 - x`.
    Negate(Box<Expr>),
    /// Comparison; a leaf of conditional branches.
    Compare {
        op: CmpOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Short-circuit boolean and.
    And(Box<Expr>, Box<Expr>),
    /// Short-circuit boolean or.
    Or(Box<Expr>, Box<Expr>),
    /// Boolean negation.
    Not(Box<Expr>),
    /// Method call on a receiver expression.
    Call {
        receiver: Box<Expr>,
        method: String,
        args: ArgList,
    },
}

impl Expr {
    pub fn int(lit: impl Into<String>) -> Self {
        Expr::IntConst(lit.into())
    }

    pub fn string(lit: impl Into<String>) -> Self {
        Expr::StrConst(lit.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn load(name: impl Into<String>) -> Self {
        Expr::Load(name.into())
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn negate(operand: Expr) -> Self {
        Expr::Negate(Box::new(operand))
    }

    pub fn compare(op: CmpOp, left: Expr, right: Expr) -> Self {
        Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn less(left: Expr, right: Expr) -> Self {
        Self::compare(CmpOp::Less, left, right)
    }

    pub fn equals(left: Expr, right: Expr) -> Self {
        Self::compare(CmpOp::Equals, left, right)
    }

    /// `a > b` is built as `b < a`; the generator only knows `less`.
    pub fn greater(left: Expr, right: Expr) -> Self {
        Self::less(right, left)
    }

    /// `a <= b` is built as `a < b or a == b`.
    pub fn less_equal(left: Expr, right: Expr) -> Self {
        Self::or(
            Self::less(left.clone(), right.clone()),
            Self::equals(left, right),
        )
    }

    /// `a >= b` is built as `b < a or b == a`.
    pub fn greater_equal(left: Expr, right: Expr) -> Self {
        Self::or(
            Self::less(right.clone(), left.clone()),
            Self::equals(right, left),
        )
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn call(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Box::new(receiver),
            method: method.into(),
            args: ArgList { args },
        }
    }

    /// Node-kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::IntConst(_) => "integer constant",
            Expr::StrConst(_) => "string constant",
            Expr::Var(_) => "variable reference",
            Expr::Load(_) => "load",
            Expr::LoadField { .. } => "field load",
            Expr::Binary { .. } => "arithmetic operator",
            Expr::Negate(_) => "negate",
            Expr::Compare { .. } => "comparison",
            Expr::And(..) => "and",
            Expr::Or(..) => "or",
            Expr::Not(_) => "not",
            Expr::Call { .. } => "method call",
        }
    }
}
