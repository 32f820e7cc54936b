// File: src/ast.rs
//
// Abstract syntax tree for the SharpScript language.
// The parser produces a single `Stmt::Block` root; every node exclusively
// owns its children. Function and lambda bodies are cloned into runtime
// function values at definition time, so the tree itself stays plain data.

/// Binary operators, in source notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

/// Operator tag carried by an assignment statement. `Set` is plain `=`;
/// the rest cover `+=`, `-=`, `*=`, `/=`, `%=` and their word forms
/// (`add x = e` and friends), which all share the same runtime path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Set,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// Declaration flavor of an assignment: `&insert` or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Insert,
    Const,
}

/// A function or lambda parameter with an optional default expression.
/// Defaults are evaluated in the callee's frame at call time.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    Identifier(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Array(Vec<Expr>),
    /// Map literal. Keys are arbitrary expressions reduced to their string
    /// form at runtime; keys and values are kept as parallel lists.
    Map {
        keys: Vec<Expr>,
        values: Vec<Expr>,
    },
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    /// Call by name. Builtins are recognized by exact name before any
    /// environment lookup.
    Call {
        name: String,
        args: Vec<Expr>,
    },
    Lambda {
        params: Vec<Param>,
        body: Box<Stmt>,
    },
}

#[derive(Debug, Clone)]
pub enum Stmt {
    /// Empty statement: a bare `;`, a skipped lexing error, or a construct
    /// the parser replaced after reporting a diagnostic.
    Empty,
    Expr(Expr),
    Assign {
        name: String,
        op: AssignOp,
        decl: Option<DeclKind>,
        type_name: Option<String>,
        value: Expr,
    },
    If {
        condition: Expr,
        then_block: Box<Stmt>,
        else_block: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    For {
        init: Box<Stmt>,
        condition: Expr,
        increment: Box<Stmt>,
        body: Box<Stmt>,
    },
    ForIn {
        var: String,
        iterable: Expr,
        body: Box<Stmt>,
    },
    Function {
        name: String,
        params: Vec<Param>,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    /// Ordered statement sequence. Blocks do not open a scope frame; only
    /// function calls and namespace bodies do.
    Block(Vec<Stmt>),
    Namespace {
        name: String,
        body: Box<Stmt>,
    },
    /// Enum members carry their numeric values, already computed by the
    /// parser (last explicit value plus one, starting at zero).
    Enum {
        name: String,
        members: Vec<(String, f64)>,
    },
    Class {
        name: String,
        base: Option<String>,
        body: Box<Stmt>,
    },
    Match {
        scrutinee: Expr,
        cases: Vec<(Expr, Stmt)>,
        default: Option<Box<Stmt>>,
    },
    Try {
        body: Box<Stmt>,
        catch_name: Option<String>,
        catch_body: Option<Box<Stmt>>,
        finally_body: Option<Box<Stmt>>,
    },
}
