//! The language-neutral input AST the analyzer consumes (§6). Building
//! one of these from source text is an external parser's job — out
//! of scope here (§1) — so this module only defines the node shapes
//! and a handful of constructors useful for building ASTs by hand
//! (as the end-to-end tests do).

/// Top-level collection of functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub functions: Vec<Function>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Decl { var: String, init: Option<Expr> },
    Assign { target: String, value: Expr },
    If { cond: Expr, then_branch: Box<Stmt>, else_branch: Option<Box<Stmt>> },
    While { cond: Expr, body: Box<Stmt> },
    /// `for (init; cond; step) { body }`, treated as a `while` with a
    /// prelude and step (§4.6, §6): `init` runs once, `step` runs at
    /// the end of every iteration alongside `body`.
    For { init: Box<Stmt>, cond: Expr, step: Box<Stmt>, body: Box<Stmt> },
    Break,
    Continue,
    Return(Option<Expr>),
    /// A call used as a statement (`f(x);`). Always unsupported
    /// (§1, §9): function calls are never analyzed inter-procedurally.
    Call { name: String, args: Vec<Expr> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnOp {
    Neg,
    Not,
    Inc,
    Dec,
    SizeOf,
}

/// A relational comparison. Conditions are never evaluated by the
/// analyzer (§6: "conditions are not analyzed") — this exists only so
/// a bounded `for`'s guard variable can be located structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(String),
    Const(i64),
    BinOp { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr> },
    UnOp { op: UnOp, arg: Box<Expr> },
    /// A comparison, valid only as a loop/if condition; never carries
    /// a coefficient of its own.
    Cmp { op: CmpOp, lhs: Box<Expr>, rhs: Box<Expr> },
    /// Always unsupported (§1, §9).
    Call { name: String, args: Vec<Expr> },
    /// Always unsupported (§6: "array subscript").
    Index { array: Box<Expr>, index: Box<Expr> },
    /// Always unsupported (§6: "pointer deref").
    Deref(Box<Expr>),
    /// Always unsupported (§6: "address-of").
    AddrOf(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn constant(value: i64) -> Self {
        Expr::Const(value)
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::BinOp { op: BinOp::Add, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Expr::BinOp { op: BinOp::Sub, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Expr::BinOp { op: BinOp::Mul, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn cmp(op: CmpOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Cmp { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn lt(lhs: Expr, rhs: Expr) -> Self {
        Expr::cmp(CmpOp::Lt, lhs, rhs)
    }

    /// The variable this expression reads directly, if it is a bare
    /// variable reference (as opposed to a constant or a compound
    /// expression). Used throughout the analyzer to decide whether
    /// an operand "contributes a source row" (§4.7).
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Expr::Var(name) => Some(name),
            _ => None,
        }
    }
}

impl Stmt {
    pub fn block(stmts: Vec<Stmt>) -> Self {
        Stmt::Block(stmts)
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign { target: target.into(), value }
    }

    pub fn if_then_else(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_loop(cond: Expr, body: Stmt) -> Self {
        Stmt::While { cond, body: Box::new(body) }
    }

    pub fn for_loop(init: Stmt, cond: Expr, step: Stmt, body: Stmt) -> Self {
        Stmt::For {
            init: Box::new(init),
            cond,
            step: Box::new(step),
            body: Box::new(body),
        }
    }
}
