//! AST node types for merl expressions.

/// An expression as produced by the parser.
///
/// Everything in merl is an expression: literals, containers, operations,
/// control flow, and function definitions all evaluate to a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Integer literal: `42`.
    Int(i64),
    /// Boolean literal. The parser desugars the `true`/`false` atoms.
    Bool(bool),
    /// Atom: lowercase-initial symbolic constant, `foo`.
    Atom(String),
    /// String literal with escapes already cooked: `"hello"`.
    Str(String),
    /// Variable reference: uppercase-initial name, `X`.
    Var(String),
    /// The anonymous placeholder `_`. Matches anything, never binds.
    Dummy,
    /// Tuple literal: `{1, foo}`.
    Tuple(Vec<Expr>),
    /// List literal: `[1, 2, 3]`.
    List(Vec<Expr>),
    /// Parenthesized expression. Kept as a node so printing round-trips
    /// and so the parser can gate what is callable.
    Bracket(Box<Expr>),
    /// Unary operation: `-X`, `not Flag`.
    Unary { op: UnaryOp, rhs: Box<Expr> },
    /// Binary operation: `A + B`, `Pid ! Msg`, `X = 1`.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Call of a callable expression with arguments: `f(1, 2)`.
    Call {
        callable: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Function definition, anonymous or named.
    Define(Definition),
    /// `if` block: ordered condition branches.
    If(Vec<CondBranch>),
    /// `case` block: scrutinee plus ordered pattern branches.
    Case {
        subject: Box<Expr>,
        branches: Vec<PatternBranch>,
    },
    /// `receive` block: pattern branches plus an optional `after` branch
    /// whose condition is the timeout expression.
    Receive {
        branches: Vec<PatternBranch>,
        after: Option<Box<CondBranch>>,
    },
    /// `try ... recover ... end`.
    TryRecover { body: Vec<Expr>, recover: Vec<Expr> },
}

/// A function definition: one or more branches picked by pattern matching
/// the call arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    /// Name for named definitions (`fun fact ... end`), `None` for
    /// anonymous ones.
    pub name: Option<String>,
    pub branches: Vec<FunBranch>,
}

/// One branch of a function definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FunBranch {
    /// Argument patterns.
    pub params: Vec<Expr>,
    /// Guard expressions; all must evaluate to `true` for the branch to
    /// be taken. Empty means unguarded.
    pub guards: Vec<Expr>,
    pub body: Vec<Expr>,
}

/// A `condition -> body` branch, used by `if` and by the `after` clause
/// of `receive` (where the condition is the timeout expression).
#[derive(Clone, Debug, PartialEq)]
pub struct CondBranch {
    pub cond: Expr,
    pub body: Vec<Expr>,
}

/// A `pattern [when guards] -> body` branch, used by `case` and `receive`.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternBranch {
    pub pattern: Expr,
    pub guards: Vec<Expr>,
    pub body: Vec<Expr>,
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+x`: identity on integers.
    Plus,
    /// `-x`: integer negation.
    Minus,
    /// `not x`: boolean negation.
    Not,
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    /// `++`: list append / string concatenation.
    Append,
    /// `!`: send a message to a pid.
    Send,
    /// `=`: pattern match.
    Match,
}

impl BinOp {
    /// Operator precedence: lower means higher priority.
    ///
    /// Follows the Erlang operator table, with `!=`/`<=` standing in for
    /// `/=`/`=<`. The parser uses this to rotate right-recursive binary
    /// nodes into the correct grouping.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Mul | BinOp::Div | BinOp::Rem => 4,
            BinOp::Add | BinOp::Sub => 5,
            BinOp::Append => 6,
            BinOp::Eq | BinOp::NotEq | BinOp::Lt | BinOp::LtEq | BinOp::Gt | BinOp::GtEq => 7,
            BinOp::And => 8,
            BinOp::Or => 9,
            BinOp::Send | BinOp::Match => 10,
        }
    }
}
