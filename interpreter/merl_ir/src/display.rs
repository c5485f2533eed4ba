//! Printed forms of AST nodes.
//!
//! These drive user-visible behavior: error messages embed expressions,
//! and closures print as their definition. The formats round-trip through
//! the parser for plain data (tuples, lists, literals).

use std::fmt;

use crate::ast::{BinOp, CondBranch, Definition, Expr, FunBranch, PatternBranch, UnaryOp};

/// Write a comma-separated list of displayable items.
fn write_csv<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write a semicolon-separated list of branches.
fn write_branches<T: fmt::Display>(f: &mut fmt::Formatter<'_>, branches: &[T]) -> fmt::Result {
    for (i, branch) in branches.iter().enumerate() {
        if i > 0 {
            write!(f, "; ")?;
        }
        write!(f, "{branch}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Atom(name) | Expr::Var(name) => write!(f, "{name}"),
            Expr::Str(s) => write!(f, "\"{s}\""),
            Expr::Dummy => write!(f, "_"),
            Expr::Tuple(items) => {
                write!(f, "{{")?;
                write_csv(f, items)?;
                write!(f, "}}")
            }
            Expr::List(items) => {
                write!(f, "[")?;
                write_csv(f, items)?;
                write!(f, "]")
            }
            Expr::Bracket(inner) => write!(f, "({inner})"),
            Expr::Unary { op, rhs } => write!(f, "{op} {rhs}"),
            Expr::Binary { op, lhs, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Expr::Call { callable, args } => {
                write!(f, "{callable}(")?;
                write_csv(f, args)?;
                write!(f, ")")
            }
            Expr::Define(def) => write!(f, "{def}"),
            Expr::If(branches) => {
                write!(f, "if ")?;
                write_branches(f, branches)?;
                write!(f, " end")
            }
            Expr::Case { subject, branches } => {
                write!(f, "case {subject} of ")?;
                write_branches(f, branches)?;
                write!(f, " end")
            }
            Expr::Receive { branches, after } => {
                write!(f, "receive ")?;
                write_branches(f, branches)?;
                if let Some(after) = after {
                    if !branches.is_empty() {
                        write!(f, " ")?;
                    }
                    write!(f, "after {after}")?;
                }
                write!(f, " end")
            }
            Expr::TryRecover { body, recover } => {
                write!(f, "try ")?;
                write_csv(f, body)?;
                write!(f, " recover ")?;
                write_csv(f, recover)?;
                write!(f, " end")
            }
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "fun {name} ")?,
            None => write!(f, "fun ")?,
        }
        write_branches(f, &self.branches)?;
        write!(f, " end")
    }
}

impl fmt::Display for FunBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_csv(f, &self.params)?;
        write!(f, ")")?;
        if !self.guards.is_empty() {
            write!(f, " when ")?;
            write_csv(f, &self.guards)?;
        }
        write!(f, " -> ")?;
        write_csv(f, &self.body)
    }
}

impl fmt::Display for CondBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.cond)?;
        write_csv(f, &self.body)
    }
}

impl fmt::Display for PatternBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)?;
        if !self.guards.is_empty() {
            write!(f, " when ")?;
            write_csv(f, &self.guards)?;
        }
        write!(f, " -> ")?;
        write_csv(f, &self.body)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Minus => write!(f, "-"),
            UnaryOp::Not => write!(f, "not"),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::And => write!(f, "and"),
            BinOp::Or => write!(f, "or"),
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Rem => write!(f, "rem"),
            BinOp::Lt => write!(f, "<"),
            BinOp::LtEq => write!(f, "<="),
            BinOp::Gt => write!(f, ">"),
            BinOp::GtEq => write!(f, ">="),
            BinOp::Eq => write!(f, "=="),
            BinOp::NotEq => write!(f, "!="),
            BinOp::Append => write!(f, "++"),
            BinOp::Send => write!(f, "!"),
            BinOp::Match => write!(f, "="),
        }
    }
}
