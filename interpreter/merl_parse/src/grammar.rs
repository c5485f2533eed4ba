//! Expression grammar: terms, calls, and binary operations.
//!
//! Binary operations are parsed right-recursively and rotated into the
//! precedence-correct tree as they are built, so the evaluator only ever
//! sees correctly grouped nodes.

use merl_ir::{BinOp, Definition, Expr, Token, UnaryOp};

use crate::cursor::Parser;
use crate::error::ParseError;

impl Parser {
    /// Parse an expression: a term possibly continued by a call suffix
    /// and/or a binary operation.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;

        // maybe a call
        if self.peek() == Some(&Token::LParen) {
            match expr {
                Expr::Atom(_) | Expr::Var(_) | Expr::Bracket(_) => {
                    self.skip();
                    let args = self.parse_until(&Token::RParen)?;
                    expr = Expr::Call {
                        callable: Box::new(expr),
                        args,
                    };
                }
                // anything else followed by a bracket does not make sense
                _ => return Err(ParseError::Unexpected(Token::LParen)),
            }
        }

        // maybe a binary operation
        if let Some(op) = self.peek().and_then(binop_of) {
            self.skip();
            let rhs = self.parse_expr()?;
            expr = rotate(op, expr, rhs);
        }

        Ok(expr)
    }

    /// Parse a sequence of expressions separated by `,` and closed by
    /// `delim`.
    pub(crate) fn parse_until(&mut self, delim: &Token) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();

        // handle the empty case
        match self.peek() {
            None => return Err(ParseError::Missing(delim.clone())),
            Some(token) if token == delim => {
                self.skip();
                return Ok(exprs);
            }
            Some(_) => {}
        }

        loop {
            exprs.push(self.parse_expr()?);

            match self.pop() {
                None => return Err(ParseError::Missing(delim.clone())),
                Some(Token::Comma) => {}
                Some(token) if token == *delim => return Ok(exprs),
                Some(token) => return Err(ParseError::Unexpected(token)),
            }
        }
    }

    /// Parse a single term: a standalone unit of code that a call suffix
    /// or a binary operation may continue.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let token = self.pop().ok_or(ParseError::Eof)?;

        match token {
            Token::Atom(name) => Ok(from_atom(name)),
            Token::Var(name) => Ok(Expr::Var(name)),
            Token::Dummy => Ok(Expr::Dummy),
            Token::Int(n) => Ok(Expr::Int(n)),
            Token::Str(s) => Ok(Expr::Str(s)),
            Token::Plus => self.parse_unary(UnaryOp::Plus),
            Token::Minus => self.parse_unary(UnaryOp::Minus),
            Token::Not => self.parse_unary(UnaryOp::Not),
            Token::LBrace => Ok(Expr::Tuple(self.parse_until(&Token::RBrace)?)),
            Token::LBracket => Ok(Expr::List(self.parse_until(&Token::RBracket)?)),
            Token::LParen => {
                let inner = self.parse_expr()?;
                self.expect(&Token::RParen)?;
                Ok(Expr::Bracket(Box::new(inner)))
            }
            Token::Fun => {
                let name = match self.peek() {
                    None => return Err(ParseError::Eof),
                    Some(Token::Atom(name)) => {
                        let name = name.clone();
                        self.skip();
                        Some(name)
                    }
                    Some(_) => None,
                };
                let branches = self.parse_branches(Parser::parse_fun_branch)?;
                Ok(Expr::Define(Definition { name, branches }))
            }
            Token::If => Ok(Expr::If(self.parse_branches(Parser::parse_cond_branch)?)),
            Token::Case => self.parse_case(),
            Token::Receive => self.parse_receive(),
            Token::Try => self.parse_try_recover(),
            other => Err(ParseError::Unexpected(other)),
        }
    }

    /// A leading operator must be one of the unary ones.
    fn parse_unary(&mut self, op: UnaryOp) -> Result<Expr, ParseError> {
        let rhs = self.parse_term()?;
        Ok(Expr::Unary {
            op,
            rhs: Box::new(rhs),
        })
    }
}

/// Transform special atoms (booleans) to specific literals.
fn from_atom(name: String) -> Expr {
    match name.as_str() {
        "true" => Expr::Bool(true),
        "false" => Expr::Bool(false),
        _ => Expr::Atom(name),
    }
}

/// Map a token to the binary operator it denotes, if any.
fn binop_of(token: &Token) -> Option<BinOp> {
    match token {
        Token::Plus => Some(BinOp::Add),
        Token::Minus => Some(BinOp::Sub),
        Token::Star => Some(BinOp::Mul),
        Token::Slash => Some(BinOp::Div),
        Token::Rem => Some(BinOp::Rem),
        Token::And => Some(BinOp::And),
        Token::Or => Some(BinOp::Or),
        Token::PlusPlus => Some(BinOp::Append),
        Token::EqEq => Some(BinOp::Eq),
        Token::NotEq => Some(BinOp::NotEq),
        Token::Lt => Some(BinOp::Lt),
        Token::LtEq => Some(BinOp::LtEq),
        Token::Gt => Some(BinOp::Gt),
        Token::GtEq => Some(BinOp::GtEq),
        Token::Eq => Some(BinOp::Match),
        Token::Bang => Some(BinOp::Send),
        _ => None,
    }
}

/// Build a binary node, rotating the right-recursive parse into the
/// correct operator precedence: `2 * 3 + 5` arrives as `2 * (3 + 5)` and
/// leaves as `(2 * 3) + 5`.
fn rotate(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    if let Expr::Binary {
        op: rhs_op,
        lhs: rhs_lhs,
        rhs: rhs_rhs,
    } = rhs
    {
        if op.precedence() <= rhs_op.precedence() {
            return Expr::Binary {
                op: rhs_op,
                lhs: Box::new(rotate(op, lhs, *rhs_lhs)),
                rhs: rhs_rhs,
            };
        }
        return Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(Expr::Binary {
                op: rhs_op,
                lhs: rhs_lhs,
                rhs: rhs_rhs,
            }),
        };
    }
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
