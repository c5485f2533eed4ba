//! Grammar for the special forms: `fun`, `if`, `case`, `receive`, `try`.

use merl_ir::{CondBranch, Expr, FunBranch, PatternBranch, Token};

use crate::cursor::Parser;
use crate::error::ParseError;

impl Parser {
    /// Parse `case <expr> of <branches> end` (the `case` token is already
    /// consumed).
    pub(crate) fn parse_case(&mut self) -> Result<Expr, ParseError> {
        let subject = self.parse_expr()?;
        self.expect(&Token::Of)?;
        let branches = self.parse_branches(Parser::parse_pattern_branch)?;
        Ok(Expr::Case {
            subject: Box::new(subject),
            branches,
        })
    }

    /// Parse `try <body> recover <body> end`. Both bodies must be
    /// non-empty.
    pub(crate) fn parse_try_recover(&mut self) -> Result<Expr, ParseError> {
        let body = self.parse_until(&Token::Recover)?;
        if body.is_empty() {
            return Err(ParseError::Unexpected(Token::Recover));
        }

        let recover = self.parse_until(&Token::End)?;
        if recover.is_empty() {
            return Err(ParseError::Unexpected(Token::End));
        }

        Ok(Expr::TryRecover { body, recover })
    }

    /// Parse `receive <branches> [after <timeout> -> <body>] end`.
    ///
    /// An after branch without any receive branches is allowed, as in
    /// Erlang.
    pub(crate) fn parse_receive(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            None => return Err(ParseError::Eof),
            Some(Token::After) => {
                self.skip();
                let after = self.parse_after_branch()?;
                return Ok(Expr::Receive {
                    branches: Vec::new(),
                    after: Some(Box::new(after)),
                });
            }
            Some(_) => {}
        }

        let mut branches = Vec::new();
        loop {
            branches.push(self.parse_pattern_branch()?);

            match self.pop() {
                None => return Err(ParseError::Eof),
                Some(Token::Semi) => {}
                Some(Token::End) => {
                    return Ok(Expr::Receive {
                        branches,
                        after: None,
                    })
                }
                Some(Token::After) => {
                    let after = self.parse_after_branch()?;
                    return Ok(Expr::Receive {
                        branches,
                        after: Some(Box::new(after)),
                    });
                }
                Some(token) => return Err(ParseError::Unexpected(token)),
            }
        }
    }

    /// Parse the `after` branch of `receive`, including the closing `end`.
    fn parse_after_branch(&mut self) -> Result<CondBranch, ParseError> {
        let after = self.parse_cond_branch()?;
        self.expect(&Token::End)?;
        Ok(after)
    }

    /// Parse a function definition branch:
    /// `(<patterns>) [when <guards>] -> <body>`.
    pub(crate) fn parse_fun_branch(&mut self) -> Result<FunBranch, ParseError> {
        self.expect(&Token::LParen)?;
        let params = self.parse_until(&Token::RParen)?;
        let guards = self.maybe_guards()?;
        let body = self.parse_branch_body()?;
        Ok(FunBranch {
            params,
            guards,
            body,
        })
    }

    /// Parse a simple `<expr> -> <body>` branch.
    pub(crate) fn parse_cond_branch(&mut self) -> Result<CondBranch, ParseError> {
        let cond = self.parse_expr()?;
        self.expect(&Token::Arrow)?;
        let body = self.parse_branch_body()?;
        Ok(CondBranch { cond, body })
    }

    /// Parse a `<pattern> [when <guards>] -> <body>` branch.
    pub(crate) fn parse_pattern_branch(&mut self) -> Result<PatternBranch, ParseError> {
        let pattern = self.parse_expr()?;
        let guards = self.maybe_guards()?;
        let body = self.parse_branch_body()?;
        Ok(PatternBranch {
            pattern,
            guards,
            body,
        })
    }

    /// Parse branches separated by `;` until the closing `end`.
    pub(crate) fn parse_branches<T>(
        &mut self,
        parse: fn(&mut Parser) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut branches = Vec::new();
        loop {
            branches.push(parse(self)?);

            match self.pop() {
                None => return Err(ParseError::Missing(Token::End)),
                Some(Token::Semi) => {}
                Some(Token::End) => return Ok(branches),
                Some(token) => return Err(ParseError::Unexpected(token)),
            }
        }
    }

    /// Parse the body of a branch up to (but not consuming) `;`, `end`,
    /// or `after`.
    fn parse_branch_body(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut body = Vec::new();
        loop {
            body.push(self.parse_expr()?);

            match self.peek() {
                None => return Err(ParseError::Missing(Token::End)),
                Some(Token::Comma) => self.skip(),
                Some(Token::Semi | Token::End | Token::After) => return Ok(body),
                Some(token) => return Err(ParseError::Unexpected(token.clone())),
            }
        }
    }

    /// Expect `->`, or parse `when <guards> ->` and return the guards.
    fn maybe_guards(&mut self) -> Result<Vec<Expr>, ParseError> {
        match self.pop() {
            None => Err(ParseError::Missing(Token::Arrow)),
            Some(Token::Arrow) => Ok(Vec::new()),
            Some(Token::When) => self.parse_until(&Token::Arrow),
            Some(token) => Err(ParseError::Unexpected(token)),
        }
    }
}
