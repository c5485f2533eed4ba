//! Parser for merl.
//!
//! Turns source text into the `merl_ir` AST: tokenize, then recursive
//! descent over a token cursor. The grammar lives in `grammar.rs`
//! (expressions) and `special_forms.rs` (`fun`/`if`/`case`/`receive`/
//! `try`); `reader.rs` holds the line-oriented splitter the REPL and
//! `include` feed from.

mod cursor;
mod error;
mod grammar;
mod reader;
mod special_forms;

use merl_ir::{Expr, Token};

pub use cursor::Parser;
pub use error::ParseError;
pub use reader::Reader;

/// Parse one expression sequence (terminated by `.`) into a list of
/// expressions.
pub fn parse(input: &str) -> Result<Vec<Expr>, ParseError> {
    let tokens = merl_lexer::tokenize(input)?;
    Parser::new(tokens).parse_until(&Token::Dot)
}

#[cfg(test)]
mod tests {
    use merl_ir::{BinOp, CondBranch, Definition, FunBranch, PatternBranch, UnaryOp};
    use pretty_assertions::assert_eq;

    use super::*;

    fn var(name: &str) -> Expr {
        Expr::Var(name.into())
    }

    fn atom(name: &str) -> Expr {
        Expr::Atom(name.into())
    }

    fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[test]
    fn basic_data_types() {
        let cases: Vec<(&str, Vec<Expr>)> = vec![
            ("1 .", vec![Expr::Int(1)]),
            ("foo .", vec![atom("foo")]),
            ("X .", vec![var("X")]),
            ("true .", vec![Expr::Bool(true)]),
            ("false .", vec![Expr::Bool(false)]),
            (r#""" ."#, vec![Expr::Str(String::new())]),
            (
                r#""Hello, World!"."#,
                vec![Expr::Str("Hello, World!".into())],
            ),
            (
                r#""\"Hello,\nWorld!\""."#,
                vec![Expr::Str("\"Hello,\nWorld!\"".into())],
            ),
            ("{}.", vec![Expr::Tuple(vec![])]),
            (
                "{1,2,3}.",
                vec![Expr::Tuple(vec![Expr::Int(1), Expr::Int(2), Expr::Int(3)])],
            ),
            ("[].", vec![Expr::List(vec![])]),
            (
                "[1,2,3].",
                vec![Expr::List(vec![Expr::Int(1), Expr::Int(2), Expr::Int(3)])],
            ),
            (
                "1,2,3.",
                vec![Expr::Int(1), Expr::Int(2), Expr::Int(3)],
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), expected, "input: {input}");
        }
    }

    #[test]
    fn unary_operations() {
        let cases: Vec<(&str, Expr)> = vec![
            (
                "- 5 .",
                Expr::Unary {
                    op: UnaryOp::Minus,
                    rhs: Box::new(Expr::Int(5)),
                },
            ),
            (
                "+ Y .",
                Expr::Unary {
                    op: UnaryOp::Plus,
                    rhs: Box::new(var("Y")),
                },
            ),
            (
                "not X .",
                Expr::Unary {
                    op: UnaryOp::Not,
                    rhs: Box::new(var("X")),
                },
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), vec![expected], "input: {input}");
        }
    }

    #[test]
    fn binary_operations_rotate_into_precedence() {
        let cases: Vec<(&str, Expr)> = vec![
            ("X = 42.", binary(BinOp::Match, var("X"), Expr::Int(42))),
            ("2 + 3.", binary(BinOp::Add, Expr::Int(2), Expr::Int(3))),
            // left-assoc chain of same precedence
            (
                "2 + 3 - 4 + 5.",
                binary(
                    BinOp::Add,
                    binary(
                        BinOp::Sub,
                        binary(BinOp::Add, Expr::Int(2), Expr::Int(3)),
                        Expr::Int(4),
                    ),
                    Expr::Int(5),
                ),
            ),
            // tighter operators group first
            (
                "6 + 7 * 8 / 9.",
                binary(
                    BinOp::Add,
                    Expr::Int(6),
                    binary(
                        BinOp::Div,
                        binary(BinOp::Mul, Expr::Int(7), Expr::Int(8)),
                        Expr::Int(9),
                    ),
                ),
            ),
            (
                "(2 + 2).",
                Expr::Bracket(Box::new(binary(BinOp::Add, Expr::Int(2), Expr::Int(2)))),
            ),
            (
                "(2 + 4) / 3.",
                binary(
                    BinOp::Div,
                    Expr::Bracket(Box::new(binary(BinOp::Add, Expr::Int(2), Expr::Int(4)))),
                    Expr::Int(3),
                ),
            ),
            (
                "X = 1/2 + 3.",
                binary(
                    BinOp::Match,
                    var("X"),
                    binary(
                        BinOp::Add,
                        binary(BinOp::Div, Expr::Int(1), Expr::Int(2)),
                        Expr::Int(3),
                    ),
                ),
            ),
            ("_ = true.", binary(BinOp::Match, Expr::Dummy, Expr::Bool(true))),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), vec![expected], "input: {input}");
        }
    }

    #[test]
    fn calls() {
        let cases: Vec<(&str, Expr)> = vec![
            (
                "foo().",
                Expr::Call {
                    callable: Box::new(atom("foo")),
                    args: vec![],
                },
            ),
            (
                "Bar().",
                Expr::Call {
                    callable: Box::new(var("Bar")),
                    args: vec![],
                },
            ),
            (
                "identity(X).",
                Expr::Call {
                    callable: Box::new(atom("identity")),
                    args: vec![var("X")],
                },
            ),
            (
                "(fun(X) -> X end)(true).",
                Expr::Call {
                    callable: Box::new(Expr::Bracket(Box::new(Expr::Define(Definition {
                        name: None,
                        branches: vec![FunBranch {
                            params: vec![var("X")],
                            guards: vec![],
                            body: vec![var("X")],
                        }],
                    })))),
                    args: vec![Expr::Bool(true)],
                },
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), vec![expected], "input: {input}");
        }
    }

    #[test]
    fn definitions() {
        assert_eq!(
            parse("fun(X) -> X end.").unwrap(),
            vec![Expr::Define(Definition {
                name: None,
                branches: vec![FunBranch {
                    params: vec![var("X")],
                    guards: vec![],
                    body: vec![var("X")],
                }],
            })]
        );
        assert_eq!(
            parse("fun (0) -> true; (_) -> false end.").unwrap(),
            vec![Expr::Define(Definition {
                name: None,
                branches: vec![
                    FunBranch {
                        params: vec![Expr::Int(0)],
                        guards: vec![],
                        body: vec![Expr::Bool(true)],
                    },
                    FunBranch {
                        params: vec![Expr::Dummy],
                        guards: vec![],
                        body: vec![Expr::Bool(false)],
                    },
                ],
            })]
        );
        assert_eq!(
            parse("fun identity(X) -> X end.").unwrap(),
            vec![Expr::Define(Definition {
                name: Some("identity".into()),
                branches: vec![FunBranch {
                    params: vec![var("X")],
                    guards: vec![],
                    body: vec![var("X")],
                }],
            })]
        );
        assert_eq!(
            parse("fun (X) when X > 0 -> X end.").unwrap(),
            vec![Expr::Define(Definition {
                name: None,
                branches: vec![FunBranch {
                    params: vec![var("X")],
                    guards: vec![binary(BinOp::Gt, var("X"), Expr::Int(0))],
                    body: vec![var("X")],
                }],
            })]
        );
    }

    #[test]
    fn control_flow() {
        assert_eq!(
            parse("if X == true -> true end.").unwrap(),
            vec![Expr::If(vec![CondBranch {
                cond: binary(BinOp::Eq, var("X"), Expr::Bool(true)),
                body: vec![Expr::Bool(true)],
            }])]
        );
        assert_eq!(
            parse("case X of 1 -> one; _ -> other end.").unwrap(),
            vec![Expr::Case {
                subject: Box::new(var("X")),
                branches: vec![
                    PatternBranch {
                        pattern: Expr::Int(1),
                        guards: vec![],
                        body: vec![atom("one")],
                    },
                    PatternBranch {
                        pattern: Expr::Dummy,
                        guards: vec![],
                        body: vec![atom("other")],
                    },
                ],
            }]
        );
        assert_eq!(
            parse("try 1/0 recover nan end.").unwrap(),
            vec![Expr::TryRecover {
                body: vec![binary(BinOp::Div, Expr::Int(1), Expr::Int(0))],
                recover: vec![atom("nan")],
            }]
        );
    }

    #[test]
    fn receive_forms() {
        assert_eq!(
            parse("receive Msg -> Msg end.").unwrap(),
            vec![Expr::Receive {
                branches: vec![PatternBranch {
                    pattern: var("Msg"),
                    guards: vec![],
                    body: vec![var("Msg")],
                }],
                after: None,
            }]
        );
        assert_eq!(
            parse("receive Msg -> Msg after 100 -> timeout end.").unwrap(),
            vec![Expr::Receive {
                branches: vec![PatternBranch {
                    pattern: var("Msg"),
                    guards: vec![],
                    body: vec![var("Msg")],
                }],
                after: Some(Box::new(CondBranch {
                    cond: Expr::Int(100),
                    body: vec![atom("timeout")],
                })),
            }]
        );
        // after branch without any receive branches
        assert_eq!(
            parse("receive after 1500 -> ok end.").unwrap(),
            vec![Expr::Receive {
                branches: vec![],
                after: Some(Box::new(CondBranch {
                    cond: Expr::Int(1500),
                    body: vec![atom("ok")],
                })),
            }]
        );
    }

    #[test]
    fn parse_errors() {
        let cases: Vec<(&str, ParseError)> = vec![
            ("", ParseError::Missing(Token::Dot)),
            ("1", ParseError::Missing(Token::Dot)),
            ("(1.", ParseError::Unexpected(Token::Dot)),
            ("{1,2.", ParseError::Unexpected(Token::Dot)),
            ("1(2).", ParseError::Unexpected(Token::LParen)),
            ("* 5.", ParseError::Unexpected(Token::Star)),
            ("fun", ParseError::Eof),
            ("try recover x end.", ParseError::Unexpected(Token::Recover)),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap_err(), expected, "input: {input}");
        }
    }
}
