//! Token kinds shared by the lexer and the parser.

use std::fmt;

/// A lexical token.
///
/// Tokens carry their cooked payload directly (integers parsed, string
/// escapes resolved), so the parser never re-reads source text.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Integer literal.
    Int(i64),
    /// String literal with escapes already cooked.
    Str(String),
    /// Lowercase-initial name that is not a reserved word.
    Atom(String),
    /// Uppercase-initial (or `_`-prefixed, named) variable.
    Var(String),
    /// The anonymous placeholder `_`.
    Dummy,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Rem,
    Not,
    And,
    Or,
    PlusPlus,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    Bang,
    Arrow,

    // Punctuation
    Dot,
    Comma,
    Semi,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Reserved words
    Fun,
    If,
    Case,
    Of,
    Receive,
    After,
    End,
    When,
    Try,
    Recover,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{n}"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Atom(s) | Token::Var(s) => write!(f, "{s}"),
            Token::Dummy => write!(f, "_"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Rem => write!(f, "rem"),
            Token::Not => write!(f, "not"),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::PlusPlus => write!(f, "++"),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Lt => write!(f, "<"),
            Token::LtEq => write!(f, "<="),
            Token::Gt => write!(f, ">"),
            Token::GtEq => write!(f, ">="),
            Token::Eq => write!(f, "="),
            Token::Bang => write!(f, "!"),
            Token::Arrow => write!(f, "->"),
            Token::Dot => write!(f, "."),
            Token::Comma => write!(f, ","),
            Token::Semi => write!(f, ";"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Fun => write!(f, "fun"),
            Token::If => write!(f, "if"),
            Token::Case => write!(f, "case"),
            Token::Of => write!(f, "of"),
            Token::Receive => write!(f, "receive"),
            Token::After => write!(f, "after"),
            Token::End => write!(f, "end"),
            Token::When => write!(f, "when"),
            Token::Try => write!(f, "try"),
            Token::Recover => write!(f, "recover"),
        }
    }
}
