//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before escape
//! cooking and conversion to `merl_ir::Token`.

use logos::Logos;

/// Raw token from logos (before cooking).
///
/// Reserved words and textual operators are explicit `#[token]` entries so
/// they win over the atom regex; everything else is matched by class.
#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    /// `%` comment, running to end of line. Dropped during conversion.
    #[regex(r"%[^\n]*")]
    Comment,

    // Reserved words
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("case")]
    Case,
    #[token("of")]
    Of,
    #[token("receive")]
    Receive,
    #[token("after")]
    After,
    #[token("end")]
    End,
    #[token("when")]
    When,
    #[token("try")]
    Try,
    #[token("recover")]
    Recover,

    // Textual operators
    #[token("not")]
    Not,
    #[token("rem")]
    Rem,
    #[token("and")]
    And,
    #[token("or")]
    Or,

    // Symbolic operators, longest first
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("++")]
    PlusPlus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,

    // Punctuation
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Classes
    /// Integer literal. Overflow surfaces as a lex error.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    /// Atom: lowercase-initial name.
    #[regex(r"[a-z][A-Za-z0-9_@]*")]
    Atom,

    /// Variable: uppercase-initial name, or a named `_`-prefixed one.
    #[regex(r"[A-Z][A-Za-z0-9_@]*")]
    #[regex(r"_[A-Za-z0-9_@]+")]
    Var,

    /// The anonymous placeholder.
    #[token("_")]
    Dummy,

    /// String literal, escapes still raw.
    #[regex(r#""(?:\\.|[^"\\])*""#)]
    Str,
}
