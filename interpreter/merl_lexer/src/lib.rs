//! Tokenizer for merl.
//!
//! Drives the logos-derived [`RawToken`](raw_token::RawToken) scanner over
//! the source text, cooks string escapes, and produces `merl_ir::Token`s
//! for the parser.

mod raw_token;

use logos::Logos;
use merl_ir::Token;
use thiserror::Error;

use raw_token::RawToken;

/// Lexing error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input that matches no token class, or an out-of-range integer.
    #[error("invalid token '{0}'")]
    Invalid(String),
    /// Unknown backslash escape inside a string literal.
    #[error("invalid escape '\\{0}'")]
    InvalidEscape(char),
}

/// Convert source text to a list of tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(input);
    while let Some(result) = lexer.next() {
        match result {
            Ok(RawToken::Comment) => {}
            Ok(raw) => tokens.push(convert(&raw, lexer.slice())?),
            Err(()) => return Err(LexError::Invalid(lexer.slice().to_string())),
        }
    }
    Ok(tokens)
}

/// Map a raw token (plus its source slice) to an IR token.
fn convert(raw: &RawToken, slice: &str) -> Result<Token, LexError> {
    Ok(match raw {
        RawToken::Comment => unreachable!("comments are dropped before conversion"),
        RawToken::Int(n) => Token::Int(*n),
        RawToken::Atom => Token::Atom(slice.to_string()),
        RawToken::Var => Token::Var(slice.to_string()),
        RawToken::Dummy => Token::Dummy,
        RawToken::Str => Token::Str(cook_string(slice)?),
        RawToken::Fun => Token::Fun,
        RawToken::If => Token::If,
        RawToken::Case => Token::Case,
        RawToken::Of => Token::Of,
        RawToken::Receive => Token::Receive,
        RawToken::After => Token::After,
        RawToken::End => Token::End,
        RawToken::When => Token::When,
        RawToken::Try => Token::Try,
        RawToken::Recover => Token::Recover,
        RawToken::Not => Token::Not,
        RawToken::Rem => Token::Rem,
        RawToken::And => Token::And,
        RawToken::Or => Token::Or,
        RawToken::Arrow => Token::Arrow,
        RawToken::EqEq => Token::EqEq,
        RawToken::NotEq => Token::NotEq,
        RawToken::LtEq => Token::LtEq,
        RawToken::GtEq => Token::GtEq,
        RawToken::PlusPlus => Token::PlusPlus,
        RawToken::Plus => Token::Plus,
        RawToken::Minus => Token::Minus,
        RawToken::Star => Token::Star,
        RawToken::Slash => Token::Slash,
        RawToken::Lt => Token::Lt,
        RawToken::Gt => Token::Gt,
        RawToken::Eq => Token::Eq,
        RawToken::Bang => Token::Bang,
        RawToken::Dot => Token::Dot,
        RawToken::Comma => Token::Comma,
        RawToken::Semi => Token::Semi,
        RawToken::LParen => Token::LParen,
        RawToken::RParen => Token::RParen,
        RawToken::LBrace => Token::LBrace,
        RawToken::RBrace => Token::RBrace,
        RawToken::LBracket => Token::LBracket,
        RawToken::RBracket => Token::RBracket,
    })
}

/// Strip the surrounding quotes and resolve backslash escapes.
fn cook_string(quoted: &str) -> Result<String, LexError> {
    // The regex guarantees a leading and trailing quote.
    let inner = &quoted[1..quoted.len() - 1];
    let mut cooked = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        // The regex guarantees a character after every backslash.
        match chars.next() {
            Some('n') => cooked.push('\n'),
            Some('t') => cooked.push('\t'),
            Some('r') => cooked.push('\r'),
            Some('\\') => cooked.push('\\'),
            Some('"') => cooked.push('"'),
            Some('\'') => cooked.push('\''),
            Some('0') => cooked.push('\0'),
            Some(other) => return Err(LexError::InvalidEscape(other)),
            None => return Err(LexError::Invalid(quoted.to_string())),
        }
    }
    Ok(cooked)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_and_literals() {
        let cases: Vec<(&str, Vec<Token>)> = vec![
            ("", vec![]),
            ("foo", vec![Token::Atom("foo".into())]),
            ("bar   ", vec![Token::Atom("bar".into())]),
            ("other_@Atom", vec![Token::Atom("other_@Atom".into())]),
            ("X", vec![Token::Var("X".into())]),
            (" Abc\t", vec![Token::Var("Abc".into())]),
            (" _ ", vec![Token::Dummy]),
            (" _This\t", vec![Token::Var("_This".into())]),
            ("42", vec![Token::Int(42)]),
            ("  123  ", vec![Token::Int(123)]),
        ];
        for (input, expected) in cases {
            assert_eq!(tokenize(input).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn operators_and_punctuation() {
        let cases: Vec<(&str, Vec<Token>)> = vec![
            (".", vec![Token::Dot]),
            (",", vec![Token::Comma]),
            (";", vec![Token::Semi]),
            ("()", vec![Token::LParen, Token::RParen]),
            ("{}", vec![Token::LBrace, Token::RBrace]),
            ("+", vec![Token::Plus]),
            ("->", vec![Token::Arrow]),
            ("when", vec![Token::When]),
            ("<=", vec![Token::LtEq]),
            (
                "not Thing",
                vec![Token::Not, Token::Var("Thing".into())],
            ),
            (
                "2 + 3",
                vec![Token::Int(2), Token::Plus, Token::Int(3)],
            ),
            (
                "36-X",
                vec![Token::Int(36), Token::Minus, Token::Var("X".into())],
            ),
            (
                "8*14",
                vec![Token::Int(8), Token::Star, Token::Int(14)],
            ),
            (
                "2*PI",
                vec![Token::Int(2), Token::Star, Token::Var("PI".into())],
            ),
            (
                "(2+7)/3",
                vec![
                    Token::LParen,
                    Token::Int(2),
                    Token::Plus,
                    Token::Int(7),
                    Token::RParen,
                    Token::Slash,
                    Token::Int(3),
                ],
            ),
            (
                "(_)",
                vec![Token::LParen, Token::Dummy, Token::RParen],
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(tokenize(input).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            tokenize("% hey, skip this comment\n ok").unwrap(),
            vec![Token::Atom("ok".into())]
        );
        assert_eq!(
            tokenize("alone  % also skip that comment").unwrap(),
            vec![Token::Atom("alone".into())]
        );
    }

    #[test]
    fn strings() {
        assert_eq!(tokenize(r#""""#).unwrap(), vec![Token::Str(String::new())]);
        assert_eq!(
            tokenize(r#""Hello, World!""#).unwrap(),
            vec![Token::Str("Hello, World!".into())]
        );
        assert_eq!(
            tokenize(r#""\"Hello,\nWorld!\"""#).unwrap(),
            vec![Token::Str("\"Hello,\nWorld!\"".into())]
        );
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            tokenize("#"),
            Err(LexError::Invalid("#".to_string()))
        );
        assert_eq!(
            tokenize(r#""\q""#),
            Err(LexError::InvalidEscape('q'))
        );
    }

    #[test]
    fn keywords_beat_atoms() {
        assert_eq!(
            tokenize("fund fun").unwrap(),
            vec![Token::Atom("fund".into()), Token::Fun]
        );
    }
}
