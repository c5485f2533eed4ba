//! Parse error types.

use merl_ir::Token;
use merl_lexer::LexError;
use thiserror::Error;

/// Error produced while turning source text into an AST.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    /// Ran out of tokens mid-expression.
    #[error("unexpected end of input")]
    Eof,
    /// A token that does not fit the grammar at this point.
    #[error("unexpected: {0}")]
    Unexpected(Token),
    /// A required token never showed up.
    #[error("missing: {0}")]
    Missing(Token),
    /// Tokenization failure.
    #[error(transparent)]
    Lex(#[from] LexError),
}
