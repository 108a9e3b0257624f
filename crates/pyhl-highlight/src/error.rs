use pyhl_lexer::{Token, TokenKind};
use serde::Serialize;

/// What is wrong with an error-tagged token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedLiteral,
    #[error("unexpected characters after line continuation")]
    GarbageAfterContinuation,
}

/// Lexical error with position information.
///
/// `line` and `column` are zero-based (column counts characters); the
/// displayed message is one-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Lexer error at line {}, column {}: {}", .line + 1, .column + 1, .kind)]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    pub length: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    /// Error record for `token` on line `line`, if the token is an error.
    pub fn from_token(line: usize, token: &Token) -> Option<Self> {
        let kind = match token.kind {
            TokenKind::ErrorInLiteral => LexErrorKind::UnterminatedLiteral,
            TokenKind::ErrorGarbageAfterContinuation => LexErrorKind::GarbageAfterContinuation,
            _ => return None,
        };
        Some(Self {
            line,
            column: token.start,
            length: token.len(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_error_token() {
        let token = Token::new(TokenKind::ErrorInLiteral, "'abc", 4);
        assert_eq!(
            LexError::from_token(2, &token),
            Some(LexError {
                line: 2,
                column: 4,
                length: 4,
                kind: LexErrorKind::UnterminatedLiteral,
            })
        );
    }

    #[test]
    fn test_non_error_token() {
        let token = Token::new(TokenKind::Literal, "'abc'", 0);
        assert_eq!(LexError::from_token(0, &token), None);
    }

    #[test]
    fn test_display_is_one_based() {
        let error = LexError {
            line: 0,
            column: 6,
            length: 1,
            kind: LexErrorKind::GarbageAfterContinuation,
        };
        assert_eq!(
            error.to_string(),
            "Lexer error at line 1, column 7: unexpected characters after line continuation"
        );
    }
}
