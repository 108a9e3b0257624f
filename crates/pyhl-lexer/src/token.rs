use serde::Serialize;

/// Token classification for highlighting.
///
/// The scanner only produces `Identifier`, `Operator`, `Number`, `Literal`,
/// `Comment` and the two error kinds. The name kinds are assigned later by
/// the classifier in `pyhl-highlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Operator,
    Number,
    Literal,
    Comment,

    // Refined from Identifier
    Keyword,
    ModuleName,
    ClassName,
    FunctionName,

    // Errors
    /// Single-quoted string not closed before end of line.
    ErrorInLiteral,
    /// Anything but whitespace after a continuation backslash.
    ErrorGarbageAfterContinuation,
}

impl TokenKind {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::ErrorInLiteral | TokenKind::ErrorGarbageAfterContinuation
        )
    }
}

/// A token produced by one scan step.
///
/// `start` is a character index into the line, not a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character index one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }
}

/// Python keywords recognized by the classifier.
pub const KEYWORDS: &[&str] = &[
    "class", "finally", "is", "return", "continue", "for", "lambda", "try", "def", "from",
    "nonlocal", "while", "and", "del", "global", "not", "with", "as", "elif", "if", "or",
    "yield", "assert", "else", "import", "pass", "break", "except", "in", "raise", "async",
    "await",
];

/// Check if a word is a keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_len_counts_chars() {
        let token = Token::new(TokenKind::Literal, "'héllo'", 4);
        assert_eq!(token.len(), 7);
        assert_eq!(token.end(), 11);
    }

    #[test]
    fn test_keywords() {
        assert!(is_keyword("def"));
        assert!(is_keyword("await"));
        assert!(!is_keyword("True"));
        assert!(!is_keyword("print"));
    }

    #[test]
    fn test_error_kinds() {
        assert!(TokenKind::ErrorInLiteral.is_error());
        assert!(TokenKind::ErrorGarbageAfterContinuation.is_error());
        assert!(!TokenKind::Literal.is_error());
    }
}
