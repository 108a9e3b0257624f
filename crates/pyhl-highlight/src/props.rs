//! Per-character classification arrays.
//!
//! A line's tokens are expanded into one [`Tag`] per character. Characters no
//! token covers (whitespace, unmatched symbols, plain identifiers) keep the
//! default empty tag.

use pyhl_lexer::{Token, TokenKind};
use serde::Serialize;

/// Base highlighting class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TagClass {
    #[default]
    Empty = 0,
    Operator = 1,
    Number = 2,
    Literal = 3,
    Comment = 4,
    Keyword = 5,
    Module = 6,
    Class = 7,
    Function = 8,
}

/// Classification of one character: a base class plus an error flag the host
/// renders as an underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Tag {
    pub class: TagClass,
    pub error: bool,
}

impl Tag {
    pub const EMPTY: Tag = Tag::new(TagClass::Empty);

    /// Bit set in [`Tag::bits`] for error characters.
    pub const ERROR_BIT: u8 = 0x80;

    pub const fn new(class: TagClass) -> Self {
        Self {
            class,
            error: false,
        }
    }

    pub const fn error(class: TagClass) -> Self {
        Self { class, error: true }
    }

    /// Tag written for a token kind. `None` leaves the character as it is.
    pub fn for_kind(kind: TokenKind) -> Option<Tag> {
        let tag = match kind {
            TokenKind::Identifier => return None,
            TokenKind::Operator => Tag::new(TagClass::Operator),
            TokenKind::Number => Tag::new(TagClass::Number),
            TokenKind::Literal => Tag::new(TagClass::Literal),
            TokenKind::Comment => Tag::new(TagClass::Comment),
            TokenKind::Keyword => Tag::new(TagClass::Keyword),
            TokenKind::ModuleName => Tag::new(TagClass::Module),
            TokenKind::ClassName => Tag::new(TagClass::Class),
            TokenKind::FunctionName => Tag::new(TagClass::Function),
            TokenKind::ErrorInLiteral => Tag::error(TagClass::Literal),
            TokenKind::ErrorGarbageAfterContinuation => Tag::error(TagClass::Empty),
        };
        Some(tag)
    }

    /// One-byte packing: class code in the low bits, [`Tag::ERROR_BIT`] on top.
    pub fn bits(self) -> u8 {
        let flag = if self.error { Self::ERROR_BIT } else { 0 };
        self.class as u8 | flag
    }
}

/// Project `tokens` onto a line of `len` characters.
pub fn project(len: usize, tokens: &[Token]) -> Vec<Tag> {
    let mut props = vec![Tag::EMPTY; len];
    for token in tokens {
        let Some(tag) = Tag::for_kind(token.kind) else {
            continue;
        };
        let start = token.start.min(len);
        let end = token.end().min(len);
        for slot in &mut props[start..end] {
            *slot = tag;
        }
    }
    props
}
