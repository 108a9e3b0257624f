//! Closing-delimiter search for open string literals.

use crate::mode::Mode;
use crate::token::TokenKind;

/// Result of resolving an open literal on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralScan {
    /// Character index one past the consumed text.
    pub end: usize,
    pub kind: TokenKind,
    /// Mode after the consumed text.
    pub mode: Mode,
}

/// Search `chars[from..]` for the delimiter that closes `mode`.
///
/// Outside raw mode an occurrence past `from` that directly follows a
/// backslash is escaped content and the search moves on. Only one character
/// is looked at, so `\\"` still counts as escaped.
///
/// `mode` must be a literal mode; anything else consumes the rest of the line
/// unchanged.
pub fn scan_literal(chars: &[char], from: usize, mode: Mode) -> LiteralScan {
    let Some(quote) = mode.quote() else {
        return LiteralScan {
            end: chars.len(),
            kind: TokenKind::Literal,
            mode,
        };
    };
    let delimiter: Vec<char> = quote.as_str().chars().collect();
    let escapes = !mode.is_raw();

    let mut search = from;
    while let Some(at) = find(chars, &delimiter, search) {
        if escapes && at > from && chars[at - 1] == '\\' {
            search = at + 1;
            continue;
        }
        return LiteralScan {
            end: at + delimiter.len(),
            kind: TokenKind::Literal,
            mode: Mode::Normal,
        };
    }

    if quote.is_triple() {
        LiteralScan {
            end: chars.len(),
            kind: TokenKind::Literal,
            mode,
        }
    } else {
        LiteralScan {
            end: chars.len(),
            kind: TokenKind::ErrorInLiteral,
            mode: Mode::Normal,
        }
    }
}

fn find(chars: &[char], needle: &[char], from: usize) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i..].starts_with(needle))
}
