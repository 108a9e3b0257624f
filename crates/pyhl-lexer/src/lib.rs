//! pyhl Lexer
//!
//! Tokenizes Python source one physical line at a time for syntax highlighting.
//! Each line is scanned from an entry [`Mode`] (the exit mode of the line above)
//! so open triple-quoted strings and backslash continuations carry across line
//! boundaries without rescanning the document.
//!
//! The lexer never fails: malformed input becomes error-kind tokens.
//!
//! # Example
//!
//! ```
//! use pyhl_lexer::{Mode, Scanner, TokenKind};
//!
//! let line = Scanner::tokenize("x = \"\"\"doc", Mode::Normal);
//! assert_eq!(line.exit, Mode::DoubleTriple);
//! assert_eq!(line.tokens[2].kind, TokenKind::Literal);
//! ```

pub mod literal;
pub mod mode;
pub mod scanner;
pub mod token;

pub use mode::{Mode, Quote};
pub use scanner::{transition, ScannedLine, Scanner, Transition};
pub use token::{is_keyword, Token, TokenKind};
