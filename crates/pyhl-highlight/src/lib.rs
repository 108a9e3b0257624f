//! pyhl Highlight
//!
//! Incremental per-character syntax classification for Python editors.
//! Wraps the line lexer from `pyhl-lexer` with identifier classification
//! (keywords, syntactic cues, analyzer hints, global names), a per-line store
//! that carries lexer modes between lines, and projection of tokens onto
//! per-character tags.
//!
//! # Example
//!
//! ```
//! use pyhl_highlight::{TagClass, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.set_source_text("def f():\n    return 1");
//! let props = tokenizer.line_properties();
//! assert_eq!(props[0][0].class, TagClass::Keyword);
//! assert_eq!(props[0][4].class, TagClass::Function);
//! ```

pub mod classify;
pub mod error;
pub mod lines;
pub mod names;
pub mod props;
pub mod tokenizer;

pub use classify::Classifier;
pub use error::{LexError, LexErrorKind};
pub use lines::{Line, LineStore, Rank};
pub use names::{GlobalNames, Hint, HintKind, HintTable, Snapshot};
pub use props::{project, Tag, TagClass};
pub use tokenizer::Tokenizer;
