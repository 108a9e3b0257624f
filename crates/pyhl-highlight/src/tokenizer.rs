//! Host-facing tokenizer.
//!
//! Owns the line store and the semantic snapshot. The host either hands over
//! the whole document with [`Tokenizer::set_source_text`] or re-tokenizes a
//! single edited line with [`Tokenizer::line_prop`].
//!
//! ```text
//! line i-1 exit mode ─┐
//!                     ▼
//! text ─► Scanner ─► Classifier ─► project() ─► Vec<Tag>
//!                     │
//!                     └─► exit mode stored on line i
//! ```
//!
//! Lines must be re-tokenized top to bottom for continuation state to be
//! right. Nothing enforces this: a line whose predecessor was never visited
//! starts in Normal.

use crate::classify::Classifier;
use crate::error::LexError;
use crate::lines::{Line, LineStore, Rank};
use crate::names::{GlobalNames, Hint, HintTable, Snapshot};
use crate::props::{project, Tag};
use pyhl_lexer::{Mode, Scanner, Token};
use tracing::{debug, trace};

/// Incremental line tokenizer.
#[derive(Debug, Default)]
pub struct Tokenizer {
    lines: LineStore,
    globals: GlobalNames,
    hints: HintTable,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the global name sets. Already tokenized lines keep their tags
    /// until re-tokenized.
    pub fn set_global_names(&mut self, globals: GlobalNames) {
        debug!(
            modules = globals.modules.len(),
            functions = globals.functions.len(),
            classes = globals.classes.len(),
            "global names replaced"
        );
        self.globals = globals;
    }

    /// Replace the hint table. Already tokenized lines keep their tags until
    /// re-tokenized.
    pub fn set_hints(&mut self, hints: Vec<Hint>) {
        self.hints = HintTable::new(hints);
        debug!(hints = self.hints.len(), "hints replaced");
    }

    /// Replace both halves of the semantic snapshot.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.set_global_names(snapshot.globals);
        self.set_hints(snapshot.hints);
    }

    /// Reset the store and tokenize every line of `text`.
    ///
    /// Lines are split on `\n` only, so a trailing newline yields a final
    /// empty line and `\r` stays part of the line text.
    pub fn set_source_text(&mut self, text: &str) {
        self.lines.clear();
        for (index, line) in text.split('\n').enumerate() {
            self.line_prop(index, line);
        }
        debug!(lines = self.lines.len(), "source text tokenized");
    }

    /// (Re)tokenize line `index` and return its classification array.
    ///
    /// The store grows with placeholder lines if `index` is past its end. The
    /// line's rank marker survives re-tokenization; everything else is
    /// replaced.
    pub fn line_prop(&mut self, index: usize, text: &str) -> &[Tag] {
        let entry = self.lines.entry_mode(index);
        let mut scanner = Scanner::new(text, entry);
        let mut tokens: Vec<Token> = scanner.by_ref().collect();
        let exit = scanner.mode();

        Classifier::new(&self.globals, &self.hints).classify_line(&mut tokens, index);
        let props = project(text.chars().count(), &tokens);
        trace!(
            line = index,
            ?entry,
            ?exit,
            tokens = tokens.len(),
            "line tokenized"
        );

        let line = self.lines.get_mut(index);
        *line = Line {
            text: text.to_string(),
            tokens,
            exit,
            props,
            rank: line.rank,
        };
        &line.props
    }

    /// Classification arrays of all lines, in order.
    pub fn line_properties(&self) -> Vec<&[Tag]> {
        self.lines.iter().map(|line| line.props.as_slice()).collect()
    }

    /// Errors of all lines, ordered by line then column.
    pub fn errors(&self) -> Vec<LexError> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(index, line)| {
                line.tokens
                    .iter()
                    .filter_map(move |token| LexError::from_token(index, token))
            })
            .collect()
    }

    pub fn line_ranks(&self) -> Vec<Rank> {
        self.lines.iter().map(|line| line.rank).collect()
    }

    /// Store the host's rank marker for line `index`, growing the store if
    /// needed.
    pub fn set_line_rank(&mut self, index: usize, rank: Rank) {
        self.lines.get_mut(index).rank = rank;
    }

    pub fn tokens(&self, index: usize) -> Option<&[Token]> {
        self.lines.get(index).map(|line| line.tokens.as_slice())
    }

    pub fn exit_mode(&self, index: usize) -> Option<Mode> {
        self.lines.get(index).map(|line| line.exit)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
