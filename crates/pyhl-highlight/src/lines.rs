//! Per-line records.

use crate::props::Tag;
use pyhl_lexer::{Mode, Token};
use serde::Serialize;

/// Opaque per-line marker owned by the host. Stored and handed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rank(pub i32, pub i32);

/// Everything known about one physical line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Mode at end of line; the entry mode of the next line.
    pub exit: Mode,
    /// One tag per character of `text`.
    pub props: Vec<Tag>,
    pub rank: Rank,
}

/// Ordered line records.
///
/// The store only grows through [`LineStore::ensure`], which appends empty
/// placeholder lines up to and including the requested index. Reads never
/// grow it.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: Vec<Line>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Grow with placeholders so that `index` is valid.
    pub fn ensure(&mut self, index: usize) {
        if self.lines.len() <= index {
            self.lines.resize_with(index + 1, Line::default);
        }
    }

    /// Entry mode for line `index`: Normal for the first line, otherwise the
    /// exit mode of the line above (Normal if it was never tokenized).
    pub fn entry_mode(&self, index: usize) -> Mode {
        index
            .checked_sub(1)
            .and_then(|above| self.lines.get(above))
            .map_or(Mode::Normal, |line| line.exit)
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Mutable access, growing the store if needed.
    pub fn get_mut(&mut self, index: usize) -> &mut Line {
        self.ensure(index);
        &mut self.lines[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}
