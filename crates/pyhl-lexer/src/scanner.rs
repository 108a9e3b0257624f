use crate::literal::scan_literal;
use crate::mode::{Mode, Quote};
use crate::token::{Token, TokenKind};

/// Fixed lexeme catalogue. A lexeme always comes before any shorter lexeme
/// that is its prefix, so the first hit is the longest.
const LEXEMES: &[&str] = &[
    "**=", "\"\"\"", "'''", "**", "==", "!=", "+=", "-=", "/=", "*=", "&=", "|=", "(", ")",
    "[", "]", "{", "}", ":", ";", ".", ",", "#", "+", "-", "=", "/", "\\", "*", "&", "|",
    "\"", "'",
];

/// Tokens of one line and the mode the line ends in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub tokens: Vec<Token>,
    pub exit: Mode,
}

/// One step of the mode machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub token: Token,
    /// Character index where the next step starts.
    pub end: usize,
    pub mode: Mode,
}

/// Take the next token of `chars` starting at `cursor` in `mode`.
///
/// Returns `None` when nothing but unmatched characters remain; the mode
/// then stays as it was. Every `Some` consumes at least one character.
pub fn transition(mode: Mode, chars: &[char], cursor: usize) -> Option<Transition> {
    if cursor >= chars.len() {
        return None;
    }

    if mode.is_literal() {
        let literal = scan_literal(chars, cursor, mode);
        let text: String = chars[cursor..literal.end].iter().collect();
        return Some(Transition {
            token: Token::new(literal.kind, text, cursor),
            end: literal.end,
            mode: literal.mode,
        });
    }

    let mut step = scan_normal(chars, cursor)?;

    // An opening quote and the literal body form a single token.
    if step.mode.is_literal() {
        let literal = scan_literal(chars, step.end, step.mode);
        step.token.text.extend(&chars[step.end..literal.end]);
        step.token.kind = literal.kind;
        step.end = literal.end;
        step.mode = literal.mode;
    }

    if mode == Mode::Continuation
        && step.token.kind != TokenKind::Comment
        && chars[..cursor].iter().any(|c| !c.is_whitespace())
    {
        step.token.kind = TokenKind::ErrorGarbageAfterContinuation;
    }

    Some(step)
}

/// Line scanner.
///
/// Yields the tokens of a single physical line, tracking the mode machine as
/// it goes. After the iterator is exhausted, [`Scanner::mode`] is the exit
/// mode of the line.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    mode: Mode,
}

impl Scanner {
    /// Create a scanner for `line` starting in `entry`.
    pub fn new(line: &str, entry: Mode) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            mode: entry,
        }
    }

    /// Tokenize a whole line.
    pub fn tokenize(line: &str, entry: Mode) -> ScannedLine {
        let mut scanner = Scanner::new(line, entry);
        let tokens = scanner.by_ref().collect();
        ScannedLine {
            tokens,
            exit: scanner.mode,
        }
    }

    /// Current mode; the exit mode once the line is consumed.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let step = transition(self.mode, &self.chars, self.pos)?;
        self.pos = step.end;
        self.mode = step.mode;
        Some(step.token)
    }
}

// --- Normal mode ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternative {
    Number,
    Lexeme,
    Word,
}

#[derive(Debug, Clone, Copy)]
struct Match {
    start: usize,
    len: usize,
    alternative: Alternative,
}

/// Scan one token in normal text. Opening quotes come back with the literal
/// mode they open and only the quote consumed.
fn scan_normal(chars: &[char], cursor: usize) -> Option<Transition> {
    let found = (cursor..chars.len()).find_map(|at| longest_at(chars, at))?;
    let end = found.start + found.len;
    let text: String = chars[found.start..end].iter().collect();

    let (kind, mode, end) = match found.alternative {
        Alternative::Number => (TokenKind::Number, Mode::Normal, end),
        Alternative::Word => (TokenKind::Identifier, Mode::Normal, end),
        Alternative::Lexeme => match text.as_str() {
            "#" => (TokenKind::Comment, Mode::Normal, chars.len()),
            "\\" => (TokenKind::Operator, Mode::Continuation, end),
            lexeme => match Quote::from_lexeme(lexeme) {
                Some(quote) => {
                    let raw = found.start > 0 && chars[found.start - 1] == 'r';
                    (TokenKind::Literal, quote.open(raw), end)
                }
                None => (TokenKind::Operator, Mode::Normal, end),
            },
        },
    };

    let text = if kind == TokenKind::Comment {
        chars[found.start..].iter().collect()
    } else {
        text
    };

    Some(Transition {
        token: Token::new(kind, text, found.start),
        end,
        mode,
    })
}

/// Longest alternative matching at `at`. Ties go to the earlier alternative.
fn longest_at(chars: &[char], at: usize) -> Option<Match> {
    let candidates = [
        (Alternative::Number, number_len(chars, at)),
        (Alternative::Lexeme, lexeme_len(chars, at)),
        (Alternative::Word, word_len(chars, at)),
    ];

    let mut best: Option<Match> = None;
    for (alternative, len) in candidates {
        if len > 0 && best.map_or(true, |b| len > b.len) {
            best = Some(Match {
                start: at,
                len,
                alternative,
            });
        }
    }
    best
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\b`: word-ness differs on either side of `at`.
fn is_boundary(chars: &[char], at: usize) -> bool {
    let before = at
        .checked_sub(1)
        .and_then(|i| chars.get(i))
        .is_some_and(|&c| is_word(c));
    let after = chars.get(at).is_some_and(|&c| is_word(c));
    before != after
}

fn digits(chars: &[char], from: usize) -> usize {
    chars[from..].iter().take_while(|c| c.is_ascii_digit()).count()
}

/// `\b[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?\b`, longest end.
fn number_len(chars: &[char], at: usize) -> usize {
    if !is_boundary(chars, at) {
        return 0;
    }

    let mut pos = at;
    if matches!(chars.get(pos), Some('+' | '-')) {
        pos += 1;
    }

    // Every place the mantissa can end.
    let whole = digits(chars, pos);
    let mut mantissa_ends: Vec<usize> = (1..=whole).map(|n| pos + n).collect();
    let dot = pos + whole;
    if chars.get(dot) == Some(&'.') {
        let fraction = digits(chars, dot + 1);
        mantissa_ends.extend((1..=fraction).map(|n| dot + 1 + n));
    }

    mantissa_ends
        .into_iter()
        .flat_map(|end| std::iter::once(end).chain(exponent_ends(chars, end)))
        .filter(|&end| is_boundary(chars, end))
        .max()
        .map_or(0, |end| end - at)
}

fn exponent_ends(chars: &[char], from: usize) -> Vec<usize> {
    if !matches!(chars.get(from), Some('e' | 'E')) {
        return Vec::new();
    }
    let mut pos = from + 1;
    if matches!(chars.get(pos), Some('+' | '-')) {
        pos += 1;
    }
    (1..=digits(chars, pos)).map(|n| pos + n).collect()
}

fn lexeme_len(chars: &[char], at: usize) -> usize {
    LEXEMES
        .iter()
        .find(|lexeme| {
            lexeme
                .chars()
                .enumerate()
                .all(|(i, c)| chars.get(at + i) == Some(&c))
        })
        .map_or(0, |lexeme| lexeme.chars().count())
}

/// `\b\w+\b`
fn word_len(chars: &[char], at: usize) -> usize {
    if !is_boundary(chars, at) {
        return 0;
    }
    chars[at..].iter().take_while(|&&c| is_word(c)).count()
}
