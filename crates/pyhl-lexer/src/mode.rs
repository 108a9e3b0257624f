use serde::Serialize;

/// Lexer state carried across a line boundary.
///
/// Every scanned line records the mode it ends in; that mode is the entry
/// mode of the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Normal,
    /// A `\` was seen; only whitespace or a comment may follow on this line.
    Continuation,
    SingleQuote,
    DoubleQuote,
    SingleTriple,
    DoubleTriple,
    /// `r'...'`: no backslash escapes while looking for the closing quote.
    RawSingleQuote,
    RawDoubleQuote,
    RawSingleTriple,
    RawDoubleTriple,
}

impl Mode {
    /// The delimiter that closes the literal this mode is inside of.
    pub fn quote(self) -> Option<Quote> {
        match self {
            Mode::Normal | Mode::Continuation => None,
            Mode::SingleQuote | Mode::RawSingleQuote => Some(Quote::Single),
            Mode::DoubleQuote | Mode::RawDoubleQuote => Some(Quote::Double),
            Mode::SingleTriple | Mode::RawSingleTriple => Some(Quote::SingleTriple),
            Mode::DoubleTriple | Mode::RawDoubleTriple => Some(Quote::DoubleTriple),
        }
    }

    pub fn is_raw(self) -> bool {
        matches!(
            self,
            Mode::RawSingleQuote
                | Mode::RawDoubleQuote
                | Mode::RawSingleTriple
                | Mode::RawDoubleTriple
        )
    }

    pub fn is_literal(self) -> bool {
        self.quote().is_some()
    }

    /// Raw variant of a literal mode. Other modes are returned unchanged.
    pub fn to_raw(self) -> Mode {
        match self.quote() {
            Some(quote) => quote.open(true),
            None => self,
        }
    }
}

/// Closing delimiter of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
    SingleTriple,
    DoubleTriple,
}

impl Quote {
    pub fn from_lexeme(lexeme: &str) -> Option<Quote> {
        match lexeme {
            "'" => Some(Quote::Single),
            "\"" => Some(Quote::Double),
            "'''" => Some(Quote::SingleTriple),
            "\"\"\"" => Some(Quote::DoubleTriple),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quote::Single => "'",
            Quote::Double => "\"",
            Quote::SingleTriple => "'''",
            Quote::DoubleTriple => "\"\"\"",
        }
    }

    /// Triple-quoted literals may legally span lines.
    pub fn is_triple(self) -> bool {
        matches!(self, Quote::SingleTriple | Quote::DoubleTriple)
    }

    /// The mode entered after this quote opens a literal.
    pub fn open(self, raw: bool) -> Mode {
        match (self, raw) {
            (Quote::Single, false) => Mode::SingleQuote,
            (Quote::Double, false) => Mode::DoubleQuote,
            (Quote::SingleTriple, false) => Mode::SingleTriple,
            (Quote::DoubleTriple, false) => Mode::DoubleTriple,
            (Quote::Single, true) => Mode::RawSingleQuote,
            (Quote::Double, true) => Mode::RawDoubleQuote,
            (Quote::SingleTriple, true) => Mode::RawSingleTriple,
            (Quote::DoubleTriple, true) => Mode::RawDoubleTriple,
        }
    }
}
