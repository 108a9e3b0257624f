//! Identifier refinement.
//!
//! Raw `Identifier` tokens are refined into keywords and name kinds. Cheap
//! syntactic cues are tried first, then per-line hints from semantic analysis,
//! then the document-wide global names as a fallback.

use crate::names::{GlobalNames, HintTable};
use pyhl_lexer::{is_keyword, Token, TokenKind};

/// Borrowed view of the semantic snapshot used for one line.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    globals: &'a GlobalNames,
    hints: &'a HintTable,
}

impl<'a> Classifier<'a> {
    pub fn new(globals: &'a GlobalNames, hints: &'a HintTable) -> Self {
        Self { globals, hints }
    }

    /// Kind for `token` on line `line`, given the token before it on the same
    /// line. Only identifiers are refined.
    pub fn classify(&self, token: &Token, line: usize, previous: Option<&Token>) -> TokenKind {
        if token.kind != TokenKind::Identifier {
            return token.kind;
        }
        let name = token.text.as_str();

        if is_keyword(name) {
            return TokenKind::Keyword;
        }

        match previous {
            Some(prev) if prev.kind == TokenKind::Keyword && prev.text == "def" => {
                return TokenKind::FunctionName;
            }
            Some(prev) if prev.kind == TokenKind::Keyword && prev.text == "from" => {
                return TokenKind::ModuleName;
            }
            _ => {}
        }

        if let Some(kind) = self.hints.lookup(line, name) {
            return kind.token_kind();
        }

        if self.globals.functions.contains(name) {
            TokenKind::FunctionName
        } else if self.globals.classes.contains(name) {
            TokenKind::ClassName
        } else if self.globals.modules.contains(name) {
            TokenKind::ModuleName
        } else {
            TokenKind::Identifier
        }
    }

    /// Refine every token of a line in order.
    pub fn classify_line(&self, tokens: &mut [Token], line: usize) {
        for i in 0..tokens.len() {
            let (before, rest) = tokens.split_at_mut(i);
            let kind = self.classify(&rest[0], line, before.last());
            rest[0].kind = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{Hint, HintKind};
    use pretty_assertions::assert_eq;
    use pyhl_lexer::{Mode, Scanner};

    fn globals(modules: &[&str], functions: &[&str], classes: &[&str]) -> GlobalNames {
        let set = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        GlobalNames {
            modules: set(modules),
            functions: set(functions),
            classes: set(classes),
        }
    }

    /// Helper: scan and classify `line` as line number `line_no`.
    fn classified(
        text: &str,
        line_no: usize,
        globals: &GlobalNames,
        hints: &HintTable,
    ) -> Vec<(TokenKind, String)> {
        let mut tokens = Scanner::tokenize(text, Mode::Normal).tokens;
        Classifier::new(globals, hints).classify_line(&mut tokens, line_no);
        tokens.into_iter().map(|t| (t.kind, t.text)).collect()
    }

    fn plain(text: &str) -> Vec<(TokenKind, String)> {
        classified(text, 0, &GlobalNames::default(), &HintTable::default())
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    // =========================================================================
    // Syntactic cues
    // =========================================================================

    #[test]
    fn test_keywords() {
        assert_eq!(
            plain("if x in y"),
            vec![
                tok(TokenKind::Keyword, "if"),
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::Keyword, "in"),
                tok(TokenKind::Identifier, "y"),
            ]
        );
    }

    #[test]
    fn test_def_names_function() {
        assert_eq!(
            plain("def area(r):"),
            vec![
                tok(TokenKind::Keyword, "def"),
                tok(TokenKind::FunctionName, "area"),
                tok(TokenKind::Operator, "("),
                tok(TokenKind::Identifier, "r"),
                tok(TokenKind::Operator, ")"),
                tok(TokenKind::Operator, ":"),
            ]
        );
    }

    #[test]
    fn test_from_names_module() {
        assert_eq!(
            plain("from os import path"),
            vec![
                tok(TokenKind::Keyword, "from"),
                tok(TokenKind::ModuleName, "os"),
                tok(TokenKind::Keyword, "import"),
                tok(TokenKind::Identifier, "path"),
            ]
        );
    }

    #[test]
    fn test_def_cue_only_applies_to_next_token() {
        let kinds: Vec<TokenKind> = plain("def f(g)").into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds[3], TokenKind::Identifier);
    }

    #[test]
    fn test_def_keyword_text_must_be_keyword_kind() {
        // A `def` inside a literal is not a keyword token.
        let kinds: Vec<TokenKind> = plain("'def' x").into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![TokenKind::Literal, TokenKind::Identifier]);
    }

    #[test]
    fn test_non_identifiers_untouched() {
        let names = globals(&["1"], &["+"], &[]);
        assert_eq!(
            classified("1 + 2", 0, &names, &HintTable::default()),
            vec![
                tok(TokenKind::Number, "1"),
                tok(TokenKind::Operator, "+"),
                tok(TokenKind::Number, "2"),
            ]
        );
    }

    // =========================================================================
    // Hints and global names
    // =========================================================================

    #[test]
    fn test_hint_applies_on_its_line_only() {
        let hints = HintTable::new([Hint::new("helper", 4, HintKind::Function)]);
        let none = GlobalNames::default();
        assert_eq!(
            classified("helper()", 4, &none, &hints)[0],
            tok(TokenKind::FunctionName, "helper")
        );
        assert_eq!(
            classified("helper()", 5, &none, &hints)[0],
            tok(TokenKind::Identifier, "helper")
        );
    }

    #[test]
    fn test_hint_beats_global_function() {
        let names = globals(&[], &["Thing"], &[]);
        let hints = HintTable::new([Hint::new("Thing", 0, HintKind::Class)]);
        assert_eq!(
            classified("Thing()", 0, &names, &hints)[0],
            tok(TokenKind::ClassName, "Thing")
        );
    }

    #[test]
    fn test_def_cue_beats_hint() {
        let hints = HintTable::new([Hint::new("f", 0, HintKind::Class)]);
        assert_eq!(
            classified("def f", 0, &GlobalNames::default(), &hints)[1],
            tok(TokenKind::FunctionName, "f")
        );
    }

    #[test]
    fn test_global_precedence_function_class_module() {
        let names = globals(&["a", "b", "c"], &["a"], &["a", "b"]);
        assert_eq!(
            classified("a b c d", 0, &names, &HintTable::default()),
            vec![
                tok(TokenKind::FunctionName, "a"),
                tok(TokenKind::ClassName, "b"),
                tok(TokenKind::ModuleName, "c"),
                tok(TokenKind::Identifier, "d"),
            ]
        );
    }

    #[test]
    fn test_keywords_immune_to_names() {
        let names = globals(&["import"], &["for"], &["class"]);
        let hints = HintTable::new([Hint::new("while", 0, HintKind::Function)]);
        let kinds: Vec<TokenKind> = classified("import for class while", 0, &names, &hints)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(kinds, vec![TokenKind::Keyword; 4]);
    }
}
