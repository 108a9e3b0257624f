//! Semantic snapshots supplied by the analyzer: global names and per-line hints.

use pyhl_lexer::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Known module, function and class names of the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalNames {
    pub modules: HashSet<String>,
    pub functions: HashSet<String>,
    pub classes: HashSet<String>,
}

/// Declared kind of a hinted identifier.
///
/// Deserializes from either a name (`"module"`, `"function"`, `"class"`) or the
/// analyzer's numeric codes (1, 2, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "HintKindRepr")]
pub enum HintKind {
    Module,
    Function,
    Class,
}

impl HintKind {
    pub fn token_kind(self) -> TokenKind {
        match self {
            HintKind::Module => TokenKind::ModuleName,
            HintKind::Function => TokenKind::FunctionName,
            HintKind::Class => TokenKind::ClassName,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HintKindRepr {
    Code(u8),
    Name(String),
}

impl TryFrom<HintKindRepr> for HintKind {
    type Error = String;

    fn try_from(repr: HintKindRepr) -> Result<Self, Self::Error> {
        match repr {
            HintKindRepr::Code(1) => Ok(HintKind::Module),
            HintKindRepr::Code(2) => Ok(HintKind::Function),
            HintKindRepr::Code(3) => Ok(HintKind::Class),
            HintKindRepr::Code(code) => Err(format!("unknown hint kind code {code}")),
            HintKindRepr::Name(name) => match name.as_str() {
                "module" => Ok(HintKind::Module),
                "function" => Ok(HintKind::Function),
                "class" => Ok(HintKind::Class),
                _ => Err(format!("unknown hint kind '{name}'")),
            },
        }
    }
}

/// Classification of one identifier on one line, from semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    #[serde(alias = "n")]
    pub name: String,
    #[serde(alias = "l")]
    pub line: usize,
    #[serde(alias = "k")]
    pub kind: HintKind,
}

impl Hint {
    pub fn new(name: impl Into<String>, line: usize, kind: HintKind) -> Self {
        Self {
            name: name.into(),
            line,
            kind,
        }
    }
}

/// Hints indexed by line, then name. The first hint for a key wins.
#[derive(Debug, Clone, Default)]
pub struct HintTable {
    lines: HashMap<usize, HashMap<String, HintKind>>,
}

impl HintTable {
    pub fn new(hints: impl IntoIterator<Item = Hint>) -> Self {
        let mut lines: HashMap<usize, HashMap<String, HintKind>> = HashMap::new();
        for hint in hints {
            lines
                .entry(hint.line)
                .or_default()
                .entry(hint.name)
                .or_insert(hint.kind);
        }
        Self { lines }
    }

    pub fn lookup(&self, line: usize, name: &str) -> Option<HintKind> {
        self.lines.get(&line)?.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything the analyzer hands over in one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub globals: GlobalNames,
    pub hints: Vec<Hint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_hint_wins() {
        let table = HintTable::new([
            Hint::new("x", 2, HintKind::Class),
            Hint::new("x", 2, HintKind::Function),
            Hint::new("x", 3, HintKind::Module),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(2, "x"), Some(HintKind::Class));
        assert_eq!(table.lookup(3, "x"), Some(HintKind::Module));
        assert_eq!(table.lookup(4, "x"), None);
        assert_eq!(table.lookup(2, "y"), None);
    }

    #[test]
    fn test_hint_kind_token_kinds() {
        assert_eq!(HintKind::Module.token_kind(), TokenKind::ModuleName);
        assert_eq!(HintKind::Function.token_kind(), TokenKind::FunctionName);
        assert_eq!(HintKind::Class.token_kind(), TokenKind::ClassName);
    }

    // =========================================================================
    // Deserialization
    // =========================================================================

    #[test]
    fn test_snapshot_from_json() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "globals": { "modules": ["os"], "functions": ["main"] },
                "hints": [
                    { "name": "helper", "line": 3, "kind": "function" },
                    { "n": "Foo", "l": 0, "k": 3 }
                ]
            }"#,
        )
        .unwrap();

        assert!(snapshot.globals.modules.contains("os"));
        assert!(snapshot.globals.functions.contains("main"));
        assert!(snapshot.globals.classes.is_empty());
        assert_eq!(
            snapshot.hints,
            vec![
                Hint::new("helper", 3, HintKind::Function),
                Hint::new("Foo", 0, HintKind::Class),
            ]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_unknown_hint_code_rejected() {
        let result: Result<Hint, _> = serde_json::from_str(r#"{ "n": "x", "l": 0, "k": 7 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_hint_name_rejected() {
        let result: Result<Hint, _> =
            serde_json::from_str(r#"{ "name": "x", "line": 0, "kind": "constant" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_hint_serializes_with_names() {
        let json = serde_json::to_string(&Hint::new("os", 1, HintKind::Module)).unwrap();
        assert_eq!(json, r#"{"name":"os","line":1,"kind":"module"}"#);
    }
}
