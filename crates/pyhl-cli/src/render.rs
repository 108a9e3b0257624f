//! Text and JSON rendering of tokenizer output.

use pyhl_highlight::{Tag, TagClass, Tokenizer};
use pyhl_lexer::Mode;
use serde::Serialize;

/// A run of equal, non-empty tags on one line. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagRun {
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub tag: Tag,
}

/// Highlighting of one line, as printed by `pyhl highlight --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub exit: Mode,
    pub runs: Vec<TagRun>,
}

/// Group consecutive equal tags, dropping untagged characters.
pub fn tag_runs(tags: &[Tag]) -> Vec<TagRun> {
    let mut runs: Vec<TagRun> = Vec::new();
    for (i, &tag) in tags.iter().enumerate() {
        if tag == Tag::EMPTY {
            continue;
        }
        match runs.last_mut() {
            Some(run) if run.end == i && run.tag == tag => run.end += 1,
            _ => runs.push(TagRun {
                start: i,
                end: i + 1,
                tag,
            }),
        }
    }
    runs
}

pub fn reports(tokenizer: &Tokenizer) -> Vec<LineReport> {
    tokenizer
        .line_properties()
        .into_iter()
        .enumerate()
        .map(|(line, tags)| LineReport {
            line,
            exit: tokenizer.exit_mode(line).unwrap_or_default(),
            runs: tag_runs(tags),
        })
        .collect()
}

fn class_name(class: TagClass) -> &'static str {
    match class {
        TagClass::Empty => "plain",
        TagClass::Operator => "operator",
        TagClass::Number => "number",
        TagClass::Literal => "literal",
        TagClass::Comment => "comment",
        TagClass::Keyword => "keyword",
        TagClass::Module => "module",
        TagClass::Class => "class",
        TagClass::Function => "function",
    }
}

/// One line of `pyhl highlight` text output.
pub fn format_report(report: &LineReport) -> String {
    let runs: Vec<String> = report
        .runs
        .iter()
        .map(|run| {
            let error = if run.tag.error { "!" } else { "" };
            format!(
                "{}{error}[{}..{})",
                class_name(run.tag.class),
                run.start,
                run.end
            )
        })
        .collect();
    format!("{:>4} | {}", report.line + 1, runs.join(" "))
}
