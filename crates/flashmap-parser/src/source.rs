//! Source cleaning and line classification.
//!
//! Generated diagram text often arrives wrapped in code fences and mixed with
//! directives the mind map has no use for. This module splits the source
//! into trimmed lines, strips fence markers, and decides which lines carry
//! statements at all.

use std::borrow::Cow;

use crate::span::Span;

/// Fence markers removed from every line, longest first.
const FENCES: [&str; 2] = ["```mermaid", "```"];

/// Leading words of lines that never describe nodes or edges.
const DIRECTIVES: [&str; 10] = [
    "graph",
    "flowchart",
    "subgraph",
    "end",
    "direction",
    "classDef",
    "class",
    "style",
    "linkStyle",
    "click",
];

/// One line of source text after cleaning.
#[derive(Debug, Clone)]
pub(crate) struct SourceLine<'src> {
    text: Cow<'src, str>,
    span: Span,
}

impl<'src> SourceLine<'src> {
    /// The cleaned line text.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Span of the trimmed line in the original source.
    pub(crate) fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` for blank lines, comments and diagram directives.
    pub(crate) fn is_ignored(&self) -> bool {
        let text = self.text();
        if text.is_empty() || text.starts_with("%%") {
            return true;
        }

        let first_word = text
            .split(|c: char| !is_word_char(c))
            .next()
            .unwrap_or_default();
        DIRECTIVES.contains(&first_word)
    }
}

/// Characters allowed in node ids and directive keywords.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits `source` into cleaned lines with their original spans.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split_inclusive('\n').map(move |raw| {
        let line_start = offset;
        offset += raw.len();

        let leading = raw.len() - raw.trim_start().len();
        let trimmed = raw.trim();
        let start = line_start + leading;
        let span = Span::new(start..start + trimmed.len());

        SourceLine {
            text: strip_fences(trimmed),
            span,
        }
    })
}

fn strip_fences(line: &str) -> Cow<'_, str> {
    if !line.contains(FENCES[1]) {
        return Cow::Borrowed(line);
    }

    let mut cleaned = line.to_string();
    for fence in FENCES {
        cleaned = cleaned.replace(fence, "");
    }
    Cow::Owned(cleaned.trim().to_string())
}
