//! Line grammar for flowchart-style mind-map statements.
//!
//! Each cleaned source line is matched against two statement forms, in
//! order:
//!
//! ```text
//! token      := (alphanumeric | '_')+
//! shape      := opener body closer
//! opener     := ('[' | '(' | '{')+ | '>'
//! body       := '"' (not '"')* '"' ws* | balanced text
//! closer     := mirror(opener), or ']' | '>' after '>'
//! node_ref   := token shape?
//! connector  := ws* '-'+ '>'? ws* ('|' (not '|')* '|' ws*)?
//! edge       := node_ref connector node_ref <rest ignored>
//! node       := token shape <rest ignored>
//! ```
//!
//! An unquoted body ends at the first closer found outside nested
//! brackets, so `A[Calvin Cycle (light-independent)]` keeps its
//! parentheses. Lines matching neither form yield `None`. Matching is
//! anchored at the start of the line.

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, delimited, opt, terminated},
    error::{ContextError, ErrMode, StrContext},
    token::{literal, take_till, take_while},
};

use crate::source::is_word_char;

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A node reference: the raw id token plus the label from its shape, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeRef<'src> {
    pub(crate) id: &'src str,
    pub(crate) label: Option<String>,
}

/// A recognized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement<'src> {
    /// `parent --> child`
    Edge {
        parent: NodeRef<'src>,
        child: NodeRef<'src>,
    },
    /// `id[label]` with no connector
    Node(NodeRef<'src>),
}

/// Classifies one cleaned line.
pub(crate) fn statement(line: &str) -> Option<Statement<'_>> {
    let mut input = line;
    if let Ok((parent, child)) = edge.parse_next(&mut input) {
        return Some(Statement::Edge { parent, child });
    }

    let mut input = line;
    lone_node.parse_next(&mut input).ok().map(Statement::Node)
}

/// Parse a node id token
fn node_id<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., is_word_char)
        .context(StrContext::Label("node id"))
        .parse_next(input)
}

/// Parse the opening delimiter run of a shape: `[`, `((`, `([`, `{{`, `>`...
fn shape_opener<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((take_while(1.., ['[', '(', '{']), ">")).parse_next(input)
}

/// Closing runs accepted for an opening run: its mirror image, or `]` and
/// `>` for the asymmetric `>` shape.
fn closers_for(opener: &str) -> Vec<String> {
    if opener == ">" {
        return vec!["]".to_string(), ">".to_string()];
    }

    let mirrored = opener
        .chars()
        .rev()
        .map(|ch| match ch {
            '[' => ']',
            '(' => ')',
            '{' => '}',
            other => other,
        })
        .collect();
    vec![mirrored]
}

/// Parse one of the accepted closing runs
fn shape_closer<'src>(input: &mut Input<'src>, closers: &[String]) -> IResult<&'src str> {
    for closer in closers {
        let mut parser = literal::<_, _, ErrMode<ContextError>>(closer.as_str());
        if let Ok(matched) = parser.parse_next(input) {
            return Ok(matched);
        }
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Parse a double-quoted label body; the quotes may enclose delimiters
fn quoted_body<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    terminated(delimited('"', take_till(0.., '"'), '"'), space0).parse_next(input)
}

/// Parse an unquoted label body, up to the first closer outside nested
/// brackets
fn bare_body<'src>(input: &mut Input<'src>, closers: &[String]) -> IResult<&'src str> {
    let source: &'src str = *input;
    let mut depth = 0usize;

    for (offset, ch) in source.char_indices() {
        let rest = &source[offset..];
        if depth == 0 && closers.iter().any(|closer| rest.starts_with(closer.as_str())) {
            *input = rest;
            return Ok(&source[..offset]);
        }

        match ch {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Parse a shape and return its cleaned label, `None` when the label is blank.
///
/// Shorter opener runs are retried when the full run has no matching
/// closer, so `A[(x) y]` reads as a `[` shape labeled `(x) y`.
fn shape_label<'src>(input: &mut Input<'src>) -> IResult<Option<String>> {
    let start: &'src str = *input;
    let run = shape_opener.parse_next(input)?;

    for len in (1..=run.len()).rev() {
        *input = &start[len..];
        let closers = closers_for(&run[..len]);
        if let Ok(label) = shape_body(input, &closers) {
            return Ok(label);
        }
    }

    *input = start;
    Err(ErrMode::Backtrack(ContextError::new()))
}

fn shape_body<'src>(input: &mut Input<'src>, closers: &[String]) -> IResult<Option<String>> {
    let closer = |input: &mut Input<'src>| shape_closer(input, closers);

    alt((
        terminated(quoted_body, closer),
        terminated(|input: &mut Input<'src>| bare_body(input, closers), closer),
    ))
    .map(clean_label)
    .parse_next(input)
}

/// Parse `token shape?`
fn node_ref<'src>(input: &mut Input<'src>) -> IResult<NodeRef<'src>> {
    (node_id, opt(shape_label))
        .map(|(id, label)| NodeRef {
            id,
            label: label.flatten(),
        })
        .parse_next(input)
}

/// Parse edge text written between pipes: `|yes|`
fn edge_text<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    delimited('|', take_till(0.., '|'), '|').parse_next(input)
}

/// Parse a connector: one or more dashes, an optional arrow head, and
/// optional edge text
fn connector<'src>(input: &mut Input<'src>) -> IResult<()> {
    (
        space0,
        take_while(1.., '-'),
        opt('>'),
        space0,
        opt(terminated(edge_text, space0)),
    )
        .void()
        .context(StrContext::Label("connector"))
        .parse_next(input)
}

fn edge<'src>(input: &mut Input<'src>) -> IResult<(NodeRef<'src>, NodeRef<'src>)> {
    (node_ref, connector, node_ref)
        .map(|(parent, (), child)| (parent, child))
        .parse_next(input)
}

fn lone_node<'src>(input: &mut Input<'src>) -> IResult<NodeRef<'src>> {
    (node_id, shape_label)
        .map(|(id, label)| NodeRef { id, label })
        .parse_next(input)
}

/// Trims whitespace, surrounding quotes and trapezoid slashes from a label.
fn clean_label(raw: &str) -> Option<String> {
    let label = raw
        .trim()
        .trim_matches('"')
        .trim()
        .trim_matches(['/', '\\'])
        .trim();

    (!label.is_empty()).then(|| label.to_string())
}
