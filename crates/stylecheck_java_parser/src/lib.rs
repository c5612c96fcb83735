//! Java parser adapter built on tree-sitter.
//!
//! tree-sitter always produces a tree and recovers from syntax errors by
//! inserting `ERROR` and missing nodes. [`JavaParser::parse`] turns any such
//! recovery into a [`ParseError`], so callers only ever see trees of
//! syntactically valid source.

use stylecheck_source_file::{LineIndex, SourceCode};
use stylecheck_text_size::TextSize;
use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

pub use tree_sitter;

/// Maximum number of characters of offending source quoted in a syntax error.
const SNIPPET_LEN: usize = 24;

/// Reasons a source file could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The bundled grammar is incompatible with the linked tree-sitter runtime.
    #[error("failed to load the Java grammar: {0}")]
    Language(String),
    /// tree-sitter gave up without producing a tree.
    #[error("parser produced no syntax tree")]
    Aborted,
    #[error("syntax error at {line}:{column}: {reason}")]
    Syntax {
        /// One-indexed line of the first erroneous node.
        line: usize,
        /// One-indexed column (in characters) of the first erroneous node.
        column: usize,
        reason: String,
    },
}

/// A syntax tree together with the source it was parsed from.
pub struct ParseResult<'src> {
    pub tree: Tree,
    pub source: &'src str,
}

impl<'src> ParseResult<'src> {
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Parser for Java source files.
///
/// Not `Sync`: use one parser per thread.
pub struct JavaParser {
    parser: Parser,
    language_error: Option<String>,
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaParser {
    pub fn new() -> Self {
        let mut parser = Parser::new();
        let language_error = parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .err()
            .map(|e| e.to_string());
        Self {
            parser,
            language_error,
        }
    }

    /// Parses `source`, failing on the first syntax error in the tree.
    pub fn parse<'src>(&mut self, source: &'src str) -> Result<ParseResult<'src>, ParseError> {
        if let Some(message) = &self.language_error {
            return Err(ParseError::Language(message.clone()));
        }

        let tree = self.parser.parse(source, None).ok_or(ParseError::Aborted)?;

        if let Some(node) = first_error(tree.root_node()) {
            return Err(syntax_error(node, source));
        }

        Ok(ParseResult { tree, source })
    }
}

/// Finds the first `ERROR` or missing node in pre-order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_error)
}

#[allow(clippy::cast_possible_truncation)]
fn syntax_error(node: Node, source: &str) -> ParseError {
    let start = node.start_byte();
    let index = LineIndex::from_source_text(source);
    let location = SourceCode::new(source, &index).line_column(TextSize::from(start as u32));

    let reason = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let snippet: String = source[start..node.end_byte()]
            .split(['\n', '\r'])
            .next()
            .unwrap_or("")
            .chars()
            .take(SNIPPET_LEN)
            .collect();
        if snippet.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected `{snippet}`")
        }
    };

    ParseError::Syntax {
        line: location.line.get(),
        column: location.column.get(),
        reason,
    }
}
