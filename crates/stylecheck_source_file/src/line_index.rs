use std::fmt;
use std::num::NonZeroUsize;

use stylecheck_text_size::{TextRange, TextSize};

/// Index of line start offsets for one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds the index. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_source_text(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![TextSize::default()];

        for position in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            // `\r\n` is handled at the `\n`
            if bytes[position] == b'\r' && bytes.get(position + 1) == Some(&b'\n') {
                continue;
            }
            line_starts.push(TextSize::of(&text[..=position]));
        }

        Self { line_starts }
    }

    /// Zero-indexed line containing `offset`.
    fn line_index(&self, offset: TextSize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        }
    }

    /// Line and column of `offset`. Columns count characters, not bytes.
    pub fn line_column(&self, offset: TextSize, text: &str) -> SourceLocation {
        let line = self.line_index(offset);
        let line_start = self.line_starts[line];
        let column = text[TextRange::new(line_start, offset)].chars().count();

        SourceLocation {
            line: OneIndexed::from_zero_indexed(line),
            column: OneIndexed::from_zero_indexed(column),
        }
    }
}

/// A one-indexed line or column number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    pub const fn from_zero_indexed(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One-indexed line and column of a position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: OneIndexed,
    pub column: OneIndexed,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
