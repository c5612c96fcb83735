//! Line and column lookup for source text.

mod line_index;

pub use line_index::{LineIndex, OneIndexed, SourceLocation};

use stylecheck_text_size::TextSize;

/// Source text paired with its line index.
#[derive(Debug, Clone, Copy)]
pub struct SourceCode<'src, 'index> {
    text: &'src str,
    index: &'index LineIndex,
}

impl<'src, 'index> SourceCode<'src, 'index> {
    pub fn new(text: &'src str, index: &'index LineIndex) -> Self {
        Self { text, index }
    }

    /// Computes the one-indexed line and column of `offset`.
    pub fn line_column(&self, offset: TextSize) -> SourceLocation {
        self.index.line_column(offset, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_after_crlf() {
        let text = "class A {\r\n    int x;\n}";
        let index = LineIndex::from_source_text(text);
        let code = SourceCode::new(text, &index);
        let loc = code.line_column(TextSize::from(15));
        assert_eq!(loc.to_string(), "2:5");
    }
}
