use std::fmt;
use std::ops::{Index, Range};

use crate::TextSize;

/// A half-open byte range `start..end` in source text.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl TextRange {
    /// Creates a new range.
    ///
    /// # Panics
    /// If `end < start`.
    pub fn new(start: TextSize, end: TextSize) -> Self {
        assert!(start <= end, "invalid range: {start}..{end}");
        Self { start, end }
    }

    pub const fn start(self) -> TextSize {
        self.start
    }

    pub const fn end(self) -> TextSize {
        self.end
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.start.to_usize()..range.end.to_usize()
    }
}

impl Index<TextRange> for str {
    type Output = str;

    fn index(&self, index: TextRange) -> &str {
        &self[Range::<usize>::from(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    #[test]
    fn test_bounds() {
        let r = range(2, 7);
        assert_eq!(r.start(), TextSize::from(2));
        assert_eq!(r.end(), TextSize::from(7));
        assert_eq!(Range::<usize>::from(r), 2..7);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_inverted_range_panics() {
        let _ = range(5, 2);
    }
}
