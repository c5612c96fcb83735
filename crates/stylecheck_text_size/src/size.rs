use std::fmt;

/// A byte offset into source text.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TextSize {
    raw: u32,
}

impl TextSize {
    /// Length of `text` in bytes.
    ///
    /// # Panics
    /// If `text` is longer than `u32::MAX` bytes.
    pub fn of(text: &str) -> Self {
        Self::try_from(text.len()).expect("text is longer than u32::MAX bytes")
    }

    pub const fn to_usize(self) -> usize {
        self.raw as usize
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<u32> for TextSize {
    fn from(raw: u32) -> Self {
        Self { raw }
    }
}

impl TryFrom<usize> for TextSize {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Ok(u32::try_from(value)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_counts_bytes() {
        assert_eq!(TextSize::of("abc"), TextSize::from(3));
        assert_eq!(TextSize::of("é"), TextSize::from(2));
    }

    #[test]
    fn test_try_from_usize() {
        assert_eq!(TextSize::try_from(7usize).unwrap().to_usize(), 7);
    }
}
