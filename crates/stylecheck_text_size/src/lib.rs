//! Byte offsets and ranges into source text.
//!
//! Offsets are `u32`: source files larger than 4 GiB are not supported.

mod range;
mod size;

pub use range::TextRange;
pub use size::TextSize;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(TextSize, u32);
    assert_eq_size!(TextRange, u64);
    assert_eq_size!(Option<TextSize>, u64);

    #[test]
    fn test_index_str_by_range() {
        let source = "int userId = 1;";
        let range = TextRange::new(TextSize::from(4), TextSize::from(10));
        assert_eq!(&source[range], "userId");
    }
}
