use stylecheck_text_size::TextRange;
use thiserror::Error;

use crate::{Category, Identifier, NamingPattern};

/// An identifier that does not match its category's naming pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Code style violated: {category} name must use {expected}: {name}")]
pub struct StyleViolation {
    pub category: Category,
    pub name: String,
    /// Convention description, e.g. `camelCase`.
    pub expected: String,
    /// Location of the identifier in the checked source.
    pub range: TextRange,
}

impl StyleViolation {
    pub fn new(identifier: &Identifier, pattern: &NamingPattern) -> Self {
        Self {
            category: identifier.category,
            name: identifier.name.to_string(),
            expected: pattern.description().to_string(),
            range: identifier.range,
        }
    }
}

/// A configured naming format that is not a valid regular expression.
#[derive(Debug, Error)]
#[error("invalid {category} name format '{format}': {source}")]
pub struct InvalidPattern {
    pub category: Category,
    pub format: String,
    #[source]
    pub source: regex::Error,
}

impl InvalidPattern {
    /// Compiles `format` for `category`.
    pub(crate) fn compile(category: Category, format: &str) -> Result<NamingPattern, Self> {
        NamingPattern::new(format).map_err(|source| Self {
            category,
            format: format.to_string(),
            source,
        })
    }
}
