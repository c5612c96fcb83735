use lazy_static::lazy_static;
use regex::Regex;
use stylecheck_config::{
    CAMEL_CASE_FORMAT, PASCAL_CASE_FORMAT, SNAKE_CASE_FORMAT, describe_format,
};

lazy_static! {
    pub(crate) static ref CAMEL_CASE: NamingPattern = NamingPattern::new(CAMEL_CASE_FORMAT).unwrap();
    pub(crate) static ref SNAKE_CASE: NamingPattern = NamingPattern::new(SNAKE_CASE_FORMAT).unwrap();
    pub(crate) static ref PASCAL_CASE: NamingPattern =
        NamingPattern::new(PASCAL_CASE_FORMAT).unwrap();
}

/// A compiled naming format that must match a whole identifier.
#[derive(Debug, Clone)]
pub struct NamingPattern {
    regex: Regex,
    description: String,
}

impl NamingPattern {
    /// Compiles `format`, anchored at both ends.
    pub fn new(format: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{format})$"))?,
            description: describe_format(format),
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Convention name shown in violation messages.
    pub fn description(&self) -> &str {
        &self.description
    }
}
