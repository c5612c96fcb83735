//! Naming formats for the four identifier categories.

use serde::Deserialize;

/// Lower camel case: `userId`, `x`, `countTotal2`.
pub const CAMEL_CASE_FORMAT: &str = "[a-z]+([A-Z][a-zA-Z0-9]*)*";

/// Lower snake case, letters only: `run`, `do_thing`.
pub const SNAKE_CASE_FORMAT: &str = "[a-z]+(_[a-z]+)*";

/// Upper camel case: `StyleChecker`, `Http2Client`.
pub const PASCAL_CASE_FORMAT: &str = "[A-Z][a-zA-Z0-9]*";

/// Which built-in format applies to class and interface names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeStyle {
    #[default]
    PascalCase,
    /// Type names checked with the method format. Kept for builds that
    /// depend on the historical rule set.
    LegacySnakeCase,
}

impl TypeStyle {
    pub fn format(self) -> &'static str {
        match self {
            TypeStyle::PascalCase => PASCAL_CASE_FORMAT,
            TypeStyle::LegacySnakeCase => SNAKE_CASE_FORMAT,
        }
    }
}

/// Regex formats each identifier category must fully match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NamingConfig {
    pub parameter_format: String,
    pub variable_format: String,
    pub method_format: String,
    pub type_style: TypeStyle,
    /// Explicit type format; takes precedence over `type_style`.
    pub type_format: Option<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            parameter_format: CAMEL_CASE_FORMAT.to_string(),
            variable_format: CAMEL_CASE_FORMAT.to_string(),
            method_format: SNAKE_CASE_FORMAT.to_string(),
            type_style: TypeStyle::default(),
            type_format: None,
        }
    }
}

impl NamingConfig {
    /// The format applied to class and interface names.
    pub fn type_format(&self) -> &str {
        self.type_format
            .as_deref()
            .unwrap_or_else(|| self.type_style.format())
    }

    /// Whether type names are checked with the legacy snake case format.
    pub fn uses_legacy_type_style(&self) -> bool {
        self.type_format.is_none() && self.type_style == TypeStyle::LegacySnakeCase
    }
}

/// Human-readable name of a convention, used in violation messages.
pub fn describe_format(format: &str) -> String {
    match format {
        CAMEL_CASE_FORMAT => "camelCase".to_string(),
        SNAKE_CASE_FORMAT => "snake_case".to_string(),
        PASCAL_CASE_FORMAT => "PascalCase".to_string(),
        custom => format!("pattern '{custom}'"),
    }
}
