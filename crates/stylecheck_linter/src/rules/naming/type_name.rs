//! TypeName rule implementation.
//!
//! Checks class and interface names. Enums, records and annotation types are
//! not checked.

use stylecheck_java_cst::CstNode;

use crate::pattern::PASCAL_CASE;
use crate::{
    Category, CheckContext, FromConfig, Identifier, InvalidPattern, NamingConfig, NamingPattern,
    Rule,
};

const RELEVANT_KINDS: &[&str] = &["class_declaration", "interface_declaration"];

/// Configuration for TypeName rule.
#[derive(Debug, Clone)]
pub struct TypeName {
    format: NamingPattern,
}

impl Default for TypeName {
    fn default() -> Self {
        Self {
            format: PASCAL_CASE.clone(),
        }
    }
}

impl FromConfig for TypeName {
    fn from_config(naming: &NamingConfig) -> Result<Self, InvalidPattern> {
        let format = InvalidPattern::compile(Category::Type, naming.type_format())?;
        Ok(Self { format })
    }
}

impl Rule for TypeName {
    fn name(&self) -> &'static str {
        "TypeName"
    }

    fn category(&self) -> Category {
        Category::Type
    }

    fn relevant_kinds(&self) -> &'static [&'static str] {
        RELEVANT_KINDS
    }

    fn pattern(&self) -> &NamingPattern {
        &self.format
    }

    fn identifiers<'a>(&self, ctx: &CheckContext<'a>, node: &CstNode<'a>) -> Vec<Identifier<'a>> {
        ctx.named(node, Category::Type).into_iter().collect()
    }
}
