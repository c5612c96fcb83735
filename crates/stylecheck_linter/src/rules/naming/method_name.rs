//! MethodName rule implementation.
//!
//! Checks that method names conform to the method format. Constructors and
//! annotation members are not methods here.

use stylecheck_java_cst::CstNode;

use crate::pattern::SNAKE_CASE;
use crate::{
    Category, CheckContext, FromConfig, Identifier, InvalidPattern, NamingConfig, NamingPattern,
    Rule,
};

const RELEVANT_KINDS: &[&str] = &["method_declaration"];

/// Configuration for MethodName rule.
#[derive(Debug, Clone)]
pub struct MethodName {
    format: NamingPattern,
}

impl Default for MethodName {
    fn default() -> Self {
        Self {
            format: SNAKE_CASE.clone(),
        }
    }
}

impl FromConfig for MethodName {
    fn from_config(naming: &NamingConfig) -> Result<Self, InvalidPattern> {
        let format = InvalidPattern::compile(Category::Method, &naming.method_format)?;
        Ok(Self { format })
    }
}

impl Rule for MethodName {
    fn name(&self) -> &'static str {
        "MethodName"
    }

    fn category(&self) -> Category {
        Category::Method
    }

    fn relevant_kinds(&self) -> &'static [&'static str] {
        RELEVANT_KINDS
    }

    fn pattern(&self) -> &NamingPattern {
        &self.format
    }

    fn identifiers<'a>(&self, ctx: &CheckContext<'a>, node: &CstNode<'a>) -> Vec<Identifier<'a>> {
        ctx.named(node, Category::Method).into_iter().collect()
    }
}
