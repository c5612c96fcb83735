//! VariableName rule implementation.
//!
//! Checks field, local variable, loop variable and resource names.

use stylecheck_java_cst::CstNode;

use crate::pattern::CAMEL_CASE;
use crate::{
    Category, CheckContext, FromConfig, Identifier, InvalidPattern, NamingConfig, NamingPattern,
    Rule,
};

/// Node kinds that declare variables
const RELEVANT_KINDS: &[&str] = &["variable_declarator", "enhanced_for_statement", "resource"];

/// Configuration for VariableName rule.
#[derive(Debug, Clone)]
pub struct VariableName {
    format: NamingPattern,
}

impl Default for VariableName {
    fn default() -> Self {
        Self {
            format: CAMEL_CASE.clone(),
        }
    }
}

impl FromConfig for VariableName {
    fn from_config(naming: &NamingConfig) -> Result<Self, InvalidPattern> {
        let format = InvalidPattern::compile(Category::Variable, &naming.variable_format)?;
        Ok(Self { format })
    }
}

impl Rule for VariableName {
    fn name(&self) -> &'static str {
        "VariableName"
    }

    fn category(&self) -> Category {
        Category::Variable
    }

    fn relevant_kinds(&self) -> &'static [&'static str] {
        RELEVANT_KINDS
    }

    fn pattern(&self) -> &NamingPattern {
        &self.format
    }

    fn identifiers<'a>(&self, ctx: &CheckContext<'a>, node: &CstNode<'a>) -> Vec<Identifier<'a>> {
        match node.kind() {
            "variable_declarator" => {
                // The declarator of a varargs parameter names a parameter
                if let Some(parent) = node.parent() {
                    if parent.kind() == "spread_parameter" {
                        return vec![];
                    }
                }
                ctx.named(node, Category::Variable).into_iter().collect()
            }
            // A resource without a name refers to an existing variable
            "enhanced_for_statement" | "resource" => {
                ctx.named(node, Category::Variable).into_iter().collect()
            }
            _ => vec![],
        }
    }
}
