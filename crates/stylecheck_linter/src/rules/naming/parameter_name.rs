//! ParameterName rule implementation.
//!
//! Checks method, constructor, record, catch and lambda parameter names.

use stylecheck_java_cst::CstNode;

use crate::pattern::CAMEL_CASE;
use crate::{
    Category, CheckContext, FromConfig, Identifier, InvalidPattern, NamingConfig, NamingPattern,
    Rule,
};

/// Node kinds that declare parameters
const RELEVANT_KINDS: &[&str] = &[
    "formal_parameter",
    "spread_parameter",
    "catch_formal_parameter",
    "lambda_expression",
    "inferred_parameters",
];

/// Configuration for ParameterName rule.
#[derive(Debug, Clone)]
pub struct ParameterName {
    format: NamingPattern,
}

impl Default for ParameterName {
    fn default() -> Self {
        Self {
            format: CAMEL_CASE.clone(),
        }
    }
}

impl FromConfig for ParameterName {
    fn from_config(naming: &NamingConfig) -> Result<Self, InvalidPattern> {
        let format = InvalidPattern::compile(Category::Parameter, &naming.parameter_format)?;
        Ok(Self { format })
    }
}

impl Rule for ParameterName {
    fn name(&self) -> &'static str {
        "ParameterName"
    }

    fn category(&self) -> Category {
        Category::Parameter
    }

    fn relevant_kinds(&self) -> &'static [&'static str] {
        RELEVANT_KINDS
    }

    fn pattern(&self) -> &NamingPattern {
        &self.format
    }

    fn identifiers<'a>(&self, ctx: &CheckContext<'a>, node: &CstNode<'a>) -> Vec<Identifier<'a>> {
        match node.kind() {
            "formal_parameter" | "catch_formal_parameter" => {
                ctx.named(node, Category::Parameter).into_iter().collect()
            }
            // Varargs: `String... args` wraps the name in a variable_declarator
            "spread_parameter" => node
                .children()
                .filter(|child| child.kind() == "variable_declarator")
                .filter_map(|declarator| ctx.named(&declarator, Category::Parameter))
                .collect(),
            // `x -> ...`; parenthesized forms are formal or inferred parameters
            "lambda_expression" => {
                if let Some(params) = node.child_by_field_name("parameters") {
                    if params.kind() == "identifier" {
                        return vec![ctx.identifier(&params, Category::Parameter)];
                    }
                }
                vec![]
            }
            "inferred_parameters" => node
                .named_children()
                .filter(|child| child.kind() == "identifier")
                .map(|child| ctx.identifier(&child, Category::Parameter))
                .collect(),
            _ => vec![],
        }
    }
}
