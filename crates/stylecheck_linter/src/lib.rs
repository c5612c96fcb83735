//! Identifier naming checks for Java sources.
//!
//! Each [`Rule`] extracts the identifiers of one [`Category`] from the syntax
//! tree and validates them against that category's [`NamingPattern`].
//! [`StyleChecker`] runs the four rules in a fixed order and stops at the
//! first violation.

mod checker;
mod pattern;
pub mod rules;
mod violation;

use std::fmt;

use stylecheck_java_cst::CstNode;
use stylecheck_text_size::TextRange;

pub use checker::{CheckError, FileCheckError, StyleChecker};
pub use pattern::NamingPattern;
pub use stylecheck_config::NamingConfig;
pub use violation::{InvalidPattern, StyleViolation};

/// Identifier categories, in the order the checker visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Parameter,
    Variable,
    Method,
    Type,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Parameter,
        Category::Variable,
        Category::Method,
        Category::Type,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Parameter => "parameter",
            Category::Variable => "variable",
            Category::Method => "method",
            Category::Type => "type",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared name found in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub name: &'a str,
    pub category: Category,
    pub range: TextRange,
}

/// Context passed to rules while checking one file.
pub struct CheckContext<'a> {
    source: &'a str,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Identifier named by the `name` field of `node`, if it has one.
    pub fn named(&self, node: &CstNode<'a>, category: Category) -> Option<Identifier<'a>> {
        let name = node.child_by_field_name("name")?;
        Some(self.identifier(&name, category))
    }

    /// Identifier spelled by `node` itself.
    pub fn identifier(&self, node: &CstNode<'a>, category: Category) -> Identifier<'a> {
        Identifier {
            name: &self.source[node.range()],
            category,
            range: node.range(),
        }
    }
}

/// Builds a rule from the naming configuration.
pub trait FromConfig: Sized {
    fn from_config(naming: &NamingConfig) -> Result<Self, InvalidPattern>;
}

/// A naming rule for one identifier category.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn category(&self) -> Category;

    /// Node kinds that can declare identifiers of this rule's category.
    fn relevant_kinds(&self) -> &'static [&'static str];

    fn pattern(&self) -> &NamingPattern;

    /// Identifiers declared by `node`, in source order. `node` is one of
    /// [`Rule::relevant_kinds`].
    fn identifiers<'a>(&self, ctx: &CheckContext<'a>, node: &CstNode<'a>) -> Vec<Identifier<'a>>;

    /// Validates the identifiers declared by `node`, stopping at the first
    /// one that does not match.
    fn check(&self, ctx: &CheckContext, node: &CstNode) -> Result<(), StyleViolation> {
        if !self.relevant_kinds().contains(&node.kind()) {
            return Ok(());
        }
        let pattern = self.pattern();
        match self
            .identifiers(ctx, node)
            .into_iter()
            .find(|ident| !pattern.is_match(ident.name))
        {
            Some(ident) => Err(StyleViolation::new(&ident, pattern)),
            None => Ok(()),
        }
    }
}
