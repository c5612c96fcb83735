//! The style checker: four rule passes over one syntax tree.

use std::path::{Path, PathBuf};

use stylecheck_java_cst::TreeWalker;
use stylecheck_java_parser::{JavaParser, ParseError, ParseResult};
use stylecheck_source_file::{LineIndex, SourceCode, SourceLocation};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::rules::{MethodName, ParameterName, TypeName, VariableName};
use crate::{CheckContext, FromConfig, InvalidPattern, NamingConfig, Rule, StyleViolation};

/// Why checking a source text failed.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Style(#[from] StyleViolation),
}

/// Why checking a file failed.
#[derive(Debug, Error)]
pub enum FileCheckError {
    #[error("{}: failed to read file: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}:{location}: {violation}", path.display())]
    Style {
        path: PathBuf,
        location: SourceLocation,
        violation: StyleViolation,
    },
}

impl FileCheckError {
    pub fn path(&self) -> &Path {
        match self {
            FileCheckError::Read { path, .. }
            | FileCheckError::Parse { path, .. }
            | FileCheckError::Style { path, .. } => path,
        }
    }

    /// True for naming violations, false for files that could not be checked.
    pub fn is_violation(&self) -> bool {
        matches!(self, FileCheckError::Style { .. })
    }
}

/// Checks identifier names against the configured naming patterns.
///
/// Rules run in a fixed order (parameters, variables, methods, types), each as
/// a pre-order pass over the tree, and checking stops at the first violation.
/// The checker holds no per-file state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct StyleChecker {
    parameter: ParameterName,
    variable: VariableName,
    method: MethodName,
    type_name: TypeName,
}

impl StyleChecker {
    pub fn new(naming: &NamingConfig) -> Result<Self, InvalidPattern> {
        if naming.uses_legacy_type_style() {
            warn!("type names are checked with the legacy snake_case format");
        }

        Ok(Self {
            parameter: ParameterName::from_config(naming)?,
            variable: VariableName::from_config(naming)?,
            method: MethodName::from_config(naming)?,
            type_name: TypeName::from_config(naming)?,
        })
    }

    /// Rules in checking order.
    pub fn rules(&self) -> [&dyn Rule; 4] {
        [&self.parameter, &self.variable, &self.method, &self.type_name]
    }

    /// Checks every identifier in `result`, returning the first violation.
    pub fn check_tree(&self, result: &ParseResult) -> Result<(), StyleViolation> {
        let ctx = CheckContext::new(result.source);

        for rule in self.rules() {
            trace!(rule = rule.name(), "running rule pass");
            for node in TreeWalker::new(result.root_node(), result.source) {
                rule.check(&ctx, &node)?;
            }
        }

        Ok(())
    }

    /// Parses and checks one source text.
    pub fn check_source(&self, parser: &mut JavaParser, source: &str) -> Result<(), CheckError> {
        let result = parser.parse(source)?;
        self.check_tree(&result)?;
        Ok(())
    }

    /// Reads, parses and checks one file.
    pub fn check_file(&self, parser: &mut JavaParser, path: &Path) -> Result<(), FileCheckError> {
        debug!(path = %path.display(), "checking file");

        let source = std::fs::read_to_string(path).map_err(|source| FileCheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match self.check_source(parser, &source) {
            Ok(()) => Ok(()),
            Err(CheckError::Parse(err)) => Err(FileCheckError::Parse {
                path: path.to_path_buf(),
                source: err,
            }),
            Err(CheckError::Style(violation)) => {
                let line_index = LineIndex::from_source_text(&source);
                let location =
                    SourceCode::new(&source, &line_index).line_column(violation.range.start());
                Err(FileCheckError::Style {
                    path: path.to_path_buf(),
                    location,
                    violation,
                })
            }
        }
    }
}
