//! Naming convention rules.
//!
//! These rules check that Java identifiers follow the naming convention of
//! their category.

// Allow nested if statements - this pattern is readable for checking
// node kind before extracting optional fields
#![allow(clippy::collapsible_if)]

mod method_name;
mod parameter_name;
mod type_name;
mod variable_name;

pub use method_name::MethodName;
pub use parameter_name::ParameterName;
pub use type_name::TypeName;
pub use variable_name::VariableName;
