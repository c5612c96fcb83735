//! Rule implementations.

pub mod naming;

pub use naming::{MethodName, ParameterName, TypeName, VariableName};
