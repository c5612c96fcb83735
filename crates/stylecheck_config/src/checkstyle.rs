//! Import of naming formats from checkstyle XML configuration.

use serde::Deserialize;

use crate::{ConfigError, NamingConfig};

#[derive(Debug, Deserialize)]
struct Module {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "property", default)]
    properties: Vec<Property>,
    #[serde(rename = "module", default)]
    modules: Vec<Module>,
}

#[derive(Debug, Deserialize)]
struct Property {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value")]
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Parameter,
    Variable,
    Method,
    Type,
}

/// Maps a checkstyle naming module to the category it configures, along with
/// the format checkstyle uses when the module has no `format` property.
fn target_of(module_name: &str) -> Option<(Target, &'static str)> {
    let mapped = match module_name {
        "ParameterName" | "LambdaParameterName" => (Target::Parameter, "^[a-z][a-zA-Z0-9]*$"),
        "CatchParameterName" => (Target::Parameter, "^(e|t|ex|[a-z][a-z][a-zA-Z]+|_)$"),
        "LocalVariableName" | "LocalFinalVariableName" => {
            (Target::Variable, "^([a-z][a-zA-Z0-9]*|_)$")
        }
        "MemberName" | "StaticVariableName" => (Target::Variable, "^[a-z][a-zA-Z0-9]*$"),
        "MethodName" => (Target::Method, "^[a-z][a-zA-Z0-9]*$"),
        "TypeName" => (Target::Type, "^[A-Z][a-zA-Z0-9]*$"),
        _ => return None,
    };
    Some(mapped)
}

#[derive(Default)]
struct Imported {
    parameter: Option<String>,
    variable: Option<String>,
    method: Option<String>,
    type_name: Option<String>,
}

impl Imported {
    fn slot(&mut self, target: Target) -> &mut Option<String> {
        match target {
            Target::Parameter => &mut self.parameter,
            Target::Variable => &mut self.variable,
            Target::Method => &mut self.method,
            Target::Type => &mut self.type_name,
        }
    }

    /// Depth-first in document order; the first module for a category wins.
    fn visit(&mut self, module: &Module) {
        if let Some((target, default_format)) = target_of(&module.name) {
            let format = module
                .properties
                .iter()
                .find(|p| p.name == "format")
                .map_or(default_format, |p| p.value.as_str());

            let slot = self.slot(target);
            if slot.is_none() {
                *slot = Some(format.to_string());
            }
        }

        for child in &module.modules {
            self.visit(child);
        }
    }
}

/// Builds a naming configuration from checkstyle XML. Categories without a
/// matching module keep their default format.
pub(crate) fn naming_from_xml(content: &str) -> Result<NamingConfig, ConfigError> {
    let root: Module = quick_xml::de::from_str(content)?;
    if root.name != "Checker" {
        return Err(ConfigError::NotCheckstyle(root.name));
    }

    let mut imported = Imported::default();
    imported.visit(&root);

    let mut naming = NamingConfig::default();
    if let Some(format) = imported.parameter {
        naming.parameter_format = format;
    }
    if let Some(format) = imported.variable {
        naming.variable_format = format;
    }
    if let Some(format) = imported.method {
        naming.method_format = format;
    }
    naming.type_format = imported.type_name;

    Ok(naming)
}
