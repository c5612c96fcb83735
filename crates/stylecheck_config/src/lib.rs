//! Configuration for stylecheck.
//!
//! Configuration is read from `stylecheck.toml`, or imported from the naming
//! modules of an existing checkstyle XML file. Once loaded it is immutable and
//! handed to the checker at construction.

mod checkstyle;
mod naming;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use naming::{
    CAMEL_CASE_FORMAT, NamingConfig, PASCAL_CASE_FORMAT, SNAKE_CASE_FORMAT, TypeStyle,
    describe_format,
};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "stylecheck.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid checkstyle XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("not a checkstyle configuration: root module is '{0}', expected 'Checker'")]
    NotCheckstyle(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub naming: NamingConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Imports naming formats from a checkstyle configuration.
    pub fn from_checkstyle_xml(content: &str) -> Result<Self, ConfigError> {
        let naming = checkstyle::naming_from_xml(content)?;
        Ok(Self { naming })
    }

    /// Loads configuration from `path`: `.xml` files are read as checkstyle
    /// configuration, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_xml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));

        if is_xml {
            Self::from_checkstyle_xml(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = Config::from_toml_str(
            r#"
[naming]
method-format = "[a-z][a-zA-Z0-9]*"
type-style = "legacy-snake-case"
"#,
        )
        .unwrap();

        assert_eq!(config.naming.method_format, "[a-z][a-zA-Z0-9]*");
        assert_eq!(config.naming.parameter_format, CAMEL_CASE_FORMAT);
        assert_eq!(config.naming.type_style, TypeStyle::LegacySnakeCase);
        assert_eq!(config.naming.type_format(), SNAKE_CASE_FORMAT);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("[naming]\nconstant-format = \"[A-Z]+\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_unknown_type_style_rejected() {
        let err = Config::from_toml_str("[naming]\ntype-style = \"kebab\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::File::create(&toml_path)
            .unwrap()
            .write_all(b"[naming]\nvariable-format = \"[a-z]+\"\n")
            .unwrap();
        let config = Config::load(&toml_path).unwrap();
        assert_eq!(config.naming.variable_format, "[a-z]+");

        let xml_path = dir.path().join("checkstyle.XML");
        std::fs::write(
            &xml_path,
            r#"<module name="Checker"><module name="TreeWalker">
                 <module name="MethodName"><property name="format" value="^[a-z]+$"/></module>
               </module></module>"#,
        )
        .unwrap();
        let config = Config::load(&xml_path).unwrap();
        assert_eq!(config.naming.method_format, "^[a-z]+$");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
