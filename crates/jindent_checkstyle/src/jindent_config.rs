//! Parser for jindent.toml configuration files.
//!
//! jindent.toml is an optional overlay that points at a checkstyle.xml file
//! and can override properties of the `Indentation` check:
//!
//! ```toml
//! [checkstyle]
//! config = "config/checkstyle/checkstyle.xml"
//!
//! [indentation]
//! basicOffset = 2
//! caseIndent = 0
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JindentConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A property value written in TOML. Checkstyle properties are strings, so
/// every variant renders to the text checkstyle.xml would carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(value) => write!(f, "{value}"),
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Str(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CheckstyleReference {
    /// Path to checkstyle.xml.
    pub config: Option<String>,
}

/// Root jindent.toml configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JindentConfig {
    #[serde(default)]
    pub checkstyle: CheckstyleReference,

    /// Overrides for `Indentation` properties, keyed by checkstyle name.
    #[serde(default)]
    pub indentation: HashMap<String, PropertyValue>,
}

impl JindentConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, JindentConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, JindentConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overrides rendered as checkstyle property strings.
    pub fn indentation_overrides(&self) -> impl Iterator<Item = (&str, String)> {
        self.indentation
            .iter()
            .map(|(name, value)| (name.as_str(), value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = JindentConfig::parse("").unwrap();
        assert!(config.checkstyle.config.is_none());
        assert!(config.indentation.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[checkstyle]
config = "config/checkstyle/checkstyle.xml"

[indentation]
basicOffset = 2
strict = false
tabWidth = "4"
"#;

        let config = JindentConfig::parse(toml).unwrap();
        assert_eq!(
            config.checkstyle.config.as_deref(),
            Some("config/checkstyle/checkstyle.xml")
        );
        assert_eq!(config.indentation["basicOffset"], PropertyValue::Int(2));

        let mut overrides: Vec<_> = config.indentation_overrides().collect();
        overrides.sort();
        assert_eq!(
            overrides,
            vec![
                ("basicOffset", "2".to_string()),
                ("strict", "false".to_string()),
                ("tabWidth", "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            JindentConfig::parse("[indentation\nbasicOffset = 2"),
            Err(JindentConfigError::Toml(_))
        ));
    }
}
