//! Parser for checkstyle.xml configuration files, plus the optional
//! jindent.toml overlay.

mod jindent_config;
mod merged_config;

use quick_xml::de::from_str;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub use jindent_config::{CheckstyleReference, JindentConfig, JindentConfigError, PropertyValue};
pub use merged_config::{ConfigError, ConfigLoader, ConfiguredRule, MergedConfig};

#[derive(Error, Debug)]
pub enum CheckstyleError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse XML: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// A `<property name=".." value=".."/>` element.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

/// A checkstyle module (check or container).
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, rename = "property")]
    pub properties: Vec<Property>,
    #[serde(default, rename = "module")]
    pub modules: Vec<Module>,
}

impl Module {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn properties_map(&self) -> HashMap<&str, &str> {
        self.properties
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect()
    }
}

/// Root `Checker` module of a checkstyle.xml file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "module")]
pub struct CheckstyleConfig {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, rename = "property")]
    pub properties: Vec<Property>,
    #[serde(default, rename = "module")]
    pub modules: Vec<Module>,
}

impl CheckstyleConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CheckstyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, CheckstyleError> {
        Ok(from_str(content)?)
    }

    /// A property set directly on the `Checker` module.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn tree_walker(&self) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == "TreeWalker")
    }

    /// Checks configured under `TreeWalker`.
    pub fn rules(&self) -> Vec<&Module> {
        self.tree_walker()
            .map(|tw| tw.modules.iter().collect())
            .unwrap_or_default()
    }

    /// Looks up a property the way checkstyle resolves inherited ones:
    /// the module first, then `TreeWalker`, then `Checker`.
    pub fn inherited_property<'a>(&'a self, module: &'a Module, name: &str) -> Option<&'a str> {
        module
            .property(name)
            .or_else(|| self.tree_walker().and_then(|tw| tw.property(name)))
            .or_else(|| self.property(name))
    }
}
