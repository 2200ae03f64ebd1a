//! Merged configuration from checkstyle.xml and jindent.toml.
//!
//! checkstyle.xml decides which checks run and with which properties.
//! jindent.toml may point at that file and override `Indentation` properties.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{CheckstyleConfig, CheckstyleError, JindentConfig, JindentConfigError};

/// Module name of the indentation check.
const INDENTATION: &str = "Indentation";

/// Properties checkstyle lets a check inherit from its containers.
const INHERITED_PROPERTIES: &[&str] = &["tabWidth"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Checkstyle config error: {0}")]
    Checkstyle(#[from] CheckstyleError),
    #[error("jindent config error: {0}")]
    Jindent(#[from] JindentConfigError),
    #[error("Checkstyle config not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// A configured check with its resolved properties.
#[derive(Debug, Clone)]
pub struct ConfiguredRule {
    /// Checkstyle module name.
    pub name: String,
    pub properties: HashMap<String, String>,
}

impl ConfiguredRule {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Borrowed view of the properties, as `FromConfig` expects them.
    pub fn properties_ref(&self) -> HashMap<&str, &str> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn apply_overrides(&mut self, jindent: &JindentConfig) {
        if self.name == INDENTATION {
            for (name, value) in jindent.indentation_overrides() {
                self.properties.insert(name.to_string(), value);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub rules: Vec<ConfiguredRule>,
}

impl MergedConfig {
    /// Merges checkstyle.xml with an optional jindent.toml.
    pub fn new(checkstyle: &CheckstyleConfig, jindent: Option<&JindentConfig>) -> Self {
        let jindent = jindent.cloned().unwrap_or_default();

        let rules = checkstyle
            .rules()
            .into_iter()
            .map(|module| {
                let mut properties: HashMap<String, String> = module
                    .properties_map()
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                for &name in INHERITED_PROPERTIES {
                    if !properties.contains_key(name)
                        && let Some(value) = checkstyle.inherited_property(module, name)
                    {
                        properties.insert(name.to_string(), value.to_string());
                    }
                }
                let mut rule = ConfiguredRule {
                    name: module.name.clone(),
                    properties,
                };
                rule.apply_overrides(&jindent);
                rule
            })
            .collect();

        Self { rules }
    }

    /// Configuration used when no checkstyle.xml is available: the
    /// indentation check alone, with jindent.toml overrides if any.
    pub fn indentation_only(jindent: Option<&JindentConfig>) -> Self {
        let mut rule = ConfiguredRule {
            name: INDENTATION.to_string(),
            properties: HashMap::new(),
        };
        if let Some(jindent) = jindent {
            rule.apply_overrides(jindent);
        }
        Self { rules: vec![rule] }
    }

    pub fn get_rule(&self, name: &str) -> Option<&ConfiguredRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

/// Builder for loading configuration from files.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    checkstyle_path: Option<PathBuf>,
    discovered_checkstyle: Option<PathBuf>,
    jindent_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkstyle(mut self, path: impl AsRef<Path>) -> Self {
        self.checkstyle_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn jindent(mut self, path: impl AsRef<Path>) -> Self {
        self.jindent_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Looks for jindent.toml in the usual places below `root`.
    pub fn find_jindent(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let candidates = ["jindent.toml", ".jindent.toml", "config/jindent.toml"];
        self.jindent_path = candidates
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists());
        self
    }

    /// Looks for checkstyle.xml in the usual places below `root`.
    pub fn find_checkstyle(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let candidates = [
            "checkstyle.xml",
            "config/checkstyle/checkstyle.xml",
            "config/checkstyle.xml",
            ".checkstyle.xml",
        ];
        self.discovered_checkstyle = candidates
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists());
        self
    }

    /// Loads and merges the configuration.
    ///
    /// Precedence for checkstyle.xml: an explicit path, then the path named in
    /// jindent.toml (relative to that file), then whatever `find_checkstyle`
    /// located. Without any checkstyle.xml the indentation check runs with
    /// its defaults.
    pub fn load(self) -> Result<MergedConfig, ConfigError> {
        let jindent = match &self.jindent_path {
            Some(path) if path.exists() => {
                log::debug!("loading {}", path.display());
                Some(JindentConfig::from_file(path)?)
            }
            _ => None,
        };

        let from_jindent = jindent.as_ref().and_then(|config| {
            let referenced = PathBuf::from(config.checkstyle.config.as_ref()?);
            let base = self.jindent_path.as_deref().and_then(Path::parent);
            Some(match base {
                Some(base) if referenced.is_relative() => base.join(referenced),
                _ => referenced,
            })
        });

        let checkstyle_path = self
            .checkstyle_path
            .or(from_jindent)
            .or(self.discovered_checkstyle);

        match checkstyle_path {
            Some(path) if path.exists() => {
                log::debug!("loading {}", path.display());
                let checkstyle = CheckstyleConfig::from_file(&path)?;
                Ok(MergedConfig::new(&checkstyle, jindent.as_ref()))
            }
            Some(path) => Err(ConfigError::NotFound(path)),
            None => {
                log::debug!("no checkstyle.xml found, using indentation defaults");
                Ok(MergedConfig::indentation_only(jindent.as_ref()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_checkstyle() -> CheckstyleConfig {
        let xml = r#"<?xml version="1.0"?>
<module name="Checker">
    <property name="tabWidth" value="4"/>
    <module name="TreeWalker">
        <module name="Indentation">
            <property name="basicOffset" value="2"/>
            <property name="caseIndent" value="2"/>
        </module>
        <module name="NeedBraces"/>
    </module>
</module>"#;
        CheckstyleConfig::parse(xml).unwrap()
    }

    #[test]
    fn test_merged_config_without_jindent() {
        let merged = MergedConfig::new(&sample_checkstyle(), None);
        assert_eq!(merged.rules.len(), 2);

        let indentation = merged.get_rule("Indentation").unwrap();
        assert_eq!(indentation.property("basicOffset"), Some("2"));
        assert_eq!(indentation.property("tabWidth"), Some("4"));
        assert_eq!(indentation.properties_ref().get("caseIndent"), Some(&"2"));
    }

    #[test]
    fn test_jindent_overrides_only_touch_indentation() {
        let jindent = JindentConfig::parse("[indentation]\nbasicOffset = 3\nthrowsIndent = 8\n").unwrap();
        let merged = MergedConfig::new(&sample_checkstyle(), Some(&jindent));

        let indentation = merged.get_rule("Indentation").unwrap();
        assert_eq!(indentation.property("basicOffset"), Some("3"));
        assert_eq!(indentation.property("throwsIndent"), Some("8"));
        assert_eq!(indentation.property("caseIndent"), Some("2"));

        let braces = merged.get_rule("NeedBraces").unwrap();
        assert_eq!(braces.property("basicOffset"), None);
    }

    #[test]
    fn test_indentation_only() {
        let merged = MergedConfig::indentation_only(None);
        assert_eq!(merged.rules.len(), 1);
        assert!(merged.get_rule("Indentation").unwrap().properties.is_empty());
    }

    #[test]
    fn test_loader_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let merged = ConfigLoader::new()
            .find_jindent(dir.path())
            .find_checkstyle(dir.path())
            .load()
            .unwrap();
        assert_eq!(merged.rules.len(), 1);
        assert_eq!(merged.rules[0].name, "Indentation");
    }

    #[test]
    fn test_loader_follows_jindent_reference() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("style")).unwrap();
        fs::write(
            dir.path().join("style/checks.xml"),
            r#"<module name="Checker"><module name="TreeWalker">
<module name="Indentation"><property name="basicOffset" value="2"/></module>
</module></module>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("jindent.toml"),
            "[checkstyle]\nconfig = \"style/checks.xml\"\n\n[indentation]\ncaseIndent = 0\n",
        )
        .unwrap();

        let merged = ConfigLoader::new()
            .find_jindent(dir.path())
            .find_checkstyle(dir.path())
            .load()
            .unwrap();
        let indentation = merged.get_rule("Indentation").unwrap();
        assert_eq!(indentation.property("basicOffset"), Some("2"));
        assert_eq!(indentation.property("caseIndent"), Some("0"));
    }

    #[test]
    fn test_loader_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::new()
            .checkstyle(dir.path().join("nope.xml"))
            .load();
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
