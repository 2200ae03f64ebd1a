//! Rule registry for mapping checkstyle module names to rule implementations.

use std::collections::HashMap;

use jindent_checkstyle::ConfiguredRule;

use crate::Rule;

/// Properties from a checkstyle module configuration.
pub type Properties<'a> = HashMap<&'a str, &'a str>;

/// Trait for rules that can be constructed from checkstyle config properties.
pub trait FromConfig: Rule + Sized {
    /// The checkstyle module name this rule corresponds to.
    const MODULE_NAME: &'static str;

    /// Create a rule instance from config properties.
    fn from_config(properties: &Properties) -> Self;
}

type RuleFactory = fn(&Properties) -> Box<dyn Rule>;

/// Registry mapping checkstyle module names to rule factories.
pub struct RuleRegistry {
    factories: HashMap<&'static str, RuleFactory>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register::<crate::rules::Indentation>();
        registry
    }

    /// Register a rule type that implements `FromConfig`.
    pub fn register<R: FromConfig + 'static>(&mut self) {
        self.factories
            .insert(R::MODULE_NAME, |props| Box::new(R::from_config(props)));
    }

    /// Create a rule from a module name and properties.
    /// Returns None if the module name is not recognized.
    pub fn create_rule(&self, module_name: &str, properties: &Properties) -> Option<Box<dyn Rule>> {
        self.factories
            .get(module_name)
            .map(|factory| factory(properties))
    }

    /// Create a rule from a merged configuration entry.
    pub fn create_configured(&self, rule: &ConfiguredRule) -> Option<Box<dyn Rule>> {
        self.create_rule(&rule.name, &rule.properties_ref())
    }

    /// Check if a module name is registered.
    pub fn has_rule(&self, module_name: &str) -> bool {
        self.factories.contains_key(module_name)
    }

    /// Get all registered module names.
    pub fn module_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jindent_checkstyle::MergedConfig;

    #[test]
    fn test_registry_creates_indentation() {
        let registry = RuleRegistry::builtin();

        let props = HashMap::new();
        let rule = registry.create_rule("Indentation", &props);

        assert!(rule.is_some());
        assert_eq!(rule.unwrap().name(), "Indentation");
        assert!(registry.has_rule("Indentation"));
        assert_eq!(registry.module_names().collect::<Vec<_>>(), vec!["Indentation"]);
    }

    #[test]
    fn test_registry_from_merged_config() {
        let registry = RuleRegistry::builtin();
        let merged = MergedConfig::indentation_only(None);

        let rule = registry.create_configured(&merged.rules[0]);
        assert!(rule.is_some());
    }

    #[test]
    fn test_registry_unknown_module() {
        let registry = RuleRegistry::builtin();

        let props = HashMap::new();
        let rule = registry.create_rule("NeedBraces", &props);

        assert!(rule.is_none());
        assert!(!registry.has_rule("NeedBraces"));
    }
}
