// crates/scada-xdf/src/registry.rs

//! The template registry: immutable element definitions keyed by element code.

use crate::error::XdfError;
use crate::types::ElementTemplate;
use log::info;
use std::collections::BTreeMap;
use std::path::Path;

/// Element definitions loaded once per run and read-only thereafter.
///
/// The registry hands out shared references only. Callers that need to
/// parameterize a definition call [`ElementTemplate::instantiate`] and mutate
/// the returned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, ElementTemplate>,
}

/// Per-variant template counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateStats {
    pub total: usize,
    pub analog: usize,
    pub discrete: usize,
    pub breaker: usize,
    pub ifs_point: usize,
}

impl TemplateRegistry {
    /// Parses a JSON object mapping element code to a single-variant definition.
    ///
    /// # Errors
    /// Returns `XdfError::TemplateParsing` for malformed JSON or an entry that
    /// does not name exactly one of `Analog`, `Discrete`, `Breaker`, `IfsPoint`,
    /// and `XdfError::EmptyRegistry` if the mapping has no entries.
    pub fn from_json_str(json: &str) -> Result<Self, XdfError> {
        let templates: BTreeMap<String, ElementTemplate> = serde_json::from_str(json)?;
        Self::from_templates(templates)
    }

    /// Reads and parses a JSON template file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, XdfError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| XdfError::io(path, e))?;
        let registry = Self::from_json_str(&json)?;
        info!(
            "Loaded {} element templates from '{}'",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Builds a registry from already-constructed definitions.
    ///
    /// # Errors
    /// Returns `XdfError::EmptyRegistry` if `templates` is empty.
    pub fn from_templates(templates: BTreeMap<String, ElementTemplate>) -> Result<Self, XdfError> {
        if templates.is_empty() {
            return Err(XdfError::EmptyRegistry);
        }
        Ok(Self { templates })
    }

    pub fn lookup(&self, code: &str) -> Option<&ElementTemplate> {
        self.templates.get(code)
    }

    /// True if `code` maps to a `Breaker` definition.
    pub fn is_breaker(&self, code: &str) -> bool {
        self.lookup(code).is_some_and(ElementTemplate::is_breaker)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for a successfully loaded registry.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Element codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn stats(&self) -> TemplateStats {
        let mut stats = TemplateStats {
            total: self.templates.len(),
            ..Default::default()
        };
        for template in self.templates.values() {
            match template {
                ElementTemplate::Analog(_) => stats.analog += 1,
                ElementTemplate::Discrete(_) => stats.discrete += 1,
                ElementTemplate::Breaker(_) => stats.breaker += 1,
                ElementTemplate::IfsPoint(_) => stats.ifs_point += 1,
            }
        }
        stats
    }

    /// Non-fatal consistency checks. Returns one message per definition whose
    /// `Name` is empty.
    pub fn validate(&self) -> Vec<String> {
        self.templates
            .iter()
            .filter(|(_, template)| template.name().is_empty())
            .map(|(code, template)| {
                format!("template '{}' ({}) has no Name", code, template.kind())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: &str = r#"{
        "P": {"Analog": {"Name": "P", "UnitOfMeasure": "MW",
               "AnalogValue": {"Name": "Value", "Archive": "1", "InfoName": "MvMoment"}}},
        "ST": {"Discrete": {"Name": ""}},
        "CB": {"Breaker": {"Name": "CB", "Terminals": [{"Name": "T1", "EquipEnd": "1"}],
               "Discrete": {"Name": "CB", "DiscreteValue": {"Name": "Stat", "InfoName": "Stat"}}}},
        "PT": {"IfsPoint": {"Name": "PT"}}
    }"#;

    #[test]
    fn test_load_and_lookup() {
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        assert_eq!(registry.len(), 4);
        assert!(registry.lookup("P").is_some());
        assert!(registry.lookup("UNKNOWN").is_none());
        assert!(registry.is_breaker("CB"));
        assert!(!registry.is_breaker("P"));
        assert_eq!(registry.codes().collect::<Vec<_>>(), vec!["CB", "P", "PT", "ST"]);
    }

    #[test]
    fn test_empty_mapping_is_an_error() {
        assert!(matches!(
            TemplateRegistry::from_json_str("{}"),
            Err(XdfError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            TemplateRegistry::from_json_str("{\"P\": "),
            Err(XdfError::TemplateParsing(_))
        ));
    }

    #[test]
    fn test_entry_without_variant_is_an_error() {
        assert!(matches!(
            TemplateRegistry::from_json_str(r#"{"P": {}}"#),
            Err(XdfError::TemplateParsing(_))
        ));
    }

    #[test]
    fn test_stats_and_validation() {
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        assert_eq!(
            registry.stats(),
            TemplateStats {
                total: 4,
                analog: 1,
                discrete: 1,
                breaker: 1,
                ifs_point: 1,
            }
        );
        assert_eq!(
            registry.validate(),
            vec!["template 'ST' (Discrete) has no Name".to_string()]
        );
    }

    #[test]
    fn test_instantiation_never_touches_registry() {
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        let stored = registry.lookup("P").unwrap().clone();

        let mut copy = registry.lookup("P").unwrap().instantiate();
        if let ElementTemplate::Analog(a) = &mut copy {
            a.name = "changed".to_string();
            a.analog_value.as_mut().unwrap().archive = "0".to_string();
            a.analog_info = None;
        }

        assert_eq!(registry.lookup("P"), Some(&stored));
        assert_ne!(registry.lookup("P"), Some(&copy));
    }
}
