// crates/scada-xdf/src/types.rs

//! Public, ergonomic data structures for templates, generated points and documents.
//!
//! The template structs carry `serde` attributes matching the JSON template
//! registry (PascalCase keys). XML shaping lives separately in `model`.

use serde::{Deserialize, Serialize};

// --- Element Templates ---

/// A reusable element definition, keyed by element code in the registry.
///
/// In JSON each entry names exactly one variant, e.g. `{"Analog": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementTemplate {
    Analog(Analog),
    Discrete(Discrete),
    Breaker(Breaker),
    /// Accepted by the loader but never instantiated into the network model.
    IfsPoint(IfsPoint),
}

impl ElementTemplate {
    /// Returns an independent deep copy of this template.
    ///
    /// Every nested record is owned, so mutating the copy can never reach the
    /// registry's stored definition or any other copy.
    pub fn instantiate(&self) -> ElementTemplate {
        self.clone()
    }

    pub fn is_breaker(&self) -> bool {
        matches!(self, ElementTemplate::Breaker(_))
    }

    /// The `Name` attribute carried by the definition.
    pub fn name(&self) -> &str {
        match self {
            ElementTemplate::Analog(a) => &a.name,
            ElementTemplate::Discrete(d) => &d.name,
            ElementTemplate::Breaker(b) => &b.name,
            ElementTemplate::IfsPoint(p) => &p.name,
        }
    }

    /// Short variant label used in logs and statistics.
    pub fn kind(&self) -> &'static str {
        match self {
            ElementTemplate::Analog(_) => "Analog",
            ElementTemplate::Discrete(_) => "Discrete",
            ElementTemplate::Breaker(_) => "Breaker",
            ElementTemplate::IfsPoint(_) => "IfsPoint",
        }
    }
}

/// An analog measurement (`<Analog>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Analog {
    pub name: String,
    pub unit_of_measure: String,
    #[serde(rename = "WeightingSE")]
    pub weighting_se: String,
    pub multiplier: String,
    pub element_type: String,
    pub phases: String,
    pub element_name: String,
    pub measurement_type: String,
    pub area_of_responsibility_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analog_value: Option<AnalogValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analog_info: Option<AnalogInfo>,
}

/// Represents `<AnalogValue>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnalogValue {
    pub name: String,
    pub archive: String,
    pub info_name: String,
}

/// Represents `<AnalogInfo>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnalogInfo {
    pub name: String,
    pub value: String,
    pub info_name: String,
}

/// A discrete state (`<Discrete>`), used standalone or embedded in a breaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Discrete {
    pub name: String,
    pub element_type: String,
    pub element_name: String,
    pub measurement_type: String,
    pub area_of_responsibility_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrete_value: Option<DiscreteValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrete_info: Option<DiscreteInfo>,
}

/// Represents `<DiscreteValue>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiscreteValue {
    pub name: String,
    pub info_name: String,
}

/// Represents `<DiscreteInfo>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiscreteInfo {
    pub name: String,
    pub value: String,
    pub info_name: String,
}

/// A circuit breaker (`<Breaker>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Breaker {
    pub name: String,
    pub flow_breaker_flag: String,
    #[serde(rename = "VoltMagLimitCA")]
    pub volt_mag_limit_ca: String,
    #[serde(rename = "DMSFlag")]
    pub dms_flag: String,
    pub area_of_responsibility_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terminals: Vec<Terminal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrete: Option<Discrete>,
}

/// A breaker connection point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Terminal {
    pub name: String,
    pub equip_end: String,
}

// --- Addressing Points ---

/// A monitoring/control point in the addressing (IFS) document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IfsPoint {
    pub name: String,
    pub mon_addr_high: String,
    pub mon_addr_low: String,
    pub mon_addr_middle: String,
    pub mon_type: String,
    pub con_addr_high: String,
    pub con_addr_low: String,
    pub con_addr_middle: String,
    pub con_type: String,
    pub select_before: String,
    #[serde(
        rename = "Link_IfsPointLinksToInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<IfsPointLink>,
}

/// Cross-reference from an IFS point to its network-model element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IfsPointLink {
    pub path_b: String,
}

// --- Network Model ---

/// A parameterized copy of an `Analog`, `Discrete` or `Breaker` template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkElement {
    Analog(Analog),
    Discrete(Discrete),
    Breaker(Breaker),
}

impl NetworkElement {
    pub fn name(&self) -> &str {
        match self {
            NetworkElement::Analog(a) => &a.name,
            NetworkElement::Discrete(d) => &d.name,
            NetworkElement::Breaker(b) => &b.name,
        }
    }

    pub fn area_of_responsibility_id(&self) -> &str {
        match self {
            NetworkElement::Analog(a) => &a.area_of_responsibility_id,
            NetworkElement::Discrete(d) => &d.area_of_responsibility_id,
            NetworkElement::Breaker(b) => &b.area_of_responsibility_id,
        }
    }
}

/// The breaker-to-measurement links derived from the whole row set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakerLinks {
    /// Name of the breaker parent group, appended to the network path.
    pub breaker_name: String,
    pub terminal: LinkedTerminal,
}

/// `<Terminal Name="T1">` carrying its measurement links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedTerminal {
    pub name: String,
    pub links: Vec<MeasurementLink>,
}

/// `<Link_TerminalMeasuredByMeasurement PathB="..."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementLink {
    pub path_b: String,
}

// --- Documents ---

/// The two output document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    /// Monitoring/control point definitions (`_IFS.xml`).
    Addressing,
    /// Topology-wired element instances (`_IMM.xml`).
    NetworkModel,
}

impl DocumentKind {
    /// Key used in the `output.suffixes` configuration map.
    pub fn suffix_key(self) -> &'static str {
        match self {
            DocumentKind::Addressing => "ifs",
            DocumentKind::NetworkModel => "imm",
        }
    }
}

/// One element inside a `<Parent>` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XdfElement {
    Point(IfsPoint),
    Element(NetworkElement),
    Terminal(LinkedTerminal),
}

/// A topology path and the elements placed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parent {
    pub path: String,
    pub elements: Vec<XdfElement>,
}

/// A fully assembled document, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdfDocument {
    pub kind: DocumentKind,
    pub parents: Vec<Parent>,
}

impl XdfDocument {
    /// Total number of elements across all parent groups.
    pub fn element_count(&self) -> usize {
        self.parents.iter().map(|p| p.elements.len()).sum()
    }
}

/// The documents produced for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    /// The station (`B3`) value, used to name output files.
    pub station: String,
    /// `None` when no addressing points were produced.
    pub addressing: Option<XdfDocument>,
    /// `None` when neither elements nor breaker links were produced.
    pub network_model: Option<XdfDocument>,
}

impl DocumentSet {
    /// Iterates over the documents that will produce a file.
    pub fn documents(&self) -> impl Iterator<Item = &XdfDocument> {
        self.addressing.iter().chain(self.network_model.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_breaker() -> ElementTemplate {
        ElementTemplate::Breaker(Breaker {
            name: "CB".to_string(),
            terminals: vec![Terminal {
                name: "T1".to_string(),
                equip_end: "1".to_string(),
            }],
            discrete: Some(Discrete {
                name: "CB".to_string(),
                discrete_value: Some(DiscreteValue {
                    name: "Stat".to_string(),
                    info_name: "Stat".to_string(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_instantiate_is_independent_of_source() {
        let template = sample_breaker();
        let mut first = template.instantiate();
        let second = template.instantiate();

        if let ElementTemplate::Breaker(b) = &mut first {
            b.name = "changed".to_string();
            b.terminals[0].equip_end = "2".to_string();
            let discrete = b.discrete.as_mut().unwrap();
            discrete.area_of_responsibility_id = "AOR9".to_string();
            discrete.discrete_value.as_mut().unwrap().name = "other".to_string();
        } else {
            panic!("expected breaker");
        }

        assert_eq!(template, second);
        assert_ne!(template, first);
        assert_eq!(template.name(), "CB");
    }

    #[test]
    fn test_template_json_is_externally_tagged() {
        let json = r#"{"Analog":{"Name":"P","WeightingSE":"1","AnalogValue":{"Name":"v","Archive":"1","InfoName":"MvMoment"}}}"#;
        let template: ElementTemplate = serde_json::from_str(json).unwrap();
        match template {
            ElementTemplate::Analog(a) => {
                assert_eq!(a.name, "P");
                assert_eq!(a.weighting_se, "1");
                assert_eq!(a.analog_value.unwrap().info_name, "MvMoment");
                assert!(a.analog_info.is_none());
            }
            other => panic!("unexpected variant {:?}", other),
        }
    }

    #[test]
    fn test_template_json_rejects_two_variants() {
        let json = r#"{"Analog":{"Name":"P"},"Discrete":{"Name":"S"}}"#;
        assert!(serde_json::from_str::<ElementTemplate>(json).is_err());
    }

    #[test]
    fn test_breaker_json_field_names() {
        let json = r#"{"Breaker":{"Name":"CB","VoltMagLimitCA":"1","DMSFlag":"0","Terminals":[{"Name":"T1","EquipEnd":"1"}]}}"#;
        let template: ElementTemplate = serde_json::from_str(json).unwrap();
        assert!(template.is_breaker());
        if let ElementTemplate::Breaker(b) = template {
            assert_eq!(b.volt_mag_limit_ca, "1");
            assert_eq!(b.dms_flag, "0");
            assert_eq!(b.terminals.len(), 1);
            assert!(b.discrete.is_none());
        }
    }

    #[test]
    fn test_document_element_count() {
        let doc = XdfDocument {
            kind: DocumentKind::NetworkModel,
            parents: vec![
                Parent {
                    path: "A".to_string(),
                    elements: vec![XdfElement::Point(IfsPoint::default())],
                },
                Parent {
                    path: "A/CB".to_string(),
                    elements: vec![XdfElement::Terminal(LinkedTerminal::default())],
                },
            ],
        };
        assert_eq!(doc.element_count(), 2);
    }
}
