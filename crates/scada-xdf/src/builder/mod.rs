// crates/scada-xdf/src/builder/mod.rs

//! Assembles transformation output into XDF documents and serializes them to XML.
//!
//! This module implements the conversion from the public `types` to the
//! internal `model` structs required by `quick-xml` for serialization.

mod elements;

use crate::config::{DasipResolver, XmlConfig};
use crate::error::XdfError;
use crate::model;
use crate::resolver::Transformation;
use crate::table::Row;
use crate::types::{DocumentKind, DocumentSet, Parent, XdfDocument, XdfElement};
use core::fmt::Write;
use log::{debug, info};
use serde::Serialize;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Station-level values taken from the first row with an element code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationContext {
    pub company: String,
    pub region: String,
    pub b1: String,
    pub b2: String,
    pub b3: String,
    /// `None` if the `DASIP` column is absent.
    pub dasip: Option<String>,
}

impl StationContext {
    pub fn from_row(row: &Row<'_>) -> Self {
        Self {
            company: row.value("EMPRESA").to_string(),
            region: row.value("REGION").to_string(),
            b1: row.value("B1").to_string(),
            b2: row.value("B2").to_string(),
            b3: row.value("B3").to_string(),
            dasip: row.get("DASIP").map(str::to_string),
        }
    }

    /// `ELECTRICITY/NETWORK/{EMPRESA}/{REGION}/{B1}/{B2}/{B3}`
    pub fn network_path(&self) -> String {
        format!(
            "ELECTRICITY/NETWORK/{}/{}/{}/{}/{}",
            self.company, self.region, self.b1, self.b2, self.b3
        )
    }
}

/// Groups the transformation output into the addressing and network-model
/// documents for `station`.
///
/// A document is `None` when it would contain no elements.
pub fn assemble_documents(
    transformation: &Transformation,
    station: &StationContext,
    resolver: &dyn DasipResolver,
) -> DocumentSet {
    let addressing = if transformation.points.is_empty() {
        None
    } else {
        let path = resolver.resolve(station.dasip.as_deref().unwrap_or_default());
        if let Some(group) = path.split('/').nth(4) {
            info!("Signals belong to -> {}", group);
        }
        Some(XdfDocument {
            kind: DocumentKind::Addressing,
            parents: vec![Parent {
                path,
                elements: transformation
                    .points
                    .iter()
                    .cloned()
                    .map(XdfElement::Point)
                    .collect(),
            }],
        })
    };

    let network_model = if transformation.elements.is_empty()
        && transformation.breaker_links.is_none()
    {
        None
    } else {
        let network_path = station.network_path();
        let mut parents = vec![Parent {
            path: network_path.clone(),
            elements: transformation
                .elements
                .iter()
                .cloned()
                .map(XdfElement::Element)
                .collect(),
        }];
        if let Some(links) = &transformation.breaker_links {
            parents.push(Parent {
                path: format!("{}/{}", network_path, links.breaker_name),
                elements: vec![XdfElement::Terminal(links.terminal.clone())],
            });
        }
        Some(XdfDocument {
            kind: DocumentKind::NetworkModel,
            parents,
        })
    };

    DocumentSet {
        station: station.b3.clone(),
        addressing,
        network_model,
    }
}

/// Serializes a document into an XDF XML string.
///
/// The output starts with the XML declaration. Each level is indented by the
/// first character of `config.indent` repeated once per character of the
/// string; an empty indent disables pretty-printing.
///
/// # Errors
/// Returns `XdfError::InvalidConfig` if the indent character is not ASCII.
pub fn save_xdf_to_string(document: &XdfDocument, config: &XmlConfig) -> Result<String, XdfError> {
    let root = model::Xdf {
        lang: config.lang.clone(),
        version: config.version.clone(),
        instances: model::Instances {
            parent: document
                .parents
                .iter()
                .map(|p| model::Parent {
                    path: p.path.clone(),
                    elements: p.elements.iter().map(elements::build_element).collect(),
                })
                .collect(),
        },
    };

    let mut buffer = String::new();
    write!(&mut buffer, "{}", XML_DECLARATION)?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    if let Some(ch) = config.indent.chars().next() {
        // The serializer writes the indent character as a single byte.
        if !ch.is_ascii() {
            return Err(XdfError::InvalidConfig("xml indent must be ASCII"));
        }
        serializer.indent(ch, config.indent.chars().count());
    }

    root.serialize(serializer)?;
    debug!(
        "Serialized {:?} document with {} elements",
        document.kind,
        document.element_count()
    );
    Ok(buffer)
}
