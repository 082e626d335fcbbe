// crates/scada-xdf/src/model/mod.rs

//! Internal `serde` data structures that map directly to the XDF XML layout.
//!
//! These structs are annotated for serialization via `quick-xml` and are not
//! intended for direct public use. Attribute fields are declared before child
//! element fields so attributes are always written on the opening tag.

#![allow(clippy::pedantic)] // XML attribute naming conventions differ from Rust

use serde::Serialize;

pub mod elements;
pub mod points;

pub use elements::{Analog, Breaker, Discrete};
pub use points::{IfsPoint, LinkedTerminal};

/// The root element of an XDF document.
///
/// Represents `<XDF xml:lang=".." XdfTypeSyntaxVersion="..">`.
#[derive(Debug, Serialize)]
#[serde(rename = "XDF")]
pub struct Xdf {
    #[serde(rename = "@xml:lang")]
    pub lang: String,

    #[serde(rename = "@XdfTypeSyntaxVersion")]
    pub version: String,

    #[serde(rename = "Instances")]
    pub instances: Instances,
}

/// Container for all `<Parent>` groups.
#[derive(Debug, Serialize, Default)]
pub struct Instances {
    #[serde(rename = "Parent")]
    pub parent: Vec<Parent>,
}

/// A topology path and its heterogeneous child elements.
#[derive(Debug, Serialize, Default)]
pub struct Parent {
    #[serde(rename = "@Path")]
    pub path: String,

    /// Each variant serializes as an element named after the variant.
    #[serde(rename = "$value")]
    pub elements: Vec<Element>,
}

/// Any element that may appear inside a `<Parent>`.
#[derive(Debug, Serialize)]
pub enum Element {
    Analog(Analog),
    Discrete(Discrete),
    Breaker(Breaker),
    IfsPoint(IfsPoint),
    Terminal(LinkedTerminal),
}
