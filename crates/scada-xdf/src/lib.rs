// src/lib.rs

#![doc = "Builds SCADA XDF documents from tabular signal lists and element templates."]
#![doc = ""]
#![doc = "Each input row describes one signal of a station. Rows are matched against a"]
#![doc = "JSON template registry and produce two XML documents named after the station:"]
#![doc = "- `{B3}_IFS.xml`: addressing points (monitor/control addresses) under a DASIP path."]
#![doc = "- `{B3}_IMM.xml`: network-model elements, plus the breaker terminal's measurement links."]
#![doc = ""]
#![doc = "Entry points:"]
#![doc = "- `TemplateRegistry::from_path`: loading the element templates."]
#![doc = "- `transform`: running the row passes over a `Table`."]
#![doc = "- `assemble_documents` / `save_xdf_to_string`: building and rendering documents."]
#![doc = "- `Generator`: the full file-to-files pipeline driven by `AppConfig`."]

// --- Crate Modules ---

mod builder;
mod config;
mod error;
mod generator;
mod model;
mod registry;
mod resolver;
mod table;
mod types;

// --- Public API Re-exports ---

pub use builder::{assemble_documents, save_xdf_to_string, StationContext};
pub use config::{
    AppConfig, AppInfo, DasipConfig, DasipResolver, FilesConfig, LoggingConfig, OutputConfig,
    XmlConfig,
};
pub use error::XdfError;
pub use generator::{GenerationReport, Generator};
pub use registry::{TemplateRegistry, TemplateStats};
pub use resolver::{
    build_point, display_name, instantiate_element, resolve_breaker_links, transform,
    RowWarning, Transformation, BREAKER_CODE, LINKED_MEASUREMENTS,
};
pub use table::{
    read_csv, read_csv_path, validate_headers, HeaderMap, Row, Table, OPTIONAL_COLUMNS,
    REQUIRED_COLUMNS,
};
pub use types::{
    Analog, AnalogInfo, AnalogValue, Breaker, BreakerLinks, Discrete, DiscreteInfo,
    DiscreteValue, DocumentKind, DocumentSet, ElementTemplate, IfsPoint, IfsPointLink,
    LinkedTerminal, MeasurementLink, NetworkElement, Parent, Terminal, XdfDocument, XdfElement,
};
