// crates/scada-xdf/src/resolver/mod.rs

//! Runs the row passes that turn a validated table into points, network-model
//! elements and breaker links.
//!
//! This module contains the `transform` orchestrator and sub-modules for each
//! derived output.

use crate::error::XdfError;
use crate::registry::TemplateRegistry;
use crate::table::{validate_headers, Table, OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
use crate::types::{BreakerLinks, IfsPoint, NetworkElement};
use core::fmt;
use log::{debug, warn};

// --- Sub-modules ---

mod breaker;
mod elements;
mod points;

pub use breaker::{resolve_breaker_links, LINKED_MEASUREMENTS};
pub use elements::instantiate_element;
pub use points::{build_point, display_name, BREAKER_CODE};

/// A recoverable, row-scoped problem. The row is skipped for the affected
/// output and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowWarning {
    /// The `ELEMENT` cell is empty; the row produces nothing.
    EmptyElement { row: usize },
    /// No template is registered for the element code.
    TemplateNotFound { row: usize, code: String },
    /// The template exists but has no network-model form.
    NotInstantiable { row: usize, code: String },
}

impl RowWarning {
    /// 1-based data row number (the header row is not counted).
    pub fn row(&self) -> usize {
        match self {
            RowWarning::EmptyElement { row }
            | RowWarning::TemplateNotFound { row, .. }
            | RowWarning::NotInstantiable { row, .. } => *row,
        }
    }
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::EmptyElement { row } => write!(f, "row {}: empty ELEMENT, skipped", row),
            RowWarning::TemplateNotFound { row, code } => {
                write!(f, "row {}: no template for element '{}'", row, code)
            }
            RowWarning::NotInstantiable { row, code } => write!(
                f,
                "row {}: template '{}' cannot be placed in the network model",
                row, code
            ),
        }
    }
}

/// Everything derived from one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformation {
    /// One point per row with a non-empty element code, in row order.
    pub points: Vec<IfsPoint>,
    /// One element per row whose code matched an instantiable template.
    pub elements: Vec<NetworkElement>,
    pub breaker_links: Option<BreakerLinks>,
    pub warnings: Vec<RowWarning>,
}

/// Validates the header and runs the point, element and breaker-link passes.
///
/// # Errors
/// Returns `XdfError::MissingColumns` before any row is processed if a
/// required column is absent. Row-level problems never fail; they are
/// collected in [`Transformation::warnings`].
pub fn transform(table: &Table, registry: &TemplateRegistry) -> Result<Transformation, XdfError> {
    validate_headers(table.headers(), &REQUIRED_COLUMNS)?;
    let absent = table.headers().missing(&OPTIONAL_COLUMNS);
    if !absent.is_empty() {
        debug!("Optional columns absent, using defaults: {}", absent.join(", "));
    }

    let mut out = Transformation::default();

    for (i, row) in table.rows().enumerate() {
        let row_no = i + 1;
        let code = row.value("ELEMENT");
        if code.is_empty() {
            warn!("Row {}: empty ELEMENT, skipping", row_no);
            out.warnings.push(RowWarning::EmptyElement { row: row_no });
            continue;
        }

        let template = registry.lookup(code);
        let is_breaker = code == BREAKER_CODE || template.is_some_and(|t| t.is_breaker());
        out.points.push(build_point(&row, is_breaker));

        let Some(template) = template else {
            warn!("Row {}: element '{}' not found in templates", row_no, code);
            out.warnings.push(RowWarning::TemplateNotFound {
                row: row_no,
                code: code.to_string(),
            });
            continue;
        };

        let name = display_name(code, row.value("INFO"));
        match instantiate_element(template, &name, row.value("AOR")) {
            Some(element) => {
                debug!("Row {}: instantiated {} '{}'", row_no, template.kind(), name);
                out.elements.push(element);
            }
            None => {
                warn!(
                    "Row {}: template '{}' is an IfsPoint and cannot be instantiated",
                    row_no, code
                );
                out.warnings.push(RowWarning::NotInstantiable {
                    row: row_no,
                    code: code.to_string(),
                });
            }
        }
    }

    out.breaker_links = resolve_breaker_links(table);
    Ok(out)
}
