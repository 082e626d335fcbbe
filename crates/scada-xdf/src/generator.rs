// crates/scada-xdf/src/generator.rs

//! End-to-end generation: table in, `{B3}_IFS.xml` / `{B3}_IMM.xml` out.

use crate::builder::{assemble_documents, save_xdf_to_string, StationContext};
use crate::config::{AppConfig, DasipResolver};
use crate::error::XdfError;
use crate::registry::TemplateRegistry;
use crate::resolver::{transform, RowWarning};
use crate::table::{read_csv_path, validate_headers, Table, REQUIRED_COLUMNS};
use crate::types::DocumentKind;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Outcome of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, addressing document first.
    pub written: Vec<PathBuf>,
    /// Document kinds not written because they had no elements.
    pub skipped: Vec<DocumentKind>,
    pub warnings: Vec<RowWarning>,
}

/// Runs the full pipeline with injected configuration, DASIP resolver and
/// template registry.
pub struct Generator<'a> {
    config: &'a AppConfig,
    resolver: &'a dyn DasipResolver,
    registry: &'a TemplateRegistry,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a AppConfig,
        resolver: &'a dyn DasipResolver,
        registry: &'a TemplateRegistry,
    ) -> Self {
        Self {
            config,
            resolver,
            registry,
        }
    }

    /// Reads a tabular file and runs [`Generator::generate`] on it.
    ///
    /// # Errors
    /// Returns `XdfError::UnsupportedFormat` if the file extension is not in
    /// `files.supported_input_formats`.
    pub fn generate_from_path(&self, path: impl AsRef<Path>) -> Result<GenerationReport, XdfError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if !self.config.is_format_supported(extension) {
            return Err(XdfError::UnsupportedFormat(extension.to_string()));
        }

        info!("Processing '{}'", path.display());
        let table = read_csv_path(path)?;
        self.generate(&table)
    }

    /// Transforms `table` and writes one file per non-empty document into the
    /// configured output directory.
    ///
    /// Station values come from the first row with a non-empty `ELEMENT`, the
    /// same rows that produce points.
    pub fn generate(&self, table: &Table) -> Result<GenerationReport, XdfError> {
        validate_headers(table.headers(), &REQUIRED_COLUMNS)?;

        let Some(station_row) = table.rows().find(|row| !row.value("ELEMENT").is_empty()) else {
            warn!("Input has no rows with an ELEMENT, nothing to generate");
            return Ok(GenerationReport::default());
        };
        let station = StationContext::from_row(&station_row);

        let transformation = transform(table, self.registry)?;
        info!(
            "Station '{}': {} points, {} elements, {} warnings",
            station.b3,
            transformation.points.len(),
            transformation.elements.len(),
            transformation.warnings.len()
        );

        let documents = assemble_documents(&transformation, &station, self.resolver);
        let mut report = GenerationReport {
            warnings: transformation.warnings,
            ..Default::default()
        };

        for (kind, document) in [
            (DocumentKind::Addressing, &documents.addressing),
            (DocumentKind::NetworkModel, &documents.network_model),
        ] {
            let Some(document) = document else {
                info!("No elements for {:?} document, skipping", kind);
                report.skipped.push(kind);
                continue;
            };

            let xml = save_xdf_to_string(document, &self.config.xml)?;
            self.config.ensure_output_dir()?;
            let path = self
                .config
                .output_path(&format!("{}{}", documents.station, self.config.suffix(kind)));
            std::fs::write(&path, xml).map_err(|e| XdfError::io(&path, e))?;
            info!(
                "Wrote '{}' ({} elements)",
                path.display(),
                document.element_count()
            );
            report.written.push(path);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: &str = r#"{"P": {"Analog": {"Name": "P"}}}"#;

    fn config(dir: &Path) -> AppConfig {
        let mut cfg =
            AppConfig::from_yaml_str("files:\n  templates: t.json\n  dasip_mapping: d.yaml\n")
                .unwrap();
        cfg.files.output_dir = dir.join("out");
        cfg
    }

    fn default_path(_: &str) -> String {
        "SCADA/RTU".to_string()
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        let generator = Generator::new(&cfg, &default_path, &registry);

        match generator.generate_from_path(dir.path().join("input.xlsx")) {
            Err(XdfError::UnsupportedFormat(ext)) => assert_eq!(ext, "xlsx"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_header_only_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        let generator = Generator::new(&cfg, &default_path, &registry);

        let table = Table::new(&REQUIRED_COLUMNS, Vec::new());
        let report = generator.generate(&table).unwrap();
        assert!(report.written.is_empty());
        assert!(!cfg.files.output_dir.exists());
    }

    #[test]
    fn test_points_only_skips_network_model() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        let generator = Generator::new(&cfg, &default_path, &registry);

        let row = ["X", "Stat", "DI", "A", "B", "ST1", "R1", "E", "N"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let table = Table::new(&REQUIRED_COLUMNS, vec![row]);
        let report = generator.generate(&table).unwrap();

        assert_eq!(report.written, vec![cfg.files.output_dir.join("ST1_IFS.xml")]);
        assert_eq!(report.skipped, vec![DocumentKind::NetworkModel]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.written[0].exists());
    }

    fn cells(values: [&str; 9]) -> Vec<String> {
        values.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_station_comes_from_first_row_with_element() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        let generator = Generator::new(&cfg, &default_path, &registry);

        let table = Table::new(
            &REQUIRED_COLUMNS,
            vec![
                cells(["", "", "", "", "", "", "", "", ""]),
                cells(["P", "MvMoment", "AI", "A", "B", "ST1", "R1", "E", "N"]),
            ],
        );
        let report = generator.generate(&table).unwrap();

        let imm_path = cfg.files.output_dir.join("ST1_IMM.xml");
        assert_eq!(
            report.written,
            vec![cfg.files.output_dir.join("ST1_IFS.xml"), imm_path.clone()]
        );
        let imm = std::fs::read_to_string(imm_path).unwrap();
        assert!(imm.contains("<Parent Path=\"ELECTRICITY/NETWORK/E/N/A/B/ST1\">"));
        assert!(!imm.contains("ELECTRICITY/NETWORK/////"));
    }

    #[test]
    fn test_only_blank_rows_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let registry = TemplateRegistry::from_json_str(TEMPLATES).unwrap();
        let generator = Generator::new(&cfg, &default_path, &registry);

        let table = Table::new(
            &REQUIRED_COLUMNS,
            vec![cells(["", "Stat", "DI", "A", "B", "ST1", "R1", "E", "N"])],
        );
        let report = generator.generate(&table).unwrap();
        assert!(report.written.is_empty());
        assert!(!cfg.files.output_dir.exists());
    }
}
