// crates/scada-xdf/src/config.rs

//! YAML configuration for the generator and the DASIP path mapping.

use crate::error::XdfError;
use crate::types::DocumentKind;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_DASIP_PATH: &str = "SCADA/RTU";

/// Top-level application configuration (`config.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppInfo,
    pub files: FilesConfig,
    pub xml: XmlConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Locations of the inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// JSON template registry.
    pub templates: PathBuf,
    /// DASIP mapping YAML.
    pub dasip_mapping: PathBuf,
    pub output_dir: PathBuf,
    /// Accepted input file extensions, without the dot.
    pub supported_input_formats: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            templates: PathBuf::new(),
            dasip_mapping: PathBuf::new(),
            output_dir: PathBuf::from("output"),
            supported_input_formats: vec!["csv".to_string()],
        }
    }
}

/// Attributes of the `<XDF>` root and output formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Written as `xml:lang`.
    pub lang: String,
    /// Written as `XdfTypeSyntaxVersion`.
    pub version: String,
    /// One indentation level. Empty disables pretty-printing.
    pub indent: String,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            lang: "EN".to_string(),
            version: "2.0.00".to_string(),
            indent: "    ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name suffix per document kind key (`ifs`, `imm`).
    pub suffixes: BTreeMap<String, String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
        }
    }
}

fn default_suffixes() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("ifs".to_string(), "_IFS.xml".to_string()),
        ("imm".to_string(), "_IMM.xml".to_string()),
    ])
}

impl AppConfig {
    /// Reads and validates a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, XdfError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| XdfError::io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Parses YAML, fills in defaults for omitted values and validates.
    ///
    /// # Errors
    /// Returns `XdfError::ConfigParsing` for malformed YAML and
    /// `XdfError::InvalidConfig` if the templates path, DASIP mapping path, XML
    /// language or XML version is empty, or the indent is not ASCII.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, XdfError> {
        let mut cfg: AppConfig = serde_yaml::from_str(yaml)?;
        cfg.apply_defaults();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replaces values that were given but left blank.
    fn apply_defaults(&mut self) {
        if self.files.output_dir.as_os_str().is_empty() {
            self.files.output_dir = FilesConfig::default().output_dir;
        }
        if self.files.supported_input_formats.is_empty() {
            self.files.supported_input_formats = FilesConfig::default().supported_input_formats;
        }
        if self.logging.level.is_empty() {
            self.logging.level = LoggingConfig::default().level;
        }
        for (key, suffix) in default_suffixes() {
            self.output.suffixes.entry(key).or_insert(suffix);
        }
    }

    fn validate(&self) -> Result<(), XdfError> {
        if self.files.templates.as_os_str().is_empty() {
            return Err(XdfError::InvalidConfig("templates path not specified"));
        }
        if self.files.dasip_mapping.as_os_str().is_empty() {
            return Err(XdfError::InvalidConfig("dasip mapping path not specified"));
        }
        if self.xml.lang.is_empty() {
            return Err(XdfError::InvalidConfig("xml lang not specified"));
        }
        if self.xml.version.is_empty() {
            return Err(XdfError::InvalidConfig("xml version not specified"));
        }
        if !self.xml.indent.is_ascii() {
            return Err(XdfError::InvalidConfig("xml indent must be ASCII"));
        }
        Ok(())
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.files.output_dir.join(file_name)
    }

    /// Creates the output directory and any missing parents.
    pub fn ensure_output_dir(&self) -> Result<(), XdfError> {
        std::fs::create_dir_all(&self.files.output_dir)
            .map_err(|e| XdfError::io(&self.files.output_dir, e))
    }

    /// Case-insensitive check of a file extension against `supported_input_formats`.
    pub fn is_format_supported(&self, extension: &str) -> bool {
        self.files
            .supported_input_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(extension))
    }

    /// Output file suffix for `kind`.
    pub fn suffix(&self, kind: DocumentKind) -> &str {
        self.output
            .suffixes
            .get(kind.suffix_key())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Maps a DASIP code to the addressing document's parent path.
pub trait DasipResolver {
    fn resolve(&self, code: &str) -> String;
}

impl<F> DasipResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, code: &str) -> String {
        self(code)
    }
}

/// DASIP code to parent path mapping (`dasip.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DasipConfig {
    /// Used for codes not present in the mapping.
    pub default_path: String,
    pub dasip_mapping: BTreeMap<String, String>,
}

impl Default for DasipConfig {
    fn default() -> Self {
        Self {
            default_path: DEFAULT_DASIP_PATH.to_string(),
            dasip_mapping: BTreeMap::new(),
        }
    }
}

impl DasipConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, XdfError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| XdfError::io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// # Errors
    /// Returns `XdfError::ConfigParsing` for malformed YAML and
    /// `XdfError::EmptyDasipMapping` if no codes are mapped.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, XdfError> {
        let mut cfg: DasipConfig = serde_yaml::from_str(yaml)?;
        if cfg.default_path.is_empty() {
            cfg.default_path = DEFAULT_DASIP_PATH.to_string();
        }
        if cfg.dasip_mapping.is_empty() {
            return Err(XdfError::EmptyDasipMapping);
        }
        Ok(cfg)
    }
}

impl DasipResolver for DasipConfig {
    fn resolve(&self, code: &str) -> String {
        match self.dasip_mapping.get(code) {
            Some(path) => path.clone(),
            None => {
                warn!(
                    "Unrecognized DASIP value '{}', using '{}'",
                    code, self.default_path
                );
                self.default_path.clone()
            }
        }
    }
}
