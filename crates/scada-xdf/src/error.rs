// crates/scada-xdf/src/error.rs

use quick_xml::errors::serialize::SeError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort an XDF generation run.
///
/// Row-scoped problems (empty element codes, unknown templates) are not errors;
/// they are collected as [`RowWarning`](crate::RowWarning)s instead.
#[derive(Debug)]
pub enum XdfError {
    /// The template registry source was not valid JSON, or an entry did not
    /// name exactly one element variant.
    TemplateParsing(serde_json::Error),

    /// The template registry source parsed but contained no definitions.
    EmptyRegistry,

    /// The input header lacks one or more required columns.
    MissingColumns(Vec<String>),

    /// The tabular input has no header row or no data rows.
    EmptyInput,

    /// An error from the underlying `csv` reader.
    CsvReading(csv::Error),

    /// An error from the underlying YAML deserializer.
    ConfigParsing(serde_yaml::Error),

    /// The configuration parsed but a mandatory value is empty.
    InvalidConfig(&'static str),

    /// The DASIP configuration has no code-to-path entries.
    EmptyDasipMapping,

    /// The input file extension is not listed in `supported_input_formats`.
    UnsupportedFormat(String),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// A file could not be read or written.
    Io { path: PathBuf, source: io::Error },
}

impl XdfError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        XdfError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for XdfError {
    fn from(e: serde_json::Error) -> Self {
        XdfError::TemplateParsing(e)
    }
}

impl From<serde_yaml::Error> for XdfError {
    fn from(e: serde_yaml::Error) -> Self {
        XdfError::ConfigParsing(e)
    }
}

impl From<csv::Error> for XdfError {
    fn from(e: csv::Error) -> Self {
        XdfError::CsvReading(e)
    }
}

impl From<SeError> for XdfError {
    fn from(e: SeError) -> Self {
        XdfError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for XdfError {
    fn from(e: fmt::Error) -> Self {
        XdfError::FmtError(e)
    }
}

impl fmt::Display for XdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XdfError::TemplateParsing(e) => write!(f, "Template parsing error: {}", e),
            XdfError::EmptyRegistry => write!(f, "Template registry contains no definitions"),
            XdfError::MissingColumns(columns) => {
                write!(f, "Missing required columns: {}", columns.join(", "))
            }
            XdfError::EmptyInput => {
                write!(f, "Input must contain a header row and at least one data row")
            }
            XdfError::CsvReading(e) => write!(f, "CSV reading error: {}", e),
            XdfError::ConfigParsing(e) => write!(f, "Configuration parsing error: {}", e),
            XdfError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            XdfError::EmptyDasipMapping => write!(f, "DASIP mapping is empty"),
            XdfError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported input format: '{}'", ext)
            }
            XdfError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            XdfError::FmtError(e) => write!(f, "Formatting error: {}", e),
            XdfError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for XdfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XdfError::TemplateParsing(e) => Some(e),
            XdfError::CsvReading(e) => Some(e),
            XdfError::ConfigParsing(e) => Some(e),
            XdfError::XmlSerializing(e) => Some(e),
            XdfError::FmtError(e) => Some(e),
            XdfError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
