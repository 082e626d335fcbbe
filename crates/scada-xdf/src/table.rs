// crates/scada-xdf/src/table.rs

//! Tabular input: header map, typed row access and required-column validation.

use crate::error::XdfError;
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Columns that must be present in the header before any row is processed.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "ELEMENT", "INFO", "TYPE", "B1", "B2", "B3", "AOR", "EMPRESA", "REGION",
];

/// Columns consumed when present.
pub const OPTIONAL_COLUMNS: [&str; 8] = ["SBO", "MHB", "MMB", "MLB", "CHB", "CMB", "CLB", "DASIP"];

/// Maps a header name to its column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    indices: HashMap<String, usize>,
}

impl HeaderMap {
    /// Builds the map from a header row. Names are trimmed; on duplicates the
    /// last occurrence wins.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let indices = headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| (h.as_ref().trim().to_string(), i))
            .collect();
        Self { indices }
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.indices.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.indices.contains_key(column)
    }

    /// Columns from `columns` absent from this header, in the given order.
    pub fn missing(&self, columns: &[&str]) -> Vec<String> {
        columns
            .iter()
            .filter(|col| !self.contains(col))
            .map(|col| col.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Confirms every column in `required` is present in `headers`.
///
/// # Errors
/// Returns `XdfError::MissingColumns` listing every absent column, in the order
/// given by `required`.
pub fn validate_headers(headers: &HeaderMap, required: &[&str]) -> Result<(), XdfError> {
    let missing = headers.missing(required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(XdfError::MissingColumns(missing))
    }
}

/// A header map plus its data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: HeaderMap,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: HeaderMap::from_headers(headers),
            rows,
        }
    }

    /// Builds a table from raw records where the first record is the header row.
    ///
    /// # Errors
    /// Returns `XdfError::EmptyInput` if there is no header row.
    pub fn from_records(mut records: Vec<Vec<String>>) -> Result<Self, XdfError> {
        if records.is_empty() {
            return Err(XdfError::EmptyInput);
        }
        let header_row = records.remove(0);
        Ok(Self::new(header_row.as_slice(), records))
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |fields| Row {
            headers: &self.headers,
            fields,
        })
    }

    pub fn first_row(&self) -> Option<Row<'_>> {
        self.rows().next()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read-only view of one data row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a HeaderMap,
    fields: &'a [String],
}

impl<'a> Row<'a> {
    /// The trimmed cell for `column`, or `None` if the column is not in the
    /// header or the row is too short to reach it.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.index_of(column)?;
        self.fields.get(idx).map(|v| v.trim())
    }

    /// Like [`Row::get`], but also treats an empty cell as absent.
    pub fn non_empty(&self, column: &str) -> Option<&'a str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// The cell for `column`, or `""` when absent.
    pub fn value(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or_default()
    }
}

/// Reads CSV data into a [`Table`]. The first record is the header row.
///
/// Records may have differing lengths and every field is trimmed.
///
/// # Errors
/// Returns `XdfError::CsvReading` on malformed CSV and `XdfError::EmptyInput`
/// when there is not at least a header and one data row.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Table, XdfError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if records.len() < 2 {
        return Err(XdfError::EmptyInput);
    }
    Table::from_records(records)
}

/// Opens `path` and reads it with [`read_csv`].
pub fn read_csv_path(path: impl AsRef<Path>) -> Result<Table, XdfError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| XdfError::io(path, e))?;
    read_csv(io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> HeaderMap {
        HeaderMap::from_headers(["ELEMENT", " INFO ", "TYPE"])
    }

    #[test]
    fn test_header_names_are_trimmed() {
        let map = headers();
        assert_eq!(map.index_of("INFO"), Some(1));
        assert_eq!(map.index_of("AOR"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_validate_headers_reports_all_missing_columns() {
        let err = validate_headers(&headers(), &REQUIRED_COLUMNS).unwrap_err();
        match err {
            XdfError::MissingColumns(cols) => {
                assert_eq!(cols, vec!["B1", "B2", "B3", "AOR", "EMPRESA", "REGION"]);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_optional_columns() {
        let map = HeaderMap::from_headers(REQUIRED_COLUMNS.iter().chain(["MHB", "DASIP"].iter()));
        assert_eq!(
            map.missing(&OPTIONAL_COLUMNS),
            vec!["SBO", "MMB", "MLB", "CHB", "CMB", "CLB"]
        );
        assert!(HeaderMap::from_headers(OPTIONAL_COLUMNS)
            .missing(&OPTIONAL_COLUMNS)
            .is_empty());
    }

    #[test]
    fn test_validate_headers_accepts_complete_header() {
        let map = HeaderMap::from_headers(REQUIRED_COLUMNS);
        assert!(validate_headers(&map, &REQUIRED_COLUMNS).is_ok());
    }

    #[test]
    fn test_row_accessor_distinguishes_absent_and_empty() {
        let table = Table::new(
            &["ELEMENT", "SBO", "MHB"],
            vec![vec!["P".to_string(), " ".to_string()]],
        );
        let row = table.first_row().unwrap();
        assert_eq!(row.get("ELEMENT"), Some("P"));
        assert_eq!(row.get("SBO"), Some(""));
        assert_eq!(row.non_empty("SBO"), None);
        // Column exists but the row is too short to reach it.
        assert_eq!(row.get("MHB"), None);
        // Column not in header.
        assert_eq!(row.get("CLB"), None);
        assert_eq!(row.value("CLB"), "");
    }

    #[test]
    fn test_read_csv_flexible_and_trimmed() {
        let data = "ELEMENT,INFO,TYPE\nP, MvMoment ,AI\nQ,MvMoment\n";
        let table = read_csv(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].get("INFO"), Some("MvMoment"));
        assert_eq!(rows[1].get("TYPE"), None);
    }

    #[test]
    fn test_read_csv_requires_data_row() {
        let result = read_csv("ELEMENT,INFO\n".as_bytes());
        assert!(matches!(result, Err(XdfError::EmptyInput)));
    }

    #[test]
    fn test_from_records_without_header() {
        assert!(matches!(
            Table::from_records(Vec::new()),
            Err(XdfError::EmptyInput)
        ));
    }
}
