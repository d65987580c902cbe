//! CSV file reading with header detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use csviewer_model::{CellValue, Table};

use crate::error::{IngestError, Result};

use super::header::{header_names, positional_names, sniff_header};

/// Turns a source location into a [`Table`].
///
/// The data pool only talks to loaders through this trait, so tests and
/// alternative front ends can substitute their own.
pub trait TableLoader {
    fn load(&self, location: &Path) -> Result<Table>;
}

/// Comma-delimited UTF-8 loader backed by the `csv` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl TableLoader for CsvLoader {
    fn load(&self, location: &Path) -> Result<Table> {
        read_csv_table(location)
    }
}

/// A raw record and the 1-based line it started on.
struct RawRecord {
    line: u64,
    fields: Vec<String>,
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let line = err.position().map(csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::io(path, source),
        _ => IngestError::parse(path, line, message),
    }
}

/// Reads every record of the source once; blank lines are skipped.
fn read_records<R: Read>(path: &Path, input: R) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| csv_error(path, err))?;
        let line = record
            .position()
            .map_or(index as u64 + 1, csv::Position::line);
        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if records.is_empty()
            && let Some(first) = fields.first_mut()
        {
            // Skip BOM if present
            *first = first.trim_start_matches('\u{feff}').to_string();
        }
        records.push(RawRecord { line, fields });
    }
    Ok(records)
}

/// Reads a CSV file into a [`Table`].
///
/// The first row becomes the header when [`sniff_header`] accepts it;
/// otherwise columns are named `column-0`, `column-1`, … and every row is
/// data. A row whose width differs from the column count fails the whole
/// load with a parse error naming its line.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let records = read_records(path, file)?;
    if records.is_empty() {
        return Err(IngestError::parse(path, None, "source contains no rows"));
    }

    let fields: Vec<Vec<String>> = records.iter().map(|r| r.fields.clone()).collect();
    let has_header = sniff_header(&fields);
    let (columns, data) = if has_header {
        let columns = header_names(&records[0].fields)
            .map_err(|e| IngestError::parse(path, Some(records[0].line), e.to_string()))?;
        (columns, &records[1..])
    } else {
        (positional_names(records[0].fields.len()), &records[..])
    };

    let mut table = Table::new(columns, has_header)
        .map_err(|e| IngestError::parse(path, Some(records[0].line), e.to_string()))?;
    for record in data {
        let cells = record.fields.iter().map(|raw| CellValue::parse(raw)).collect();
        table
            .push_row(cells)
            .map_err(|e| IngestError::parse(path, Some(record.line), e.to_string()))?;
    }

    tracing::debug!(
        path = %path.display(),
        header = has_header,
        columns = table.width(),
        rows = table.height(),
        "loaded CSV table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_with_header() {
        let file = create_temp_csv("a,b\n1,2\n3,4\n");
        let table = read_csv_table(file.path()).unwrap();

        assert!(table.header_detected());
        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(table.height(), 2);
        assert_eq!(
            table.rows()[1].cells(),
            [CellValue::Number(3.0), CellValue::Number(4.0)]
        );
    }

    #[test]
    fn test_read_without_header() {
        let file = create_temp_csv("1,2\n3,4\n");
        let table = read_csv_table(file.path()).unwrap();

        assert!(!table.header_detected());
        assert_eq!(table.columns(), ["column-0", "column-1"]);
        assert_eq!(table.height(), 2);
        assert_eq!(
            table.rows()[0].cells(),
            [CellValue::Number(1.0), CellValue::Number(2.0)]
        );
    }

    #[test]
    fn test_read_with_bom() {
        let file = create_temp_csv("\u{feff}a,b\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["a", "b"]);
    }

    #[test]
    fn test_ragged_row_names_its_line() {
        let file = create_temp_csv("a,b\n1,2\n3,4,5\n");
        let err = read_csv_table(file.path()).unwrap_err();

        match err {
            IngestError::Parse { line, message, .. } => {
                assert_eq!(line, Some(3));
                assert!(message.contains("3 cells"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_is_a_parse_error() {
        let file = create_temp_csv("");
        let err = read_csv_table(file.path()).unwrap_err();

        assert!(matches!(err, IngestError::Parse { line: None, .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();

        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,b\n1,\xff\xfe\n").unwrap();
        let err = read_csv_table(file.path()).unwrap_err();

        assert!(matches!(err, IngestError::Parse { .. }));
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let file = create_temp_csv("name,value\n\"a, b\",1\n\"c\",2\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(
            table.rows()[0].cells()[0],
            CellValue::Text("a, b".to_string())
        );
    }
}
