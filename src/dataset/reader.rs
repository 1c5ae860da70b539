use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::dataset::Dataset;
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Read a whole CSV file into memory, first line as header.
pub(crate) fn read_dataset(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|source| AppError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = reader.headers().map_err(csv_err)?.clone();
    let rows = reader
        .records()
        .collect::<Result<Vec<StringRecord>, _>>()
        .map_err(csv_err)?;

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Read {} rows ({} columns) from {}",
            rows.len(),
            headers.len(),
            path.display()
        );
    }

    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn reads_header_and_rows_in_order() {
        let file = csv_file("date,home_team\n2023-01-10,A\n2023-05-05,B\n");
        let dataset = read_dataset(file.path()).expect("dataset");
        assert_eq!(dataset.headers, vec!["date", "home_team"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(&dataset.rows[0][1], "A");
        assert_eq!(&dataset.rows[1][1], "B");
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let file = csv_file("date,home_team\n");
        let dataset = read_dataset(file.path()).expect("dataset");
        assert!(dataset.is_empty());
        assert_eq!(dataset.headers.len(), 2);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let file = csv_file("date,home_team\n2023-01-10,\"Brighton, Hove\"\n");
        let dataset = read_dataset(file.path()).expect("dataset");
        assert_eq!(&dataset.rows[0][1], "Brighton, Hove");
    }

    #[test]
    fn utf8_bom_is_stripped_from_header() {
        let file = csv_file("\u{feff}date,home_team\n2023-01-10,A\n");
        let dataset = read_dataset(file.path()).expect("dataset");
        assert_eq!(dataset.headers, vec!["date", "home_team"]);
        assert_eq!(dataset.column_index("date").ok(), Some(0));
    }

    #[test]
    fn ragged_row_is_csv_error() {
        let file = csv_file("date,home_team\n2023-01-10,A,extra\n");
        let err = read_dataset(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_dataset(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, AppError::Open { .. }));
    }
}
