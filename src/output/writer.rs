use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::dataset::Dataset;
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Write header and rows to `path`, creating or truncating it.
pub(crate) fn write_dataset(dataset: &Dataset, path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    writer.write_record(&dataset.headers).map_err(csv_err)?;
    for row in &dataset.rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| AppError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    if debug_enabled() {
        eprintln!("[DEBUG] Wrote {} rows to {}", dataset.len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    #[test]
    fn writes_header_then_rows() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        let dataset = Dataset::new(
            StringRecord::from(vec!["date", "home_team"]),
            vec![
                StringRecord::from(vec!["2023-05-05", "Brighton, Hove"]),
                StringRecord::from(vec!["2023-01-10", "Arsenal"]),
            ],
        );

        write_dataset(&dataset, &path).expect("written");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(
            content,
            "date,home_team\r\n2023-05-05,\"Brighton, Hove\"\r\n2023-01-10,Arsenal\r\n"
        );
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,content\nwith,many\nold,lines\n").expect("seed");

        let dataset = Dataset::new(StringRecord::from(vec!["date"]), Vec::new());
        write_dataset(&dataset, &path).expect("written");

        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "date\r\n");
    }

    #[test]
    fn missing_directory_is_create_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no-such-dir").join("out.csv");
        let dataset = Dataset::new(StringRecord::from(vec!["date"]), Vec::new());
        let err = write_dataset(&dataset, &path).unwrap_err();
        assert!(matches!(err, AppError::Create { .. }));
    }
}
