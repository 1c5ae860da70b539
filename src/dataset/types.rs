use csv::StringRecord;

use crate::error::AppError;

/// Header plus data rows of one CSV file.
///
/// Each row is keyed by position against `headers`; the reader rejects rows
/// whose field count differs from the header.
#[derive(Debug, Clone, Default)]
pub(crate) struct Dataset {
    pub(crate) headers: StringRecord,
    pub(crate) rows: Vec<StringRecord>,
}

impl Dataset {
    pub(crate) fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header
    pub(crate) fn column_index(&self, name: &str) -> Result<usize, AppError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
            })
    }
}
