use chrono::NaiveDate;

use crate::cli::SortOrder;
use crate::dataset::Dataset;
use crate::error::AppError;
use crate::utils::parse_match_date;

impl Dataset {
    /// Stable sort of all rows by the date in `column`.
    ///
    /// Every date is parsed before any row moves, so a bad value leaves the
    /// dataset untouched.
    pub(crate) fn sort_by_date(&mut self, column: &str, order: SortOrder) -> Result<(), AppError> {
        let index = self.column_index(column)?;

        let dates = self
            .rows
            .iter()
            .map(|row| {
                let value = row.get(index).unwrap_or_default();
                parse_match_date(value).ok_or_else(|| AppError::InvalidDate {
                    line: row.position().map_or(0, |p| p.line()),
                    column: column.to_string(),
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<NaiveDate>, _>>()?;

        let mut keyed: Vec<_> = dates.into_iter().zip(std::mem::take(&mut self.rows)).collect();
        match order {
            SortOrder::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            SortOrder::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        }
        self.rows = keyed.into_iter().map(|(_, row)| row).collect();

        Ok(())
    }
}
