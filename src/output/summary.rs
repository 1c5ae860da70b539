use std::path::Path;

use serde::Serialize;

use crate::cli::SortOrder;
use crate::error::AppError;

/// Outcome of one successful run
#[derive(Debug, Serialize)]
pub(crate) struct Summary {
    pub(crate) rows: usize,
    pub(crate) output: String,
    pub(crate) order: &'static str,
    #[serde(skip)]
    direction: &'static str,
}

impl Summary {
    pub(crate) fn new(rows: usize, output: &Path, order: SortOrder) -> Self {
        Self {
            rows,
            output: output.display().to_string(),
            order: order.as_str(),
            direction: order.describe(),
        }
    }

    pub(crate) fn line(&self) -> String {
        format!(
            "Sorted {} rows by date ({}) and saved to {}",
            self.rows, self.direction, self.output
        )
    }
}

/// Confirmation line, or the summary as pretty JSON
pub(crate) fn render_summary(summary: &Summary, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(summary)?)
    } else {
        Ok(summary.line())
    }
}

pub(crate) fn print_summary(summary: &Summary, json: bool) -> Result<(), AppError> {
    println!("{}", render_summary(summary, json)?);
    Ok(())
}
