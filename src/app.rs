use std::path::PathBuf;
use std::time::Instant;

use crate::cli::SortOrder;
use crate::dataset::read_dataset;
use crate::error::AppError;
use crate::output::{Summary, write_dataset};
use crate::utils::debug_enabled;

/// Fully resolved run options (CLI merged over config over defaults)
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) date_column: String,
    pub(crate) order: SortOrder,
    pub(crate) json: bool,
    pub(crate) debug: bool,
}

/// Read, sort and write one file. Nothing is written unless every row parsed.
pub(crate) fn run(settings: &Settings) -> Result<Summary, AppError> {
    let start = Instant::now();

    let mut dataset = read_dataset(&settings.input)?;
    if dataset.is_empty() && debug_enabled() {
        eprintln!("[DEBUG] {} has a header but no rows", settings.input.display());
    }
    dataset.sort_by_date(&settings.date_column, settings.order)?;
    if debug_enabled() {
        eprintln!(
            "[DEBUG] Sorted {} rows by {} ({}) in {:.2}ms",
            dataset.len(),
            settings.date_column,
            settings.order.as_str(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    write_dataset(&dataset, &settings.output)?;

    Ok(Summary::new(dataset.len(), &settings.output, settings.order))
}
