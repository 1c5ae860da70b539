//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::Settings;
use crate::config::{Config, ConfigSortOrder};
use crate::consts::{DEFAULT_DATE_COLUMN, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first (default)
    #[default]
    Desc,
}

impl SortOrder {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

impl From<ConfigSortOrder> for SortOrder {
    fn from(order: ConfigSortOrder) -> Self {
        match order {
            ConfigSortOrder::Asc => SortOrder::Asc,
            ConfigSortOrder::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "matchsort")]
#[command(about = "Sort football match CSV rows by date", version)]
pub(crate) struct Cli {
    /// Input CSV file [default: football_matches.csv]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) input: Option<PathBuf>,

    /// Output CSV file [default: sorted_football_matches.csv]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Column holding the match date (YYYY-MM-DD) [default: date]
    #[arg(short, long, value_name = "NAME")]
    pub(crate) date_column: Option<String>,

    /// Sort order for rows [default: desc]
    #[arg(long, value_enum)]
    pub(crate) order: Option<SortOrder>,

    /// Print the run summary as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(self, config: Config) -> Settings {
        Settings {
            input: self
                .input
                .or(config.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: self
                .output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            date_column: self
                .date_column
                .or(config.date_column)
                .unwrap_or_else(|| DEFAULT_DATE_COLUMN.to_string()),
            order: self
                .order
                .or(config.order.map(SortOrder::from))
                .unwrap_or_default(),
            json: self.json,
            debug: self.debug || config.debug,
        }
    }
}
