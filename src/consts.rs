/// Match date layout in the input files: "2023-05-05"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column holding the match date unless overridden
pub(crate) const DEFAULT_DATE_COLUMN: &str = "date";

pub(crate) const DEFAULT_INPUT: &str = "football_matches.csv";
pub(crate) const DEFAULT_OUTPUT: &str = "sorted_football_matches.csv";

/// Overrides the config search path with a single file
pub(crate) const CONFIG_ENV: &str = "MATCHSORT_CONFIG";
