pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::parse_match_date;
pub(crate) use debug::{debug_enabled, set_debug};
