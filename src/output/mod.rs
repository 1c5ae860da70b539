mod summary;
mod writer;

pub(crate) use summary::{Summary, print_summary};
pub(crate) use writer::write_dataset;
